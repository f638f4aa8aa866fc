//! Display-ready records, shaped like `ip -j -d link` and `ip -j -d addr`.
//!
//! Field names and string formats follow iproute2's JSON output so the
//! records serialize to the same documents. Optional attributes the kernel
//! did not send are left out of the JSON entirely.

use std::net;

use serde::Serialize;

use crate::types::{
    AddressFamily, Inet6AddrGenMode, LinkFlag, LinkMode, LinkType, OperState, Scope,
};

fn is_false(value: &bool) -> bool {
    !*value
}

/// One entry of `ip -j -d link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpLink {
    pub ifindex: u32,
    pub ifname: String,
    pub flags: Vec<LinkFlag>,
    pub mtu: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qdisc: Option<String>,
    pub operstate: OperState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkmode: Option<LinkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txqlen: Option<u32>,
    pub link_type: LinkType,
    /// Hardware address as lowercase colon-separated hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promiscuity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inet6_addr_gen_mode: Option<Inet6AddrGenMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tx_queues: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rx_queues: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gso_max_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gso_max_segs: Option<u32>,
}

/// One element of an interface's `addr_info` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddrInfo {
    pub family: AddressFamily,
    pub local: net::IpAddr,
    pub prefixlen: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<net::IpAddr>,
    pub scope: Scope,
    #[serde(skip_serializing_if = "is_false")]
    pub dynamic: bool,
    /// Never set; `ip` only reports it for addresses created with it.
    #[serde(skip_serializing_if = "is_false")]
    pub mngtmpaddr: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub noprefixroute: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Seconds; `u32::MAX` means forever.
    pub valid_life_time: u32,
    pub preferred_life_time: u32,
}

/// One entry of `ip -j -d addr`: the link fields plus its addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpAddr {
    pub ifindex: u32,
    pub ifname: String,
    pub flags: Vec<LinkFlag>,
    pub mtu: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qdisc: Option<String>,
    pub operstate: OperState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txqlen: Option<u32>,
    pub link_type: LinkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promiscuity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tx_queues: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_rx_queues: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gso_max_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gso_max_segs: Option<u32>,
    /// Addresses in the order the kernel reported them. Empty, never absent.
    pub addr_info: Vec<AddrInfo>,
}

impl IpAddr {
    /// Copy the shared fields of `link` and attach `addr_info`.
    pub fn from_link(link: IpLink, addr_info: Vec<AddrInfo>) -> Self {
        Self {
            ifindex: link.ifindex,
            ifname: link.ifname,
            flags: link.flags,
            mtu: link.mtu,
            qdisc: link.qdisc,
            operstate: link.operstate,
            group: link.group,
            txqlen: link.txqlen,
            link_type: link.link_type,
            address: link.address,
            broadcast: link.broadcast,
            promiscuity: link.promiscuity,
            min_mtu: link.min_mtu,
            max_mtu: link.max_mtu,
            num_tx_queues: link.num_tx_queues,
            num_rx_queues: link.num_rx_queues,
            gso_max_size: link.gso_max_size,
            gso_max_segs: link.gso_max_segs,
            addr_info,
        }
    }
}

/// Look up an interface by name in a listing.
pub trait FindLink {
    type Item;

    /// First entry whose `ifname` equals `name`.
    fn find_link(&self, name: &str) -> Option<&Self::Item>;
}

impl FindLink for [IpLink] {
    type Item = IpLink;

    fn find_link(&self, name: &str) -> Option<&IpLink> {
        self.iter().find(|link| link.ifname == name)
    }
}

impl FindLink for [IpAddr] {
    type Item = IpAddr;

    fn find_link(&self, name: &str) -> Option<&IpAddr> {
        self.iter().find(|entry| entry.ifname == name)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_link() -> IpLink {
        IpLink {
            ifindex: 2,
            ifname: "eth0".into(),
            flags: vec![LinkFlag::Broadcast, LinkFlag::Multicast, LinkFlag::Up, LinkFlag::LowerUp],
            mtu: 1500,
            qdisc: Some("fq_codel".into()),
            operstate: OperState::Up,
            linkmode: Some(LinkMode::Default),
            group: Some("default".into()),
            txqlen: Some(1000),
            link_type: LinkType::Ether,
            address: Some("52:54:00:12:34:56".into()),
            broadcast: Some("ff:ff:ff:ff:ff:ff".into()),
            promiscuity: Some(0),
            min_mtu: Some(68),
            max_mtu: Some(9000),
            inet6_addr_gen_mode: Some(Inet6AddrGenMode::Eui64),
            num_tx_queues: Some(4),
            num_rx_queues: Some(4),
            gso_max_size: Some(65536),
            gso_max_segs: Some(65535),
        }
    }

    pub(crate) fn sample_addr() -> AddrInfo {
        AddrInfo {
            family: AddressFamily::Inet,
            local: "192.168.1.10".parse().unwrap(),
            prefixlen: 24,
            broadcast: Some("192.168.1.255".parse().unwrap()),
            scope: Scope::Global,
            dynamic: true,
            mngtmpaddr: false,
            noprefixroute: false,
            label: Some("eth0".into()),
            valid_life_time: 86400,
            preferred_life_time: 43200,
        }
    }

    #[test]
    fn test_link_json_keys() {
        let value = serde_json::to_value(sample_link()).unwrap();
        assert_eq!(value["ifname"], "eth0");
        assert_eq!(value["flags"], serde_json::json!(["BROADCAST", "MULTICAST", "UP", "LOWER_UP"]));
        assert_eq!(value["operstate"], "UP");
        assert_eq!(value["linkmode"], "DEFAULT");
        assert_eq!(value["link_type"], "ether");
        assert_eq!(value["inet6_addr_gen_mode"], "eui64");
        assert_eq!(value["min_mtu"], 68);
    }

    #[test]
    fn test_absent_fields_omitted() {
        let mut link = sample_link();
        link.address = None;
        link.min_mtu = None;
        let value = serde_json::to_value(link).unwrap();
        assert!(value.get("address").is_none());
        assert!(value.get("min_mtu").is_none());
    }

    #[test]
    fn test_addr_json() {
        let value = serde_json::to_value(sample_addr()).unwrap();
        assert_eq!(value["family"], "inet");
        assert_eq!(value["local"], "192.168.1.10");
        assert_eq!(value["scope"], "global");
        assert_eq!(value["dynamic"], true);
        assert!(value.get("mngtmpaddr").is_none());
        assert!(value.get("noprefixroute").is_none());
    }

    #[test]
    fn test_from_link_drops_link_only_fields() {
        let entry = IpAddr::from_link(sample_link(), Vec::new());
        assert_eq!(entry.ifname, "eth0");
        assert_eq!(entry.min_mtu, Some(68));

        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("linkmode").is_none());
        assert!(value.get("inet6_addr_gen_mode").is_none());
        assert_eq!(value["addr_info"], serde_json::json!([]));
    }

    #[test]
    fn test_find_link() {
        let links = vec![sample_link()];
        assert_eq!(links.find_link("eth0").map(|l| l.ifindex), Some(2));
        assert!(links.find_link("wlan0").is_none());
    }
}
