//! Address message decoding.

use crate::error::{Error, LinkId, Result};
use crate::netlink::messages::AddressMessage;
use crate::netlink::parse::parse_ip_addr;
use crate::records::AddrInfo;
use crate::types::{AddressFamily, AddressFlags, Scope};

/// Decode an address message into one `addr_info` element.
pub fn decode_address(msg: &AddressMessage) -> Result<AddrInfo> {
    let ifindex = msg.ifindex();
    let missing = |field: &'static str| Error::MalformedAddressMessage {
        ifindex,
        missing: field,
    };
    let link = LinkId::new(ifindex, msg.label.as_deref());

    let family = AddressFamily::from_code(msg.family()).map_err(|e| e.in_link(&link))?;
    let scope = Scope::from_code(msg.scope()).map_err(|e| e.in_link(&link))?;

    // Point-to-point peers put the local side in IFA_LOCAL; IPv6 only sends IFA_ADDRESS.
    let local = msg
        .local
        .as_deref()
        .or(msg.address.as_deref())
        .and_then(|raw| parse_ip_addr(raw, msg.family()).ok())
        .ok_or_else(|| missing("local"))?;

    let broadcast = msg
        .broadcast
        .as_deref()
        .and_then(|raw| parse_ip_addr(raw, msg.family()).ok());

    let cache_info = msg.cache_info.ok_or_else(|| missing("cacheinfo"))?;
    let flags = AddressFlags(msg.address_flags());

    Ok(AddrInfo {
        family,
        local,
        prefixlen: msg.prefix_len(),
        broadcast,
        scope,
        dynamic: flags.is_dynamic(),
        mngtmpaddr: false,
        noprefixroute: flags.is_noprefixroute(),
        label: msg.label.clone(),
        valid_life_time: cache_info.ifa_valid,
        preferred_life_time: cache_info.ifa_prefered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::fixtures;
    use crate::netlink::parse::FromNetlink;
    use crate::netlink::types::addr::{IfAddrMsg, IfaCacheinfo};

    fn parse(data: &[u8]) -> AddressMessage {
        AddressMessage::from_bytes(data).unwrap()
    }

    #[test]
    fn test_loopback_v4() {
        let info = decode_address(&parse(&fixtures::addr_loopback_v4())).unwrap();

        assert_eq!(info.family, AddressFamily::Inet);
        assert_eq!(info.local.to_string(), "127.0.0.1");
        assert_eq!(info.prefixlen, 8);
        assert_eq!(info.scope, Scope::Host);
        assert!(!info.dynamic);
        assert!(!info.noprefixroute);
        assert!(!info.mngtmpaddr);
        assert_eq!(info.label.as_deref(), Some("lo"));
        assert_eq!(info.valid_life_time, u32::MAX);
        assert_eq!(info.preferred_life_time, u32::MAX);
    }

    #[test]
    fn test_dhcp_v4() {
        let info = decode_address(&parse(&fixtures::addr_ether_v4())).unwrap();

        assert_eq!(info.local.to_string(), "192.168.1.10");
        assert_eq!(info.broadcast.map(|b| b.to_string()).as_deref(), Some("192.168.1.255"));
        assert_eq!(info.scope, Scope::Global);
        assert!(info.dynamic);
        assert_eq!(info.valid_life_time, 86400);
        assert_eq!(info.preferred_life_time, 43200);
    }

    #[test]
    fn test_v6_uses_address_and_extended_flags() {
        let info = decode_address(&parse(&fixtures::addr_ether_v6())).unwrap();

        assert_eq!(info.family, AddressFamily::Inet6);
        assert_eq!(info.local.to_string(), "fe80::5054:ff:fe12:3456");
        assert_eq!(info.scope, Scope::Link);
        assert!(!info.dynamic);
        assert!(info.noprefixroute);
        assert!(info.broadcast.is_none());
        assert!(info.label.is_none());
    }

    #[test]
    fn test_bad_broadcast_is_absent() {
        let mut msg = parse(&fixtures::addr_ether_v4());
        msg.broadcast = Some(vec![192, 168]);
        let info = decode_address(&msg).unwrap();
        assert!(info.broadcast.is_none());
    }

    #[test]
    fn test_missing_local() {
        let mut msg = parse(&fixtures::addr_ether_v4());
        msg.local = None;
        msg.address = None;
        let err = decode_address(&msg).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedAddressMessage { ifindex: 2, missing: "local" }
        ));
    }

    #[test]
    fn test_missing_cacheinfo() {
        let msg = AddressMessage {
            header: IfAddrMsg::new()
                .with_family(libc::AF_INET as u8)
                .with_prefixlen(32)
                .with_index(3),
            local: Some(vec![10, 0, 0, 1]),
            ..Default::default()
        };
        let err = decode_address(&msg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed address message for ifindex 3: missing cacheinfo"
        );
    }

    #[test]
    fn test_unknown_family_and_scope() {
        let base = AddressMessage {
            header: IfAddrMsg::new().with_family(libc::AF_INET as u8).with_index(3),
            local: Some(vec![10, 0, 0, 1]),
            cache_info: Some(IfaCacheinfo::default()),
            ..Default::default()
        };

        let mut msg = base.clone();
        msg.header.ifa_family = 17;
        assert!(decode_address(&msg).unwrap_err().is_unknown_enum());

        let mut msg = base;
        msg.header.ifa_scope = 100;
        let err = decode_address(&msg).unwrap_err();
        assert_eq!(err.to_string(), "ifindex 3: unknown scope value: 100");
    }
}
