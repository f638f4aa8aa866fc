//! Link message decoding.

use crate::error::{Error, LinkId, Result};
use crate::extract::{self, LinkAttr};
use crate::netlink::attr::AttrIter;
use crate::netlink::messages::LinkMessage;
use crate::netlink::types::link::ifla;
use crate::records::IpLink;
use crate::types::{Inet6AddrGenMode, InterfaceFlags, LinkMode, LinkType, OperState, group_name};

/// Format a hardware address as lowercase colon-separated hex.
///
/// Returns `None` for an empty address, which is what loopback and
/// tunnel devices report.
pub fn format_mac(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let parts: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Some(parts.join(":"))
}

/// Decode a link message into an `ip -j -d link` entry.
pub fn decode_link(msg: &LinkMessage) -> Result<IpLink> {
    let link = LinkId::new(msg.ifindex(), msg.name());
    let missing = |field: &'static str| Error::MalformedLinkMessage {
        link: link.clone(),
        missing: field,
    };

    if msg.ifindex() == 0 {
        return Err(missing("ifindex"));
    }
    let ifname = msg.name().ok_or_else(|| missing("ifname"))?.to_string();
    let mtu = msg.mtu.ok_or_else(|| missing("mtu"))?;
    let operstate = msg.operstate.ok_or_else(|| missing("operstate"))?;

    let flags = InterfaceFlags(msg.flags())
        .decompose()
        .map_err(|e| e.in_link(&link))?;
    let operstate = OperState::from_code(operstate).map_err(|e| e.in_link(&link))?;
    let link_type = LinkType::from_code(msg.link_type()).map_err(|e| e.in_link(&link))?;
    let linkmode = msg
        .linkmode
        .map(LinkMode::from_code)
        .transpose()
        .map_err(|e| e.in_link(&link))?;

    let min_mtu = extract::get(msg, LinkAttr::MinMtu).and_then(|v| v.as_u32());
    let max_mtu = extract::get(msg, LinkAttr::MaxMtu).and_then(|v| v.as_u32());

    let inet6_addr_gen_mode = inet6_addr_gen_mode(msg, &link)?;

    tracing::trace!(ifindex = link.ifindex, ifname = %ifname, "decoded link");

    Ok(IpLink {
        ifindex: msg.ifindex(),
        ifname,
        flags,
        mtu,
        qdisc: msg.qdisc.clone(),
        operstate,
        linkmode,
        group: msg.group.map(group_name),
        txqlen: msg.txqlen,
        link_type,
        address: msg.address.as_deref().and_then(format_mac),
        broadcast: msg.broadcast.as_deref().and_then(format_mac),
        promiscuity: msg.promiscuity,
        min_mtu,
        max_mtu,
        inet6_addr_gen_mode,
        num_tx_queues: msg.num_tx_queues,
        num_rx_queues: msg.num_rx_queues,
        gso_max_size: msg.gso_max_size,
        gso_max_segs: msg.gso_max_segs,
    })
}

/// Walk IFLA_AF_SPEC -> AF_INET6 -> IFLA_INET6_ADDR_GEN_MODE.
fn inet6_addr_gen_mode(msg: &LinkMessage, link: &LinkId) -> Result<Option<Inet6AddrGenMode>> {
    let Some(af_spec) = extract::get(msg, LinkAttr::AfSpec).and_then(|v| v.as_bytes()) else {
        return Ok(None);
    };
    let Some(inet6) = AttrIter::new(af_spec).find_kind(libc::AF_INET6 as u16) else {
        return Ok(None);
    };
    let Some(mode) = AttrIter::new(inet6)
        .find_kind(ifla::IFLA_INET6_ADDR_GEN_MODE)
        .and_then(|payload| payload.first().copied())
    else {
        return Ok(None);
    };

    Inet6AddrGenMode::from_code(mode)
        .map(Some)
        .map_err(|_| Error::UnrecognizedGenerationMode {
            link: link.clone(),
            mode,
        })
}
