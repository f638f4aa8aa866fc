//! Netlink message fixtures for testing.
//!
//! Payloads as they follow the nlmsghdr in a dump reply, provided as
//! functions returning `Vec<u8>`.

use crate::netlink::attr::{NLA_F_NESTED, NlAttr, nla_align};
use crate::netlink::types::link::{IfInfoMsg, ifla};

/// Append one attribute with padding.
fn push_attr(buf: &mut Vec<u8>, kind: u16, payload: &[u8]) {
    buf.extend_from_slice(NlAttr::new(kind, payload.len()).as_bytes());
    buf.extend_from_slice(payload);
    buf.resize(nla_align(buf.len()), 0);
}

/// Encode a nested attribute holding a single child.
fn nested(kind: u16, child_kind: u16, child: &[u8]) -> (u16, Vec<u8>) {
    let mut inner = Vec::new();
    push_attr(&mut inner, child_kind, child);
    (kind | NLA_F_NESTED, inner)
}

/// Build a link payload from a header and a list of attributes.
pub fn link(header: IfInfoMsg, attrs: &[(u16, Vec<u8>)]) -> Vec<u8> {
    let mut buf = header.as_bytes().to_vec();
    for (kind, payload) in attrs {
        push_attr(&mut buf, *kind, payload);
    }
    buf
}

/// `IFLA_AF_SPEC` carrying `AF_INET6 { IFLA_INET6_ADDR_GEN_MODE = mode }`.
pub fn af_spec_gen_mode(mode: u8) -> (u16, Vec<u8>) {
    let (inet6, inner) = nested(libc::AF_INET6 as u16, ifla::IFLA_INET6_ADDR_GEN_MODE, &[mode]);
    let mut spec = Vec::new();
    push_attr(&mut spec, inet6, &inner);
    (ifla::IFLA_AF_SPEC | NLA_F_NESTED, spec)
}

/// Link message for loopback interface.
/// Captured from: ip link show lo
pub fn link_loopback() -> Vec<u8> {
    vec![
        // ifinfomsg: family=0, type=772 (ARPHRD_LOOPBACK), index=1,
        // flags=0x10049 (UP|LOOPBACK|RUNNING|LOWER_UP), change=0
        0x00, 0x00, // family, pad
        0x04, 0x03, // type = 772
        0x01, 0x00, 0x00, 0x00, // index = 1
        0x49, 0x00, 0x01, 0x00, // flags = 65609
        0x00, 0x00, 0x00, 0x00, // change = 0
        // IFLA_IFNAME = "lo"
        0x07, 0x00, 0x03, 0x00, b'l', b'o', 0x00, 0x00,
        // IFLA_TXQLEN = 1000
        0x08, 0x00, 0x0d, 0x00, 0xe8, 0x03, 0x00, 0x00,
        // IFLA_OPERSTATE = 0 (UNKNOWN)
        0x05, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
        // IFLA_LINKMODE = 0 (DEFAULT)
        0x05, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00,
        // IFLA_MTU = 65536
        0x08, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00,
        // IFLA_GROUP = 0
        0x08, 0x00, 0x1b, 0x00, 0x00, 0x00, 0x00, 0x00,
        // IFLA_PROMISCUITY = 0
        0x08, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x00, 0x00,
        // IFLA_NUM_TX_QUEUES = 1
        0x08, 0x00, 0x1f, 0x00, 0x01, 0x00, 0x00, 0x00,
        // IFLA_GSO_MAX_SEGS = 65535
        0x08, 0x00, 0x28, 0x00, 0xff, 0xff, 0x00, 0x00,
        // IFLA_GSO_MAX_SIZE = 65536
        0x08, 0x00, 0x29, 0x00, 0x00, 0x00, 0x01, 0x00,
        // IFLA_NUM_RX_QUEUES = 1
        0x08, 0x00, 0x20, 0x00, 0x01, 0x00, 0x00, 0x00,
        // IFLA_QDISC = "noqueue"
        0x0c, 0x00, 0x06, 0x00, b'n', b'o', b'q', b'u', b'e', b'u', b'e', 0x00,
    ]
}

/// Link message for an ethernet interface with MTU bounds and an
/// IPv6 address generation mode.
pub fn link_ether() -> Vec<u8> {
    let header = IfInfoMsg::new()
        .with_index(2)
        .with_type(1) // ARPHRD_ETHER
        .with_flags(0x1043); // UP|BROADCAST|RUNNING|MULTICAST
    link(
        header,
        &[
            (ifla::IFLA_IFNAME, b"eth0\0".to_vec()),
            (ifla::IFLA_TXQLEN, 1000u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_OPERSTATE, vec![6]),
            (ifla::IFLA_LINKMODE, vec![0]),
            (ifla::IFLA_MTU, 1500u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_MIN_MTU, 68u32.to_le_bytes().to_vec()),
            (ifla::IFLA_MAX_MTU, 9000u32.to_le_bytes().to_vec()),
            (ifla::IFLA_GROUP, 5u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_PROMISCUITY, 0u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_NUM_TX_QUEUES, 4u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_GSO_MAX_SEGS, 65535u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_GSO_MAX_SIZE, 65536u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_NUM_RX_QUEUES, 4u32.to_ne_bytes().to_vec()),
            (ifla::IFLA_QDISC, b"fq_codel\0".to_vec()),
            (ifla::IFLA_ADDRESS, vec![0x52, 0x54, 0x00, 0x12, 0x34, 0x56]),
            (ifla::IFLA_BROADCAST, vec![0xff; 6]),
            af_spec_gen_mode(0),
        ],
    )
}

/// Address message for IPv4 loopback address 127.0.0.1/8.
pub fn addr_loopback_v4() -> Vec<u8> {
    vec![
        // ifaddrmsg: family=AF_INET, prefixlen=8, flags=0x80 (IFA_F_PERMANENT),
        // scope=RT_SCOPE_HOST, index=1
        0x02, 0x08, 0x80, 0xfe, //
        0x01, 0x00, 0x00, 0x00, // index = 1
        // IFA_ADDRESS = 127.0.0.1
        0x08, 0x00, 0x01, 0x00, 0x7f, 0x00, 0x00, 0x01,
        // IFA_LOCAL = 127.0.0.1
        0x08, 0x00, 0x02, 0x00, 0x7f, 0x00, 0x00, 0x01,
        // IFA_LABEL = "lo"
        0x07, 0x00, 0x03, 0x00, b'l', b'o', 0x00, 0x00,
        // IFA_FLAGS = 0x80
        0x08, 0x00, 0x08, 0x00, 0x80, 0x00, 0x00, 0x00,
        // IFA_CACHEINFO: preferred=forever, valid=forever, cstamp=0x1c2, tstamp=0x1c2
        0x14, 0x00, 0x06, 0x00, //
        0xff, 0xff, 0xff, 0xff, //
        0xff, 0xff, 0xff, 0xff, //
        0xc2, 0x01, 0x00, 0x00, //
        0xc2, 0x01, 0x00, 0x00, //
        // IFA_RT_PRIORITY = 0
        0x08, 0x00, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]
}

/// DHCP-assigned IPv4 address 192.168.1.10/24 on eth0.
pub fn addr_ether_v4() -> Vec<u8> {
    vec![
        // ifaddrmsg: family=AF_INET, prefixlen=24, flags=0, scope=RT_SCOPE_UNIVERSE, index=2
        0x02, 0x18, 0x00, 0x00, //
        0x02, 0x00, 0x00, 0x00, //
        // IFA_ADDRESS = 192.168.1.10
        0x08, 0x00, 0x01, 0x00, 0xc0, 0xa8, 0x01, 0x0a,
        // IFA_LOCAL = 192.168.1.10
        0x08, 0x00, 0x02, 0x00, 0xc0, 0xa8, 0x01, 0x0a,
        // IFA_BROADCAST = 192.168.1.255
        0x08, 0x00, 0x04, 0x00, 0xc0, 0xa8, 0x01, 0xff,
        // IFA_LABEL = "eth0"
        0x09, 0x00, 0x03, 0x00, b'e', b't', b'h', b'0', 0x00, 0x00, 0x00, 0x00,
        // IFA_FLAGS = 0
        0x08, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00,
        // IFA_CACHEINFO: preferred=43200, valid=86400
        0x14, 0x00, 0x06, 0x00, //
        0xc0, 0xa8, 0x00, 0x00, //
        0x80, 0x51, 0x01, 0x00, //
        0x10, 0x27, 0x00, 0x00, //
        0x10, 0x27, 0x00, 0x00, //
    ]
}

/// Link-local IPv6 address fe80::5054:ff:fe12:3456/64 on eth0.
pub fn addr_ether_v6() -> Vec<u8> {
    vec![
        // ifaddrmsg: family=AF_INET6, prefixlen=64, flags=0x80, scope=RT_SCOPE_LINK, index=2
        0x0a, 0x40, 0x80, 0xfd, //
        0x02, 0x00, 0x00, 0x00, //
        // IFA_ADDRESS = fe80::5054:ff:fe12:3456
        0x14, 0x00, 0x01, 0x00, //
        0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x50, 0x54, 0x00, 0xff, 0xfe, 0x12, 0x34, 0x56, //
        // IFA_CACHEINFO: preferred=forever, valid=forever
        0x14, 0x00, 0x06, 0x00, //
        0xff, 0xff, 0xff, 0xff, //
        0xff, 0xff, 0xff, 0xff, //
        0x20, 0x03, 0x00, 0x00, //
        0x20, 0x03, 0x00, 0x00, //
        // IFA_FLAGS = 0x280 (PERMANENT|NOPREFIXROUTE)
        0x08, 0x00, 0x08, 0x00, 0x80, 0x02, 0x00, 0x00,
    ]
}
