//! Strongly-typed link message.

use winnow::prelude::*;
use winnow::token::take;

use crate::netlink::attr::UnrecognizedAttr;
use crate::netlink::parse::{FromNetlink, PResult, cut, parse_attr, parse_string_from_bytes, parse_u32_ne};
use crate::netlink::types::link::{IfInfoMsg, ifla};

use super::unrecognized_from;

/// Link message with the attributes `ip -d link` reports.
///
/// `IFLA_MIN_MTU` and `IFLA_MAX_MTU` are not part of the schema and end up
/// in [`unrecognized`](Self::unrecognized).
#[derive(Debug, Clone, Default)]
pub struct LinkMessage {
    /// Fixed-size header.
    pub header: IfInfoMsg,
    /// Interface name (IFLA_IFNAME).
    pub name: Option<String>,
    /// Hardware address (IFLA_ADDRESS).
    pub address: Option<Vec<u8>>,
    /// Broadcast address (IFLA_BROADCAST).
    pub broadcast: Option<Vec<u8>>,
    /// MTU (IFLA_MTU).
    pub mtu: Option<u32>,
    /// Queueing discipline (IFLA_QDISC).
    pub qdisc: Option<String>,
    /// Transmit queue length (IFLA_TXQLEN).
    pub txqlen: Option<u32>,
    /// Operational state code (IFLA_OPERSTATE).
    pub operstate: Option<u8>,
    /// Link mode code (IFLA_LINKMODE).
    pub linkmode: Option<u8>,
    /// Interface group (IFLA_GROUP).
    pub group: Option<u32>,
    /// Promiscuity count (IFLA_PROMISCUITY).
    pub promiscuity: Option<u32>,
    /// Number of TX queues (IFLA_NUM_TX_QUEUES).
    pub num_tx_queues: Option<u32>,
    /// Number of RX queues (IFLA_NUM_RX_QUEUES).
    pub num_rx_queues: Option<u32>,
    /// GSO max segments (IFLA_GSO_MAX_SEGS).
    pub gso_max_segs: Option<u32>,
    /// GSO max size (IFLA_GSO_MAX_SIZE).
    pub gso_max_size: Option<u32>,
    /// Per-family nested block, kept raw (IFLA_AF_SPEC).
    pub af_spec: Option<Vec<u8>>,
    /// Attributes without a schema entry.
    pub unrecognized: Vec<UnrecognizedAttr>,
}

impl LinkMessage {
    /// Get the interface index.
    pub fn ifindex(&self) -> u32 {
        self.header.ifi_index as u32
    }

    /// Get the interface name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the raw IFF_* flags.
    pub fn flags(&self) -> u32 {
        self.header.ifi_flags
    }

    /// Get the ARPHRD_* device type.
    pub fn link_type(&self) -> u16 {
        self.header.ifi_type
    }

    /// Get the attributes the parser did not recognize.
    pub fn unrecognized(&self) -> &[UnrecognizedAttr] {
        &self.unrecognized
    }
}

impl FromNetlink for LinkMessage {
    fn parse(input: &mut &[u8]) -> PResult<Self> {
        let payload = *input;
        if input.len() < IfInfoMsg::SIZE {
            return cut();
        }

        let header_bytes: &[u8] = take(IfInfoMsg::SIZE).parse_next(input)?;
        let header = match IfInfoMsg::from_bytes(header_bytes) {
            Ok(header) => header,
            Err(_) => return cut(),
        };

        let mut msg = LinkMessage {
            header,
            ..Default::default()
        };
        let mut pending = Vec::new();

        loop {
            let offset = payload.len() - input.len();
            let Some((attr_type, data)) = parse_attr(input)? else {
                break;
            };

            match attr_type {
                ifla::IFLA_IFNAME => msg.name = Some(parse_string_from_bytes(data)),
                ifla::IFLA_ADDRESS => msg.address = Some(data.to_vec()),
                ifla::IFLA_BROADCAST => msg.broadcast = Some(data.to_vec()),
                ifla::IFLA_MTU => msg.mtu = parse_u32_ne(data),
                ifla::IFLA_QDISC => msg.qdisc = Some(parse_string_from_bytes(data)),
                ifla::IFLA_TXQLEN => msg.txqlen = parse_u32_ne(data),
                ifla::IFLA_OPERSTATE => msg.operstate = data.first().copied(),
                ifla::IFLA_LINKMODE => msg.linkmode = data.first().copied(),
                ifla::IFLA_GROUP => msg.group = parse_u32_ne(data),
                ifla::IFLA_PROMISCUITY => msg.promiscuity = parse_u32_ne(data),
                ifla::IFLA_NUM_TX_QUEUES => msg.num_tx_queues = parse_u32_ne(data),
                ifla::IFLA_NUM_RX_QUEUES => msg.num_rx_queues = parse_u32_ne(data),
                ifla::IFLA_GSO_MAX_SEGS => msg.gso_max_segs = parse_u32_ne(data),
                ifla::IFLA_GSO_MAX_SIZE => msg.gso_max_size = parse_u32_ne(data),
                ifla::IFLA_AF_SPEC => msg.af_spec = Some(data.to_vec()),
                other => pending.push((other, offset)),
            }
        }

        msg.unrecognized = unrecognized_from(payload, pending);
        Ok(msg)
    }

    fn write_dump_header(buf: &mut Vec<u8>) {
        buf.extend_from_slice(IfInfoMsg::new().as_bytes());
    }
}
