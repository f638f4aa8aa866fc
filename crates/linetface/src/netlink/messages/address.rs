//! Strongly-typed address message.

use winnow::prelude::*;
use winnow::token::take;

use crate::netlink::attr::UnrecognizedAttr;
use crate::netlink::parse::{FromNetlink, PResult, cut, parse_attr, parse_string_from_bytes, parse_u32_ne};
use crate::netlink::types::addr::{IfAddrMsg, IfaCacheinfo, ifa};

use super::unrecognized_from;

/// Address message with raw address payloads.
///
/// Addresses stay as bytes; interpreting them against the header family is
/// left to the decoder.
#[derive(Debug, Clone, Default)]
pub struct AddressMessage {
    /// Fixed-size header.
    pub header: IfAddrMsg,
    /// Address (IFA_ADDRESS).
    pub address: Option<Vec<u8>>,
    /// Local address (IFA_LOCAL).
    pub local: Option<Vec<u8>>,
    /// Interface label (IFA_LABEL).
    pub label: Option<String>,
    /// Broadcast address (IFA_BROADCAST).
    pub broadcast: Option<Vec<u8>>,
    /// Extended flags (IFA_FLAGS).
    pub flags: Option<u32>,
    /// Lifetimes (IFA_CACHEINFO).
    pub cache_info: Option<IfaCacheinfo>,
    /// Attributes without a schema entry.
    pub unrecognized: Vec<UnrecognizedAttr>,
}

impl AddressMessage {
    /// Get the address family.
    pub fn family(&self) -> u8 {
        self.header.ifa_family
    }

    /// Get the prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.header.ifa_prefixlen
    }

    /// Get the interface index.
    pub fn ifindex(&self) -> u32 {
        self.header.ifa_index
    }

    /// Get the raw scope code.
    pub fn scope(&self) -> u8 {
        self.header.ifa_scope
    }

    /// Address flags, preferring the 32-bit IFA_FLAGS over the header byte.
    pub fn address_flags(&self) -> u32 {
        self.flags.unwrap_or(self.header.ifa_flags as u32)
    }

    /// Get the attributes the parser did not recognize.
    pub fn unrecognized(&self) -> &[UnrecognizedAttr] {
        &self.unrecognized
    }
}

impl FromNetlink for AddressMessage {
    fn parse(input: &mut &[u8]) -> PResult<Self> {
        let payload = *input;
        if input.len() < IfAddrMsg::SIZE {
            return cut();
        }

        let header_bytes: &[u8] = take(IfAddrMsg::SIZE).parse_next(input)?;
        let header = match IfAddrMsg::from_bytes(header_bytes) {
            Ok(header) => header,
            Err(_) => return cut(),
        };

        let mut msg = AddressMessage {
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
                ifa::IFA_ADDRESS => msg.address = Some(data.to_vec()),
                ifa::IFA_LOCAL => msg.local = Some(data.to_vec()),
                ifa::IFA_LABEL => msg.label = Some(parse_string_from_bytes(data)),
                ifa::IFA_BROADCAST => msg.broadcast = Some(data.to_vec()),
                ifa::IFA_FLAGS => msg.flags = parse_u32_ne(data),
                ifa::IFA_CACHEINFO => msg.cache_info = IfaCacheinfo::from_bytes(data),
                other => pending.push((other, offset)),
            }
        }

        msg.unrecognized = unrecognized_from(payload, pending);
        Ok(msg)
    }

    fn write_dump_header(buf: &mut Vec<u8>) {
        buf.extend_from_slice(IfAddrMsg::new().as_bytes());
    }
}
