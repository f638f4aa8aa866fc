//! Parser combinators and the `FromNetlink` trait for rtnetlink payloads.
//!
//! Message parsers walk the attribute stream with [`parse_attr`] and keep
//! whatever they have a schema entry for. Everything else is recorded as an
//! [`UnrecognizedAttr`](super::attr::UnrecognizedAttr) so later stages can
//! still reach the raw bytes.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use winnow::binary::le_u16;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take;

use super::attr::{NLA_HDRLEN, NLA_TYPE_MASK, nla_align};
use crate::error::{Error, Result};

/// Result type for winnow parsers.
pub type PResult<T> = core::result::Result<T, ErrMode<ContextError>>;

/// Hard parse failure, used when a fixed header is short.
pub(crate) fn cut<T>() -> PResult<T> {
    Err(ErrMode::Cut(ContextError::new()))
}

/// Trait for types that can be parsed from netlink wire format.
pub trait FromNetlink: Sized {
    /// Parse from a mutable byte slice reference.
    /// The slice is advanced past the consumed bytes.
    fn parse(input: &mut &[u8]) -> PResult<Self>;

    /// Parse from a complete message payload.
    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut input = data;
        Self::parse(&mut input).map_err(|e| Error::Parse(format!("{e:?}")))
    }

    /// Write the fixed header required for dump requests.
    fn write_dump_header(_buf: &mut Vec<u8>) {}
}

/// Parse one attribute and return (type, payload).
///
/// Returns `Ok(None)` once the stream is exhausted or the next attribute
/// header declares a length that cannot be honoured; the remaining input is
/// dropped in that case.
pub fn parse_attr<'a>(input: &mut &'a [u8]) -> PResult<Option<(u16, &'a [u8])>> {
    if input.len() < NLA_HDRLEN {
        return Ok(None);
    }

    let len = le_u16.parse_next(input)? as usize;
    let attr_type = le_u16.parse_next(input)?;

    let payload_len = len.wrapping_sub(NLA_HDRLEN);
    if len < NLA_HDRLEN || input.len() < payload_len {
        *input = &[];
        return Ok(None);
    }

    let payload: &[u8] = take(payload_len).parse_next(input)?;

    let padding = nla_align(len) - len;
    if input.len() >= padding {
        let _: &[u8] = take(padding).parse_next(input)?;
    } else {
        *input = &[];
    }

    Ok(Some((attr_type & NLA_TYPE_MASK, payload)))
}

/// Parse a string from a fixed-size buffer (null-terminated).
pub fn parse_string_from_bytes(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}

/// Parse a native-endian u32 attribute payload.
pub fn parse_u32_ne(data: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = data.get(..4)?.try_into().ok()?;
    Some(u32::from_ne_bytes(bytes))
}

/// Parse an IP address based on address family.
pub fn parse_ip_addr(data: &[u8], family: u8) -> Result<IpAddr> {
    match i32::from(family) {
        libc::AF_INET => {
            let bytes: [u8; 4] = data
                .get(..4)
                .and_then(|b| b.try_into().ok())
                .ok_or(Error::Truncated {
                    expected: 4,
                    actual: data.len(),
                })?;
            Ok(IpAddr::V4(Ipv4Addr::from(bytes)))
        }
        libc::AF_INET6 => {
            let bytes: [u8; 16] = data
                .get(..16)
                .and_then(|b| b.try_into().ok())
                .ok_or(Error::Truncated {
                    expected: 16,
                    actual: data.len(),
                })?;
            Ok(IpAddr::V6(Ipv6Addr::from(bytes)))
        }
        other => Err(Error::InvalidMessage(format!(
            "unsupported address family: {other}"
        ))),
    }
}
