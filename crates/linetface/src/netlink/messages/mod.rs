//! Structured rtnetlink messages.
//!
//! Each message keeps the fixed kernel header plus every attribute it has a
//! schema entry for. Attributes outside the schema are kept as
//! [`UnrecognizedAttr`](super::attr::UnrecognizedAttr) entries pointing into a
//! copy of the original payload.
//!
//! ```ignore
//! use linetface::netlink::messages::LinkMessage;
//! use linetface::netlink::parse::FromNetlink;
//!
//! let msg = LinkMessage::from_bytes(&payload)?;
//! println!("{:?} mtu {:?}", msg.name, msg.mtu);
//! ```

mod address;
mod link;

pub use address::*;
pub use link::*;

use bytes::Bytes;

use super::attr::UnrecognizedAttr;

/// Materialize the (type, offset) pairs collected while parsing into entries
/// sharing one copy of `payload`.
fn unrecognized_from(payload: &[u8], pending: Vec<(u16, usize)>) -> Vec<UnrecognizedAttr> {
    if pending.is_empty() {
        return Vec::new();
    }
    let buffer = Bytes::copy_from_slice(payload);
    pending
        .into_iter()
        .map(|(kind, offset)| UnrecognizedAttr::new(kind, buffer.clone(), offset))
        .collect()
}
