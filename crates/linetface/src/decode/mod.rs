//! Decoders from parsed rtnetlink messages to display records.
//!
//! Decoding is pure: no I/O, no shared state. Registry failures are tagged
//! with the identity of the interface being decoded.

mod address;
mod link;

pub use address::decode_address;
pub use link::{decode_link, format_mac};
