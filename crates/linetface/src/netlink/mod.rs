//! Minimal synchronous rtnetlink transport and message parsing.
//!
//! Only what link and address listings need: a blocking NETLINK_ROUTE socket,
//! dump requests, and structured parsers for `RTM_NEWLINK` / `RTM_NEWADDR`.

pub mod attr;
mod builder;
pub mod connection;
pub mod message;
pub mod messages;
pub mod parse;
mod socket;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use attr::{AttrIter, NlAttr, UnrecognizedAttr};
pub use builder::MessageBuilder;
pub use connection::Connection;
pub use message::{MessageIter, NLMSG_HDRLEN, NlMsgHdr, NlMsgType};
pub use messages::{AddressMessage, LinkMessage};
pub use parse::FromNetlink;
pub use socket::NetlinkSocket;
