//! Decode Linux network interfaces and addresses into `ip -j -d` records.
//!
//! The crate reads rtnetlink link and address dumps and turns them into
//! strongly typed records whose JSON form matches `ip -j -d link` and
//! `ip -j -d addr`.
//!
//! - [`types`] - closed enumerations and flag bit-sets
//! - [`extract`] - symbolic attribute lookup with a raw-byte fallback
//! - [`decode`] - link/address message to record
//! - [`aggregate`] - listings, with addresses nested under their link
//! - [`netlink`] - blocking NETLINK_ROUTE transport and message parsers
//! - [`output`] - text and JSON rendering
//!
//! # Example
//!
//! ```ignore
//! use linetface::output::{OutputFormat, OutputOptions, print_all};
//!
//! let links = linetface::get_links()?;
//! print_all(&links, &mut std::io::stdout(), OutputFormat::Json, &OutputOptions::default())?;
//!
//! for entry in linetface::get_addresses()? {
//!     for addr in &entry.addr_info {
//!         println!("{}: {}/{}", entry.ifname, addr.local, addr.prefixlen);
//!     }
//! }
//! ```

pub mod aggregate;
pub mod decode;
mod error;
pub mod extract;
pub mod netlink;
pub mod output;
pub mod records;
pub mod types;

pub use aggregate::{NetlinkSource, list_addresses, list_links};
pub use error::{Error, LinkId, Result};
pub use records::{AddrInfo, FindLink, IpAddr, IpLink};

/// List every interface in the current network namespace (`ip -j -d link`).
///
/// Opens a netlink session for the duration of the call.
pub fn get_links() -> Result<Vec<IpLink>> {
    let conn = netlink::Connection::new()?;
    list_links(&conn)
}

/// List every interface with its addresses (`ip -j -d addr`).
///
/// Opens a netlink session for the duration of the call.
pub fn get_addresses() -> Result<Vec<IpAddr>> {
    let conn = netlink::Connection::new()?;
    list_addresses(&conn)
}
