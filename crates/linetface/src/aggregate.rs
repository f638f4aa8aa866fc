//! Interface listings assembled from link and address dumps.

use crate::decode::{decode_address, decode_link};
use crate::error::Result;
use crate::netlink::messages::{AddressMessage, LinkMessage};
use crate::records::{IpAddr, IpLink};

/// Where link and address messages come from.
///
/// [`Connection`](crate::netlink::Connection) implements this against the
/// kernel; tests substitute canned messages.
pub trait NetlinkSource {
    /// Every link message, in kernel order.
    fn get_links(&self) -> Result<Vec<LinkMessage>>;

    /// Address messages for the interface named `ifname`, in kernel order.
    fn get_addresses(&self, ifname: &str) -> Result<Vec<AddressMessage>>;
}

/// Decode every link. The first failure aborts the listing.
pub fn list_links<S: NetlinkSource + ?Sized>(source: &S) -> Result<Vec<IpLink>> {
    let links = source
        .get_links()?
        .iter()
        .map(decode_link)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = links.len(), "listed links");
    Ok(links)
}

/// Decode every link together with its addresses.
///
/// Interfaces without addresses get an empty `addr_info`.
pub fn list_addresses<S: NetlinkSource + ?Sized>(source: &S) -> Result<Vec<IpAddr>> {
    let links = list_links(source)?;
    let mut entries = Vec::with_capacity(links.len());

    for link in links {
        let addr_info = source
            .get_addresses(&link.ifname)?
            .iter()
            .map(decode_address)
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(ifname = %link.ifname, count = addr_info.len(), "decoded addresses");
        entries.push(IpAddr::from_link(link, addr_info));
    }

    Ok(entries)
}
