//! Synchronous rtnetlink connection with dump handling.

use std::os::unix::io::RawFd;
use std::path::Path;

use super::builder::MessageBuilder;
use super::message::{MessageIter, NLMSG_HDRLEN, NlMsgError, NlMsgType};
use super::messages::{AddressMessage, LinkMessage};
use super::parse::FromNetlink;
use super::socket::NetlinkSocket;
use crate::aggregate::NetlinkSource;
use crate::error::{Error, Result};

/// A NETLINK_ROUTE session.
///
/// Dropping the connection closes the socket.
pub struct Connection {
    socket: NetlinkSocket,
}

impl Connection {
    /// Open a connection in the current network namespace.
    pub fn new() -> Result<Self> {
        Ok(Self {
            socket: NetlinkSocket::new()?,
        })
    }

    /// Open a connection in the namespace behind an open namespace file.
    pub fn new_in_namespace(ns_fd: RawFd) -> Result<Self> {
        Ok(Self {
            socket: NetlinkSocket::new_in_namespace(ns_fd)?,
        })
    }

    /// Open a connection in the namespace at `ns_path`.
    ///
    /// ```ignore
    /// use linetface::netlink::Connection;
    ///
    /// let conn = Connection::new_in_namespace_path("/var/run/netns/blue")?;
    /// let links = conn.get_links()?;
    /// ```
    pub fn new_in_namespace_path<P: AsRef<Path>>(ns_path: P) -> Result<Self> {
        Ok(Self {
            socket: NetlinkSocket::new_in_namespace_path(ns_path)?,
        })
    }

    /// Get the underlying socket.
    pub fn socket(&self) -> &NetlinkSocket {
        &self.socket
    }

    /// Send a dump request and collect all responses (header included).
    pub fn dump(&self, mut builder: MessageBuilder) -> Result<Vec<Vec<u8>>> {
        let seq = self.socket.next_seq();
        builder.set_seq(seq);
        builder.set_pid(self.socket.pid());

        let msg = builder.finish();
        self.socket.send(&msg)?;
        tracing::debug!(seq, "sent dump request");

        let mut responses = Vec::new();
        loop {
            let data = self.socket.recv_msg()?;
            if collect_dump(&data, seq, &mut responses)? {
                break;
            }
        }

        tracing::debug!(seq, count = responses.len(), "dump complete");
        Ok(responses)
    }

    /// Dump and parse every response as `T`.
    ///
    /// A response that fails to parse aborts the dump.
    pub fn dump_typed<T: FromNetlink>(&self, msg_type: u16) -> Result<Vec<T>> {
        let mut builder = MessageBuilder::dump(msg_type);

        let mut header_buf = Vec::new();
        T::write_dump_header(&mut header_buf);
        builder.append_bytes(&header_buf);

        self.dump(builder)?
            .iter()
            .map(|response| parse_response(response))
            .collect()
    }

    /// Get all network interfaces, in kernel order.
    pub fn get_links(&self) -> Result<Vec<LinkMessage>> {
        self.dump_typed(NlMsgType::RTM_GETLINK)
    }

    /// Get a network interface by name.
    pub fn get_link_by_name(&self, name: &str) -> Result<Option<LinkMessage>> {
        let links = self.get_links()?;
        Ok(links.into_iter().find(|l| l.name.as_deref() == Some(name)))
    }

    /// Get all IP addresses.
    pub fn get_addresses(&self) -> Result<Vec<AddressMessage>> {
        self.dump_typed(NlMsgType::RTM_GETADDR)
    }

    /// Get IP addresses for a specific interface by name.
    ///
    /// The name is resolved through this connection, so it refers to the
    /// connection's namespace.
    pub fn get_addresses_for(&self, ifname: &str) -> Result<Vec<AddressMessage>> {
        let link = self
            .get_link_by_name(ifname)?
            .ok_or_else(|| Error::InterfaceNotFound {
                name: ifname.to_string(),
            })?;
        self.get_addresses_by_index(link.ifindex())
    }

    /// Get IP addresses for a specific interface by index.
    pub fn get_addresses_by_index(&self, ifindex: u32) -> Result<Vec<AddressMessage>> {
        let addresses = self.get_addresses()?;
        Ok(addresses
            .into_iter()
            .filter(|a| a.ifindex() == ifindex)
            .collect())
    }
}

impl NetlinkSource for Connection {
    fn get_links(&self) -> Result<Vec<LinkMessage>> {
        Connection::get_links(self)
    }

    fn get_addresses(&self, ifname: &str) -> Result<Vec<AddressMessage>> {
        self.get_addresses_for(ifname)
    }
}

/// Parse a single response (header included) into a typed message.
pub fn parse_response<T: FromNetlink>(response: &[u8]) -> Result<T> {
    if response.len() < NLMSG_HDRLEN {
        return Err(Error::Truncated {
            expected: NLMSG_HDRLEN,
            actual: response.len(),
        });
    }
    T::from_bytes(&response[NLMSG_HDRLEN..])
}

/// Collect the data messages of one datagram belonging to dump `seq`.
///
/// Returns `true` once the terminating DONE message has been seen.
fn collect_dump(data: &[u8], seq: u32, responses: &mut Vec<Vec<u8>>) -> Result<bool> {
    for result in MessageIter::new(data) {
        let (header, payload) = result?;

        if header.nlmsg_seq != seq {
            continue;
        }

        if header.is_error() {
            let err = NlMsgError::from_bytes(payload)?;
            if !err.is_ack() {
                return Err(Error::from_errno(err.error));
            }
            continue;
        }

        if header.is_done() {
            return Ok(true);
        }

        if header.nlmsg_type == NlMsgType::NOOP {
            continue;
        }

        if header.is_dump_interrupted() {
            tracing::warn!(seq, "dump interrupted, results may be inconsistent");
        }

        let mut msg = header.as_bytes().to_vec();
        msg.extend_from_slice(payload);
        responses.push(msg);
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::fixtures;
    use crate::netlink::message::{NLM_F_DUMP, NLM_F_MULTI, NLM_F_REQUEST, NlMsgHdr, nlmsg_align};

    fn frame(msg_type: u16, seq: u32, payload: &[u8]) -> Vec<u8> {
        let mut hdr = NlMsgHdr::new(msg_type, NLM_F_MULTI);
        hdr.nlmsg_len = (NLMSG_HDRLEN + payload.len()) as u32;
        hdr.nlmsg_seq = seq;
        let mut buf = hdr.as_bytes().to_vec();
        buf.extend_from_slice(payload);
        buf.resize(nlmsg_align(buf.len()), 0);
        buf
    }

    #[test]
    fn test_collect_until_done() {
        let mut data = frame(NlMsgType::RTM_NEWLINK, 5, &fixtures::link_loopback());
        data.extend(frame(NlMsgType::RTM_NEWLINK, 99, &fixtures::link_ether()));
        data.extend(frame(NlMsgType::RTM_NEWLINK, 5, &fixtures::link_ether()));

        let mut responses = Vec::new();
        assert!(!collect_dump(&data, 5, &mut responses).unwrap());
        assert_eq!(responses.len(), 2);

        let done = frame(NlMsgType::DONE, 5, &0i32.to_ne_bytes());
        assert!(collect_dump(&done, 5, &mut responses).unwrap());

        let links: Vec<LinkMessage> = responses
            .iter()
            .map(|r| parse_response(r).unwrap())
            .collect();
        assert_eq!(links[0].name(), Some("lo"));
        assert_eq!(links[1].name(), Some("eth0"));
    }

    #[test]
    fn test_kernel_error_aborts() {
        let mut payload = (-libc::EPERM).to_ne_bytes().to_vec();
        payload.extend_from_slice(NlMsgHdr::new(NlMsgType::RTM_GETLINK, 0).as_bytes());
        let data = frame(NlMsgType::ERROR, 3, &payload);

        let err = collect_dump(&data, 3, &mut Vec::new()).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_parse_response_short() {
        let err = parse_response::<LinkMessage>(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, Error::Truncated { expected: 16, actual: 4 }));
    }

    #[test]
    fn test_dump_request_header() {
        let mut builder = MessageBuilder::dump(NlMsgType::RTM_GETADDR);
        let mut header_buf = Vec::new();
        AddressMessage::write_dump_header(&mut header_buf);
        builder.append_bytes(&header_buf);
        let msg = builder.finish();

        let header = NlMsgHdr::from_bytes(&msg).unwrap();
        assert_eq!(header.nlmsg_flags, NLM_F_REQUEST | NLM_F_DUMP);
        assert_eq!(msg.len(), NLMSG_HDRLEN + 8);
    }
}
