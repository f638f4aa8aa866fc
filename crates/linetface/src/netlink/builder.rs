//! Request construction.
//!
//! Only dump requests are ever sent, so a request is a header followed by
//! the fixed family header of the object being dumped.

use super::message::{NLM_F_DUMP, NLM_F_REQUEST, NLMSG_HDRLEN, NlMsgHdr, nlmsg_align};

/// Builder for an outgoing netlink request.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    header: NlMsgHdr,
    body: Vec<u8>,
}

impl MessageBuilder {
    /// Start a request of the given type with the given flags.
    pub fn new(msg_type: u16, flags: u16) -> Self {
        Self {
            header: NlMsgHdr::new(msg_type, flags),
            body: Vec::new(),
        }
    }

    /// Start a dump request for `msg_type`.
    pub fn dump(msg_type: u16) -> Self {
        Self::new(msg_type, NLM_F_REQUEST | NLM_F_DUMP)
    }

    /// Total request length so far, header included.
    pub fn len(&self) -> usize {
        NLMSG_HDRLEN + self.body.len()
    }

    /// True when nothing follows the netlink header.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Append a fixed family header, padded to netlink alignment.
    pub fn append_bytes(&mut self, data: &[u8]) {
        self.body.extend_from_slice(data);
        self.body.resize(nlmsg_align(self.body.len()), 0);
    }

    /// Set the sequence number used to match replies.
    pub fn set_seq(&mut self, seq: u32) {
        self.header.nlmsg_seq = seq;
    }

    /// Set the sender port ID.
    pub fn set_pid(&mut self, pid: u32) {
        self.header.nlmsg_pid = pid;
    }

    /// Serialize with the length field filled in.
    pub fn finish(mut self) -> Vec<u8> {
        self.header.nlmsg_len = self.len() as u32;

        let mut buf = Vec::with_capacity(self.len());
        buf.extend_from_slice(self.header.as_bytes());
        buf.resize(NLMSG_HDRLEN, 0);
        buf.extend_from_slice(&self.body);
        buf
    }
}
