//! Netlink attribute (rtattr/nlattr) handling.

use bytes::Bytes;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::error::{Error, Result};

/// Netlink attribute alignment.
pub const NLA_ALIGNTO: usize = 4;

/// Align a length to NLA_ALIGNTO boundary.
#[inline]
pub const fn nla_align(len: usize) -> usize {
    (len + NLA_ALIGNTO - 1) & !(NLA_ALIGNTO - 1)
}

/// Size of the attribute header.
pub const NLA_HDRLEN: usize = 4; // nla_align(size_of::<NlAttr>())

/// Netlink attribute header (mirrors struct nlattr / struct rtattr).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlAttr {
    /// Length including header.
    pub nla_len: u16,
    /// Attribute type.
    pub nla_type: u16,
}

/// Attribute type flags.
pub const NLA_F_NESTED: u16 = 1 << 15;
pub const NLA_F_NET_BYTEORDER: u16 = 1 << 14;
pub const NLA_TYPE_MASK: u16 = !(NLA_F_NESTED | NLA_F_NET_BYTEORDER);

impl NlAttr {
    /// Create a new attribute header.
    pub fn new(attr_type: u16, data_len: usize) -> Self {
        Self {
            nla_len: (NLA_HDRLEN + data_len) as u16,
            nla_type: attr_type,
        }
    }

    /// Get the attribute type without flags.
    pub fn kind(&self) -> u16 {
        self.nla_type & NLA_TYPE_MASK
    }

    /// Check if this is a nested attribute.
    pub fn is_nested(&self) -> bool {
        self.nla_type & NLA_F_NESTED != 0
    }

    /// Get the payload length (total length minus header).
    pub fn payload_len(&self) -> usize {
        (self.nla_len as usize).saturating_sub(NLA_HDRLEN)
    }

    /// Convert to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Parse from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from_prefix(data)
            .map(|(attr, _)| attr)
            .map_err(|_| Error::Truncated {
                expected: std::mem::size_of::<Self>(),
                actual: data.len(),
            })
    }
}

/// Iterator over netlink attributes in a buffer.
pub struct AttrIter<'a> {
    data: &'a [u8],
}

impl<'a> AttrIter<'a> {
    /// Create a new attribute iterator.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Find the payload of the first attribute of the given type.
    pub fn find_kind(mut self, kind: u16) -> Option<&'a [u8]> {
        self.find(|(k, _)| *k == kind)
            .map(|(_, payload)| payload)
    }
}

impl<'a> Iterator for AttrIter<'a> {
    /// Returns (attribute type, payload data).
    type Item = (u16, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let attr = NlAttr::from_bytes(self.data).ok()?;

        let len = attr.nla_len as usize;
        if len < NLA_HDRLEN || len > self.data.len() {
            return None;
        }

        let payload = &self.data[NLA_HDRLEN..len];
        let aligned_len = nla_align(len);

        if aligned_len >= self.data.len() {
            self.data = &[];
        } else {
            self.data = &self.data[aligned_len..];
        }

        Some((attr.kind(), payload))
    }
}

/// An attribute the structured parser has no schema entry for.
///
/// Only the numeric type survives parsing; the payload stays in the shared
/// backing buffer of the message it came from, starting at `offset` with the
/// attribute header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedAttr {
    kind: u16,
    buffer: Bytes,
    offset: usize,
}

impl UnrecognizedAttr {
    /// Wrap an attribute located at `offset` inside `buffer`.
    pub fn new(kind: u16, buffer: Bytes, offset: usize) -> Self {
        Self {
            kind,
            buffer,
            offset,
        }
    }

    /// Attribute type, flags masked off.
    pub fn kind(&self) -> u16 {
        self.kind
    }

    /// The whole message buffer this attribute lives in.
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Byte offset of the attribute header within [`buffer`](Self::buffer).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Decode the attribute header at the recorded offset.
    pub fn header(&self) -> Option<NlAttr> {
        NlAttr::from_bytes(self.buffer.get(self.offset..)?).ok()
    }

    /// Payload bytes, as declared by the attribute header.
    pub fn payload(&self) -> Option<&[u8]> {
        let header = self.header()?;
        let start = self.offset + NLA_HDRLEN;
        self.buffer.get(start..start + header.payload_len())
    }
}
