//! Symbolic attribute lookup with a raw-byte fallback.
//!
//! [`get`] first asks the structured parser for the attribute. When that
//! comes back empty and the attribute has an entry in the source's fallback
//! table, the unrecognized attributes are scanned for the matching numeric
//! type and the value is read straight out of the backing buffer.

use crate::netlink::attr::{NLA_HDRLEN, UnrecognizedAttr};
use crate::netlink::messages::{AddressMessage, LinkMessage};
use crate::netlink::types::link::ifla;
use crate::types::closed_enum;

closed_enum! {
    /// Link attributes addressable by name. Names match `ip -j -d link` keys.
    pub enum LinkAttr: u16 as "link attribute" {
        Address = 1 => "address",
        Broadcast = 2 => "broadcast",
        Ifname = 3 => "ifname",
        Mtu = 4 => "mtu",
        Qdisc = 6 => "qdisc",
        Txqlen = 13 => "txqlen",
        Operstate = 16 => "operstate",
        Linkmode = 17 => "linkmode",
        AfSpec = 26 => "af_spec",
        Group = 27 => "group",
        Promiscuity = 30 => "promiscuity",
        NumTxQueues = 31 => "num_tx_queues",
        NumRxQueues = 32 => "num_rx_queues",
        GsoMaxSegs = 40 => "gso_max_segs",
        GsoMaxSize = 41 => "gso_max_size",
        MinMtu = 50 => "min_mtu",
        MaxMtu = 51 => "max_mtu",
    }
}

closed_enum! {
    /// Address attributes addressable by name.
    pub enum AddrAttr: u16 as "address attribute" {
        Address = 1 => "address",
        Local = 2 => "local",
        Label = 3 => "label",
        Broadcast = 4 => "broadcast",
        Cacheinfo = 6 => "cacheinfo",
        Flags = 8 => "flags",
    }
}

/// A resolved attribute value, borrowed from the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    U8(u8),
    U16(u16),
    U32(u32),
    Str(&'a str),
    Bytes(&'a [u8]),
    /// Payload of a nested attribute, still TLV-encoded.
    Nested(&'a [u8]),
}

impl<'a> AttrValue<'a> {
    /// Widen any integer value to u32.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v),
            _ => None,
        }
    }

    /// Get a u8 value.
    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            Self::U8(v) => Some(v),
            _ => None,
        }
    }

    /// Get a string value.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the raw bytes of a binary or nested value.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Self::Bytes(b) | Self::Nested(b) => Some(b),
            _ => None,
        }
    }
}

/// How a fallback reads its value out of the raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawField {
    /// Little-endian u16 at the start of the payload.
    U16Le,
}

impl RawField {
    /// Read the field from `buffer`, where the attribute header sits at `offset`.
    pub fn read(self, buffer: &[u8], offset: usize) -> Option<AttrValue<'static>> {
        let start = offset.checked_add(NLA_HDRLEN)?;
        match self {
            Self::U16Le => {
                let bytes = buffer.get(start..start.checked_add(2)?)?;
                Some(AttrValue::U16(u16::from_le_bytes([bytes[0], bytes[1]])))
            }
        }
    }
}

/// Fallback table entry: numeric attribute type to symbolic attribute.
#[derive(Debug, Clone, Copy)]
pub struct Fallback<A> {
    /// Kernel attribute type to look for among unrecognized attributes.
    pub code: u16,
    /// The attribute it resolves.
    pub attr: A,
    /// Layout of the value.
    pub field: RawField,
}

/// A message whose attributes can be looked up by name.
pub trait AttributeSource {
    /// Symbolic attribute names for this message kind.
    type Attr: Copy + PartialEq + 'static;

    /// Attributes to recover from unrecognized entries.
    const FALLBACKS: &'static [Fallback<Self::Attr>] = &[];

    /// Lookup through the structured parser.
    fn structured(&self, attr: Self::Attr) -> Option<AttrValue<'_>>;

    /// Attributes the structured parser kept as raw entries.
    fn raw_attrs(&self) -> &[UnrecognizedAttr];
}

/// Resolve `attr`, trying the structured parser first and then the raw
/// fallback table. Absent is a valid result.
pub fn get<M: AttributeSource>(msg: &M, attr: M::Attr) -> Option<AttrValue<'_>> {
    msg.structured(attr).or_else(|| fallback(msg, attr))
}

/// Resolve an attribute by its display name, e.g. `"min_mtu"`.
pub fn get_by_name<'m, M>(msg: &'m M, name: &str) -> Option<AttrValue<'m>>
where
    M: AttributeSource,
    M::Attr: std::str::FromStr,
{
    let attr = name.parse::<M::Attr>().ok()?;
    get(msg, attr)
}

/// Scan unrecognized attributes using the fallback table only.
pub fn fallback<M: AttributeSource>(msg: &M, attr: M::Attr) -> Option<AttrValue<'_>> {
    M::FALLBACKS
        .iter()
        .filter(|entry| entry.attr == attr)
        .find_map(|entry| {
            let raw = msg.raw_attrs().iter().find(|raw| raw.kind() == entry.code)?;
            let value = entry.field.read(raw.buffer(), raw.offset());
            tracing::trace!(code = entry.code, offset = raw.offset(), ?value, "raw attribute fallback");
            value
        })
}

impl AttributeSource for LinkMessage {
    type Attr = LinkAttr;

    const FALLBACKS: &'static [Fallback<LinkAttr>] = &[
        Fallback {
            code: ifla::IFLA_MIN_MTU,
            attr: LinkAttr::MinMtu,
            field: RawField::U16Le,
        },
        Fallback {
            code: ifla::IFLA_MAX_MTU,
            attr: LinkAttr::MaxMtu,
            field: RawField::U16Le,
        },
    ];

    fn structured(&self, attr: LinkAttr) -> Option<AttrValue<'_>> {
        match attr {
            LinkAttr::Ifname => self.name.as_deref().map(AttrValue::Str),
            LinkAttr::Address => self.address.as_deref().map(AttrValue::Bytes),
            LinkAttr::Broadcast => self.broadcast.as_deref().map(AttrValue::Bytes),
            LinkAttr::Mtu => self.mtu.map(AttrValue::U32),
            LinkAttr::Qdisc => self.qdisc.as_deref().map(AttrValue::Str),
            LinkAttr::Txqlen => self.txqlen.map(AttrValue::U32),
            LinkAttr::Operstate => self.operstate.map(AttrValue::U8),
            LinkAttr::Linkmode => self.linkmode.map(AttrValue::U8),
            LinkAttr::AfSpec => self.af_spec.as_deref().map(AttrValue::Nested),
            LinkAttr::Group => self.group.map(AttrValue::U32),
            LinkAttr::Promiscuity => self.promiscuity.map(AttrValue::U32),
            LinkAttr::NumTxQueues => self.num_tx_queues.map(AttrValue::U32),
            LinkAttr::NumRxQueues => self.num_rx_queues.map(AttrValue::U32),
            LinkAttr::GsoMaxSegs => self.gso_max_segs.map(AttrValue::U32),
            LinkAttr::GsoMaxSize => self.gso_max_size.map(AttrValue::U32),
            LinkAttr::MinMtu | LinkAttr::MaxMtu => None,
        }
    }

    fn raw_attrs(&self) -> &[UnrecognizedAttr] {
        &self.unrecognized
    }
}

impl AttributeSource for AddressMessage {
    type Attr = AddrAttr;

    fn structured(&self, attr: AddrAttr) -> Option<AttrValue<'_>> {
        match attr {
            AddrAttr::Address => self.address.as_deref().map(AttrValue::Bytes),
            AddrAttr::Local => self.local.as_deref().map(AttrValue::Bytes),
            AddrAttr::Label => self.label.as_deref().map(AttrValue::Str),
            AddrAttr::Broadcast => self.broadcast.as_deref().map(AttrValue::Bytes),
            AddrAttr::Cacheinfo => self.cache_info.as_ref().map(|info| AttrValue::Bytes(info.as_bytes())),
            AddrAttr::Flags => self.flags.map(AttrValue::U32),
        }
    }

    fn raw_attrs(&self) -> &[UnrecognizedAttr] {
        &self.unrecognized
    }
}
