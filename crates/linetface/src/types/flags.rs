//! Interface and address flag bit-sets.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A single interface flag (IFF_*), plus the `NO-CARRIER` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum LinkFlag {
    /// Printed when RUNNING is not set.
    NoCarrier = 0,
    Up = 1 << 0,
    Broadcast = 1 << 1,
    Debug = 1 << 2,
    Loopback = 1 << 3,
    PointToPoint = 1 << 4,
    NoTrailers = 1 << 5,
    Running = 1 << 6,
    NoArp = 1 << 7,
    Promisc = 1 << 8,
    AllMulti = 1 << 9,
    Master = 1 << 10,
    Slave = 1 << 11,
    Multicast = 1 << 12,
    PortSel = 1 << 13,
    AutoMedia = 1 << 14,
    Dynamic = 1 << 15,
    LowerUp = 1 << 16,
    Dormant = 1 << 17,
    Echo = 1 << 18,
}

impl LinkFlag {
    /// Every real flag bit, in bit order.
    pub const BITS: [LinkFlag; 19] = [
        Self::Up,
        Self::Broadcast,
        Self::Debug,
        Self::Loopback,
        Self::PointToPoint,
        Self::NoTrailers,
        Self::Running,
        Self::NoArp,
        Self::Promisc,
        Self::AllMulti,
        Self::Master,
        Self::Slave,
        Self::Multicast,
        Self::PortSel,
        Self::AutoMedia,
        Self::Dynamic,
        Self::LowerUp,
        Self::Dormant,
        Self::Echo,
    ];

    /// Order in which `ip` prints flags inside `<...>`. RUNNING is never shown.
    pub const DISPLAY_ORDER: [LinkFlag; 18] = [
        Self::Loopback,
        Self::Broadcast,
        Self::PointToPoint,
        Self::Multicast,
        Self::NoArp,
        Self::AllMulti,
        Self::Promisc,
        Self::NoTrailers,
        Self::Debug,
        Self::Dynamic,
        Self::AutoMedia,
        Self::PortSel,
        Self::Slave,
        Self::Master,
        Self::Up,
        Self::LowerUp,
        Self::Dormant,
        Self::Echo,
    ];

    /// Union of all real flag bits.
    pub const KNOWN_MASK: u32 = (1 << 19) - 1;

    /// Bit value of this flag (0 for `NoCarrier`).
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoCarrier => "NO-CARRIER",
            Self::Up => "UP",
            Self::Broadcast => "BROADCAST",
            Self::Debug => "DEBUG",
            Self::Loopback => "LOOPBACK",
            Self::PointToPoint => "POINTOPOINT",
            Self::NoTrailers => "NOTRAILERS",
            Self::Running => "RUNNING",
            Self::NoArp => "NOARP",
            Self::Promisc => "PROMISC",
            Self::AllMulti => "ALLMULTI",
            Self::Master => "MASTER",
            Self::Slave => "SLAVE",
            Self::Multicast => "MULTICAST",
            Self::PortSel => "PORTSEL",
            Self::AutoMedia => "AUTOMEDIA",
            Self::Dynamic => "DYNAMIC",
            Self::LowerUp => "LOWER_UP",
            Self::Dormant => "DORMANT",
            Self::Echo => "ECHO",
        }
    }
}

impl fmt::Display for LinkFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for LinkFlag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Raw IFF_* word from the ifinfomsg header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceFlags(pub u32);

impl InterfaceFlags {
    /// Check whether `flag` is set. `NoCarrier` is set when RUNNING is not.
    pub fn contains(self, flag: LinkFlag) -> bool {
        match flag {
            LinkFlag::NoCarrier => self.0 & LinkFlag::Running.bits() == 0,
            other => self.0 & other.bits() != 0,
        }
    }

    /// Split into the members `ip` displays.
    ///
    /// A value with exactly one member (including 0, which is `NO-CARRIER`)
    /// yields that member. Otherwise RUNNING is dropped, `NO-CARRIER` leads
    /// when RUNNING is absent, and the rest follow [`LinkFlag::DISPLAY_ORDER`].
    pub fn decompose(self) -> Result<Vec<LinkFlag>> {
        if self.0 & !LinkFlag::KNOWN_MASK != 0 {
            return Err(Error::UnknownEnumValue {
                domain: "link flag",
                value: self.0,
            });
        }

        if self.0 == 0 {
            return Ok(vec![LinkFlag::NoCarrier]);
        }

        if self.0.is_power_of_two() {
            return Ok(LinkFlag::BITS
                .iter()
                .copied()
                .filter(|flag| flag.bits() == self.0)
                .collect());
        }

        let mut members = Vec::with_capacity(LinkFlag::DISPLAY_ORDER.len() + 1);
        if !self.contains(LinkFlag::Running) {
            members.push(LinkFlag::NoCarrier);
        }
        members.extend(
            LinkFlag::DISPLAY_ORDER
                .iter()
                .copied()
                .filter(|&flag| self.contains(flag)),
        );
        Ok(members)
    }

    /// Fold members back into a flag word. `NoCarrier` contributes nothing.
    pub fn from_members(members: &[LinkFlag]) -> Self {
        Self(members.iter().fold(0, |acc, flag| acc | flag.bits()))
    }
}

/// Address flags (IFA_F_*), from IFA_FLAGS or the ifaddrmsg header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressFlags(pub u32);

impl AddressFlags {
    pub const SECONDARY: u32 = 0x01;
    pub const NODAD: u32 = 0x02;
    pub const OPTIMISTIC: u32 = 0x04;
    pub const DADFAILED: u32 = 0x08;
    pub const HOMEADDRESS: u32 = 0x10;
    pub const DEPRECATED: u32 = 0x20;
    pub const TENTATIVE: u32 = 0x40;
    pub const PERMANENT: u32 = 0x80;
    pub const MANAGETEMPADDR: u32 = 0x100;
    pub const NOPREFIXROUTE: u32 = 0x200;
    pub const MCAUTOJOIN: u32 = 0x400;
    pub const STABLE_PRIVACY: u32 = 0x800;

    const NAMES: [(u32, &'static str); 12] = [
        (Self::SECONDARY, "secondary"),
        (Self::NODAD, "nodad"),
        (Self::OPTIMISTIC, "optimistic"),
        (Self::DADFAILED, "dadfailed"),
        (Self::HOMEADDRESS, "home"),
        (Self::DEPRECATED, "deprecated"),
        (Self::TENTATIVE, "tentative"),
        (Self::PERMANENT, "permanent"),
        (Self::MANAGETEMPADDR, "mngtmpaddr"),
        (Self::NOPREFIXROUTE, "noprefixroute"),
        (Self::MCAUTOJOIN, "autojoin"),
        (Self::STABLE_PRIVACY, "stable-privacy"),
    ];

    /// Check whether all bits of `mask` are set.
    pub fn contains(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    /// Address was learned dynamically (not PERMANENT).
    pub fn is_dynamic(self) -> bool {
        !self.contains(Self::PERMANENT)
    }

    /// No prefix route is installed for this address.
    pub fn is_noprefixroute(self) -> bool {
        self.contains(Self::NOPREFIXROUTE)
    }

    /// Names of the set bits, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |&(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recombines(value: u32) {
        let members = InterfaceFlags(value).decompose().unwrap();
        let folded = InterfaceFlags::from_members(&members).0;
        assert_eq!(folded | (value & LinkFlag::Running.bits()), value, "{value:#x}");
    }

    #[test]
    fn test_decompose_4099() {
        let members = InterfaceFlags(4099).decompose().unwrap();
        assert_eq!(
            members,
            vec![
                LinkFlag::NoCarrier,
                LinkFlag::Broadcast,
                LinkFlag::Multicast,
                LinkFlag::Up
            ]
        );
    }

    #[test]
    fn test_decompose_loopback() {
        let members = InterfaceFlags(65609).decompose().unwrap();
        assert_eq!(
            members,
            vec![LinkFlag::Loopback, LinkFlag::Up, LinkFlag::LowerUp]
        );
    }

    #[test]
    fn test_decompose_single_member() {
        assert_eq!(InterfaceFlags(0).decompose().unwrap(), vec![LinkFlag::NoCarrier]);
        assert_eq!(InterfaceFlags(1).decompose().unwrap(), vec![LinkFlag::Up]);
        assert_eq!(
            InterfaceFlags(1 << 18).decompose().unwrap(),
            vec![LinkFlag::Echo]
        );
        assert_eq!(
            InterfaceFlags(64).decompose().unwrap(),
            vec![LinkFlag::Running]
        );
    }

    #[test]
    fn test_decompose_residual_bit_fails() {
        let err = InterfaceFlags((1 << 19) | 1).decompose().unwrap_err();
        assert!(err.is_unknown_enum());
    }

    #[test]
    fn test_recombine() {
        for value in [0, 1, 64, 65, 4099, 4163, 65609, 69699, LinkFlag::KNOWN_MASK] {
            recombines(value);
        }
        for bit in LinkFlag::BITS {
            recombines(bit.bits() | LinkFlag::Up.bits());
        }
    }

    #[test]
    fn test_running_never_shown_in_combinations() {
        let members = InterfaceFlags(4163).decompose().unwrap();
        assert!(!members.contains(&LinkFlag::Running));
        assert!(!members.contains(&LinkFlag::NoCarrier));
    }

    #[test]
    fn test_flag_display() {
        assert_eq!(LinkFlag::NoCarrier.to_string(), "NO-CARRIER");
        assert_eq!(serde_json::to_string(&LinkFlag::LowerUp).unwrap(), "\"LOWER_UP\"");
    }

    #[test]
    fn test_address_flags() {
        for value in [0, 0x80, 0x200, 0x280, 0xfff] {
            let flags = AddressFlags(value);
            assert_eq!(flags.is_dynamic(), value & 0x80 == 0);
            assert_eq!(flags.is_noprefixroute(), value & 0x200 != 0);
            assert_eq!(flags.is_dynamic(), AddressFlags(flags.0).is_dynamic());
        }
        let names: Vec<_> = AddressFlags(0x280).names().collect();
        assert_eq!(names, ["permanent", "noprefixroute"]);
    }
}
