//! Enumerated values reported by `ip link` and `ip addr`.
//!
//! Every kernel code maps to a named member through a closed table; codes
//! outside the table fail with [`Error::UnknownEnumValue`](crate::Error)
//! rather than degrading to a catch-all. Bit-sets live in [`flags`].

pub mod addr;
pub mod flags;
pub mod link;

pub use addr::{AddressFamily, Scope};
pub use flags::{AddressFlags, InterfaceFlags, LinkFlag};
pub use link::{Inet6AddrGenMode, LinkMode, LinkType, OperState, group_name};

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A closed set of kernel codes with display names.
pub trait ClosedEnum: Copy + Display + FromStr<Err = Error> + 'static {
    /// Integer type of the kernel code.
    type Code: Copy + Into<u32>;

    /// Name used in error messages.
    const DOMAIN: &'static str;

    /// Every member, in code order.
    const ALL: &'static [Self];

    /// Map a kernel code to its member.
    fn from_code(code: Self::Code) -> Result<Self>;

    /// Kernel code of this member.
    fn code(self) -> Self::Code;

    /// Display name, as printed by `ip`.
    fn name(self) -> &'static str;
}

/// Decode a raw code in the domain of `E`.
pub fn decode<E: ClosedEnum>(code: E::Code) -> Result<E> {
    E::from_code(code)
}

/// Generate a closed enumeration with code and name tables.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty as $domain:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $display:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::types::ClosedEnum for $name {
            type Code = $repr;
            const DOMAIN: &'static str = $domain;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn from_code(code: $repr) -> $crate::error::Result<Self> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err($crate::error::Error::UnknownEnumValue {
                        domain: $domain,
                        value: u32::from(code),
                    }),
                }
            }

            fn code(self) -> $repr {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }
        }

        impl $name {
            /// Map a kernel code to its member.
            pub fn from_code(code: $repr) -> $crate::error::Result<Self> {
                <Self as $crate::types::ClosedEnum>::from_code(code)
            }

            /// Kernel code of this member.
            pub fn code(self) -> $repr {
                <Self as $crate::types::ClosedEnum>::code(self)
            }

            /// Display name, as printed by `ip`.
            pub fn name(self) -> &'static str {
                <Self as $crate::types::ClosedEnum>::name(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::types::ClosedEnum>::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name() == s)
                    .ok_or_else(|| {
                        $crate::error::Error::Parse(format!("unknown {}: {}", $domain, s))
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

pub(crate) use closed_enum;
