//! Address-level enumerations.

use super::closed_enum;

closed_enum! {
    /// Address family of an ifaddrmsg.
    pub enum AddressFamily: u8 as "address family" {
        Inet = 2 => "inet",
        Inet6 = 10 => "inet6",
    }
}

closed_enum! {
    /// Address scope (RT_SCOPE_*).
    pub enum Scope: u8 as "scope" {
        Global = 0 => "global",
        Site = 200 => "site",
        Link = 253 => "link",
        Host = 254 => "host",
        Nowhere = 255 => "nowhere",
    }
}
