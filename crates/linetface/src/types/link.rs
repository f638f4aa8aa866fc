//! Link-level enumerations.

use super::closed_enum;

closed_enum! {
    /// Operational state (RFC 2863), IFLA_OPERSTATE.
    pub enum OperState: u8 as "operstate" {
        Unknown = 0 => "UNKNOWN",
        NotPresent = 1 => "NOTPRESENT",
        Down = 2 => "DOWN",
        LowerLayerDown = 3 => "LOWERLAYERDOWN",
        Testing = 4 => "TESTING",
        Dormant = 5 => "DORMANT",
        Up = 6 => "UP",
    }
}

closed_enum! {
    /// Link mode, IFLA_LINKMODE.
    pub enum LinkMode: u8 as "link mode" {
        Default = 0 => "DEFAULT",
        Dormant = 1 => "DORMANT",
    }
}

closed_enum! {
    /// IPv6 address generation mode, IFLA_INET6_ADDR_GEN_MODE.
    pub enum Inet6AddrGenMode: u8 as "inet6 address generation mode" {
        Eui64 = 0 => "eui64",
        None = 1 => "none",
        StableSecret = 2 => "stable_secret",
        Random = 3 => "random",
    }
}

closed_enum! {
    /// Hardware type (ARPHRD_*) with the names `ip` prints after `link/`.
    ///
    /// The table follows iproute2's `ll_types.c`; kernel types it does not
    /// name (EUI64, RAWIP, VSOCKMON) are absent.
    pub enum LinkType: u16 as "link type" {
        Netrom = 0 => "netrom",
        Ether = 1 => "ether",
        Eether = 2 => "eether",
        Ax25 = 3 => "ax25",
        Pronet = 4 => "pronet",
        Chaos = 5 => "chaos",
        Ieee802 = 6 => "ieee802",
        Arcnet = 7 => "arcnet",
        Appletlk = 8 => "atalk",
        Dlci = 15 => "dlci",
        Atm = 19 => "atm",
        Metricom = 23 => "metricom",
        Ieee1394 = 24 => "ieee1394",
        Infiniband = 32 => "infiniband",
        Slip = 256 => "slip",
        Cslip = 257 => "cslip",
        Slip6 = 258 => "slip6",
        Cslip6 = 259 => "cslip6",
        Rsrvd = 260 => "rsrvd",
        Adapt = 264 => "adapt",
        Rose = 270 => "rose",
        X25 = 271 => "x25",
        Hwx25 = 272 => "hwx25",
        Can = 280 => "can",
        Ppp = 512 => "ppp",
        Hdlc = 513 => "hdlc",
        Lapb = 516 => "lapb",
        Ddcmp = 517 => "ddcmp",
        RawHdlc = 518 => "rawhdlc",
        Tunnel = 768 => "ipip",
        Tunnel6 = 769 => "tunnel6",
        Frad = 770 => "frad",
        Skip = 771 => "skip",
        Loopback = 772 => "loopback",
        Localtlk = 773 => "ltalk",
        Fddi = 774 => "fddi",
        Bif = 775 => "bif",
        Sit = 776 => "sit",
        IpDdp = 777 => "ip/ddp",
        IpGre = 778 => "gre",
        PimReg = 779 => "pimreg",
        Hippi = 780 => "hippi",
        Ash = 781 => "ash",
        Econet = 782 => "econet",
        Irda = 783 => "irda",
        Fcpp = 784 => "fcpp",
        Fcal = 785 => "fcal",
        Fcpl = 786 => "fcpl",
        FcFabric = 787 => "fcfb0",
        FcFabric1 = 788 => "fcfb1",
        FcFabric2 = 789 => "fcfb2",
        FcFabric3 = 790 => "fcfb3",
        FcFabric4 = 791 => "fcfb4",
        FcFabric5 = 792 => "fcfb5",
        FcFabric6 = 793 => "fcfb6",
        FcFabric7 = 794 => "fcfb7",
        FcFabric8 = 795 => "fcfb8",
        FcFabric9 = 796 => "fcfb9",
        FcFabric10 = 797 => "fcfb10",
        FcFabric11 = 798 => "fcfb11",
        FcFabric12 = 799 => "fcfb12",
        Ieee802Tr = 800 => "tr",
        Ieee80211 = 801 => "ieee802.11",
        Ieee80211Prism = 802 => "ieee802.11/prism",
        Ieee80211Radiotap = 803 => "ieee802.11/radiotap",
        Ieee802154 = 804 => "ieee802.15.4",
        Ieee802154Monitor = 805 => "ieee802.15.4/monitor",
        Phonet = 820 => "phonet",
        PhonetPipe = 821 => "phonet_pipe",
        Caif = 822 => "caif",
        Ip6Gre = 823 => "gre6",
        Netlink = 824 => "netlink",
        SixLowpan = 825 => "6lowpan",
        None = 65534 => "none",
        Void = 65535 => "void",
    }
}

/// Display name of an interface group.
///
/// Only group 0 has a name without consulting `/etc/iproute2/group`.
pub fn group_name(group: u32) -> String {
    match group {
        0 => "default".to_string(),
        n => n.to_string(),
    }
}
