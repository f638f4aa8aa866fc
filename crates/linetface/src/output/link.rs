//! Printable implementation for IpLink.

use std::io::Write;

use crate::error::Result;
use crate::output::{OutputOptions, Printable};
use crate::records::IpLink;
use crate::types::LinkFlag;

/// `<FLAG,FLAG,...>` body.
pub(crate) fn flags_text(flags: &[LinkFlag]) -> String {
    flags
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Everything `ip link` prints that IpLink and IpAddr have in common.
pub(crate) struct LinkHead<'a> {
    pub ifindex: u32,
    pub ifname: &'a str,
    pub flags: &'a [LinkFlag],
    pub mtu: u32,
    pub qdisc: Option<&'a str>,
    pub operstate: &'a str,
    pub mode: Option<&'a str>,
    pub group: Option<&'a str>,
    pub txqlen: Option<u32>,
    pub link_type: &'a str,
    pub address: Option<&'a str>,
    pub broadcast: Option<&'a str>,
}

impl LinkHead<'_> {
    /// First two lines: index, name, flags, then `link/<type>`.
    pub(crate) fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        write!(
            w,
            "{}: {}: <{}> mtu {}",
            self.ifindex,
            self.ifname,
            flags_text(self.flags),
            self.mtu
        )?;
        if let Some(qdisc) = self.qdisc {
            write!(w, " qdisc {}", qdisc)?;
        }
        write!(w, " state {}", self.operstate)?;
        if let Some(mode) = self.mode {
            write!(w, " mode {}", mode)?;
        }
        if let Some(group) = self.group {
            write!(w, " group {}", group)?;
        }
        if let Some(qlen) = self.txqlen {
            write!(w, " qlen {}", qlen)?;
        }
        writeln!(w)?;

        write!(w, "    link/{}", self.link_type)?;
        if let Some(address) = self.address {
            write!(w, " {}", address)?;
        }
        if let Some(brd) = self.broadcast {
            write!(w, " brd {}", brd)?;
        }
        Ok(())
    }
}

/// Optional numeric fields of the `-d` line.
pub(crate) fn write_details<W: Write>(w: &mut W, fields: &[(&str, Option<String>)]) -> std::io::Result<()> {
    for (key, value) in fields {
        if let Some(value) = value {
            write!(w, " {} {}", key, value)?;
        }
    }
    Ok(())
}

impl Printable for IpLink {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        LinkHead {
            ifindex: self.ifindex,
            ifname: &self.ifname,
            flags: &self.flags,
            mtu: self.mtu,
            qdisc: self.qdisc.as_deref(),
            operstate: self.operstate.name(),
            mode: self.linkmode.map(|m| m.name()),
            group: self.group.as_deref(),
            txqlen: self.txqlen,
            link_type: self.link_type.name(),
            address: self.address.as_deref(),
            broadcast: self.broadcast.as_deref(),
        }
        .write(w)?;

        if opts.details {
            write!(w, "\n   ")?;
            write_details(
                w,
                &[
                    ("promiscuity", self.promiscuity.map(|v| v.to_string())),
                    ("minmtu", self.min_mtu.map(|v| v.to_string())),
                    ("maxmtu", self.max_mtu.map(|v| v.to_string())),
                    ("addrgenmode", self.inet6_addr_gen_mode.map(|m| m.name().to_string())),
                    ("numtxqueues", self.num_tx_queues.map(|v| v.to_string())),
                    ("numrxqueues", self.num_rx_queues.map(|v| v.to_string())),
                    ("gso_max_size", self.gso_max_size.map(|v| v.to_string())),
                    ("gso_max_segs", self.gso_max_segs.map(|v| v.to_string())),
                ],
            )?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
