//! Printable implementations for IpAddr and AddrInfo.

use std::io::Write;

use crate::error::Result;
use crate::output::link::{LinkHead, write_details};
use crate::output::{OutputOptions, Printable, format_lifetime};
use crate::records::{AddrInfo, IpAddr};

impl Printable for AddrInfo {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        write!(w, "    {} {}/{}", self.family, self.local, self.prefixlen)?;
        if let Some(brd) = self.broadcast {
            write!(w, " brd {}", brd)?;
        }
        write!(w, " scope {}", self.scope)?;
        if self.dynamic {
            write!(w, " dynamic")?;
        }
        if self.mngtmpaddr {
            write!(w, " mngtmpaddr")?;
        }
        if self.noprefixroute {
            write!(w, " noprefixroute")?;
        }
        if let Some(ref label) = self.label {
            write!(w, " {}", label)?;
        }
        writeln!(w)?;

        writeln!(
            w,
            "       valid_lft {} preferred_lft {}",
            format_lifetime(self.valid_life_time),
            format_lifetime(self.preferred_life_time)
        )
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Printable for IpAddr {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        LinkHead {
            ifindex: self.ifindex,
            ifname: &self.ifname,
            flags: &self.flags,
            mtu: self.mtu,
            qdisc: self.qdisc.as_deref(),
            operstate: self.operstate.name(),
            mode: None,
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
                    ("numtxqueues", self.num_tx_queues.map(|v| v.to_string())),
                    ("numrxqueues", self.num_rx_queues.map(|v| v.to_string())),
                    ("gso_max_size", self.gso_max_size.map(|v| v.to_string())),
                    ("gso_max_segs", self.gso_max_segs.map(|v| v.to_string())),
                ],
            )?;
        }
        writeln!(w)?;

        for info in &self.addr_info {
            info.print_text(w, opts)?;
        }
        Ok(())
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::{sample_addr, sample_link};

    #[test]
    fn test_addr_text() {
        let entry = IpAddr::from_link(sample_link(), vec![sample_addr()]);
        let mut out = Vec::new();
        entry.print_text(&mut out, &OutputOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500"));
        assert!(!lines[0].contains(" mode "));
        assert_eq!(
            lines[2],
            "    inet 192.168.1.10/24 brd 192.168.1.255 scope global dynamic eth0"
        );
        assert_eq!(lines[3], "       valid_lft 86400sec preferred_lft 43200sec");
    }

    #[test]
    fn test_no_addresses() {
        let entry = IpAddr::from_link(sample_link(), Vec::new());
        let mut out = Vec::new();
        entry.print_text(&mut out, &OutputOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
