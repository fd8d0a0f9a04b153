use arpkt::arp::{ArpPacket, Operation};
use arpkt::ether::EtherType;
use arpkt::ipv4::Ipv4Addr;
use arpkt::Cursor;

use crate::{ArpContext, DevFlags, Discard, HwAddr, Mbuf, NetDevice, PacketType, Result};

use super::build::build;
use super::{Arp, ArpMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArpOp {
    Request,
    Reply,
    Unknown(u16),
}

impl From<Operation> for ArpOp {
    fn from(op: Operation) -> Self {
        match op {
            Operation::REQUEST => ArpOp::Request,
            Operation::REPLY => ArpOp::Reply,
            other => ArpOp::Unknown(other.raw()),
        }
    }
}

// Fields copied out of a validated header, so that the buffer is free to be
// reused or dropped.
#[derive(Debug)]
struct Inbound {
    op: ArpOp,
    hlen: u8,
    sha: HwAddr,
    // protocol space is ipv4
    ipv4_space: bool,
    // sender and target protocol addresses, when they are ipv4 wide
    paddrs: Option<(Ipv4Addr, Ipv4Addr)>,
}

/// Width of the host's protocol addresses.
const PADDR_LEN: usize = core::mem::size_of::<Ipv4Addr>();

fn ipv4_addr(bytes: &[u8]) -> Option<Ipv4Addr> {
    let octets: [u8; 4] = bytes.try_into().ok()?;
    Some(Ipv4Addr::from(octets))
}

impl<C: ArpContext> Arp<C> {
    /// Handle an inbound arp packet, whose network header starts at the arp
    /// header.
    ///
    /// Packets that are malformed, not meant for this host or not answerable
    /// are dropped and `Ok` is returned. An error is returned only when a
    /// reply cannot be built or sent, or when the neighbour cache rejects a
    /// reply's mapping.
    pub fn receive<D: NetDevice>(&mut self, pkt: Mbuf, dev: &mut D) -> Result<()> {
        self.stats.rx_packets += 1;

        match pkt.pkt_type() {
            PacketType::Host | PacketType::Broadcast | PacketType::Multicast => {}
            _ => return self.discard(pkt, dev, Discard::NotForHost),
        }
        if dev.flags().contains(DevFlags::NOARP) {
            return self.discard(pkt, dev, Discard::ArpDisabled);
        }

        let inbound = match self.inspect(&pkt, dev) {
            Ok(inbound) => inbound,
            Err(reason) => return self.discard(pkt, dev, reason),
        };

        match inbound.op {
            ArpOp::Request => {
                self.stats.rx_requests += 1;
                self.handle_request(pkt, dev, inbound)
            }
            ArpOp::Reply => {
                self.stats.rx_replies += 1;
                self.handle_reply(pkt, dev, inbound)
            }
            ArpOp::Unknown(code) => {
                log::debug!("{}: unknown arp operation {}", dev.name(), code);
                self.discard(pkt, dev, Discard::BadOperation)
            }
        }
    }

    fn inspect<D: NetDevice>(
        &self,
        pkt: &Mbuf,
        dev: &D,
    ) -> std::result::Result<Inbound, Discard> {
        let arp_pkt = match ArpPacket::parse(Cursor::new(pkt.network_header())) {
            Ok(arp_pkt) if arp_pkt.check_header_len() => arp_pkt,
            _ => return Err(Discard::Truncated),
        };

        if arp_pkt.hardware_type() != dev.link_type()
            || usize::from(arp_pkt.hardware_addr_len()) != dev.addr_len()
        {
            return Err(Discard::HardwareMismatch);
        }

        let addrs = arp_pkt.addrs();
        let sha = HwAddr::from_slice(addrs.sha).ok_or(Discard::HardwareMismatch)?;
        let paddrs = if usize::from(arp_pkt.protocol_addr_len()) == PADDR_LEN {
            ipv4_addr(addrs.spa).zip(ipv4_addr(addrs.tpa))
        } else {
            None
        };

        Ok(Inbound {
            op: ArpOp::from(arp_pkt.operation()),
            hlen: arp_pkt.hardware_addr_len(),
            sha,
            ipv4_space: arp_pkt.protocol_type() == EtherType::IPV4,
            paddrs,
        })
    }

    fn handle_request<D: NetDevice>(
        &mut self,
        mut pkt: Mbuf,
        dev: &mut D,
        inbound: Inbound,
    ) -> Result<()> {
        let (spa, tpa) = match inbound.paddrs {
            Some(addrs) if inbound.ipv4_space => addrs,
            _ => return self.discard(pkt, dev, Discard::UnsupportedProtocol),
        };
        let ifindex = dev.index();
        if !self.ctx.owns_addr(tpa, ifindex) {
            return self.discard(pkt, dev, Discard::NotOurAddress);
        }

        if self.conf.learn_from_requests {
            if let Err(err) = self.ctx.update(spa, &inbound.sha, ifindex) {
                log::debug!("{}: cannot learn {} from request: {}", dev.name(), spa, err);
            }
        }

        let sender_pa = tpa.octets();
        let dest_pa = spa.octets();
        let requester = inbound.sha.as_bytes();
        let msg = ArpMsg::new(
            Operation::REPLY,
            EtherType::IPV4,
            inbound.hlen,
            PADDR_LEN as u8,
            &sender_pa,
            &dest_pa,
        )
        .with_dest_ha(requester)
        .with_target_ha(requester);

        pkt.reset();
        build(&mut pkt, dev, &msg)?;
        log::trace!("{}: {} is-at {:02x?}, told {}", dev.name(), tpa, dev.hw_addr(), spa);
        dev.transmit(pkt)?;
        self.stats.tx_replies += 1;
        Ok(())
    }

    fn handle_reply<D: NetDevice>(
        &mut self,
        pkt: Mbuf,
        dev: &mut D,
        inbound: Inbound,
    ) -> Result<()> {
        // any protocol space is accepted, the cache only needs a four byte key
        let spa = match inbound.paddrs {
            Some((spa, _)) => spa,
            None => return self.discard(pkt, dev, Discard::UnsupportedProtocol),
        };
        let ifindex = dev.index();

        let ret = self.ctx.update(spa, &inbound.sha, ifindex);
        for parked in self.ctx.drain(spa, ifindex) {
            if let Err(err) = self.output(parked, dev) {
                log::debug!("{}: parked packet for {} not sent: {}", dev.name(), spa, err);
            }
        }
        drop(pkt);
        ret
    }

    fn discard<D: NetDevice>(&mut self, pkt: Mbuf, dev: &D, reason: Discard) -> Result<()> {
        log::debug!("{}: dropping arp packet: {}", dev.name(), reason);
        self.stats.count_discard(reason);
        drop(pkt);
        Ok(())
    }
}
