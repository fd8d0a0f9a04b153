use arpkt::arp::Operation;
use arpkt::ether::EtherType;
use arpkt::ipv4::{Ipv4Addr, Ipv4Packet};
use arpkt::Cursor;

use crate::{ArpContext, ArpError, HwAddr, Mbuf, NetDevice, Result};

use super::{Arp, ArpMsg};

impl<C: ArpContext> Arp<C> {
    /// Find the link destination of the outgoing ipv4 packet `pkt`.
    ///
    /// Local destinations resolve to the zero address and the limited
    /// broadcast to the all-ones address, both as wide as the device's
    /// addresses and without touching the neighbour cache. Anything else is
    /// looked up in the cache; on a miss a request for the next hop goes out
    /// and [`ArpError::Pending`] is returned.
    pub fn resolve<D: NetDevice>(&mut self, pkt: &Mbuf, dev: &mut D) -> Result<HwAddr> {
        let dst = Ipv4Packet::parse(Cursor::new(pkt.network_header()))
            .map_err(|_| ArpError::BadPacket("not an ipv4 packet"))?
            .dst_addr();
        let next_hop = self.ctx.next_hop(dst).ok_or(ArpError::NoRoute(dst))?;

        if self.ctx.is_local(next_hop) {
            return HwAddr::zeroed(dev.addr_len())
                .ok_or(ArpError::InvalidArgument("device address too long"));
        }
        if dst == Ipv4Addr::BROADCAST || next_hop == Ipv4Addr::BROADCAST {
            return HwAddr::broadcast(dev.addr_len())
                .ok_or(ArpError::InvalidArgument("device address too long"));
        }
        if let Some(ha) = self.ctx.lookup(next_hop, dev.index()) {
            return Ok(ha);
        }

        self.request(dev, next_hop)?;
        Err(ArpError::Pending(next_hop))
    }

    /// Broadcast a request for `target` from the ipv4 address of `dev`.
    pub fn request<D: NetDevice>(&mut self, dev: &mut D, target: Ipv4Addr) -> Result<()> {
        let sender = self
            .ctx
            .ifaddr(dev.index())
            .ok_or(ArpError::InvalidArgument("device has no ipv4 address"))?;
        let hlen = u8::try_from(dev.addr_len())
            .map_err(|_| ArpError::InvalidArgument("device address too long"))?;

        let spa = sender.octets();
        let tpa = target.octets();
        let msg = ArpMsg::new(Operation::REQUEST, EtherType::IPV4, hlen, 4, &spa, &tpa);
        log::trace!("{}: who-has {} tell {}", dev.name(), target, sender);
        self.send(dev, &msg)
    }

    /// Resolve and transmit the outgoing ipv4 packet `pkt`.
    ///
    /// A packet whose next hop is still being resolved is parked in the
    /// pending queue and `Ok` is returned. On any error the packet is
    /// dropped.
    pub fn output<D: NetDevice>(&mut self, mut pkt: Mbuf, dev: &mut D) -> Result<()> {
        match self.resolve(&pkt, dev) {
            Ok(ha) => {
                let src = dev.hw_addr();
                dev.build_link_header(&mut pkt, EtherType::IPV4, Some(ha.as_bytes()), src)?;
                dev.transmit(pkt)
            }
            Err(ArpError::Pending(next_hop)) => {
                log::trace!("{}: parking packet for {}", dev.name(), next_hop);
                self.ctx.enqueue(next_hop, dev.index(), pkt);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
