use arpkt::arp::{ArpLayout, ArpPacket, Operation};
use arpkt::ether::EtherType;
use arpkt::{Buf, CursorMut};

use crate::{ArpContext, ArpError, DevFlags, Mbuf, NetDevice, Result};

use super::Arp;

/// The contents of an arp packet to be sent.
///
/// Address slices must be exactly as wide as `hlen` and `plen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpMsg<'a> {
    pub operation: Operation,
    /// Protocol address space, as an ethertype.
    pub paddr_space: EtherType,
    pub hlen: u8,
    pub plen: u8,
    /// Defaults to the hardware address of the device.
    pub sender_ha: Option<&'a [u8]>,
    pub sender_pa: &'a [u8],
    /// Zero-filled when absent.
    pub dest_ha: Option<&'a [u8]>,
    pub dest_pa: &'a [u8],
    /// Link destination of the frame. The link broadcast address when absent.
    pub target_ha: Option<&'a [u8]>,
}

impl<'a> ArpMsg<'a> {
    pub fn new(
        operation: Operation,
        paddr_space: EtherType,
        hlen: u8,
        plen: u8,
        sender_pa: &'a [u8],
        dest_pa: &'a [u8],
    ) -> Self {
        Self {
            operation,
            paddr_space,
            hlen,
            plen,
            sender_ha: None,
            sender_pa,
            dest_ha: None,
            dest_pa,
            target_ha: None,
        }
    }

    pub fn with_sender_ha(mut self, ha: &'a [u8]) -> Self {
        self.sender_ha = Some(ha);
        self
    }

    pub fn with_dest_ha(mut self, ha: &'a [u8]) -> Self {
        self.dest_ha = Some(ha);
        self
    }

    pub fn with_target_ha(mut self, ha: &'a [u8]) -> Self {
        self.target_ha = Some(ha);
        self
    }

    #[inline]
    pub fn layout(&self) -> ArpLayout {
        ArpLayout::new(self.hlen, self.plen)
    }

    /// Check the message against `dev` before anything is allocated.
    pub fn validate<D: NetDevice>(&self, dev: &D) -> Result<()> {
        if self.hlen == 0 || self.plen == 0 {
            return Err(ArpError::InvalidArgument("zero address length"));
        }
        if usize::from(self.hlen) != dev.addr_len() {
            return Err(ArpError::InvalidArgument(
                "hardware length differs from the device",
            ));
        }
        let hlen = usize::from(self.hlen);
        let plen = usize::from(self.plen);
        if self.sender_pa.len() != plen || self.dest_pa.len() != plen {
            return Err(ArpError::InvalidArgument("protocol address length"));
        }
        let bad_ha = [self.sender_ha, self.dest_ha, self.target_ha]
            .iter()
            .flatten()
            .any(|ha| ha.len() != hlen);
        if bad_ha {
            return Err(ArpError::InvalidArgument("hardware address length"));
        }
        if dev.flags().contains(DevFlags::NOARP) {
            return Err(ArpError::InvalidArgument("arp disabled on the device"));
        }
        Ok(())
    }
}

/// Append the arp header described by `msg` to `pkt`, then let `dev` put
/// its link header in front.
///
/// `msg` must have passed [`ArpMsg::validate`].
pub(super) fn build<D: NetDevice>(pkt: &mut Mbuf, dev: &D, msg: &ArpMsg<'_>) -> Result<()> {
    let layout = msg.layout();
    let header_len = layout.header_len();
    if pkt.capacity() < header_len {
        return Err(ArpError::NoMemory);
    }

    let sender_ha = match msg.sender_ha {
        Some(ha) => ha,
        None => dev.hw_addr(),
    };

    let start = pkt.len();
    pkt.extend(header_len);
    let mut cursor = CursorMut::new(&mut pkt.data_mut()[start..]);
    cursor.advance(header_len);

    let mut arp_pkt = ArpPacket::prepend_header(cursor, layout);
    arp_pkt.set_hardware_type(dev.link_type());
    arp_pkt.set_protocol_type(msg.paddr_space);
    arp_pkt.set_operation(msg.operation);
    let addrs = arp_pkt.addrs_mut();
    addrs.sha.copy_from_slice(sender_ha);
    addrs.spa.copy_from_slice(msg.sender_pa);
    // tha stays zeroed when absent
    if let Some(dest_ha) = msg.dest_ha {
        addrs.tha.copy_from_slice(dest_ha);
    }
    addrs.tpa.copy_from_slice(msg.dest_pa);

    dev.build_link_header(pkt, EtherType::ARP, msg.target_ha, sender_ha)
}

impl<C: ArpContext> Arp<C> {
    /// Build an arp packet from `msg` and transmit it on `dev`.
    pub fn send<D: NetDevice>(&mut self, dev: &mut D, msg: &ArpMsg<'_>) -> Result<()> {
        msg.validate(dev)?;

        let mut pkt = self.mempool.try_alloc().ok_or(ArpError::NoMemory)?;
        build(&mut pkt, dev, msg)?;

        log::trace!(
            "{}: sending arp {} for {:?}",
            dev.name(),
            msg.operation,
            msg.dest_pa
        );
        dev.transmit(pkt)?;
        match msg.operation {
            Operation::REQUEST => self.stats.tx_requests += 1,
            Operation::REPLY => self.stats.tx_replies += 1,
            _ => {}
        }
        Ok(())
    }
}
