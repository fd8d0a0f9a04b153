#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::EtherType;
use crate::{Buf, PktBuf, PktBufMut};

use super::{ArpLayout, Hardware, Operation, ARP_FIXED_LEN};

/// The four address fields of an arp header, borrowed from the header bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpAddrs<'a> {
    /// Sender hardware address.
    pub sha: &'a [u8],
    /// Sender protocol address.
    pub spa: &'a [u8],
    /// Target hardware address.
    pub tha: &'a [u8],
    /// Target protocol address.
    pub tpa: &'a [u8],
}

impl<'a> ArpAddrs<'a> {
    /// Split `header` into its address fields according to `layout`.
    ///
    /// # Panics
    /// Panics if `header` is shorter than `layout.header_len()`.
    #[inline]
    pub fn new(header: &'a [u8], layout: ArpLayout) -> Self {
        Self {
            sha: &header[layout.sha()],
            spa: &header[layout.spa()],
            tha: &header[layout.tha()],
            tpa: &header[layout.tpa()],
        }
    }
}

/// Mutable counterpart of [`ArpAddrs`].
#[derive(Debug)]
pub struct ArpAddrsMut<'a> {
    /// Sender hardware address.
    pub sha: &'a mut [u8],
    /// Sender protocol address.
    pub spa: &'a mut [u8],
    /// Target hardware address.
    pub tha: &'a mut [u8],
    /// Target protocol address.
    pub tpa: &'a mut [u8],
}

impl<'a> ArpAddrsMut<'a> {
    /// Split `header` into its address fields according to `layout`.
    ///
    /// # Panics
    /// Panics if `header` is shorter than `layout.header_len()`.
    #[inline]
    pub fn new(header: &'a mut [u8], layout: ArpLayout) -> Self {
        let fields = &mut header[ARP_FIXED_LEN..layout.header_len()];
        let (sha, rest) = fields.split_at_mut(layout.hardware_addr_len());
        let (spa, rest) = rest.split_at_mut(layout.protocol_addr_len());
        let (tha, tpa) = rest.split_at_mut(layout.hardware_addr_len());
        Self { sha, spa, tha, tpa }
    }
}

/// An arp header with address fields of any width.
///
/// [`ArpPacket::parse`] only guarantees the fixed portion. Callers dealing
/// with untrusted input must check [`ArpPacket::check_header_len`] before
/// touching the address fields, which panic on a truncated buffer.
#[derive(Debug, Clone, Copy)]
pub struct ArpPacket<T> {
    buf: T,
}

impl<T: Buf> ArpPacket<T> {
    /// Wrap `buf` without any check.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// The wrapped buffer.
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    /// Unwrap the buffer.
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    /// Wrap `buf` if its chunk holds the fixed portion of the header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.chunk().len() < ARP_FIXED_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// The fixed portion of the header.
    #[inline]
    pub fn fix_header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..ARP_FIXED_LEN]
    }

    /// Hardware address space.
    #[inline]
    pub fn hardware_type(&self) -> Hardware {
        Hardware::from(NetworkEndian::read_u16(&self.buf.chunk()[0..2]))
    }

    /// Protocol address space.
    #[inline]
    pub fn protocol_type(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[2..4]))
    }

    /// Declared width of the hardware addresses.
    #[inline]
    pub fn hardware_addr_len(&self) -> u8 {
        self.buf.chunk()[4]
    }

    /// Declared width of the protocol addresses.
    #[inline]
    pub fn protocol_addr_len(&self) -> u8 {
        self.buf.chunk()[5]
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        Operation::from(NetworkEndian::read_u16(&self.buf.chunk()[6..8]))
    }

    /// Layout derived from the declared address widths.
    #[inline]
    pub fn layout(&self) -> ArpLayout {
        ArpLayout::new(self.hardware_addr_len(), self.protocol_addr_len())
    }

    /// Header length derived from the declared address widths.
    #[inline]
    pub fn header_len(&self) -> usize {
        self.layout().header_len()
    }

    /// Whether the chunk holds every address field the header declares.
    #[inline]
    pub fn check_header_len(&self) -> bool {
        self.header_len() <= self.buf.chunk().len()
    }

    /// The address fields.
    ///
    /// # Panics
    /// Panics if [`ArpPacket::check_header_len`] does not hold.
    #[inline]
    pub fn addrs(&self) -> ArpAddrs<'_> {
        ArpAddrs::new(self.buf.chunk(), self.layout())
    }

    #[inline]
    pub fn sender_hardware_addr(&self) -> &[u8] {
        &self.buf.chunk()[self.layout().sha()]
    }

    #[inline]
    pub fn sender_protocol_addr(&self) -> &[u8] {
        &self.buf.chunk()[self.layout().spa()]
    }

    #[inline]
    pub fn target_hardware_addr(&self) -> &[u8] {
        &self.buf.chunk()[self.layout().tha()]
    }

    #[inline]
    pub fn target_protocol_addr(&self) -> &[u8] {
        &self.buf.chunk()[self.layout().tpa()]
    }
}

impl<T: PktBuf> ArpPacket<T> {
    /// Step past the header, returning the buffer positioned at the trailer.
    #[inline]
    pub fn payload(self) -> T {
        let header_len = self.header_len();
        let mut buf = self.buf;
        buf.advance(header_len);
        buf
    }
}

impl<T: PktBufMut> ArpPacket<T> {
    /// Prepend an empty header shaped by `layout` in front of the cursor.
    ///
    /// The length fields are filled in, everything else is zeroed. The
    /// lengths cannot be changed afterwards, since they decide where the
    /// address fields live.
    ///
    /// # Panics
    /// Panics if the headroom of `buf` is shorter than the header.
    #[inline]
    pub fn prepend_header(mut buf: T, layout: ArpLayout) -> Self {
        let header_len = layout.header_len();
        assert!(buf.chunk_headroom() >= header_len);
        buf.move_back(header_len);

        let data = &mut buf.chunk_mut()[0..header_len];
        data.fill(0);
        data[4] = layout.hardware_addr_len() as u8;
        data[5] = layout.protocol_addr_len() as u8;
        Self { buf }
    }

    #[inline]
    pub fn set_hardware_type(&mut self, value: Hardware) {
        NetworkEndian::write_u16(&mut self.buf.chunk_mut()[0..2], u16::from(value));
    }

    #[inline]
    pub fn set_protocol_type(&mut self, value: EtherType) {
        NetworkEndian::write_u16(&mut self.buf.chunk_mut()[2..4], u16::from(value));
    }

    #[inline]
    pub fn set_operation(&mut self, value: Operation) {
        NetworkEndian::write_u16(&mut self.buf.chunk_mut()[6..8], u16::from(value));
    }

    /// Mutable address fields.
    ///
    /// # Panics
    /// Panics if [`ArpPacket::check_header_len`] does not hold.
    #[inline]
    pub fn addrs_mut(&mut self) -> ArpAddrsMut<'_> {
        let layout = self.layout();
        ArpAddrsMut::new(self.buf.chunk_mut(), layout)
    }

    /// # Panics
    /// Panics if `value` is not as wide as the declared hardware length.
    #[inline]
    pub fn set_sender_hardware_addr(&mut self, value: &[u8]) {
        self.addrs_mut().sha.copy_from_slice(value);
    }

    /// # Panics
    /// Panics if `value` is not as wide as the declared protocol length.
    #[inline]
    pub fn set_sender_protocol_addr(&mut self, value: &[u8]) {
        self.addrs_mut().spa.copy_from_slice(value);
    }

    /// # Panics
    /// Panics if `value` is not as wide as the declared hardware length.
    #[inline]
    pub fn set_target_hardware_addr(&mut self, value: &[u8]) {
        self.addrs_mut().tha.copy_from_slice(value);
    }

    /// # Panics
    /// Panics if `value` is not as wide as the declared protocol length.
    #[inline]
    pub fn set_target_protocol_addr(&mut self, value: &[u8]) {
        self.addrs_mut().tpa.copy_from_slice(value);
    }
}
