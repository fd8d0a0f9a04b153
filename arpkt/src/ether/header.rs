use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::{EtherAddr, EtherType};
use crate::{Buf, PktBuf, PktBufMut};

/// A constant that defines the fixed byte length of the Ethernet II header.
pub const ETHER_HEADER_LEN: usize = 14;

/// A default Ethernet II header: zero addresses, ARP payload.
pub const ETHER_HEADER_TEMPLATE: [u8; ETHER_HEADER_LEN] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x06,
];

/// An Ethernet II frame.
#[derive(Debug, Clone, Copy)]
pub struct EtherPacket<T> {
    buf: T,
}

impl<T: Buf> EtherPacket<T> {
    /// Wrap `buf` without checking its length.
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

    /// Wrap `buf` if its chunk holds a whole header, otherwise hand it back.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        if buf.chunk().len() < ETHER_HEADER_LEN {
            return Err(buf);
        }
        Ok(Self { buf })
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..ETHER_HEADER_LEN]
    }

    /// Destination address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.chunk()[0..6])
    }

    /// Source address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.chunk()[6..12])
    }

    /// Payload protocol.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[12..14]))
    }
}

impl<T: PktBuf> EtherPacket<T> {
    /// Step past the header, returning the buffer positioned at the payload.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(ETHER_HEADER_LEN);
        buf
    }
}

impl<T: PktBufMut> EtherPacket<T> {
    /// Prepend `header` in front of the cursor of `buf`.
    ///
    /// # Panics
    /// Panics if the headroom of `buf` is shorter than the header.
    #[inline]
    pub fn prepend_header(mut buf: T, header: &[u8; ETHER_HEADER_LEN]) -> Self {
        assert!(buf.chunk_headroom() >= ETHER_HEADER_LEN);
        buf.move_back(ETHER_HEADER_LEN);
        buf.chunk_mut()[0..ETHER_HEADER_LEN].copy_from_slice(&header[..]);
        Self { buf }
    }

    /// Set the destination address.
    #[inline]
    pub fn set_dst_addr(&mut self, value: EtherAddr) {
        self.buf.chunk_mut()[0..6].copy_from_slice(value.as_bytes());
    }

    /// Set the source address.
    #[inline]
    pub fn set_src_addr(&mut self, value: EtherAddr) {
        self.buf.chunk_mut()[6..12].copy_from_slice(value.as_bytes());
    }

    /// Set the payload protocol.
    #[inline]
    pub fn set_ethertype(&mut self, value: EtherType) {
        NetworkEndian::write_u16(&mut self.buf.chunk_mut()[12..14], u16::from(value));
    }
}
