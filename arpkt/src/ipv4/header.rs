#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use crate::ipv4::{IpProtocol, Ipv4Addr};
use crate::{Buf, PktBuf, PktBufMut};

/// Length of an IPv4 header without options.
pub const IPV4_HEADER_LEN: usize = 20;

/// A default IPv4 header: version 4, no options, ttl 64, UDP payload.
pub const IPV4_HEADER_TEMPLATE: [u8; IPV4_HEADER_LEN] = [
    0x45, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00, 0x40, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// An IPv4 packet.
///
/// Only the fields used to route and resolve a packet are exposed.
#[derive(Debug, Clone, Copy)]
pub struct Ipv4Packet<T> {
    buf: T,
}

impl<T: Buf> Ipv4Packet<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    /// Wrap `buf` if it starts with a well-formed IPv4 header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < IPV4_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        if container.version() != 4
            || container.header_len() < IPV4_HEADER_LEN
            || container.header_len() > chunk_len
        {
            return Err(container.buf);
        }
        Ok(container)
    }

    #[inline]
    pub fn version(&self) -> u8 {
        self.buf.chunk()[0] >> 4
    }

    /// Header length in bytes, options included.
    #[inline]
    pub fn header_len(&self) -> usize {
        usize::from(self.buf.chunk()[0] & 0x0f) * 4
    }

    #[inline]
    pub fn ttl(&self) -> u8 {
        self.buf.chunk()[8]
    }

    #[inline]
    pub fn protocol(&self) -> IpProtocol {
        IpProtocol::from(self.buf.chunk()[9])
    }

    #[inline]
    pub fn src_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.chunk()[12..16]))
    }

    #[inline]
    pub fn dst_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.chunk()[16..20]))
    }
}

impl<T: PktBuf> Ipv4Packet<T> {
    #[inline]
    pub fn payload(self) -> T {
        let header_len = self.header_len();
        let mut buf = self.buf;
        buf.advance(header_len);
        buf
    }
}

impl<T: PktBufMut> Ipv4Packet<T> {
    /// Prepend an option-less `header` in front of the cursor of `buf`.
    ///
    /// The total length field is set to cover the header and everything
    /// after the cursor.
    ///
    /// # Panics
    /// Panics if the headroom of `buf` is shorter than the header, or if the
    /// resulting packet is longer than 65535 bytes.
    #[inline]
    pub fn prepend_header(mut buf: T, header: &[u8; IPV4_HEADER_LEN]) -> Self {
        assert!(buf.chunk_headroom() >= IPV4_HEADER_LEN);
        buf.move_back(IPV4_HEADER_LEN);
        let packet_len = buf.remaining();
        assert!(packet_len <= usize::from(u16::MAX));
        buf.chunk_mut()[0..IPV4_HEADER_LEN].copy_from_slice(&header[..]);
        NetworkEndian::write_u16(&mut buf.chunk_mut()[2..4], packet_len as u16);
        Self { buf }
    }

    #[inline]
    pub fn set_ttl(&mut self, value: u8) {
        self.buf.chunk_mut()[8] = value;
    }

    #[inline]
    pub fn set_protocol(&mut self, value: IpProtocol) {
        self.buf.chunk_mut()[9] = u8::from(value);
    }

    #[inline]
    pub fn set_src_addr(&mut self, value: Ipv4Addr) {
        self.buf.chunk_mut()[12..16].copy_from_slice(&value.octets());
    }

    #[inline]
    pub fn set_dst_addr(&mut self, value: Ipv4Addr) {
        self.buf.chunk_mut()[16..20].copy_from_slice(&value.octets());
    }
}
