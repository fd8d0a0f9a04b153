//! The device side of the engine.

use std::fmt;

use arpkt::arp::Hardware;
use arpkt::ether::{EtherAddr, EtherPacket, EtherType, ETHER_HEADER_LEN};
use arpkt::CursorMut;
use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{ArpError, Mbuf, Result};

/// Longest hardware address a device may carry.
pub const MAX_ADDR_LEN: usize = 32;

bitflags! {
    /// Interface flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DevFlags: u32 {
        const UP = 1 << 0;
        const BROADCAST = 1 << 1;
        const LOOPBACK = 1 << 2;
        /// Arp is disabled on the interface.
        const NOARP = 1 << 3;
    }
}

/// A hardware address of up to [`MAX_ADDR_LEN`] bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct HwAddr(ArrayVec<u8, MAX_ADDR_LEN>);

impl HwAddr {
    /// Copy `data` into a new address, or `None` if it is too long.
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        let mut addr = ArrayVec::new();
        addr.try_extend_from_slice(data).ok()?;
        Some(Self(addr))
    }

    /// The all-zero address of `len` bytes.
    pub fn zeroed(len: usize) -> Option<Self> {
        Self::filled(0, len)
    }

    /// The all-ones address of `len` bytes.
    pub fn broadcast(len: usize) -> Option<Self> {
        Self::filled(0xff, len)
    }

    fn filled(byte: u8, len: usize) -> Option<Self> {
        if len > MAX_ADDR_LEN {
            return None;
        }
        Some(Self((0..len).map(|_| byte).collect()))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn is_broadcast(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|b| *b == 0xff)
    }
}

impl From<EtherAddr> for HwAddr {
    fn from(value: EtherAddr) -> Self {
        // six bytes always fit
        let mut addr = ArrayVec::new();
        addr.extend(value.0);
        Self(addr)
    }
}

impl AsRef<[u8]> for HwAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HwAddr({})", self)
    }
}

/// A network interface as seen by the arp engine.
pub trait NetDevice {
    fn name(&self) -> &str;

    fn index(&self) -> u32;

    fn hw_addr(&self) -> &[u8];

    fn addr_len(&self) -> usize {
        self.hw_addr().len()
    }

    /// Hardware address space of the link, written into outgoing headers.
    fn link_type(&self) -> Hardware;

    fn flags(&self) -> DevFlags;

    /// Prepend the link header for a `proto` payload already in `pkt`.
    ///
    /// A `None` destination means the link broadcast address. The default
    /// builds an ethernet header.
    fn build_link_header(
        &self,
        pkt: &mut Mbuf,
        proto: EtherType,
        dst: Option<&[u8]>,
        src: &[u8],
    ) -> Result<()> {
        ether_link_header(pkt, proto, dst, src)
    }

    /// Hand `pkt` to the driver. The device owns the buffer from here on,
    /// whether or not the call succeeds.
    fn transmit(&mut self, pkt: Mbuf) -> Result<()>;
}

/// Prepend an ethernet header to `pkt`.
pub fn ether_link_header(
    pkt: &mut Mbuf,
    proto: EtherType,
    dst: Option<&[u8]>,
    src: &[u8],
) -> Result<()> {
    let dst = match dst {
        Some(addr) if addr.len() == 6 => EtherAddr::from_bytes(addr),
        Some(_) => return Err(ArpError::InvalidArgument("ethernet address length")),
        None => EtherAddr::BROADCAST,
    };
    if src.len() != 6 {
        return Err(ArpError::InvalidArgument("ethernet address length"));
    }
    if pkt.front_capacity() < ETHER_HEADER_LEN {
        return Err(ArpError::NoMemory);
    }

    pkt.extend_front(ETHER_HEADER_LEN);
    let mut eth_pkt =
        EtherPacket::parse_unchecked(CursorMut::new(&mut pkt.data_mut()[..ETHER_HEADER_LEN]));
    eth_pkt.set_dst_addr(dst);
    eth_pkt.set_src_addr(EtherAddr::from_bytes(src));
    eth_pkt.set_ethertype(proto);
    pkt.set_l2_len(ETHER_HEADER_LEN);
    Ok(())
}
