use core::ops::Range;

/// Length of the fixed portion of the arp header.
pub const ARP_FIXED_LEN: usize = 8;

/// Largest header the length fields can describe.
pub const ARP_MAX_HEADER_LEN: usize = ARP_FIXED_LEN + 2 * (u8::MAX as usize + u8::MAX as usize);

/// Positions of the address fields of an arp header.
///
/// Ranges are measured from the start of the header, so they can index the
/// header slice directly. The fields follow each other without gaps in the
/// order sender hardware, sender protocol, target hardware, target protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArpLayout {
    hlen: u8,
    plen: u8,
}

impl ArpLayout {
    /// Ethernet hardware addresses and IPv4 protocol addresses.
    pub const ETHER_IPV4: ArpLayout = ArpLayout::new(6, 4);

    /// Layout for `hlen`-byte hardware and `plen`-byte protocol addresses.
    #[inline]
    pub const fn new(hlen: u8, plen: u8) -> Self {
        Self { hlen, plen }
    }

    /// Width of a hardware address.
    #[inline]
    pub const fn hardware_addr_len(&self) -> usize {
        self.hlen as usize
    }

    /// Width of a protocol address.
    #[inline]
    pub const fn protocol_addr_len(&self) -> usize {
        self.plen as usize
    }

    /// Sender hardware address.
    #[inline]
    pub const fn sha(&self) -> Range<usize> {
        let start = ARP_FIXED_LEN;
        start..start + self.hardware_addr_len()
    }

    /// Sender protocol address.
    #[inline]
    pub const fn spa(&self) -> Range<usize> {
        let start = ARP_FIXED_LEN + self.hardware_addr_len();
        start..start + self.protocol_addr_len()
    }

    /// Target hardware address.
    #[inline]
    pub const fn tha(&self) -> Range<usize> {
        let start = ARP_FIXED_LEN + self.hardware_addr_len() + self.protocol_addr_len();
        start..start + self.hardware_addr_len()
    }

    /// Target protocol address.
    #[inline]
    pub const fn tpa(&self) -> Range<usize> {
        let start = ARP_FIXED_LEN + 2 * self.hardware_addr_len() + self.protocol_addr_len();
        start..start + self.protocol_addr_len()
    }

    /// Length of the whole header, fixed portion included.
    #[inline]
    pub const fn header_len(&self) -> usize {
        ARP_FIXED_LEN + 2 * (self.hardware_addr_len() + self.protocol_addr_len())
    }
}
