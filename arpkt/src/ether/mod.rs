//! Ethernet II framing.

use core::fmt;

enum_sim! {
    /// An enum-like type for representing Ethertype in Ethernet frame.
    pub struct EtherType (u16) {
        /// Frame payload is Arp protocol.
        ARP = 0x0806,
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// The all-zero address, used by the stack to mean "this host".
    pub const ZERO: EtherAddr = EtherAddr([0; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut groups = s.as_ref().split(':');
        for byte in result.iter_mut() {
            let group = groups.next()?;
            if group.len() != 2 {
                return None;
            }
            *byte = u8::from_str_radix(group, 16).ok()?;
        }
        if groups.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

mod header;
pub use header::{EtherPacket, ETHER_HEADER_LEN, ETHER_HEADER_TEMPLATE};
