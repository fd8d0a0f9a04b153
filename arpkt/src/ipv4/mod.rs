//! IPv4, as far as address resolution needs it.

pub use core::net::Ipv4Addr;

enum_sim! {
    /// An enum-like type for representing the payload protocol of IPv4.
    pub struct IpProtocol (u8) {
        /// IP packet payload is ICMP protocol.
        ICMP = 1,
        /// IP packet payload is TCP protocol.
        TCP = 6,
        /// IP packet payload is UDP protocol.
        UDP = 17,
    }
}

mod header;
pub use header::{Ipv4Packet, IPV4_HEADER_LEN, IPV4_HEADER_TEMPLATE};
