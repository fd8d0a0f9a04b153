//! Address Resolution Protocol (RFC 826).
//!
//! The header is a fixed eight-byte portion followed by four address fields
//! whose widths are declared in the fixed portion. [`ArpLayout`] computes where
//! the address fields sit, [`ArpPacket`] reads and writes them.

enum_sim! {
    /// Hardware address space of the arp protocol.
    pub struct Hardware (u16) {
        /// The contained hardware address is Ethernet address.
        ETHERNET = 1,
        /// IEEE 802 networks.
        IEEE802 = 6,
    }
}

enum_sim! {
    /// Operation type of the arp protocol.
    pub struct Operation (u16) {
        /// Arp request.
        REQUEST = 1,
        /// Arp response.
        REPLY = 2,
    }
}

mod layout;
pub use layout::{ArpLayout, ARP_FIXED_LEN, ARP_MAX_HEADER_LEN};

mod header;
pub use header::{ArpAddrs, ArpAddrsMut, ArpPacket};
