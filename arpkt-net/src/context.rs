//! Collaborators the engine consults but does not own.
//!
//! Each trait is narrow enough to be replaced by a test double. A single
//! value implementing all four is an [`ArpContext`].

use arpkt::ipv4::Ipv4Addr;

use crate::{HwAddr, Mbuf, Result};

/// The routing table.
pub trait Routes {
    /// The next hop towards `dst`, or `None` if there is no route.
    fn next_hop(&self, dst: Ipv4Addr) -> Option<Ipv4Addr>;
}

/// The neighbour cache.
pub trait Neighbours {
    fn lookup(&self, pa: Ipv4Addr, ifindex: u32) -> Option<HwAddr>;

    /// Insert or refresh the mapping `pa -> ha` on interface `ifindex`.
    fn update(&mut self, pa: Ipv4Addr, ha: &HwAddr, ifindex: u32) -> Result<()>;
}

/// Packets parked until their next hop is resolved.
pub trait PendingQueue {
    fn enqueue(&mut self, next_hop: Ipv4Addr, ifindex: u32, pkt: Mbuf);

    /// Remove and return every packet parked for `pa` on `ifindex`.
    fn drain(&mut self, pa: Ipv4Addr, ifindex: u32) -> Vec<Mbuf>;
}

/// Addresses configured on this host.
pub trait HostAddrs {
    /// Whether `ip` belongs to the host or is a loopback address.
    fn is_local(&self, ip: Ipv4Addr) -> bool;

    /// The ipv4 address of interface `ifindex`.
    fn ifaddr(&self, ifindex: u32) -> Option<Ipv4Addr>;

    /// Whether interface `ifindex` answers for `pa`.
    fn owns_addr(&self, pa: Ipv4Addr, ifindex: u32) -> bool {
        self.ifaddr(ifindex) == Some(pa)
    }
}

/// Everything the engine needs from the rest of the stack.
pub trait ArpContext: Routes + Neighbours + PendingQueue + HostAddrs {}

impl<T: Routes + Neighbours + PendingQueue + HostAddrs> ArpContext for T {}
