//! An RFC 826 address resolution engine.
//!
//! [`Arp`] answers requests for local addresses, feeds replies into the
//! neighbour cache and resolves the link destination of outgoing ipv4
//! packets. Routing, the neighbour cache, the queue of packets waiting on a
//! resolution and the host's address set live outside the engine and are
//! reached through the traits in [`context`].

#[macro_use]
extern crate quick_error;

mod error;
pub use error::{ArpError, Result};

mod conf;
pub use conf::ArpConf;

mod mempool;
pub use mempool::{Mempool, MempoolConf};

mod mbuf;
pub use mbuf::{Mbuf, PacketType};

pub mod device;
pub use device::{DevFlags, HwAddr, NetDevice};

pub mod context;
pub use context::{ArpContext, HostAddrs, Neighbours, PendingQueue, Routes};

mod stats;
pub use stats::{ArpStats, Discard};

mod arp;
pub use arp::{Arp, ArpMsg};
