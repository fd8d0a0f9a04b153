use arpkt::ipv4::Ipv4Addr;

quick_error! {
    /// Errors surfaced by the arp engine.
    ///
    /// Malformed input never shows up here: inbound packets that fail
    /// validation are dropped and counted in [`crate::ArpStats`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ArpError {
        InvalidArgument(reason: &'static str) {
            display("invalid argument: {}", reason)
        }
        NoMemory {
            display("out of packet buffers")
        }
        NoRoute(dst: Ipv4Addr) {
            display("no route to {}", dst)
        }
        Pending(next_hop: Ipv4Addr) {
            display("resolution of {} in progress", next_hop)
        }
        BadPacket(reason: &'static str) {
            display("bad packet: {}", reason)
        }
        Device(reason: String) {
            display("device error: {}", reason)
        }
    }
}

impl ArpError {
    /// Whether the error only says that a resolution request went out.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, ArpError::Pending(_))
    }
}

pub type Result<T> = std::result::Result<T, ArpError>;
