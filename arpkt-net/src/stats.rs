use std::fmt;

/// Why an inbound packet was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Discard {
    /// The link layer did not classify the frame as ours.
    NotForHost,
    ArpDisabled,
    /// The buffer ends before the declared header does.
    Truncated,
    /// Hardware space or address width disagrees with the device.
    HardwareMismatch,
    BadOperation,
    /// Not ipv4, or protocol addresses that are not four bytes wide.
    UnsupportedProtocol,
    NotOurAddress,
}

impl Discard {
    pub const ALL: [Discard; 7] = [
        Discard::NotForHost,
        Discard::ArpDisabled,
        Discard::Truncated,
        Discard::HardwareMismatch,
        Discard::BadOperation,
        Discard::UnsupportedProtocol,
        Discard::NotOurAddress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Discard::NotForHost => "not for host",
            Discard::ArpDisabled => "arp disabled",
            Discard::Truncated => "truncated",
            Discard::HardwareMismatch => "hardware mismatch",
            Discard::BadOperation => "bad operation",
            Discard::UnsupportedProtocol => "unsupported protocol",
            Discard::NotOurAddress => "not our address",
        }
    }
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-engine packet counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArpStats {
    pub rx_packets: u64,
    pub rx_requests: u64,
    pub rx_replies: u64,
    pub tx_requests: u64,
    pub tx_replies: u64,
    discards: [u64; 7],
}

impl ArpStats {
    /// Packets dropped for `reason`.
    #[inline]
    pub fn discarded(&self, reason: Discard) -> u64 {
        self.discards[reason as usize]
    }

    pub fn total_discarded(&self) -> u64 {
        self.discards.iter().sum()
    }

    #[inline]
    pub(crate) fn count_discard(&mut self, reason: Discard) {
        self.discards[reason as usize] += 1;
    }
}
