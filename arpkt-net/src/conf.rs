/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArpConf {
    /// Whether a request aimed at this host also refreshes the cache entry of
    /// the requester.
    pub learn_from_requests: bool,
}

impl ArpConf {
    pub const LEARN_FROM_REQUESTS: bool = false;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_learn_from_requests(&mut self, val: bool) {
        self.learn_from_requests = val;
    }
}

impl Default for ArpConf {
    fn default() -> Self {
        Self {
            learn_from_requests: Self::LEARN_FROM_REQUESTS,
        }
    }
}
