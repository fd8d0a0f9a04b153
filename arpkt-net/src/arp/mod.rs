use crate::{ArpConf, ArpContext, ArpStats, Mempool};

mod build;
pub use build::ArpMsg;

mod input;
mod resolve;

/// The arp engine.
///
/// One engine serves every interface of a host. A call runs to completion on
/// the caller's context: nothing blocks and nothing is retried later, a
/// resolution that cannot finish at once reports [`crate::ArpError::Pending`]
/// and leaves the rest to the reply handler.
#[derive(Debug)]
pub struct Arp<C> {
    ctx: C,
    mempool: Mempool,
    conf: ArpConf,
    stats: ArpStats,
}

impl<C: ArpContext> Arp<C> {
    /// Create an engine that allocates its requests from `mempool`.
    pub fn new(ctx: C, mempool: Mempool, conf: ArpConf) -> Self {
        Self {
            ctx,
            mempool,
            conf,
            stats: ArpStats::default(),
        }
    }

    pub fn ctx(&self) -> &C {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn conf(&self) -> &ArpConf {
        &self.conf
    }

    pub fn stats(&self) -> &ArpStats {
        &self.stats
    }

    pub fn mempool(&self) -> &Mempool {
        &self.mempool
    }
}
