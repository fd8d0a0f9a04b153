use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::Mbuf;

#[derive(Clone, Copy, Debug)]
pub struct MempoolConf {
    pub nb_mbufs: u32,
    pub dataroom: u16,
    pub headroom: u16,
}

impl MempoolConf {
    pub const NB_MBUFS: u32 = 2048;
    pub const DATAROOM: u16 = 2048;
    pub const HEADROOM: u16 = 128;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_nb_mbufs(&mut self, val: u32) {
        self.nb_mbufs = val;
    }

    pub fn set_dataroom(&mut self, val: u16) {
        self.dataroom = val;
    }

    pub fn set_headroom(&mut self, val: u16) {
        self.headroom = val;
    }
}

impl Default for MempoolConf {
    fn default() -> Self {
        Self {
            nb_mbufs: Self::NB_MBUFS,
            dataroom: Self::DATAROOM,
            headroom: Self::HEADROOM,
        }
    }
}

#[derive(Debug)]
pub(crate) struct PoolShared {
    pub(crate) conf: MempoolConf,
    in_use: AtomicU32,
}

impl PoolShared {
    #[inline]
    pub(crate) fn release(&self) {
        self.in_use.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A bounded pool of packet buffers.
///
/// The pool only keeps count of the buffers it has handed out. An [`Mbuf`]
/// gives its slot back when it is dropped, so the count stays exact no matter
/// which path a buffer leaves through.
#[derive(Clone, Debug)]
pub struct Mempool {
    shared: Arc<PoolShared>,
}

impl Mempool {
    pub fn new(conf: &MempoolConf) -> Self {
        Self {
            shared: Arc::new(PoolShared {
                conf: *conf,
                in_use: AtomicU32::new(0),
            }),
        }
    }

    /// Take a buffer from the pool, or `None` if every buffer is in use.
    #[inline]
    pub fn try_alloc(&self) -> Option<Mbuf> {
        let limit = self.shared.conf.nb_mbufs;
        self.shared
            .in_use
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                if n < limit {
                    Some(n + 1)
                } else {
                    None
                }
            })
            .ok()?;
        Some(Mbuf::new(self.shared.clone()))
    }

    /// Number of buffers currently handed out.
    #[inline]
    pub fn in_use(&self) -> u32 {
        self.shared.in_use.load(Ordering::Acquire)
    }

    #[inline]
    pub fn available(&self) -> u32 {
        self.shared.conf.nb_mbufs - self.in_use()
    }

    pub fn conf(&self) -> &MempoolConf {
        &self.shared.conf
    }
}
