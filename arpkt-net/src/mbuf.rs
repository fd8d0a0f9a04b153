use std::fmt;
use std::sync::Arc;

use crate::mempool::PoolShared;

/// How the link layer classified a received frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketType {
    /// Addressed to this host.
    Host,
    Broadcast,
    Multicast,
    /// Addressed to some other host, seen in promiscuous mode.
    OtherHost,
    /// Built locally for transmission.
    Outgoing,
}

/// A packet buffer drawn from a [`crate::Mempool`].
///
/// The data region sits inside a fixed room, with headroom in front of it so
/// that lower layers can prepend their headers. Dropping the buffer returns
/// it to its pool.
pub struct Mbuf {
    room: Box<[u8]>,
    data_off: usize,
    data_len: usize,
    l2_len: usize,
    pkt_type: PacketType,
    pool: Arc<PoolShared>,
}

impl Mbuf {
    pub(crate) fn new(pool: Arc<PoolShared>) -> Self {
        let conf = pool.conf;
        let headroom = usize::from(conf.headroom);
        Self {
            room: vec![0; headroom + usize::from(conf.dataroom)].into_boxed_slice(),
            data_off: headroom,
            data_len: 0,
            l2_len: 0,
            pkt_type: PacketType::Outgoing,
            pool,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data_len == 0
    }

    /// Room left behind the data.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.room.len() - self.data_off - self.data_len
    }

    /// Room left in front of the data.
    #[inline]
    pub fn front_capacity(&self) -> usize {
        self.data_off
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.room[self.data_off..self.data_off + self.data_len]
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.room[self.data_off..self.data_off + self.data_len]
    }

    /// Grow the data region by `cnt` zeroed bytes at the back.
    ///
    /// # Panic:
    /// This function panics if `cnt` exceeds the capacity of the mbuf.
    #[inline]
    pub fn extend(&mut self, cnt: usize) {
        assert!(self.capacity() >= cnt);
        let end = self.data_off + self.data_len;
        self.room[end..end + cnt].fill(0);
        self.data_len += cnt;
    }

    /// # Panic:
    /// This function panics if the length of the slice exceeds the capacity of the mbuf.
    #[inline]
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        let old_len = self.len();
        self.extend(slice.len());
        self.data_mut()[old_len..].copy_from_slice(slice);
    }

    /// Grow the data region by `cnt` zeroed bytes at the front.
    ///
    /// # Panic:
    /// This function panics if `cnt` exceeds the front capacity of the mbuf.
    #[inline]
    pub fn extend_front(&mut self, cnt: usize) {
        assert!(self.front_capacity() >= cnt);
        self.data_off -= cnt;
        self.data_len += cnt;
        self.room[self.data_off..self.data_off + cnt].fill(0);
    }

    #[inline]
    pub fn extend_front_from_slice(&mut self, slice: &[u8]) {
        self.extend_front(slice.len());
        self.data_mut()[..slice.len()].copy_from_slice(slice);
    }

    #[inline]
    pub fn truncate(&mut self, cnt: usize) {
        assert!(cnt <= self.len());
        self.data_len = cnt;
    }

    #[inline]
    pub fn trim_front(&mut self, cnt: usize) {
        assert!(cnt <= self.len());
        self.data_off += cnt;
        self.data_len -= cnt;
        self.l2_len = self.l2_len.saturating_sub(cnt);
    }

    /// Length of the link header at the front of the data.
    #[inline]
    pub fn l2_len(&self) -> usize {
        self.l2_len
    }

    /// # Panic:
    /// This function panics if `val` exceeds the data length.
    #[inline]
    pub fn set_l2_len(&mut self, val: usize) {
        assert!(val <= self.len());
        self.l2_len = val;
    }

    /// The data behind the link header.
    #[inline]
    pub fn network_header(&self) -> &[u8] {
        &self.data()[self.l2_len..]
    }

    #[inline]
    pub fn network_header_mut(&mut self) -> &mut [u8] {
        let l2_len = self.l2_len;
        &mut self.data_mut()[l2_len..]
    }

    #[inline]
    pub fn pkt_type(&self) -> PacketType {
        self.pkt_type
    }

    #[inline]
    pub fn set_pkt_type(&mut self, val: PacketType) {
        self.pkt_type = val;
    }

    /// Empty the buffer and restore the headroom of a fresh allocation.
    pub fn reset(&mut self) {
        self.data_off = usize::from(self.pool.conf.headroom);
        self.data_len = 0;
        self.l2_len = 0;
        self.pkt_type = PacketType::Outgoing;
    }
}

impl fmt::Debug for Mbuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mbuf")
            .field("data_off", &self.data_off)
            .field("data_len", &self.data_len)
            .field("l2_len", &self.l2_len)
            .field("pkt_type", &self.pkt_type)
            .finish()
    }
}

impl Drop for Mbuf {
    fn drop(&mut self) {
        self.pool.release();
    }
}
