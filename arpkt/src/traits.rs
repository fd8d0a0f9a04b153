pub use bytes::Buf;

/// A packet buffer whose cursor can move back towards the start of the
/// underlying storage.
///
/// Moving back exposes the bytes in front of the cursor, which is how headers
/// are prepended in place.
pub trait PktBuf: Buf {
    /// Move the cursor back by `cnt` bytes.
    ///
    /// # Panics
    /// Panics if fewer than `cnt` bytes sit in front of the cursor.
    fn move_back(&mut self, cnt: usize);

    /// Remove `cnt` trailing bytes.
    ///
    /// # Panics
    /// Panics if `cnt` exceeds the remaining length.
    fn trim_off(&mut self, cnt: usize);
}

/// A [`PktBuf`] whose chunk can be written.
pub trait PktBufMut: PktBuf {
    /// Number of bytes in front of the cursor.
    fn chunk_headroom(&self) -> usize;

    /// A mutable chunk slice.
    fn chunk_mut(&mut self) -> &mut [u8];
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        (**self).move_back(cnt)
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        (**self).trim_off(cnt);
    }
}

impl<T: PktBufMut + ?Sized> PktBufMut for &mut T {
    #[inline]
    fn chunk_headroom(&self) -> usize {
        (**self).chunk_headroom()
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        (**self).chunk_mut()
    }
}
