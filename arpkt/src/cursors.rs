use bytes::Buf;

use crate::{PktBuf, PktBufMut};

/// A read cursor over a byte slice.
///
/// The bytes in front of the cursor stay reachable through
/// [`PktBuf::move_back`], so a parser can step back over a header it has
/// already walked past.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    /// The whole buffer, from the start of the storage up to the current end.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        &self.buf[..self.end]
    }

    /// The chunk, borrowed for the lifetime of the underlying storage.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.pos..self.end]
    }

    /// Current cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}

impl<'a> PktBuf for Cursor<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.pos);
        self.pos -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

/// A write cursor over a mutable byte slice.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buf: &'a mut [u8],
    pos: usize,
    end: usize,
}

impl<'a> CursorMut<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let end = buf.len();
        CursorMut { buf, pos: 0, end }
    }

    /// The whole buffer, from the start of the storage up to the current end.
    #[inline]
    pub fn buf(&self) -> &[u8] {
        &self.buf[..self.end]
    }

    /// Consume the cursor, returning the chunk with the storage lifetime.
    #[inline]
    pub fn chunk_mut_shared_lifetime(self) -> &'a mut [u8] {
        let CursorMut { buf, pos, end } = self;
        &mut buf[pos..end]
    }

    /// Current cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.pos..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.pos += cnt;
    }
}

impl<'a> PktBuf for CursorMut<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.pos);
        self.pos -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

impl<'a> PktBufMut for CursorMut<'a> {
    #[inline]
    fn chunk_headroom(&self) -> usize {
        self.pos
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..self.end]
    }
}
