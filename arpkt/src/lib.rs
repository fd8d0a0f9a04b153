#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Zero-copy codecs for the headers an ARP engine reads and writes.
//!
//! Every header type wraps a buffer implementing [`Buf`] (for parsing) or
//! [`PktBufMut`] (for building). Headers are built back to front: the payload
//! is placed first and each header is prepended into the headroom in front of
//! the cursor.

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf, PktBufMut};

mod cursors;
pub use cursors::{Cursor, CursorMut};

pub mod arp;
pub mod ether;
pub mod ipv4;
