#![no_std]

//! `RopeVec`: a chunked, growable, random-access sequence.
//!
//! `RopeVec` stores its elements in fixed-size chunks instead of one flat
//! buffer. Chunks are allocated in bulk, one at a time, and can be added at
//! either end of the sequence, so growing at the front is as cheap as growing
//! at the back and no existing element is moved when storage grows.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! Storage layout: `[released chunks...][chunk][chunk]...[chunk]`.
//! Logical index `i` is found at physical position
//! `front_chunk * CHUNK_SIZE + start_offset + i`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `push_front()`, `pop_back()`, `erase_front()`: amortised O(1)
//! - `get()`, `at()`, indexing: O(1) - pure arithmetic on the chunk size
//! - `insert()`: O(min(i, n - i)) - shifts the shorter side of the insertion point
//! - `erase()`: O(n - i) - shifts the tail left
//! - `swap()`, `take()`: O(1) - no element is touched
//! - `clear()`: O(chunks) - releases every chunk
//!
//! ## Space Complexity
//! - Memory is reserved in whole chunks: `chunk_count() * CHUNK_SIZE` slots
//! - `shrink_to_fit()` releases trailing chunks not needed by the live elements
//! - `memory_used()` and `fragmentation()` report the reserved bytes and the
//!   unused share of the reserved slots
//!
//! ## Element Requirements
//! Operations that allocate or move elements need `T: Default`. Every slot is
//! initialised with `T::default()` when its chunk is allocated, and vacated
//! slots are refilled with `T::default()`.
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` through the
//! std-enabled error derive:
//! ```toml
//! [dependencies]
//! ropevec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rope: RopeVec<i32> = RopeVec::new();
//!
//! for value in [10, 20, 30, 40, 50] {
//!     rope.push_back(value);
//! }
//!
//! assert_eq!(rope.len(), 5);
//! assert_eq!(rope.front(), Ok(&10));
//! assert_eq!(rope.back(), Ok(&50));
//! assert_eq!(rope[2], 30);
//! assert!(rope.at(5).is_err());
//! ```
//!
//! # Front Growth
//!
//! Inserting at or near the front prepends a chunk instead of shifting the
//! whole sequence:
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rope: RopeVec<i32, 4> = [10, 20, 30].into_iter().collect();
//!
//! rope.insert(0, 5).unwrap();
//! assert_eq!(rope.iter().copied().collect::<Vec<_>>(), [5, 10, 20, 30]);
//!
//! assert_eq!(rope.erase_front(), Ok(5));
//! assert_eq!(rope.len(), 3);
//! ```
//!
//! # Capacity Accounting
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rope: RopeVec<u64, 8> = RopeVec::new();
//! assert_eq!(rope.fragmentation(), 0.0);
//!
//! rope.reserve(20);
//! assert!(rope.capacity() >= 20);
//! assert_eq!(rope.chunk_count(), 3);
//! assert_eq!(rope.memory_used(), 3 * 8 * 8);
//!
//! rope.extend(0..16);
//! rope.shrink_to_fit();
//! assert_eq!(rope.capacity(), 16);
//! assert_eq!(rope.fragmentation(), 0.0);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rope: RopeVec<i32> = (1..=4).collect();
//!
//! for value in &mut rope {
//!     *value *= 10;
//! }
//!
//! let forward: Vec<_> = rope.iter().copied().collect();
//! let backward: Vec<_> = rope.iter_rev().copied().collect();
//! assert_eq!(forward, [10, 20, 30, 40]);
//! assert_eq!(backward, [40, 30, 20, 10]);
//!
//! let begin = rope.cursor(0);
//! let end = rope.cursor(rope.len());
//! assert_eq!(end - begin, 4);
//! assert_eq!((begin + 2).get(), Some(&30));
//! ```

extern crate alloc;

mod chunk;
mod core;
mod cursor;
mod error;
mod iter;
mod translate;

// Re-export public types and traits
pub use crate::core::{RopeVec, DEFAULT_CHUNK_SIZE};
pub use cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
pub use error::RopeVecError;
pub use iter::{RopeVecIntoIter, RopeVecIter, RopeVecIterMut, RopeVecRevIter};
