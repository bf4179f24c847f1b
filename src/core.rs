use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use crate::chunk::ChunkStore;
use crate::cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
use crate::error::RopeVecError;
use crate::iter::{RopeVecIter, RopeVecIterMut, RopeVecRevIter};
use crate::translate::{locate, physical_position, Location};

/// Chunk size used when none is given.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// A chunked, growable, random-access sequence.
///
/// Elements live in fixed-size chunks of `CHUNK_SIZE` slots. Storage grows one
/// whole chunk at a time at either end, so pushing at the back and inserting
/// at the front are both amortised O(1), and insertions elsewhere shift
/// whichever side of the insertion point is shorter.
pub struct RopeVec<T, const CHUNK_SIZE: usize = DEFAULT_CHUNK_SIZE> {
    store: ChunkStore<T, CHUNK_SIZE>,
    len: usize,
    start_offset: usize,
}

impl<T, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    const VALID_CHUNK_SIZE: () = assert!(CHUNK_SIZE > 0, "CHUNK_SIZE must be non-zero");

    /// Creates an empty `RopeVec`. No chunk is allocated until the first write.
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CHUNK_SIZE;
        Self {
            store: ChunkStore::new(),
            len: 0,
            start_offset: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in each chunk.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        CHUNK_SIZE
    }

    /// Number of chunks currently allocated.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.store.live_chunks()
    }

    /// Number of elements the vector can hold at the back without allocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.live_chunks() * CHUNK_SIZE - self.start_offset
    }

    /// Total bytes reserved by allocated chunks.
    #[must_use]
    pub fn memory_used(&self) -> usize {
        self.store.live_chunks() * CHUNK_SIZE * mem::size_of::<T>()
    }

    /// Fraction of reserved slots not holding a live element.
    ///
    /// `0.0` when no chunk is allocated, otherwise in `[0, 1]`.
    #[must_use]
    pub fn fragmentation(&self) -> f64 {
        let reserved = self.store.live_chunks() * CHUNK_SIZE;
        if reserved == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.len as f64 / reserved as f64;
        1.0 - ratio
    }

    fn location(&self, index: usize) -> Location {
        locate::<CHUNK_SIZE>(self.store.front_chunk(), self.start_offset, index)
    }

    fn physical(&self, index: usize) -> usize {
        physical_position::<CHUNK_SIZE>(self.store.front_chunk(), self.start_offset, index)
    }

    #[allow(clippy::expect_used)]
    fn slot(&self, index: usize) -> &T {
        self.store
            .get(self.location(index))
            .expect("Logical index resolves to an allocated chunk")
    }

    #[allow(clippy::expect_used)]
    fn slot_mut(&mut self, index: usize) -> &mut T {
        let location = self.location(index);
        self.store
            .get_mut(location)
            .expect("Logical index resolves to an allocated chunk")
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(self.slot(index))
    }

    /// Gets the element at `index` mutably.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        Some(self.slot_mut(index))
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, RopeVecError> {
        let length = self.len;
        self.get(index)
            .ok_or(RopeVecError::OutOfRange { index, length })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, RopeVecError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(RopeVecError::OutOfRange { index, length })
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyContainer` if the vector is empty.
    pub fn front(&self) -> Result<&T, RopeVecError> {
        self.get(0)
            .ok_or(RopeVecError::EmptyContainer { operation: "front" })
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyContainer` if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, RopeVecError> {
        self.get_mut(0)
            .ok_or(RopeVecError::EmptyContainer { operation: "front_mut" })
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyContainer` if the vector is empty.
    pub fn back(&self) -> Result<&T, RopeVecError> {
        let last = self
            .len
            .checked_sub(1)
            .ok_or(RopeVecError::EmptyContainer { operation: "back" })?;
        Ok(self.slot(last))
    }

    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyContainer` if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, RopeVecError> {
        let last = self
            .len
            .checked_sub(1)
            .ok_or(RopeVecError::EmptyContainer { operation: "back_mut" })?;
        Ok(self.slot_mut(last))
    }

    /// Releases every chunk and resets the vector to its freshly constructed
    /// state.
    pub fn clear(&mut self) {
        let released = self.store.clear();
        if released > 0 {
            log::debug!("clear released {released} chunks");
        }
        self.len = 0;
        self.start_offset = 0;
    }

    /// Releases trailing chunks not needed by the current elements.
    ///
    /// Never changes `len()` or any element. An empty vector releases every
    /// chunk.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.clear();
            return;
        }
        let required = (self.start_offset + self.len).div_ceil(CHUNK_SIZE);
        let released = self.store.truncate(required);
        if released > 0 {
            log::debug!("shrink_to_fit released {released} chunks");
        }
        debug_assert!(self.capacity() >= self.len);
    }

    /// Exchanges contents with `other` without moving any element.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Transfers all chunks out of `self`, leaving it empty and usable.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Returns an iterator over the elements in logical order.
    #[must_use]
    pub fn iter(&self) -> RopeVecIter<'_, T, CHUNK_SIZE> {
        RopeVecIter::new(self)
    }

    /// Returns an iterator over the elements from back to front.
    #[must_use]
    pub fn iter_rev(&self) -> RopeVecRevIter<'_, T, CHUNK_SIZE> {
        RopeVecRevIter::new(self)
    }

    /// Returns a mutable iterator over the elements in logical order.
    pub fn iter_mut(&mut self) -> RopeVecIterMut<'_, T> {
        let len = self.len;
        let start_offset = self.start_offset;
        let end = start_offset + len;
        let needed = if len == 0 { 0 } else { end.div_ceil(CHUNK_SIZE) };
        let tail_end = end - needed.saturating_sub(1) * CHUNK_SIZE;
        RopeVecIterMut::new(self.store.leading_mut(needed), start_offset, tail_end, len)
    }

    /// Returns a mutable iterator over the elements from back to front.
    pub fn iter_mut_rev(&mut self) -> core::iter::Rev<RopeVecIterMut<'_, T>> {
        self.iter_mut().rev()
    }

    /// Returns a cursor positioned at logical index `index`.
    ///
    /// The cursor may point one past the end, or anywhere else; `get()`
    /// returns `None` outside `0..len()`.
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, CHUNK_SIZE> {
        Cursor::new(self, index)
    }

    /// Returns a mutable cursor positioned at logical index `index`.
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T, CHUNK_SIZE> {
        CursorMut::new(self, index)
    }

    /// Returns a reverse cursor `position` steps from the back.
    ///
    /// Position 0 is the last element and position `len()` is one before the
    /// first.
    #[must_use]
    pub fn rev_cursor(&self, position: usize) -> RevCursor<'_, T, CHUNK_SIZE> {
        RevCursor::new(self, position)
    }

    /// Returns a mutable reverse cursor `position` steps from the back.
    pub fn rev_cursor_mut(&mut self, position: usize) -> RevCursorMut<'_, T, CHUNK_SIZE> {
        RevCursorMut::new(self, position)
    }
}

impl<T: Default, const CHUNK_SIZE: usize> RopeVec<T, CHUNK_SIZE> {
    /// Creates an empty `RopeVec` with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut rope = Self::new();
        rope.reserve(capacity);
        rope
    }

    /// Makes `start_offset` non-zero by prepending a chunk when needed.
    fn make_room_at_front(&mut self) {
        if self.start_offset == 0 {
            self.store.grow_front();
            self.start_offset += CHUNK_SIZE;
        }
    }

    /// Appends an element to the back.
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Constructs an element in the next back slot and returns it.
    ///
    /// `make` runs before the vector is touched, so a panic in it leaves the
    /// vector unchanged. Its result then replaces the slot's placeholder.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = make();
        let position = self.physical(self.len);
        self.store.ensure_capacity_for(position);
        let index = self.len;
        self.len += 1;
        let slot = self.slot_mut(index);
        *slot = value;
        slot
    }

    /// Prepends an element. Amortised O(1).
    pub fn push_front(&mut self, value: T) {
        self.make_room_at_front();
        self.start_offset -= 1;
        self.len += 1;
        *self.slot_mut(0) = value;
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let value = mem::take(self.slot_mut(last));
        self.len = last;
        Some(value)
    }

    /// Removes the first element and returns it, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.erase_front().ok()
    }

    /// Inserts `value` at `index`, shifting whichever side is shorter.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::OutOfRange` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), RopeVecError> {
        if index > self.len {
            return Err(RopeVecError::OutOfRange {
                index,
                length: self.len,
            });
        }

        if index == self.len {
            self.push_back(value);
        } else if index == 0 {
            self.push_front(value);
        } else if index < self.len / 2 {
            // open a slot at the front and move the head left by one
            self.make_room_at_front();
            self.start_offset -= 1;
            self.len += 1;
            for i in 0..index {
                *self.slot_mut(i) = mem::take(self.slot_mut(i + 1));
            }
            *self.slot_mut(index) = value;
        } else {
            let position = self.physical(self.len);
            self.store.ensure_capacity_for(position);
            for i in (index..self.len).rev() {
                *self.slot_mut(i + 1) = mem::take(self.slot_mut(i));
            }
            *self.slot_mut(index) = value;
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::OutOfRange` if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T, RopeVecError> {
        if index >= self.len {
            return Err(RopeVecError::OutOfRange {
                index,
                length: self.len,
            });
        }

        let value = mem::take(self.slot_mut(index));
        for i in index..self.len - 1 {
            *self.slot_mut(i) = mem::take(self.slot_mut(i + 1));
        }
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the first element. Amortised O(1).
    ///
    /// The head chunk is released once the start offset crosses its end.
    ///
    /// # Errors
    ///
    /// Returns `RopeVecError::EmptyContainer` if the vector is empty.
    pub fn erase_front(&mut self) -> Result<T, RopeVecError> {
        if self.len == 0 {
            return Err(RopeVecError::EmptyContainer {
                operation: "erase_front",
            });
        }

        let value = mem::take(self.slot_mut(0));
        self.start_offset += 1;
        self.len -= 1;

        if self.start_offset >= CHUNK_SIZE {
            self.store.release_front();
            self.start_offset -= CHUNK_SIZE;
        }
        debug_assert!(self.start_offset < CHUNK_SIZE);
        Ok(value)
    }

    /// Resizes to `new_len` elements.
    ///
    /// Growing fills new slots with `T::default()`. Shrinking drops the
    /// truncated elements but keeps their chunks.
    pub fn resize(&mut self, new_len: usize) {
        if new_len < self.len {
            for i in new_len..self.len {
                *self.slot_mut(i) = T::default();
            }
            self.len = new_len;
        } else if new_len > self.len {
            let position = self.physical(new_len - 1);
            self.store.ensure_capacity_for(position);
            let old_len = self.len;
            self.len = new_len;
            for i in old_len..new_len {
                *self.slot_mut(i) = T::default();
            }
        }
    }

    /// Ensures `capacity() >= capacity`. Never shrinks and never touches
    /// existing elements.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            let position = self.physical(capacity - 1);
            self.store.ensure_capacity_for(position);
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Default for RopeVec<T, CHUNK_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const CHUNK_SIZE: usize> Clone for RopeVec<T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            len: self.len,
            start_offset: self.start_offset,
        }
    }
}

impl<T: fmt::Debug, const CHUNK_SIZE: usize> fmt::Debug for RopeVec<T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const CHUNK_SIZE: usize> PartialEq for RopeVec<T, CHUNK_SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const CHUNK_SIZE: usize> Eq for RopeVec<T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> Index<usize> for RopeVec<T, CHUNK_SIZE> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        self.slot(index)
    }
}

impl<T, const CHUNK_SIZE: usize> IndexMut<usize> for RopeVec<T, CHUNK_SIZE> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        self.slot_mut(index)
    }
}

impl<T: Default, const CHUNK_SIZE: usize> Extend<T> for RopeVec<T, CHUNK_SIZE> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default, const CHUNK_SIZE: usize> FromIterator<T> for RopeVec<T, CHUNK_SIZE> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rope = Self::new();
        rope.extend(iter);
        rope
    }
}
