use alloc::boxed::Box;
use alloc::collections::vec_deque::{self, VecDeque};
use core::iter;

use crate::translate::Location;

/// A fixed-capacity block of element slots, allocated and freed as one unit.
///
/// Every slot always holds an initialised value: a live element or the
/// `T::default()` placeholder. The memory is released when the chunk is
/// dropped, which happens exactly once when it leaves the [`ChunkStore`].
#[derive(Debug, Clone)]
pub(crate) struct Chunk<T> {
    slots: Box<[T]>,
}

impl<T: Default> Chunk<T> {
    fn allocate(size: usize) -> Self {
        log::trace!("allocating chunk of {size} slots");
        Self {
            slots: iter::repeat_with(T::default).take(size).collect(),
        }
    }
}

impl<T> Chunk<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> Drop for Chunk<T> {
    fn drop(&mut self) {
        log::trace!("releasing chunk of {} slots", self.slots.len());
    }
}

/// Ordered collection of the chunks currently holding (or reserved for) live
/// elements.
///
/// Chunk numbers are absolute. `front_chunk` counts the chunks that have been
/// released from the head; they are no longer stored, so chunk number `c`
/// lives at `chunks[c - front_chunk]`.
#[derive(Debug, Clone)]
pub(crate) struct ChunkStore<T, const CHUNK_SIZE: usize> {
    chunks: VecDeque<Chunk<T>>,
    front_chunk: usize,
}

impl<T, const CHUNK_SIZE: usize> ChunkStore<T, CHUNK_SIZE> {
    pub const fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
            front_chunk: 0,
        }
    }

    /// Number of chunks released from the head since the last reset.
    pub fn front_chunk(&self) -> usize {
        self.front_chunk
    }

    /// Number of chunks currently allocated.
    pub fn live_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// First absolute physical position not backed by an allocated chunk.
    pub fn end_position(&self) -> usize {
        (self.front_chunk + self.chunks.len()) * CHUNK_SIZE
    }

    pub fn get(&self, location: Location) -> Option<&T> {
        let chunk = location.chunk.checked_sub(self.front_chunk)?;
        self.chunks.get(chunk)?.as_slice().get(location.offset)
    }

    pub fn get_mut(&mut self, location: Location) -> Option<&mut T> {
        let chunk = location.chunk.checked_sub(self.front_chunk)?;
        self.chunks.get_mut(chunk)?.as_mut_slice().get_mut(location.offset)
    }

    /// Frees the head chunk. The caller guarantees it holds no live element.
    pub fn release_front(&mut self) {
        if self.chunks.pop_front().is_some() {
            self.front_chunk += 1;
        }
    }

    /// Frees trailing chunks until at most `live_chunks` remain.
    ///
    /// Returns the number of chunks released.
    pub fn truncate(&mut self, live_chunks: usize) -> usize {
        let released = self.chunks.len().saturating_sub(live_chunks);
        self.chunks.truncate(live_chunks);
        released
    }

    /// Frees every chunk and resets the front counter.
    ///
    /// Returns the number of chunks released.
    pub fn clear(&mut self) -> usize {
        let released = self.chunks.len();
        self.chunks.clear();
        self.front_chunk = 0;
        released
    }

    /// Mutable iterator over the first `count` allocated chunks.
    pub fn leading_mut(&mut self, count: usize) -> vec_deque::IterMut<'_, Chunk<T>> {
        let count = count.min(self.chunks.len());
        self.chunks.range_mut(..count)
    }
}

impl<T: Default, const CHUNK_SIZE: usize> ChunkStore<T, CHUNK_SIZE> {
    /// Appends chunks, one at a time, until `position` is backed by storage.
    pub fn ensure_capacity_for(&mut self, position: usize) {
        while position >= self.end_position() {
            self.chunks.push_back(Chunk::allocate(CHUNK_SIZE));
        }
    }

    /// Prepends one chunk.
    ///
    /// The caller must add `CHUNK_SIZE` to its start offset so that every
    /// live logical index keeps resolving to the same element.
    pub fn grow_front(&mut self) {
        self.chunks.push_front(Chunk::allocate(CHUNK_SIZE));
        // Re-use a released chunk number when there is one; otherwise the
        // absolute numbering shifts by one together with the start offset.
        self.front_chunk = self.front_chunk.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::locate;

    #[test]
    fn test_new_store_has_no_chunks() {
        let store: ChunkStore<u32, 4> = ChunkStore::new();
        assert_eq!(store.live_chunks(), 0);
        assert_eq!(store.front_chunk(), 0);
        assert_eq!(store.end_position(), 0);
        assert!(store.get(Location { chunk: 0, offset: 0 }).is_none());
    }

    #[test]
    fn test_ensure_capacity_allocates_whole_chunks() {
        let mut store: ChunkStore<u32, 4> = ChunkStore::new();
        store.ensure_capacity_for(0);
        assert_eq!(store.live_chunks(), 1);
        store.ensure_capacity_for(3);
        assert_eq!(store.live_chunks(), 1);
        store.ensure_capacity_for(9);
        assert_eq!(store.live_chunks(), 3);
        assert_eq!(store.end_position(), 12);
    }

    #[test]
    fn test_slots_start_as_default() {
        let mut store: ChunkStore<u32, 4> = ChunkStore::new();
        store.ensure_capacity_for(7);
        for position in 0..8 {
            assert_eq!(store.get(locate::<4>(0, 0, position)), Some(&0));
        }
    }

    #[test]
    fn test_grow_front_keeps_values_reachable() {
        let mut store: ChunkStore<u32, 4> = ChunkStore::new();
        store.ensure_capacity_for(0);
        *store.get_mut(locate::<4>(0, 0, 2)).unwrap() = 42;

        store.grow_front();
        // start offset moves by one chunk
        let front = store.front_chunk();
        assert_eq!(store.get(locate::<4>(front, 4, 2)), Some(&42));
        assert_eq!(store.live_chunks(), 2);
    }

    #[test]
    fn test_release_front_then_grow_front_reuses_number() {
        let mut store: ChunkStore<u32, 4> = ChunkStore::new();
        store.ensure_capacity_for(11);
        *store.get_mut(locate::<4>(0, 0, 5)).unwrap() = 7;

        store.release_front();
        assert_eq!(store.front_chunk(), 1);
        assert_eq!(store.live_chunks(), 2);
        assert_eq!(store.get(locate::<4>(1, 0, 1)), Some(&7));
        assert!(store.get(Location { chunk: 0, offset: 0 }).is_none());

        store.grow_front();
        assert_eq!(store.front_chunk(), 0);
        assert_eq!(store.get(locate::<4>(0, 4, 1)), Some(&7));
    }

    #[test]
    fn test_truncate_and_clear_report_released_chunks() {
        let mut store: ChunkStore<u32, 4> = ChunkStore::new();
        store.ensure_capacity_for(15);
        assert_eq!(store.truncate(2), 2);
        assert_eq!(store.truncate(5), 0);
        store.release_front();
        assert_eq!(store.clear(), 1);
        assert_eq!(store.front_chunk(), 0);
        assert_eq!(store.live_chunks(), 0);
    }
}
