//! Logical index to physical location arithmetic.
//!
//! A logical index `i` lives at physical position
//! `front_chunk * CHUNK_SIZE + start_offset + i`. The chunk number is the
//! quotient and the slot within the chunk is the remainder. Chunk numbers are
//! absolute: chunks released from the front still count towards them.

/// Physical `(chunk, offset)` location of a logical element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
    pub chunk: usize,
    pub offset: usize,
}

/// Absolute physical position of logical index `index`.
#[inline]
pub(crate) const fn physical_position<const CHUNK_SIZE: usize>(
    front_chunk: usize,
    start_offset: usize,
    index: usize,
) -> usize {
    front_chunk * CHUNK_SIZE + start_offset + index
}

/// Resolves logical index `index` to the chunk and slot holding it.
#[inline]
pub(crate) const fn locate<const CHUNK_SIZE: usize>(
    front_chunk: usize,
    start_offset: usize,
    index: usize,
) -> Location {
    let position = physical_position::<CHUNK_SIZE>(front_chunk, start_offset, index);
    Location {
        chunk: position / CHUNK_SIZE,
        offset: position % CHUNK_SIZE,
    }
}
