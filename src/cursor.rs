//! Random-access cursors.
//!
//! A cursor is a container reference plus a logical index. It never caches a
//! physical location: every access goes back through the index translation,
//! so a cursor keeps pointing at the same logical slot while the container
//! allocates chunks at either end. Operations that renumber elements
//! (`insert`, `erase`, `erase_front`) move the elements under it instead.
//!
//! Reverse cursors count positions from the back: position 0 is the last
//! element and position `len()` is one before the first. Arithmetic, ordering
//! and difference all run in that reversed order.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::core::RopeVec;

/// Read-only cursor into a `RopeVec`
///
/// Cursors compare by logical index. Cursors into different containers are
/// never equal and have no ordering.
pub struct Cursor<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a RopeVec<T, CHUNK_SIZE>,
    index: usize,
}

impl<'a, T, const CHUNK_SIZE: usize> Cursor<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a RopeVec<T, CHUNK_SIZE>, index: usize) -> Self {
        Self { rope, index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, or `None` outside `0..len()`.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.rope.get(self.index)
    }

    /// The element `offset` positions away from the cursor.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        self.rope.get(self.index.checked_add_signed(offset)?)
    }

    pub fn move_next(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    pub fn move_prev(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }

    /// Signed distance `self - other` in logical positions.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance(&self, other: &Self) -> isize {
        (self.index as isize).wrapping_sub(other.index as isize)
    }

    fn same_container(&self, other: &Self) -> bool {
        ptr::eq(self.rope, other.rope)
    }
}

impl<T, const CHUNK_SIZE: usize> Clone for Cursor<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const CHUNK_SIZE: usize> Copy for Cursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> core::fmt::Debug for Cursor<'_, T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor").field("index", &self.index).finish()
    }
}

impl<T, const CHUNK_SIZE: usize> PartialEq for Cursor<'_, T, CHUNK_SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.index == other.index
    }
}

impl<T, const CHUNK_SIZE: usize> Eq for Cursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> PartialOrd for Cursor<'_, T, CHUNK_SIZE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_container(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T, const CHUNK_SIZE: usize> AddAssign<isize> for Cursor<'_, T, CHUNK_SIZE> {
    fn add_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
    }
}

impl<T, const CHUNK_SIZE: usize> SubAssign<isize> for Cursor<'_, T, CHUNK_SIZE> {
    fn sub_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<T, const CHUNK_SIZE: usize> Add<isize> for Cursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub<isize> for Cursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub for Cursor<'_, T, CHUNK_SIZE> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        self.distance(&other)
    }
}

/// Mutable cursor into a `RopeVec`
///
/// Holds the container exclusively. [`CursorMut::container`] hands it back out
/// so storage can grow while the cursor keeps its logical index.
pub struct CursorMut<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a mut RopeVec<T, CHUNK_SIZE>,
    index: usize,
}

impl<'a, T, const CHUNK_SIZE: usize> CursorMut<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a mut RopeVec<T, CHUNK_SIZE>, index: usize) -> Self {
        Self { rope, index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.rope.get(self.index)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.rope.get_mut(self.index)
    }

    pub fn move_next(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    pub fn move_prev(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }

    /// Moves the cursor by `offset` logical positions.
    pub fn seek(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
    }

    /// The underlying container.
    pub fn container(&mut self) -> &mut RopeVec<T, CHUNK_SIZE> {
        self.rope
    }

    /// A read-only cursor at the same position.
    ///
    /// Ordering and difference are taken on read-only cursors.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, CHUNK_SIZE> {
        Cursor::new(self.rope, self.index)
    }
}

impl<T, const CHUNK_SIZE: usize> AddAssign<isize> for CursorMut<'_, T, CHUNK_SIZE> {
    fn add_assign(&mut self, offset: isize) {
        self.seek(offset);
    }
}

impl<T, const CHUNK_SIZE: usize> SubAssign<isize> for CursorMut<'_, T, CHUNK_SIZE> {
    fn sub_assign(&mut self, offset: isize) {
        self.seek(offset.wrapping_neg());
    }
}

impl<T, const CHUNK_SIZE: usize> Add<isize> for CursorMut<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub<isize> for CursorMut<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

/// Logical index of reverse position `position` in a vector of length `len`.
fn reverse_index(len: usize, position: usize) -> Option<usize> {
    len.checked_sub(position.checked_add(1)?)
}

/// Read-only reverse cursor into a `RopeVec`
///
/// Moving forward walks towards the front of the vector.
pub struct RevCursor<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a RopeVec<T, CHUNK_SIZE>,
    position: usize,
}

impl<'a, T, const CHUNK_SIZE: usize> RevCursor<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a RopeVec<T, CHUNK_SIZE>, position: usize) -> Self {
        Self { rope, position }
    }

    /// Steps from the back of the vector.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The element under the cursor, or `None` outside `0..len()`.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.rope.get(reverse_index(self.rope.len(), self.position)?)
    }

    /// The element `offset` reverse positions away from the cursor.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let position = self.position.checked_add_signed(offset)?;
        self.rope.get(reverse_index(self.rope.len(), position)?)
    }

    pub fn move_next(&mut self) {
        self.position = self.position.wrapping_add(1);
    }

    pub fn move_prev(&mut self) {
        self.position = self.position.wrapping_sub(1);
    }

    /// Signed distance `self - other` in reverse positions.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance(&self, other: &Self) -> isize {
        (self.position as isize).wrapping_sub(other.position as isize)
    }

    /// The forward cursor one past this cursor's element.
    ///
    /// `rope.rev_cursor(0).base()` is the end cursor and
    /// `rope.rev_cursor(rope.len()).base()` is the begin cursor.
    #[must_use]
    pub fn base(&self) -> Cursor<'a, T, CHUNK_SIZE> {
        Cursor::new(self.rope, self.rope.len().wrapping_sub(self.position))
    }

    fn same_container(&self, other: &Self) -> bool {
        ptr::eq(self.rope, other.rope)
    }
}

impl<T, const CHUNK_SIZE: usize> Clone for RevCursor<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const CHUNK_SIZE: usize> Copy for RevCursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> core::fmt::Debug for RevCursor<'_, T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<T, const CHUNK_SIZE: usize> PartialEq for RevCursor<'_, T, CHUNK_SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.position == other.position
    }
}

impl<T, const CHUNK_SIZE: usize> Eq for RevCursor<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> PartialOrd for RevCursor<'_, T, CHUNK_SIZE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_container(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<T, const CHUNK_SIZE: usize> AddAssign<isize> for RevCursor<'_, T, CHUNK_SIZE> {
    fn add_assign(&mut self, offset: isize) {
        self.position = self.position.wrapping_add_signed(offset);
    }
}

impl<T, const CHUNK_SIZE: usize> SubAssign<isize> for RevCursor<'_, T, CHUNK_SIZE> {
    fn sub_assign(&mut self, offset: isize) {
        self.position = self.position.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<T, const CHUNK_SIZE: usize> Add<isize> for RevCursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub<isize> for RevCursor<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub for RevCursor<'_, T, CHUNK_SIZE> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        self.distance(&other)
    }
}

/// Mutable reverse cursor into a `RopeVec`
pub struct RevCursorMut<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a mut RopeVec<T, CHUNK_SIZE>,
    position: usize,
}

impl<'a, T, const CHUNK_SIZE: usize> RevCursorMut<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a mut RopeVec<T, CHUNK_SIZE>, position: usize) -> Self {
        Self { rope, position }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.rope.get(reverse_index(self.rope.len(), self.position)?)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = reverse_index(self.rope.len(), self.position)?;
        self.rope.get_mut(index)
    }

    pub fn move_next(&mut self) {
        self.position = self.position.wrapping_add(1);
    }

    pub fn move_prev(&mut self) {
        self.position = self.position.wrapping_sub(1);
    }

    /// Moves the cursor by `offset` reverse positions.
    pub fn seek(&mut self, offset: isize) {
        self.position = self.position.wrapping_add_signed(offset);
    }

    /// The underlying container.
    ///
    /// Positions count from the back, so pushing at the back shifts which
    /// element the cursor sees while front growth does not.
    pub fn container(&mut self) -> &mut RopeVec<T, CHUNK_SIZE> {
        self.rope
    }

    /// A read-only reverse cursor at the same position.
    #[must_use]
    pub fn as_rev_cursor(&self) -> RevCursor<'_, T, CHUNK_SIZE> {
        RevCursor::new(self.rope, self.position)
    }
}

impl<T, const CHUNK_SIZE: usize> AddAssign<isize> for RevCursorMut<'_, T, CHUNK_SIZE> {
    fn add_assign(&mut self, offset: isize) {
        self.seek(offset);
    }
}

impl<T, const CHUNK_SIZE: usize> SubAssign<isize> for RevCursorMut<'_, T, CHUNK_SIZE> {
    fn sub_assign(&mut self, offset: isize) {
        self.seek(offset.wrapping_neg());
    }
}

impl<T, const CHUNK_SIZE: usize> Add<isize> for RevCursorMut<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T, const CHUNK_SIZE: usize> Sub<isize> for RevCursorMut<'_, T, CHUNK_SIZE> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}
