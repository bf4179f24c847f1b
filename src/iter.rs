use alloc::collections::vec_deque;
use core::iter::FusedIterator;
use core::slice;

use crate::chunk::Chunk;
use crate::core::RopeVec;

/// Iterator over elements in a `RopeVec`
///
/// Holds the vector plus a window of logical indices; every item is resolved
/// through the index translation when it is produced.
///
/// This iterator implements `Clone`.
pub struct RopeVecIter<'a, T, const CHUNK_SIZE: usize> {
    rope: &'a RopeVec<T, CHUNK_SIZE>,
    front: usize,
    back: usize,
}

impl<'a, T, const CHUNK_SIZE: usize> RopeVecIter<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a RopeVec<T, CHUNK_SIZE>) -> Self {
        Self {
            rope,
            front: 0,
            back: rope.len(),
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Clone for RopeVecIter<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        Self {
            rope: self.rope,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, const CHUNK_SIZE: usize> Iterator for RopeVecIter<'a, T, CHUNK_SIZE> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.rope.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<T, const CHUNK_SIZE: usize> DoubleEndedIterator for RopeVecIter<'_, T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.rope.get(self.back)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<T, const CHUNK_SIZE: usize> ExactSizeIterator for RopeVecIter<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> FusedIterator for RopeVecIter<'_, T, CHUNK_SIZE> {}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a RopeVec<T, CHUNK_SIZE> {
    type Item = &'a T;
    type IntoIter = RopeVecIter<'a, T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        RopeVecIter::new(self)
    }
}

/// Reverse iterator over elements in a `RopeVec`
///
/// This iterator implements `Clone`.
pub struct RopeVecRevIter<'a, T, const CHUNK_SIZE: usize> {
    iter: RopeVecIter<'a, T, CHUNK_SIZE>,
}

impl<'a, T, const CHUNK_SIZE: usize> RopeVecRevIter<'a, T, CHUNK_SIZE> {
    pub(crate) fn new(rope: &'a RopeVec<T, CHUNK_SIZE>) -> Self {
        Self {
            iter: RopeVecIter::new(rope),
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Clone for RopeVecRevIter<'_, T, CHUNK_SIZE> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T, const CHUNK_SIZE: usize> Iterator for RopeVecRevIter<'a, T, CHUNK_SIZE> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth_back(n)
    }
}

impl<T, const CHUNK_SIZE: usize> DoubleEndedIterator for RopeVecRevIter<'_, T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth(n)
    }
}

impl<T, const CHUNK_SIZE: usize> ExactSizeIterator for RopeVecRevIter<'_, T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> FusedIterator for RopeVecRevIter<'_, T, CHUNK_SIZE> {}

/// Mutable iterator over elements in a `RopeVec`
///
/// Walks the live part of each chunk in turn. Use `.rev()` for back-to-front
/// order.
pub struct RopeVecIterMut<'a, T> {
    chunks: vec_deque::IterMut<'a, Chunk<T>>,
    head: slice::IterMut<'a, T>,
    tail: slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T> RopeVecIterMut<'a, T> {
    /// `chunks` are exactly the chunks holding live elements; the first live
    /// slot is `head_start` in the first one and the last live slot is
    /// `tail_end - 1` in the last one.
    pub(crate) fn new(
        mut chunks: vec_deque::IterMut<'a, Chunk<T>>,
        head_start: usize,
        tail_end: usize,
        remaining: usize,
    ) -> Self {
        let (head, tail) = match chunks.len() {
            0 => (Default::default(), Default::default()),
            1 => match chunks.next() {
                Some(chunk) => (
                    chunk.as_mut_slice()[head_start..tail_end].iter_mut(),
                    Default::default(),
                ),
                None => (Default::default(), Default::default()),
            },
            _ => match (chunks.next(), chunks.next_back()) {
                (Some(first), Some(last)) => (
                    first.as_mut_slice()[head_start..].iter_mut(),
                    last.as_mut_slice()[..tail_end].iter_mut(),
                ),
                _ => (Default::default(), Default::default()),
            },
        };
        Self {
            chunks,
            head,
            tail,
            remaining,
        }
    }
}

impl<'a, T> Iterator for RopeVecIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.head.next() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.chunks.next() {
                Some(chunk) => self.head = chunk.as_mut_slice().iter_mut(),
                None => break,
            }
        }
        let item = self.tail.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for RopeVecIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.tail.next_back() {
                self.remaining -= 1;
                return Some(item);
            }
            match self.chunks.next_back() {
                Some(chunk) => self.tail = chunk.as_mut_slice().iter_mut(),
                None => break,
            }
        }
        let item = self.head.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for RopeVecIterMut<'_, T> {}

impl<T> FusedIterator for RopeVecIterMut<'_, T> {}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a mut RopeVec<T, CHUNK_SIZE> {
    type Item = &'a mut T;
    type IntoIter = RopeVecIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over elements in a `RopeVec`
///
/// Drains from the front, releasing each chunk once it has been emptied.
pub struct RopeVecIntoIter<T, const CHUNK_SIZE: usize> {
    rope: RopeVec<T, CHUNK_SIZE>,
}

impl<T: Default, const CHUNK_SIZE: usize> Iterator for RopeVecIntoIter<T, CHUNK_SIZE> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.rope.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rope.len(), Some(self.rope.len()))
    }
}

impl<T: Default, const CHUNK_SIZE: usize> DoubleEndedIterator for RopeVecIntoIter<T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rope.pop_back()
    }
}

impl<T: Default, const CHUNK_SIZE: usize> ExactSizeIterator for RopeVecIntoIter<T, CHUNK_SIZE> {}

impl<T: Default, const CHUNK_SIZE: usize> IntoIterator for RopeVec<T, CHUNK_SIZE> {
    type Item = T;
    type IntoIter = RopeVecIntoIter<T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        RopeVecIntoIter { rope: self }
    }
}
