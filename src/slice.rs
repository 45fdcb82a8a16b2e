//! Capability glue for slices, arrays, and vectors.
//!
//! Owning containers participate through their `&mut` borrow (std's
//! reference-`IntoIterator` convention): the borrow pins the container for
//! the view's lifetime, so its storage cannot move or resize underneath the
//! cursors, and a temporary cannot produce a view that outlives it.
//!
//! A shared `&[T]` is the one accepted source that owns nothing without
//! being one of this crate's view types. It is adapted like a container —
//! the produced [`CursorRange`](crate::CursorRange) is an equivalent
//! non-owning handle — rather than rejected, since no ownership hazard
//! exists.

use alloc::vec::Vec;

use purview_cursor::{Cursor, RandomAccessCursor, kind};

use crate::construct::{Adapted, Construct, IntoView, Selected, adapt};
use crate::select::Outcome;
use crate::seq::{Bounded, Known, WithSize};

/// A position in a slice: the slice plus an index.
///
/// Both cursors of a pair alias the same slice; their distance is an index
/// subtraction. `get`/`advance` are conveniences for consumers — the
/// adaptation layer itself never calls them.
///
/// Equality is handle equality: same slice (by pointer), same index.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    at: usize,
}

// --- Manual Clone/Copy/PartialEq/Debug to avoid T: ... bounds ---
// A cursor is a handle; it is copyable and comparable no matter what the
// elements are.

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice) && self.at == other.at
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> core::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("len", &self.slice.len())
            .field("at", &self.at)
            .finish()
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor into `slice` at `at`.
    pub fn new(slice: &'a [T], at: usize) -> Self {
        SliceCursor { slice, at }
    }

    /// The element under the cursor, if any.
    pub fn get(&self) -> Option<&'a T> {
        self.slice.get(self.at)
    }

    /// Moves one position forward.
    ///
    /// The cursor must not already sit at the end position; past-the-end
    /// positions would make [`distance_to`](RandomAccessCursor::distance_to)
    /// underflow.
    pub fn advance(&mut self) {
        debug_assert!(
            self.at < self.slice.len(),
            "slice cursor advanced past the end of its slice",
        );
        self.at += 1;
    }

    /// Index of the cursor within the slice.
    pub fn at(&self) -> usize {
        self.at
    }

    /// The slice both cursors of a pair alias.
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Cursor for SliceCursor<'_, T> {}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn distance_to(&self, other: &Self) -> usize {
        other.at - self.at
    }
}

// --- Shared slices: non-owning handles, adapted like containers ---

impl<'a, T> Bounded for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;
    type Kind = kind::RandomAccess;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (SliceCursor::new(self, 0), SliceCursor::new(self, self.len()))
    }
}

impl<T> WithSize for &[T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T> IntoView for &'a [T] {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    #[inline]
    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}

// --- Mutable slices ---

impl<'a, T> Bounded for &'a mut [T] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;
    type Kind = kind::RandomAccess;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let slice: &'a [T] = self;
        (
            SliceCursor::new(slice, 0),
            SliceCursor::new(slice, slice.len()),
        )
    }
}

impl<T> WithSize for &mut [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T> IntoView for &'a mut [T] {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    #[inline]
    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}

// --- Fixed-size arrays ---

impl<'a, T, const N: usize> Bounded for &'a mut [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;
    type Kind = kind::RandomAccess;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let slice: &'a mut [T] = self;
        slice.bounds()
    }
}

impl<T, const N: usize> WithSize for &mut [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<'a, T, const N: usize> IntoView for &'a mut [T; N] {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    #[inline]
    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}

// --- Vec ---

impl<'a, T> Bounded for &'a mut Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;
    type Kind = kind::RandomAccess;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let slice: &'a mut [T] = self.as_mut_slice();
        slice.bounds()
    }
}

impl<T> WithSize for &mut Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T> IntoView for &'a mut Vec<T> {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    #[inline]
    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}
