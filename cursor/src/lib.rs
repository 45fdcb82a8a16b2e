//! Cursor primitives consumed by the view-adaptation layer.
//!
//! A *cursor* is a position inside some sequence; an *end marker* is either a
//! second cursor or a sentinel value of a different type. This crate defines
//! only the facts the adaptation layer needs to classify a cursor/end pair:
//!
//! - [`Cursor`]: the bare position marker.
//! - [`RandomAccessCursor`]: positions whose distance is an O(1) computation,
//!   so a view over such a pair never needs to store a size.
//! - [`CountedCursor`]: a cursor paired with a running count, making the
//!   distance between two counted positions an O(1) subtraction even when the
//!   wrapped cursor is forward-only.
//! - [`CountedEnd`]: an end marker that is only a count, for sequences whose
//!   end has no cursor of its own. [`WithCount`] is the access both forms
//!   share.
//! - [`kind`]: classification tags for a begin/end pair, declared by the
//!   sequence that hands the pair out.
//!
//! Nothing here advances or dereferences positions. Traversal belongs to the
//! cursors' own types; this crate is the vocabulary the dispatcher speaks.

#![no_std]
#![deny(unsafe_code)]

mod private {
    pub trait Sealed {}
}

/// A position within a sequence.
///
/// The adaptation layer stores and classifies cursors; it never moves them.
/// Concrete cursor types are free to expose whatever traversal surface suits
/// them.
pub trait Cursor {}

/// A cursor supporting O(1) distance computation to another cursor of the
/// same type.
///
/// A begin/end pair of these is self-measuring: `begin.distance_to(&end)` is
/// the number of positions between them, so carrying a separate size would be
/// redundant state that could fall out of sync with the pair.
pub trait RandomAccessCursor: Cursor {
    /// Number of positions from `self` to `other`.
    ///
    /// `other` must not precede `self`.
    fn distance_to(&self, other: &Self) -> usize;
}

/// Classification tags for a begin/end pair.
///
/// The sequence handing out the pair declares which tag applies; the
/// dispatcher trusts the declaration and enforces it structurally when it
/// builds the view (a pair declared [`RandomAccess`](kind::RandomAccess)
/// whose end is a sentinel of another type will not satisfy any construction
/// path and fails the build).
pub mod kind {
    use super::private;

    /// Classification of a cursor/end pair. Sealed: the dispatch table over
    /// these tags is closed.
    pub trait Kind: private::Sealed {}

    /// Forward-only cursor with an arbitrary end marker.
    #[derive(Debug, Clone, Copy)]
    pub struct Forward;

    /// Two cursors of one random-access type.
    #[derive(Debug, Clone, Copy)]
    pub struct RandomAccess;

    /// A [`CountedCursor`](super::CountedCursor) begin with a count-bearing
    /// end: either a second counted cursor or a [`CountedEnd`](super::CountedEnd)
    /// sentinel.
    #[derive(Debug, Clone, Copy)]
    pub struct Counted;

    impl private::Sealed for Forward {}
    impl private::Sealed for RandomAccess {}
    impl private::Sealed for Counted {}

    impl Kind for Forward {}
    impl Kind for RandomAccess {}
    impl Kind for Counted {}
}

/// A cursor carrying a running count alongside its position.
///
/// Two counted cursors over the same sequence measure their span as
/// `end.count() - begin.count()`, regardless of what the wrapped cursor can
/// do. The count is part of the position, not of the elements: copying a
/// `CountedCursor` copies two words and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountedCursor<C> {
    inner: C,
    count: usize,
}

impl<C> CountedCursor<C> {
    /// Wraps `inner` at running count `count`.
    pub fn new(inner: C, count: usize) -> Self {
        CountedCursor { inner, count }
    }

    /// The running count at this position.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps into the inner cursor, discarding the count.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for CountedCursor<C> {}

/// Count access shared by every count-bearing position marker.
///
/// A counted begin/end pair measures its span as
/// `end.count() - begin.count()` whichever form the end takes: a second
/// [`CountedCursor`] or a bare [`CountedEnd`].
pub trait WithCount {
    /// The running count at this position.
    fn count(&self) -> usize;
}

impl<C> WithCount for CountedCursor<C> {
    #[inline]
    fn count(&self) -> usize {
        self.count
    }
}

/// An end marker that is only a count.
///
/// Some sequences can say how many positions precede their end without
/// handing out a cursor for it. The count alone is enough to close a counted
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountedEnd {
    count: usize,
}

impl CountedEnd {
    /// An end marker at running count `count`.
    pub fn new(count: usize) -> Self {
        CountedEnd { count }
    }

    /// The running count at the end.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl WithCount for CountedEnd {
    #[inline]
    fn count(&self) -> usize {
        self.count
    }
}

// A counted cursor over a one-word position is exactly two words; a counted
// end is one.
static_assertions::assert_eq_size!(CountedCursor<usize>, [usize; 2]);
static_assertions::assert_eq_size!(CountedEnd, usize);
