//! View representations.
//!
//! Every representation is a plain value holding cursors (and, in one case,
//! a size) — nothing else. None of them owns, copies, or drops elements;
//! the referenced data must outlive the view, which for the borrowing glue
//! in this crate the borrow checker enforces.

use purview_cursor::{CountedCursor, CountedEnd, RandomAccessCursor, WithCount};

use crate::slice::SliceCursor;

/// Marker for types with view semantics: a non-owning, cheaply copyable
/// handle over elements stored elsewhere.
///
/// The `Copy` supertrait is the structural guard: owning containers (`Vec`,
/// `Box`, `String`, ...) cannot be `Copy`, so declaring one a view fails
/// where the `impl` is written rather than at some later use site.
///
/// ```compile_fail
/// use purview::View;
///
/// #[derive(Clone)]
/// struct OwnedRun(Vec<u8>);
///
/// // An owning type cannot claim view status: `OwnedRun` is not `Copy`.
/// impl View for OwnedRun {}
/// ```
///
/// `Copy` alone cannot rule out every owning type (a fixed-size array is
/// `Copy`), so the contract also requires reference semantics: copying a
/// `View` must copy a handle, never the elements. A type opting in
/// implements this marker plus an identity [`IntoView`](crate::IntoView):
///
/// ```
/// use purview::{all, IntoView, Outcome, View};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// struct Window<'a> {
///     bytes: &'a [u8],
/// }
///
/// impl View for Window<'_> {}
///
/// impl<'a> IntoView for Window<'a> {
///     const OUTCOME: Outcome = Outcome::PassThrough;
///     type Output = Self;
///     fn into_view(self) -> Self {
///         self
///     }
/// }
///
/// let data = [1u8, 2, 3];
/// let w = Window { bytes: &data };
/// assert_eq!(all(w), w);
/// ```
pub trait View: Copy {}

// --- CursorRange ---

/// A begin/end pair and nothing else.
///
/// Serves two construction paths: random-access pairs (where [`size`] is
/// computed on demand from the cursors) and plain bounded pairs (where no
/// size exists at all — the method is simply absent).
///
/// ```compile_fail
/// use purview::{Cursor, CursorRange};
///
/// struct Step;
/// impl Cursor for Step {}
///
/// let v = CursorRange::new(Step, Step);
/// // Forward pairs carry no size and expose no accessor for one.
/// v.size();
/// ```
///
/// [`size`]: CursorRange::size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRange<C, S = C> {
    begin: C,
    end: S,
}

impl<C, S> CursorRange<C, S> {
    /// Wraps a begin cursor and an end marker.
    pub fn new(begin: C, end: S) -> Self {
        CursorRange { begin, end }
    }

    /// The begin cursor.
    pub fn begin(&self) -> &C {
        &self.begin
    }

    /// The end marker.
    pub fn end(&self) -> &S {
        &self.end
    }

    /// Unwraps into the cursor pair.
    pub fn into_bounds(self) -> (C, S) {
        (self.begin, self.end)
    }
}

impl<C: RandomAccessCursor> CursorRange<C, C> {
    /// Span of the pair, computed on demand. Never stored: random-access
    /// cursors measure themselves, and a stored copy could only disagree.
    pub fn size(&self) -> usize {
        self.begin.distance_to(&self.end)
    }

    /// Whether the pair spans no positions.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<C: Copy, S: Copy> View for CursorRange<C, S> {}

// --- SizedRange ---

/// A cursor pair plus a stored size.
///
/// Chosen when the source knows its size in O(1) but its cursors cannot
/// recompute it cheaply. The stored size is supplied at construction and
/// **trusted from then on**: if the caller states a size that disagrees with
/// the span of the pair, the view silently carries the wrong size. Keeping
/// the source borrowed for the view's lifetime (as the glue in this crate
/// does) is what protects the stored size from drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedRange<C, S = C> {
    begin: C,
    end: S,
    size: usize,
}

impl<C, S> SizedRange<C, S> {
    /// Wraps a cursor pair and the size the caller states for it.
    ///
    /// Precondition: `size` equals the number of positions between `begin`
    /// and `end`. Not checked — forward cursors cannot measure their span in
    /// O(1), and this layer never traverses.
    pub fn new(begin: C, end: S, size: usize) -> Self {
        SizedRange { begin, end, size }
    }

    /// The stored size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the stored size is zero.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The begin cursor.
    pub fn begin(&self) -> &C {
        &self.begin
    }

    /// The end marker.
    pub fn end(&self) -> &S {
        &self.end
    }

    /// Unwraps into the cursor pair, discarding the size.
    pub fn into_bounds(self) -> (C, S) {
        (self.begin, self.end)
    }
}

impl<C: Copy, S: Copy> View for SizedRange<C, S> {}

// --- CountedRange ---

/// A [`CountedCursor`] begin with a count-bearing end.
///
/// The end is usually a second counted cursor, but a source whose end has no
/// cursor of its own closes the pair with a bare [`CountedEnd`] instead. The
/// size is derived from the running counts either way, so it is O(1) without
/// being stored — the counts travel with the markers and cannot be separated
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountedRange<C, E = CountedCursor<C>> {
    begin: CountedCursor<C>,
    end: E,
}

impl<C, E: WithCount> CountedRange<C, E> {
    /// Wraps a counted pair.
    pub fn new(begin: CountedCursor<C>, end: E) -> Self {
        debug_assert!(
            begin.count() <= end.count(),
            "counted range ends before it begins: begin count {}, end count {}",
            begin.count(),
            end.count(),
        );
        CountedRange { begin, end }
    }

    /// Wraps a counted pair, cross-checking a caller-stated size.
    ///
    /// In debug builds a mismatch between `size` and the span of the counts
    /// panics — a stated size that disagrees with the cursors is caller
    /// misuse, not a recoverable condition. Release builds skip the check.
    pub fn with_size(begin: CountedCursor<C>, end: E, size: usize) -> Self {
        debug_assert_eq!(
            size,
            end.count() - begin.count(),
            "stated size disagrees with the counted cursor pair",
        );
        Self::new(begin, end)
    }

    /// Span of the pair, derived from the running counts.
    pub fn size(&self) -> usize {
        self.end.count() - self.begin.count()
    }

    /// Whether the counts span no positions.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The begin cursor.
    pub fn begin(&self) -> &CountedCursor<C> {
        &self.begin
    }

    /// The end marker.
    pub fn end(&self) -> &E {
        &self.end
    }

    /// Unwraps into the counted pair.
    pub fn into_bounds(self) -> (CountedCursor<C>, E) {
        (self.begin, self.end)
    }
}

impl<C: Copy, E: Copy> View for CountedRange<C, E> {}

// --- Layout pins ---

// A view is its cursors (plus one word for a stored size) and nothing more.
static_assertions::assert_eq_size!(
    CursorRange<SliceCursor<'static, u8>>,
    [SliceCursor<'static, u8>; 2]
);
static_assertions::assert_eq_size!(
    SizedRange<SliceCursor<'static, u8>>,
    ([SliceCursor<'static, u8>; 2], usize)
);
static_assertions::assert_eq_size!(
    CountedRange<SliceCursor<'static, u8>>,
    [CountedCursor<SliceCursor<'static, u8>>; 2]
);
static_assertions::assert_eq_size!(
    CountedRange<SliceCursor<'static, u8>, CountedEnd>,
    (CountedCursor<SliceCursor<'static, u8>>, usize)
);

static_assertions::assert_impl_all!(
    CursorRange<SliceCursor<'static, u8>>: View, Send, Sync
);
static_assertions::assert_impl_all!(
    SizedRange<SliceCursor<'static, u8>>: View, Send, Sync
);
static_assertions::assert_impl_all!(
    CountedRange<SliceCursor<'static, u8>>: View, Send, Sync
);
