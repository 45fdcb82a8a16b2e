//! The selector: a closed, type-level decision table.
//!
//! For each `(pair kind, size fact)` combination there is exactly one
//! construction path. The table is six impls; resolution happens entirely in
//! the type system, so selection is deterministic, side-effect-free, and
//! costs nothing at runtime.
//!
//! The one tie-break worth naming: a random-access pair wins even when the
//! source also has an O(1) size query, because such a pair measures its own
//! span — storing the size as well would be redundant state that could drift
//! out of sync with the cursors.

use purview_cursor::kind;

use crate::seq::{Known, Unknown};

mod private {
    pub trait Sealed {}
}

/// Which construction path a source type takes.
///
/// Exposed as [`IntoView::OUTCOME`](crate::IntoView::OUTCOME) so tests can
/// pin the selected path for a given source type without any runtime
/// machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input already is a view and is returned unchanged.
    PassThrough,
    /// Plain cursor/end pair, no size.
    BoundedPair,
    /// Cursor pair plus a stored size.
    SizedPair,
    /// Counted cursor pair; size derived from the counts.
    CountedPair,
    /// Random-access cursor pair; size computed on demand, never stored.
    RandomAccessPair,
}

/// Path tag: two random-access cursors, span computed on demand.
#[derive(Debug, Clone, Copy)]
pub struct RandomAccessPair;

/// Path tag: two counted cursors, span derived from the counts.
#[derive(Debug, Clone, Copy)]
pub struct CountedPair;

/// Path tag: forward pair plus the source's stated size, stored.
#[derive(Debug, Clone, Copy)]
pub struct SizedPair;

/// Path tag: forward pair, no size carried.
#[derive(Debug, Clone, Copy)]
pub struct BoundedPair;

/// The decision table. Sealed: the set of dispatch facts is closed, so the
/// table cannot be extended or overridden from outside.
pub trait Dispatch: private::Sealed {
    /// The selected path tag.
    type Outcome;
}

// Random access supersedes a known size.
impl private::Sealed for (kind::RandomAccess, Known) {}
impl Dispatch for (kind::RandomAccess, Known) {
    type Outcome = RandomAccessPair;
}

impl private::Sealed for (kind::RandomAccess, Unknown) {}
impl Dispatch for (kind::RandomAccess, Unknown) {
    type Outcome = RandomAccessPair;
}

// Counted pairs derive their size from the counts; a stated size is only a
// cross-check.
impl private::Sealed for (kind::Counted, Known) {}
impl Dispatch for (kind::Counted, Known) {
    type Outcome = CountedPair;
}

impl private::Sealed for (kind::Counted, Unknown) {}
impl Dispatch for (kind::Counted, Unknown) {
    type Outcome = CountedPair;
}

// Forward cursors cannot measure their span; store the size when the source
// states one, otherwise carry nothing.
impl private::Sealed for (kind::Forward, Known) {}
impl Dispatch for (kind::Forward, Known) {
    type Outcome = SizedPair;
}

impl private::Sealed for (kind::Forward, Unknown) {}
impl Dispatch for (kind::Forward, Unknown) {
    type Outcome = BoundedPair;
}
