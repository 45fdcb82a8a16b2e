//! Capability traits for adaptable sources.
//!
//! A source describes itself through associated types: which cursor pair it
//! hands out, how that pair is classified, and whether it knows its size in
//! O(1). Everything here is a static fact about the type — the dispatcher
//! never inspects runtime values to pick a construction path.
//!
//! Owning containers implement [`Bounded`] on their `&mut` borrow, the way
//! std implements `IntoIterator` on `&mut Vec<T>`. That convention is what
//! keeps views of temporaries from compiling: the borrow cannot outlive the
//! statement that produced the temporary.

use purview_cursor::{Cursor, kind::Kind};

mod private {
    pub trait Sealed {}
}

/// A source exposing a begin cursor and an end marker.
///
/// `Kind` classifies the pair (see [`kind`](purview_cursor::kind)) and
/// `SizeHint` states whether an O(1) size query exists. Both are declarations;
/// the construction paths enforce them structurally, so a false declaration
/// is a build error at the adaptation site, never a runtime surprise.
pub trait Bounded: Sized {
    /// The begin cursor.
    type Cursor: Cursor;
    /// The end marker: either another `Cursor` or a sentinel of its own type.
    type End;
    /// Classification of the `(Cursor, End)` pair.
    type Kind: Kind;
    /// Whether [`WithSize`] applies: [`Known`] or [`Unknown`].
    type SizeHint: SizeFact;

    /// Consumes the source handle and returns its cursor pair.
    fn bounds(self) -> (Self::Cursor, Self::End);
}

/// A bounded source with an O(1) size query independent of traversal.
pub trait WithSize: Bounded<SizeHint = Known> {
    /// Number of elements between the cursors [`bounds`](Bounded::bounds)
    /// would return.
    fn size(&self) -> usize;
}

/// Static fact: does a source carry an O(1) size query?
///
/// Sealed; the only witnesses are [`Known`] and [`Unknown`].
pub trait SizeFact: private::Sealed {}

/// The source implements [`WithSize`].
#[derive(Debug, Clone, Copy)]
pub struct Known;

/// No O(1) size query exists.
#[derive(Debug, Clone, Copy)]
pub struct Unknown;

impl private::Sealed for Known {}
impl private::Sealed for Unknown {}

impl SizeFact for Known {}
impl SizeFact for Unknown {}

/// Bridges a [`SizeFact`] witness to a value: the size the source states,
/// if it states one.
///
/// Construction paths that want to cross-check a stated size against the
/// cursor pair (the counted path) go through this instead of requiring
/// [`WithSize`] outright, so the same path serves sized and unsized sources.
pub trait StatedSize<R>: SizeFact {
    /// The source's stated size, when the witness is [`Known`].
    fn stated(source: &R) -> Option<usize>;
}

impl<R: WithSize> StatedSize<R> for Known {
    #[inline]
    fn stated(source: &R) -> Option<usize> {
        Some(source.size())
    }
}

impl<R> StatedSize<R> for Unknown {
    #[inline]
    fn stated(_source: &R) -> Option<usize> {
        None
    }
}
