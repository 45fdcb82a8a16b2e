//! The constructor: one materialization rule per selected path, and the
//! entry points that tie selection and construction together.
//!
//! [`all`] is the uniform entry: views pass through unchanged, bounded
//! sources are classified and wrapped. [`adapt`] is the classification half
//! on its own — the function container `IntoView` impls delegate to.

use purview_cursor::{CountedCursor, RandomAccessCursor, WithCount};

use crate::select::{BoundedPair, CountedPair, Dispatch, Outcome, RandomAccessPair, SizedPair};
use crate::seq::{Bounded, StatedSize, WithSize};
use crate::view::{CountedRange, CursorRange, SizedRange, View};

mod private {
    pub trait Sealed {}
}

impl private::Sealed for RandomAccessPair {}
impl private::Sealed for CountedPair {}
impl private::Sealed for SizedPair {}
impl private::Sealed for BoundedPair {}

/// Materializes the view for one selected path.
///
/// Implemented once per path tag, and sealed: the five outcomes are the
/// whole vocabulary of this layer. Each impl's bounds are the structural
/// enforcement of the tag's declaration — a source whose declared kind does
/// not match its cursor types satisfies no impl and fails the build.
pub trait Construct<R: Bounded>: private::Sealed {
    /// The selected path, as a value for tests and diagnostics.
    const KIND: Outcome;
    /// The view this path produces.
    type View;

    /// Consumes the source handle and builds the view. Stores cursors (and
    /// at most one size); never touches elements.
    fn construct(source: R) -> Self::View;
}

impl<R, C> Construct<R> for RandomAccessPair
where
    R: Bounded<Cursor = C, End = C>,
    C: RandomAccessCursor,
{
    const KIND: Outcome = Outcome::RandomAccessPair;
    type View = CursorRange<C, C>;

    #[inline]
    fn construct(source: R) -> Self::View {
        let (begin, end) = source.bounds();
        CursorRange::new(begin, end)
    }
}

impl<R, C, E> Construct<R> for CountedPair
where
    R: Bounded<Cursor = CountedCursor<C>, End = E>,
    E: WithCount,
    R::SizeHint: StatedSize<R>,
{
    const KIND: Outcome = Outcome::CountedPair;
    type View = CountedRange<C, E>;

    #[inline]
    fn construct(source: R) -> Self::View {
        let stated = <R::SizeHint as StatedSize<R>>::stated(&source);
        let (begin, end) = source.bounds();
        match stated {
            // A source that also states a size gets it cross-checked against
            // the counts (debug builds only).
            Some(size) => CountedRange::with_size(begin, end, size),
            None => CountedRange::new(begin, end),
        }
    }
}

impl<R> Construct<R> for SizedPair
where
    R: WithSize,
{
    const KIND: Outcome = Outcome::SizedPair;
    type View = SizedRange<R::Cursor, R::End>;

    #[inline]
    fn construct(source: R) -> Self::View {
        let size = source.size();
        let (begin, end) = source.bounds();
        SizedRange::new(begin, end, size)
    }
}

impl<R> Construct<R> for BoundedPair
where
    R: Bounded,
{
    const KIND: Outcome = Outcome::BoundedPair;
    type View = CursorRange<R::Cursor, R::End>;

    #[inline]
    fn construct(source: R) -> Self::View {
        let (begin, end) = source.bounds();
        CursorRange::new(begin, end)
    }
}

/// The path tag the decision table selects for a bounded source.
pub type Selected<R> =
    <(<R as Bounded>::Kind, <R as Bounded>::SizeHint) as Dispatch>::Outcome;

/// The view [`adapt`] produces for a bounded source.
pub type Adapted<R> = <Selected<R> as Construct<R>>::View;

/// The view [`all`] produces for a source.
pub type ViewOf<S> = <S as IntoView>::Output;

/// Classifies a bounded source and builds its view.
///
/// This is selection plus construction with no pass-through: the one entry
/// container `IntoView` impls delegate to, so the decision table stays
/// single-sourced.
///
/// ```
/// use purview::adapt;
///
/// let mut totals = [10u64, 20, 30];
/// let view = adapt(&mut totals[..]);
/// assert_eq!(view.size(), 3);
/// ```
///
/// A source whose declared kind is inconsistent with its cursor types
/// satisfies no construction path and fails the build:
///
/// ```compile_fail
/// use purview::{adapt, kind, Bounded, Cursor, Unknown};
///
/// struct Gauge;
/// impl Cursor for Gauge {}
/// struct Stop;
///
/// struct Strip([u8; 4]);
///
/// impl<'a> Bounded for &'a mut Strip {
///     type Cursor = Gauge;
///     type End = Stop;
///     // Claims random access, but the end is a sentinel of another type
///     // and `Gauge` has no O(1) distance. No construction path accepts it.
///     type Kind = kind::RandomAccess;
///     type SizeHint = Unknown;
///
///     fn bounds(self) -> (Gauge, Stop) {
///         (Gauge, Stop)
///     }
/// }
///
/// let mut strip = Strip([0; 4]);
/// let _ = adapt(&mut strip);
/// ```
#[inline]
pub fn adapt<R>(source: R) -> Adapted<R>
where
    R: Bounded,
    (R::Kind, R::SizeHint): Dispatch,
    Selected<R>: Construct<R>,
{
    <Selected<R> as Construct<R>>::construct(source)
}

/// Sources [`all`] accepts: views (identity) and bounded containers
/// (classified and wrapped).
///
/// The view types in this crate pass through unchanged. Owning containers
/// participate through their `&mut` borrow; a downstream container opts in
/// by implementing [`Bounded`] on its borrow and delegating here:
///
/// ```
/// use purview::{all, kind, Adapted, Bounded, Cursor, IntoView, Known};
/// use purview::{Outcome, Selected, Construct, WithSize, adapt};
///
/// /// Append-only log with forward-only cursors but a known length.
/// struct Log {
///     entries: Vec<u32>,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// struct LogCursor<'a> {
///     rest: &'a [u32],
/// }
/// impl Cursor for LogCursor<'_> {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// struct LogEnd;
///
/// impl<'a> Bounded for &'a mut Log {
///     type Cursor = LogCursor<'a>;
///     type End = LogEnd;
///     type Kind = kind::Forward;
///     type SizeHint = Known;
///
///     fn bounds(self) -> (LogCursor<'a>, LogEnd) {
///         (LogCursor { rest: &self.entries }, LogEnd)
///     }
/// }
///
/// impl<'a> WithSize for &'a mut Log {
///     fn size(&self) -> usize {
///         self.entries.len()
///     }
/// }
///
/// impl<'a> IntoView for &'a mut Log {
///     const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
///     type Output = Adapted<Self>;
///     fn into_view(self) -> Self::Output {
///         adapt(self)
///     }
/// }
///
/// let mut log = Log { entries: vec![7, 8, 9] };
/// let view = all(&mut log);
/// assert_eq!(view.size(), 3);
/// assert_eq!(<&mut Log as IntoView>::OUTCOME, Outcome::SizedPair);
/// ```
pub trait IntoView: Sized {
    /// Which construction path this source takes. Fixed per source type.
    const OUTCOME: Outcome;
    /// The produced view.
    type Output;

    /// Produces the view. Identity for view types; classification and
    /// wrapping for containers.
    fn into_view(self) -> Self::Output;
}

/// The uniform entry point: a view of everything the source holds.
///
/// ```
/// use purview::all;
///
/// let mut readings = [271, 314, 161];
/// let view = all(&mut readings);
/// assert_eq!(view.size(), 3);
/// ```
///
/// An owning temporary is rejected: the view would dangle the moment the
/// temporary is destroyed, and the borrow checker says so.
///
/// ```compile_fail
/// use purview::all;
///
/// let view = all(&mut vec![1, 2, 3]);
/// assert_eq!(view.size(), 3);
/// ```
///
/// A type with no declared capabilities at all cannot be viewed:
///
/// ```compile_fail
/// use purview::all;
///
/// struct Opaque;
/// let _ = all(Opaque);
/// ```
#[inline]
pub fn all<S: IntoView>(source: S) -> S::Output {
    source.into_view()
}

// --- Pass-through: views go in and come out untouched ---

impl<C, S> IntoView for CursorRange<C, S>
where
    Self: View,
{
    const OUTCOME: Outcome = Outcome::PassThrough;
    type Output = Self;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<C, S> IntoView for SizedRange<C, S>
where
    Self: View,
{
    const OUTCOME: Outcome = Outcome::PassThrough;
    type Output = Self;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<C, E> IntoView for CountedRange<C, E>
where
    Self: View,
{
    const OUTCOME: Outcome = Outcome::PassThrough;
    type Output = Self;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use purview_cursor::{CountedCursor, Cursor, RandomAccessCursor};

    use super::{IntoView, all};
    use crate::select::Outcome;
    use crate::view::{CountedRange, CursorRange, SizedRange};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct At(usize);

    impl Cursor for At {}

    impl RandomAccessCursor for At {
        fn distance_to(&self, other: &Self) -> usize {
            other.0 - self.0
        }
    }

    #[test]
    fn views_pass_through_unchanged() {
        let pair = CursorRange::new(At(0), At(4));
        assert_eq!(all(pair), pair);
        assert_eq!(<CursorRange<At> as IntoView>::OUTCOME, Outcome::PassThrough);

        let sized = SizedRange::new(At(0), At(0), 2);
        assert_eq!(all(sized), sized);
        assert_eq!(<SizedRange<At> as IntoView>::OUTCOME, Outcome::PassThrough);

        let counted =
            CountedRange::new(CountedCursor::new(At(0), 0), CountedCursor::new(At(0), 2));
        assert_eq!(all(counted), counted);
        assert_eq!(<CountedRange<At> as IntoView>::OUTCOME, Outcome::PassThrough);
    }

    #[test]
    fn pass_through_is_idempotent() {
        let pair = CursorRange::new(At(1), At(9));
        assert_eq!(all(all(all(pair))), pair);
    }
}
