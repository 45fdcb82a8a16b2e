//! Purview - capability-driven view adaptation for sequence-like values
//!
//! # Overview
//!
//! Given a sequence-like value, [`all`] produces a lightweight non-owning
//! *view*: a begin/end cursor pair, optionally carrying a size, chosen so
//! that no capability the source already has is discarded and none it lacks
//! is fabricated. Downstream code consumes the view without caring whether
//! the input was already a view, a fixed-size array, a sized container, or a
//! forward-only structure.
//!
//! The whole decision is made at compile time. Each source type takes exactly
//! one of five paths:
//!
//! - **pass-through**: the input already is a view; it is returned unchanged.
//! - **random-access pair**: two cursors that measure their own span; no size
//!   is stored ([`CursorRange`]).
//! - **counted pair**: a [`CountedCursor`] begin with a count-bearing end
//!   (a second counted cursor or a [`CountedEnd`] sentinel); the size is
//!   derived from the counts ([`CountedRange`]).
//! - **sized pair**: forward cursors plus a stored size taken from the
//!   source's O(1) size query ([`SizedRange`]).
//! - **bounded pair**: a plain cursor/end pair with no size at all
//!   ([`CursorRange`] again, without a `size` method).
//!
//! # Quick Start
//!
//! ```
//! use purview::{all, IntoView, Outcome};
//!
//! let mut samples = [3, 1, 4, 1, 5];
//!
//! // An array owns its elements and has random-access cursors: the view is
//! // a bare cursor pair that computes its size on demand.
//! let view = all(&mut samples);
//! assert_eq!(view.size(), 5);
//! assert_eq!(<&mut [i32; 5] as IntoView>::OUTCOME, Outcome::RandomAccessPair);
//!
//! // A view is passed through unchanged.
//! let again = all(view);
//! assert_eq!(again, view);
//! ```
//!
//! # Ownership rules
//!
//! Views never own elements. Two rules keep that invariant at compile time:
//!
//! - A type opting into [`View`] status must be `Copy` — owning containers
//!   (`Vec`, `Box`, `String`, ...) cannot be, so a "view" that owns its
//!   elements is rejected where the `impl` is written.
//! - Owning containers participate only through a `&mut` borrow, so a view
//!   of a temporary cannot escape the statement that created it; the borrow
//!   checker rejects it.
//!
//! Both rules are build-time diagnostics. This layer has no runtime errors.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod construct;
mod select;
mod seq;
mod slice;
mod view;

pub use construct::{Adapted, Construct, IntoView, Selected, ViewOf, adapt, all};
pub use purview_cursor::{CountedCursor, CountedEnd, Cursor, RandomAccessCursor, WithCount, kind};
pub use select::{BoundedPair, CountedPair, Dispatch, Outcome, RandomAccessPair, SizedPair};
pub use seq::{Bounded, Known, SizeFact, StatedSize, Unknown, WithSize};
pub use slice::SliceCursor;
pub use view::{CountedRange, CursorRange, SizedRange, View};
