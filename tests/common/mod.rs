//! Purpose-built containers covering each construction path.
//!
//! Each container implements `Bounded` on its `&mut` borrow and delegates
//! `IntoView` to `adapt`, the same way downstream containers opt in.

#![allow(dead_code)]

use purview::{
    Adapted, Bounded, Construct, CountedCursor, CountedEnd, Cursor, IntoView, Known, Outcome,
    Selected, Unknown, WithSize, adapt, kind,
};

// =============================================================================
// Chain — forward-only linked structure, no O(1) size
// =============================================================================

#[derive(Debug)]
pub struct ChainNode<T> {
    pub value: T,
    pub next: Option<Box<ChainNode<T>>>,
}

/// Singly linked list. Counting its elements means walking it, so it states
/// no size and adapts to a plain bounded pair.
pub struct Chain<T> {
    head: Option<Box<ChainNode<T>>>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Chain { head: None }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ChainNode { value, next }));
    }

    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self
    where
        I::IntoIter: DoubleEndedIterator,
    {
        let mut chain = Chain::new();
        for value in values.into_iter().rev() {
            chain.push_front(value);
        }
        chain
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChainCursor<'a, T> {
    node: Option<&'a ChainNode<T>>,
}

impl<'a, T> ChainCursor<'a, T> {
    pub fn value(&self) -> Option<&'a T> {
        self.node.map(|n| &n.value)
    }

    pub fn advance(&mut self) {
        self.node = self.node.and_then(|n| n.next.as_deref());
    }

    pub fn at_end(&self) -> bool {
        self.node.is_none()
    }
}

impl<T> Cursor for ChainCursor<'_, T> {}

/// Sentinel: a chain ends where the links run out.
#[derive(Debug, Clone, Copy)]
pub struct ChainEnd;

impl<'a, T> Bounded for &'a mut Chain<T> {
    type Cursor = ChainCursor<'a, T>;
    type End = ChainEnd;
    type Kind = kind::Forward;
    type SizeHint = Unknown;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (
            ChainCursor {
                node: self.head.as_deref(),
            },
            ChainEnd,
        )
    }
}

impl<'a, T> IntoView for &'a mut Chain<T> {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}

// =============================================================================
// Ledger — forward-only cursors, but the length is tracked
// =============================================================================

/// Append-only record store: cursors only walk forward, but the entry count
/// is known without traversal, so the view stores it.
pub struct Ledger<T> {
    entries: Vec<T>,
}

impl<T> Ledger<T> {
    pub fn from_entries<I: IntoIterator<Item = T>>(entries: I) -> Self {
        Ledger {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerCursor<'a, T> {
    rest: &'a [T],
}

impl<'a, T> LedgerCursor<'a, T> {
    pub fn value(&self) -> Option<&'a T> {
        self.rest.first()
    }

    pub fn advance(&mut self) {
        if !self.rest.is_empty() {
            self.rest = &self.rest[1..];
        }
    }
}

impl<T> Cursor for LedgerCursor<'_, T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEnd;

impl<'a, T> Bounded for &'a mut Ledger<T> {
    type Cursor = LedgerCursor<'a, T>;
    type End = LedgerEnd;
    type Kind = kind::Forward;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        (
            LedgerCursor {
                rest: &self.entries,
            },
            LedgerEnd,
        )
    }
}

impl<'a, T> WithSize for &'a mut Ledger<T> {
    fn size(&self) -> usize {
        self.entries.len()
    }
}

impl<'a, T> IntoView for &'a mut Ledger<T> {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}

// =============================================================================
// Tape — counted cursors
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapeCursor<'a, T> {
    rest: &'a [T],
}

impl<T> Cursor for TapeCursor<'_, T> {}

macro_rules! tape {
    ($name:ident, size_hint: $hint:ty $(, with_size: |$this:ident| $size:expr)?) => {
        pub struct $name<T> {
            cells: Vec<T>,
        }

        impl<T> $name<T> {
            pub fn from_cells<I: IntoIterator<Item = T>>(cells: I) -> Self {
                $name {
                    cells: cells.into_iter().collect(),
                }
            }
        }

        impl<'a, T> Bounded for &'a mut $name<T> {
            type Cursor = CountedCursor<TapeCursor<'a, T>>;
            type End = CountedCursor<TapeCursor<'a, T>>;
            type Kind = kind::Counted;
            type SizeHint = $hint;

            fn bounds(self) -> (Self::Cursor, Self::End) {
                let len = self.cells.len();
                (
                    CountedCursor::new(TapeCursor { rest: &self.cells }, 0),
                    CountedCursor::new(TapeCursor { rest: &[] }, len),
                )
            }
        }

        $(
            impl<'a, T> WithSize for &'a mut $name<T> {
                fn size(&self) -> usize {
                    let $this = self;
                    $size
                }
            }
        )?

        impl<'a, T> IntoView for &'a mut $name<T> {
            const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
            type Output = Adapted<Self>;

            fn into_view(self) -> Self::Output {
                adapt(self)
            }
        }
    };
}

// Honest tape: states its real size, which the counted path cross-checks.
tape!(Tape, size_hint: Known, with_size: |this| this.cells.len());

// Lying tape: states one element too many. The counted path's debug
// assertion must catch the disagreement.
tape!(SkewedTape, size_hint: Known, with_size: |this| this.cells.len() + 1);

// Tape with no size query at all: the counted path derives the size from
// the cursor counts with nothing to cross-check.
tape!(FreeTape, size_hint: Unknown);

// =============================================================================
// Reel — counted begin cursor, sentinel end
// =============================================================================

/// Counted source whose end marker is a bare count, not a cursor.
pub struct Reel<T> {
    cells: Vec<T>,
}

impl<T> Reel<T> {
    pub fn from_cells<I: IntoIterator<Item = T>>(cells: I) -> Self {
        Reel {
            cells: cells.into_iter().collect(),
        }
    }
}

impl<'a, T> Bounded for &'a mut Reel<T> {
    type Cursor = CountedCursor<TapeCursor<'a, T>>;
    type End = CountedEnd;
    type Kind = kind::Counted;
    type SizeHint = Known;

    fn bounds(self) -> (Self::Cursor, Self::End) {
        let len = self.cells.len();
        (
            CountedCursor::new(TapeCursor { rest: &self.cells }, 0),
            CountedEnd::new(len),
        )
    }
}

impl<'a, T> WithSize for &'a mut Reel<T> {
    fn size(&self) -> usize {
        self.cells.len()
    }
}

impl<'a, T> IntoView for &'a mut Reel<T> {
    const OUTCOME: Outcome = <Selected<Self> as Construct<Self>>::KIND;
    type Output = Adapted<Self>;

    fn into_view(self) -> Self::Output {
        adapt(self)
    }
}
