//! A fixed-size cell set using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`, one bit per cell, row-major.
//! Cells are addressed by [`Coordinate`]; anything outside the grid is simply
//! never a member, which lets callers feed raw neighbourhoods in without
//! clipping them first.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use num_traits::{PrimInt, Unsigned, Zero};

use super::coord::Coordinate;

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    /// Number of bits `T` can hold.
    pub const CAPACITY: usize = core::mem::size_of::<T>() * 8;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Returns `true` if `at` lies on the grid.
    #[inline]
    pub fn in_bounds(at: Coordinate) -> bool {
        Self::index_of(at).is_some()
    }

    #[inline]
    fn index_of(at: Coordinate) -> Option<usize> {
        let (row, col) = at.to_index(N)?;
        Some(row * N + col)
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `at` is in the set. Off-grid coordinates never are.
    pub fn contains(&self, at: Coordinate) -> bool {
        match Self::index_of(at) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `at` to the set. Returns `false` when `at` is off the grid, in
    /// which case the set is left untouched.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        match Self::index_of(at) {
            Some(idx) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            None => false,
        }
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Builds a set from coordinates, dropping the ones off the grid.
    pub fn from_coords<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for at in iter {
            board.insert(at);
        }
        board
    }

    /// The set grown by one cell in all eight directions, clipped to the grid.
    pub fn dilate(&self) -> Self {
        let mut grown = *self;
        for at in self.iter() {
            for near in at.neighbourhood() {
                grown.insert(near);
            }
        }
        grown
    }

    /// Iterator over the members, row-major.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", N, N)?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r as i32, c as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid; bits past `N * N` stay clear.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
