//! Board snapshots packed into two 61-bit occupancy masks.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use crate::common::Player;
use crate::config::NUM_SPACES;
use crate::space::{diagonal_range, Space};

/// What sits on a single space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Occupant {
    #[default]
    Empty,
    Black,
    White,
}

impl Occupant {
    /// Map the numeric code used in game logs (`0`, `1`, `2`).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Occupant::Empty),
            1 => Some(Occupant::Black),
            2 => Some(Occupant::White),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Occupant::Empty => 0,
            Occupant::Black => 1,
            Occupant::White => 2,
        }
    }

    /// Owning player, `None` for an empty space.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Black => Some(Player::Black),
            Occupant::White => Some(Player::White),
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Occupant::Black,
            Player::White => Occupant::White,
        }
    }
}

/// Set of spaces, one bit per [`Space::index`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpaceMask {
    bits: u64,
}

impl SpaceMask {
    const FULL: u64 = (1u64 << NUM_SPACES) - 1;

    pub const fn new() -> Self {
        SpaceMask { bits: 0 }
    }

    /// Mask covering every space of the board.
    pub const fn full() -> Self {
        SpaceMask { bits: Self::FULL }
    }

    #[inline]
    pub fn contains(self, space: Space) -> bool {
        self.bits & (1u64 << space.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, space: Space) {
        self.bits |= 1u64 << space.index();
    }

    #[inline]
    pub fn remove(&mut self, space: Space) {
        self.bits &= !(1u64 << space.index());
    }

    pub fn count_ones(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Spaces in the mask, lowest index first.
    pub fn iter(self) -> impl Iterator<Item = Space> {
        let mut bits = self.bits;
        core::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Space::from_index(idx)
        })
    }
}

impl BitOr for SpaceMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        SpaceMask { bits: self.bits | rhs.bits }
    }
}

impl BitAnd for SpaceMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        SpaceMask { bits: self.bits & rhs.bits }
    }
}

impl Not for SpaceMask {
    type Output = Self;
    fn not(self) -> Self {
        SpaceMask { bits: !self.bits & Self::FULL }
    }
}

impl fmt::Debug for SpaceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(DisplayAsDebug)).finish()
    }
}

struct DisplayAsDebug(Space);

impl fmt::Debug for DisplayAsDebug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A snapshot of every space on the board at one ply.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    black: SpaceMask,
    white: SpaceMask,
}

impl Board {
    /// A board with no marbles.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard opening: rows `A`, `B` and `C3`..`C5` black, rows `H`,
    /// `I` and `G5`..`G7` white.
    pub fn standard() -> Self {
        let mut board = Board::new();
        for space in Space::all() {
            let (row, diag) = (space.row_letter(), space.diagonal_digit());
            match row {
                'A' | 'B' => board.set(space, Occupant::Black),
                'C' if ('3'..='5').contains(&diag) => board.set(space, Occupant::Black),
                'H' | 'I' => board.set(space, Occupant::White),
                'G' if ('5'..='7').contains(&diag) => board.set(space, Occupant::White),
                _ => {}
            }
        }
        board
    }

    pub fn get(&self, space: Space) -> Occupant {
        if self.black.contains(space) {
            Occupant::Black
        } else if self.white.contains(space) {
            Occupant::White
        } else {
            Occupant::Empty
        }
    }

    /// Place `occupant` on `space`, replacing whatever was there.
    pub fn set(&mut self, space: Space, occupant: Occupant) {
        self.black.remove(space);
        self.white.remove(space);
        match occupant {
            Occupant::Black => self.black.insert(space),
            Occupant::White => self.white.insert(space),
            Occupant::Empty => {}
        }
    }

    /// Spaces holding `player`'s marbles.
    pub fn marbles(&self, player: Player) -> SpaceMask {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn empty_spaces(&self) -> SpaceMask {
        !(self.black | self.white)
    }

    /// Every space with its occupant, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Space, Occupant)> + '_ {
        Space::all().map(move |space| (space, self.get(space)))
    }

    /// Occupants of one row from its first to its last diagonal.
    pub fn row(&self, row: u8) -> impl Iterator<Item = Occupant> + '_ {
        diagonal_range(row).filter_map(move |diag| Space::new(row, diag).ok().map(|s| self.get(s)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("black", &self.black)
            .field("white", &self.white)
            .finish()
    }
}
