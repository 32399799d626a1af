//! The two sides and per-side data storage.
//!
//! ## Side
//!
//! `Musketeers` (player 1, moves first) or `Enemies` (player 2).
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Which side is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The three Musketeers. Always moves first.
    Musketeers,
    /// Cardinal Richelieu's men.
    Enemies,
}

impl Side {
    /// The side that moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Musketeers => Side::Enemies,
            Side::Enemies => Side::Musketeers,
        }
    }

    /// The piece this side moves.
    #[must_use]
    pub const fn piece(self) -> Cell {
        match self {
            Side::Musketeers => Cell::Musketeer,
            Side::Enemies => Cell::Enemy,
        }
    }

    /// Player number shown in prompts (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Side::Musketeers => 1,
            Side::Enemies => 2,
        }
    }

    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Musketeers => f.write_str("Musketeers"),
            Side::Enemies => f.write_str("Enemies"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use three_musketeers::core::{Side, SideMap};
///
/// let mut moves: SideMap<u32> = SideMap::default();
/// moves[Side::Enemies] += 1;
/// assert_eq!(moves[Side::Musketeers], 0);
/// assert_eq!(moves[Side::Enemies], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
