//! Seats at the table and per-seat storage.

use core::fmt;
use core::ops::{Index, IndexMut};

/// A fixed seat at the table, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// First player.
    Mario,
    /// Second player.
    Luigi,
    /// Third player.
    Yoshi,
    /// The dealer, who plays last.
    Dealer,
}

impl Seat {
    /// Every seat in table order.
    pub const ALL: [Self; 4] = [Self::Mario, Self::Luigi, Self::Yoshi, Self::Dealer];

    /// Number of seats.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this seat in table order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat after this one, wrapping from the dealer back to the first player.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mario => "Mario",
            Self::Luigi => "Luigi",
            Self::Yoshi => "Yoshi",
            Self::Dealer => "Dealer",
        }
    }

    /// Element id used by the browser table.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mario => "player1",
            Self::Luigi => "player2",
            Self::Yoshi => "player3",
            Self::Dealer => "dealer",
        }
    }

    /// Avatar image path.
    #[must_use]
    pub const fn avatar(self) -> &'static str {
        match self {
            Self::Mario => "Assets/mario.png",
            Self::Luigi => "Assets/luigi.png",
            Self::Yoshi => "Assets/yoshi.png",
            Self::Dealer => "Assets/peach-dealer.png",
        }
    }

    /// Returns whether this is the dealer seat.
    #[must_use]
    pub const fn is_dealer(self) -> bool {
        matches!(self, Self::Dealer)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per seat, indexed by [`Seat`].
///
/// Front ends build one of these at setup to hold the view handle of each
/// seat, instead of looking seats up by id string on every update.
///
/// ```
/// use spacedeck::{Seat, SeatMap};
///
/// let labels = SeatMap::from_fn(|seat| seat.id());
/// assert_eq!(labels[Seat::Dealer], "dealer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeatMap<T>([T; Seat::COUNT]);

impl<T> SeatMap<T> {
    /// Builds a map by calling `f` once per seat, in table order.
    pub fn from_fn(mut f: impl FnMut(Seat) -> T) -> Self {
        Self(core::array::from_fn(|index| f(Seat::ALL[index])))
    }

    /// Iterates over `(seat, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterates mutably over `(seat, value)` pairs in table order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.0.iter_mut())
    }

    /// Iterates over values in table order.
    pub fn values(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Maps every value, keeping seats.
    pub fn map<U>(self, mut f: impl FnMut(Seat, T) -> U) -> SeatMap<U> {
        let [mario, luigi, yoshi, dealer] = self.0;
        SeatMap([
            f(Seat::Mario, mario),
            f(Seat::Luigi, luigi),
            f(Seat::Yoshi, yoshi),
            f(Seat::Dealer, dealer),
        ])
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.0[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.0[seat.index()]
    }
}
