//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-letter suit code (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::is_valid`]
    /// or build decks through [`crate::Deck`], which rejects bad ranks.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the rank is within 1..=13.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= 1 && self.rank <= 13
    }

    /// Points this card adds to a hand.
    ///
    /// Number cards count their rank, face cards count 10 and the ace always
    /// counts 1. There is no soft ace.
    #[must_use]
    pub const fn value(&self) -> u16 {
        match self.rank {
            2..=10 => self.rank as u16,
            11..=13 => 10,
            1 => 1,
            _ => 0,
        }
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Returns the two-character image code, where ten is written `0`
    /// (`0H`, `KS`, `AD`).
    #[must_use]
    pub const fn image_code(&self) -> [char; 2] {
        let rank = match self.rank {
            1 => 'A',
            2..=9 => (b'0' + self.rank) as char,
            10 => '0',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        };
        [rank, self.suit.code()]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.code())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
