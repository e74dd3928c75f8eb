//! Core card value types: Card, Rank, Suit.

/// Suit of the 40-card Sicilian deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Oro,
    Coppe,
    Spade,
    Bastoni,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Oro, Suit::Coppe, Suit::Spade, Suit::Bastoni];
}

/// Rank, declared in trick-taking order: Due is the weakest card of a suit,
/// Asso the strongest. Tre outranks everything but the Asso.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Due,
    Quattro,
    Cinque,
    Sei,
    Sette,
    Donna,
    Cavallo,
    Re,
    Tre,
    Asso,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Due,
        Rank::Quattro,
        Rank::Cinque,
        Rank::Sei,
        Rank::Sette,
        Rank::Donna,
        Rank::Cavallo,
        Rank::Re,
        Rank::Tre,
        Rank::Asso,
    ];

    /// Trick-taking strength; the highest strength of the winning suit takes
    /// the trick. No two ranks share a value, so ties are impossible.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Due => 1,
            Rank::Quattro => 2,
            Rank::Cinque => 3,
            Rank::Sei => 4,
            Rank::Sette => 5,
            Rank::Donna => 6,
            Rank::Cavallo => 7,
            Rank::Re => 8,
            Rank::Tre => 9,
            Rank::Asso => 10,
        }
    }

    /// Point value counted toward the 120-point deck total.
    pub const fn points(self) -> u8 {
        match self {
            Rank::Asso => 11,
            Rank::Tre => 10,
            Rank::Re => 4,
            Rank::Cavallo => 3,
            Rank::Donna => 2,
            Rank::Sette | Rank::Sei | Rank::Cinque | Rank::Quattro | Rank::Due => 0,
        }
    }
}

/// Immutable card identity; equality and hashing are by (suit, rank).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    pub const fn strength(self) -> u8 {
        self.rank.strength()
    }
}

// Note: Ord/Eq on Card is only for stable sorting: suit order O<C<S<B then
// rank order. Do not use for trick resolution, which depends on trump/lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
