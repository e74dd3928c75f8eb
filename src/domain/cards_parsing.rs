//! Card parsing and display in two-char token form (e.g. "AO", "3C", "RB").
//!
//! The first char is the rank (A 3 R C D 7 6 5 4 2), the second the suit
//! (O oro, C coppe, S spade, B bastoni).

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::GameError;

impl Suit {
    const fn token(self) -> char {
        match self {
            Suit::Oro => 'O',
            Suit::Coppe => 'C',
            Suit::Spade => 'S',
            Suit::Bastoni => 'B',
        }
    }
}

impl Rank {
    const fn token(self) -> char {
        match self {
            Rank::Asso => 'A',
            Rank::Tre => '3',
            Rank::Re => 'R',
            Rank::Cavallo => 'C',
            Rank::Donna => 'D',
            Rank::Sette => '7',
            Rank::Sei => '6',
            Rank::Cinque => '5',
            Rank::Quattro => '4',
            Rank::Due => '2',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Oro => "oro",
            Suit::Coppe => "coppe",
            Suit::Spade => "spade",
            Suit::Bastoni => "bastoni",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(GameError::validation(format!("parse card: {s}")));
        };
        let rank = match rank_ch {
            'A' => Rank::Asso,
            '3' => Rank::Tre,
            'R' => Rank::Re,
            'C' => Rank::Cavallo,
            'D' => Rank::Donna,
            '7' => Rank::Sette,
            '6' => Rank::Sei,
            '5' => Rank::Cinque,
            '4' => Rank::Quattro,
            '2' => Rank::Due,
            _ => return Err(GameError::validation(format!("parse card rank: {s}"))),
        };
        let suit = match suit_ch {
            'O' => Suit::Oro,
            'C' => Suit::Coppe,
            'S' => Suit::Spade,
            'B' => Suit::Bastoni,
            _ => return Err(GameError::validation(format!("parse card suit: {s}"))),
        };
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into `Card` instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
