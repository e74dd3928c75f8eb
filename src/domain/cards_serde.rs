//! Serialization for card types.
//!
//! Suits and ranks serialize as uppercase names; a Card serializes as its
//! two-char token (see `cards_parsing`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Suit::Oro => "ORO",
            Suit::Coppe => "COPPE",
            Suit::Spade => "SPADE",
            Suit::Bastoni => "BASTONI",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ORO" => Ok(Suit::Oro),
            "COPPE" => Ok(Suit::Coppe),
            "SPADE" => Ok(Suit::Spade),
            "BASTONI" => Ok(Suit::Bastoni),
            _ => Err(serde::de::Error::custom(format!("invalid suit: {s}"))),
        }
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Rank::Asso => "ASSO",
            Rank::Tre => "TRE",
            Rank::Re => "RE",
            Rank::Cavallo => "CAVALLO",
            Rank::Donna => "DONNA",
            Rank::Sette => "SETTE",
            Rank::Sei => "SEI",
            Rank::Cinque => "CINQUE",
            Rank::Quattro => "QUATTRO",
            Rank::Due => "DUE",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ASSO" => Ok(Rank::Asso),
            "TRE" => Ok(Rank::Tre),
            "RE" => Ok(Rank::Re),
            "CAVALLO" => Ok(Rank::Cavallo),
            "DONNA" => Ok(Rank::Donna),
            "SETTE" => Ok(Rank::Sette),
            "SEI" => Ok(Rank::Sei),
            "CINQUE" => Ok(Rank::Cinque),
            "QUATTRO" => Ok(Rank::Quattro),
            "DUE" => Ok(Rank::Due),
            _ => Err(serde::de::Error::custom(format!("invalid rank: {s}"))),
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
