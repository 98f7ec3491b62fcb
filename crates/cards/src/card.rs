// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a card token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token rank or suit symbol is not recognized.
    #[error("malformed card '{token}'")]
    Malformed {
        /// The rejected token.
        token: String,
    },
}

/// A Poker card.
///
/// A card is parsed from a token made of a rank symbol followed by a suit
/// symbol, for example `A♠`, `10♦` or `QH`:
///
/// ```
/// # use holdem_cards::{Card, Rank, Suit};
/// let card = Card::parse("10♦").unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
/// assert_eq!(card.to_string(), "10♦");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a card token, the last character is the suit and the preceding
    /// characters are the rank.
    pub fn parse(token: &str) -> Result<Card, ParseCardError> {
        let malformed = || ParseCardError::Malformed {
            token: token.to_string(),
        };

        let token = token.trim();
        let suit_char = token.chars().last().ok_or_else(malformed)?;
        let rank_str = &token[..token.len() - suit_char.len_utf8()];

        let rank = Rank::from_symbol(rank_str).ok_or_else(malformed)?;
        let suit = Suit::from_symbol(suit_char).ok_or_else(malformed)?;

        Ok(Card::new(rank, suit))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    #[serde(rename = "2")]
    Deuce = 0,
    /// Trey
    #[serde(rename = "3")]
    Trey,
    /// Four
    #[serde(rename = "4")]
    Four,
    /// Five
    #[serde(rename = "5")]
    Five,
    /// Six
    #[serde(rename = "6")]
    Six,
    /// Seven
    #[serde(rename = "7")]
    Seven,
    /// Eight
    #[serde(rename = "8")]
    Eight,
    /// Nine
    #[serde(rename = "9")]
    Nine,
    /// Ten
    #[serde(rename = "10")]
    Ten,
    /// Jack
    #[serde(rename = "J")]
    Jack,
    /// Queen
    #[serde(rename = "Q")]
    Queen,
    /// King
    #[serde(rename = "K")]
    King,
    /// Ace
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Position of this rank in the descending canonical order, the ace is 0
    /// and the deuce is 12.
    ///
    /// Two ranks are consecutive when their orders differ by one, so the ace
    /// never wraps around below the deuce.
    pub fn order(self) -> usize {
        Self::COUNT - 1 - self as usize
    }

    /// Index of this rank in a table with one slot per rank.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a rank symbol, `T` is accepted as an alias for `10`.
    pub fn from_symbol(s: &str) -> Option<Rank> {
        let rank = match s {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Index of this suit in a table with one slot per suit.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a suit symbol, either the card symbol or its ASCII letter.
    pub fn from_symbol(c: char) -> Option<Suit> {
        let suit = match c {
            '♣' | 'C' | 'c' => Suit::Clubs,
            '♦' | 'D' | 'd' => Suit::Diamonds,
            '♥' | 'H' | 'h' => Suit::Hearts,
            '♠' | 'S' | 's' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }

    /// The suit symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
