// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker cards types.
//!
//! This crate define the [Card], [Rank] and [Suit] types and the parsing of
//! card tokens such as `A♠` or `10♦`:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("A♥".parse::<Card>(), Ok(ah));
//! assert_eq!(Card::parse("AH"), Ok(ah));
//! ```
//!
//! Ranks are ordered from deuce to ace, [Rank::order] gives the position of a
//! rank in the descending canonical order used to detect runs of consecutive
//! ranks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};
