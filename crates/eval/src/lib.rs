// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand classifier.
//!
//! Classifies a Texas Hold'em hand made of two hole cards and five community
//! cards, the classification is the category of the best five cards hand and
//! the ranks that break ties between hands of the same category:
//!
//! ```
//! # use holdem_eval::*;
//! let hand = classify_hand(&["A♠", "A♦"], &["A♣", "A♥", "K♠", "K♦", "2♣"])?;
//! assert_eq!(hand.category(), HandCategory::FourOfAKind);
//! assert_eq!(hand.ranks(), &[Rank::Ace, Rank::King]);
//! assert_eq!(hand.to_tuple(), ("four-of-a-kind", vec!["A".to_string(), "K".to_string()]));
//! # Ok::<(), HandError>(())
//! ```
//!
//! Callers that already hold validated cards can use [classify] directly:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = ["2♠", "3♠", "4♠", "5♠", "6♠", "9♦", "Q♣"].map(|t| t.parse::<Card>().unwrap());
//! assert_eq!(classify(&cards).to_string(), "straight-flush 6 5 4 3 2");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub use classify::{HandCategory, HandClassification, classify};

pub mod hand;
pub use hand::{COMMUNITY_CARDS, HOLE_CARDS, HandError, classify_hand};

pub mod stats;
pub use stats::{BEST_HAND_SIZE, HAND_SIZE, HandStats};

// Reexport cards types.
pub use holdem_cards::{Card, ParseCardError, Rank, Suit};
