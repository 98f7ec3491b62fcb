// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification from card tokens.
use ahash::AHashSet;
use log::debug;
use thiserror::Error;

use holdem_cards::{Card, ParseCardError, Rank, Suit};

use crate::{
    classify::{HandClassification, classify},
    stats::HAND_SIZE,
};

/// The number of hole cards.
pub const HOLE_CARDS: usize = 2;

/// The number of community cards.
pub const COMMUNITY_CARDS: usize = 5;

/// Error returned when the hand cards are not valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A card token is not valid.
    #[error(transparent)]
    MalformedCard(#[from] ParseCardError),
    /// The hand doesn't have 2 hole cards and 5 community cards.
    #[error("invalid hand size {hole} hole cards and {community} community cards")]
    InvalidHandSize {
        /// The number of hole cards.
        hole: usize,
        /// The number of community cards.
        community: usize,
    },
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Classifies a hand given the hole and community card tokens.
///
/// The tokens are validated before classification, there must be exactly
/// [HOLE_CARDS] hole cards and [COMMUNITY_CARDS] community cards with no
/// duplicates.
pub fn classify_hand<S: AsRef<str>>(
    hole: &[S],
    community: &[S],
) -> Result<HandClassification, HandError> {
    if hole.len() != HOLE_CARDS || community.len() != COMMUNITY_CARDS {
        debug!(
            "Rejected hand with {} hole and {} community cards",
            hole.len(),
            community.len()
        );

        return Err(HandError::InvalidHandSize {
            hole: hole.len(),
            community: community.len(),
        });
    }

    let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); HAND_SIZE];
    let mut seen = AHashSet::with_capacity(HAND_SIZE);

    for (slot, token) in cards.iter_mut().zip(hole.iter().chain(community)) {
        let card = Card::parse(token.as_ref()).inspect_err(|e| debug!("Rejected hand: {e}"))?;
        if !seen.insert(card) {
            debug!("Rejected hand with duplicate card {card}");
            return Err(HandError::DuplicateCard(card));
        }

        *slot = card;
    }

    Ok(classify(&cards))
}
