// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit statistics of a 7 cards hand.
use holdem_cards::{Card, Rank, Suit};

/// The number of cards in a hand, two hole cards and five community cards.
pub const HAND_SIZE: usize = 7;

/// The number of cards that make the best hand.
pub const BEST_HAND_SIZE: usize = 5;

/// Read-only statistics derived once from the 7 cards of a hand.
///
/// The frequency tables have a slot for every rank and suit, a rank or suit
/// that doesn't appear in the hand has a zero count.
#[derive(Debug, Clone)]
pub struct HandStats {
    cards: [Card; HAND_SIZE],
    rank_frequency: [u8; Rank::COUNT],
    suit_frequency: [u8; Suit::COUNT],
    pair_ranks: Vec<Rank>,
    single_ranks: Vec<Rank>,
}

impl HandStats {
    /// Computes the statistics for the given cards.
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut rank_frequency = [0; Rank::COUNT];
        let mut suit_frequency = [0; Suit::COUNT];

        for card in cards {
            rank_frequency[card.rank().index()] += 1;
            suit_frequency[card.suit().index()] += 1;
        }

        let mut stats = Self {
            cards: *cards,
            rank_frequency,
            suit_frequency,
            pair_ranks: Vec::new(),
            single_ranks: Vec::new(),
        };

        stats.pair_ranks = stats.ranks_with(2).collect();
        stats.single_ranks = stats.ranks_with(1).collect();
        stats
    }

    /// The number of cards with the given rank.
    pub fn rank_frequency(&self, rank: Rank) -> usize {
        self.rank_frequency[rank.index()] as usize
    }

    /// The number of cards with the given suit.
    pub fn suit_frequency(&self, suit: Suit) -> usize {
        self.suit_frequency[suit.index()] as usize
    }

    /// Ranks that appear exactly twice, highest first.
    pub fn pair_ranks(&self) -> &[Rank] {
        &self.pair_ranks
    }

    /// Ranks that appear exactly once, highest first.
    pub fn single_ranks(&self) -> &[Rank] {
        &self.single_ranks
    }

    /// Ranks that appear exactly `count` times, highest first.
    pub fn ranks_with(&self, count: usize) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |&rank| self.rank_frequency(rank) == count)
    }

    /// Ranks that appear at least once, highest first.
    pub fn present_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |&rank| self.rank_frequency(rank) > 0)
    }

    /// The suit with at least five cards if there is one.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|&suit| self.suit_frequency(suit) >= BEST_HAND_SIZE)
    }

    /// The distinct ranks of the cards with the given suit, highest first.
    pub fn suit_ranks(&self, suit: Suit) -> Vec<Rank> {
        let mut ranks = self
            .cards
            .iter()
            .filter(|card| card.suit() == suit)
            .map(Card::rank)
            .collect::<Vec<_>>();

        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.dedup();
        ranks
    }
}
