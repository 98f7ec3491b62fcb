// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Classifier rules.
use holdem_cards::Rank;

use super::{HandCategory, HandClassification};
use crate::stats::{BEST_HAND_SIZE, HandStats};

/// Transitions between consecutive ranks in a five cards straight.
pub const STRAIGHT_TRANSITIONS: usize = BEST_HAND_SIZE - 1;

/// A rule that classifies a hand if the hand statistics match the rule.
pub struct Rule {
    /// The rule name used for tracing.
    pub name: &'static str,
    /// Returns the classification if the rule matches.
    pub eval: fn(&HandStats) -> Option<HandClassification>,
}

/// The rules from the strongest to the weakest, the last rule always matches.
pub const RULES: [Rule; 11] = [
    Rule {
        name: "straight flush",
        eval: straight_flush,
    },
    Rule {
        name: "four of a kind",
        eval: four_of_a_kind,
    },
    Rule {
        name: "full house with two triples",
        eval: full_house_two_triples,
    },
    Rule {
        name: "full house with triple and pair",
        eval: full_house_triple_and_pair,
    },
    Rule {
        name: "flush",
        eval: flush,
    },
    Rule {
        name: "straight",
        eval: straight,
    },
    Rule {
        name: "three of a kind",
        eval: three_of_a_kind,
    },
    Rule {
        name: "three pair",
        eval: three_pair,
    },
    Rule {
        name: "two pair",
        eval: two_pair,
    },
    Rule {
        name: "one pair",
        eval: one_pair,
    },
    Rule {
        name: "nothing",
        eval: nothing,
    },
];

/// Finds a run of consecutive ranks in ranks sorted from the highest.
///
/// Returns the index of the first rank in the run and the number of
/// transitions between consecutive ranks in the run. The scan stops at the
/// first run with [STRAIGHT_TRANSITIONS], so that the highest straight is
/// returned, otherwise it returns the longest run.
pub fn find_run(ranks: &[Rank]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut start = 0;
    let mut transitions = 0;

    for (idx, pair) in ranks.windows(2).enumerate() {
        if pair[0].order() + 1 == pair[1].order() {
            transitions += 1;
        } else {
            start = idx + 1;
            transitions = 0;
        }

        if transitions > best.1 {
            best = (start, transitions);
        }

        if transitions == STRAIGHT_TRANSITIONS {
            break;
        }
    }

    best
}

/// The five ranks of the highest straight in ranks sorted from the highest.
fn straight_ranks(ranks: &[Rank]) -> Option<Vec<Rank>> {
    let (start, transitions) = find_run(ranks);
    (transitions >= STRAIGHT_TRANSITIONS).then(|| ranks[start..start + BEST_HAND_SIZE].to_vec())
}

fn straight_flush(stats: &HandStats) -> Option<HandClassification> {
    let suit = stats.flush_suit()?;
    let ranks = straight_ranks(&stats.suit_ranks(suit))?;
    Some(HandClassification::new(HandCategory::StraightFlush, ranks))
}

fn four_of_a_kind(stats: &HandStats) -> Option<HandClassification> {
    let quad = stats.ranks_with(4).next()?;
    let kicker = stats.present_ranks().find(|&rank| rank != quad)?;
    Some(HandClassification::new(
        HandCategory::FourOfAKind,
        vec![quad, kicker],
    ))
}

fn full_house_two_triples(stats: &HandStats) -> Option<HandClassification> {
    let triples = stats.ranks_with(3).collect::<Vec<_>>();
    if triples.len() != 2 {
        return None;
    }

    Some(HandClassification::new(HandCategory::FullHouse, triples))
}

fn full_house_triple_and_pair(stats: &HandStats) -> Option<HandClassification> {
    let mut triples = stats.ranks_with(3);
    let triple = triples.next()?;
    if triples.next().is_some() {
        return None;
    }

    let pair = *stats.pair_ranks().first()?;
    Some(HandClassification::new(
        HandCategory::FullHouse,
        vec![triple, pair],
    ))
}

fn flush(stats: &HandStats) -> Option<HandClassification> {
    let suit = stats.flush_suit()?;
    let mut ranks = stats.suit_ranks(suit);
    ranks.truncate(BEST_HAND_SIZE);
    Some(HandClassification::new(HandCategory::Flush, ranks))
}

fn straight(stats: &HandStats) -> Option<HandClassification> {
    let ranks = straight_ranks(&stats.present_ranks().collect::<Vec<_>>())?;
    Some(HandClassification::new(HandCategory::Straight, ranks))
}

fn three_of_a_kind(stats: &HandStats) -> Option<HandClassification> {
    let triple = stats.ranks_with(3).next()?;

    let mut ranks = vec![triple];
    ranks.extend(stats.single_ranks().iter().take(BEST_HAND_SIZE - 3));
    Some(HandClassification::new(HandCategory::ThreeOfAKind, ranks))
}

fn three_pair(stats: &HandStats) -> Option<HandClassification> {
    let pairs = stats.pair_ranks();
    if pairs.len() != 3 {
        return None;
    }

    // The lowest pair competes with the singles for the kicker.
    let kicker = stats.single_ranks().iter().chain(&pairs[2..]).max()?;

    let mut ranks = pairs[..2].to_vec();
    ranks.push(*kicker);
    Some(HandClassification::new(HandCategory::TwoPair, ranks))
}

fn two_pair(stats: &HandStats) -> Option<HandClassification> {
    let pairs = stats.pair_ranks();
    if pairs.len() != 2 {
        return None;
    }

    let mut ranks = pairs.to_vec();
    ranks.extend(stats.single_ranks().iter().take(BEST_HAND_SIZE - 4));
    Some(HandClassification::new(HandCategory::TwoPair, ranks))
}

fn one_pair(stats: &HandStats) -> Option<HandClassification> {
    let pairs = stats.pair_ranks();
    if pairs.len() != 1 {
        return None;
    }

    let mut ranks = pairs.to_vec();
    ranks.extend(stats.single_ranks().iter().take(BEST_HAND_SIZE - 2));
    Some(HandClassification::new(HandCategory::OnePair, ranks))
}

fn nothing(stats: &HandStats) -> Option<HandClassification> {
    let ranks = stats
        .single_ranks()
        .iter()
        .take(BEST_HAND_SIZE)
        .copied()
        .collect();
    Some(HandClassification::new(HandCategory::HighCard, ranks))
}
