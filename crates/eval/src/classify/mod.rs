// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifier.
//!
//! A hand is classified by running an ordered chain of rules over the hand
//! [statistics](crate::stats::HandStats), from the strongest category to the
//! weakest, the first rule that matches gives the hand category and the ranks
//! that break ties between hands of the same category.
//!
//! Seven cards can hold hands that don't exist with five cards, three pairs
//! are classified as two pair using the highest two pairs, and two triples are
//! classified as a full house.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Rank};

use crate::stats::{HAND_SIZE, HandStats};

mod rules;

/// The category of a hand, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair, the five highest cards.
    #[serde(rename = "nothing")]
    HighCard = 0,
    /// A pair and three kickers.
    #[serde(rename = "pair")]
    OnePair,
    /// Two pairs and a kicker.
    #[serde(rename = "two pair")]
    TwoPair,
    /// Three cards of the same rank and two kickers.
    #[serde(rename = "three-of-a-kind")]
    ThreeOfAKind,
    /// Five consecutive ranks.
    #[serde(rename = "straight")]
    Straight,
    /// Five cards of the same suit.
    #[serde(rename = "flush")]
    Flush,
    /// Three cards of one rank and two or three cards of another rank.
    #[serde(rename = "full house")]
    FullHouse,
    /// Four cards of the same rank and a kicker.
    #[serde(rename = "four-of-a-kind")]
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    #[serde(rename = "straight-flush")]
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category label.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "nothing",
            HandCategory::OnePair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three-of-a-kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four-of-a-kind",
            HandCategory::StraightFlush => "straight-flush",
        }
    }

    /// The number of tie-break ranks reported for this category.
    pub fn ranks_len(self) -> usize {
        match self {
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            HandCategory::HighCard
            | HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::StraightFlush => 5,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The category of a hand and its tie-break ranks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandClassification {
    category: HandCategory,
    ranks: Vec<Rank>,
}

impl HandClassification {
    /// Creates a classification.
    pub fn new(category: HandCategory, ranks: Vec<Rank>) -> Self {
        Self { category, ranks }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break ranks, their meaning depends on the category.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns the category label and the rank symbols.
    pub fn to_tuple(&self) -> (&'static str, Vec<String>) {
        let ranks = self.ranks.iter().map(|r| r.symbol().to_string()).collect();
        (self.category.label(), ranks)
    }
}

impl fmt::Display for HandClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for rank in &self.ranks {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

/// Classifies a hand made of 7 distinct cards.
pub fn classify(cards: &[Card; HAND_SIZE]) -> HandClassification {
    let stats = HandStats::new(cards);
    classify_stats(&stats)
}

/// Runs the rules chain on precomputed hand statistics.
pub fn classify_stats(stats: &HandStats) -> HandClassification {
    rules::RULES
        .iter()
        .find_map(|rule| {
            let classification = (rule.eval)(stats)?;
            trace!("Rule {} matched: {classification}", rule.name);
            Some(classification)
        })
        .unwrap_or_else(|| panic!("No rule matched {stats:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::Suit;
    use rand::seq::{IndexedRandom, SliceRandom};

    use holdem_cards::Rank::*;

    fn hand(tokens: [&str; HAND_SIZE]) -> [Card; HAND_SIZE] {
        tokens.map(|t| Card::parse(t).unwrap())
    }

    fn check(tokens: [&str; HAND_SIZE], category: HandCategory, ranks: &[Rank]) {
        let c = classify(&hand(tokens));
        assert_eq!(c.category(), category, "{tokens:?}");
        assert_eq!(c.ranks(), ranks, "{tokens:?}");
    }

    fn deck() -> Vec<Card> {
        Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect()
    }

    #[test]
    fn straight_flush() {
        use super::HandCategory::StraightFlush;
        check(
            ["2♠", "3♠", "4♠", "5♠", "6♠", "9♦", "Q♣"],
            StraightFlush,
            &[Six, Five, Four, Trey, Deuce],
        );

        // Highest run of a six cards straight flush.
        check(
            ["9♥", "10♥", "J♥", "Q♥", "K♥", "8♥", "2♣"],
            StraightFlush,
            &[King, Queen, Jack, Ten, Nine],
        );

        // The straight is in the flush suit even if a higher straight exists.
        check(
            ["5♦", "6♦", "7♦", "8♦", "9♦", "10♣", "J♠"],
            StraightFlush,
            &[Nine, Eight, Seven, Six, Five],
        );
    }

    #[test]
    fn flush_and_straight_not_straight_flush() {
        // Flush plus a straight using an off-suit card.
        check(
            ["2♥", "3♥", "4♥", "5♥", "9♥", "6♣", "K♠"],
            HandCategory::Flush,
            &[Nine, Five, Four, Trey, Deuce],
        );
    }

    #[test]
    fn four_of_a_kind() {
        use super::HandCategory::FourOfAKind;
        check(["A♠", "A♦", "A♣", "A♥", "K♠", "K♦", "2♣"], FourOfAKind, &[Ace, King]);
        check(["2♠", "2♦", "2♣", "2♥", "7♠", "7♦", "7♣"], FourOfAKind, &[Deuce, Seven]);
        check(["5♠", "5♦", "5♣", "5♥", "3♠", "J♦", "9♣"], FourOfAKind, &[Five, Jack]);
    }

    #[test]
    fn full_house() {
        use super::HandCategory::FullHouse;
        check(["7♠", "7♦", "7♣", "2♦", "2♣", "9♠", "Q♥"], FullHouse, &[Seven, Deuce]);

        // Two triples.
        check(["3♠", "3♦", "3♣", "K♦", "K♣", "K♠", "Q♥"], FullHouse, &[King, Trey]);

        // Triple and two pairs, the highest pair plays.
        check(["4♠", "4♦", "4♣", "J♦", "J♣", "Q♠", "Q♥"], FullHouse, &[Four, Queen]);
    }

    #[test]
    fn flush() {
        check(
            ["A♣", "3♣", "7♣", "9♣", "J♣", "K♣", "2♦"],
            HandCategory::Flush,
            &[Ace, King, Jack, Nine, Seven],
        );
    }

    #[test]
    fn straight() {
        use super::HandCategory::Straight;
        check(
            ["10♠", "J♦", "Q♣", "K♥", "A♠", "2♦", "3♣"],
            Straight,
            &[Ace, King, Queen, Jack, Ten],
        );

        // Paired card inside the straight.
        check(
            ["4♠", "5♦", "6♣", "6♥", "7♠", "8♦", "K♣"],
            Straight,
            &[Eight, Seven, Six, Five, Four],
        );

        // Highest five of a seven cards run.
        check(
            ["3♠", "4♦", "5♣", "6♥", "7♠", "8♦", "9♣"],
            Straight,
            &[Nine, Eight, Seven, Six, Five],
        );

        // Straight beats three of a kind.
        check(
            ["9♠", "9♦", "9♣", "10♥", "J♠", "Q♦", "K♣"],
            Straight,
            &[King, Queen, Jack, Ten, Nine],
        );
    }

    #[test]
    fn ace_plays_high_only() {
        check(
            ["A♠", "2♦", "3♣", "4♥", "5♠", "9♦", "J♣"],
            HandCategory::HighCard,
            &[Ace, Jack, Nine, Five, Four],
        );
    }

    #[test]
    fn three_of_a_kind() {
        check(
            ["Q♠", "Q♦", "Q♣", "2♥", "5♠", "9♦", "J♣"],
            HandCategory::ThreeOfAKind,
            &[Queen, Jack, Nine],
        );
    }

    #[test]
    fn two_pair() {
        use super::HandCategory::TwoPair;
        check(["3♠", "3♦", "6♣", "6♦", "9♠", "A♥", "2♣"], TwoPair, &[Six, Trey, Ace]);

        // Three pairs, the lowest pair is the kicker when it beats the single.
        check(["3♠", "3♦", "6♣", "6♦", "9♠", "9♥", "2♣"], TwoPair, &[Nine, Six, Trey]);

        // Three pairs, the single is the kicker when it beats the lowest pair.
        check(["3♠", "3♦", "6♣", "6♦", "9♠", "9♥", "K♣"], TwoPair, &[Nine, Six, King]);
    }

    #[test]
    fn one_pair() {
        check(
            ["8♠", "8♦", "6♣", "K♦", "9♠", "A♥", "2♣"],
            HandCategory::OnePair,
            &[Eight, Ace, King, Nine],
        );
    }

    #[test]
    fn high_card() {
        check(
            ["2♠", "5♦", "9♣", "J♦", "4♥", "7♠", "K♣"],
            HandCategory::HighCard,
            &[King, Jack, Nine, Seven, Five],
        );
    }

    #[test]
    fn category_labels() {
        let labels = HandCategory::categories()
            .rev()
            .map(HandCategory::label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "straight-flush",
                "four-of-a-kind",
                "full house",
                "flush",
                "straight",
                "three-of-a-kind",
                "two pair",
                "pair",
                "nothing"
            ]
        );

        assert!(HandCategory::StraightFlush > HandCategory::FourOfAKind);
        assert!(HandCategory::OnePair > HandCategory::HighCard);
    }

    #[test]
    fn classification_display_and_tuple() {
        let c = classify(&hand(["A♠", "A♦", "A♣", "A♥", "K♠", "K♦", "2♣"]));
        assert_eq!(c.to_string(), "four-of-a-kind A K");

        let c = classify(&hand(["10♠", "J♦", "Q♣", "K♥", "A♠", "2♦", "3♣"]));
        let (label, ranks) = c.to_tuple();
        assert_eq!(label, "straight");
        assert_eq!(ranks, vec!["A", "K", "Q", "J", "10"]);
    }

    #[test]
    fn classification_serde() {
        let c = classify(&hand(["7♠", "7♦", "7♣", "2♦", "2♣", "9♠", "Q♥"]));
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"category":"full house","ranks":["7","2"]}"#);

        let c2 = serde_json::from_str::<HandClassification>(&json).unwrap();
        assert_eq!(c2, c);
    }

    #[test]
    fn random_hands_invariant_under_permutation() {
        let mut rng = rand::rng();
        let deck = deck();

        for _ in 0..2_000 {
            let mut cards = deck
                .choose_multiple(&mut rng, HAND_SIZE)
                .copied()
                .collect::<Vec<_>>();

            let mut hand = [cards[0]; HAND_SIZE];
            hand.copy_from_slice(&cards);
            let expected = classify(&hand);
            assert_eq!(expected.ranks().len(), expected.category().ranks_len());

            cards.shuffle(&mut rng);
            hand.copy_from_slice(&cards);
            assert_eq!(classify(&hand), expected, "{cards:?}");
        }
    }

    /// Best five cards hand value by checking all the 21 five cards subsets,
    /// the ace plays high only.
    fn reference_best(cards: &[Card; HAND_SIZE]) -> (HandCategory, Vec<Rank>) {
        let mut best: Option<(HandCategory, Vec<Rank>)> = None;

        for skip1 in 0..HAND_SIZE {
            for skip2 in (skip1 + 1)..HAND_SIZE {
                let five = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip1 && *i != skip2)
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();

                let value = reference_eval5(&five);
                if best.as_ref().is_none_or(|b| value > *b) {
                    best = Some(value);
                }
            }
        }

        best.unwrap()
    }

    fn reference_eval5(cards: &[Card]) -> (HandCategory, Vec<Rank>) {
        // Groups of (count, rank) sorted by count then rank, highest first.
        let mut groups = Vec::<(usize, Rank)>::new();
        for rank in Rank::ranks() {
            let count = cards.iter().filter(|c| c.rank() == rank).count();
            if count > 0 {
                groups.push((count, rank));
            }
        }
        groups.sort_by(|a, b| b.cmp(a));

        let ranks = groups.iter().map(|(_, r)| *r).collect::<Vec<_>>();
        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let is_straight =
            groups.len() == 5 && ranks[0] as usize - ranks[4] as usize == 4;

        let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
            _ if is_straight && is_flush => HandCategory::StraightFlush,
            (4, _) => HandCategory::FourOfAKind,
            (3, Some(2)) => HandCategory::FullHouse,
            _ if is_flush => HandCategory::Flush,
            _ if is_straight => HandCategory::Straight,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, Some(2)) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        };

        (category, ranks)
    }

    #[test]
    fn random_hands_match_reference() {
        let mut rng = rand::rng();
        let deck = deck();

        for _ in 0..5_000 {
            let mut hand = [deck[0]; HAND_SIZE];
            for (slot, card) in hand.iter_mut().zip(deck.choose_multiple(&mut rng, HAND_SIZE)) {
                *slot = *card;
            }

            let (category, ranks) = reference_best(&hand);
            let c = classify(&hand);
            assert_eq!(c.category(), category, "{hand:?}");
            assert_eq!(c.ranks(), ranks.as_slice(), "{hand:?}");
        }
    }

    #[test]
    fn rare_categories_match_reference() {
        // Hands that random sampling rarely reaches.
        let hands = [
            ["A♠", "A♦", "A♣", "A♥", "K♠", "K♦", "K♣"],
            ["J♠", "J♦", "J♣", "9♥", "9♠", "9♦", "2♣"],
            ["9♥", "10♥", "J♥", "Q♥", "K♥", "A♥", "2♣"],
            ["2♦", "3♦", "4♦", "5♦", "6♦", "7♦", "8♦"],
            ["3♠", "3♦", "6♣", "6♦", "9♠", "9♥", "K♣"],
            ["3♠", "3♦", "6♣", "6♦", "9♠", "9♥", "2♣"],
            ["K♣", "Q♣", "J♣", "10♣", "9♣", "9♦", "9♥"],
        ];

        for tokens in hands {
            let cards = hand(tokens);
            let (category, ranks) = reference_best(&cards);
            let c = classify(&cards);
            assert_eq!(c.category(), category, "{tokens:?}");
            assert_eq!(c.ranks(), ranks.as_slice(), "{tokens:?}");
        }
    }
}
