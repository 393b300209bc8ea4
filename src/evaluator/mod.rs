pub mod combinations;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::Card;
use core::cmp::Ordering;
use core::fmt;

/// Poker hand category from weakest to strongest.
///
/// Royal Flush is its own category here: the natural A-K-Q-J-T straight flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const COUNT: usize = 10;

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed strength score, used to order reports.
    pub const fn strength(self) -> u32 {
        match self {
            HandCategory::HighCard => 5,
            HandCategory::Pair => 10,
            HandCategory::TwoPair => 20,
            HandCategory::ThreeOfAKind => 25,
            HandCategory::Straight => 30,
            HandCategory::Flush => 35,
            HandCategory::FullHouse => 40,
            HandCategory::FourOfAKind => 60,
            HandCategory::StraightFlush => 90,
            HandCategory::RoyalFlush => 100,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact, comparable hand strength. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct HandValue(u32);

impl HandValue {
    /// Pack a category and five tie-break values into a comparable value.
    pub fn from_parts(category: HandCategory, tiebreak: &[u8; 5]) -> Self {
        // Layout (most significant -> least):
        // [ category (4 bits) | t0 (4) | t1 (4) | t2 (4) | t3 (4) | t4 (4) ]
        // Tie-break values are 1..=14 and fit a nibble.
        const RANK_STRIDE: u32 = 4;
        let mut v = category as u32;
        for &t in tiebreak {
            v = (v << RANK_STRIDE) | t as u32;
        }
        HandValue(v)
    }
}

/// Classification of five cards: category plus tie-break key.
/// Ordering is by category first, then the tie-break key element-wise.
#[derive(Debug, Clone, Copy)]
pub struct HandRank {
    pub category: HandCategory,
    /// Rank values in descending order; the wheel reads [5, 4, 3, 2, 1].
    pub tiebreak: [u8; 5],
    /// The classified cards, highest rank first.
    pub cards: [Card; 5],
    value: HandValue,
}

impl HandRank {
    pub const fn score(&self) -> u32 {
        self.category.strength()
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandRank {}

/// Classify exactly five distinct cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{classify, HandCategory};
///
/// let c = parse_cards("AS 2S 3S 4S 5D").unwrap();
/// let rank = classify(&[c[0], c[1], c[2], c[3], c[4]]);
/// assert_eq!(rank.category, HandCategory::Straight);
/// assert_eq!(rank.score(), 30);
/// assert_eq!(rank.tiebreak, [5, 4, 3, 2, 1]);
/// ```
pub fn classify(cards: &[Card; 5]) -> HandRank {
    use hand_analysis::HandAnalysis;
    use rank_groups::RankPattern;

    let a = HandAnalysis::new(cards);
    let tiebreak = a.tiebreak();

    // First match wins; the arms are not mutually exclusive on their own.
    let category = match (a.is_straight() && a.is_flush, a.pattern) {
        (true, _) if tiebreak[0] == 14 => HandCategory::RoyalFlush,
        (true, _) => HandCategory::StraightFlush,
        (_, RankPattern::Quads) => HandCategory::FourOfAKind,
        (_, RankPattern::TripsAndPair) => HandCategory::FullHouse,
        _ if a.is_flush => HandCategory::Flush,
        _ if a.is_straight() => HandCategory::Straight,
        (_, RankPattern::Trips) => HandCategory::ThreeOfAKind,
        (_, RankPattern::TwoPairs) => HandCategory::TwoPair,
        (_, RankPattern::OnePair) => HandCategory::Pair,
        (_, RankPattern::Distinct) => HandCategory::HighCard,
    };

    HandRank {
        category,
        tiebreak,
        cards: a.sorted_cards,
        value: HandValue::from_parts(category, &tiebreak),
    }
}

/// Best classification over every 5-card subset of a 5 to 7 card pool.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{best_hand, HandCategory};
///
/// let pool = parse_cards("9S 9H 9C 9D 2S KH 3C").unwrap();
/// assert_eq!(best_hand(&pool).category, HandCategory::FourOfAKind);
/// ```
pub fn best_hand(pool: &[Card]) -> HandRank {
    use combinations::Combinations;

    debug_assert!((5..=7).contains(&pool.len()), "pool of {} cards", pool.len());

    // The first subset is always 0..5; seed with it and compare the rest.
    let mut best = classify(&[pool[0], pool[1], pool[2], pool[3], pool[4]]);
    for combo in Combinations::new(pool.len(), 5).skip(1) {
        let idx = combo.as_slice();
        let hand = [pool[idx[0]], pool[idx[1]], pool[idx[2]], pool[idx[3]], pool[idx[4]]];
        let rank = classify(&hand);
        if rank > best {
            best = rank;
        }
    }
    best
}
