use super::rank_groups::RankPattern;
use super::straight_info::StraightInfo;
use crate::cards::Card;

/// Pre-computed flags of a 5-card hand, built once per classification.
#[derive(Debug, Clone, Copy)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub is_flush: bool,
    pub pattern: RankPattern,
    pub straight: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut desc = [0u8; 5];
        let mut rank_counts = [0u8; 15];
        for (slot, card) in desc.iter_mut().zip(sorted_cards.iter()) {
            *slot = card.rank().value();
            rank_counts[*slot as usize] += 1;
        }

        let first_suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == first_suit);

        Self {
            sorted_cards,
            is_flush,
            pattern: RankPattern::from_counts(&rank_counts),
            straight: StraightInfo::detect(&desc),
        }
    }

    pub fn is_straight(&self) -> bool {
        self.straight.is_straight
    }

    pub fn tiebreak(&self) -> [u8; 5] {
        self.straight.tiebreak
    }
}
