use crate::cards::{Card, Rank, Suit};

/// A standard 52-card deck, or what is left of one once the known cards are
/// taken out.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// The unseen deck: every standard card not in `known`, in deck order.
    ///
    /// ```
    /// use poker_odds::cards::parse_cards;
    /// use poker_odds::deck::Deck;
    ///
    /// let known = parse_cards("AS KS QS JS TS").unwrap();
    /// assert_eq!(Deck::without(&known).len(), 47);
    /// ```
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|c| !known.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
