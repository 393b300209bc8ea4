use crate::evaluator::{HandCategory, HandRank};
use std::fmt;

/// Per-category outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; HandCategory::COUNT],
}

impl Tally {
    pub fn record(&mut self, category: HandCategory) {
        self.counts[category.ordinal() as usize] += 1;
    }

    pub fn merge(&mut self, other: &Tally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category.ordinal() as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// How a distribution was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Complete board: the outcome is already decided.
    Resolved,
    /// Every completion of the board was evaluated.
    Exhaustive,
    /// A uniform sample of completions, Laplace-smoothed.
    Sampled,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Resolved => "resolved",
            Method::Exhaustive => "exhaustive",
            Method::Sampled => "sampled",
        })
    }
}

/// Probability of finishing in each hand category, strongest category first.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    entries: Vec<(HandCategory, f64)>,
    method: Method,
    outcomes: u64,
    made_hand: Option<HandRank>,
}

impl Distribution {
    /// A complete board: the made hand, certain.
    pub fn resolved(best: HandRank) -> Self {
        Self { entries: vec![(best.category, 1.0)], method: Method::Resolved, outcomes: 1, made_hand: Some(best) }
    }

    /// `count / total` for every observed category. Unobserved categories are
    /// left out.
    pub fn exact(tally: &Tally, method: Method) -> Self {
        let total = tally.total();
        let entries = HandCategory::ALL
            .iter()
            .rev()
            .filter(|&&c| tally.count(c) > 0)
            .map(|&c| (c, tally.count(c) as f64 / total as f64))
            .collect();
        Self { entries, method, outcomes: total, made_hand: None }
    }

    /// Add-one smoothing: `(count + 1) / (total + 10)` for all ten categories,
    /// so none reports zero and the ten still sum to one.
    pub fn smoothed(tally: &Tally) -> Self {
        let total = tally.total();
        let denom = (total + HandCategory::COUNT as u64) as f64;
        let entries = HandCategory::ALL
            .iter()
            .rev()
            .map(|&c| (c, (tally.count(c) + 1) as f64 / denom))
            .collect();
        Self { entries, method: Method::Sampled, outcomes: total, made_hand: None }
    }

    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, category: HandCategory) -> Option<f64> {
        self.entries.iter().find(|(c, _)| *c == category).map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities; one up to float rounding.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The best five cards already made; only set for a complete board.
    pub fn made_hand(&self) -> Option<&HandRank> {
        self.made_hand.as_ref()
    }

    /// Number of board completions evaluated (1 for a complete board).
    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }
}
