//! Hand-category odds for a Hold'em player.
//!
//! A complete board is resolved directly. With 3 or 4 community cards every
//! completion of the board is enumerated. Earlier than that the completion
//! space is sampled uniformly (distinct combinations) and the tally smoothed.
mod distribution;

pub use distribution::{Distribution, Method, Tally};

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::best_hand;
use crate::evaluator::combinations::{binomial, nth_combination};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Completions drawn when the board is too early to enumerate.
pub const SAMPLE_SIZE: usize = 10_000;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OddsError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("estimation cancelled")]
    Cancelled,
    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Shared flag a caller can raise to stop an estimation in progress.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Method {
    /// Pick the method for a board of `len` cards. One card is not a
    /// reachable Hold'em state.
    pub fn for_board(len: usize) -> Result<Self, HandError> {
        match len {
            5 => Ok(Method::Resolved),
            3 | 4 => Ok(Method::Exhaustive),
            0 | 2 => Ok(Method::Sampled),
            n if n > 5 => Err(HandError::TooManyBoardCards(n)),
            n => Err(HandError::IllegalBoardSize(n)),
        }
    }
}

/// Odds calculator settings.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::odds::{Estimator, Method};
///
/// let hole: HoleCards = "2D 7H".parse().unwrap();
/// let dist = Estimator::new()
///     .with_seed(7)
///     .with_sample_size(500)
///     .estimate(&hole, &Board::default())
///     .unwrap();
/// assert_eq!(dist.method(), Method::Sampled);
/// assert_eq!(dist.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    sample_size: usize,
    seed: Option<u64>,
    threads: usize,
    cancel: Option<CancelToken>,
}

impl Default for Estimator {
    fn default() -> Self {
        Self { sample_size: SAMPLE_SIZE, seed: None, threads: 1, cancel: None }
    }
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completions to draw when sampling. Clamped to the size of the space.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Seed the sampler for reproducible estimates.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Worker threads for the enumeration/sampling loop (at least one).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Distribution of the final hand category for `hole` given `board`.
    pub fn estimate(&self, hole: &HoleCards, board: &Board) -> Result<Distribution, OddsError> {
        validate_holdem(hole, board)?;
        let method = Method::for_board(board.len())?;

        let mut known = hole.as_array().to_vec();
        known.extend_from_slice(board.as_slice());

        if method == Method::Resolved {
            let best = best_hand(&known);
            log::debug!("complete board resolves to {}", best.category);
            return Ok(Distribution::resolved(best));
        }

        let unseen = Deck::without(&known);
        let draw = board.unseen();
        let space = binomial(unseen.len(), draw);
        let ranks: Vec<usize> = match method {
            Method::Sampled => self.sample_ranks(space),
            _ => (0..space).collect(),
        };
        log::debug!(
            "{method} estimate: drawing {draw} of {} unseen cards, {} of {space} completions",
            unseen.len(),
            ranks.len()
        );

        let tally = self.tally(&known, unseen.as_slice(), draw, &ranks)?;
        log::debug!("tallied {} outcomes: {tally:?}", tally.total());

        Ok(match method {
            Method::Sampled => Distribution::smoothed(&tally),
            _ => Distribution::exact(&tally, method),
        })
    }

    /// Distinct completion indices drawn uniformly from `0..space`.
    fn sample_ranks(&self, space: usize) -> Vec<usize> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("sampling with seed {seed}");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let amount = self.sample_size.min(space);
        rand::seq::index::sample(&mut rng, space, amount).into_vec()
    }

    /// Split `ranks` into contiguous chunks, tally each on its own thread and
    /// sum the results.
    fn tally(
        &self,
        known: &[Card],
        unseen: &[Card],
        draw: usize,
        ranks: &[usize],
    ) -> Result<Tally, OddsError> {
        let cancel = self.cancel.as_ref();
        let threads = self.threads.min(ranks.len()).max(1);
        if threads == 1 {
            return tally_completions(known, unseen, draw, ranks, cancel);
        }

        let chunk = (ranks.len() + threads - 1) / threads;
        thread::scope(|s| -> Result<Tally, OddsError> {
            let workers: Vec<_> = ranks
                .chunks(chunk)
                .map(|part| s.spawn(move || tally_completions(known, unseen, draw, part, cancel)))
                .collect();

            let mut total = Tally::default();
            for worker in workers {
                let part = worker.join().map_err(|_| OddsError::WorkerPanicked)??;
                total.merge(&part);
            }
            Ok(total)
        })
    }
}

/// Tally the best-hand category of `known` plus each completion in `ranks`.
fn tally_completions(
    known: &[Card],
    unseen: &[Card],
    draw: usize,
    ranks: &[usize],
    cancel: Option<&CancelToken>,
) -> Result<Tally, OddsError> {
    let mut tally = Tally::default();
    let mut pool = [known[0]; 7];
    pool[..known.len()].copy_from_slice(known);
    let len = known.len() + draw;

    for &rank in ranks {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(OddsError::Cancelled);
        }
        let combo = nth_combination(rank, unseen.len(), draw);
        for (slot, &i) in pool[known.len()..len].iter_mut().zip(combo.as_slice()) {
            *slot = unseen[i];
        }
        tally.record(best_hand(&pool[..len]).category);
    }
    Ok(tally)
}

/// Estimate with default settings: single-threaded, 10,000 samples, fresh seed.
///
/// ```
/// use poker_odds::evaluator::HandCategory;
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::odds::estimate;
///
/// let hole: HoleCards = "9S 9H".parse().unwrap();
/// let board: Board = "9C 9D 2S".parse().unwrap();
/// let dist = estimate(&hole, &board).unwrap();
/// assert_eq!(dist.get(HandCategory::FourOfAKind), Some(1.0));
/// ```
pub fn estimate(hole: &HoleCards, board: &Board) -> Result<Distribution, OddsError> {
    Estimator::default().estimate(hole, board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_follows_board_size() {
        assert_eq!(Method::for_board(0).unwrap(), Method::Sampled);
        assert_eq!(Method::for_board(2).unwrap(), Method::Sampled);
        assert_eq!(Method::for_board(3).unwrap(), Method::Exhaustive);
        assert_eq!(Method::for_board(4).unwrap(), Method::Exhaustive);
        assert_eq!(Method::for_board(5).unwrap(), Method::Resolved);
        assert_eq!(Method::for_board(1), Err(HandError::IllegalBoardSize(1)));
        assert_eq!(Method::for_board(6), Err(HandError::TooManyBoardCards(6)));
    }

    #[test]
    fn sampled_ranks_are_distinct_and_in_range() {
        let est = Estimator::new().with_seed(3).with_sample_size(1_000);
        let mut ranks = est.sample_ranks(17_296);
        assert_eq!(ranks.len(), 1_000);
        assert!(ranks.iter().all(|&r| r < 17_296));
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), 1_000);
    }

    #[test]
    fn sample_size_is_clamped_to_space() {
        let est = Estimator::new().with_seed(3).with_sample_size(100);
        let mut ranks = est.sample_ranks(46);
        ranks.sort_unstable();
        assert_eq!(ranks, (0..46).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_sample() {
        let est = Estimator::new().with_seed(11).with_sample_size(50);
        assert_eq!(est.sample_ranks(2_118_760), est.sample_ranks(2_118_760));
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn zero_threads_means_one() {
        assert_eq!(Estimator::new().with_threads(0).threads, 1);
    }
}
