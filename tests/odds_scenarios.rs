use poker_odds::evaluator::HandCategory;
use poker_odds::hand::{Board, HandError, HoleCards};
use poker_odds::odds::{estimate, CancelToken, Estimator, Method, OddsError};

fn cards(hole: &str, board: &str) -> (HoleCards, Board) {
    (hole.parse().unwrap(), board.parse().unwrap())
}

fn assert_sums_to_one(total: f64) {
    assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
}

#[test]
fn flop_royal_flush_is_certain() {
    let (hole, board) = cards("AS KS", "QS JS TS");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.method(), Method::Exhaustive);
    assert_eq!(d.outcomes(), 1081);
    assert_eq!(d.iter().collect::<Vec<_>>(), vec![(HandCategory::RoyalFlush, 1.0)]);
}

#[test]
fn flop_quads_are_certain() {
    let (hole, board) = cards("9S 9H", "9C 9D 2S");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.iter().collect::<Vec<_>>(), vec![(HandCategory::FourOfAKind, 1.0)]);
}

#[test]
fn river_reports_only_the_made_hand() {
    let (hole, board) = cards("2D 7H", "KS 9C 4H 3D JC");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.method(), Method::Resolved);
    assert_eq!(d.outcomes(), 1);
    assert_eq!(d.iter().collect::<Vec<_>>(), vec![(HandCategory::HighCard, 1.0)]);
    let made = d.made_hand().expect("complete board carries its made hand");
    assert_eq!(made.category, HandCategory::HighCard);
    assert_eq!(made.tiebreak, [13, 11, 9, 7, 4]);
}

#[test]
fn river_uses_best_five_of_seven() {
    let (hole, board) = cards("AH 2C", "3D 4S 5H KH KD");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.get(HandCategory::Straight), Some(1.0));
    assert_eq!(d.made_hand().map(|h| h.tiebreak), Some([5, 4, 3, 2, 1]));
}

#[test]
fn only_complete_boards_carry_a_made_hand() {
    let (hole, board) = cards("AH KH", "2H 7H 9C");
    assert!(estimate(&hole, &board).unwrap().made_hand().is_none());
    let (hole, board) = cards("AH KH", "");
    let d = Estimator::new().with_seed(3).with_sample_size(500).estimate(&hole, &board).unwrap();
    assert!(d.made_hand().is_none());
}

#[test]
fn flop_probabilities_are_exact_fractions_of_1081() {
    let (hole, board) = cards("AH KH", "2H 7H 9C");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.outcomes(), 1081);
    assert_sums_to_one(d.total());
    for (_, p) in d.iter() {
        let count = p * 1081.0;
        assert!((count - count.round()).abs() < 1e-6, "{p} is not k/1081");
        assert!(p > 0.0);
    }
    // Nine hearts left among 47 cards: C(9,2) + 9*38 completions make the flush.
    let flush = d.get(HandCategory::Flush).unwrap();
    assert!((flush - (36.0 + 9.0 * 38.0) / 1081.0).abs() < 1e-12);
}

#[test]
fn turn_probabilities_are_exact_fractions_of_46() {
    let (hole, board) = cards("AH KH", "2H 7H 9C 3S");
    let d = estimate(&hole, &board).unwrap();
    assert_eq!(d.outcomes(), 46);
    assert_sums_to_one(d.total());
    assert_eq!(d.get(HandCategory::Flush), Some(9.0 / 46.0));
}

#[test]
fn exhaustive_output_is_ordered_strongest_first() {
    let (hole, board) = cards("8D 8C", "8H 9S TS");
    let d = estimate(&hole, &board).unwrap();
    let scores: Vec<u32> = d.iter().map(|(c, _)| c.strength()).collect();
    assert!(scores.windows(2).all(|w| w[0] > w[1]), "{scores:?}");
}

#[test]
fn preflop_sample_covers_all_categories() {
    let (hole, board) = cards("2D 7H", "");
    let d = Estimator::new().with_seed(42).estimate(&hole, &board).unwrap();
    assert_eq!(d.method(), Method::Sampled);
    assert_eq!(d.outcomes(), 10_000);
    assert_eq!(d.len(), 10);
    assert_sums_to_one(d.total());
    for (_, p) in d.iter() {
        assert!(p > 0.0 && p < 1.0);
    }

    let pair = d.get(HandCategory::Pair).unwrap();
    let high = d.get(HandCategory::HighCard).unwrap();
    assert!(pair + high > 0.5);
    assert!(d.iter().all(|(_, p)| p <= pair));
}

#[test]
fn two_card_board_is_sampled() {
    let (hole, board) = cards("QS QH", "QC 4D");
    let d = Estimator::new().with_seed(1).with_sample_size(2_000).estimate(&hole, &board).unwrap();
    assert_eq!(d.method(), Method::Sampled);
    assert_eq!(d.outcomes(), 2_000);
    assert_eq!(d.len(), 10);
    assert_sums_to_one(d.total());
    // Trips are already made, so nothing below them is ever observed.
    assert_eq!(d.get(HandCategory::HighCard), Some(1.0 / 2_010.0));
}

#[test]
fn seeded_estimates_are_reproducible() {
    let (hole, board) = cards("JC TC", "");
    let est = Estimator::new().with_seed(9).with_sample_size(3_000);
    assert_eq!(est.estimate(&hole, &board).unwrap(), est.estimate(&hole, &board).unwrap());
}

#[test]
fn threads_do_not_change_results() {
    let (hole, board) = cards("AH KH", "2H 7H 9C");
    let single = Estimator::new().estimate(&hole, &board).unwrap();
    let multi = Estimator::new().with_threads(4).estimate(&hole, &board).unwrap();
    assert_eq!(single, multi);

    let (hole, board) = cards("5S 6S", "");
    let est = Estimator::new().with_seed(5).with_sample_size(4_000);
    let single = est.clone().estimate(&hole, &board).unwrap();
    let multi = est.with_threads(3).estimate(&hole, &board).unwrap();
    assert_eq!(single, multi);
}

#[test]
fn cancelled_estimate_fails() {
    let (hole, board) = cards("AH KH", "2H 7H 9C");
    let token = CancelToken::new();
    token.cancel();
    let err = Estimator::new().with_cancel(token).with_threads(2).estimate(&hole, &board);
    assert!(matches!(err, Err(OddsError::Cancelled)));
}

#[test]
fn single_community_card_is_rejected() {
    let (hole, board) = cards("AH KH", "2H");
    let err = estimate(&hole, &board).unwrap_err();
    assert!(matches!(err, OddsError::InvalidHand(HandError::IllegalBoardSize(1))));
}

#[test]
fn overlapping_cards_are_rejected() {
    let hole: HoleCards = "AH KH".parse().unwrap();
    let board = Board::new(vec!["AH".parse().unwrap(), "2C".parse().unwrap(), "3C".parse().unwrap()]);
    let err = estimate(&hole, &board).unwrap_err();
    assert!(matches!(err, OddsError::InvalidHand(HandError::Overlap)));
}
