/// Shape of a five-card hand's rank multiset: the occurrence counts of each
/// distinct rank, sorted descending.
///
/// Example: 9-9-9-8-8 has counts [3, 2] and is `TripsAndPair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPattern {
    /// [4, 1]
    Quads,
    /// [3, 2]
    TripsAndPair,
    /// [3, 1, 1]
    Trips,
    /// [2, 2, 1]
    TwoPairs,
    /// [2, 1, 1, 1]
    OnePair,
    /// [1, 1, 1, 1, 1]
    Distinct,
}

impl RankPattern {
    /// Build the pattern from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut shape = [0u8; 5];
        let mut len = 0;
        for &count in rank_counts.iter().filter(|&&c| c > 0) {
            shape[len] = count;
            len += 1;
        }
        let shape = &mut shape[..len];
        shape.sort_unstable_by(|a, b| b.cmp(a));

        match shape {
            [4, 1] => RankPattern::Quads,
            [3, 2] => RankPattern::TripsAndPair,
            [3, 1, 1] => RankPattern::Trips,
            [2, 2, 1] => RankPattern::TwoPairs,
            [2, 1, 1, 1] => RankPattern::OnePair,
            _ => RankPattern::Distinct,
        }
    }
}
