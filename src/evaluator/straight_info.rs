/// Tie-break key of the wheel: the Ace counts as one.
pub const WHEEL_TIEBREAK: [u8; 5] = [5, 4, 3, 2, 1];

/// Straight detection over five rank values, with the wheel (A-2-3-4-5)
/// rewritten so the Ace plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Rank values in descending order, after the wheel substitution.
    pub tiebreak: [u8; 5],
}

impl StraightInfo {
    /// `desc` must be sorted descending.
    pub fn detect(desc: &[u8; 5]) -> Self {
        let tiebreak = if *desc == [14, 5, 4, 3, 2] { WHEEL_TIEBREAK } else { *desc };
        let distinct = tiebreak.windows(2).all(|w| w[0] != w[1]);
        let is_straight = distinct && tiebreak[0] - tiebreak[4] == 4;
        StraightInfo { is_straight, tiebreak }
    }

    #[cfg(test)]
    pub fn is_wheel(&self) -> bool {
        self.tiebreak == WHEEL_TIEBREAK
    }
}
