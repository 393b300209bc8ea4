/// Largest subset size any caller needs (a five-card hand, or a preflop
/// completion of the board).
pub const MAX_K: usize = 5;

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
///
/// ```
/// use poker_odds::evaluator::combinations::binomial;
///
/// assert_eq!(binomial(7, 5), 21);
/// assert_eq!(binomial(47, 2), 1081);
/// assert_eq!(binomial(50, 5), 2_118_760);
/// ```
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    // acc == C(n, i) after each step, so the division is exact.
    let mut acc = 1usize;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

/// One k-subset of `0..n`, as ascending indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    indices: [usize; MAX_K],
    k: usize,
}

impl Combination {
    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.k]
    }
}

/// Iterator over all `C(n, k)` k-subsets of `0..n` in lexicographic order.
///
/// Yields nothing when `k == 0`, `k > n` or `k > MAX_K`.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: [usize; MAX_K],
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let mut indices = [0; MAX_K];
        for (i, slot) in indices.iter_mut().enumerate().take(k) {
            *slot = i;
        }
        Self { n, k, indices, done: k == 0 || k > n || k > MAX_K }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = Combination { indices: self.indices, k: self.k };

        // Find the rightmost index that can still move right
        let mut i = self.k - 1;
        loop {
            if self.indices[i] < self.n - (self.k - i) {
                self.indices[i] += 1;
                for j in (i + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

/// The `rank`-th k-subset of `0..n` under the combinatorial number system
/// (colexicographic order), for `rank < C(n, k)`.
///
/// Every rank in `0..C(n, k)` maps to a distinct subset, so drawing distinct
/// ranks draws distinct combinations.
pub fn nth_combination(mut rank: usize, n: usize, k: usize) -> Combination {
    debug_assert!(k <= MAX_K && rank < binomial(n, k));
    let mut indices = [0; MAX_K];
    let mut upper = n;
    for slot in (0..k).rev() {
        // Largest c < upper with C(c, slot + 1) <= rank.
        let mut c = slot;
        while c + 1 < upper && binomial(c + 1, slot + 1) <= rank {
            c += 1;
        }
        indices[slot] = c;
        rank -= binomial(c, slot + 1);
        upper = c;
    }
    Combination { indices, k }
}
