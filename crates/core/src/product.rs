/// Odometer over the Cartesian product of a list of coordinate lists.
///
/// Yields every tuple `(x0, .., xk)` with `xi` drawn from the `i`-th list, in
/// lexicographic order of positions. An empty factor makes the product empty;
/// an empty list of factors yields the single empty tuple.
#[derive(Debug, Clone)]
pub struct CrossProduct {
    factors: Vec<Vec<usize>>,
    positions: Vec<usize>,
    exhausted: bool,
}

impl CrossProduct {
    pub fn new(factors: Vec<Vec<usize>>) -> Self {
        let exhausted = factors.iter().any(Vec::is_empty);
        let positions = vec![0; factors.len()];
        Self {
            factors,
            positions,
            exhausted,
        }
    }

    /// Product of the index ranges `0..size` for every size
    pub fn of_ranges(sizes: &[usize]) -> Self {
        Self::new(sizes.iter().map(|&size| (0..size).collect()).collect())
    }

    /// Number of tuples the product yields in total
    pub fn cardinality(&self) -> usize {
        self.factors
            .iter()
            .map(Vec::len)
            .try_fold(1usize, |acc, len| acc.checked_mul(len))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for CrossProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let item = self
            .positions
            .iter()
            .zip(&self.factors)
            .map(|(&pos, factor)| factor[pos])
            .collect();

        // Advance the rightmost position that still has room
        let mut dim = self.factors.len();
        loop {
            if dim == 0 {
                self.exhausted = true;
                break;
            }
            dim -= 1;
            self.positions[dim] += 1;
            if self.positions[dim] < self.factors[dim].len() {
                break;
            }
            self.positions[dim] = 0;
        }

        Some(item)
    }
}
