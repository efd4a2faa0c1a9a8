use bitvec::prelude::*;

/// Which original unknown sits in each coefficient column.
///
/// `positions[i]` is the index of the unknown currently held at column `i`.
/// Starts out as the identity and is only touched by column exchanges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationHistory {
    pub positions: Vec<usize>,
}

impl PermutationHistory {
    pub fn identity(n: usize) -> Self {
        Self {
            positions: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.positions.swap(a, b);
    }

    pub fn is_identity(&self) -> bool {
        self.positions.iter().enumerate().all(|(idx, p)| idx == *p)
    }

    pub fn is_permutation(&self) -> bool {
        let n = self.positions.len();
        let mut seen = bitvec![usize, Lsb0; 0; n];
        for &p in self.positions.iter() {
            if p >= n || seen[p] {
                return false;
            }
            unsafe {
                seen.set_unchecked(p, true);
            }
        }
        true
    }
}

impl From<Vec<usize>> for PermutationHistory {
    fn from(positions: Vec<usize>) -> Self {
        Self { positions }
    }
}
