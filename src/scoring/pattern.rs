use std::borrow::Borrow;

/// a column keyed by the order its distinct states first appear:
/// [C,A,C,T,G,A] and [G,T,G,A,C,T] both collapse to [0,1,0,2,3,1].
/// under an equality-only mutation cost, equal patterns are exactly
/// the columns with equal pre-speciation cost, which is what makes
/// them a sound memoization key.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// canonicalize into a caller-owned buffer; the scoring loop
    /// reuses one buffer to probe its memo without allocating
    pub fn rank_into(column: &[u8], ranks: &mut Vec<u8>) {
        let mut assigned = [u8::MAX; 256];
        let mut next = 0u8;
        ranks.clear();
        for &state in column {
            let slot = &mut assigned[state as usize];
            if *slot == u8::MAX {
                *slot = next;
                next += 1;
            }
            ranks.push(*slot);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Pattern {
    fn from(column: &[u8]) -> Self {
        let mut ranks = Vec::with_capacity(column.len());
        Self::rank_into(column, &mut ranks);
        Self(ranks)
    }
}

// canonical forms are fixpoints, so a ranked buffer is already the
// pattern's own representation
impl Borrow<[u8]> for Pattern {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for &rank in self.0.iter() {
            write!(f, "{:x}", rank)?;
        }
        Ok(())
    }
}
