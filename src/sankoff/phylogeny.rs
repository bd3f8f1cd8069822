/// the shape of the K-leaf tree that gets duplicated into the
/// speciation topology. leaves carry the index of the sequence they
/// stand for. collaborators may hand in any shape; the default is the
/// left comb, where the root pairs leaf 0 against the comb over the
/// rest and the terminal two leaves share a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phylogeny {
    Leaf(usize),
    Split(Box<Phylogeny>, Box<Phylogeny>),
}

impl Phylogeny {
    pub fn comb(k: usize) -> Self {
        assert!(k >= 1, "phylogeny needs at least one leaf");
        Self::comb_over(0, k)
    }

    fn comb_over(lo: usize, hi: usize) -> Self {
        if hi - lo == 1 {
            Self::Leaf(lo)
        } else {
            Self::Split(
                Box::new(Self::Leaf(lo)),
                Box::new(Self::comb_over(lo + 1, hi)),
            )
        }
    }

    /// leaf labels in traversal order
    pub fn leaves(&self) -> Vec<usize> {
        match self {
            Self::Leaf(i) => vec![*i],
            Self::Split(a, b) => {
                let mut leaves = a.leaves();
                leaves.extend(b.leaves());
                leaves
            }
        }
    }

    /// true iff the labels are exactly 0..k in some order
    pub fn labels_sequences(&self, k: usize) -> bool {
        let mut leaves = self.leaves();
        leaves.sort();
        leaves == (0..k).collect::<Vec<_>>()
    }
}
