use super::nucleotide::Nucleotide;

/// one aligned row. the core borrows sequences for the duration of a
/// run and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn at(&self, i: usize) -> Nucleotide {
        self.0[i]
    }
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

// string isomorphism
impl TryFrom<&str> for Sequence {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .chars()
            .map(Nucleotide::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for &n in self.0.iter() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
