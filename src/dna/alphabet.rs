use super::nucleotide::Nucleotide;
use super::sequence::Sequence;

/// the ordered set of states one run ranges over. a state id is a
/// position in this order, and every per-node table in the mutation
/// tree is indexed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<Nucleotide>);

impl Alphabet {
    pub fn new(states: Vec<Nucleotide>) -> Self {
        assert!(!states.is_empty(), "empty alphabet");
        for (i, a) in states.iter().enumerate() {
            for b in states.iter().skip(i + 1) {
                assert!(a != b, "duplicate state {} in alphabet", a);
            }
        }
        Self(states)
    }

    /// the usual five-state alignment alphabet
    pub fn dna() -> Self {
        Self::new(Nucleotide::concrete().to_vec())
    }

    /// every code, ambiguity included, as a state of its own
    pub fn iupac() -> Self {
        Self::new(Nucleotide::all().to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn states(&self) -> &[Nucleotide] {
        &self.0
    }
    pub fn state(&self, id: u8) -> Nucleotide {
        self.0[id as usize]
    }
    pub fn id(&self, state: Nucleotide) -> Option<u8> {
        self.0.iter().position(|&s| s == state).map(|i| i as u8)
    }

    /// id-encode a sequence for one run. unknown states are a
    /// precondition violation surfaced at run start.
    pub fn encode(&self, sequence: &Sequence) -> anyhow::Result<Vec<u8>> {
        sequence
            .iter()
            .map(|n| {
                self.id(n)
                    .ok_or_else(|| anyhow::anyhow!("state {} not in alphabet", n))
            })
            .collect()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for &n in self.0.iter() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
