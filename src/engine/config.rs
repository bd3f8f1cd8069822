use crate::dna::alphabet::Alphabet;
use crate::dna::mutation::MutationCost;
use crate::dna::sequence::Sequence;
use crate::sankoff::phylogeny::Phylogeny;
use crate::scoring::strategy::Strategy;
use crate::segments::lengths::LengthParams;

/// everything one run needs. collaborators assemble these however
/// they like (command line, files, generators); the engine only
/// checks the preconditions it is about to lean on and never mutates
/// the inputs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sequences: Vec<Sequence>,
    pub alphabet: Alphabet,
    pub mutation: MutationCost,
    pub lengths: LengthParams,
    pub keep: usize,
    pub strategy: Strategy,
    /// None means the default left comb over the sequences
    pub phylogeny: Option<Phylogeny>,
}

impl RunConfig {
    pub fn new(sequences: Vec<Sequence>, keep: usize) -> Self {
        let alphabet = Alphabet::dna();
        let mutation = MutationCost::uniform(alphabet.len());
        Self {
            sequences,
            alphabet,
            mutation,
            lengths: LengthParams::full(),
            keep,
            strategy: Strategy::Standard,
            phylogeny: None,
        }
    }

    /// the run-start precondition check. a violation fails the whole
    /// run before any scoring happens; no partial summary exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        let k = self.sequences.len();
        anyhow::ensure!(k >= 2, "need at least two sequences, got {}", k);
        let l = self.sequences[0].len();
        anyhow::ensure!(
            self.sequences.iter().all(|s| s.len() == l),
            "sequences must share one aligned length"
        );
        anyhow::ensure!(l >= 2, "alignment too short to hold a segment pair");
        anyhow::ensure!(
            self.lengths.min() <= l / 2,
            "minimum segment length {} exceeds half the alignment",
            self.lengths.min()
        );
        anyhow::ensure!(
            self.mutation.states() == self.alphabet.len(),
            "mutation cost ranges over {} states, alphabet has {}",
            self.mutation.states(),
            self.alphabet.len()
        );
        anyhow::ensure!(
            !self.strategy.memoized() || self.mutation.is_equality_only(),
            "{} strategy needs an equality-only mutation cost",
            self.strategy
        );
        if let Some(ref shape) = self.phylogeny {
            anyhow::ensure!(
                shape.labels_sequences(k),
                "phylogeny leaves must label the sequences 0..{}",
                k
            );
        }
        Ok(())
    }
}
