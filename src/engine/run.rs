use super::config::RunConfig;
use super::sink::Sink;
use super::summary::Summary;
use crate::ranking::candidate::Candidate;
use crate::ranking::collector::Collector;
use crate::sankoff::phylogeny::Phylogeny;
use crate::sankoff::smt::Smt;
use crate::sankoff::topology::Topology;
use crate::scoring::scorer::Scorer;
use crate::segments::pairs::SegmentPairs;
use std::time::Instant;

/// score one configuration: build the tree and the chosen strategy,
/// sweep every admissible (position, length) pair in the contractual
/// order, and keep the cheapest candidates. the clock covers the
/// whole build-and-sweep, matching what the summary reports.
pub fn run(config: &RunConfig) -> anyhow::Result<Summary> {
    config.validate()?;
    let clock = Instant::now();
    let rows = config
        .sequences
        .iter()
        .map(|sequence| config.alphabet.encode(sequence))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let shape = match config.phylogeny {
        Some(ref shape) => shape.clone(),
        None => Phylogeny::comb(rows.len()),
    };
    let smt = Smt::new(
        Topology::duplicate(&shape, config.alphabet.len()),
        config.mutation.clone(),
    );
    let pairs = SegmentPairs::new(&rows);
    let mut scorer = Scorer::new(config.strategy, smt, pairs);
    let mut collector = Collector::new(config.keep);
    for length in config.lengths.lengths(pairs.length()) {
        for position in pairs.positions(length) {
            let cost = scorer.cost_for(position, length);
            collector.add(Candidate::from((position, length, cost)));
        }
    }
    Ok(Summary::new(collector.ranked(), clock.elapsed()))
}

/// pull configurations from the source one at a time and hand each
/// summary to the sink. a bad configuration aborts the whole drive;
/// cancellation is only possible between runs.
pub fn drive<I, S>(configs: I, sink: &mut S) -> anyhow::Result<()>
where
    I: IntoIterator<Item = RunConfig>,
    S: Sink + ?Sized,
{
    for (i, config) in configs.into_iter().enumerate() {
        log::info!(
            "run {}: {} sequences, lengths {}, keep {}, {} strategy",
            i,
            config.sequences.len(),
            config.lengths,
            config.keep,
            config.strategy
        );
        let summary = run(&config)?;
        log::info!(
            "run {}: {} candidates in {:?}",
            i,
            summary.len(),
            summary.elapsed()
        );
        sink.store(summary);
    }
    Ok(())
}

/// the across-length variant: segment lengths are independent, so
/// each gets its own tree and caches, and the per-length survivors
/// merge in ascending-length order. the candidate order is total, so
/// the merged top-N matches the serial sweep exactly.
#[cfg(feature = "rayon")]
pub fn parallel(config: &RunConfig) -> anyhow::Result<Summary> {
    use rayon::prelude::*;
    config.validate()?;
    let clock = Instant::now();
    let rows = config
        .sequences
        .iter()
        .map(|sequence| config.alphabet.encode(sequence))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let shape = match config.phylogeny {
        Some(ref shape) => shape.clone(),
        None => Phylogeny::comb(rows.len()),
    };
    let lengths = config
        .lengths
        .lengths(rows[0].len())
        .collect::<Vec<usize>>();
    let rankings = lengths
        .par_iter()
        .map(|&length| {
            let pairs = SegmentPairs::new(&rows);
            let smt = Smt::new(
                Topology::duplicate(&shape, config.alphabet.len()),
                config.mutation.clone(),
            );
            let mut scorer = Scorer::new(config.strategy, smt, pairs);
            let mut collector = Collector::new(config.keep);
            for position in pairs.positions(length) {
                let cost = scorer.cost_for(position, length);
                collector.add(Candidate::from((position, length, cost)));
            }
            collector.ranked()
        })
        .collect::<Vec<_>>();
    let mut collector = Collector::new(config.keep);
    for ranked in rankings {
        for candidate in ranked {
            collector.add(candidate);
        }
    }
    Ok(Summary::new(collector.ranked(), clock.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::sequence::Sequence;
    use crate::ranking::record;
    use crate::scoring::strategy::Strategy;
    use crate::segments::lengths::LengthParams;
    use rand::Rng;
    use rand::SeedableRng;

    fn sequences(rows: &[&str]) -> Vec<Sequence> {
        rows.iter().map(|&s| Sequence::try_from(s).unwrap()).collect()
    }

    fn random_sequences(k: usize, l: usize, seed: u64) -> Vec<Sequence> {
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        (0..k)
            .map(|_| {
                (0..l)
                    .map(|_| crate::dna::nucleotide::Nucleotide::from(rng.random_range(0..4) as u8))
                    .collect::<Vec<_>>()
                    .into()
            })
            .collect()
    }

    #[test]
    fn repeated_monomer_scores_free_everywhere() {
        // two identical one-state sequences: both unit-length pairs
        // are perfect duplications
        let summary = run(&RunConfig::new(sequences(&["AAA", "AAA"]), 5)).unwrap();
        assert!(summary.len() == 2);
        assert!(summary.candidates()[0] == Candidate::from((0, 1, 0.0)));
        assert!(summary.candidates()[1] == Candidate::from((1, 1, 0.0)));
    }

    #[test]
    fn candidate_count_follows_the_enumeration() {
        // constant 8-mers over three sequences, lengths 1..=4:
        // 7+5+3+1 = 16 pairs, every one of them free
        let mut config = RunConfig::new(sequences(&["AAAAAAAA"; 3].to_vec()), 20);
        config.lengths = LengthParams::new(1, 4, 1).unwrap();
        let summary = run(&config).unwrap();
        assert!(summary.len() == 16);
        assert!(summary.iter().all(|c| c.cost() == 0.0));
        config.keep = 10;
        let capped = run(&config).unwrap();
        assert!(capped.len() == 10);
        assert!(capped.iter().all(|c| c.cost() == 0.0));
    }

    #[test]
    fn window_and_standard_agree_on_a_periodic_alignment() {
        let rows = sequences(&["ACGTACGTACGTACGT", "ACGTACGTACGTACGT"]);
        let mut config = RunConfig::new(rows, 5);
        config.lengths = LengthParams::new(1, 8, 1).unwrap();
        config.strategy = Strategy::Standard;
        let standard = run(&config).unwrap();
        config.strategy = Strategy::Window;
        let windowed = run(&config).unwrap();
        assert!(record::equivalent(
            standard.candidates(),
            windowed.candidates(),
            1e-9
        ));
        // the period-4 repeat is a perfect duplication
        assert!(standard.candidates()[0] == Candidate::from((0, 4, 0.0)));
    }

    #[test]
    fn patterns_and_standard_agree_on_mixed_mismatches() {
        let rows = random_sequences(4, 24, 0xacc01ade);
        let mut config = RunConfig::new(rows, 20);
        config.strategy = Strategy::Standard;
        let standard = run(&config).unwrap();
        config.strategy = Strategy::Patterns;
        let patterns = run(&config).unwrap();
        config.strategy = Strategy::WindowPatterns;
        let both = run(&config).unwrap();
        assert!(standard.len() == 20);
        assert!(record::equivalent(standard.candidates(), patterns.candidates(), 1e-9));
        assert!(record::equivalent(standard.candidates(), both.candidates(), 1e-9));
    }

    #[test]
    fn keep_zero_yields_an_empty_summary() {
        let summary = run(&RunConfig::new(sequences(&["ACGTACGT", "ACGTTCGT"]), 0)).unwrap();
        assert!(summary.is_empty());
        assert!(summary.elapsed() > std::time::Duration::ZERO);
    }

    #[test]
    fn invalid_configurations_produce_no_summary() {
        assert!(run(&RunConfig::new(sequences(&["ACGT"]), 5)).is_err());
        assert!(run(&RunConfig::new(sequences(&["ACGT", "ACG"]), 5)).is_err());
    }

    #[test]
    fn summaries_arrive_in_configuration_order() {
        let mut sink = crate::engine::sink::Memory::new();
        let configs = vec![
            RunConfig::new(sequences(&["AAAA", "AAAA"]), 1),
            RunConfig::new(sequences(&["ACACAC", "ACACAC"]), 3),
        ];
        drive(configs, &mut sink).unwrap();
        assert!(sink.summaries().len() == 2);
        assert!(sink.summaries()[0].len() == 1);
        assert!(sink.summaries()[1].len() == 3);
    }

    #[test]
    fn ranked_output_is_sorted() {
        let summary = run(&RunConfig::new(random_sequences(3, 16, 99), 30)).unwrap();
        let ranked = summary.candidates();
        assert!(ranked.windows(2).all(|w| w[0] <= w[1]));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_serial() {
        let config = RunConfig::new(random_sequences(3, 20, 123), 15);
        let serial = run(&config).unwrap();
        let merged = parallel(&config).unwrap();
        assert!(serial.candidates() == merged.candidates());
    }
}
