use super::candidate::Candidate;
use crate::Cost;
use std::io::Write;

/// the persisted result layout: one header line, then one candidate
/// per line, best first. external comparators and regression baselines
/// parse this, so the column layout is contractual.
pub const HEADER: &str = "       start      length        cost";

pub fn render(candidates: &[Candidate]) -> String {
    let mut text = String::with_capacity((candidates.len() + 1) * (HEADER.len() + 4));
    text.push_str(HEADER);
    text.push('\n');
    for candidate in candidates {
        text.push_str(&format!("{}", candidate));
        text.push('\n');
    }
    text
}

pub fn write<W: Write>(w: &mut W, candidates: &[Candidate]) -> std::io::Result<()> {
    w.write_all(render(candidates).as_bytes())
}

/// parse a record file: the first non-blank line is the header, every
/// further non-blank line a candidate. any run of spaces separates
/// fields.
pub fn parse(text: &str) -> anyhow::Result<Vec<Candidate>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or_else(|| anyhow::anyhow!("empty record file"))?;
    anyhow::ensure!(
        header.split_whitespace().eq(HEADER.split_whitespace()),
        "unrecognized header '{}'",
        header
    );
    lines.map(Candidate::try_from).collect()
}

/// the regression-test notion of equality between two record sets:
/// same (start, length) at every rank, costs within epsilon
pub fn equivalent(ours: &[Candidate], theirs: &[Candidate], epsilon: Cost) -> bool {
    ours.len() == theirs.len()
        && ours
            .iter()
            .zip(theirs.iter())
            .all(|(a, b)| a.approximates(b, epsilon))
}
