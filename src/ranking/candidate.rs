use crate::Cost;

/// one scored segment pair: where it starts, how long each half is,
/// and its average per-column pre-speciation cost. candidates order
/// lexicographically on (cost, length, start), cheapest first, so
/// "smaller is better" everywhere downstream.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    start: u64,
    length: u64,
    cost: Cost,
}

impl Candidate {
    pub fn start(&self) -> u64 {
        self.start
    }
    pub fn length(&self) -> u64 {
        self.length
    }
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the ε-comparison external comparators use: same coordinates,
    /// costs within an absolute tolerance. ordering ignores this.
    pub fn approximates(&self, other: &Self, epsilon: Cost) -> bool {
        self.start == other.start
            && self.length == other.length
            && (self.cost - other.cost).abs() <= epsilon
    }
}

impl From<(usize, usize, Cost)> for Candidate {
    fn from((start, length, cost): (usize, usize, Cost)) -> Self {
        Self {
            start: start as u64,
            length: length as u64,
            cost,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.length == other.length && self.cost == other.cost
    }
}
impl Eq for Candidate {}
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.length.cmp(&other.length))
            .then(self.start.cmp(&other.start))
    }
}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// record isomorphism, the %12d %12d %12.8f layout external
// comparators consume
impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:12} {:12} {:12.8}", self.start, self.length, self.cost)
    }
}
impl TryFrom<&str> for Candidate {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut fields = s.split_whitespace();
        let start = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing start"))?
            .parse::<u64>()?;
        let length = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing length"))?
            .parse::<u64>()?;
        let cost = fields
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing cost"))?
            .parse::<Cost>()?;
        anyhow::ensure!(fields.next().is_none(), "trailing fields in record");
        Ok(Self {
            start,
            length,
            cost,
        })
    }
}

impl crate::Arbitrary for Candidate {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self {
            start: rng.random_range(0..1000),
            length: rng.random_range(1..100),
            cost: rng.random_range(0..200) as Cost / 100.0,
        }
    }
}
