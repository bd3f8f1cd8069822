/// which segment lengths a run considers: min, min+step, min+2·step,
/// and so on, never past the shorter of max and half the alignment.
/// min being a multiple of step is enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthParams {
    min: usize,
    max: usize,
    step: usize,
}

impl LengthParams {
    pub fn new(min: usize, max: usize, step: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(min >= 1, "minimum length must be positive");
        anyhow::ensure!(step >= 1, "step must be positive");
        anyhow::ensure!(min <= max, "minimum length exceeds maximum");
        anyhow::ensure!(min % step == 0, "minimum length must be a multiple of step");
        Ok(Self { min, max, step })
    }

    /// every admissible length: 1, 2, 3, ... up to half the alignment
    pub fn full() -> Self {
        Self {
            min: 1,
            max: usize::MAX,
            step: 1,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }
    pub fn max(&self) -> usize {
        self.max
    }
    pub fn step(&self) -> usize {
        self.step
    }

    /// admissible segment lengths for an alignment of length l, in
    /// the ascending order the enumeration contract fixes
    pub fn lengths(&self, l: usize) -> impl Iterator<Item = usize> + '_ {
        (self.min..=self.max.min(l / 2)).step_by(self.step)
    }
}

impl Default for LengthParams {
    fn default() -> Self {
        Self::full()
    }
}

impl std::fmt::Display for LengthParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.max == usize::MAX {
            write!(f, "[{}..] by {}", self.min, self.step)
        } else {
            write!(f, "[{}..{}] by {}", self.min, self.max, self.step)
        }
    }
}
