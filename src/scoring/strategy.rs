/// how a run turns columns into costs. the four variants are the two
/// independent bits below: whether consecutive positions share their
/// overlapping columns through a sliding window, and whether column
/// costs are memoized by their equality pattern.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Strategy {
    Standard,
    Window,
    Patterns,
    WindowPatterns,
}

impl Strategy {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Standard,
            Self::Window,
            Self::Patterns,
            Self::WindowPatterns,
        ]
    }
    pub const fn windowed(&self) -> bool {
        matches!(self, Self::Window | Self::WindowPatterns)
    }
    pub const fn memoized(&self) -> bool {
        matches!(self, Self::Patterns | Self::WindowPatterns)
    }
}

// string isomorphism
impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "window" => Ok(Self::Window),
            "patterns" => Ok(Self::Patterns),
            "window-patterns" => Ok(Self::WindowPatterns),
            s => Err(anyhow::anyhow!("unknown strategy '{}'", s)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Window => write!(f, "window"),
            Self::Patterns => write!(f, "patterns"),
            Self::WindowPatterns => write!(f, "window-patterns"),
        }
    }
}

impl crate::Arbitrary for Strategy {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..4)]
    }
}
