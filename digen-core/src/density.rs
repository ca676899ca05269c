//! Density tiers controlling how many forward edges the backbone samples.

use std::fmt;

/// Edge-inclusion tier applied to every forward-ordered node pair.
///
/// # Examples
/// ```
/// use digen_core::Density;
///
/// assert_eq!(Density::Medium.probability(), 0.20);
/// assert_eq!(Density::Dense.to_string(), "dense");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Density {
    /// Each forward pair is kept with probability 0.10.
    Sparse,
    /// Each forward pair is kept with probability 0.20.
    Medium,
    /// Each forward pair is kept with probability 0.35.
    Dense,
}

impl Density {
    /// Returns the probability used when sampling backbone edges.
    #[must_use]
    pub const fn probability(self) -> f64 {
        match self {
            Self::Sparse => 0.10,
            Self::Medium => 0.20,
            Self::Dense => 0.35,
        }
    }

    /// Returns the lower-case label used in dataset names and the summary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Medium => "medium",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
