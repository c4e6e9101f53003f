use serde::Serialize;

/// The closed set of distribution shapes the fitter chooses between.
///
/// Declaration order is the tie-break priority: when two candidates
/// score exactly the same, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Family {
    Normal,
    Uniform,
    Exponential,
}

impl Family {
    pub const fn all() -> [Self; 3] {
        [Self::Normal, Self::Uniform, Self::Exponential]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Uniform => "Uniform",
            Self::Exponential => "Exponential",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
