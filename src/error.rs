use crate::fitting::Family;

/// Failures raised by the clustering and fitting core and by the
/// file collaborators around it.
#[derive(Debug)]
pub enum Error {
    /// Bad cluster count, empty or non-finite sample, empty cluster.
    InvalidArgument(String),
    /// A candidate distribution whose parameters are ill-defined.
    Degenerate { family: Family, reason: String },
    /// A malformed input row, with its 1-based line number.
    Upstream { line: usize, reason: String },
    Io(std::io::Error),
}

impl Error {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
    pub fn degenerate(family: Family, reason: impl Into<String>) -> Self {
        Self::Degenerate {
            family,
            reason: reason.into(),
        }
    }
    pub fn upstream(line: usize, reason: impl Into<String>) -> Self {
        Self::Upstream {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Self::Degenerate { family, reason } => write!(f, "degenerate {}: {}", family, reason),
            Self::Upstream { line, reason } => write!(f, "malformed row at line {}: {}", line, reason),
            Self::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map_or(0, |p| p.line() as usize);
        let reason = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            _ => Self::Upstream { line, reason },
        }
    }
}
