use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;

/// wall-clock layouts accepted after a `YYYY-MM-DD` date
const CLOCKS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A validated row timestamp.
///
/// Either a calendar date with an optional wall-clock time
/// (`2024-03-01`, `2024-03-01 12:30`, `2024-03-01T12:30:15`)
/// or a plain count of Unix seconds (`1709296215`).
/// The core never looks at it; it only has to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    Calendar(NaiveDateTime),
    Epoch(DateTime<Utc>),
}

impl Timestamp {
    fn epoch(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(Self::Epoch)
            .ok_or_else(|| format!("epoch seconds out of range: {:?}", s))
    }

    fn calendar(s: &str) -> Result<Self, String> {
        if let Some(t) = CLOCKS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        {
            return Ok(Self::Calendar(t));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid timestamp {:?}: {}", s, e))?
            .and_hms_opt(0, 0, 0)
            .map(Self::Calendar)
            .ok_or_else(|| format!("invalid timestamp {:?}", s))
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.is_empty() {
            Err(String::from("timestamp is empty"))
        } else if s.bytes().all(|b| b.is_ascii_digit()) {
            Self::epoch(s)
        } else {
            Self::calendar(s)
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Epoch(t) => write!(f, "{}", t.timestamp()),
            Self::Calendar(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}
