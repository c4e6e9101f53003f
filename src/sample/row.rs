use super::Timestamp;
use crate::Error;
use crate::Value;

/// One `(timestamp, value)` record from the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub timestamp: Timestamp,
    pub value: Value,
}

impl Row {
    /// parse the value cell alone. used by the reader to decide
    /// whether a leading line is a header.
    pub fn value(cell: &str) -> Result<Value, String> {
        let cell = cell.trim();
        let value = cell
            .parse::<Value>()
            .map_err(|_| format!("value is not a number: {:?}", cell))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("value is not finite: {:?}", cell))
        }
    }

    /// parse a record's cells into a Row, tagging failures with the line number.
    pub fn parse(line: usize, cells: &[&str]) -> Result<Self, Error> {
        match cells {
            [timestamp, value] => Ok(Self {
                timestamp: Timestamp::try_from(*timestamp)
                    .map_err(|reason| Error::upstream(line, reason))?,
                value: Self::value(value).map_err(|reason| Error::upstream(line, reason))?,
            }),
            _ => Err(Error::upstream(
                line,
                format!("expected 2 cells (timestamp, value), found {}", cells.len()),
            )),
        }
    }
}
