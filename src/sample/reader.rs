use super::Row;
use super::Sample;
use super::Timestamp;
use crate::CSV_DELIMITERS;
use crate::Error;
use crate::Value;
use std::io::Read;
use std::path::Path;

/// Loads `(timestamp, value)` rows from delimited text.
///
/// The delimiter is taken from the first non-blank line, trying each of
/// [`CSV_DELIMITERS`] in order. The first record may be a header, recognized
/// by neither cell parsing, and it is skipped. Cells may be quoted and are
/// trimmed; a leading byte-order mark and blank lines are ignored.
/// Every other record must be a well-formed row; a bad one aborts
/// the read with [`Error::Upstream`] instead of being dropped.
#[derive(Debug, Default, Clone)]
pub struct Reader {
    rows: Vec<Row>,
}

impl Reader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("reading rows from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader(mut source: impl Read) -> Result<Self, Error> {
        let mut buffer = String::new();
        source.read_to_string(&mut buffer)?;
        let text = buffer.strip_prefix('\u{feff}').unwrap_or(&buffer);
        let mut records = csv::ReaderBuilder::new()
            .delimiter(Self::detect(text))
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());
        let mut rows = Vec::new();
        let mut leading = true;
        for record in records.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, |p| Self::line(text, p));
            let cells = record.iter().collect::<Vec<_>>();
            if std::mem::take(&mut leading) && Self::header(&cells) {
                log::debug!("skipping header at line {}: {}", line, cells.join(", "));
                continue;
            }
            rows.push(Row::parse(line, &cells)?);
        }
        log::info!("read {} rows", rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn values(&self) -> Vec<Value> {
        self.rows.iter().map(|row| row.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// the sample of values, or InvalidArgument if the file held no rows
    pub fn sample(&self) -> Result<Sample, Error> {
        Sample::try_from(self.values())
    }

    fn detect(text: &str) -> u8 {
        let line = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or_default();
        CSV_DELIMITERS
            .iter()
            .copied()
            .find(|d| line.as_bytes().contains(d))
            .unwrap_or(CSV_DELIMITERS[0])
    }

    /// csv positions a record where the previous one ended, ahead of any
    /// blank lines it skipped before the record's own first line.
    fn line(text: &str, position: &csv::Position) -> usize {
        let rest = text.get(position.byte() as usize..).unwrap_or_default();
        let blank = &rest[..rest.len() - rest.trim_start_matches(['\r', '\n']).len()];
        position.line() as usize + blank.matches('\n').count()
    }

    fn header(cells: &[&str]) -> bool {
        cells.len() == 2
            && Timestamp::try_from(cells[0]).is_err()
            && cells[1].parse::<Value>().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Reader, Error> {
        Reader::from_reader(std::io::Cursor::new(text))
    }

    #[test]
    fn header() {
        let reader = read("time,value\n2024-01-01,1.5\n2024-01-02,-2\n").unwrap();
        assert_eq!(reader.values(), vec![1.5, -2.0]);
        assert_eq!(
            reader.rows()[1].timestamp,
            Timestamp::try_from("2024-01-02").unwrap()
        );
    }

    #[test]
    fn headless() {
        let reader = read("2024-01-01 10:00;3\n\n2024-01-01 11:00;4.25\n").unwrap();
        assert_eq!(reader.values(), vec![3.0, 4.25]);
    }

    #[test]
    fn tabs() {
        let reader = read("1709296215\t0.5\n1709296216\t0.75\n").unwrap();
        assert_eq!(reader.values(), vec![0.5, 0.75]);
    }

    #[test]
    fn empty() {
        let reader = read("time,value\n\n").unwrap();
        assert!(reader.is_empty());
        assert!(matches!(reader.sample(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn malformed() {
        let text = "time,value\n2024-01-01,1\n2024-01-02,abc\n2024-01-03,3\n";
        match read(text) {
            Err(Error::Upstream { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn timestamps() {
        assert!(matches!(
            read("2024-02-30,1\n"),
            Err(Error::Upstream { line: 1, .. })
        ));
    }

    #[test]
    fn cells() {
        assert!(matches!(
            read("2024-01-01,1,2\n"),
            Err(Error::Upstream { line: 1, .. })
        ));
    }

    #[test]
    fn infinite() {
        assert!(matches!(
            read("2024-01-01,1\n2024-01-02,inf\n"),
            Err(Error::Upstream { line: 2, .. })
        ));
    }

    #[test]
    fn quoted() {
        let reader = read("\"timestamp\",\"value\"\n\"2024-01-01\",\"1.5\"\n").unwrap();
        assert_eq!(reader.values(), vec![1.5]);
        let reader = read("2024-01-01;\"2.5\"\n\"2024-01-02 08:00\";\" 3 \"\n").unwrap();
        assert_eq!(reader.values(), vec![2.5, 3.0]);
    }

    #[test]
    fn bom() {
        let reader = read("\u{feff}2024-01-01,1.5\n2024-01-02,2.5\n").unwrap();
        assert_eq!(reader.values(), vec![1.5, 2.5]);
        let reader = read("\u{feff}time,value\n2024-01-01,1.5\n").unwrap();
        assert_eq!(reader.values(), vec![1.5]);
    }

    #[test]
    fn lines() {
        match read("2024-01-01,1\n\n   \n2024-01-02,abc\n") {
            Err(Error::Upstream { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected upstream error, got {:?}", other),
        }
        match read("\r\n\r\ntime,value\r\n2024-01-01,1\r\n2024-01-02,\r\n") {
            Err(Error::Upstream { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
