use super::Report;
use crate::Error;
use std::io::Write;
use std::path::Path;

/// Output layout, chosen from the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `cluster,weight,distribution,parameters` table
    Table,
    /// the full report, member values included
    Json,
}

impl From<&Path> for Format {
    fn from(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Renders a [`Report`] to a file or any other sink.
pub struct Writer;

impl Writer {
    pub fn save(report: &Report, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let format = Format::from(path);
        log::info!("writing {} clusters to {} ({:?})", report.len(), path.display(), format);
        let file = std::fs::File::create(path)?;
        let ref mut sink = std::io::BufWriter::new(file);
        Self::write(report, format, sink)?;
        sink.flush()?;
        Ok(())
    }

    pub fn write(report: &Report, format: Format, sink: &mut impl Write) -> Result<(), Error> {
        match format {
            Format::Table => Self::table(report, sink),
            Format::Json => Self::json(report, sink),
        }
    }

    fn table(report: &Report, sink: &mut impl Write) -> Result<(), Error> {
        let mut table = csv::Writer::from_writer(sink);
        table.write_record(["cluster", "weight", "distribution", "parameters"])?;
        for result in report.iter() {
            table.write_record([
                result.id().to_string(),
                format!("{:.6}", result.weight()),
                result.family().to_string(),
                result.parameters().to_string(),
            ])?;
        }
        table.flush()?;
        Ok(())
    }

    fn json(report: &Report, sink: &mut impl Write) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut *sink, report).map_err(std::io::Error::from)?;
        writeln!(sink)?;
        Ok(())
    }
}
