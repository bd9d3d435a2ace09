use super::{Record, DELIMITER};
use crate::errors::{Error, Result};

const NEWLINE: u8 = b'\n';

/// Writer writes variant records in `chr<CHROM>:<POS><REF>><ALT>` notation, one per line
pub struct Writer<W: std::io::Write> {
    writer: csv::Writer<W>,
}

impl<W> Writer<W>
where
    W: std::io::Write,
{
    /// Construct a notation writer from `std::io::Write`
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .delimiter(DELIMITER as u8)
                .has_headers(false)
                .quote_style(csv::QuoteStyle::Never)
                .terminator(csv::Terminator::Any(NEWLINE))
                .from_writer(writer),
        }
    }

    /// Write a variant record
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(&[record.to_string()])?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::from(e.into_error()))
    }
}
