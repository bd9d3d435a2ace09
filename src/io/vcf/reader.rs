use super::super::common;
use super::{is_comment, parse_line, ReadToRecord, Record, Records};
use crate::errors::{Error, Result};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Reader is a reader for variant call files
///
/// Meta-information and header lines are skipped.  Every line read, skipped or not, advances the
/// line counter so errors can point back into the source file.
///
pub struct Reader<R: std::io::Read> {
    reader: std::io::BufReader<R>,
    buffer: Vec<u8>,
    line_num: usize,
}

impl<R> Reader<R>
where
    R: std::io::Read,
{
    /// Construct a variant reader from std::io::Read
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: std::io::BufReader::new(reader),
            buffer: Vec::new(),
            line_num: 0,
        }
    }

    /// Number of lines read so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Returns an iterator over the remaining records
    pub fn iter(self) -> Records<Self> {
        Records::new(self)
    }
}

impl Reader<File> {
    /// Construct a variant reader from a path
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::with_path(path, e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R> ReadToRecord for Reader<R>
where
    R: std::io::Read,
{
    /// Read the next data line into a variant record
    fn read(&mut self, record: &mut Record) -> Result<()> {
        record.clear();
        loop {
            self.buffer.clear();
            common::read_line(&mut self.reader, &mut self.buffer)?;
            self.line_num += 1;

            let line = common::trim_newline(std::str::from_utf8(&self.buffer)?);
            if is_comment(line) {
                debug!(line_num = self.line_num, "skipping header line");
                continue;
            }
            *record = parse_line(line, self.line_num)?;
            return Ok(());
        }
    }
}
