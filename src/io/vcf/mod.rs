mod reader;
mod writer;

use crate::errors::{Error, ErrorKind, Result};

pub use reader::Reader;
pub use writer::Writer;

const DELIMITER: char = '\t';
const COMMENT_PREFIX: char = '#';
const CHROMOSOME_PREFIX: &str = "chr";
const MIN_WIDTH: usize = 5;

const CHROM_COLUMN: usize = 0;
const POS_COLUMN: usize = 1;
const REF_COLUMN: usize = 3;
const ALT_COLUMN: usize = 4;

/// ReadToRecord reads to a variant record
pub trait ReadToRecord {
    fn read(&mut self, record: &mut Record) -> Result<()>;
}

/// Variant record built from the fixed columns of a VCF data line
///
/// Only CHROM, POS, REF and ALT are kept.  The ID column sits between POS and REF and is skipped.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    /// Chromosome name, as written in the file
    pub chromosome: String,
    /// Reference position
    pub position: i64,
    /// Reference allele
    pub reference: String,
    /// Alternate allele(s)
    pub alternate: String,
}

impl Record {
    /// Construct a default variant record
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the variant record
    pub fn clear(&mut self) {
        self.chromosome.clear();
        self.position = 0;
        self.reference.clear();
        self.alternate.clear();
    }
}

impl std::fmt::Display for Record {
    /// Format as `chr<CHROM>:<POS><REF>><ALT>`, e.g. `chr16:11178640G>A`
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}:{}{}>{}",
            CHROMOSOME_PREFIX, self.chromosome, self.position, self.reference, self.alternate
        )
    }
}

/// Returns true for `##` meta-information lines and the `#CHROM` header line
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Parse a data line into a variant record
///
/// `line_num` is the 1-based line number in the source file and is only used in error messages.
/// The line must not carry its line terminator.  Trailing empty fields are not counted, so a line
/// ending in a tab with an empty ALT is too short.
///
pub fn parse_line(line: &str, line_num: usize) -> Result<Record> {
    let fields: Vec<&str> = line.trim_end_matches(DELIMITER).split(DELIMITER).collect();
    if fields.len() < MIN_WIDTH {
        return Err(Error::new(
            ErrorKind::Format,
            &format!(
                "Error at the line #{}: expected at least {} tab-separated fields, found {}",
                line_num,
                MIN_WIDTH,
                fields.len()
            ),
        ));
    }

    let position = fields[POS_COLUMN].parse::<i64>().map_err(|_| {
        Error::new(
            ErrorKind::Format,
            &format!(
                "Error at the line #{} where Position: {} is not a number",
                line_num, fields[POS_COLUMN]
            ),
        )
    })?;

    Ok(Record {
        chromosome: fields[CHROM_COLUMN].into(),
        position,
        reference: fields[REF_COLUMN].into(),
        alternate: fields[ALT_COLUMN].into(),
    })
}

/// Type for iterating over variant records
#[derive(Debug)]
pub struct Records<F>
where
    F: ReadToRecord,
{
    reader: F,
}

impl<F> Records<F>
where
    F: ReadToRecord,
{
    /// Construct a new Records given a reader
    pub fn new(reader: F) -> Self {
        Self { reader }
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> F {
        self.reader
    }
}

impl<F> Iterator for Records<F>
where
    F: ReadToRecord,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        match self.reader.read(&mut record) {
            Ok(()) => Some(Ok(record)),
            Err(err) if err.kind == ErrorKind::Eof => None,
            Err(err) => Some(Err(err)),
        }
    }
}
