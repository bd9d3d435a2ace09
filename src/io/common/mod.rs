use crate::errors::{Error, ErrorKind, Result};

const NEWLINE: u8 = b'\n';
const CARRIAGE_RETURN: char = '\r';

/// Strip the line terminator from a line
///
/// Both `\n` and `\r\n` endings are removed.  Other trailing whitespace is kept since it may be
/// part of the last field.
///
pub fn trim_newline(line: &str) -> &str {
    let line = line.strip_suffix(NEWLINE as char).unwrap_or(line);
    line.strip_suffix(CARRIAGE_RETURN).unwrap_or(line)
}

/// Read a line of data and return the number of bytes read
///
/// An end of file error is returned if the bytes read is 0
///
pub fn read_line<B>(reader: &mut B, buffer: &mut Vec<u8>) -> Result<usize>
where
    B: std::io::BufRead,
{
    let num_bytes = reader.read_until(NEWLINE, buffer)?;
    if num_bytes == 0 {
        return Err(Error::new(ErrorKind::Eof, "end of file"));
    }
    Ok(num_bytes)
}
