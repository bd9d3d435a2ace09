use crate::errors::{Error, Result};
use crate::io::vcf;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Counts reported back once a file has been converted
#[derive(Debug, PartialEq)]
pub struct Summary {
    /// Lines read from the input, header lines included
    pub lines_read: usize,
    /// Notation lines written to the output
    pub records_written: usize,
}

/// Run the conversion workflow
///
/// The whole input is converted in memory first.  The output file is only created once every
/// line has parsed, so a malformed line anywhere in the input leaves no output behind.
///
pub fn run(input: &Path, output: &Path) -> Result<Summary> {
    info!(input = %input.display(), "converting variant records");
    let reader = vcf::Reader::from_path(input)?;
    let mut writer = vcf::Writer::new(Vec::new());
    let summary = consume_reader(reader, &mut writer)?;

    let buffer = writer.into_inner()?;
    write_output(output, &buffer)?;
    info!(
        output = %output.display(),
        lines_read = summary.lines_read,
        records_written = summary.records_written,
        "conversion finished"
    );
    Ok(summary)
}

/// Consume a reader and write to output
fn consume_reader<R, W>(reader: vcf::Reader<R>, writer: &mut vcf::Writer<W>) -> Result<Summary>
where
    R: std::io::Read,
    W: std::io::Write,
{
    let mut records = reader.iter();
    let mut records_written = 0;
    for result in records.by_ref() {
        writer.write(&result?)?;
        records_written += 1;
    }
    let lines_read = records.into_inner().line_num();
    debug!(lines_read, records_written, "input consumed");
    Ok(Summary {
        lines_read,
        records_written,
    })
}

/// Create the output file and write the buffered notation lines in one go
fn write_output(output: &Path, buffer: &[u8]) -> Result<()> {
    let mut file = File::create(output).map_err(|e| Error::with_path(output, e))?;
    file.write_all(buffer)
        .and_then(|_| file.flush())
        .map_err(|e| Error::with_path(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    const INPUT: &str = "##fileformat=VCFv4.2\n\
                         #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
                         16\t11178640\t.\tG\tA\t50\tPASS\tDP=14\n\
                         17\t7577120\trs28934576\tC\tT\t99\tPASS\tDP=20\n";

    #[test]
    fn test_run() {
        let name = "Should write one notation line per data record, in order";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calls.vcf");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, INPUT).unwrap();

        let summary = run(&input, &output).unwrap();
        assert_eq!(
            Summary {
                lines_read: 4,
                records_written: 2,
            },
            summary,
            "{}",
            name
        );
        assert_eq!(
            "chr16:11178640G>A\nchr17:7577120C>T\n",
            std::fs::read_to_string(&output).unwrap(),
            "{}",
            name
        );
    }

    #[test]
    fn test_run_is_repeatable() {
        let name = "Should produce byte-identical output when run twice";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calls.vcf");
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&input, INPUT).unwrap();

        run(&input, &first).unwrap();
        run(&input, &second).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap(),
            "{}",
            name
        );
    }

    #[test]
    fn test_run_windows_line_endings() {
        let name = "Should give the same output for crlf input";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calls.vcf");
        let output = dir.path().join("output.txt");
        std::fs::write(&input, INPUT.replace('\n', "\r\n")).unwrap();

        run(&input, &output).unwrap();
        assert_eq!(
            "chr16:11178640G>A\nchr17:7577120C>T\n",
            std::fs::read_to_string(&output).unwrap(),
            "{}",
            name
        );
    }

    #[test]
    fn test_run_errors() {
        struct TestCase<'a> {
            name: &'a str,
            input: Option<&'a str>,
            expected_kind: ErrorKind,
            expected_message: &'a str,
        }
        let test_cases = [
            TestCase {
                name: "Should fail on a late invalid position and write nothing",
                input: Some("##fileformat=VCFv4.2\n1\t100\t.\tA\tT\n1\tabc\t.\tA\tT\n"),
                expected_kind: ErrorKind::Format,
                expected_message: "Error at the line #3 where Position: abc is not a number",
            },
            TestCase {
                name: "Should fail on a short line and write nothing",
                input: Some("#CHROM\tPOS\tID\tREF\tALT\n1\t100\t.\tA\n"),
                expected_kind: ErrorKind::Format,
                expected_message: "Error at the line #2: expected at least 5 tab-separated fields, found 4",
            },
            TestCase {
                name: "Should fail if the input does not exist",
                input: None,
                expected_kind: ErrorKind::IO,
                expected_message: "calls.vcf",
            },
        ];
        for test_case in test_cases {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("calls.vcf");
            let output = dir.path().join("output.txt");
            if let Some(contents) = test_case.input {
                std::fs::write(&input, contents).unwrap();
            }

            let err = run(&input, &output).unwrap_err();
            assert_eq!(test_case.expected_kind, err.kind, "{}", test_case.name);
            assert!(
                err.message.contains(test_case.expected_message),
                "{}: {}",
                test_case.name,
                err.message
            );
            assert!(!output.exists(), "{}", test_case.name);
        }
    }

    #[test]
    fn test_run_unwritable_output() {
        let name = "Should return an IO error if the output cannot be created";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calls.vcf");
        let output = dir.path().join("no-such-dir").join("output.txt");
        std::fs::write(&input, INPUT).unwrap();

        let err = run(&input, &output).unwrap_err();
        assert_eq!(ErrorKind::IO, err.kind, "{}", name);
        assert!(err.message.contains("output.txt"), "{}", name);
    }
}
