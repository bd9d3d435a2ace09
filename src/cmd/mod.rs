use crate::errors::{Error, ErrorKind, Result};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

mod convert;

const FILE_ARG: &str = "file";
const OUTPUT_ARG: &str = "output";
const OUTPUT_ARG_SHORT: char = 'o';
const DEFAULT_OUTPUT: &str = "output.txt";
const VERBOSE_FLAG: &str = "verbose";
const VERBOSE_FLAG_SHORT: char = 'v';
const MISSING_FILE_MESSAGE: &str =
    "No file name provided. Please type a full data file name including suffix.";

/// Command line definition
pub fn command() -> clap::Command<'static> {
    clap::Command::new("vcf-notation")
        .author("Mimi Wang, mimikwang@gmail.com")
        .version("0.1.0")
        .about("Convert variant call records into chr<CHROM>:<POS><REF>><ALT> notation")
        .arg(clap::Arg::new(FILE_ARG).help("Variant call file to convert"))
        .arg(
            clap::Arg::new(OUTPUT_ARG)
                .long(OUTPUT_ARG)
                .short(OUTPUT_ARG_SHORT)
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("Where to write the converted records"),
        )
        .arg(
            clap::Arg::new(VERBOSE_FLAG)
                .long(VERBOSE_FLAG)
                .short(VERBOSE_FLAG_SHORT)
                .takes_value(false)
                .multiple_occurrences(true)
                .help("Log progress to stderr, repeat for more detail"),
        )
}

/// Run the command line
pub fn run() -> Result<()> {
    let matches = command().get_matches();
    init_logging(matches.occurrences_of(VERBOSE_FLAG));
    execute(&matches, &mut std::io::stdout())
}

/// Run the conversion for parsed arguments
///
/// A missing input file is not an error: the user is told what to pass and nothing is written.
/// Messages for the user go to `console`.
///
fn execute<W>(matches: &clap::ArgMatches, console: &mut W) -> Result<()>
where
    W: std::io::Write,
{
    let file = match get_file(matches) {
        Ok(file) => file,
        Err(err) if err.kind == ErrorKind::User => {
            writeln!(console, "{}", err.message)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    let output = output_name(matches);
    convert::run(Path::new(file), Path::new(output))?;
    writeln!(
        console,
        "The parsed data have been written to the file {}.",
        output
    )?;
    Ok(())
}

/// Get file argument
fn get_file(matches: &clap::ArgMatches) -> Result<&str> {
    matches
        .value_of(FILE_ARG)
        .ok_or_else(|| Error::new(ErrorKind::User, MISSING_FILE_MESSAGE))
}

/// Output name for the converted records
fn output_name(matches: &clap::ArgMatches) -> &str {
    matches.value_of(OUTPUT_ARG).unwrap_or(DEFAULT_OUTPUT)
}

/// Set up logging to stderr
///
/// `RUST_LOG` wins when set.  Otherwise each `-v` lowers the threshold one step from `warn`.
///
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
