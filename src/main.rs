mod cmd;
mod errors;
mod io;

extern crate clap;
extern crate csv;

fn main() -> errors::Result<()> {
    cmd::run()
}
