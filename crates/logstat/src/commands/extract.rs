use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use logstat_core::Convention;
use logstat_extract::{parse_bidir, parse_file, report_path};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Log with `Iter:` and `Max O + C:` lines.
    #[arg(default_value = "Width.txt")]
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct BidirArgs {
    /// Log with `COMMON` marker lines.
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Log to report.
    pub path: PathBuf,
    /// Log convention: simple-prefix (alias simple) or marker-offset (alias bidir).
    #[arg(long, default_value = "simple-prefix")]
    pub convention: Convention,
}

pub fn run_parse(args: &ParseArgs) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    parse_file(&args.path, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run_bidir(args: &BidirArgs) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    parse_bidir(&args.path, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run(args: &ExtractArgs) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    report_path(&args.path, args.convention, &mut out)?;
    out.flush()?;
    Ok(())
}
