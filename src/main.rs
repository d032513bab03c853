use anyhow::Result;
use clap::Parser;
use extract_pdf::{ExtractConfig, run};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the text of the first 15 pages of a PDF", long_about = None)]
struct Args {
    /// PDF file to read (defaults to epiplexity_paper.pdf)
    path: Option<PathBuf>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parser warnings go to stderr at a fixed level, RUST_LOG is not read.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    let config = ExtractConfig::default().with_path(args.path);
    run(&config)
}
