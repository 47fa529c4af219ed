use clap::Parser;
use std::path::PathBuf;

use crate::config::TransformConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "MySQL sniff log enricher",
    long_about = "Joins a sniffed query log against a host-info table and writes one enriched JSON line per query"
)]
pub struct CliArguments {
    /// Sniff log, one JSON record per line
    ///
    /// Example: ./sniff.log
    #[arg(short = 's', long)]
    pub sniff: PathBuf,

    /// Host info table, one JSON record per line
    ///
    /// Example: ./hostinfo.log
    #[arg(short = 'i', long)]
    pub hostinfo: PathBuf,

    /// Output file, created or truncated
    ///
    /// Example: ./slow.log
    #[arg(short = 'o', long)]
    pub output: PathBuf,
}

impl From<CliArguments> for TransformConfig {
    fn from(args: CliArguments) -> Self {
        TransformConfig::new(args.sniff, args.hostinfo, args.output)
    }
}
