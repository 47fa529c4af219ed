use clap::Parser;
use sniff_enrich::cli::CliArguments;
use sniff_enrich::TransformConfig;
use std::process;
use tracing::{error, info};

macro_rules! fatal {
    ($err:expr, $msg:literal) => {{
        error!(fatal = true, error = %$err, $msg);
        process::exit(1);
    }};
    ($err:expr, $msg:literal, $($key:tt = $val:expr),+) => {{
        error!(fatal = true, error = %$err, $($key = %$val),+, $msg);
        process::exit(1);
    }};
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_line_number(false)
        .init();

    let config = TransformConfig::from(CliArguments::parse());

    info!(
        sniff = %config.sniff_path.display(),
        hostinfo = %config.host_info_path.display(),
        output = %config.output_path.display(),
        "Starting sniff log enrichment"
    );

    if let Err(e) = sniff_enrich::run(&config) {
        fatal!(e, "Enrichment failed", output = config.output_path.display());
    }
}
