pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod lines;
pub mod transform;

pub use config::TransformConfig;
pub use error::{EnrichError, Result};
pub use index::HostIndex;
pub use transform::{RecordTransformer, TransformStats};

/// Builds the host index, then streams the sniff log into the output file.
pub fn run(config: &TransformConfig) -> Result<TransformStats> {
    config.validate()?;
    let index = HostIndex::load(&config.host_info_path)?;
    RecordTransformer::new(&index).run_files(config)
}
