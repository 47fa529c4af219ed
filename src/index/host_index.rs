use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sniff_enrich_shared::{decode_line, HostInfoRecord};
use tracing::{debug, info};

use crate::error::{EnrichError, Result};
use crate::lines::RecordLines;

/// Known connections keyed by `ip:port`.
#[derive(Debug, Default, Clone)]
pub struct HostIndex {
    hosts: HashMap<String, HostInfoRecord>,
}

impl HostIndex {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EnrichError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let index = Self::from_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            entries = index.len(),
            "Host index built"
        );

        Ok(index)
    }

    /// Reads every line of `reader`. Later entries overwrite earlier ones
    /// with the same endpoint. Undecodable lines land under the empty key.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut hosts = HashMap::new();

        for (line_no, line) in RecordLines::new(reader).enumerate() {
            let line = line?;
            let decoded = decode_line::<HostInfoRecord>(&line);

            if decoded.is_malformed() {
                debug!(line = line_no + 1, "Malformed host info line");
            }

            let record = decoded.into_inner();
            hosts.insert(record.endpoint.clone(), record);
        }

        Ok(Self { hosts })
    }

    pub fn get(&self, endpoint: &str) -> Option<&HostInfoRecord> {
        self.hosts.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
