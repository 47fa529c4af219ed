use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use sniff_enrich_shared::{decode_line, HostInfoRecord, OutputRecord, SniffRecord};
use tracing::{debug, info};

use crate::classify::sql_type;
use crate::config::TransformConfig;
use crate::error::{EnrichError, Result};
use crate::index::HostIndex;
use crate::lines::RecordLines;

/// Rows sent is not captured by the sniffer.
const ROWS_SENT: i64 = 0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    pub records: u64,
    pub malformed: u64,
    pub unresolved: u64,
}

/// Streams sniff records through the host index, one output line per input line.
pub struct RecordTransformer<'a> {
    index: &'a HostIndex,
}

impl<'a> RecordTransformer<'a> {
    pub fn new(index: &'a HostIndex) -> Self {
        Self { index }
    }

    /// Resolves the record's endpoint and fills in whatever user/db it lacks.
    /// Unknown endpoints keep the record's own fields untouched.
    pub fn enrich(&self, record: SniffRecord) -> OutputRecord {
        self.resolve(record).0
    }

    /// Same as `enrich`, also reporting whether the endpoint was in the index.
    fn resolve(&self, mut record: SniffRecord) -> (OutputRecord, bool) {
        let unresolved = HostInfoRecord::unresolved();
        let (host, resolved) = match self.index.get(&record.endpoint()) {
            Some(host) => {
                if record.user.is_empty() {
                    record.user = host.user.clone();
                }
                if record.db.is_empty() {
                    record.db = host.db.clone();
                }
                (host, true)
            }
            None => (&unresolved, false),
        };

        let output = OutputRecord {
            connection_id: host.id.to_string(),
            query_time: record.elapsed,
            sql_type: sql_type(&record.sql),
            sql: record.sql,
            rows_sent: ROWS_SENT,
            username: record.user,
            dbname: record.db,
        };

        (output, resolved)
    }

    /// Transforms every line of `reader` into `writer`. Stops at the first
    /// read or write error; lines already written stay written.
    pub fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<TransformStats>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = TransformStats::default();

        for (line_no, line) in RecordLines::new(reader).enumerate() {
            let line = line?;
            let decoded = decode_line::<SniffRecord>(&line);

            if decoded.is_malformed() {
                stats.malformed += 1;
                debug!(line = line_no + 1, "Malformed sniff line");
            }

            let (output, resolved) = self.resolve(decoded.into_inner());
            if !resolved {
                stats.unresolved += 1;
            }

            let mut bytes = serde_json::to_vec(&output)?;
            bytes.push(b'\n');
            writer.write_all(&bytes).map_err(EnrichError::Write)?;
            stats.records += 1;
        }

        writer.flush().map_err(EnrichError::Write)?;

        Ok(stats)
    }

    pub fn run_files(&self, config: &TransformConfig) -> Result<TransformStats> {
        let input = File::open(&config.sniff_path).map_err(|source| EnrichError::Open {
            path: config.sniff_path.clone(),
            source,
        })?;
        let output = File::create(&config.output_path).map_err(|source| EnrichError::Create {
            path: config.output_path.clone(),
            source,
        })?;

        info!(
            sniff = %config.sniff_path.display(),
            output = %config.output_path.display(),
            "Transforming sniff log"
        );

        let mut writer = BufWriter::new(output);
        let stats = self.run(BufReader::new(input), &mut writer)?;

        debug!(
            records = stats.records,
            malformed = stats.malformed,
            unresolved = stats.unresolved,
            "Transform finished"
        );

        Ok(stats)
    }
}
