//! Output sink writers.
//!
//! Both writers are append-only and preserve the order in which readings are
//! handed to them. A writer that cannot open or write to its target fails
//! the run; missing parent directories are an error, not something the
//! pipeline creates on the fly.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data_mgmt::models::Reading;
use crate::plan::{OutputSpec, SinkFormat};

/// Decimal places for `value` in CSV rows.
const CSV_VALUE_PRECISION: usize = 6;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("could not open output file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("could not write to output file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not write CSV row to {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("could not serialize reading for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A single open output sink, owned by the driver for the run's lifetime.
pub enum SinkWriter {
    Jsonl {
        writer: BufWriter<File>,
        path: PathBuf,
    },
    Csv {
        writer: csv::Writer<File>,
        path: PathBuf,
    },
}

impl SinkWriter {
    /// Open the sink for `spec`, truncating the target file. The CSV header
    /// is written immediately, so a run with no matching readings still
    /// produces a header-only file.
    pub fn open(spec: &OutputSpec) -> Result<Self, SinkError> {
        let path = spec.path.clone();
        let file = File::create(&path).map_err(|source| SinkError::Open {
            path: path.clone(),
            source,
        })?;

        match spec.format {
            SinkFormat::Jsonl => Ok(SinkWriter::Jsonl {
                writer: BufWriter::new(file),
                path,
            }),
            SinkFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(file);
                writer
                    .write_record(Reading::FIELD_NAMES)
                    .map_err(|source| SinkError::Csv {
                        path: path.clone(),
                        source,
                    })?;
                Ok(SinkWriter::Csv { writer, path })
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SinkWriter::Jsonl { path, .. } | SinkWriter::Csv { path, .. } => path,
        }
    }

    /// Append one reading, preserving call order.
    pub fn append(&mut self, reading: &Reading) -> Result<(), SinkError> {
        match self {
            SinkWriter::Jsonl { writer, path } => {
                let line =
                    serde_json::to_string(reading).map_err(|source| SinkError::Serialize {
                        path: path.clone(),
                        source,
                    })?;
                writeln!(writer, "{line}").map_err(|source| SinkError::Write {
                    path: path.clone(),
                    source,
                })
            }
            SinkWriter::Csv { writer, path } => writer
                .write_record([
                    reading.ts.to_string(),
                    reading.device_id.clone(),
                    reading.sensor_id.clone(),
                    reading.kind.as_str().to_string(),
                    format!("{:.prec$}", reading.value, prec = CSV_VALUE_PRECISION),
                ])
                .map_err(|source| SinkError::Csv {
                    path: path.clone(),
                    source,
                }),
        }
    }

    /// Flush buffered rows to disk. Called exactly once per sink on every
    /// exit path.
    pub fn finish(&mut self) -> Result<(), SinkError> {
        let (result, path) = match self {
            SinkWriter::Jsonl { writer, path } => (writer.flush(), path),
            SinkWriter::Csv { writer, path } => (writer.flush(), path),
        };
        result.map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })
    }
}
