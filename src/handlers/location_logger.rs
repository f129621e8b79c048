use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use crate::models::error::SinkError;
use crate::models::location_record::LocationRecord;

#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn append(&self, record: &LocationRecord) -> Result<(), SinkError>;
}

/// Appends records to a flat text file.
///
/// The file is opened in append mode for every record and closed again, so
/// each line reaches the kernel as one write. Concurrent callers are not
/// serialized against each other.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn append(&self, record: &LocationRecord) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io { path: self.path.clone(), source };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(io_err)?;
        file.write_all(record.to_line().as_bytes()).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failures are logged and reported as success.
    Suppress,
    Propagate,
}

pub struct LocationLogger {
    sink: Arc<dyn RecordSink>,
    policy: FailurePolicy,
}

impl LocationLogger {
    pub fn new(sink: Arc<dyn RecordSink>, policy: FailurePolicy) -> Self {
        Self { sink, policy }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileSink::new(path)), FailurePolicy::Suppress)
    }

    pub async fn log(&self, record: &LocationRecord) -> Result<(), SinkError> {
        match self.sink.append(record).await {
            Ok(()) => {
                info!(map_link = %record.map_link(), "location saved");
                Ok(())
            }
            Err(e) => match self.policy {
                FailurePolicy::Suppress => {
                    error!(error = %e, map_link = %record.map_link(), "location dropped");
                    Ok(())
                }
                FailurePolicy::Propagate => Err(e),
            },
        }
    }
}
