//! In-memory stand-ins for the collaborator ports, shared by unit tests.

use std::sync::Mutex;

use crate::core::errors::{ReportError, Result};
use crate::core::models::time_range::TimeRange;
use crate::core::traits::log_renderer::LogRenderer;
use crate::core::traits::log_source::LogSource;
use crate::core::traits::snapshot_store::SnapshotStore;

/// A three-entry `svn log --xml` document: alice twice, bob once.
pub const SAMPLE_LOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log>
<logentry
   revision="101">
<author>alice</author>
<date>2020-01-01T09:15:42.123456Z</date>
<msg>Fix the build
skip-sanity-check</msg>
</logentry>
<logentry
   revision="102">
<author>bob</author>
<date>2020-01-01T11:00:00.000000Z</date>
<msg>Add &lt;feature&gt; &amp; tests</msg>
</logentry>
<logentry
   revision="103">
<author>alice</author>
<date>2020-01-01T18:30:00.000000Z</date>
<msg>skip-sanity-check: hotfix</msg>
</logentry>
</log>
"#;

/// Log source returning a canned document (or failing) and recording calls.
pub struct FakeSource {
    output: Option<Vec<u8>>,
    pub calls: Mutex<Vec<TimeRange>>,
}

impl FakeSource {
    pub fn returning(output: &str) -> Self {
        Self {
            output: Some(output.as_bytes().to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LogSource for FakeSource {
    fn fetch(&self, range: &TimeRange) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(range.clone());
        self.output
            .clone()
            .ok_or_else(|| ReportError::LogSourceFailed {
                reason: "svn: E170013: Unable to connect".into(),
            })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Renderer that echoes its input as text and records every input.
///
/// Empty input is an error, like xsltproc on an empty stdin.
#[derive(Default)]
pub struct EchoRenderer {
    pub inputs: Mutex<Vec<Vec<u8>>>,
}

impl EchoRenderer {
    pub fn last_input(&self) -> Option<Vec<u8>> {
        self.inputs.lock().unwrap().last().cloned()
    }
}

impl LogRenderer for EchoRenderer {
    fn render(&self, raw_log: &[u8]) -> Result<String> {
        self.inputs.lock().unwrap().push(raw_log.to_vec());
        if raw_log.is_empty() {
            return Err(ReportError::RenderFailed {
                reason: "empty input".into(),
            });
        }
        Ok(String::from_utf8_lossy(raw_log).into_owned())
    }

    fn name(&self) -> &str {
        "echo"
    }
}

/// Snapshot store held in memory, counting reads and writes.
#[derive(Default)]
pub struct MemorySnapshots {
    pub data: Mutex<Option<Vec<u8>>>,
    pub reads: Mutex<usize>,
    pub writes: Mutex<usize>,
}

impl MemorySnapshots {
    pub fn with(content: &str) -> Self {
        Self {
            data: Mutex::new(Some(content.as_bytes().to_vec())),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<Vec<u8>> {
        self.data.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SnapshotStore for MemorySnapshots {
    fn exists(&self) -> bool {
        self.data.lock().unwrap().is_some()
    }

    fn read(&self) -> Result<Vec<u8>> {
        *self.reads.lock().unwrap() += 1;
        self.content().ok_or_else(|| ReportError::SnapshotFailed {
            path: "memory".into(),
            reason: "no snapshot".into(),
        })
    }

    fn write(&self, raw_log: &[u8]) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        *self.data.lock().unwrap() = Some(raw_log.to_vec());
        Ok(())
    }
}
