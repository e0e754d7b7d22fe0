//! Same-postal-code grouping
//!
//! Records arrive sorted by postal code. Consecutive records sharing a code
//! are buffered and released together once a different code shows up (or
//! the stream ends), after the record type has had a chance to merge them.

use tracing::debug;

use crate::domain::postal::{PostalRecord, UnifiedRow};

/// Output of one `ingest` or `finish` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFlush {
    /// Rows to write, in arrival order
    pub rows: Vec<UnifiedRow>,

    /// True when a buffered group was released
    pub flushed: bool,

    /// Records in the released group before merging
    pub group_size: usize,

    /// True when the released group was collapsed by a merge
    pub merged: bool,
}

impl GroupFlush {
    fn none() -> Self {
        Self::default()
    }
}

/// Buffers one postal-code group at a time
pub struct PostalGrouper<R: PostalRecord> {
    buffer: Vec<R>,
    current_key: Option<String>,
}

impl<R: PostalRecord> Default for PostalGrouper<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PostalRecord> PostalGrouper<R> {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            current_key: None,
        }
    }

    /// Code of the group currently being buffered
    pub fn current_key(&self) -> Option<&str> {
        self.current_key.as_deref()
    }

    /// Add a record, releasing the buffered group if its code differs
    pub fn ingest(&mut self, record: R) -> GroupFlush {
        let key_changed = self.current_key.as_deref() != Some(record.postal_code());

        let flush = if !self.buffer.is_empty() && key_changed {
            self.flush()
        } else {
            GroupFlush::none()
        };

        if key_changed {
            self.current_key = Some(record.postal_code().to_string());
        }
        self.buffer.push(record);
        flush
    }

    /// Release whatever is still buffered at end of stream
    pub fn finish(mut self) -> GroupFlush {
        if self.buffer.is_empty() {
            return GroupFlush::none();
        }
        self.flush()
    }

    fn flush(&mut self) -> GroupFlush {
        let group = std::mem::take(&mut self.buffer);
        let group_size = group.len();

        let records = R::merge_group(group);
        let merged = records.len() < group_size;
        if merged {
            debug!(
                schema = R::SCHEMA,
                postal_code = self.current_key.as_deref().unwrap_or(""),
                parts = group_size,
                "Merged split address label"
            );
        }

        GroupFlush {
            rows: records.iter().map(R::to_unified_row).collect(),
            flushed: true,
            group_size,
            merged,
        }
    }
}
