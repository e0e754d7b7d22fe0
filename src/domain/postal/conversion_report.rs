use serde::{Deserialize, Serialize};

/// Counters for one dataset pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub records_read: usize,
    pub groups_flushed: usize,
    /// Groups collapsed by the split-label merge
    pub groups_merged: usize,
    pub rows_written: usize,
}

/// Result of a full conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub general: DatasetReport,
    pub business: DatasetReport,
}

impl ConversionReport {
    pub fn total_rows(&self) -> usize {
        self.general.rows_written + self.business.rows_written
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Conversion complete ({} rows):\n\
             - KEN_ALL: {} records, {} groups, {} merged, {} rows\n\
             - JIGYOSYO: {} records, {} groups, {} rows",
            self.total_rows(),
            self.general.records_read,
            self.general.groups_flushed,
            self.general.groups_merged,
            self.general.rows_written,
            self.business.records_read,
            self.business.groups_flushed,
            self.business.rows_written,
        )
    }
}
