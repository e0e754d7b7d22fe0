use super::UnifiedRow;

/// A typed row of one of the source datasets.
///
/// Implementors know their grouping key, how to project themselves into the
/// unified row, and whether a same-code group may be collapsed before it is
/// written out.
pub trait PostalRecord: Sized {
    /// Dataset name used in logs and error messages
    const SCHEMA: &'static str;

    /// Exact number of source columns per row
    const COLUMN_COUNT: usize;

    /// Grouping key
    fn postal_code(&self) -> &str;

    fn to_unified_row(&self) -> UnifiedRow;

    /// Rewrites a complete same-code group just before it is flushed.
    /// The default keeps every record as-is.
    fn merge_group(group: Vec<Self>) -> Vec<Self> {
        group
    }
}
