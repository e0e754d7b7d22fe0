// ============================================================
// POSTAL DOMAIN LAYER
// ============================================================
// Record types for the two Japan Post datasets and the unified row
// No I/O, no external dependencies beyond serde

mod business_address;
mod conversion_report;
mod general_address;
mod pipeline_config;
mod postal_record;
mod unified_row;

pub use business_address::BusinessAddressRecord;
pub use conversion_report::{ConversionReport, DatasetReport};
pub use general_address::GeneralAddressRecord;
pub use pipeline_config::PipelineConfig;
pub use postal_record::PostalRecord;
pub use unified_row::{col, UnifiedRow, UNIFIED_COLUMN_COUNT};
