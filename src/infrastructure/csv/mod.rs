// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Shift_JIS decoding, raw row reading, and unified row writing

mod row_writer;
mod sjis_reader;

pub use row_writer::UnifiedRowWriter;
pub use sjis_reader::{RawRow, ShiftJisCsvReader, ShiftJisDecodeReader};
