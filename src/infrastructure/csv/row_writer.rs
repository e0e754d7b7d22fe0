// ============================================================
// UNIFIED ROW WRITER
// ============================================================
// Serialize unified rows as headerless UTF-8 CSV

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::domain::error::{AppError, Result};
use crate::domain::postal::UnifiedRow;

pub struct UnifiedRowWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> UnifiedRowWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(sink);

        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_row(&mut self, row: &UnifiedRow) -> Result<()> {
        self.writer.write_record(row.columns())?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows(&mut self, rows: &[UnifiedRow]) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered output and hand back the underlying sink
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| AppError::IoError(e.error().to_string()))
    }
}
