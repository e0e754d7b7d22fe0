// ============================================================
// POSTAL CONVERTER USE CASE
// ============================================================
// Run both datasets through decode, map, group and write

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use tempfile::NamedTempFile;
use tracing::info;

use crate::application::use_cases::field_mapper::FieldMapper;
use crate::application::use_cases::postal_grouper::{GroupFlush, PostalGrouper};
use crate::domain::error::{AppError, Result};
use crate::domain::postal::{ConversionReport, DatasetReport, PipelineConfig, PostalRecord};
use crate::infrastructure::csv::{RawRow, ShiftJisCsvReader, UnifiedRowWriter};

/// Converts the KEN_ALL and JIGYOSYO datasets into unified rows
#[derive(Default)]
pub struct PostalConverter {
    mapper: FieldMapper,
}

impl PostalConverter {
    pub fn new(mapper: FieldMapper) -> Self {
        Self { mapper }
    }

    /// Convert the general dataset, then the business dataset, into `writer`
    pub fn convert<G: Read, B: Read, W: Write>(
        &self,
        general: G,
        business: B,
        writer: &mut UnifiedRowWriter<W>,
    ) -> Result<ConversionReport> {
        let general = self.convert_general(general, writer)?;
        let business = self.convert_business(business, writer)?;
        Ok(ConversionReport { general, business })
    }

    pub fn convert_general<R: Read, W: Write>(
        &self,
        source: R,
        writer: &mut UnifiedRowWriter<W>,
    ) -> Result<DatasetReport> {
        run_dataset(source, writer, |row| self.mapper.general(row))
    }

    pub fn convert_business<R: Read, W: Write>(
        &self,
        source: R,
        writer: &mut UnifiedRowWriter<W>,
    ) -> Result<DatasetReport> {
        run_dataset(source, writer, |row| self.mapper.business(row))
    }

    /// Convert the files named in `config`.
    ///
    /// Output goes to a temporary file beside the destination and replaces
    /// it only once both datasets have been written.
    pub fn convert_files(&self, config: &PipelineConfig) -> Result<ConversionReport> {
        let start = Instant::now();

        let general = open_input(&config.general_input)?;
        let business = open_input(&config.business_input)?;

        let parent = match config.output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp_file = NamedTempFile::new_in(parent).map_err(|e| {
            AppError::IoError(format!("Failed to create temporary output file: {}", e))
        })?;

        let mut writer = UnifiedRowWriter::new(BufWriter::new(temp_file));
        let report = self.convert(general, business, &mut writer)?;

        let temp_file = writer
            .into_inner()?
            .into_inner()
            .map_err(|e| AppError::IoError(format!("Failed to flush output: {}", e.error())))?;
        temp_file.persist(&config.output).map_err(|e| {
            AppError::IoError(format!(
                "Failed to write {}: {}",
                config.output.display(),
                e.error
            ))
        })?;

        info!(
            output = %config.output.display(),
            rows = report.total_rows(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wrote unified postal CSV"
        );
        Ok(report)
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| AppError::IoError(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

fn run_dataset<P, R, W, F>(
    source: R,
    writer: &mut UnifiedRowWriter<W>,
    mut map: F,
) -> Result<DatasetReport>
where
    P: PostalRecord,
    R: Read,
    W: Write,
    F: FnMut(RawRow) -> Result<P>,
{
    info!(schema = P::SCHEMA, "Converting dataset");

    let mut report = DatasetReport::default();
    let mut grouper = PostalGrouper::<P>::new();

    for row in ShiftJisCsvReader::new(source) {
        let record = map(row?)?;
        report.records_read += 1;

        let flush = grouper.ingest(record);
        emit(writer, &flush, &mut report)?;
    }
    emit(writer, &grouper.finish(), &mut report)?;

    info!(
        schema = P::SCHEMA,
        records = report.records_read,
        groups = report.groups_flushed,
        merged = report.groups_merged,
        rows = report.rows_written,
        "Dataset converted"
    );
    Ok(report)
}

fn emit<W: Write>(
    writer: &mut UnifiedRowWriter<W>,
    flush: &GroupFlush,
    report: &mut DatasetReport,
) -> Result<()> {
    if !flush.flushed {
        return Ok(());
    }
    writer.write_rows(&flush.rows)?;
    report.groups_flushed += 1;
    report.rows_written += flush.rows.len();
    if flush.merged {
        report.groups_merged += 1;
    }
    Ok(())
}
