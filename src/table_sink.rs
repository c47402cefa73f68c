use crate::csv_sink::CsvSink;
use crate::error::Result;
use crate::row_render::Cell;
use crate::xlsx_sink::XlsxSink;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Number format for grid fractions.
pub const FRACTION_FORMAT: &str = "0.0";

/// A header title plus the layout hints a sink may honour.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub title: String,
    pub width: Option<f64>,
    /// Body cells of this column are bold as well as the header.
    pub bold: bool,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Column {
            title: title.into(),
            width: None,
            bold: false,
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Destination for the exported table: one header, then rows in order.
pub trait TableSink {
    fn write_header(&mut self, columns: &[Column]) -> Result<()>;

    fn write_row(&mut self, cells: &[Cell]) -> Result<()>;

    /// Flush everything to disk and return the written path.
    fn finish(self: Box<Self>) -> Result<PathBuf>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SinkFormat {
    Xlsx,
    Csv,
}

impl SinkFormat {
    /// `.csv` files get CSV, everything else a workbook.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SinkFormat::Csv,
            _ => SinkFormat::Xlsx,
        }
    }
}

pub fn open_sink(format: SinkFormat, path: &Path, sheet_name: &str) -> Result<Box<dyn TableSink>> {
    let sink: Box<dyn TableSink> = match format {
        SinkFormat::Xlsx => Box::new(XlsxSink::new(path, sheet_name)?),
        SinkFormat::Csv => Box::new(CsvSink::create(path)?),
    };

    Ok(sink)
}
