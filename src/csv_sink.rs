use crate::error::Result;
use crate::row_render::Cell;
use crate::table_sink::*;
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

/// CSV output. Links are written as their target and fractions with one
/// decimal place; width and bold hints are dropped.
pub struct CsvSink {
    path: PathBuf,
    writer: Writer<File>,
}

impl CsvSink {
    pub fn create(path: &Path) -> Result<Self> {
        Ok(CsvSink {
            path: path.to_path_buf(),
            writer: Writer::from_path(path)?,
        })
    }
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) | Cell::Link(text) => text.clone(),
        Cell::Integer(value) => value.to_string(),
        Cell::Boolean(value) => value.to_string(),
        Cell::Fraction(value) => format!("{:.1}", value),
    }
}

impl TableSink for CsvSink {
    fn write_header(&mut self, columns: &[Column]) -> Result<()> {
        self.writer
            .write_record(columns.iter().map(|column| column.title.as_str()))?;

        Ok(())
    }

    fn write_row(&mut self, cells: &[Cell]) -> Result<()> {
        self.writer.write_record(cells.iter().map(cell_text))?;

        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<PathBuf> {
        let mut sink = *self;
        sink.writer.flush()?;

        Ok(sink.path)
    }
}
