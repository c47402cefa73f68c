use crate::error::Result;
use crate::row_render::Cell;
use crate::table_sink::*;
use log::*;
use rust_xlsxwriter::{Format, FormatUnderline, Workbook, Worksheet};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Single-worksheet workbook, held in memory until `finish`.
pub struct XlsxSink {
    path: PathBuf,
    worksheet: Worksheet,
    row: u32,
    bold_columns: BTreeSet<u16>,
    plain: Format,
    bold: Format,
    link: Format,
    fraction: Format,
}

impl XlsxSink {
    pub fn new(path: &Path, sheet_name: &str) -> Result<Self> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(sheet_name)?;

        Ok(XlsxSink {
            path: path.to_path_buf(),
            worksheet,
            row: 0,
            bold_columns: BTreeSet::new(),
            plain: Format::new(),
            bold: Format::new().set_bold(),
            link: Format::new().set_underline(FormatUnderline::Single),
            fraction: Format::new().set_num_format(FRACTION_FORMAT),
        })
    }

    fn write_cell(&mut self, col: u16, cell: &Cell) -> Result<()> {
        let row = self.row;
        let format = if self.bold_columns.contains(&col) {
            &self.bold
        } else {
            &self.plain
        };

        match cell {
            Cell::Text(text) if text.is_empty() => {}
            Cell::Text(text) => {
                self.worksheet
                    .write_string_with_format(row, col, text, format)?;
            }
            Cell::Integer(value) => {
                self.worksheet
                    .write_number_with_format(row, col, *value, format)?;
            }
            Cell::Boolean(value) => {
                self.worksheet
                    .write_boolean_with_format(row, col, *value, format)?;
            }
            Cell::Link(url) => {
                let written = self
                    .worksheet
                    .write_url_with_format(row, col, url.as_str(), &self.link)
                    .map(|_| ());

                if let Err(err) = written {
                    warn!("Writing {} as plain text: {}", url, err);
                    self.worksheet
                        .write_string_with_format(row, col, url, &self.link)?;
                }
            }
            Cell::Fraction(value) => {
                self.worksheet
                    .write_number_with_format(row, col, *value, &self.fraction)?;
            }
        }

        Ok(())
    }
}

impl TableSink for XlsxSink {
    fn write_header(&mut self, columns: &[Column]) -> Result<()> {
        for (col, column) in (0u16..).zip(columns) {
            self.worksheet
                .write_string_with_format(self.row, col, &column.title, &self.bold)?;

            if let Some(width) = column.width {
                self.worksheet.set_column_width(col, width)?;
            }
            if column.bold {
                self.bold_columns.insert(col);
            }
        }
        self.row += 1;

        Ok(())
    }

    fn write_row(&mut self, cells: &[Cell]) -> Result<()> {
        for (col, cell) in (0u16..).zip(cells) {
            self.write_cell(col, cell)?;
        }
        self.row += 1;

        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<PathBuf> {
        let sink = *self;

        let mut workbook = Workbook::new();
        workbook.push_worksheet(sink.worksheet);
        workbook.save(&sink.path)?;

        debug!("Saved {} rows to {}", sink.row, sink.path.display());

        Ok(sink.path)
    }
}
