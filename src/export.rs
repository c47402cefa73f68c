use crate::error::{Result, ScheduleError};
use crate::row_render::*;
use crate::schedule_grid::*;
use crate::table_sink::TableSink;
use crate::venue_api::Venue;
use log::*;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedVenue {
    pub id: String,
    pub name: String,
    pub reason: ScheduleError,
}

/// Outcome of one export pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportReport {
    pub output: PathBuf,
    pub rows_written: usize,
    pub skipped: Vec<SkippedVenue>,
}

/// Write the header and one row per venue, in order. A venue whose openings
/// can't be painted is left out and listed in the report.
pub fn export_venues(venues: &[Venue], mut sink: Box<dyn TableSink>) -> Result<ExportReport> {
    sink.write_header(&header_columns())?;

    let mut rows_written = 0;
    let mut skipped = Vec::new();

    for venue in venues {
        info!("{}", venue.name);

        match build_grid(&venue.openings) {
            Ok(grid) => {
                sink.write_row(&render_row(venue, &grid))?;
                rows_written += 1;
            }
            Err(reason) => {
                warn!("Skipping venue {} ({}): {}", venue.id, venue.name, reason);
                skipped.push(SkippedVenue {
                    id: venue.id.clone(),
                    name: venue.name.clone(),
                    reason,
                });
            }
        }
    }

    let output = sink.finish()?;

    info!(
        "Exported {} venues to {} ({} skipped)",
        rows_written,
        output.display(),
        skipped.len()
    );

    Ok(ExportReport {
        output,
        rows_written,
        skipped,
    })
}
