use thiserror::Error;

/// Reasons an Opening can't be painted onto a weekly grid.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScheduleError {
    #[error("day {0} is outside 0 (Monday) to 6 (Sunday)")]
    DayOutOfRange(u8),
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u16),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u16),
    #[error("opening on day {day} runs past the last hour of the day (cursor at {hour})")]
    HourOverflow { day: u8, hour: u16 },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not fetch venues: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Could not deserialize venues: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not deserialize venues: document holds no venue list")]
    MissingVenues,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
