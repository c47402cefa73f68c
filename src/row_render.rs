use crate::schedule_grid::*;
use crate::table_sink::Column;
use crate::venue_api::*;

pub const METADATA_COLUMNS: usize = 13;
pub const ROW_WIDTH: usize = METADATA_COLUMNS + DAYS_PER_WEEK * HOURS_PER_DAY;

const GRID_COLUMN_WIDTH: f64 = 10.0;

/// One output cell. Formatting hints ride along with the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(u16),
    Boolean(bool),
    /// Underlined hyperlink whose display text is its target.
    Link(String),
    /// Grid fraction, displayed with one decimal place.
    Fraction(f32),
}

impl Cell {
    fn empty() -> Self {
        Cell::Text(String::new())
    }

    fn joined(values: &Option<Vec<String>>) -> Self {
        match values {
            Some(values) => Cell::Text(values.join(", ")),
            None => Cell::empty(),
        }
    }

    fn nonzero(value: u16) -> Self {
        if value == 0 {
            Cell::empty()
        } else {
            Cell::Integer(value)
        }
    }

    fn link(url: &Option<String>) -> Self {
        match url {
            Some(url) if !url.is_empty() => Cell::Link(url.clone()),
            _ => Cell::empty(),
        }
    }
}

pub fn header_columns() -> Vec<Column> {
    let mut columns = vec![
        Column::new("Id"),
        Column::new("Name").width(40.0).bold(),
        Column::new("Contacts").width(40.0),
        Column::new("Data Center"),
        Column::new("World").width(15.0),
        Column::new("District").width(15.0),
        Column::new("Ward"),
        Column::new("Plot"),
        Column::new("Apartment"),
        Column::new("Is Subdivision"),
        Column::new("Website").width(40.0),
        Column::new("Discord").width(40.0),
        Column::new("Tags").width(80.0),
    ];

    for day in WEEKDAYS.iter() {
        for hour in 0..HOURS_PER_DAY {
            columns.push(Column::new(format!("{} {:02}:00", day, hour)).width(GRID_COLUMN_WIDTH));
        }
    }

    columns
}

pub fn render_row(venue: &Venue, grid: &WeeklyGrid) -> Vec<Cell> {
    let location = &venue.location;

    let mut row = Vec::with_capacity(ROW_WIDTH);

    row.push(Cell::Text(venue.id.clone()));
    row.push(Cell::Text(venue.name.clone()));
    row.push(Cell::joined(&venue.contacts));
    row.push(Cell::Text(location.data_center.clone()));
    row.push(Cell::Text(location.world.clone()));
    row.push(Cell::Text(location.district.clone()));
    row.push(Cell::Integer(location.ward));
    row.push(Cell::nonzero(location.plot));
    row.push(Cell::nonzero(location.apartment));
    row.push(Cell::Boolean(location.subdivision));
    row.push(Cell::link(&venue.website));
    row.push(Cell::link(&venue.discord));
    row.push(Cell::joined(&venue.tags));

    row.extend(grid.iter().map(Cell::Fraction));

    row
}
