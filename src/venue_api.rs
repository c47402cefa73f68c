use crate::error::{ExportError, Result};
use ::serde::*;
use log::*;

pub const VENUES_URL: &str =
    "https://raw.githubusercontent.com/FFXIVVenues/ffxiv-venues-web/master/src/venues.json";

const USER_AGENT: &str = "venue-hours-export";

/// A clock reading inside an Opening.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Time {
    pub hour: u16,
    pub minute: u16,
    /// Set when the reading belongs to the day after the Opening's `day`.
    pub next_day: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
}

impl Time {
    pub fn new(hour: u16, minute: u16, next_day: bool) -> Self {
        Time {
            hour,
            minute,
            next_day,
            time_zone: String::new(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    /// 0 = Monday ... 6 = Sunday
    pub day: u8,
    pub start: Time,
    #[serde(default)]
    pub end: Option<Time>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub data_center: String,
    #[serde(deserialize_with = "null_as_default")]
    pub world: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    pub ward: u16,
    pub plot: u16,
    pub apartment: u16,
    pub subdivision: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venue {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub contacts: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    pub website: Option<String>,
    pub discord: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub openings: Vec<Opening>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a venue document. A document that is `null` holds no venue list
/// and fails the whole export.
pub fn parse_venues(data: &str) -> Result<Vec<Venue>> {
    let venues: Option<Vec<Venue>> = serde_json::from_str(data)?;

    venues.ok_or(ExportError::MissingVenues)
}

/// Download the raw venue document.
pub async fn fetch_venue_document(url: &str) -> Result<String> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    info!("Fetching venues from {}", url);

    let response = client.get(url).send().await?.error_for_status()?;
    let data = response.text().await?;

    debug!("Received {} bytes", data.len());

    Ok(data)
}
