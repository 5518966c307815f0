use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Description given to every property created from the form
pub const DEFAULT_DESCRIPTION: &str = "Sem descrição";

/// A room (cômodo) as returned nested inside its property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Core property (imóvel) data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "dataCompra", default, deserialize_with = "lenient_timestamp")]
    pub acquired_at: Option<DateTime<Utc>>,
    #[serde(rename = "comodos", default)]
    pub rooms: Vec<Room>,
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC and
/// a bare date as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `dataCompra` that cannot be read as a timestamp decodes as absent, so one
/// odd value does not fail the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = parse_timestamp(&raw);
    if parsed.is_none() {
        warn!("Ignoring unreadable dataCompra '{}'", raw);
    }
    Ok(parsed)
}

impl Property {
    pub fn room(&self, room_id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}

/// Body of `POST /imovel/create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProperty {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "dataCompra")]
    pub acquired_at: DateTime<Utc>,
}

impl NewProperty {
    /// Build the payload the create form submits: default description, acquired now
    pub fn from_form(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            acquired_at: Utc::now(),
        }
    }
}

/// Body of `PATCH /imovel/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyPatch {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Body of `POST /imovel/{id}/comodo` and `PATCH /comodo/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomPayload {
    #[serde(rename = "nome")]
    pub name: String,
}
