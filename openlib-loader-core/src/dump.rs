use {
    tracing::warn,
    serde_json::Value,
    thiserror::Error,
    chrono::{NaiveDate, NaiveDateTime},
};

const AUTHOR_KEY_PREFIX: &str = "/authors/";
const WORK_KEY_PREFIX: &str = "/works/";

// timestamps in the dumps look like "2009-12-11T01:57:19.964652"
const CREATED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("line does not contain a json object")]
    NoJson,

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record has no key")]
    MissingKey,

    #[error("author reference has no key")]
    AuthorRefWithoutKey,
}

#[derive(Debug)]
pub struct AuthorRecord {
    pub id: String,
    pub name: String,
    pub personal_name: String,
}

#[derive(Debug)]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub cover_ids: Option<Vec<String>>,
    pub author_ids: Option<Vec<String>>,
}

impl AuthorRecord {
    pub fn from_line(line: &str) -> Result<Self, DumpError> {
        let parsed: Value = serde_json::from_str(json_payload(line).ok_or(DumpError::NoJson)?)?;

        Ok(Self {
            id: parsed.get("key")
                .and_then(|v| v.as_str())
                .map(strip_author_prefix)
                .unwrap_or_default(),
            name: string_field(&parsed, "name"),
            personal_name: string_field(&parsed, "personal_name"),
        })
    }
}

impl WorkRecord {
    pub fn from_line(line: &str) -> Result<Self, DumpError> {
        let parsed: Value = serde_json::from_str(json_payload(line).ok_or(DumpError::NoJson)?)?;

        let id = parsed.get("key")
            .and_then(|v| v.as_str())
            .map(strip_work_prefix)
            .ok_or(DumpError::MissingKey)?;

        let author_ids = match parsed.get("authors").and_then(|v| v.as_array()) {
            Some(entries) => Some(author_ids_from_entries(entries)?),
            None => None,
        };

        Ok(Self {
            id,
            title: string_field(&parsed, "title"),
            description: nested_value_field(&parsed, "description"),
            publish_date: nested_value_field(&parsed, "created").and_then(|v| parse_created_date(&v)),
            cover_ids: parsed.get("covers")
                .and_then(|v| v.as_array())
                .map(|values| values.iter().map(cover_id).collect()),
            author_ids,
        })
    }
}

// dump lines are tab-separated metadata followed by the record json, so
// everything before the first brace is dropped
fn json_payload(line: &str) -> Option<&str> {
    line.find('{').map(|index| &line[index..])
}

fn string_field(parsed: &Value, field: &str) -> String {
    parsed.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned()
}

// fields like "description" hold either {"type": ..., "value": ...} or a
// bare string, only the object form carries a value we take
fn nested_value_field(parsed: &Value, field: &str) -> Option<String> {
    parsed.get(field)
        .and_then(|v| v.as_object())
        .and_then(|v| v.get("value"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_owned())
}

fn parse_created_date(value: &str) -> Option<NaiveDate> {
    match NaiveDateTime::parse_from_str(value, CREATED_TIMESTAMP_FORMAT) {
        Ok(v) => Some(v.date()),
        Err(err) => {
            warn!("unable to parse created timestamp \"{}\": {}", value, err);
            None
        }
    }
}

fn cover_id(value: &Value) -> String {
    match value {
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

fn author_ids_from_entries(entries: &[Value]) -> Result<Vec<String>, DumpError> {
    entries.iter()
        .map(|entry| entry.get("author")
            .and_then(|v| v.get("key"))
            .and_then(|v| v.as_str())
            .map(strip_author_prefix)
            .ok_or(DumpError::AuthorRefWithoutKey))
        .collect()
}

fn strip_author_prefix(key: &str) -> String {
    key.strip_prefix(AUTHOR_KEY_PREFIX).unwrap_or(key).to_owned()
}

fn strip_work_prefix(key: &str) -> String {
    key.strip_prefix(WORK_KEY_PREFIX).unwrap_or(key).to_owned()
}
