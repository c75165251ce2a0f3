//! JSON export of a record.

use crate::error::{Error, Result};
use crate::record::MediaRecord;
use serde_json::{Map, Value};
use std::path::Path;

/// The displayed field/value pairs plus a nested `tags` object.
pub fn record_to_json(record: &MediaRecord) -> Value {
    let mut object = Map::new();
    for (field, value) in record.fields() {
        object.insert(field.to_string(), Value::String(value));
    }

    let tags = record
        .tags
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    object.insert("tags".to_string(), Value::Object(tags));

    Value::Object(object)
}

/// Write the record as pretty-printed UTF-8 JSON.
pub fn save_json(record: &MediaRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&record_to_json(record))
        .map_err(|e| Error::write(path, e))?;
    std::fs::write(path, json + "\n").map_err(|e| Error::write(path, e))?;

    tracing::debug!("Wrote JSON to {:?}", path);
    Ok(())
}
