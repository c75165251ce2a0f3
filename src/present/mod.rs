//! Rendering of [`MediaRecord`]s for the terminal and for JSON files.

mod json;
mod table;

pub use json::{record_to_json, save_json};
pub use table::Table;

use crate::record::MediaRecord;

/// Field table for the record.
pub fn info_table(record: &MediaRecord) -> Table {
    let mut table = Table::new(["Field", "Value"]);
    for (field, value) in record.fields() {
        table.row([field.to_string(), value]);
    }
    table
}

/// Table of the record's remaining tags, or `None` when there are none.
pub fn tags_table(record: &MediaRecord) -> Option<Table> {
    if record.tags.is_empty() {
        return None;
    }

    let mut table = Table::new(["Tag", "Value"]);
    for (key, value) in &record.tags {
        table.row([key.as_str(), value.as_str()]);
    }
    Some(table)
}

/// Full terminal report: the field table, then the tag table if any.
pub fn render_record(record: &MediaRecord) -> String {
    let mut out = String::from("Audio Information:\n");
    out.push_str(&info_table(record).render());

    if let Some(tags) = tags_table(record) {
        out.push_str("\nMetadata:\n");
        out.push_str(&tags.render());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MediaRecord {
        MediaRecord {
            file: "song.flac".to_string(),
            format: "flac".to_string(),
            codec: "flac".to_string(),
            title: "Song".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_without_tags() {
        let out = render_record(&record());
        assert!(out.starts_with("Audio Information:\n"));
        assert!(out.contains("| Title "));
        assert!(!out.contains("Metadata:"));
    }

    #[test]
    fn test_render_with_tags() {
        let mut r = record();
        r.tags.insert("genre".to_string(), "Jazz".to_string());
        r.tags.insert("date".to_string(), "1959".to_string());

        let out = render_record(&r);
        assert!(out.contains("Metadata:"));
        let metadata = out.split("Metadata:\n").nth(1).unwrap();
        // Tags render sorted by key.
        assert!(metadata.find("date").unwrap() < metadata.find("genre").unwrap());
    }

    #[test]
    fn test_tags_table_absent_when_empty() {
        assert!(tags_table(&record()).is_none());
    }
}
