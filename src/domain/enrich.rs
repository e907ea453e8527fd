//! Pure style-document enrichment.

use serde_json::{Map, Value, json};

use crate::domain::style_metadata::{self, StyleMetadata};

pub const SF_SYMBOL_KEY: &str = "sfSymbol";
pub const COLOR_KEY: &str = "color";

/// Names touched and left alone by one enrichment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichChanges {
    pub enriched: Vec<String>,
    pub unmatched: Vec<String>,
    /// Matched names whose record is not an object.
    pub not_objects: Vec<String>,
}

/// Set icon and color on every record whose name is in the lookup table.
pub fn enrich_styles(styles: &mut Map<String, Value>) -> EnrichChanges {
    let mut changes = EnrichChanges::default();

    for (name, record) in styles.iter_mut() {
        let Some(meta) = style_metadata::lookup(name) else {
            changes.unmatched.push(name.clone());
            continue;
        };

        match record.as_object_mut() {
            Some(fields) => {
                apply_metadata(fields, meta);
                changes.enriched.push(name.clone());
            }
            None => changes.not_objects.push(name.clone()),
        }
    }

    changes
}

fn apply_metadata(fields: &mut Map<String, Value>, meta: &StyleMetadata) {
    fields.insert(SF_SYMBOL_KEY.to_string(), Value::String(meta.sf_symbol.to_string()));
    fields.insert(
        COLOR_KEY.to_string(),
        json!({
            "red": meta.color.red,
            "green": meta.color.green,
            "blue": meta.color.blue,
        }),
    );
}
