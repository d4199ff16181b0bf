//! Index document shapes produced by the indexing pipeline
//!
//! The pipeline emits two families of JSON documents:
//!
//! - one combined index (`index.json`) with a section per record type,
//!   where each record is a loosely-shaped attribute map;
//! - one document per category under the database directory
//!   (`tiles.json`, `critters.json`, `items.json`, `objects.json`,
//!   `defines.json`) used for ground-truth verification.
//!
//! Records keep their raw `serde_json` form because the pipeline does not
//! guarantee a fixed attribute set; accessors below normalize the common
//! lookups (missing, `null`, and `""` all count as absent).

use serde::Deserialize;
use serde_json::{Map, Value};

/// A record section: PID (or name) to attribute map, in document order.
pub type Section = Map<String, Value>;

/// Combined index document with one section per record type.
///
/// Every section is optional; an absent section is simply empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndexDocument {
    pub creatures: Section,
    pub items: Section,
    pub objects: Section,
    pub maps: Section,
    pub defines: Section,
    pub references: References,
}

/// Reference lists the indexer itself flagged as unresolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct References {
    pub missing_names: Vec<Value>,
    pub missing_descriptions: Vec<Value>,
}

/// `tiles.json`: flat list of indexed art paths.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TilesIndex {
    pub all: Vec<String>,
}

/// `critters.json` / `items.json`: list of proto entries.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProtoIndex {
    pub entries: Vec<ProtoEntry>,
}

/// One indexed prototype record.
#[derive(Debug, Deserialize)]
pub struct ProtoEntry {
    pub pid: i64,
    pub file: Option<String>,
    pub name: Option<String>,
    pub script_name: Option<String>,
    pub proto_id: Option<i64>,
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl ProtoEntry {
    /// Whether the parser recovered any properties for this entry.
    pub fn has_props(&self) -> bool {
        !self.props.is_empty()
    }

    /// The script name, if one is set and non-empty.
    pub fn script(&self) -> Option<&str> {
        self.script_name.as_deref().filter(|s| !s.is_empty())
    }
}

/// `objects.json`: mapping from PID to name/description record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ObjectsIndex {
    pub entries: Section,
}

/// `defines.json`: mapping from define name to raw value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefinesIndex {
    pub defines: Section,
}

/// Fetch a string attribute from a record, treating absent, `null`, and the
/// empty string all as missing.
pub fn str_attr<'a>(record: &'a Value, attr: &str) -> Option<&'a str> {
    record
        .get(attr)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Whether a record has a truthy value at `attr`.
///
/// The indexer writes presence flags inconsistently (`true`, `1`, `"yes"`),
/// so anything except absent, `null`, `false`, `0`, and `""` counts as set.
pub fn flag_attr(record: &Value, attr: &str) -> bool {
    match record.get(attr) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Interpret a define value as a numeric PID.
///
/// Defines are stored either as JSON integers or as digit strings; anything
/// else (expressions, hex literals, negative values) is not a PID.
pub fn define_pid(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().filter(|p| *p >= 0),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_document_sections_default_empty() {
        let doc: IndexDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.creatures.is_empty());
        assert!(doc.defines.is_empty());
        assert!(doc.references.missing_names.is_empty());
    }

    #[test]
    fn test_document_preserves_section_order() {
        let doc: IndexDocument = serde_json::from_value(json!({
            "items": {"9": {}, "2": {}, "5": {}}
        }))
        .unwrap();
        let pids: Vec<&str> = doc.items.keys().map(String::as_str).collect();
        assert_eq!(pids, vec!["9", "2", "5"]);
    }

    #[test]
    fn test_str_attr_empty_counts_as_missing() {
        let record = json!({"name": "", "file": "pid_1.fopro"});
        assert_eq!(str_attr(&record, "name"), None);
        assert_eq!(str_attr(&record, "file"), Some("pid_1.fopro"));
        assert_eq!(str_attr(&record, "absent"), None);
    }

    #[test]
    fn test_flag_attr_truthiness() {
        let record = json!({
            "a": true, "b": false, "c": 1, "d": 0,
            "e": "yes", "f": "", "g": null
        });
        assert!(flag_attr(&record, "a"));
        assert!(!flag_attr(&record, "b"));
        assert!(flag_attr(&record, "c"));
        assert!(!flag_attr(&record, "d"));
        assert!(flag_attr(&record, "e"));
        assert!(!flag_attr(&record, "f"));
        assert!(!flag_attr(&record, "g"));
        assert!(!flag_attr(&record, "h"));
    }

    #[test]
    fn test_define_pid_accepts_digits_only() {
        assert_eq!(define_pid(&json!("42")), Some(42));
        assert_eq!(define_pid(&json!(42)), Some(42));
        assert_eq!(define_pid(&json!("0x2A")), None);
        assert_eq!(define_pid(&json!("PID_RAT + 1")), None);
        assert_eq!(define_pid(&json!("")), None);
        assert_eq!(define_pid(&json!(-1)), None);
    }

    #[test]
    fn test_proto_entry_minimal_shape() {
        let entry: ProtoEntry = serde_json::from_value(json!({"pid": 7})).unwrap();
        assert_eq!(entry.pid, 7);
        assert!(!entry.has_props());
        assert_eq!(entry.script(), None);
    }

    #[test]
    fn test_proto_entry_blank_script_is_none() {
        let entry: ProtoEntry =
            serde_json::from_value(json!({"pid": 7, "script_name": ""})).unwrap();
        assert_eq!(entry.script(), None);
    }
}
