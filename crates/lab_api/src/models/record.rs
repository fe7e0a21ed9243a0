use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a stored record. The API hands out both numeric and
/// string ids depending on the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A record of any collection. Only `_id` is interpreted, every other field
/// is carried through untouched so updates send back what was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The equipment `type`, stringified: strings as is, numbers in decimal.
    pub fn kind(&self) -> Option<String> {
        match self.fields.get("type")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Assigned staff of an equipment record; `null` and missing both mean unassigned.
    pub fn staff(&self) -> Option<&Value> {
        match self.fields.get("staff") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn set_staff(&mut self, staff: Option<&Record>) {
        let value = staff
            .and_then(|s| serde_json::to_value(s).ok())
            .unwrap_or(Value::Null);

        self.fields.insert("staff".to_string(), value);
    }

    /// Id of the assigned staff, whether the API embeds the whole staff
    /// record or only its id.
    pub fn staff_id(&self) -> Option<RecordId> {
        match self.staff()? {
            Value::Object(obj) => serde_json::from_value(obj.get("_id")?.clone()).ok(),
            other => serde_json::from_value(other.clone()).ok(),
        }
    }

    /// Human readable label used by list views.
    pub fn display_name(&self) -> String {
        let text = |key: &str| self.fields.get(key).and_then(Value::as_str);

        if let Some(name) = text("name") {
            return name.to_string();
        }

        match (text("firstName"), text("lastName")) {
            (Some(first), Some(last)) => return format!("{first} {last}"),
            (Some(first), None) => return first.to_string(),
            _ => {}
        }

        text("username")
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_unknown_fields() {
        let raw = json!({"_id": "a1", "name": "Dell XPS", "type": "Laptop", "serial": "X-1"});
        let record: Record = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(record.id, RecordId::Text("a1".into()));
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn kind_is_stringified() {
        let text = Record::new(1).with_field("type", "Monitor");
        let number = Record::new(2).with_field("type", 3);
        let missing = Record::new(3);

        assert_eq!(text.kind(), Some("Monitor".into()));
        assert_eq!(number.kind(), Some("3".into()));
        assert_eq!(missing.kind(), None);
    }

    #[test]
    fn staff_assignment() {
        let staff = Record::new("s1").with_field("name", "Ada");
        let mut equipment = Record::new(1).with_field("staff", Value::Null);

        assert!(equipment.staff().is_none());

        equipment.set_staff(Some(&staff));
        assert_eq!(equipment.staff_id(), Some(RecordId::Text("s1".into())));
        assert_eq!(equipment.get("staff").unwrap()["name"], "Ada");

        equipment.set_staff(None);
        assert_eq!(equipment.get("staff"), Some(&Value::Null));
        assert!(equipment.staff_id().is_none());
    }

    #[test]
    fn staff_id_from_reference() {
        let equipment = Record::new(1).with_field("staff", 42);

        assert_eq!(equipment.staff_id(), Some(RecordId::Number(42)));
    }

    #[test]
    fn display_name_fallbacks() {
        assert_eq!(Record::new(1).with_field("name", "Scope").display_name(), "Scope");
        assert_eq!(
            Record::new(2)
                .with_field("firstName", "Grace")
                .with_field("lastName", "Hopper")
                .display_name(),
            "Grace Hopper"
        );
        assert_eq!(Record::new(3).with_field("username", "gh").display_name(), "gh");
        assert_eq!(Record::new(4).display_name(), "#4");
    }

    #[test]
    fn id_from_text() {
        assert_eq!(RecordId::from("12"), RecordId::Number(12));
        assert_eq!(RecordId::from("abc"), RecordId::Text("abc".into()));
    }
}
