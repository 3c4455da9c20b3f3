//! Framework-free data model shared by table widgets.
//!
//! Rows are addressed by an integer id; cell values are read by column key.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Identifier of a table row
pub type RowId = i64;

/// Set of selected row ids. Iteration follows insertion order.
pub type SelectedIds = IndexSet<RowId>;

/// Primitive value displayed in a table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Maps a primitive JSON value. Arrays and objects have no cell
    /// representation and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Some(CellValue::Null),
            Value::Bool(b) => Some(CellValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(CellValue::Integer)
                .or_else(|| n.as_f64().map(CellValue::Float)),
            Value::String(s) => Some(CellValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// Record that can be shown as a table row
pub trait DataRow {
    /// Unique id of the row, used for selection and as the iteration key
    fn id(&self) -> RowId;

    /// Value of the field named `key`, `None` if there is no such field
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Reads a field by name from any serializable row.
///
/// Handy for implementing [`DataRow::field`]:
///
/// ```
/// use contracts::{field_from_serialize, CellValue, DataRow, RowId};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { id: i64, name: String }
///
/// impl DataRow for User {
///     fn id(&self) -> RowId { self.id }
///     fn field(&self, key: &str) -> Option<CellValue> { field_from_serialize(self, key) }
/// }
///
/// let user = User { id: 7, name: "Ann".into() };
/// assert_eq!(user.field("name"), Some(CellValue::Text("Ann".into())));
/// ```
pub fn field_from_serialize<T: Serialize>(row: &T, key: &str) -> Option<CellValue> {
    let value = serde_json::to_value(row).ok()?;
    value.get(key).and_then(CellValue::from_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Invoice {
        id: i64,
        number: String,
        amount: f64,
        paid: bool,
        comment: Option<String>,
        lines: Vec<i32>,
    }

    fn invoice() -> Invoice {
        Invoice {
            id: 42,
            number: "INV-001".to_string(),
            amount: 1250.5,
            paid: false,
            comment: None,
            lines: vec![1, 2],
        }
    }

    #[test]
    fn test_field_from_serialize_primitives() {
        let row = invoice();
        assert_eq!(field_from_serialize(&row, "id"), Some(CellValue::Integer(42)));
        assert_eq!(
            field_from_serialize(&row, "number"),
            Some(CellValue::Text("INV-001".to_string()))
        );
        assert_eq!(field_from_serialize(&row, "amount"), Some(CellValue::Float(1250.5)));
        assert_eq!(field_from_serialize(&row, "paid"), Some(CellValue::Bool(false)));
        assert_eq!(field_from_serialize(&row, "comment"), Some(CellValue::Null));
    }

    #[test]
    fn test_field_from_serialize_missing_and_nested() {
        let row = invoice();
        assert_eq!(field_from_serialize(&row, "unknown"), None);
        assert_eq!(field_from_serialize(&row, "lines"), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from_json(&json!(-3)), Some(CellValue::Integer(-3)));
        assert_eq!(CellValue::from_json(&json!(0.25)), Some(CellValue::Float(0.25)));
        assert_eq!(CellValue::from_json(&json!({"a": 1})), None);
        assert_eq!(CellValue::from_json(&json!(null)), Some(CellValue::Null));
    }

    #[test]
    fn test_selected_ids_keep_insertion_order() {
        let mut selected = SelectedIds::new();
        selected.insert(5);
        selected.insert(2);
        selected.insert(9);
        selected.shift_remove(&2);
        selected.insert(2);
        assert_eq!(selected.iter().copied().collect::<Vec<_>>(), vec![5, 9, 2]);
    }

    #[test]
    fn test_option_into_cell_value() {
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".to_string()));
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
    }
}
