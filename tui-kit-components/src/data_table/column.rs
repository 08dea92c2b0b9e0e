//! Column descriptors and cell values

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use ratatui::layout::Constraint;

use crate::error::ConfigError;

/// An opaque record keyed by field name, for tables built from JSON rows
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A single cell's value as seen by sorting and default rendering
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Null renders as an empty string; numbers print without a trailing `.0`
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Text(b.to_string()),
            Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> CellValue>;
type CellRenderer<T> = Box<dyn Fn(&CellValue, &T) -> String>;

/// Describes one table column: where its values come from and how they show
pub struct Column<T> {
    pub key: String,
    pub title: String,
    pub sortable: bool,
    pub width: Constraint,
    accessor: Accessor<T>,
    render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: Constraint::Fill(1),
            accessor: Box::new(accessor),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    /// Replace the default stringification for this column's cells
    pub fn render_with(mut self, render: impl Fn(&CellValue, &T) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn value(&self, record: &T) -> CellValue {
        (self.accessor)(record)
    }

    /// Text shown in this column's cell for `record`
    pub fn cell_text(&self, record: &T) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }
}

impl Column<Record> {
    /// A column reading `record[key]`; missing fields are null
    pub fn field(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::new(key, title, move |record: &Record| {
            record.get(&field).map_or(CellValue::Null, CellValue::from)
        })
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

/// A validated, immutable column sequence
///
/// Non-empty, with unique keys.
pub struct Columns<T> {
    columns: Vec<Column<T>>,
}

impl<T> Columns<T> {
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, ConfigError> {
        if columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.key.as_str())) {
            return Err(ConfigError::DuplicateColumnKey(dup.key.clone()));
        }
        Ok(Self { columns })
    }

    pub fn by_key(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }
}

impl<T> fmt::Debug for Columns<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<T> Deref for Columns<T> {
    type Target = [Column<T>];

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct User {
        name: &'static str,
        age: Option<u32>,
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::from("Ann").to_string(), "Ann");
        assert_eq!(CellValue::from(30u32).to_string(), "30");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(None::<u32>), CellValue::Null);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from(&json!(null)), CellValue::Null);
        assert_eq!(CellValue::from(&json!(22)), CellValue::Number(22.0));
        assert_eq!(CellValue::from(&json!("a")), CellValue::Text("a".into()));
        assert_eq!(CellValue::from(&json!(true)), CellValue::Text("true".into()));
    }

    #[test]
    fn test_cell_text_default_and_custom() {
        let plain = Column::new("age", "Age", |u: &User| u.age.into());
        let custom = Column::new("name", "Name", |u: &User| u.name.into())
            .render_with(|v, u| format!("{v} ({})", u.age.unwrap_or(0)));

        let ann = User { name: "Ann", age: None };
        assert_eq!(plain.cell_text(&ann), "");
        assert_eq!(custom.cell_text(&ann), "Ann (0)");
    }

    #[test]
    fn test_field_column() {
        let col = Column::field("email", "Email");
        let record = json!({ "email": "a@example.com" });
        let record = record.as_object().unwrap();
        assert_eq!(col.cell_text(record), "a@example.com");
        assert_eq!(col.value(&Record::new()), CellValue::Null);
    }

    #[test]
    fn test_columns_rejects_empty() {
        let err = Columns::<User>::new(Vec::new()).unwrap_err();
        assert_eq!(err, ConfigError::NoColumns);
    }

    #[test]
    fn test_columns_rejects_duplicate_keys() {
        let err = Columns::new(vec![
            Column::new("name", "Name", |u: &User| u.name.into()),
            Column::new("name", "Again", |u: &User| u.name.into()),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateColumnKey("name".into()));
    }

    #[test]
    fn test_columns_debug_without_row_debug() {
        // `User` has no Debug impl
        let cols = Columns::new(vec![Column::new("name", "Name", |u: &User| u.name.into())]).unwrap();
        let out = format!("{cols:?}");
        assert!(out.contains("key: \"name\""));
        assert!(out.contains("sortable: false"));
    }

    #[test]
    fn test_columns_lookup() {
        let cols = Columns::new(vec![
            Column::new("name", "Name", |u: &User| u.name.into()).sortable(),
            Column::new("age", "Age", |u: &User| u.age.into()),
        ])
        .unwrap();
        assert_eq!(cols.len(), 2);
        assert!(cols.by_key("name").is_some_and(|c| c.sortable));
        assert!(cols.by_key("email").is_none());
    }
}
