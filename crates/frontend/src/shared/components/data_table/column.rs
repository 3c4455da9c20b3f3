use contracts::{CellValue, DataRow};
use leptos::prelude::*;
use std::collections::HashSet;

/// Column descriptor of a [`DataTable`](super::DataTable).
///
/// Without a custom renderer the cell shows `row.field(key)` as is.
pub struct Column<T: 'static> {
    pub key: String,
    pub label: String,
    pub render: Option<Callback<T, AnyView>>,
}

impl<T: 'static> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            render: self.render,
        }
    }
}

impl<T> Column<T>
where
    T: DataRow + Clone + Send + Sync + 'static,
{
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
        }
    }

    /// Sets a custom cell renderer
    pub fn render<F, V>(mut self, render: F) -> Self
    where
        F: Fn(T) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        self.render = Some(Callback::new(move |row: T| render(row).into_any()));
        self
    }

    /// Raw field value used when there is no custom renderer
    pub fn value(&self, row: &T) -> Option<CellValue> {
        row.field(&self.key)
    }

    pub fn cell(&self, row: &T) -> AnyView {
        match self.render {
            Some(render) => render.run(row.clone()),
            None => cell_view(self.value(row)),
        }
    }
}

/// Displays a primitive value without extra formatting
pub fn cell_view(value: Option<CellValue>) -> AnyView {
    match value {
        Some(CellValue::Text(text)) => text.into_any(),
        Some(CellValue::Integer(n)) => n.into_any(),
        Some(CellValue::Float(n)) => n.into_any(),
        Some(CellValue::Bool(b)) => b.to_string().into_any(),
        Some(CellValue::Null) | None => ().into_any(),
    }
}

/// Keys that occur more than once, in order of their second occurrence
pub fn duplicate_column_keys<T: 'static>(columns: &[Column<T>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) && !duplicates.contains(&column.key) {
            duplicates.push(column.key.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{field_from_serialize, RowId};
    use serde::Serialize;

    #[derive(Clone, Serialize)]
    struct Product {
        id: i64,
        name: String,
        price: f64,
        stock: i64,
    }

    impl DataRow for Product {
        fn id(&self) -> RowId {
            self.id
        }

        fn field(&self, key: &str) -> Option<CellValue> {
            field_from_serialize(self, key)
        }
    }

    fn product() -> Product {
        Product {
            id: 1,
            name: "Кружка".to_string(),
            price: 349.9,
            stock: 12,
        }
    }

    #[test]
    fn test_value_reads_field_by_key() {
        let row = product();
        assert_eq!(
            Column::<Product>::new("name", "Name").value(&row),
            Some(CellValue::Text("Кружка".to_string()))
        );
        assert_eq!(
            Column::<Product>::new("stock", "Stock").value(&row),
            Some(CellValue::Integer(12))
        );
        assert_eq!(
            Column::<Product>::new("price", "Price").value(&row),
            Some(CellValue::Float(349.9))
        );
        assert_eq!(Column::<Product>::new("missing", "?").value(&row), None);
    }

    #[test]
    fn test_render_is_optional() {
        let plain = Column::<Product>::new("name", "Name");
        assert!(plain.render.is_none());

        let custom = Column::<Product>::new("price", "Price").render(|p| format!("{:.2}", p.price));
        assert!(custom.render.is_some());
        assert_eq!(custom.key, "price");
    }

    #[test]
    fn test_cell_outlives_row_and_column() {
        let cells: Vec<AnyView> = {
            let row = product();
            let columns = vec![
                Column::<Product>::new("name", "Name"),
                Column::<Product>::new("stock", "Stock").render(|p| format!("{} pcs", p.stock)),
            ];
            columns.iter().map(|col| col.cell(&row)).collect()
        };
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn test_duplicate_column_keys() {
        let columns = vec![
            Column::<Product>::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("id", "Id again"),
            Column::new("id", "And again"),
        ];
        assert_eq!(duplicate_column_keys(&columns), vec!["id".to_string()]);
        assert!(duplicate_column_keys(&columns[..2]).is_empty());
    }
}
