pub mod shared;

pub use shared::data_table::{field_from_serialize, CellValue, DataRow, RowId, SelectedIds};
