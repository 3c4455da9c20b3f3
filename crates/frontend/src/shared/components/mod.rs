pub mod data_table;
pub mod table;
pub mod table_checkbox;
pub mod tabs;

pub use data_table::{AddAction, BatchAction, Column, DataTable, Selection, SelectionMode};
pub use tabs::{Tab, TabList, TabPanel, Tabs};
