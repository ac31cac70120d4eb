pub mod sheet;

pub use sheet::{Cell, CellStyle, CellValue, SheetLayout};
