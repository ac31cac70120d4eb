pub mod models;
pub mod services;

pub use models::SheetLayout;
pub use services::{ExportFormatter, RenderedExport};
