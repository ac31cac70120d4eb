pub mod create_sale;
pub mod enums;
pub mod filter;
pub mod sale;
pub mod variant;

pub use create_sale::CreateSaleRequest;
pub use enums::{Branch, Brand, Category, Color, FinanceProvider, PaymentMethod};
pub use filter::{
    DateRange, ExportSalesRequest, RecipientRequest, SalesFilter, SalesStatistics,
    SearchSalesRequest,
};
pub use sale::{CustomerInfo, Sale};
pub use variant::{Variant, VariantAttributes, VariantDimensions};
