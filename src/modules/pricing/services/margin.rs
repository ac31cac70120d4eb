use rust_decimal::Decimal;

/// Profit on a single unit: selling price minus cost price.
///
/// Not floored at zero; loss-making sales keep their negative margin.
pub fn compute_profit_margin(cost_price: Decimal, selling_price: Decimal) -> Decimal {
    selling_price - cost_price
}
