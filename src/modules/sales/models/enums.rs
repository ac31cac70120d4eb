use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category of a variant or sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "mobile", alias = "Mobile")]
    Mobile,
    #[serde(rename = "accessories", alias = "Accessories")]
    Accessories,
    #[serde(rename = "tablets", alias = "Tablets")]
    Tablets,
    #[serde(rename = "smartwatches", alias = "Smartwatches")]
    Smartwatches,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Accessories => "accessories",
            Category::Tablets => "tablets",
            Category::Smartwatches => "smartwatches",
        }
    }
}

/// Brands stocked by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Vivo,
    Oppo,
    Apple,
    Samsung,
    OnePlus,
    Xiaomi,
    Redmi,
    Realme,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Vivo => "Vivo",
            Brand::Oppo => "Oppo",
            Brand::Apple => "Apple",
            Brand::Samsung => "Samsung",
            Brand::OnePlus => "OnePlus",
            Brand::Xiaomi => "Xiaomi",
            Brand::Redmi => "Redmi",
            Brand::Realme => "Realme",
        }
    }
}

/// Store locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "Mahadevapura")]
    Mahadevapura,
    #[serde(rename = "Chennasandra")]
    Chennasandra,
    #[serde(rename = "TC Palya")]
    TcPalya,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Mahadevapura => "Mahadevapura",
            Branch::Chennasandra => "Chennasandra",
            Branch::TcPalya => "TC Palya",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "Card")]
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Finance")]
    Finance,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Finance => "Finance",
        }
    }
}

/// Consumer-finance partners available for EMI purchases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinanceProvider {
    #[serde(rename = "Bajaj Finserv")]
    BajajFinserv,
    #[serde(rename = "TVS Credit")]
    TvsCredit,
    #[serde(rename = "IDFC")]
    Idfc,
    #[serde(rename = "Home Credit")]
    HomeCredit,
}

impl FinanceProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceProvider::BajajFinserv => "Bajaj Finserv",
            FinanceProvider::TvsCredit => "TVS Credit",
            FinanceProvider::Idfc => "IDFC",
            FinanceProvider::HomeCredit => "Home Credit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Blue,
    Purple,
    Pink,
    Gold,
    Silver,
    Green,
    Red,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
            Color::Pink => "Pink",
            Color::Gold => "Gold",
            Color::Silver => "Silver",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FinanceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
