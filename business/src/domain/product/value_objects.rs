use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Inactive,
        ProductStatus::Discontinued,
    ];
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Active => write!(f, "ACTIVE"),
            ProductStatus::Inactive => write!(f, "INACTIVE"),
            ProductStatus::Discontinued => write!(f, "DISCONTINUED"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(ProductStatus::Active),
            "INACTIVE" => Ok(ProductStatus::Inactive),
            "DISCONTINUED" => Ok(ProductStatus::Discontinued),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

/// Exact-match criteria for listing products. Unset fields match
/// everything; set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.rating.is_none()
    }

    /// In-memory counterpart of the SQL predicate used by the repository.
    pub fn matches(&self, product: &super::model::Product) -> bool {
        self.name.as_ref().is_none_or(|n| *n == product.name)
            && self.category.as_ref().is_none_or(|c| *c == product.category)
            && self.price.is_none_or(|p| p == product.price)
            && self.rating.is_none_or(|r| r == product.rating)
    }
}
