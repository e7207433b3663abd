use super::errors::ProductError;
use super::value_objects::ProductStatus;

pub const MAX_CATEGORY_LENGTH: usize = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub img_url: String,
    pub category: String,
    pub status: ProductStatus,
    pub likes: i32,
}

/// Client-editable part of a product: everything except `id` and `likes`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub img_url: String,
    pub category: String,
    pub status: ProductStatus,
}

impl ProductFields {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if self.category.chars().count() > MAX_CATEGORY_LENGTH {
            return Err(ProductError::CategoryTooLong(MAX_CATEGORY_LENGTH));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        if !self.rating.is_finite() {
            return Err(ProductError::InvalidRating);
        }

        Ok(())
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, fields: ProductFields, likes: i32) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            rating: fields.rating,
            img_url: fields.img_url,
            category: fields.category,
            status: fields.status,
            likes,
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            rating: self.rating,
            img_url: self.img_url.clone(),
            category: self.category.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_fields() -> ProductFields {
        ProductFields {
            name: "Standing Desk".to_string(),
            description: "Height adjustable".to_string(),
            price: 349.99,
            rating: 4.2,
            img_url: "https://example.com/desk.png".to_string(),
            category: "furniture".to_string(),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn should_accept_valid_fields() {
        assert!(valid_fields().validate().is_ok());
    }

    #[test]
    fn should_reject_blank_name() {
        let fields = ProductFields {
            name: "   ".to_string(),
            ..valid_fields()
        };
        assert!(matches!(fields.validate(), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_negative_price() {
        let fields = ProductFields {
            price: -1.0,
            ..valid_fields()
        };
        assert!(matches!(fields.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_non_finite_rating() {
        let fields = ProductFields {
            rating: f64::NAN,
            ..valid_fields()
        };
        assert!(matches!(fields.validate(), Err(ProductError::InvalidRating)));
    }

    #[test]
    fn should_count_category_length_in_characters() {
        let fields = ProductFields {
            category: "é".repeat(MAX_CATEGORY_LENGTH),
            ..valid_fields()
        };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn should_expose_fields_of_persisted_product() {
        let product = Product::from_repository(9, valid_fields(), 3);
        assert_eq!(product.id, 9);
        assert_eq!(product.likes, 3);
        assert_eq!(product.fields(), valid_fields());
    }

    proptest! {
        #[test]
        fn category_within_limit_is_accepted(len in 0usize..=MAX_CATEGORY_LENGTH) {
            let fields = ProductFields { category: "x".repeat(len), ..valid_fields() };
            prop_assert!(fields.validate().is_ok());
        }

        #[test]
        fn category_over_limit_is_rejected(len in (MAX_CATEGORY_LENGTH + 1)..1000usize) {
            let fields = ProductFields { category: "x".repeat(len), ..valid_fields() };
            let rejected = matches!(
                fields.validate(),
                Err(ProductError::CategoryTooLong(MAX_CATEGORY_LENGTH))
            );
            prop_assert!(rejected);
        }
    }
}
