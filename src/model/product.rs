use serde::{Deserialize, Serialize};

pub type ProductId = i64;

pub const NAME_REQUIRED: &str = "Name is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_POSITIVE: &str = "Price must be a positive number";
pub const QUANTITY_REQUIRED: &str = "Quantity is required";
pub const QUANTITY_POSITIVE: &str = "Quantity must be a positive number";

/// A catalog entry as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    pub fn in_category(&self, category: &str) -> bool {
        category_matches(&self.category, &category.to_lowercase())
    }
}

/// Case-insensitive comparison against a category that is already lowercase
pub fn category_matches(category: &str, lowered: &str) -> bool {
    category.chars().flat_map(char::to_lowercase).eq(lowered.chars())
}

/// Validated input for a new product. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Request body for POST and PUT. Every field is optional on the wire;
/// which ones must be present depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ProductPayload {
    /// Check every constraint required to create a product. Errors come back in
    /// field declaration order: name, category, price, quantity.
    pub fn validate_new(&self) -> Result<NewProduct, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.clone().filter(|name| !is_blank(name));
        if name.is_none() {
            errors.push(NAME_REQUIRED.to_string());
        }
        let category = self.category.clone().filter(|category| !is_blank(category));
        if category.is_none() {
            errors.push(CATEGORY_REQUIRED.to_string());
        }
        let price = match self.price {
            None => {
                errors.push(PRICE_REQUIRED.to_string());
                None
            }
            Some(price) if !(price > 0.0) => {
                errors.push(PRICE_POSITIVE.to_string());
                None
            }
            price => price,
        };
        let quantity = match self.quantity {
            None => {
                errors.push(QUANTITY_REQUIRED.to_string());
                None
            }
            Some(quantity) if quantity <= 0 => {
                errors.push(QUANTITY_POSITIVE.to_string());
                None
            }
            quantity => quantity,
        };

        match (name, category, price, quantity) {
            (Some(name), Some(category), Some(price), Some(quantity)) => Ok(NewProduct {
                name,
                category,
                price,
                quantity,
            }),
            _ => Err(errors),
        }
    }

    /// Check only the fields that are present. Absent fields keep their stored
    /// value on update, so they are not required here.
    pub fn validate_patch(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.as_deref().is_some_and(is_blank) {
            errors.push(NAME_REQUIRED.to_string());
        }
        if self.category.as_deref().is_some_and(is_blank) {
            errors.push(CATEGORY_REQUIRED.to_string());
        }
        if self.price.is_some_and(|price| !(price > 0.0)) {
            errors.push(PRICE_POSITIVE.to_string());
        }
        if self.quantity.is_some_and(|quantity| quantity <= 0) {
            errors.push(QUANTITY_POSITIVE.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
