use crate::model::{Product, ProductPayload};

/// Overwrite each field of `product` for which `patch` carries a value.
/// Absent fields are left as stored. The id is never merged.
pub fn apply_patch(product: &mut Product, patch: &ProductPayload) {
    if let Some(name) = &patch.name {
        product.name = name.clone();
    }
    if let Some(category) = &patch.category {
        product.category = category.clone();
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    if let Some(quantity) = patch.quantity {
        product.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Product {
        Product {
            id: 1,
            name: "A".to_string(),
            category: "Toys".to_string(),
            price: 5.0,
            quantity: 10,
        }
    }

    #[test]
    fn only_supplied_fields_change() {
        let mut product = stored();
        apply_patch(
            &mut product,
            &ProductPayload {
                price: Some(7.5),
                ..Default::default()
            },
        );

        assert_eq!(product.price, 7.5);
        assert_eq!(product.name, "A");
        assert_eq!(product.category, "Toys");
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut product = stored();
        apply_patch(&mut product, &ProductPayload::default());
        assert_eq!(product, stored());
    }

    #[test]
    fn id_in_patch_is_ignored() {
        let mut product = stored();
        apply_patch(
            &mut product,
            &ProductPayload {
                id: Some(99),
                name: Some("B".to_string()),
                category: Some("Games".to_string()),
                price: Some(1.0),
                quantity: Some(2),
            },
        );

        assert_eq!(
            product,
            Product {
                id: 1,
                name: "B".to_string(),
                category: "Games".to_string(),
                price: 1.0,
                quantity: 2,
            }
        );
    }
}
