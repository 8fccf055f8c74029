use crate::model::{CategoryAggregate, Product};

/// Mean price and total quantity over `products`, or `None` when there is nothing to average
pub fn aggregate(products: &[Product]) -> Option<CategoryAggregate> {
    if products.is_empty() {
        return None;
    }

    let total_price: f64 = products.iter().map(|product| product.price).sum();
    let total_quantity: i64 = products
        .iter()
        .map(|product| i64::from(product.quantity))
        .sum();

    Some(CategoryAggregate {
        average_price: total_price / products.len() as f64,
        total_quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, quantity: i32) -> Product {
        Product {
            id,
            name: format!("item-{}", id),
            category: "C".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn averages_price_and_sums_quantity() {
        let products = vec![
            product(1, 10.0, 1),
            product(2, 20.0, 2),
            product(3, 30.0, 3),
        ];

        let summary = aggregate(&products).unwrap();
        assert_eq!(summary.average_price, 20.0);
        assert_eq!(summary.total_quantity, 6);
    }

    #[test]
    fn empty_input_has_no_aggregate() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn quantity_sum_does_not_overflow_i32() {
        let products = vec![product(1, 1.0, i32::MAX), product(2, 1.0, i32::MAX)];
        let summary = aggregate(&products).unwrap();
        assert_eq!(summary.total_quantity, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let summary = aggregate(&[product(1, 4.0, 2)]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"averagePrice": 4.0, "totalQuantity": 2})
        );
    }
}
