use crate::model::{category_matches, Product};

/// Search criteria over the catalog. Every supplied criterion must hold;
/// an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// Predicate for scanning many products; the category is lowercased once per call.
    pub fn matcher(&self) -> impl Fn(&Product) -> bool + '_ {
        let category = self.category.as_deref().map(str::to_lowercase);

        move |product: &Product| {
            category
                .as_deref()
                .map_or(true, |category| category_matches(&product.category, category))
                && self.min_price.map_or(true, |min| product.price >= min)
                && self.max_price.map_or(true, |max| product.price <= max)
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matcher()(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str, price: f64) -> Product {
        Product {
            id,
            name: format!("item-{}", id),
            category: category.to_string(),
            price,
            quantity: 1,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&product(1, "Toys", 5.0)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = ProductFilter {
            category: None,
            min_price: Some(10.0),
            max_price: Some(20.0),
        };
        assert!(filter.matches(&product(1, "Toys", 10.0)));
        assert!(filter.matches(&product(2, "Toys", 20.0)));
        assert!(!filter.matches(&product(3, "Toys", 9.99)));
        assert!(!filter.matches(&product(4, "Toys", 20.01)));
    }

    #[test]
    fn matcher_ignores_category_case_on_both_sides() {
        let filter = ProductFilter::by_category("ELECTRONICS");
        let matches = filter.matcher();
        assert!(matches(&product(1, "electronics", 1.0)));
        assert!(matches(&product(2, "Electronics", 1.0)));
        assert!(!matches(&product(3, "Books", 1.0)));
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let filter = ProductFilter {
            category: Some("toys".to_string()),
            min_price: Some(10.0),
            max_price: None,
        };
        assert!(filter.matches(&product(1, "Toys", 12.0)));
        assert!(!filter.matches(&product(2, "Books", 12.0)));
        assert!(!filter.matches(&product(3, "Toys", 8.0)));
    }
}
