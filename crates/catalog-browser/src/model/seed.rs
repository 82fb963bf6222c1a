//! The catalog shipped with the application.

use super::Product;

/// The default catalog, in listing order.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "PX5 pro", 599.99, "Next Gen gaming console by PX"),
        Product::new(2, "Phone X", 39.99, "Latest Smart Phone by X."),
        Product::new(3, "Shampoo X", 29.99, "Best Shampoo by X company."),
    ]
}
