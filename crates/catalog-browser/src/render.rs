//! Plain-text rendering of the views, used by the command-line shell.

use crate::model::Product;
use crate::views::{DetailState, ListState, ProductCard};
use std::fmt::Write;

pub fn price(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn card(card: &ProductCard) -> String {
    let product = card.product();
    let mut out = format!("[{}] {} {}", product.id, product.name, price(product.price));
    if !product.description.is_empty() {
        let _ = write!(out, "\n    {}", product.description);
    }
    out
}

pub fn list(state: &ListState, cards: &[ProductCard]) -> String {
    match state {
        ListState::Idle => String::new(),
        ListState::Loading => "Loading products…".to_string(),
        ListState::Failed(reason) => format!("Could not load products: {reason}\n(try again)"),
        ListState::Loaded(_) if cards.is_empty() => "No products available.".to_string(),
        ListState::Loaded(_) => {
            let mut out = String::from("Products\n========");
            for c in cards {
                let _ = write!(out, "\n{}", card(c));
            }
            out
        }
    }
}

pub fn detail(state: &DetailState) -> String {
    match state {
        DetailState::Idle => String::new(),
        DetailState::Resolving(id) => format!("Loading product {id}…"),
        DetailState::Found(product) => product_detail(product),
        DetailState::NotFound => "Product not found.".to_string(),
        DetailState::Failed(reason) => format!("Could not load product: {reason}\n(try again)"),
    }
}

fn product_detail(product: &Product) -> String {
    let mut out = format!("{}\n{}\nPrice: {}", product.name, "-".repeat(product.name.chars().count()), price(product.price));
    if !product.description.is_empty() {
        let _ = write!(out, "\n\n{}", product.description);
    }
    out
}
