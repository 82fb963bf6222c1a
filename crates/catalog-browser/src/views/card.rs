//! Card presenter: one product, one "view details" signal.

use crate::model::{Product, ProductId};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Sending half of a selection channel. Whoever composes cards owns the receiver.
pub type SelectionSender = mpsc::UnboundedSender<ProductId>;

/// Receiving half of a selection channel.
pub type SelectionReceiver = mpsc::UnboundedReceiver<ProductId>;

/// Display unit bound to a single product.
///
/// A card knows nothing about routing or the store. Activating it only emits the
/// product's id on the channel it was built with, so the same card works in a list,
/// in search results, or anywhere else a product is shown.
#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    on_select: SelectionSender,
}

impl ProductCard {
    pub fn new(product: Product, on_select: SelectionSender) -> Self {
        Self { product, on_select }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Emits this card's product id. Returns `false` if nobody is listening any more.
    pub fn activate(&self) -> bool {
        let id = self.product.id;
        match self.on_select.send(id) {
            Ok(()) => {
                debug!(%id, "Card selected");
                true
            }
            Err(_) => {
                warn!(%id, "Card selected but no one is listening");
                false
            }
        }
    }
}
