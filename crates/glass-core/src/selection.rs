//! Product selection state behind the product-detail modal.

use crate::product::ProductDetails;

/// Whether the product-detail modal is showing, and for which product.
///
/// A single variant carries both facts, so an open modal always has a
/// product and a closed one never does.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProductDetails),
}

impl ModalState {
    /// Show `product` in the modal, replacing any current selection.
    pub fn open_modal(&mut self, product: ProductDetails) {
        *self = Self::Open(product);
    }

    /// Hide the modal and clear the selection. Closing twice is a no-op.
    pub fn close_modal(&mut self) {
        *self = Self::Closed;
    }

    pub fn selected_product(&self) -> Option<&ProductDetails> {
        match self {
            Self::Open(product) => Some(product),
            Self::Closed => None,
        }
    }

    pub fn show_modal(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> ProductDetails {
        ProductDetails {
            product_id: 1,
            product_name: "Door A".to_string(),
            product_image: None,
            category: "doors".to_string(),
            product_type: "standard".to_string(),
            product_price: 100.0,
            product_stock: 5,
            product_description: None,
        }
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = ModalState::default();
        assert!(!state.show_modal());
        assert_eq!(state.selected_product(), None);
    }

    #[test]
    fn test_open_then_close() {
        let mut state = ModalState::default();

        state.open_modal(door());
        assert!(state.show_modal());
        assert_eq!(state.selected_product(), Some(&door()));

        state.close_modal();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn test_open_replaces_selection() {
        let mut state = ModalState::default();
        state.open_modal(door());

        let window = ProductDetails {
            product_id: 2,
            product_name: "Window B".to_string(),
            category: "windows".to_string(),
            ..door()
        };
        state.open_modal(window.clone());
        assert_eq!(state.selected_product(), Some(&window));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut once = ModalState::Open(door());
        once.close_modal();

        let mut twice = ModalState::Open(door());
        twice.close_modal();
        twice.close_modal();

        assert_eq!(once, twice);
        assert!(!twice.show_modal());
    }
}
