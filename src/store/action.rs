//! Discrete user actions sent by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::catalog::{BrandFilter, ProductId, SortKey};

/// One user action. Wire form is internally tagged, e.g.
/// `{"type": "update-quantity", "productId": 3, "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    AddToCart { product_id: ProductId },
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    RemoveFromCart { product_id: ProductId },
    ClearCart,
    ToggleWishlist { product_id: ProductId },
    SetSearch { search: String },
    SetBrand { brand: BrandFilter },
    SetSort { sort: SortKey },
    ToggleTheme,
    OpenCart,
    CloseCart,
}

impl Action {
    /// Whether the action changes the cart (and so rewrites the cart slot).
    pub fn mutates_cart(&self) -> bool {
        matches!(
            self,
            Action::AddToCart { .. }
                | Action::UpdateQuantity { .. }
                | Action::RemoveFromCart { .. }
                | Action::ClearCart
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let action: Action =
            serde_json::from_value(json!({"type": "update-quantity", "productId": 3, "quantity": -1}))
                .unwrap();
        assert_eq!(
            action,
            Action::UpdateQuantity {
                product_id: ProductId(3),
                quantity: -1
            }
        );
        assert!(action.mutates_cart());

        let action: Action =
            serde_json::from_value(json!({"type": "set-sort", "sort": "price-low"})).unwrap();
        assert_eq!(
            action,
            Action::SetSort {
                sort: SortKey::PriceAsc
            }
        );

        let action: Action =
            serde_json::from_value(json!({"type": "set-brand", "brand": "All"})).unwrap();
        assert_eq!(
            action,
            Action::SetBrand {
                brand: BrandFilter::All
            }
        );

        let action: Action = serde_json::from_value(json!({"type": "toggle-theme"})).unwrap();
        assert!(!action.mutates_cart());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_value::<Action>(json!({"type": "checkout"})).is_err());
    }
}
