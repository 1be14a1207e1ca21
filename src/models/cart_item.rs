use serde::{Deserialize, Serialize};

use super::{Member, Product};

const INITIAL_QUANTITY: i32 = 1;

/// A product placed in a member's cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Absent until the cart item has been persisted.
    pub id: Option<i64>,
    pub quantity: i32,
    pub product: Product,
    pub member: Member,
}

impl CartItem {
    /// A freshly added cart item starts with a quantity of one.
    pub fn new(product: Product, member: Member) -> Self {
        Self {
            id: None,
            quantity: INITIAL_QUANTITY,
            product,
            member,
        }
    }

    pub fn with_id(id: i64, quantity: i32, product: Product, member: Member) -> Self {
        Self {
            id: Some(id),
            quantity,
            product,
            member,
        }
    }
}
