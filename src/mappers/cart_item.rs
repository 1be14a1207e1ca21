use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::cart_item::{ActiveModel as CartItemActiveModel, CartItemRecord};
use crate::errors::AppError;
use crate::models::{CartItem, Member, Product};

/// Rebuilds a cart item with its member and product from a joined read row.
pub fn to_domain(record: CartItemRecord) -> CartItem {
    let product = Product::with_id(
        record.product_id,
        record.product_name,
        record.product_price,
        record.product_image_url,
    );
    let member = Member::with_id(record.member_id, record.member_email, record.member_password);

    CartItem::with_id(record.id, record.quantity, product, member)
}

/// Flattens a cart item into an active record holding the foreign keys.
///
/// The member and product must already be persisted; a cart item cannot
/// reference rows that do not exist yet.
pub fn to_record(item: &CartItem) -> Result<CartItemActiveModel, AppError> {
    let member_id = item.member.id.ok_or_else(|| {
        AppError::InvalidRecord("cart item references a member without an id".to_string())
    })?;
    let product_id = item.product.id.ok_or_else(|| {
        AppError::InvalidRecord("cart item references a product without an id".to_string())
    })?;

    Ok(CartItemActiveModel {
        id: match item.id {
            Some(id) => Set(id),
            None => NotSet,
        },
        member_id: Set(member_id),
        product_id: Set(product_id),
        quantity: Set(item.quantity),
    })
}
