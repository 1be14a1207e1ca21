use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::entities::cart_item::{
    self, ActiveModel as CartItemActiveModel, CartItemRecord, Column, Entity as CartItems,
};
use crate::entities::{member, product};
use crate::errors::AppError;

/// Row access for the `cart_items` table.
///
/// Reads return [`CartItemRecord`] rows joined with the owning member and
/// product so a cart item can be rebuilt in one round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartItemDao: Send + Sync {
    /// Inserts a cart item row and returns the generated id.
    async fn insert(&self, record: CartItemActiveModel) -> Result<i64, AppError>;

    async fn update_quantity(&self, id: i64, quantity: i32) -> Result<(), AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItemRecord>, AppError>;

    async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<CartItemRecord>, AppError>;

    async fn find_all_by_ids(&self, ids: &[i64]) -> Result<Vec<CartItemRecord>, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Sea-ORM backed cart item row access.
#[derive(Debug, Clone)]
pub struct SeaOrmCartItemDao {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCartItemDao {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Base select joining the member and product columns into a flat row.
    fn record_select() -> Select<CartItems> {
        CartItems::find()
            .join(JoinType::InnerJoin, cart_item::Relation::Member.def())
            .join(JoinType::InnerJoin, cart_item::Relation::Product.def())
            .select_only()
            .column(Column::Id)
            .column(Column::Quantity)
            .column(Column::MemberId)
            .column_as(member::Column::Email, "member_email")
            .column_as(member::Column::Password, "member_password")
            .column(Column::ProductId)
            .column_as(product::Column::Name, "product_name")
            .column_as(product::Column::Price, "product_price")
            .column_as(product::Column::ImageUrl, "product_image_url")
    }
}

#[async_trait]
impl CartItemDao for SeaOrmCartItemDao {
    async fn insert(&self, record: CartItemActiveModel) -> Result<i64, AppError> {
        let result = CartItems::insert(record).exec(self.db.as_ref()).await?;
        debug!(cart_item_id = result.last_insert_id, "inserted cart item row");
        Ok(result.last_insert_id)
    }

    async fn update_quantity(&self, id: i64, quantity: i32) -> Result<(), AppError> {
        let item = CartItems::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cart item {} not found", id)))?;

        let mut active: CartItemActiveModel = item.into();
        active.quantity = Set(quantity);
        active.update(self.db.as_ref()).await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItemRecord>, AppError> {
        Self::record_select()
            .filter(Column::Id.eq(id))
            .into_model::<CartItemRecord>()
            .one(self.db.as_ref())
            .await
            .map_err(AppError::DatabaseError)
    }

    async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<CartItemRecord>, AppError> {
        Self::record_select()
            .filter(Column::MemberId.eq(member_id))
            .order_by_asc(Column::Id)
            .into_model::<CartItemRecord>()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::DatabaseError)
    }

    async fn find_all_by_ids(&self, ids: &[i64]) -> Result<Vec<CartItemRecord>, AppError> {
        Self::record_select()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(Column::Id)
            .into_model::<CartItemRecord>()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::DatabaseError)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = CartItems::delete_by_id(id).exec(self.db.as_ref()).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Cart item {} not found", id)));
        }
        Ok(())
    }
}
