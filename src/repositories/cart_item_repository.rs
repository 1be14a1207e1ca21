use std::sync::Arc;

use crate::dao::CartItemDao;
use crate::errors::AppError;
use crate::mappers;
use crate::models::CartItem;

/// Repository for cart item operations
#[derive(Clone)]
pub struct CartItemRepository {
    dao: Arc<dyn CartItemDao>,
}

impl CartItemRepository {
    pub fn new(dao: Arc<dyn CartItemDao>) -> Self {
        Self { dao }
    }

    /// Stores a new cart item and returns its generated id.
    pub async fn save(&self, item: &CartItem) -> Result<i64, AppError> {
        self.dao.insert(mappers::cart_item::to_record(item)?).await
    }

    /// Persists a quantity change for an already stored cart item.
    pub async fn update(&self, item: &CartItem) -> Result<(), AppError> {
        let id = item.id.ok_or_else(|| {
            AppError::InvalidOperation("cannot update a cart item that has not been saved".to_string())
        })?;
        self.dao.update_quantity(id, item.quantity).await
    }

    /// Find a cart item by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, AppError> {
        Ok(self
            .dao
            .find_by_id(id)
            .await?
            .map(mappers::cart_item::to_domain))
    }

    /// Find all cart items of a member
    pub async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<CartItem>, AppError> {
        Ok(self
            .dao
            .find_by_member_id(member_id)
            .await?
            .into_iter()
            .map(mappers::cart_item::to_domain)
            .collect())
    }

    /// Find all cart items with the given ids
    pub async fn find_all_by_ids(&self, ids: &[i64]) -> Result<Vec<CartItem>, AppError> {
        Ok(self
            .dao
            .find_all_by_ids(ids)
            .await?
            .into_iter()
            .map(mappers::cart_item::to_domain)
            .collect())
    }

    /// Delete a cart item
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.dao.delete(id).await
    }
}
