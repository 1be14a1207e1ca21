use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::debug;

use crate::entities::coupon::{
    ActiveModel as CouponActiveModel, Column, Entity as Coupons, Model as CouponModel,
};
use crate::errors::AppError;

/// Row access for the `coupons` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponDao: Send + Sync {
    /// Inserts a coupon row and returns the generated id.
    async fn insert(&self, record: CouponActiveModel) -> Result<i64, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CouponModel>, AppError>;

    async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<CouponModel>, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Sea-ORM backed coupon row access.
#[derive(Debug, Clone)]
pub struct SeaOrmCouponDao {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCouponDao {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CouponDao for SeaOrmCouponDao {
    async fn insert(&self, record: CouponActiveModel) -> Result<i64, AppError> {
        let result = Coupons::insert(record).exec(self.db.as_ref()).await?;
        debug!(coupon_id = result.last_insert_id, "inserted coupon row");
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CouponModel>, AppError> {
        Coupons::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::DatabaseError)
    }

    async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<CouponModel>, AppError> {
        Coupons::find()
            .filter(Column::MemberId.eq(member_id))
            .order_by_asc(Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::DatabaseError)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = Coupons::delete_by_id(id).exec(self.db.as_ref()).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Coupon {} not found", id)));
        }
        Ok(())
    }
}
