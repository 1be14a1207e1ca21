use std::sync::Arc;

use crate::dao::CouponDao;
use crate::errors::AppError;
use crate::mappers;
use crate::models::Coupon;

/// Repository for coupon operations
#[derive(Clone)]
pub struct CouponRepository {
    dao: Arc<dyn CouponDao>,
}

impl CouponRepository {
    pub fn new(dao: Arc<dyn CouponDao>) -> Self {
        Self { dao }
    }

    /// Stores a new coupon and returns its generated id.
    pub async fn save(&self, coupon: &Coupon) -> Result<i64, AppError> {
        self.dao.insert(mappers::coupon::to_record(coupon)).await
    }

    /// Find a coupon by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Coupon>, AppError> {
        self.dao
            .find_by_id(id)
            .await?
            .map(mappers::coupon::to_domain)
            .transpose()
    }

    /// Find all coupons owned by a member
    pub async fn find_by_member_id(&self, member_id: i64) -> Result<Vec<Coupon>, AppError> {
        self.dao
            .find_by_member_id(member_id)
            .await?
            .into_iter()
            .map(mappers::coupon::to_domain)
            .collect()
    }

    /// Delete a coupon
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.dao.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::coupon::MockCouponDao;
    use crate::entities::coupon::{DiscountType, Model as CouponModel, TargetType};
    use crate::models::coupon::{CouponStrategy, DiscountPolicy};
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn stored_row() -> CouponModel {
        CouponModel {
            id: 1,
            name: "ten percent off".to_string(),
            member_id: 7,
            discount_type: DiscountType::Rate,
            target_type: TargetType::All,
            target_product_id: None,
            coupon_value: dec!(10),
        }
    }

    #[tokio::test]
    async fn save_delegates_a_single_insert_to_the_dao() {
        let mut dao = MockCouponDao::new();
        dao.expect_insert().times(1).returning(|_| Ok(1));
        let repository = CouponRepository::new(Arc::new(dao));

        let coupon = Coupon::new(
            "ten percent off",
            DiscountPolicy::rate(dec!(10)).unwrap(),
            CouponStrategy::AllProducts,
            7,
        );

        let id = repository.save(&coupon).await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn find_by_id_maps_the_stored_row() {
        let mut dao = MockCouponDao::new();
        dao.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(stored_row())));
        let repository = CouponRepository::new(Arc::new(dao));

        let coupon = repository.find_by_id(1).await.unwrap().unwrap();

        assert_eq!(coupon.id(), Some(1));
        assert_eq!(coupon.member_id(), 7);
        assert_eq!(coupon.discounted_price(dec!(1000)), dec!(900));
    }

    #[tokio::test]
    async fn corrupt_rows_surface_as_invalid_record_errors() {
        let mut dao = MockCouponDao::new();
        dao.expect_find_by_id().returning(|_| {
            let mut row = stored_row();
            row.target_type = TargetType::Specific;
            row.target_product_id = None;
            Ok(Some(row))
        });
        let repository = CouponRepository::new(Arc::new(dao));

        let result = repository.find_by_id(1).await;
        assert!(matches!(result, Err(AppError::InvalidRecord(_))));
    }

    #[tokio::test]
    async fn find_by_member_id_maps_every_row() {
        let mut dao = MockCouponDao::new();
        dao.expect_find_by_member_id()
            .with(eq(7))
            .times(1)
            .returning(|_| {
                let mut second = stored_row();
                second.id = 2;
                Ok(vec![stored_row(), second])
            });
        let repository = CouponRepository::new(Arc::new(dao));

        let coupons = repository.find_by_member_id(7).await.unwrap();

        assert_eq!(coupons.len(), 2);
        assert_eq!(coupons[0].id(), Some(1));
        assert_eq!(coupons[1].id(), Some(2));
    }
}
