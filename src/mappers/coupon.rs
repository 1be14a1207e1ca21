use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::coupon::{ActiveModel as CouponActiveModel, DiscountType, Model as CouponModel, TargetType};
use crate::errors::AppError;
use crate::models::coupon::{Coupon, CouponStrategy, DiscountPolicy};

/// Rebuilds the domain aggregate from a stored coupon row.
///
/// Fails if the row breaks the persistence invariant (a product id present
/// for an all-products coupon, or missing for a specific-product one) or
/// carries an out-of-range value.
pub fn to_domain(row: CouponModel) -> Result<Coupon, AppError> {
    let policy = match row.discount_type {
        DiscountType::Rate => DiscountPolicy::rate(row.coupon_value)?,
        DiscountType::Fix => DiscountPolicy::fixed(row.coupon_value)?,
    };

    let strategy = match (&row.target_type, row.target_product_id) {
        (TargetType::All, None) => CouponStrategy::AllProducts,
        (TargetType::Specific, Some(product_id)) => CouponStrategy::SpecificProduct { product_id },
        (TargetType::All, Some(product_id)) => {
            return Err(AppError::InvalidRecord(format!(
                "coupon {} targets all products but carries product id {}",
                row.id, product_id
            )));
        }
        (TargetType::Specific, None) => {
            return Err(AppError::InvalidRecord(format!(
                "coupon {} targets a specific product but has no product id",
                row.id
            )));
        }
    };

    Ok(Coupon::with_id(
        row.id,
        row.name,
        policy,
        strategy,
        row.member_id,
    ))
}

/// Flattens a coupon into an active record for persistence.
///
/// An id that has not been assigned yet stays `NotSet` so the store
/// generates one on insert.
pub fn to_record(coupon: &Coupon) -> CouponActiveModel {
    CouponActiveModel {
        id: match coupon.id() {
            Some(id) => Set(id),
            None => NotSet,
        },
        name: Set(coupon.name().to_string()),
        member_id: Set(coupon.member_id()),
        discount_type: Set(coupon.discount_type()),
        target_type: Set(coupon.target_type()),
        target_product_id: Set(coupon.target_product_id()),
        coupon_value: Set(coupon.value()),
    }
}
