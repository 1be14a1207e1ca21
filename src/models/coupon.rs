use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::coupon::{DiscountType, TargetType};
use crate::errors::AppError;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Computes a discounted price from an original price.
///
/// The stored magnitude is validated at construction: a fixed amount must be
/// non-negative and a rate must lie in `[0, 100]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountPolicy {
    /// Subtracts a fixed amount from the price, never going below zero.
    Fixed { amount: Decimal },
    /// Takes a percentage off the price.
    Rate { percent: Decimal },
}

impl DiscountPolicy {
    pub fn fixed(amount: Decimal) -> Result<Self, AppError> {
        if amount < Decimal::ZERO {
            return Err(AppError::ValidationError(format!(
                "fixed discount amount must be non-negative, got {}",
                amount
            )));
        }
        Ok(Self::Fixed { amount })
    }

    pub fn rate(percent: Decimal) -> Result<Self, AppError> {
        if percent < Decimal::ZERO || percent > HUNDRED {
            return Err(AppError::ValidationError(format!(
                "rate discount must be between 0 and 100, got {}",
                percent
            )));
        }
        Ok(Self::Rate { percent })
    }

    /// Applies the discount to a price. A fixed amount larger than the price
    /// makes it free rather than negative.
    pub fn apply(&self, original: Decimal) -> Decimal {
        match self {
            Self::Fixed { amount } => (original - amount).max(Decimal::ZERO),
            Self::Rate { percent } => original * (HUNDRED - percent) / HUNDRED,
        }
    }

    pub fn discount_type(&self) -> DiscountType {
        match self {
            Self::Fixed { .. } => DiscountType::Fix,
            Self::Rate { .. } => DiscountType::Rate,
        }
    }

    /// The stored magnitude, uniform across both kinds: the amount for a
    /// fixed discount, the percentage for a rate discount.
    pub fn value(&self) -> Decimal {
        match self {
            Self::Fixed { amount } => *amount,
            Self::Rate { percent } => *percent,
        }
    }
}

/// Decides which products a coupon can be applied to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CouponStrategy {
    /// Applies to every product.
    AllProducts,
    /// Applies only to the product with the carried id.
    SpecificProduct { product_id: i64 },
}

impl CouponStrategy {
    pub fn matches(&self, product_id: i64) -> bool {
        match self {
            Self::AllProducts => true,
            Self::SpecificProduct { product_id: target } => *target == product_id,
        }
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Self::AllProducts => TargetType::All,
            Self::SpecificProduct { .. } => TargetType::Specific,
        }
    }

    /// The targeted product id, present only for a specific-product coupon.
    pub fn target_product_id(&self) -> Option<i64> {
        match self {
            Self::AllProducts => None,
            Self::SpecificProduct { product_id } => Some(*product_id),
        }
    }
}

/// A discount grant owned by a member: one discount policy plus one
/// applicability strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    id: Option<i64>,
    name: String,
    member_id: i64,
    policy: DiscountPolicy,
    strategy: CouponStrategy,
}

impl Coupon {
    pub fn new(
        name: impl Into<String>,
        policy: DiscountPolicy,
        strategy: CouponStrategy,
        member_id: i64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            member_id,
            policy,
            strategy,
        }
    }

    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        policy: DiscountPolicy,
        strategy: CouponStrategy,
        member_id: i64,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            member_id,
            policy,
            strategy,
        }
    }

    /// The same coupon after the store has assigned it an id.
    pub fn with_assigned_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_id(&self) -> i64 {
        self.member_id
    }

    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    pub fn strategy(&self) -> &CouponStrategy {
        &self.strategy
    }

    pub fn discount_type(&self) -> DiscountType {
        self.policy.discount_type()
    }

    pub fn target_type(&self) -> TargetType {
        self.strategy.target_type()
    }

    pub fn value(&self) -> Decimal {
        self.policy.value()
    }

    pub fn target_product_id(&self) -> Option<i64> {
        self.strategy.target_product_id()
    }

    pub fn applies_to(&self, product_id: i64) -> bool {
        self.strategy.matches(product_id)
    }

    pub fn discounted_price(&self, original: Decimal) -> Decimal {
        self.policy.apply(original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rate_discount_takes_a_percentage_off() {
        let policy = DiscountPolicy::rate(dec!(10)).unwrap();
        assert_eq!(policy.apply(dec!(1000)), dec!(900));
    }

    #[test]
    fn fixed_discount_subtracts_the_amount() {
        let policy = DiscountPolicy::fixed(dec!(500)).unwrap();
        assert_eq!(policy.apply(dec!(1000)), dec!(500));
    }

    #[test]
    fn fixed_discount_clamps_at_zero() {
        let policy = DiscountPolicy::fixed(dec!(1500)).unwrap();
        assert_eq!(policy.apply(dec!(1000)), Decimal::ZERO);
    }

    #[test]
    fn rate_outside_range_is_rejected() {
        assert!(matches!(
            DiscountPolicy::rate(dec!(101)),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            DiscountPolicy::rate(dec!(-1)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn negative_fixed_amount_is_rejected() {
        assert!(matches!(
            DiscountPolicy::fixed(dec!(-100)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn all_products_strategy_matches_everything() {
        let strategy = CouponStrategy::AllProducts;
        assert!(strategy.matches(1));
        assert!(strategy.matches(42));
        assert_eq!(strategy.target_product_id(), None);
    }

    #[test]
    fn specific_product_strategy_matches_only_its_target() {
        let strategy = CouponStrategy::SpecificProduct { product_id: 42 };
        assert!(strategy.matches(42));
        assert!(!strategy.matches(7));
        assert_eq!(strategy.target_product_id(), Some(42));
    }

    #[test]
    fn coupon_delegates_to_its_policy_and_strategy() {
        let coupon = Coupon::new(
            "ten percent off",
            DiscountPolicy::rate(dec!(10)).unwrap(),
            CouponStrategy::AllProducts,
            1,
        );

        assert_eq!(coupon.id(), None);
        assert_eq!(coupon.discount_type(), DiscountType::Rate);
        assert_eq!(coupon.target_type(), TargetType::All);
        assert_eq!(coupon.value(), dec!(10));
        assert!(coupon.applies_to(99));
        assert_eq!(coupon.discounted_price(dec!(1000)), dec!(900));

        let coupon = coupon.with_assigned_id(5);
        assert_eq!(coupon.id(), Some(5));
    }
}
