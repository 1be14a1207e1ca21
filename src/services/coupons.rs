use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::entities::coupon::DiscountType;
use crate::errors::AppError;
use crate::events::{Event, EventSender};
use crate::models::coupon::{Coupon, CouponStrategy, DiscountPolicy};
use crate::repositories::CouponRepository;

/// Parameters for issuing a coupon to a member.
///
/// A missing `target_product_id` issues a coupon valid for every product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssueCouponInput {
    pub name: String,
    pub member_id: i64,
    pub discount_type: DiscountType,
    pub value: Decimal,
    pub target_product_id: Option<i64>,
}

/// Coupon service: issuing coupons, listing a member's coupons and applying
/// a coupon to a product price.
#[derive(Clone)]
pub struct CouponService {
    repository: CouponRepository,
    event_sender: Arc<EventSender>,
}

impl CouponService {
    pub fn new(repository: CouponRepository, event_sender: Arc<EventSender>) -> Self {
        Self {
            repository,
            event_sender,
        }
    }

    /// Issues a new coupon to a member.
    ///
    /// The discount value is validated against the discount type before
    /// anything is persisted. Publishes `CouponIssued` on success.
    #[instrument(skip(self))]
    pub async fn issue_coupon(&self, input: IssueCouponInput) -> Result<Coupon, AppError> {
        let policy = match input.discount_type {
            DiscountType::Fix => DiscountPolicy::fixed(input.value)?,
            DiscountType::Rate => DiscountPolicy::rate(input.value)?,
        };
        let strategy = match input.target_product_id {
            Some(product_id) => CouponStrategy::SpecificProduct { product_id },
            None => CouponStrategy::AllProducts,
        };

        let coupon = Coupon::new(input.name, policy, strategy, input.member_id);
        let id = self.repository.save(&coupon).await?;
        info!(coupon_id = id, member_id = coupon.member_id(), "issued coupon");

        if let Err(e) = self
            .event_sender
            .send(Event::CouponIssued {
                coupon_id: id,
                member_id: coupon.member_id(),
            })
            .await
        {
            warn!("Failed to publish coupon issued event: {}", e);
        }

        Ok(coupon.with_assigned_id(id))
    }

    /// Looks up a coupon, failing with `NotFound` when it does not exist.
    pub async fn get_coupon(&self, id: i64) -> Result<Coupon, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Coupon {} not found", id)))
    }

    /// Lists every coupon owned by a member.
    pub async fn list_member_coupons(&self, member_id: i64) -> Result<Vec<Coupon>, AppError> {
        self.repository.find_by_member_id(member_id).await
    }

    /// Applies a coupon to a product price and returns the discounted price.
    ///
    /// Fails with `InvalidOperation` when the coupon does not cover the
    /// product. Publishes `CouponApplied` on success.
    #[instrument(skip(self))]
    pub async fn apply_coupon(
        &self,
        coupon_id: i64,
        product_id: i64,
        price: Decimal,
    ) -> Result<Decimal, AppError> {
        let coupon = self.get_coupon(coupon_id).await?;

        if !coupon.applies_to(product_id) {
            return Err(AppError::InvalidOperation(format!(
                "Coupon {} does not apply to product {}",
                coupon_id, product_id
            )));
        }

        let discounted = coupon.discounted_price(price);
        debug!(%price, %discounted, coupon_id, product_id, "applied coupon");

        if let Err(e) = self
            .event_sender
            .send(Event::CouponApplied {
                coupon_id,
                product_id,
                timestamp: Utc::now(),
            })
            .await
        {
            warn!("Failed to publish coupon applied event: {}", e);
        }

        Ok(discounted)
    }

    /// Deletes a coupon.
    pub async fn delete_coupon(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;

        if let Err(e) = self.event_sender.send(Event::CouponDeleted(id)).await {
            warn!("Failed to publish coupon deleted event: {}", e);
        }

        Ok(())
    }
}
