//! Domain-facing persistence API.
//!
//! Repositories delegate row access to a [`crate::dao`] trait object and
//! translate rows through the [`crate::mappers`]; they never bypass either.

pub mod cart_item_repository;
pub mod coupon_repository;

pub use cart_item_repository::CartItemRepository;
pub use coupon_repository::CouponRepository;
