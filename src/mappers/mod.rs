//! Stateless translation between persistence records and domain models.
//!
//! Mappers are pure functions: no state is retained across calls and no
//! record outlives the translation step.

pub mod cart_item;
pub mod coupon;
