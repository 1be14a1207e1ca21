//! Cart API Library
//!
//! Shopping cart backend: members, products, cart items and member coupons
//! persisted through a relational store. Domain models live in [`models`],
//! their persistence records in [`entities`], and the [`mappers`] translate
//! between the two; [`repositories`] delegate row access to the [`dao`]
//! layer.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod dao;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod services;

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::AppError;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub coupon_service: services::CouponService,
    pub cart_items: repositories::CartItemRepository,
}

/// Connects to the store and wires the DAOs, repositories and services.
///
/// Returns the state plus the receiving half of the event channel so the
/// caller can consume domain events.
pub async fn build_state(
    config: config::AppConfig,
) -> Result<(AppState, mpsc::Receiver<events::Event>), AppError> {
    let db = Arc::new(db::establish_connection_from_app_config(&config).await?);
    let (event_sender, event_receiver) = events::event_channel(config.event_channel_capacity);
    let event_sender = Arc::new(event_sender);

    let coupon_service = services::CouponService::new(
        repositories::CouponRepository::new(Arc::new(dao::SeaOrmCouponDao::new(db.clone()))),
        event_sender,
    );
    let cart_items =
        repositories::CartItemRepository::new(Arc::new(dao::SeaOrmCartItemDao::new(db.clone())));

    let state = AppState {
        db,
        config,
        coupon_service,
        cart_items,
    };

    Ok((state, event_receiver))
}
