//! Unit tests for the Sea-ORM cart item DAO against a mocked database.
//!
//! Read methods return flat joined rows, so the mocked query results are
//! column maps rather than entity models.

use cart_api::dao::{CartItemDao, SeaOrmCartItemDao};
use cart_api::entities::cart_item::{CartItemRecord, Model as CartItemModel};
use cart_api::errors::AppError;
use cart_api::mappers;
use cart_api::models::{CartItem, Member, Product};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A joined read row as the store would produce it.
fn joined_row(id: i64, quantity: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("quantity", Value::from(quantity)),
        ("member_id", Value::from(2i64)),
        ("member_email", Value::from("mallang@shop.com")),
        ("member_password", Value::from("1234")),
        ("product_id", Value::from(3i64)),
        ("product_name", Value::from("mallang")),
        ("product_price", Value::from(dec!(1000))),
        ("product_image_url", Value::from("image")),
    ])
}

fn expected_record(id: i64, quantity: i32) -> CartItemRecord {
    CartItemRecord {
        id,
        quantity,
        member_id: 2,
        member_email: "mallang@shop.com".to_string(),
        member_password: "1234".to_string(),
        product_id: 3,
        product_name: "mallang".to_string(),
        product_price: dec!(1000),
        product_image_url: "image".to_string(),
    }
}

fn stored_item(id: i64, quantity: i32) -> CartItemModel {
    CartItemModel {
        id,
        member_id: 2,
        product_id: 3,
        quantity,
    }
}

#[tokio::test]
async fn insert_returns_the_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored_item(1, 1)]])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();
    let dao = SeaOrmCartItemDao::new(Arc::new(db));

    let item = CartItem::new(
        Product::with_id(3, "mallang", dec!(1000), "image"),
        Member::with_id(2, "mallang@shop.com", "1234"),
    );

    let id = dao
        .insert(mappers::cart_item::to_record(&item).unwrap())
        .await
        .unwrap();
    assert_eq!(id, 1);
}

#[tokio::test]
async fn find_by_id_maps_the_joined_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![joined_row(1, 10)]])
        .into_connection();
    let dao = SeaOrmCartItemDao::new(Arc::new(db));

    let found = dao.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found, expected_record(1, 10));
}

#[tokio::test]
async fn find_all_by_ids_maps_every_joined_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![joined_row(1, 10), joined_row(2, 15)]])
        .into_connection();
    let dao = SeaOrmCartItemDao::new(Arc::new(db));

    let found = dao.find_all_by_ids(&[1, 2]).await.unwrap();
    assert_eq!(found, vec![expected_record(1, 10), expected_record(2, 15)]);
}

#[tokio::test]
async fn update_quantity_rewrites_the_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            vec![stored_item(1, 1)],
            vec![stored_item(1, 10)],
        ])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();
    let dao = SeaOrmCartItemDao::new(Arc::new(db));

    assert!(dao.update_quantity(1, 10).await.is_ok());
}

#[tokio::test]
async fn updating_a_missing_cart_item_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<CartItemModel>::new()])
        .into_connection();
    let dao = SeaOrmCartItemDao::new(Arc::new(db));

    let result = dao.update_quantity(99, 10).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
