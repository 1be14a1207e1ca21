use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Cart item entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub member_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Flat cart item read row: the cart item columns joined with the owning
/// member and product columns, as produced by the cart item DAO.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CartItemRecord {
    pub id: i64,
    pub quantity: i32,
    pub member_id: i64,
    pub member_email: String,
    pub member_password: String,
    pub product_id: i64,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_image_url: String,
}
