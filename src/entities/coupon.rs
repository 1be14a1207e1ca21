use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a coupon's stored value is interpreted when discounting a price.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DiscountType {
    #[sea_orm(string_value = "FIX")]
    Fix,
    #[sea_orm(string_value = "RATE")]
    Rate,
}

/// Which products a coupon applies to.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TargetType {
    #[sea_orm(string_value = "ALL")]
    All,
    #[sea_orm(string_value = "SPECIFIC")]
    Specific,
}

/// Coupon entity. `target_product_id` is set if and only if `target_type`
/// is `SPECIFIC`; the mapper rejects rows that break this.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub member_id: i64,
    pub discount_type: DiscountType,
    pub target_type: TargetType,
    #[sea_orm(nullable)]
    pub target_product_id: Option<i64>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub coupon_value: Decimal,
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
        from = "Column::TargetProductId",
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
