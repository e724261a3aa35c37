use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shopcart_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(63))", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(63))")]
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shopcarts::Entity",
        from = "Column::ShopcartId",
        to = "super::shopcarts::Column::Id",
        on_delete = "Cascade"
    )]
    Shopcarts,
}

impl Related<super::shopcarts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shopcarts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
