//! Comment entity for SeaORM.
//!
//! `blog_id` is a plain column: comments may point at blogs that do not
//! exist, so there is no foreign key. Open fields live in a JSONB column.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub blog_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub extra: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for blog_core::domain::Comment {
    fn from(model: Model) -> Self {
        let extra = match model.extra {
            Json::Object(map) => map,
            _ => Default::default(),
        };
        Self {
            id: model.id,
            content: model.content,
            author: model.author,
            blog_id: model.blog_id,
            extra,
        }
    }
}

/// Conversion from Domain Comment to SeaORM ActiveModel.
impl From<blog_core::domain::Comment> for ActiveModel {
    fn from(comment: blog_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            content: Set(comment.content),
            author: Set(comment.author),
            blog_id: Set(comment.blog_id),
            extra: Set(Json::Object(comment.extra)),
        }
    }
}
