//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Blog.
impl From<Model> for blog_core::domain::Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Blog to SeaORM ActiveModel.
impl From<blog_core::domain::Blog> for ActiveModel {
    fn from(blog: blog_core::domain::Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            content: Set(blog.content),
            author: Set(blog.author),
            created_at: Set(blog.created_at.into()),
            updated_at: Set(blog.updated_at.into()),
        }
    }
}
