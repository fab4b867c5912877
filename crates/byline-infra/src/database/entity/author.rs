//! Author entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Storage owns the timestamps: an insert stamps both columns, every
    /// later save refreshes `updated_at`.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for byline_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            phone_number: model.phone_number,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from a new-author candidate to an insert ActiveModel.
/// Identity and timestamps stay `NotSet`; storage issues them.
impl From<byline_core::domain::NewAuthor> for ActiveModel {
    fn from(author: byline_core::domain::NewAuthor) -> Self {
        Self {
            id: NotSet,
            name: Set(author.name),
            phone_number: Set(author.phone_number),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

/// Conversion from Domain Author to a full ActiveModel for updates.
impl From<byline_core::domain::Author> for ActiveModel {
    fn from(author: byline_core::domain::Author) -> Self {
        Self {
            id: Set(author.id),
            name: Set(author.name),
            phone_number: Set(author.phone_number),
            created_at: Set(author.created_at.into()),
            updated_at: Set(author.updated_at.into()),
        }
    }
}
