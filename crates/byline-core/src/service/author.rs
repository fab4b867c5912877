//! Author record manager.

use std::sync::Arc;

use crate::domain::{Author, AuthorChanges, NewAuthor};
use crate::error::{DomainError, RepoError};
use crate::ports::AuthorRepository;
use crate::validate;

/// Owns create/update for author records.
///
/// Name uniqueness is checked twice: a best-effort lookup against current
/// storage before the write, and the unique index on `authors.name` as the
/// authoritative arbiter. A concurrent insert that slips past the lookup
/// still surfaces as the same validation error.
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a new author.
    pub async fn create(&self, author: NewAuthor) -> Result<Author, DomainError> {
        validate::author_name(&author.name)?;
        if let Some(phone_number) = &author.phone_number {
            validate::author_phone_number(phone_number)?;
        }

        if self.repo.find_by_name(&author.name).await?.is_some() {
            return Err(validate::duplicate_author_name().into());
        }

        match self.repo.insert(author).await {
            Err(RepoError::Constraint(_)) => Err(validate::duplicate_author_name().into()),
            other => Ok(other?),
        }
    }

    /// Validate the changed fields and persist them.
    pub async fn update(
        &self,
        author: &Author,
        changes: AuthorChanges,
    ) -> Result<Author, DomainError> {
        if let Some(name) = &changes.name {
            validate::author_name(name)?;
        }
        if let Some(phone_number) = &changes.phone_number {
            validate::author_phone_number(phone_number)?;
        }

        // Renaming to a name held by a different author is a duplicate;
        // re-saving the author's own name is not.
        if let Some(name) = &changes.name {
            if let Some(existing) = self.repo.find_by_name(name).await? {
                if existing.id != author.id {
                    return Err(validate::duplicate_author_name().into());
                }
            }
        }

        let mut updated = author.clone();
        if let Some(name) = changes.name {
            updated.name = name;
        }
        if let Some(phone_number) = changes.phone_number {
            updated.phone_number = Some(phone_number);
        }

        match self.repo.update(updated).await {
            Err(RepoError::Constraint(_)) => Err(validate::duplicate_author_name().into()),
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Author",
                id: author.id,
            }),
            other => Ok(other?),
        }
    }

    /// Look up one author by ID.
    pub async fn get(&self, id: i32) -> Result<Option<Author>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
