use async_trait::async_trait;

use crate::domain::{Author, NewAuthor, NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining lookups shared by every entity kind.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Author repository - the persistence context for author records.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i32> {
    /// Find an author by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;

    /// Insert a new author. Storage issues the id and both timestamps, and
    /// rejects duplicate names with `RepoError::Constraint`.
    async fn insert(&self, author: NewAuthor) -> Result<Author, RepoError>;

    /// Persist new field values for an existing author.
    async fn update(&self, author: Author) -> Result<Author, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post. Storage issues the id and both timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist new field values for an existing post.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}
