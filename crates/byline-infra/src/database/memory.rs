//! In-memory repository implementations - used for tests and for running
//! without a configured database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use byline_core::domain::{Author, NewAuthor, NewPost, Post};
use byline_core::error::RepoError;
use byline_core::ports::{AuthorRepository, BaseRepository, PostRepository};

fn duplicate_name(name: &str) -> RepoError {
    RepoError::Constraint(format!(
        "duplicate key value violates unique constraint: authors.name = {name}"
    ))
}

/// In-memory author store with the same contract as the Postgres
/// repository: ids from a sequence, write-time timestamps, and the
/// uniqueness constraint on `name` enforced under the write lock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryAuthorRepository {
    store: RwLock<HashMap<i32, Author>>,
    next_id: AtomicI32,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, i32> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|a| a.name == name).cloned())
    }

    async fn insert(&self, new_author: NewAuthor) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        // The in-memory stand-in for the unique index on authors.name.
        if store.values().any(|a| a.name == new_author.name) {
            return Err(duplicate_name(&new_author.name));
        }

        let now = Utc::now();
        let author = Author {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_author.name,
            phone_number: new_author.phone_number,
            created_at: now,
            updated_at: now,
        };
        store.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, author: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        if store.values().any(|a| a.name == author.name && a.id != author.id) {
            return Err(duplicate_name(&author.name));
        }

        let Some(existing) = store.get(&author.id) else {
            return Err(RepoError::NotFound);
        };

        let updated = Author {
            created_at: existing.created_at,
            updated_at: Utc::now(),
            ..author
        };
        store.insert(updated.id, updated.clone());
        Ok(updated)
    }
}

/// In-memory post store.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<i32, Post>>,
    next_id: AtomicI32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new_post.title,
            content: new_post.content,
            summary: new_post.summary,
            category: Some(new_post.category),
            created_at: now,
            updated_at: now,
        };
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let Some(existing) = store.get(&post.id) else {
            return Err(RepoError::NotFound);
        };

        let updated = Post {
            created_at: existing.created_at,
            updated_at: Utc::now(),
            ..post
        };
        store.insert(updated.id, updated.clone());
        Ok(updated)
    }
}
