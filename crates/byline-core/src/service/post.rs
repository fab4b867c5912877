//! Post record manager.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validate;

/// Owns create/update for post records. All checks here are pure; no rule
/// depends on what is already in storage.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a new post.
    pub async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        validate::post_title(&post.title)?;
        validate::post_category(&post.category)?;
        if let Some(content) = &post.content {
            validate::post_content(content)?;
        }
        if let Some(summary) = &post.summary {
            validate::post_summary(summary)?;
        }

        Ok(self.repo.insert(post).await?)
    }

    /// Validate the changed fields and persist them.
    pub async fn update(&self, post: &Post, changes: PostChanges) -> Result<Post, DomainError> {
        if let Some(title) = &changes.title {
            validate::post_title(title)?;
        }
        if let Some(category) = &changes.category {
            validate::post_category(category)?;
        }
        if let Some(content) = &changes.content {
            validate::post_content(content)?;
        }
        if let Some(summary) = &changes.summary {
            validate::post_summary(summary)?;
        }

        let mut updated = post.clone();
        if let Some(title) = changes.title {
            updated.title = title;
        }
        if let Some(content) = changes.content {
            updated.content = Some(content);
        }
        if let Some(summary) = changes.summary {
            updated.summary = Some(summary);
        }
        if let Some(category) = changes.category {
            updated.category = Some(category);
        }

        match self.repo.update(updated).await {
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Post",
                id: post.id,
            }),
            other => Ok(other?),
        }
    }

    /// Look up one post by ID.
    pub async fn get(&self, id: i32) -> Result<Option<Post>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
