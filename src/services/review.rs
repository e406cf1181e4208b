//! Lifecycle rules for reviews: who may create, read, change and remove them.
//!
//! Every operation takes the acting identity explicitly; nothing in here
//! reads ambient state. Ownership is the only authorization rule: the actor
//! whose id equals `review.author` may update or delete, everyone
//! authenticated may list and read.

use crate::db::ReviewRepository;
use crate::forms;
use crate::models;
use chrono::Utc;

pub const REVIEW_DELETED: &str = "The Review was deleted.";
pub const DELETE_DENIED: &str = "You can't delete a review you don't own.";
pub const EDIT_DENIED: &str = "You can't edit a review you don't own.";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LifecycleError {
    #[error("review not found")]
    NotFound,
    /// Ownership check failed; carries the user-visible denial notice.
    #[error("{0}")]
    Denied(&'static str),
    #[error("{0}")]
    Storage(String),
}

pub async fn list(repo: &dyn ReviewRepository) -> Result<Vec<models::Review>, LifecycleError> {
    repo.fetch_all().await.map_err(LifecycleError::Storage)
}

pub async fn get(repo: &dyn ReviewRepository, id: i32) -> Result<models::Review, LifecycleError> {
    repo.fetch(id)
        .await
        .map_err(LifecycleError::Storage)?
        .ok_or(LifecycleError::NotFound)
}

#[tracing::instrument(name = "Create review.", skip_all, fields(actor = %actor.id))]
pub async fn create(
    repo: &dyn ReviewRepository,
    actor: &models::User,
    form: &forms::ReviewForm,
) -> Result<models::Review, LifecycleError> {
    let review = models::Review {
        id: 0, // assigned by the repository
        star: form.star,
        text: form.text.clone(),
        recommendation: form.recommendation,
        author: actor.id.clone(),
        modify_date: Utc::now(),
    };

    repo.insert(review).await.map_err(LifecycleError::Storage)
}

/// Resolves the review an actor wants to edit. Denied for everyone but the
/// author, before any form input is looked at.
pub async fn edit_target(
    repo: &dyn ReviewRepository,
    actor: &models::User,
    id: i32,
) -> Result<models::Review, LifecycleError> {
    let review = get(repo, id).await?;
    if review.author != actor.id {
        return Err(LifecycleError::Denied(EDIT_DENIED));
    }

    Ok(review)
}

#[tracing::instrument(name = "Update review.", skip_all, fields(actor = %actor.id, id = id))]
pub async fn update(
    repo: &dyn ReviewRepository,
    actor: &models::User,
    id: i32,
    form: &forms::ReviewForm,
) -> Result<models::Review, LifecycleError> {
    let mut review = edit_target(repo, actor, id).await?;
    form.apply(&mut review);
    review.modify_date = Utc::now();

    repo.update(review).await.map_err(LifecycleError::Storage)
}

#[tracing::instrument(name = "Delete review.", skip_all, fields(actor = %actor.id, id = id))]
pub async fn delete(
    repo: &dyn ReviewRepository,
    actor: &models::User,
    id: i32,
) -> Result<(), LifecycleError> {
    // lookup first: a missing review is NotFound, never a denial
    let review = get(repo, id).await?;
    if review.author != actor.id {
        return Err(LifecycleError::Denied(DELETE_DENIED));
    }

    repo.delete(review.id)
        .await
        .map_err(LifecycleError::Storage)?;

    Ok(())
}
