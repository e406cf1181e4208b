use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch review by id.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT
            id, star, text, recommendation, author, modify_date
        FROM review
        WHERE id=$1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        err => {
            tracing::error!("Failed to fetch review, error: {:?}", err);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch all reviews.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT
            id, star, text, recommendation, author, modify_date
        FROM review
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, mut review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review into the database");
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO review (star, text, recommendation, author, modify_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(review.star)
    .bind(&review.text)
    .bind(review.recommendation)
    .bind(&review.author)
    .bind(review.modify_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |id| {
        review.id = id;
        review
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Updating review");
    sqlx::query_as::<_, models::Review>(
        r#"
        UPDATE review
        SET
            star=$2,
            text=$3,
            recommendation=$4,
            modify_date=$5
        WHERE id = $1
        RETURNING id, star, text, recommendation, author, modify_date
        "#,
    )
    .bind(review.id)
    .bind(review.star)
    .bind(&review.text)
    .bind(review.recommendation)
    .bind(review.modify_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to update".to_string()
    })
}

#[tracing::instrument(name = "Delete review.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete review {}", id);
    sqlx::query("DELETE FROM review WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review: {:?}", err);
            "Failed to delete review".to_string()
        })
}
