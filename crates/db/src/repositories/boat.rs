use crate::models::DbBoat;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_boat(
    pool: &Pool<Postgres>,
    name: &str,
    location: Option<&str>,
    capacity: i32,
) -> Result<DbBoat> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating boat: id={}, name={}, capacity={}", id, name, capacity);

    let boat = sqlx::query_as::<_, DbBoat>(
        r#"
        INSERT INTO boats (id, name, location, capacity, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, location, capacity, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(location)
    .bind(capacity)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(boat)
}

pub async fn get_boat_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBoat>> {
    let boat = sqlx::query_as::<_, DbBoat>(
        r#"
        SELECT id, name, location, capacity, created_at
        FROM boats
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if boat.is_none() {
        tracing::debug!("Boat not found: id={}", id);
    }

    Ok(boat)
}

pub async fn list_boats(pool: &Pool<Postgres>) -> Result<Vec<DbBoat>> {
    let boats = sqlx::query_as::<_, DbBoat>(
        r#"
        SELECT id, name, location, capacity, created_at
        FROM boats
        ORDER BY name ASC, created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(boats)
}
