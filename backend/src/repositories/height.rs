//! Height history store

use super::{from_decimal, to_decimal};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;
use vitalis_shared::HeightRecord;

/// Input for appending a height record
#[derive(Debug, Clone)]
pub struct CreateHeight {
    pub user_id: Uuid,
    /// Centimeters
    pub value: f64,
    /// Defaults to the time of insertion
    pub date: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait HeightsRepository: Send + Sync {
    async fn create(&self, data: CreateHeight) -> Result<HeightRecord>;
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct HeightRow {
    id: Uuid,
    value: Decimal,
    date: DateTime<Utc>,
    user_id: Uuid,
}

impl TryFrom<HeightRow> for HeightRecord {
    type Error = anyhow::Error;

    fn try_from(row: HeightRow) -> Result<Self> {
        Ok(HeightRecord {
            id: row.id,
            value: from_decimal(row.value)?,
            date: row.date,
            user_id: row.user_id,
        })
    }
}

pub struct PgHeightsRepository {
    pool: PgPool,
}

impl PgHeightsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeightsRepository for PgHeightsRepository {
    async fn create(&self, data: CreateHeight) -> Result<HeightRecord> {
        insert_height(&self.pool, &data).await
    }
}

/// Insert on any connection, including an open transaction
pub(crate) async fn insert_height<'e, E>(executor: E, data: &CreateHeight) -> Result<HeightRecord>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, HeightRow>(
        r#"
        INSERT INTO heights (value, date, user_id)
        VALUES ($1, COALESCE($2, NOW()), $3)
        RETURNING id, value, date, user_id
        "#,
    )
    .bind(to_decimal(data.value)?)
    .bind(data.date)
    .bind(data.user_id)
    .fetch_one(executor)
    .await
    .context("Failed to insert height record")?;

    row.try_into()
}
