//! Weight history store

use super::{from_decimal, to_decimal};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;
use vitalis_shared::WeightRecord;

/// Input for appending a weight record
#[derive(Debug, Clone)]
pub struct CreateWeight {
    pub user_id: Uuid,
    /// Kilograms
    pub value: f64,
    /// Defaults to the time of insertion
    pub date: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait WeightsRepository: Send + Sync {
    async fn create(&self, data: CreateWeight) -> Result<WeightRecord>;
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct WeightRow {
    id: Uuid,
    value: Decimal,
    date: DateTime<Utc>,
    user_id: Uuid,
}

impl TryFrom<WeightRow> for WeightRecord {
    type Error = anyhow::Error;

    fn try_from(row: WeightRow) -> Result<Self> {
        Ok(WeightRecord {
            id: row.id,
            value: from_decimal(row.value)?,
            date: row.date,
            user_id: row.user_id,
        })
    }
}

pub struct PgWeightsRepository {
    pool: PgPool,
}

impl PgWeightsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeightsRepository for PgWeightsRepository {
    async fn create(&self, data: CreateWeight) -> Result<WeightRecord> {
        insert_weight(&self.pool, &data).await
    }
}

/// Insert on any connection, including an open transaction
pub(crate) async fn insert_weight<'e, E>(executor: E, data: &CreateWeight) -> Result<WeightRecord>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, WeightRow>(
        r#"
        INSERT INTO weights (value, date, user_id)
        VALUES ($1, COALESCE($2, NOW()), $3)
        RETURNING id, value, date, user_id
        "#,
    )
    .bind(to_decimal(data.value)?)
    .bind(data.date)
    .bind(data.user_id)
    .fetch_one(executor)
    .await
    .context("Failed to insert weight record")?;

    row.try_into()
}
