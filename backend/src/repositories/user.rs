//! User store

use super::height::{insert_height, CreateHeight};
use super::weight::{insert_weight, CreateWeight};
use super::{from_decimal, to_decimal};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};
use thiserror::Error;
use uuid::Uuid;
use vitalis_shared::{PhysicalActivityLevel, Sex, User};

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub firstname: String,
    pub lastname: String,
    pub sex: Sex,
    pub birthdate: NaiveDate,
    pub current_height: f64,
    pub current_weight: f64,
    pub physical_activity_level: PhysicalActivityLevel,
    pub weight_goal: f64,
    pub email: String,
    pub password_hash: String,
}

/// The email already belongs to a stored user
///
/// Both creation methods fail with this error (downcast it from the
/// returned `anyhow::Error`) instead of a storage-specific one.
#[derive(Debug, Error)]
#[error("email {0} is already registered")]
pub struct EmailTaken(pub String);

impl CreateUser {
    /// Initial weight history entry, stamped at insertion time
    pub fn initial_weight(&self, user_id: Uuid) -> CreateWeight {
        CreateWeight {
            user_id,
            value: self.current_weight,
            date: None,
        }
    }

    /// Initial height history entry, stamped at insertion time
    pub fn initial_height(&self, user_id: Uuid) -> CreateHeight {
        CreateHeight {
            user_id,
            value: self.current_height,
            date: None,
        }
    }
}

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create(&self, data: CreateUser) -> Result<User>;

    /// Create the user and append its current weight and height to the
    /// measurement history. Either all three records are stored or none.
    async fn create_with_initial_measurements(&self, data: CreateUser) -> Result<User>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// User row as stored in PostgreSQL
#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    firstname: String,
    lastname: String,
    sex: String,
    birthdate: NaiveDate,
    current_height: Decimal,
    current_weight: Decimal,
    physical_activity_level: String,
    weight_goal: Decimal,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            sex: row.sex.parse().map_err(anyhow::Error::msg)?,
            birthdate: row.birthdate,
            current_height: from_decimal(row.current_height)?,
            current_weight: from_decimal(row.current_weight)?,
            physical_activity_level: row
                .physical_activity_level
                .parse()
                .map_err(anyhow::Error::msg)?,
            weight_goal: from_decimal(row.weight_goal)?,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, firstname, lastname, sex, birthdate, current_height, \
     current_weight, physical_activity_level, weight_goal, email, password_hash, created_at";

pub struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn create(&self, data: CreateUser) -> Result<User> {
        insert_user(&self.pool, &data).await
    }

    async fn create_with_initial_measurements(&self, data: CreateUser) -> Result<User> {
        // Dropping the transaction before commit rolls every insert back
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        let user = insert_user(&mut *tx, &data).await?;
        insert_weight(&mut *tx, &data.initial_weight(user.id)).await?;
        insert_height(&mut *tx, &data.initial_height(user.id)).await?;

        tx.commit().await.context("Failed to commit registration")?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        sqlx::query_as::<_, UserRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .map(User::try_from)
            .transpose()
    }
}

async fn insert_user<'e, E>(executor: E, data: &CreateUser) -> Result<User>
where
    E: PgExecutor<'e>,
{
    let query = format!(
        r#"
        INSERT INTO users (firstname, lastname, sex, birthdate, current_height,
                           current_weight, physical_activity_level, weight_goal,
                           email, password_hash)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {USER_COLUMNS}
        "#
    );

    let row = sqlx::query_as::<_, UserRow>(&query)
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(data.sex.code())
        .bind(data.birthdate)
        .bind(to_decimal(data.current_height)?)
        .bind(to_decimal(data.current_weight)?)
        .bind(data.physical_activity_level.as_str())
        .bind(to_decimal(data.weight_goal)?)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(executor)
        .await
        .map_err(|err| insert_error(err, &data.email))?;

    row.try_into()
}

/// A UNIQUE violation can only come from users.email
fn insert_error(err: sqlx::Error, email: &str) -> anyhow::Error {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if unique_violation {
        EmailTaken(email.to_string()).into()
    } else {
        anyhow::Error::new(err).context("Failed to insert user")
    }
}
