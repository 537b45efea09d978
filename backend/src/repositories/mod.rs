//! Persistence layer
//!
//! Each store is an async trait with a PostgreSQL implementation and an
//! in-memory implementation. Services only see `Arc<dyn …>` handles bundled
//! in [`Repositories`], so the backend is chosen once at startup.

pub mod food;
pub mod height;
pub mod in_memory;
pub mod user;
pub mod weight;

use anyhow::{Context, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

pub use food::{
    CreateFood, CreateNutritionalInformation, FoodsRepository, NutritionalInformationsRepository,
    PgFoodsRepository, PgNutritionalInformationsRepository,
};
pub use height::{CreateHeight, HeightsRepository, PgHeightsRepository};
pub use in_memory::{
    InMemoryFoodsRepository, InMemoryHeightsRepository, InMemoryNutritionalInformationsRepository,
    InMemoryUsersRepository, InMemoryWeightsRepository,
};
pub use user::{CreateUser, EmailTaken, PgUsersRepository, UsersRepository};
pub use weight::{CreateWeight, PgWeightsRepository, WeightsRepository};

/// Handles to every store, cloned into each service
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UsersRepository>,
    pub weights: Arc<dyn WeightsRepository>,
    pub heights: Arc<dyn HeightsRepository>,
    pub foods: Arc<dyn FoodsRepository>,
    pub nutritional_informations: Arc<dyn NutritionalInformationsRepository>,
}

impl Repositories {
    /// Stores backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUsersRepository::new(pool.clone())),
            weights: Arc::new(PgWeightsRepository::new(pool.clone())),
            heights: Arc::new(PgHeightsRepository::new(pool.clone())),
            foods: Arc::new(PgFoodsRepository::new(pool.clone())),
            nutritional_informations: Arc::new(PgNutritionalInformationsRepository::new(pool)),
        }
    }

    /// Process-local stores
    pub fn in_memory() -> Self {
        let weights = Arc::new(InMemoryWeightsRepository::new());
        let heights = Arc::new(InMemoryHeightsRepository::new());

        Self {
            users: Arc::new(InMemoryUsersRepository::with_measurements(
                weights.clone(),
                heights.clone(),
            )),
            weights,
            heights,
            foods: Arc::new(InMemoryFoodsRepository::new()),
            nutritional_informations: Arc::new(InMemoryNutritionalInformationsRepository::new()),
        }
    }
}

/// Convert a measurement to the NUMERIC representation used in storage
pub(crate) fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value).with_context(|| format!("{} cannot be stored as NUMERIC", value))
}

pub(crate) fn to_decimal_opt(value: Option<f64>) -> Result<Option<Decimal>> {
    value.map(to_decimal).transpose()
}

/// Convert a stored NUMERIC back to a measurement
pub(crate) fn from_decimal(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .with_context(|| format!("{} does not fit in f64", value))
}

pub(crate) fn from_decimal_opt(value: Option<Decimal>) -> Result<Option<f64>> {
    value.map(from_decimal).transpose()
}
