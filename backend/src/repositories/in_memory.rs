//! In-memory stores
//!
//! Used by `storage.backend = "memory"` and by the test suites. Records live
//! in `RwLock`-guarded vectors and ids are generated here, mirroring what the
//! database defaults do.

use super::food::{
    CreateFood, CreateNutritionalInformation, FoodsRepository, NutritionalInformationsRepository,
};
use super::height::{CreateHeight, HeightsRepository};
use super::user::{CreateUser, EmailTaken, UsersRepository};
use super::weight::{CreateWeight, WeightsRepository};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use vitalis_shared::{Food, HeightRecord, NutritionalInformation, User, WeightRecord};

/// Users plus the measurement stores that registration appends to
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<Vec<User>>,
    weights: Arc<InMemoryWeightsRepository>,
    heights: Arc<InMemoryHeightsRepository>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share measurement stores with the rest of the bundle
    pub fn with_measurements(
        weights: Arc<InMemoryWeightsRepository>,
        heights: Arc<InMemoryHeightsRepository>,
    ) -> Self {
        Self {
            users: RwLock::default(),
            weights,
            heights,
        }
    }

    fn insert(users: &mut Vec<User>, data: &CreateUser) -> Result<User> {
        // Same guarantee as the UNIQUE constraint on users.email
        if users.iter().any(|u| u.email == data.email) {
            return Err(EmailTaken(data.email.clone()).into());
        }

        let user = User {
            id: Uuid::new_v4(),
            firstname: data.firstname.clone(),
            lastname: data.lastname.clone(),
            sex: data.sex,
            birthdate: data.birthdate,
            current_height: data.current_height,
            current_weight: data.current_weight,
            physical_activity_level: data.physical_activity_level,
            weight_goal: data.weight_goal,
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn create(&self, data: CreateUser) -> Result<User> {
        let mut users = self.users.write().await;
        Self::insert(&mut users, &data)
    }

    async fn create_with_initial_measurements(&self, data: CreateUser) -> Result<User> {
        // Hold the user lock until the history is written so no reader sees
        // a user without it
        let mut users = self.users.write().await;

        let user = Self::insert(&mut users, &data)?;
        self.weights.create(data.initial_weight(user.id)).await?;
        self.heights.create(data.initial_height(user.id)).await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryWeightsRepository {
    weights: RwLock<Vec<WeightRecord>>,
}

impl InMemoryWeightsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for one user, oldest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<WeightRecord> {
        let weights = self.weights.read().await;
        weights.iter().filter(|w| w.user_id == user_id).cloned().collect()
    }
}

#[async_trait]
impl WeightsRepository for InMemoryWeightsRepository {
    async fn create(&self, data: CreateWeight) -> Result<WeightRecord> {
        let record = WeightRecord {
            id: Uuid::new_v4(),
            value: data.value,
            date: data.date.unwrap_or_else(Utc::now),
            user_id: data.user_id,
        };
        self.weights.write().await.push(record.clone());
        Ok(record)
    }
}

#[derive(Default)]
pub struct InMemoryHeightsRepository {
    heights: RwLock<Vec<HeightRecord>>,
}

impl InMemoryHeightsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for one user, oldest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<HeightRecord> {
        let heights = self.heights.read().await;
        heights.iter().filter(|h| h.user_id == user_id).cloned().collect()
    }
}

#[async_trait]
impl HeightsRepository for InMemoryHeightsRepository {
    async fn create(&self, data: CreateHeight) -> Result<HeightRecord> {
        let record = HeightRecord {
            id: Uuid::new_v4(),
            value: data.value,
            date: data.date.unwrap_or_else(Utc::now),
            user_id: data.user_id,
        };
        self.heights.write().await.push(record.clone());
        Ok(record)
    }
}

#[derive(Default)]
pub struct InMemoryFoodsRepository {
    foods: RwLock<Vec<Food>>,
}

impl InMemoryFoodsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.foods.read().await.len()
    }
}

#[async_trait]
impl FoodsRepository for InMemoryFoodsRepository {
    async fn create(&self, data: CreateFood) -> Result<Food> {
        let food = Food {
            id: Uuid::new_v4(),
            name: data.name,
            brand: data.brand,
            description: data.description,
            barcode: data.barcode,
            portion_of_food: data.portion_of_food,
            portion_of_food_unit: data.portion_of_food_unit,
            homemade_measurement: data.homemade_measurement,
            homemade_measurement_unit: data.homemade_measurement_unit,
            is_favorite: data.is_favorite,
            user_id: data.user_id,
            created_at: Utc::now(),
        };
        self.foods.write().await.push(food.clone());
        Ok(food)
    }
}

#[derive(Default)]
pub struct InMemoryNutritionalInformationsRepository {
    records: RwLock<Vec<NutritionalInformation>>,
}

impl InMemoryNutritionalInformationsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_food_id(&self, food_id: Uuid) -> Option<NutritionalInformation> {
        let records = self.records.read().await;
        records.iter().find(|r| r.food_id == food_id).cloned()
    }
}

#[async_trait]
impl NutritionalInformationsRepository for InMemoryNutritionalInformationsRepository {
    async fn create(&self, data: CreateNutritionalInformation) -> Result<NutritionalInformation> {
        let mut records = self.records.write().await;

        // One row per food, as with the UNIQUE food_id column
        if records.iter().any(|r| r.food_id == data.food_id) {
            bail!("food {} already has nutritional information", data.food_id);
        }

        let record = NutritionalInformation {
            id: Uuid::new_v4(),
            food_id: data.food_id,
            nutrients: data.nutrients,
        };
        records.push(record.clone());
        Ok(record)
    }
}
