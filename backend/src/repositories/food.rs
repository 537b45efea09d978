//! Food and nutritional information stores

use super::{from_decimal_opt, to_decimal_opt};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use vitalis_shared::{Food, NutritionalInformation, Nutrients};

/// Input for creating a food
#[derive(Debug, Clone, Default)]
pub struct CreateFood {
    pub name: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub portion_of_food: Option<f64>,
    pub portion_of_food_unit: Option<String>,
    pub homemade_measurement: Option<f64>,
    pub homemade_measurement_unit: Option<String>,
    pub is_favorite: bool,
    pub user_id: Uuid,
}

/// Input for attaching nutritional information to a food
#[derive(Debug, Clone)]
pub struct CreateNutritionalInformation {
    pub food_id: Uuid,
    pub nutrients: Nutrients,
}

#[async_trait]
pub trait FoodsRepository: Send + Sync {
    async fn create(&self, data: CreateFood) -> Result<Food>;
}

#[async_trait]
pub trait NutritionalInformationsRepository: Send + Sync {
    async fn create(&self, data: CreateNutritionalInformation) -> Result<NutritionalInformation>;
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct FoodRow {
    id: Uuid,
    name: String,
    brand: Option<String>,
    description: Option<String>,
    barcode: Option<String>,
    portion_of_food: Option<Decimal>,
    portion_of_food_unit: Option<String>,
    homemade_measurement: Option<Decimal>,
    homemade_measurement_unit: Option<String>,
    is_favorite: bool,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<FoodRow> for Food {
    type Error = anyhow::Error;

    fn try_from(row: FoodRow) -> Result<Self> {
        Ok(Food {
            id: row.id,
            name: row.name,
            brand: row.brand,
            description: row.description,
            barcode: row.barcode,
            portion_of_food: from_decimal_opt(row.portion_of_food)?,
            portion_of_food_unit: row.portion_of_food_unit,
            homemade_measurement: from_decimal_opt(row.homemade_measurement)?,
            homemade_measurement_unit: row.homemade_measurement_unit,
            is_favorite: row.is_favorite,
            user_id: row.user_id,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct NutritionalInformationRow {
    id: Uuid,
    food_id: Uuid,
    calories: Option<Decimal>,
    carbohydrates: Option<Decimal>,
    protein: Option<Decimal>,
    fat: Option<Decimal>,
    monounsaturated_fat: Option<Decimal>,
    saturated_fat: Option<Decimal>,
    polyunsaturated_fat: Option<Decimal>,
    trans_fat: Option<Decimal>,
    cholesterol: Option<Decimal>,
    sodium: Option<Decimal>,
    potassium: Option<Decimal>,
    fiber: Option<Decimal>,
    sugar: Option<Decimal>,
    calcium: Option<Decimal>,
    iron: Option<Decimal>,
    vitamin_a: Option<Decimal>,
    vitamin_c: Option<Decimal>,
}

impl TryFrom<NutritionalInformationRow> for NutritionalInformation {
    type Error = anyhow::Error;

    fn try_from(row: NutritionalInformationRow) -> Result<Self> {
        Ok(NutritionalInformation {
            id: row.id,
            food_id: row.food_id,
            nutrients: Nutrients {
                calories: from_decimal_opt(row.calories)?,
                carbohydrates: from_decimal_opt(row.carbohydrates)?,
                protein: from_decimal_opt(row.protein)?,
                fat: from_decimal_opt(row.fat)?,
                monounsaturated_fat: from_decimal_opt(row.monounsaturated_fat)?,
                saturated_fat: from_decimal_opt(row.saturated_fat)?,
                polyunsaturated_fat: from_decimal_opt(row.polyunsaturated_fat)?,
                trans_fat: from_decimal_opt(row.trans_fat)?,
                cholesterol: from_decimal_opt(row.cholesterol)?,
                sodium: from_decimal_opt(row.sodium)?,
                potassium: from_decimal_opt(row.potassium)?,
                fiber: from_decimal_opt(row.fiber)?,
                sugar: from_decimal_opt(row.sugar)?,
                calcium: from_decimal_opt(row.calcium)?,
                iron: from_decimal_opt(row.iron)?,
                vitamin_a: from_decimal_opt(row.vitamin_a)?,
                vitamin_c: from_decimal_opt(row.vitamin_c)?,
            },
        })
    }
}

pub struct PgFoodsRepository {
    pool: PgPool,
}

impl PgFoodsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodsRepository for PgFoodsRepository {
    async fn create(&self, data: CreateFood) -> Result<Food> {
        let row = sqlx::query_as::<_, FoodRow>(
            r#"
            INSERT INTO foods (name, brand, description, barcode, portion_of_food,
                               portion_of_food_unit, homemade_measurement,
                               homemade_measurement_unit, is_favorite, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, brand, description, barcode, portion_of_food,
                      portion_of_food_unit, homemade_measurement,
                      homemade_measurement_unit, is_favorite, user_id, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.description)
        .bind(&data.barcode)
        .bind(to_decimal_opt(data.portion_of_food)?)
        .bind(&data.portion_of_food_unit)
        .bind(to_decimal_opt(data.homemade_measurement)?)
        .bind(&data.homemade_measurement_unit)
        .bind(data.is_favorite)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert food")?;

        row.try_into()
    }
}

pub struct PgNutritionalInformationsRepository {
    pool: PgPool,
}

impl PgNutritionalInformationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NutritionalInformationsRepository for PgNutritionalInformationsRepository {
    async fn create(&self, data: CreateNutritionalInformation) -> Result<NutritionalInformation> {
        let n = &data.nutrients;

        let row = sqlx::query_as::<_, NutritionalInformationRow>(
            r#"
            INSERT INTO nutritional_informations
                (food_id, calories, carbohydrates, protein, fat, monounsaturated_fat,
                 saturated_fat, polyunsaturated_fat, trans_fat, cholesterol, sodium,
                 potassium, fiber, sugar, calcium, iron, vitamin_a, vitamin_c)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING id, food_id, calories, carbohydrates, protein, fat, monounsaturated_fat,
                      saturated_fat, polyunsaturated_fat, trans_fat, cholesterol, sodium,
                      potassium, fiber, sugar, calcium, iron, vitamin_a, vitamin_c
            "#,
        )
        .bind(data.food_id)
        .bind(to_decimal_opt(n.calories)?)
        .bind(to_decimal_opt(n.carbohydrates)?)
        .bind(to_decimal_opt(n.protein)?)
        .bind(to_decimal_opt(n.fat)?)
        .bind(to_decimal_opt(n.monounsaturated_fat)?)
        .bind(to_decimal_opt(n.saturated_fat)?)
        .bind(to_decimal_opt(n.polyunsaturated_fat)?)
        .bind(to_decimal_opt(n.trans_fat)?)
        .bind(to_decimal_opt(n.cholesterol)?)
        .bind(to_decimal_opt(n.sodium)?)
        .bind(to_decimal_opt(n.potassium)?)
        .bind(to_decimal_opt(n.fiber)?)
        .bind(to_decimal_opt(n.sugar)?)
        .bind(to_decimal_opt(n.calcium)?)
        .bind(to_decimal_opt(n.iron)?)
        .bind(to_decimal_opt(n.vitamin_a)?)
        .bind(to_decimal_opt(n.vitamin_c)?)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert nutritional information")?;

        row.try_into()
    }
}
