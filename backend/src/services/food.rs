//! Food creation

use crate::error::ApiError;
use crate::repositories::{CreateFood, CreateNutritionalInformation, Repositories};
use tracing::{info, warn};
use uuid::Uuid;
use vitalis_shared::types::{CreateFoodRequest, FoodResponse};
use vitalis_shared::validation::{has_valid_unit_measure, validate_name};

pub struct FoodService;

impl FoodService {
    /// Create a food owned by `user_id`
    ///
    /// The food must carry a portion in `g`/`ml` and a homemade measurement.
    /// Nutritional information, when given, is stored linked to the new food.
    pub async fn create_food(
        repos: &Repositories,
        user_id: Uuid,
        req: CreateFoodRequest,
    ) -> Result<FoodResponse, ApiError> {
        validate_name(&req.name).map_err(|msg| ApiError::Validation(format!("Name: {}", msg)))?;

        if !has_valid_unit_measure(req.portion_info.as_ref()) {
            warn!(%user_id, name = %req.name, "Food rejected: invalid unit measure");
            return Err(ApiError::InvalidUnitMeasure);
        }
        let portion = req.portion_info.unwrap_or_default();

        let food = repos
            .foods
            .create(CreateFood {
                name: req.name,
                brand: req.brand,
                description: req.description,
                barcode: req.barcode,
                portion_of_food: portion.portion_of_food,
                portion_of_food_unit: portion.portion_of_food_unit,
                homemade_measurement: portion.homemade_measurement,
                homemade_measurement_unit: portion.homemade_measurement_unit,
                is_favorite: req.is_favorite.unwrap_or(false),
                user_id,
            })
            .await
            .map_err(ApiError::Internal)?;

        let nutritional_information = match req.nutritional_information {
            Some(nutrients) => Some(
                repos
                    .nutritional_informations
                    .create(CreateNutritionalInformation {
                        food_id: food.id,
                        nutrients,
                    })
                    .await
                    .map_err(ApiError::Internal)?,
            ),
            None => None,
        };

        info!(food_id = %food.id, %user_id, "Food created");

        Ok(FoodResponse {
            food,
            nutritional_information,
        })
    }
}
