//! API request and response types

use crate::health_metrics::ProfileMetrics;
use crate::models::{Food, NutritionalInformation, Nutrients, PhysicalActivityLevel, Sex, User};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub sex: Sex,
    /// Height in centimeters
    pub current_height: f64,
    /// Weight in kilograms
    pub current_weight: f64,
    pub physical_activity_level: PhysicalActivityLevel,
    pub weight_goal: f64,
    pub birthdate: NaiveDate,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Users and profile
// ============================================================================

/// Public view of a user (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub sex: Sex,
    pub birthdate: NaiveDate,
    pub current_height: f64,
    pub current_weight: f64,
    pub physical_activity_level: PhysicalActivityLevel,
    pub weight_goal: f64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            firstname: user.firstname,
            lastname: user.lastname,
            sex: user.sex,
            birthdate: user.birthdate,
            current_height: user.current_height,
            current_weight: user.current_weight,
            physical_activity_level: user.physical_activity_level,
            weight_goal: user.weight_goal,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// User profile with body-composition metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub user: UserResponse,
    pub bmi: f64,
    pub bmi_classification: String,
    pub bmr: i32,
    pub bmr_with_activity: i32,
    pub bmr_unit: String,
}

impl UserProfileResponse {
    pub fn new(user: User, metrics: ProfileMetrics) -> Self {
        Self {
            user: user.into(),
            bmi: metrics.bmi,
            bmi_classification: metrics.bmi_classification.label().to_string(),
            bmr: metrics.bmr,
            bmr_with_activity: metrics.bmr_with_activity,
            bmr_unit: metrics.bmr_unit.to_string(),
        }
    }
}

// ============================================================================
// Foods
// ============================================================================

/// Portion description of a food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortionInfo {
    #[serde(default)]
    pub portion_of_food: Option<f64>,
    #[serde(default)]
    pub portion_of_food_unit: Option<String>,
    #[serde(default)]
    pub homemade_measurement: Option<f64>,
    #[serde(default)]
    pub homemade_measurement_unit: Option<String>,
}

/// Food creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub nutritional_information: Option<Nutrients>,
    #[serde(default)]
    pub portion_info: Option<PortionInfo>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// Food creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodResponse {
    pub food: Food,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_information: Option<NutritionalInformation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_format() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "firstname": "John",
            "lastname": "Doe",
            "sex": "M",
            "current_height": 175,
            "current_weight": 70.5,
            "physical_activity_level": "Not very active",
            "weight_goal": 65.0,
            "birthdate": "1990-05-15",
            "email": "john.doe@example.com",
            "password": "secretpassword"
        }))
        .unwrap();

        assert_eq!(req.sex, Sex::Male);
        assert_eq!(req.current_height, 175.0);
        assert_eq!(req.physical_activity_level, PhysicalActivityLevel::NotVeryActive);
        assert_eq!(req.birthdate, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
    }

    #[test]
    fn test_create_food_request_optional_fields() {
        let req: CreateFoodRequest = serde_json::from_value(json!({ "name": "Apple" })).unwrap();

        assert_eq!(req.name, "Apple");
        assert!(req.portion_info.is_none());
        assert!(req.nutritional_information.is_none());
        assert!(req.is_favorite.is_none());
    }
}
