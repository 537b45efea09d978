//! Data models for the Vitalis application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sex used for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Storage code ("M" or "F")
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" | "m" => Ok(Sex::Male),
            "F" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Physical activity level, spelled the way it is stored and sent over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalActivityLevel {
    #[serde(rename = "Sedentary")]
    Sedentary,
    #[serde(rename = "Not very active")]
    NotVeryActive,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Very active")]
    VeryActive,
    #[serde(rename = "Extreme")]
    Extreme,
}

impl PhysicalActivityLevel {
    pub const ALL: [PhysicalActivityLevel; 5] = [
        PhysicalActivityLevel::Sedentary,
        PhysicalActivityLevel::NotVeryActive,
        PhysicalActivityLevel::Moderate,
        PhysicalActivityLevel::VeryActive,
        PhysicalActivityLevel::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicalActivityLevel::Sedentary => "Sedentary",
            PhysicalActivityLevel::NotVeryActive => "Not very active",
            PhysicalActivityLevel::Moderate => "Moderate",
            PhysicalActivityLevel::VeryActive => "Very active",
            PhysicalActivityLevel::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for PhysicalActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PhysicalActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown physical activity level: {}", s))
    }
}

/// User account together with the body attributes used by the profile calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub sex: Sex,
    pub birthdate: NaiveDate,
    /// Current height in centimeters
    pub current_height: f64,
    /// Current weight in kilograms
    pub current_weight: f64,
    pub physical_activity_level: PhysicalActivityLevel,
    /// Target weight in kilograms
    pub weight_goal: f64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Weight history entry (kg)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub id: Uuid,
    pub value: f64,
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
}

/// Height history entry (cm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightRecord {
    pub id: Uuid,
    pub value: f64,
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
}

/// Food catalog entry owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
}

/// Nutrient values for a food portion. Every nutrient is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub monounsaturated_fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub polyunsaturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub vitamin_c: Option<f64>,
}

/// Nutritional information row linked to a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInformation {
    pub id: Uuid,
    pub food_id: Uuid,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_wire_names() {
        let json = serde_json::to_string(&PhysicalActivityLevel::NotVeryActive).unwrap();
        assert_eq!(json, "\"Not very active\"");

        let level: PhysicalActivityLevel = serde_json::from_str("\"Very active\"").unwrap();
        assert_eq!(level, PhysicalActivityLevel::VeryActive);
    }

    #[test]
    fn test_activity_level_from_str_matches_display() {
        for level in PhysicalActivityLevel::ALL {
            assert_eq!(level.to_string().parse::<PhysicalActivityLevel>(), Ok(level));
        }
        assert!("moderate".parse::<PhysicalActivityLevel>().is_err());
    }

    #[test]
    fn test_sex_codes() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"F\"");
        assert_eq!("M".parse::<Sex>(), Ok(Sex::Male));
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            sex: Sex::Male,
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            current_height: 175.0,
            current_weight: 70.5,
            physical_activity_level: PhysicalActivityLevel::Moderate,
            weight_goal: 65.0,
            email: "john.doe@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["physical_activity_level"], "Moderate");
    }
}
