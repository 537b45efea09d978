//! Health metrics calculations module
//!
//! BMI, BMI classification and Harris-Benedict basal metabolic rate,
//! computed from the body attributes stored on a user.
//!
//! All functions here are pure. Rounding rules:
//! - BMI is rounded to one decimal place before it is classified
//! - BMR values are truncated to whole kilocalories, never rounded

use crate::models::{PhysicalActivityLevel, Sex};
use serde::{Deserialize, Serialize};

/// Unit label attached to every BMR figure
pub const ENERGY_UNIT: &str = "kcal";

// ============================================================================
// Activity multipliers
// ============================================================================

impl PhysicalActivityLevel {
    /// Multiplier applied to the basal metabolic rate
    pub fn multiplier(&self) -> f64 {
        match self {
            PhysicalActivityLevel::Sedentary => 1.2,
            PhysicalActivityLevel::NotVeryActive => 1.375,
            PhysicalActivityLevel::Moderate => 1.55,
            PhysicalActivityLevel::VeryActive => 1.725,
            PhysicalActivityLevel::Extreme => 1.9,
        }
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClassification {
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiClassification {
    /// Label returned to API clients
    pub fn label(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "Abaixo do peso",
            BmiClassification::Normal => "Peso normal",
            BmiClassification::Overweight => "Sobrepeso",
            BmiClassification::ObesityClass1 => "Obesidade grau I",
            BmiClassification::ObesityClass2 => "Obesidade grau II",
            BmiClassification::ObesityClass3 => "Obesidade grau III",
        }
    }

    /// English description, used in logs
    pub fn description(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "Underweight",
            BmiClassification::Normal => "Normal weight",
            BmiClassification::Overweight => "Overweight",
            BmiClassification::ObesityClass1 => "Obesity (Class I)",
            BmiClassification::ObesityClass2 => "Obesity (Class II)",
            BmiClassification::ObesityClass3 => "Obesity (Class III)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to one decimal place
///
/// Rounds the exact binary value, so 24.95 (stored as 24.9499999…) becomes
/// 24.9. Values sitting exactly on a half tenth (x.25, x.75) round away
/// from zero.
pub fn round_to_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Quarter values are exact in binary and are the only true ties
    if (value * 4.0).fract() == 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Classify a BMI already rounded to one decimal place
///
/// Bands: ≤18.5, 18.6–24.9, 25.0–29.9, 30.0–34.9, 35.0–39.9, ≥40.0.
/// The comparison is done in tenths so that float noise (24.9 * 10 =
/// 249.00000000000003) cannot push a value across a boundary.
pub fn classify_bmi(bmi: f64) -> BmiClassification {
    let tenths = (bmi * 10.0).round() as i64;

    match tenths {
        i64::MIN..=185 => BmiClassification::Underweight,
        186..=249 => BmiClassification::Normal,
        250..=299 => BmiClassification::Overweight,
        300..=349 => BmiClassification::ObesityClass1,
        350..=399 => BmiClassification::ObesityClass2,
        _ => BmiClassification::ObesityClass3,
    }
}

// ============================================================================
// BMR
// ============================================================================

/// Calculate BMR using the 1919 Harris-Benedict equation
///
/// Men:   BMR = 66.5 + 13.75 × weight(kg) + 5.003 × height(cm) - 6.755 × age(y)
/// Women: BMR = 655.1 + 9.563 × weight(kg) + 1.85 × height(cm) - 4.676 × age(y)
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
) -> f64 {
    let age = age_years as f64;
    match sex {
        Sex::Male => 66.5 + 13.75 * weight_kg + 5.003 * height_cm - 6.755 * age,
        Sex::Female => 655.1 + 9.563 * weight_kg + 1.85 * height_cm - 4.676 * age,
    }
}

/// Drop the fractional part of a kilocalorie figure
pub fn truncate_kcal(value: f64) -> i32 {
    value.trunc() as i32
}

// ============================================================================
// Profile metrics
// ============================================================================

/// Body attributes needed for the profile metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: i32,
    pub sex: Sex,
    pub activity_level: PhysicalActivityLevel,
}

/// Computed profile metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileMetrics {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub bmi_classification: BmiClassification,
    /// BMR without activity, truncated
    pub bmr: i32,
    /// BMR times the activity multiplier, truncated
    pub bmr_with_activity: i32,
    pub bmr_unit: &'static str,
}

/// Compute BMI, classification and both BMR figures for a body profile
///
/// The activity multiplier is applied to the untruncated BMR; each figure
/// is truncated independently.
pub fn calculate_profile_metrics(profile: &BodyProfile) -> ProfileMetrics {
    let bmi = round_to_one_decimal(calculate_bmi(profile.weight_kg, profile.height_cm));

    let bmr = calculate_bmr_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let bmr_with_activity = bmr * profile.activity_level.multiplier();

    ProfileMetrics {
        bmi,
        bmi_classification: classify_bmi(bmi),
        bmr: truncate_kcal(bmr),
        bmr_with_activity: truncate_kcal(bmr_with_activity),
        bmr_unit: ENERGY_UNIT,
    }
}
