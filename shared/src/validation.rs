//! Input validation functions
//!
//! Validators return `Err(message)` with a human-readable reason; callers
//! decide which error variant the failure becomes.

use crate::types::{PortionInfo, RegisterRequest};
use crate::units::PortionUnit;
use chrono::NaiveDate;
use validator::ValidateEmail;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a birthdate against `today`
/// Must not be in the future, and age must be between 1 and 150 years
pub fn validate_birthdate(birthdate: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if birthdate > today {
        return Err("Birthdate cannot be in the future".to_string());
    }

    match today.years_since(birthdate) {
        Some(age) if age < 1 => Err("Age must be at least 1 year".to_string()),
        Some(age) if age > 150 => Err("Age cannot exceed 150 years".to_string()),
        None => Err("Invalid birthdate".to_string()),
        _ => Ok(()),
    }
}

/// Validate a required name field
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }
    if trimmed.len() > 100 {
        return Err("cannot exceed 100 characters".to_string());
    }
    Ok(())
}

/// Validate a registration request, returning the first failing field
pub fn validate_registration(req: &RegisterRequest, today: NaiveDate) -> Result<(), ValidationError> {
    let checks = [
        ("firstname", validate_name(&req.firstname)),
        ("lastname", validate_name(&req.lastname)),
        ("email", validate_email(&req.email)),
        ("password", validate_password(&req.password)),
        ("current_height", validate_height_cm(req.current_height)),
        ("current_weight", validate_weight(req.current_weight)),
        ("weight_goal", validate_weight(req.weight_goal)),
        ("birthdate", validate_birthdate(req.birthdate, today)),
    ];

    for (field, result) in checks {
        if let Err(message) = result {
            return Err(ValidationError::new(field, &message));
        }
    }

    Ok(())
}

// ============================================================================
// Food portions
// ============================================================================

/// Whether a food carries a usable unit measure
///
/// Both halves must be present: a non-zero portion quantity in `g` or `ml`,
/// and a non-zero homemade measurement with a non-empty unit.
pub fn has_valid_unit_measure(portion: Option<&PortionInfo>) -> bool {
    let Some(portion) = portion else {
        return false;
    };

    let has_portion_of_food = is_present(portion.portion_of_food)
        && portion
            .portion_of_food_unit
            .as_deref()
            .is_some_and(|unit| unit.parse::<PortionUnit>().is_ok());

    let has_homemade_measurement = is_present(portion.homemade_measurement)
        && portion
            .homemade_measurement_unit
            .as_deref()
            .is_some_and(|unit| !unit.is_empty());

    has_portion_of_food && has_homemade_measurement
}

/// Set, non-zero and not NaN
fn is_present(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0 && !v.is_nan())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "firstname" => "First Name",
        "lastname" => "Last Name",
        "email" => "Email",
        "password" => "Password",
        "current_height" => "Height",
        "current_weight" => "Current Weight",
        "weight_goal" => "Weight Goal",
        "birthdate" => "Birthdate",
        "physical_activity_level" => "Physical Activity Level",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhysicalActivityLevel, Sex};
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            sex: Sex::Male,
            current_height: 175.0,
            current_weight: 70.5,
            physical_activity_level: PhysicalActivityLevel::Moderate,
            weight_goal: 65.0,
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            email: "john.doe@example.com".to_string(),
            password: "secretpassword".to_string(),
        }
    }

    fn portion(
        portion_of_food: Option<f64>,
        portion_unit: Option<&str>,
        homemade: Option<f64>,
        homemade_unit: Option<&str>,
    ) -> PortionInfo {
        PortionInfo {
            portion_of_food,
            portion_of_food_unit: portion_unit.map(str::to_string),
            homemade_measurement: homemade,
            homemade_measurement_unit: homemade_unit.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("user@localhost").is_ok());
        assert!(validate_email("no-at-sign.example.com").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secretpassword").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_birthdate() {
        assert!(validate_birthdate(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), today()).is_ok());
        assert!(validate_birthdate(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), today()).is_err());
        assert!(validate_birthdate(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), today()).is_err());
        assert!(validate_birthdate(NaiveDate::from_ymd_opt(1800, 1, 1).unwrap(), today()).is_err());
    }

    #[test]
    fn test_validate_registration_accepts_valid_request() {
        assert!(validate_registration(&register_request(), today()).is_ok());
    }

    #[test]
    fn test_validate_registration_reports_field() {
        let mut req = register_request();
        req.current_height = 30.0;

        let err = validate_registration(&req, today()).unwrap_err();
        assert_eq!(err.field, "current_height");
        assert_eq!(err.user_message(), "Height: Height must be at least 50 cm");
    }

    #[test]
    fn test_validate_registration_rejects_blank_name() {
        let mut req = register_request();
        req.lastname = "   ".to_string();

        let err = validate_registration(&req, today()).unwrap_err();
        assert_eq!(err.field, "lastname");
    }

    #[test]
    fn test_unit_measure_accepts_complete_portion() {
        let info = portion(Some(50.0), Some("g"), Some(2.0), Some("units"));
        assert!(has_valid_unit_measure(Some(&info)));

        let info = portion(Some(200.0), Some("ml"), Some(1.0), Some("cup"));
        assert!(has_valid_unit_measure(Some(&info)));
    }

    #[test]
    fn test_unit_measure_rejects_missing_portion_info() {
        assert!(!has_valid_unit_measure(None));
        assert!(!has_valid_unit_measure(Some(&PortionInfo::default())));
    }

    #[test]
    fn test_unit_measure_rejects_disallowed_unit() {
        let info = portion(Some(50.0), Some("kg"), Some(2.0), Some("units"));
        assert!(!has_valid_unit_measure(Some(&info)));
    }

    #[test]
    fn test_unit_measure_requires_homemade_measurement() {
        let info = portion(Some(50.0), Some("g"), None, Some("units"));
        assert!(!has_valid_unit_measure(Some(&info)));

        let info = portion(Some(50.0), Some("g"), Some(2.0), Some(""));
        assert!(!has_valid_unit_measure(Some(&info)));
    }

    #[test]
    fn test_unit_measure_treats_zero_as_missing() {
        let info = portion(Some(0.0), Some("g"), Some(2.0), Some("units"));
        assert!(!has_valid_unit_measure(Some(&info)));

        let info = portion(Some(50.0), Some("g"), Some(0.0), Some("units"));
        assert!(!has_valid_unit_measure(Some(&info)));
    }

    #[test]
    fn test_unit_measure_only_checks_presence_of_quantities() {
        // Sign is not part of the rule; only zero and NaN count as missing
        let info = portion(Some(-30.0), Some("g"), Some(2.0), Some("units"));
        assert!(has_valid_unit_measure(Some(&info)));

        let info = portion(Some(30.0), Some("ml"), Some(-1.0), Some("cup"));
        assert!(has_valid_unit_measure(Some(&info)));

        let info = portion(Some(f64::NAN), Some("g"), Some(2.0), Some("units"));
        assert!(!has_valid_unit_measure(Some(&info)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok(),
                "Height {} should be valid", height);
        }

        #[test]
        fn prop_invalid_height_below_min(height in 0.0f64..50.0) {
            prop_assert!(validate_height_cm(height).is_err(),
                "Height {} should be invalid (below minimum)", height);
        }

        /// Any unit other than g/ml is refused, whatever the quantities
        #[test]
        fn prop_unknown_portion_unit_rejected(
            unit in "[a-zA-Z]{1,6}",
            quantity in 1.0f64..1000.0
        ) {
            prop_assume!(unit != "g" && unit != "ml");
            let info = portion(Some(quantity), Some(&unit), Some(1.0), Some("units"));
            prop_assert!(!has_valid_unit_measure(Some(&info)));
        }
    }
}
