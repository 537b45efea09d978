//! Profile calculator: BMI and basal metabolic rate for a stored user

use crate::error::ApiError;
use crate::providers::date::start_of_day_utc;
use crate::providers::DateProvider;
use crate::repositories::Repositories;
use tracing::debug;
use uuid::Uuid;
use vitalis_shared::health_metrics::{calculate_profile_metrics, BodyProfile};
use vitalis_shared::types::UserProfileResponse;
use vitalis_shared::User;

pub struct ProfileService;

impl ProfileService {
    /// Load a user and compute their body-composition metrics
    pub async fn get_user_profile(
        repos: &Repositories,
        dates: &dyn DateProvider,
        user_id: Uuid,
    ) -> Result<UserProfileResponse, ApiError> {
        let user = repos
            .users
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::ResourceNotFound)?;

        let age_years = Self::age_of(&user, dates);
        let metrics = calculate_profile_metrics(&BodyProfile {
            height_cm: user.current_height,
            weight_kg: user.current_weight,
            age_years,
            sex: user.sex,
            activity_level: user.physical_activity_level,
        });

        debug!(
            user_id = %user.id,
            age_years,
            bmi = metrics.bmi,
            classification = metrics.bmi_classification.description(),
            bmr = metrics.bmr,
            "Profile metrics computed"
        );

        Ok(UserProfileResponse::new(user, metrics))
    }

    /// Whole years from the birthdate (midnight UTC) to now
    fn age_of(user: &User, dates: &dyn DateProvider) -> i32 {
        let born = start_of_day_utc(user.birthdate);
        dates.compare_in_years(born.into(), dates.now().into())
    }
}
