//! Registration and authentication
//!
//! Password hashing and verification run on the blocking thread pool.

use crate::auth::{JwtService, PasswordService, TokenKind};
use crate::error::ApiError;
use crate::providers::DateProvider;
use crate::repositories::{CreateUser, EmailTaken, Repositories};
use tracing::{debug, info};
use vitalis_shared::types::{AuthTokens, LoginRequest, RegisterRequest};
use vitalis_shared::validation::validate_registration;
use vitalis_shared::User;

pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// The initial weight and height are appended to the user's measurement
    /// history in the same write as the user itself.
    pub async fn register(
        repos: &Repositories,
        passwords: &PasswordService,
        dates: &dyn DateProvider,
        req: RegisterRequest,
    ) -> Result<User, ApiError> {
        let today = dates.now().date_naive();
        validate_registration(&req, today)
            .map_err(|e| ApiError::Validation(e.user_message()))?;

        let exists = repos
            .users
            .find_by_email(&req.email)
            .await
            .map_err(ApiError::Internal)?;
        if exists.is_some() {
            return Err(ApiError::UserAlreadyExists);
        }

        let password_hash = passwords
            .hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        // The lookup above is only a fast path; a concurrent registration
        // of the same email is caught by the store
        let user = repos
            .users
            .create_with_initial_measurements(CreateUser {
                firstname: req.firstname,
                lastname: req.lastname,
                sex: req.sex,
                birthdate: req.birthdate,
                current_height: req.current_height,
                current_weight: req.current_weight,
                physical_activity_level: req.physical_activity_level,
                weight_goal: req.weight_goal,
                email: req.email,
                password_hash,
            })
            .await
            .map_err(|err| {
                if err.is::<EmailTaken>() {
                    ApiError::UserAlreadyExists
                } else {
                    ApiError::Internal(err)
                }
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check an email/password pair
    ///
    /// Unknown email and wrong password fail the same way.
    pub async fn authenticate(
        repos: &Repositories,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let user = repos
            .users
            .find_by_email(email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(ApiError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Authenticate and issue a token pair
    pub async fn login(
        repos: &Repositories,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<AuthTokens, ApiError> {
        let user = Self::authenticate(repos, &req.email, &req.password).await?;
        jwt.issue_tokens(user.id).map_err(ApiError::Internal)
    }

    /// Exchange a refresh token for a new pair
    pub async fn refresh_token(
        repos: &Repositories,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let claims = jwt
            .validate(refresh_token, TokenKind::Refresh)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        repos
            .users
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        jwt.issue_tokens(user_id).map_err(ApiError::Internal)
    }
}
