use super::dto::{AuthResponse, LoginRequest, RegisterRequest, TokenClaims, UserResponse};
use super::model::{User, UserRole};
use super::repository::AuthRepository;
use crate::common::error::{AppError, AppResult};
use crate::common::security;
use crate::state::AppState;
use anyhow::anyhow;
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct AuthService;

impl AuthService {
    /// New accounts are signed in straight away.
    pub async fn register(state: AppState, req: RegisterRequest) -> AppResult<AuthResponse> {
        req.validate()?;

        // Hash before taking the lock.
        let password_hash = security::hash_password(&state.config.password, &req.password)?;

        let mut db = state.db.lock().await;
        if AuthRepository::find_user_by_email(&db, &req.email).is_some() {
            return Err(AppError::Validation("Email already exists".to_string()));
        }
        if AuthRepository::find_user_by_username(&db, &req.username).is_some() {
            return Err(AppError::Validation("Username already exists".to_string()));
        }

        let user = AuthRepository::create_user(
            &mut db,
            &req.username,
            &req.email,
            &password_hash,
            &req.full_name,
            UserRole::User,
        );
        drop(db);
        info!("Registered user {}", user.username);

        Ok(AuthResponse {
            access_token: Self::create_access_token(&state, &user)?,
            access_token_expires_in: state.config.jwt_ttl_seconds,
            user: UserResponse::from(&user),
        })
    }

    pub async fn login(state: AppState, req: LoginRequest) -> AppResult<AuthResponse> {
        req.validate()?;

        let user = {
            let db = state.db.lock().await;
            AuthRepository::find_user_by_email(&db, &req.email)
        }
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        security::verify_password(&req.password, &user.password_hash)
            .map_err(|_| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let access_token = Self::create_access_token(&state, &user)?;

        Ok(AuthResponse {
            access_token,
            access_token_expires_in: state.config.jwt_ttl_seconds,
            user: UserResponse::from(&user),
        })
    }

    pub async fn get_me(state: AppState, user_id: Uuid) -> AppResult<UserResponse> {
        let db = state.db.lock().await;
        let user = AuthRepository::find_user_by_id(&db, user_id)
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;
        Ok(UserResponse::from(&user))
    }

    fn create_access_token(state: &AppState, user: &User) -> AppResult<String> {
        let now = get_current_timestamp();
        let claims = TokenClaims {
            sub: user.id,
            role: user.role.as_str().to_string(),
            iat: now as usize,
            exp: now.saturating_add(state.config.jwt_ttl_seconds) as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| anyhow!("Failed to sign token: {}", e))?;

        Ok(token)
    }
}
