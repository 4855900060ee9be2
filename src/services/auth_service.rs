//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued credential pair
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user with a password
    pub async fn register(
        pool: &SqlitePool,
        config: &Config,
        name: &str,
        email: &str,
        password: &str,
        location: Option<&str>,
        bio: Option<&str>,
    ) -> AppResult<(User, TokenPair)> {
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        let user =
            UserRepository::create(pool, name, email, &password_hash, location, bio).await?;

        let tokens = Self::generate_tokens(user.id, config)?;
        Ok((user, tokens))
    }

    /// Login with email and password
    ///
    /// Accounts created through an external identity provider have no
    /// password hash and cannot log in this way.
    pub async fn login(
        pool: &SqlitePool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, TokenPair)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AppError::InvalidCredentials);
        };

        if !Self::verify_password(password, hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let tokens = Self::generate_tokens(user.id, config)?;
        Ok((user, tokens))
    }

    /// Login via an external identity provider profile
    ///
    /// Looks the user up by email; creates a password-less account on first
    /// login. Returns whether the account was created.
    pub async fn login_external(
        pool: &SqlitePool,
        config: &Config,
        provider_id: &str,
        email: &str,
        name: &str,
        picture: Option<&str>,
    ) -> AppResult<(User, TokenPair, bool)> {
        if let Some(user) = UserRepository::find_by_email(pool, email).await? {
            let tokens = Self::generate_tokens(user.id, config)?;
            return Ok((user, tokens, false));
        }

        let user = UserRepository::create_external(pool, name, email, picture, provider_id).await?;
        let tokens = Self::generate_tokens(user.id, config)?;
        Ok((user, tokens, true))
    }

    /// Verify a JWT and extract its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash a password with a random per-password salt
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify a password against a stored hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issue the short-lived access token and longer-lived refresh token
    fn generate_tokens(user_id: i64, config: &Config) -> AppResult<TokenPair> {
        let access_expiry = Duration::hours(config.jwt.access_expiry_hours);
        let refresh_expiry = Duration::days(config.jwt.refresh_expiry_days);

        let access_token = Self::sign_token(user_id, access_expiry, &config.jwt.secret)?;
        let refresh_token = Self::sign_token(user_id, refresh_expiry, &config.jwt.secret)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: access_expiry.num_seconds(),
        })
    }

    fn sign_token(user_id: i64, expiry: Duration, secret: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + expiry).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }
}
