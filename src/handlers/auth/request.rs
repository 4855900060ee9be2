//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_BIO_LENGTH, MAX_LOCATION_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_BIO_LENGTH))]
    pub bio: Option<String>,
}

/// Password login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// External-provider login request
///
/// The provider token itself is verified upstream; the profile is treated
/// as an opaque credential source.
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleAuthRequest {
    pub token: Option<String>,

    #[validate(nested)]
    pub profile: GoogleProfile,
}

/// External-provider profile payload
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleProfile {
    pub id: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub picture: Option<String>,
}
