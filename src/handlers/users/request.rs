//! User profile request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_BIO_LENGTH, MAX_LOCATION_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH},
    models::NewAvailabilitySlot,
};

/// Profile update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_BIO_LENGTH))]
    pub bio: Option<String>,

    #[validate(url)]
    pub photo: Option<String>,
}

/// Availability replacement request
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub slots: Vec<NewAvailabilitySlot>,
}
