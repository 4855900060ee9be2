//! Swap negotiation response DTOs

use serde::Serialize;

use crate::models::SwapRequest;

/// Swap creation response
#[derive(Debug, Serialize)]
pub struct CreateSwapResponse {
    pub message: String,
    pub swap: SwapRequest,
}

/// Generic acknowledgement response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
