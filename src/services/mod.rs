//! Business logic services

pub mod auth_service;
pub mod review_service;
pub mod skill_service;
pub mod swap_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use review_service::ReviewService;
pub use skill_service::SkillService;
pub use swap_service::SwapService;
pub use user_service::UserService;
