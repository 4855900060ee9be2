//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod availability_repo;
pub mod review_repo;
pub mod skill_repo;
pub mod swap_repo;
pub mod user_repo;

pub use availability_repo::AvailabilityRepository;
pub use review_repo::ReviewRepository;
pub use skill_repo::SkillRepository;
pub use swap_repo::SwapRepository;
pub use user_repo::UserRepository;
