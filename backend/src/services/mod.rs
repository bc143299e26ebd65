//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer.

pub mod baby_profile;
pub mod feeding_time;
pub mod user;

pub use baby_profile::BabyProfileService;
pub use feeding_time::FeedingTimeService;
pub use user::UserService;
