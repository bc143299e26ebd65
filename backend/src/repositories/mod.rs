//! Database repositories
//!
//! Provides the data access layer for the three collections: users,
//! baby profiles, and feeding times.

pub mod baby_profile;
pub mod feeding_time;
pub mod user;

pub use baby_profile::{BabyProfileInput, BabyProfileRecord, BabyProfileRepository};
pub use feeding_time::{FeedingTimeInput, FeedingTimeRecord, FeedingTimeRepository};
pub use user::{UserRecord, UserRepository};
