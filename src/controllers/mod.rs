pub mod config;
pub mod favorites;
pub mod restaurants;
pub mod reviews;
pub mod session;

pub use self::config::config;
