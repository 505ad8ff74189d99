pub mod restaurants;

pub use self::restaurants::*;
