pub mod nearby;

pub use self::nearby::*;
