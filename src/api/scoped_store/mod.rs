pub mod scoped_store;

pub use self::scoped_store::*;
