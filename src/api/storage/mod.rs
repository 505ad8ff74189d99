pub mod locks;
pub mod storage;

pub use self::locks::*;
pub use self::storage::*;
