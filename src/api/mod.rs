pub mod auth;
pub mod error;
pub mod favorites;
pub mod nearby;
pub mod reference;
pub mod reviews;
pub mod scoped_store;
pub mod storage;

pub use self::auth::*;
pub use self::error::*;
pub use self::favorites::*;
pub use self::nearby::*;
pub use self::reference::*;
pub use self::reviews::*;
pub use self::scoped_store::*;
pub use self::storage::*;
