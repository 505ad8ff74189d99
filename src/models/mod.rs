pub mod establishments;
pub mod favorites;
pub mod reviews;
pub mod shared;
pub mod users;

pub use self::establishments::*;
pub use self::favorites::*;
pub use self::reviews::*;
pub use self::shared::*;
pub use self::users::*;
