pub mod reference;

pub use self::reference::*;
