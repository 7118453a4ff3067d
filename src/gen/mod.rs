pub mod fill;

pub use self::fill::*;
