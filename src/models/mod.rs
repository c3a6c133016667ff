pub mod location;
pub mod time;

pub use location::*;
pub use time::*;
