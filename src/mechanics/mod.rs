pub mod control;
pub mod curve;
pub mod stoch;

pub use control::*;
pub use curve::*;
pub use stoch::*;
