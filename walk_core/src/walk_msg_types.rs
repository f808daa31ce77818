mod footprint;
mod point;
mod pose;

pub use footprint::*;
pub use point::*;
pub use pose::*;
