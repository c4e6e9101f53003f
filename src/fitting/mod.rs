pub mod candidate;
pub use candidate::*;

pub mod distribution;
pub use distribution::*;

pub mod family;
pub use family::*;

pub mod fitter;
pub use fitter::*;

pub mod moments;
pub use moments::*;

pub mod parameters;
pub use parameters::*;
