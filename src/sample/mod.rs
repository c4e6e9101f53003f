pub mod reader;
pub use reader::*;

pub mod row;
pub use row::*;

pub mod sample;
pub use sample::*;

pub mod synthetic;

pub mod timestamp;
pub use timestamp::*;
