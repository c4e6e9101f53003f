pub mod analysis;
pub use analysis::*;

pub mod report;
pub use report::*;

pub mod result;
pub use result::*;

pub mod writer;
pub use writer::*;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::*;

#[cfg(test)]
mod tests;
