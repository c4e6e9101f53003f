pub mod centroid;
pub use centroid::*;

pub mod cluster;
pub use cluster::*;

pub mod kmeans;
pub use kmeans::*;

pub mod partition;
pub use partition::*;
