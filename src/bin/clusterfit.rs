//! Cluster-and-fit CLI
//!
//! Reads (timestamp, value) rows, partitions the values with k-means,
//! and reports the best-fitting distribution family for each cluster.

use clusterfit::*;

fn main() -> anyhow::Result<()> {
    log();
    analysis::CLI::new().run()
}
