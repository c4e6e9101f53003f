//! One-dimensional clustering with per-cluster distribution selection.
//!
//! A [`sample::Sample`] is partitioned by [`clustering::KMeans`], then every
//! surviving cluster is handed to [`fitting::Fitter`], which picks whichever of
//! Normal, Uniform or Exponential has the lowest negative log-likelihood.
//! [`analysis::Analysis`] glues the two together and weighs each cluster by
//! its share of the sample.
pub mod analysis;
pub mod clustering;
pub mod error;
pub mod fitting;
pub mod sample;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw measurement values and centroid positions.
pub type Value = f64;
/// Fraction of the full sample owned by a cluster.
pub type Weight = f64;
/// Negative log-likelihoods and within-cluster sums of squares.
pub type Energy = f64;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd's algorithm over scalar values, random-permutation initialization.
// ============================================================================
/// Hard ceiling on Lloyd iterations before returning the best state seen.
pub const KMEANS_MAX_ITERATIONS: usize = 1000;

// ============================================================================
// REPORTING
// ============================================================================
/// Cluster weights must sum to one within this tolerance.
pub const WEIGHT_TOLERANCE: Weight = 1e-9;
/// Separator between `Name: value` pairs in rendered parameter lists.
pub const PARAMETER_DELIMITER: &str = "; ";
/// Candidate cell delimiters for input rows, in detection order.
pub const CSV_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
