use super::Analysis;
use super::Report;
use super::Writer;
use crate::KMEANS_MAX_ITERATIONS;
use crate::fitting::Family;
use crate::sample::Reader;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Delimited (timestamp, value) rows to analyze")]
    pub input: Option<PathBuf>,
    #[arg(short, long, help = "Destination report, .json for JSON, anything else for CSV")]
    pub output: Option<PathBuf>,
    #[arg(short = 'k', long, help = "Number of clusters to look for")]
    pub clusters: Option<usize>,
    #[arg(short, long, help = "Seed for centroid initialization")]
    pub seed: Option<u64>,
    #[arg(short = 't', long, default_value_t = KMEANS_MAX_ITERATIONS, help = "Iteration cap for k-means")]
    pub iterations: usize,
}

/// Prompts for whatever the command line left out, runs one analysis,
/// and writes the report.
pub struct CLI(Args);

impl CLI {
    pub fn new() -> Self {
        Self(Args::parse())
    }

    pub fn run(self) -> anyhow::Result<()> {
        let Args {
            input,
            output,
            clusters,
            seed,
            iterations,
        } = self.0;
        let input = match input {
            Some(path) => path,
            None => Self::existing("Input file")?,
        };
        let output = match output {
            Some(path) => path,
            None => Self::path("Output file")?,
        };
        let k = match clusters {
            Some(k) => k,
            None => Self::clusters()?,
        };
        let reader = Reader::open(&input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        if reader.is_empty() {
            println!("input sample is empty");
            return Ok(());
        }
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("launching analysis (k = {}, seed = {})", k, seed);
        let sample = reader.sample()?;
        let report = Analysis::new(k)
            .iterations(iterations)
            .seeded(&sample, seed)
            .context("analysis failed")?;
        Writer::save(&report, &output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        Self::summarize(&report);
        log::info!("report written to {}", output.display());
        Ok(())
    }

    fn summarize(report: &Report) {
        if !report.converged() {
            log::warn!("results come from the best of {} unconverged passes", report.iterations());
        }
        for result in report.iter() {
            let family = match result.family() {
                Family::Normal => result.family().to_string().cyan(),
                Family::Uniform => result.family().to_string().yellow(),
                Family::Exponential => result.family().to_string().magenta(),
            };
            println!(
                "{:>3}. {:>6.2}%  {:<12} {}",
                result.id(),
                result.weight() * 100.,
                family,
                result.parameters()
            );
        }
    }

    fn existing(prompt: &str) -> anyhow::Result<PathBuf> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| -> Result<(), String> {
                if std::path::Path::new(s.trim()).is_file() {
                    Ok(())
                } else {
                    Err(format!("no such file: {}", s.trim()))
                }
            })
            .interact_text()
            .map(|s| PathBuf::from(s.trim()))
            .context("input prompt")
    }

    fn path(prompt: &str) -> anyhow::Result<PathBuf> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| -> Result<(), String> {
                if s.trim().is_empty() {
                    Err(String::from("Enter a path"))
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|s| PathBuf::from(s.trim()))
            .context("output prompt")
    }

    fn clusters() -> anyhow::Result<usize> {
        Input::<usize>::new()
            .with_prompt("Cluster count")
            .validate_with(|k: &usize| -> Result<(), String> {
                if *k == 0 {
                    Err(String::from("Enter a positive integer"))
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .context("cluster count prompt")
    }
}
