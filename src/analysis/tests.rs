use super::*;
use crate::Error;
use crate::Value;
use crate::WEIGHT_TOLERANCE;
use crate::fitting::Family;
use crate::sample::Reader;
use crate::sample::Sample;
use crate::sample::synthetic;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// 200 draws from Normal(0, 1) followed by 100 from Uniform(10, 20).
fn mixture(seed: u64) -> Sample {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut values = synthetic::normal(rng, 200, 0., 1.);
    values.extend(synthetic::uniform(rng, 100, 10., 20.));
    Sample::try_from(values).unwrap()
}

fn multiset(mut xs: Vec<Value>) -> Vec<Value> {
    xs.sort_by(Value::total_cmp);
    xs
}

#[test]
fn mixture_recovery() {
    for seed in 0..4 {
        let sample = mixture(seed);
        let report = Analysis::new(2).seeded(&sample, seed).unwrap();
        assert_eq!(report.len(), 2);
        let normal = report
            .iter()
            .find(|r| r.family() == Family::Normal)
            .expect("a normal cluster");
        let uniform = report
            .iter()
            .find(|r| r.family() == Family::Uniform)
            .expect("a uniform cluster");
        assert_eq!(normal.n(), 200);
        assert_eq!(uniform.n(), 100);
        assert!((normal.weight() - 2. / 3.).abs() < 1e-12);
        assert!((uniform.weight() - 1. / 3.).abs() < 1e-12);
        let mean = normal.parameters().get("Mean").unwrap();
        let stddev = normal.parameters().get("StdDev").unwrap();
        assert!(mean.abs() < 0.25, "mean {}", mean);
        assert!((stddev - 1.).abs() < 0.25, "stddev {}", stddev);
        let min = uniform.parameters().get("Min").unwrap();
        let max = uniform.parameters().get("Max").unwrap();
        assert!((min - 10.).abs() < 1., "min {}", min);
        assert!((max - 20.).abs() < 1., "max {}", max);
    }
}

#[test]
fn weights() {
    for k in 1..=6 {
        let report = Analysis::new(k).seeded(&mixture(7), 7).unwrap();
        assert!((report.total() - 1.).abs() <= WEIGHT_TOLERANCE);
        assert!(report.balanced());
        assert!(report.len() <= k);
        assert!(report.iter().all(|r| r.weight() > 0. && r.weight() <= 1.));
    }
}

#[test]
fn accounting() {
    let sample = mixture(3);
    let report = Analysis::new(5).seeded(&sample, 3).unwrap();
    let members = report
        .iter()
        .flat_map(|r| r.values().iter().copied())
        .collect::<Vec<_>>();
    assert_eq!(multiset(members), multiset(sample.values().to_vec()));
    assert!(report.results().windows(2).all(|w| w[0].id() < w[1].id()));
    assert_eq!(report.n(), 300);
    assert_eq!(report.k(), 5);
    assert!(report.converged());
}

#[test]
fn reproducible() {
    let sample = mixture(11);
    let a = Analysis::new(3).seeded(&sample, 99).unwrap();
    let b = Analysis::new(3).seeded(&sample, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn arguments() {
    let sample = Sample::try_from(vec![1., 2.]).unwrap();
    assert!(matches!(
        Analysis::new(0).seeded(&sample, 0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        Analysis::new(3).seeded(&sample, 0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn singleton() {
    let sample = Sample::try_from(vec![5.]).unwrap();
    let report = Analysis::new(1).seeded(&sample, 0).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.results()[0].family(), Family::Uniform);
    assert_eq!(report.results()[0].parameters().get("Min"), Some(5.));
    assert_eq!(report.results()[0].parameters().get("Max"), Some(5.));
    assert_eq!(report.results()[0].weight(), 1.);
}

#[test]
fn extremes() {
    let sample = Sample::try_from(vec![1.7e308, 1.7e308, -1.7e308, -1.6e308]).unwrap();
    for seed in 0..8 {
        let report = Analysis::new(2).seeded(&sample, seed).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.iter().all(|r| r.n() == 2 && r.weight() == 0.5));
        assert!(
            report
                .iter()
                .flat_map(|r| r.parameters().iter())
                .all(|(_, x)| x.is_finite())
        );
        for result in report.iter() {
            let sign = result.values()[0].signum();
            assert!(result.values().iter().all(|x| x.signum() == sign));
        }
    }
}

#[test]
fn table() {
    let sample = Sample::try_from(vec![1., 2., 3., 4., 5.]).unwrap();
    let report = Analysis::new(1).seeded(&sample, 0).unwrap();
    let mut sink = Vec::new();
    Writer::write(&report, Format::Table, &mut sink).unwrap();
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "cluster,weight,distribution,parameters\n\
         0,1.000000,Uniform,Min: 1.000000; Max: 5.000000\n"
    );
}

#[test]
fn json() {
    let sample = Sample::try_from(vec![7., 7.]).unwrap();
    let report = Analysis::new(1).seeded(&sample, 0).unwrap();
    let mut sink = Vec::new();
    Writer::write(&report, Format::Json, &mut sink).unwrap();
    let parsed = serde_json::from_slice::<serde_json::Value>(&sink).unwrap();
    assert_eq!(parsed["n"], 2);
    assert_eq!(parsed["converged"], true);
    assert_eq!(parsed["results"][0]["cluster"], 0);
    assert_eq!(parsed["results"][0]["distribution"], "Uniform");
    assert_eq!(parsed["results"][0]["parameters"]["Min"], 7.0);
    assert_eq!(parsed["results"][0]["values"], serde_json::json!([7.0, 7.0]));
}

#[test]
fn formats() {
    use std::path::Path;
    assert_eq!(Format::from(Path::new("out.json")), Format::Json);
    assert_eq!(Format::from(Path::new("OUT.JSON")), Format::Json);
    assert_eq!(Format::from(Path::new("out.csv")), Format::Table);
    assert_eq!(Format::from(Path::new("out")), Format::Table);
}

#[test]
fn roundtrip() {
    let dir = std::env::temp_dir().join(format!("clusterfit-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.csv");
    let output = dir.join("output.csv");
    let rows = std::iter::once(String::from("timestamp,value"))
        .chain(
            mixture(5)
                .values()
                .iter()
                .enumerate()
                .map(|(i, x)| format!("{},{}", 1_700_000_000 + i, x)),
        )
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&input, rows).unwrap();
    let sample = Reader::open(&input).unwrap().sample().unwrap();
    assert_eq!(sample, mixture(5));
    let report = Analysis::new(2).seeded(&sample, 5).unwrap();
    Writer::save(&report, &output).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1 + report.len());
    assert!(written.starts_with("cluster,weight,distribution,parameters\n"));
    std::fs::remove_dir_all(&dir).unwrap();
}
