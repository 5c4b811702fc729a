//! Concordans CLI
//!
//! Reads the concordance rows and the two lookup tables from JSON, runs
//! aggregation and resolution, and writes the graph as N-Triples.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use concordans::pipeline::{read_rows, write_concordance};
use concordans::{aggregate, ntriples, NameLinks, PipelineError, PointIndex, Resolver};

/// CLI configuration
struct Config {
    /// JSON array of raw observations
    rows: PathBuf,
    /// point2wkt JSON object
    points: PathBuf,
    /// name2adamlink JSON object
    links: Option<PathBuf>,
    /// N-Triples output file
    out: PathBuf,
    /// Optional path to persist the aggregated intermediate
    concordance_out: Option<PathBuf>,
}

fn print_help() {
    println!("concordans - historical address concordance to linked data");
    println!();
    println!("USAGE:");
    println!("    concordans --rows <FILE> --points <FILE> --out <FILE> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -r, --rows <FILE>         JSON array of concordance rows");
    println!("    -p, --points <FILE>       point2wkt JSON table");
    println!("    -l, --links <FILE>        name2adamlink JSON table (optional)");
    println!("    -o, --out <FILE>          N-Triples output path");
    println!("    -c, --concordance <FILE>  also write the aggregated intermediate");
    println!("    -h, --help                Print help information");
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut rows = None;
    let mut points = None;
    let mut links = None;
    let mut out = None;
    let mut concordance_out = None;

    let mut i = 1;
    while i < args.len() {
        let take_value = |i: usize| -> Result<PathBuf, String> {
            args.get(i + 1)
                .map(PathBuf::from)
                .ok_or_else(|| format!("{} requires a value", args[i]))
        };
        match args[i].as_str() {
            "--rows" | "-r" => {
                rows = Some(take_value(i)?);
                i += 2;
            }
            "--points" | "-p" => {
                points = Some(take_value(i)?);
                i += 2;
            }
            "--links" | "-l" => {
                links = Some(take_value(i)?);
                i += 2;
            }
            "--out" | "-o" => {
                out = Some(take_value(i)?);
                i += 2;
            }
            "--concordance" | "-c" => {
                concordance_out = Some(take_value(i)?);
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg => return Err(format!("unknown argument: {arg}")),
        }
    }

    Ok(Config {
        rows: rows.ok_or("--rows is required")?,
        points: points.ok_or("--points is required")?,
        links,
        out: out.ok_or("--out is required")?,
        concordance_out,
    })
}

fn run(config: &Config) -> Result<(), PipelineError> {
    println!("concordans v{}", env!("CARGO_PKG_VERSION"));

    let rows = read_rows(BufReader::new(File::open(&config.rows)?))?;
    println!("Loaded {} rows from {}", rows.len(), config.rows.display());

    let points = PointIndex::from_json_reader(BufReader::new(File::open(&config.points)?))?;
    println!("Loaded {} point geometries", points.len());

    let links = match &config.links {
        Some(path) => {
            let links = NameLinks::from_json_reader(BufReader::new(File::open(path)?))?;
            println!("Loaded {} external name links", links.len());
            links
        }
        None => NameLinks::new(),
    };

    let concordance = aggregate(&rows, &links);
    println!("Aggregated {} canonical labels", concordance.len());

    if let Some(path) = &config.concordance_out {
        write_concordance(BufWriter::new(File::create(path)?), &concordance)?;
        println!("Wrote intermediate concordance to {}", path.display());
    }

    let graph = Resolver::new().resolve(&concordance, &points)?;
    println!("Resolved {} nodes ({} addresses)", graph.node_count(), graph.addresses.len());

    let mut writer = BufWriter::new(File::create(&config.out)?);
    ntriples::write_graph(&mut writer, &graph)?;
    println!("Serialized graph to {}", config.out.display());

    Ok(())
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
