use stentopt::prelude::*;
use stentopt::study::StudyReport;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "stentopt",
    about = "Builds PLLA material models and optimizes stent designs over response surfaces"
)]
enum Options {
    /// Prints the material model for an aspect ratio (JSON)
    Material {
        #[structopt(long)]
        ar: f64,
    },

    /// Prints the isotropic material of the balloon (JSON)
    Balloon,

    /// Evaluates the response surfaces at a design point
    Evaluate {
        ar: f64,
        w: f64,
        t: f64,
        l: f64,

        /// Study configuration (JSON); the reference surfaces are used if omitted
        #[structopt(long)]
        config: Option<String>,
    },

    /// Runs the design study
    Study {
        /// Study configuration (JSON); the reference study is run if omitted
        #[structopt(long)]
        config: Option<String>,

        /// Writes the report to this file (JSON)
        #[structopt(long)]
        output: Option<String>,
    },

    /// Prints the configuration of the reference study (JSON)
    SampleConfig,
}

/// Reads the configuration or returns the reference one
fn load_config(path: &Option<String>) -> Result<StudyConfig, StrError> {
    match path {
        Some(p) => StudyConfig::read_json(p),
        None => Ok(StudyConfig::reference()),
    }
}

/// Returns a JSON string (pretty)
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, StrError> {
    serde_json::to_string_pretty(value).map_err(|_| "cannot serialize to JSON")
}

/// Prints one row of the results table
fn print_row(label: &str, result: &Result<DesignResult, String>) {
    match result {
        Ok(res) => println!(
            "{:<28} {:>10.4} {:>8.4} {:>9.4} {:>9.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}  {:?}",
            label,
            res.objective,
            res.x.ar,
            res.x.w,
            res.x.t,
            res.x.l,
            res.outputs.csa,
            res.outputs.fs,
            res.outputs.par,
            res.outputs.rs,
            res.status
        ),
        Err(message) => println!("{:<28} failed: {}", label, message),
    }
}

/// Prints the report as a table
fn print_report(report: &StudyReport) {
    let header = format!(
        "{:<28} {:>10} {:>8} {:>9} {:>9} {:>10} {:>10} {:>10} {:>10} {:>10}  {}",
        "run", "objective", "ar", "w", "t", "l", "csa", "fs", "par", "rs", "status"
    );
    let thin_line = format!("{:─^1$}", "", header.chars().count());
    println!("\nbaseline (surfaces): {}", report.baseline);
    println!("\n{}\n{}\n{}", thin_line, header, thin_line);
    for run in &report.bound_search {
        let label = match run.sense {
            Sense::Minimize => format!("min {}", run.metric),
            Sense::Maximize => format!("max {}", run.metric),
        };
        print_row(&label, &Ok(run.result.clone()));
    }
    for run in &report.baseline_constrained {
        print_row(&format!("min {} | others ≤ baseline", run.metric), &run.result);
    }
    print_row("multi-objective", &report.multi_objective);
    print_row("user-constrained", &report.user_constrained);
    println!("{}", thin_line);
    match &report.ranges {
        Ok(ranges) => {
            for metric in Metric::ALL {
                let r = ranges.get(metric);
                println!("range of {:<3} = [{:.5}, {:.5}]", metric.name(), r.min, r.max);
            }
        }
        Err(message) => println!("ranges unavailable: {}", message),
    }
    println!();
}

fn main() -> Result<(), Error> {
    // logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // parse options
    let options = Options::from_args();

    // run
    match options {
        Options::Material { ar } => {
            let model = build_material_model(ar)?;
            println!("{}", to_json(&model)?);
        }
        Options::Balloon => {
            println!("{}", to_json(&IsotropicMaterial::balloon())?);
        }
        Options::Evaluate { ar, w, t, l, config } => {
            let config = load_config(&config)?;
            let x = DesignVars::new(ar, w, t, l);
            if !config.bounds.contains(&x, 0.0) {
                tracing::warn!(%x, "the design point lies outside the bounds of the design space");
            }
            let outputs = config.surfaces.evaluate(&x);
            println!("{}", outputs);
        }
        Options::Study { config, output } => {
            let study = DesignStudy::new(load_config(&config)?)?;
            let report = study.run()?;
            print_report(&report);
            if let Some(path) = output {
                report.write_json(&path)?;
                println!("report written to {}", path);
            }
        }
        Options::SampleConfig => {
            println!("{}", to_json(&StudyConfig::reference())?);
        }
    }
    Ok(())
}
