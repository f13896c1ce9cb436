use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ampere_core::{DEFAULT_TOLERANCE, MissingEdge, Relaxer, RelaxerKind, compare};
use ampere_schematic::{SAMPLE_SCHEMATIC, Schematic};
use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::{
    file_utils::read_schematic_folder,
    parsers,
    report::{self, Report, ReportFormat},
};

const OUTPUT_ENV_VAR: &str = "AMPERE_OUTPUT";
const SAMPLE_SOURCE: &str = "built-in sample";

#[derive(Args)]
pub struct RunArgs {
    /// Schematic XML file, or a folder of them. Uses the built-in sample when omitted
    input: Option<PathBuf>,

    /// Report file to append to (default: $AMPERE_OUTPUT, then stdout)
    output: Option<PathBuf>,

    /// Treat node pairs without an element as unreachable instead of zero weight
    #[arg(short, long)]
    unreachable: bool,

    /// Report format. JSON writes unreachable entries as null
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Relaxers to run and compare, in order
    #[arg(short, long, value_delimiter = ',', default_values_t = RelaxerKind::ALL)]
    relaxers: Vec<RelaxerKind>,

    /// Largest relative difference for results to be considered equal
    #[arg(short, long, value_parser = parsers::parse_tolerance, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

fn load_schematics(input: Option<PathBuf>) -> anyhow::Result<Vec<(String, Schematic)>> {
    let Some(input) = input else {
        info!("Using built-in sample schematic");
        return Ok(vec![(
            String::from(SAMPLE_SOURCE),
            Schematic::from_xml_str(SAMPLE_SCHEMATIC)?,
        )]);
    };

    let paths = if input.is_dir() {
        read_schematic_folder(&input)?
    } else {
        vec![input]
    };

    paths
        .into_iter()
        .map(|path| {
            let schematic = Schematic::from_file(&path)
                .with_context(|| format!("Failed to load schematic {}", path.display()))?;
            Ok((path.display().to_string(), schematic))
        })
        .collect()
}

fn open_output(output: Option<PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    let output = output.or_else(|| std::env::var(OUTPUT_ENV_VAR).ok().map(PathBuf::from));

    Ok(match output {
        Some(path) => {
            info!("Appending report to {}", path.display());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    })
}

fn timestamp() -> String {
    jiff::Zoned::now()
        .strftime("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let missing_edge = if args.unreachable {
        MissingEdge::Unreachable
    } else {
        MissingEdge::Zero
    };

    let schematics = load_schematics(args.input)?;
    let relaxers: Vec<Box<dyn Relaxer>> = args.relaxers.iter().map(RelaxerKind::relaxer).collect();
    let relaxers: Vec<&dyn Relaxer> = relaxers.iter().map(|relaxer| relaxer.as_ref()).collect();

    let mut writer = open_output(args.output)?;

    for (source, schematic) in schematics {
        info!(
            "{}: {} nets, {} elements",
            source,
            schematic.node_count(),
            schematic.elements.len()
        );

        let matrix = schematic
            .adjacency_matrix(missing_edge)
            .with_context(|| format!("Invalid circuit in {source}"))?;
        let comparison = compare(&matrix, &relaxers, args.tolerance)?;

        for run in comparison.runs() {
            info!(
                "{} calculations time: {:.4} sec",
                run.name,
                run.elapsed.as_secs_f64()
            );
        }

        if !comparison.agrees() {
            warn!(
                "{}: relaxers disagree, max difference {:e}",
                source,
                comparison.max_difference()
            );
        }

        let report = Report {
            timestamp: timestamp(),
            source,
            missing_edge,
            matrix: &matrix,
            comparison: &comparison,
        };
        report::write_report(&mut writer, &report, args.format)?;
    }

    writer.flush()?;

    Ok(())
}
