use std::io::Write;

use ampere_core::{AdjacencyMatrix, Comparison, MissingEdge};
use clap::ValueEnum;
use serde::Serialize;

const SEPARATOR_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct Report<'a> {
    pub timestamp: String,
    pub source: String,
    pub missing_edge: MissingEdge,
    pub matrix: &'a AdjacencyMatrix,
    pub comparison: &'a Comparison,
}

#[derive(Serialize)]
struct JsonRun<'a> {
    name: &'a str,
    elapsed_secs: f64,
    result: &'a AdjacencyMatrix,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: &'a str,
    source: &'a str,
    missing_edge: MissingEdge,
    matrix: &'a AdjacencyMatrix,
    runs: Vec<JsonRun<'a>>,
    max_difference: f64,
    agrees: bool,
}

fn write_matrix<W: Write>(writer: &mut W, matrix: &AdjacencyMatrix, name: &str) -> std::io::Result<()> {
    writeln!(writer, "{name}:")?;
    for row in matrix.rows() {
        for elem in row {
            write!(writer, "{elem:20.6}, ")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn write_text<W: Write>(writer: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(writer, "{}:", report.timestamp)?;
    writeln!(writer, "Source: {}", report.source)?;
    writeln!(writer)?;
    write_matrix(writer, report.matrix, "Source matrix")?;

    for run in report.comparison.runs() {
        writeln!(writer)?;
        write_matrix(
            writer,
            &run.result,
            &format!("Result matrix, obtained by {}", run.name),
        )?;
        writeln!(
            writer,
            "{} calculations time: {:.4} sec",
            run.name,
            run.elapsed.as_secs_f64()
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Max difference: {:e} ({})",
        report.comparison.max_difference(),
        if report.comparison.agrees() {
            "results agree"
        } else {
            "results differ"
        }
    )?;
    writeln!(writer, "\n{}\n", "#".repeat(SEPARATOR_WIDTH))?;

    Ok(())
}

fn write_json<W: Write>(writer: &mut W, report: &Report) -> anyhow::Result<()> {
    let json = JsonReport {
        timestamp: &report.timestamp,
        source: &report.source,
        missing_edge: report.missing_edge,
        matrix: report.matrix,
        runs: report
            .comparison
            .runs()
            .iter()
            .map(|run| JsonRun {
                name: run.name,
                elapsed_secs: run.elapsed.as_secs_f64(),
                result: &run.result,
            })
            .collect(),
        max_difference: report.comparison.max_difference(),
        agrees: report.comparison.agrees(),
    };

    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)?;

    Ok(())
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => write_text(writer, report)?,
        ReportFormat::Json => write_json(writer, report)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ampere_core::{DEFAULT_TOLERANCE, FlatRelaxer, ScalarRelaxer, compare};

    use super::*;

    fn render(format: ReportFormat) -> String {
        let matrix =
            AdjacencyMatrix::from_rows(vec![vec![0.0, 2.0], vec![3.5, 0.0]]).unwrap();
        let comparison =
            compare(&matrix, &[&ScalarRelaxer, &FlatRelaxer], DEFAULT_TOLERANCE).unwrap();
        let report = Report {
            timestamp: String::from("2026-01-01 00:00:00"),
            source: String::from("test"),
            missing_edge: MissingEdge::Zero,
            matrix: &matrix,
            comparison: &comparison,
        };

        let mut buffer = Vec::new();
        write_report(&mut buffer, &report, format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = render(ReportFormat::Text);

        assert!(text.starts_with("2026-01-01 00:00:00:\n"));
        assert!(text.contains("Source matrix:\n            0.000000,             2.000000, \n"));
        assert!(text.contains("Result matrix, obtained by scalar:"));
        assert!(text.contains("Result matrix, obtained by flat:"));
        assert!(text.contains("flat calculations time: "));
        assert!(text.contains("results agree"));
        assert!(text.contains(&"#".repeat(SEPARATOR_WIDTH)));
    }

    #[test]
    fn test_json_report() {
        let text = render(ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["source"], "test");
        assert_eq!(value["missing_edge"], "zero");
        assert_eq!(value["matrix"][1][0], 3.5);
        assert_eq!(value["runs"][1]["name"], "flat");
        assert_eq!(value["agrees"], true);
    }

    #[test]
    fn test_json_report_writes_unreachable_as_null() {
        let matrix = AdjacencyMatrix::filled(2, f64::INFINITY);
        let comparison = compare(&matrix, &[&ScalarRelaxer], DEFAULT_TOLERANCE).unwrap();
        let report = Report {
            timestamp: String::from("2026-01-01 00:00:00"),
            source: String::from("floating"),
            missing_edge: MissingEdge::Unreachable,
            matrix: &matrix,
            comparison: &comparison,
        };

        let mut buffer = Vec::new();
        write_report(&mut buffer, &report, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["missing_edge"], "unreachable");
        assert!(value["matrix"][0][1].is_null());
        assert!(value["runs"][0]["result"][1][0].is_null());
        assert_eq!(value["matrix"][0][0], 0.0);
    }
}
