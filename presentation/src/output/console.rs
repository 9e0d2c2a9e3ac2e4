//! Console output formatter for consensus and batch results

use colored::{ColoredString, Colorize};
use nodeseq_domain::{
    BatchReport, CaseReport, CaseVerdict, ConsensusResult, ConsensusStatus, ConsensusTrace,
    NodeSequence, OutputFormat, TraceEntry, TraceLevel,
};
use serde::Serialize;

/// JSON shape of a single run
#[derive(Serialize)]
struct RunView<'a> {
    query: &'a str,
    status: ConsensusStatus,
    sequence: Option<&'a NodeSequence>,
    fully_validated: bool,
    attempts_used: usize,
    trace: &'a [TraceEntry],
}

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a run in the requested format.
    ///
    /// `show_steps` appends the trace to the sequence-only format; the full
    /// format always includes it and JSON always carries it.
    pub fn render(
        result: &ConsensusResult,
        query: &str,
        format: OutputFormat,
        show_steps: bool,
    ) -> String {
        match format {
            OutputFormat::Full => Self::format(result, query),
            OutputFormat::Json => Self::format_json(result, query),
            OutputFormat::Sequence => {
                let mut output = Self::format_sequence_only(result);
                if show_steps && !result.trace.is_empty() {
                    output.push_str(&Self::section_header("Steps"));
                    output.push_str(&Self::format_trace(&result.trace));
                    output.push('\n');
                }
                output
            }
        }
    }

    /// Format the complete result
    pub fn format(result: &ConsensusResult, query: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Node Sequence"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Request:".cyan().bold(), query));
        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            Self::status_line(result)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Attempts:".cyan().bold(),
            result.attempts_used
        ));

        if let Some(sequence) = &result.sequence {
            output.push_str(&Self::section_header("Sequence"));
            for (i, node) in sequence.iter().enumerate() {
                output.push_str(&format!("{:>3}. {}\n", i + 1, node.yellow()));
            }
        }

        if !result.trace.is_empty() {
            output.push_str(&Self::section_header("Steps"));
            output.push_str(&Self::format_trace(&result.trace));
            output.push('\n');
        }

        output.push_str(&Self::footer());

        output
    }

    /// Status line followed by one node per line
    pub fn format_sequence_only(result: &ConsensusResult) -> String {
        let mut output = format!("{}\n", Self::status_line(result));
        if let Some(sequence) = &result.sequence {
            for node in sequence.iter() {
                output.push_str(node);
                output.push('\n');
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(result: &ConsensusResult, query: &str) -> String {
        let view = RunView {
            query,
            status: result.status(),
            sequence: result.sequence.as_ref(),
            fully_validated: result.fully_validated,
            attempts_used: result.attempts_used,
            trace: result.trace.entries(),
        };
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn status_line(result: &ConsensusResult) -> ColoredString {
        match result.status() {
            ConsensusStatus::Validated => "Validated".green().bold(),
            ConsensusStatus::BestEffort => "Not fully validated".yellow().bold(),
            ConsensusStatus::Failed => "Failed to generate sequence".red().bold(),
        }
    }

    pub fn format_trace(trace: &ConsensusTrace) -> String {
        trace
            .entries()
            .iter()
            .map(|entry| {
                let marker = entry.level.marker();
                let marker = match entry.level {
                    TraceLevel::Info => marker.cyan(),
                    TraceLevel::Success => marker.green(),
                    TraceLevel::Warning => marker.yellow(),
                    TraceLevel::Error => marker.red(),
                };
                format!("  {} {}", marker, entry.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per finished test case, plus the mismatch when it failed
    pub fn format_case_line(index: usize, total: usize, case: &CaseReport) -> String {
        let label = format!("{:<6}", case.verdict().to_string());
        let verdict = match case.verdict() {
            CaseVerdict::Passed => label.green().bold(),
            CaseVerdict::Failed | CaseVerdict::Errored => label.red().bold(),
        };
        let width = total.to_string().len();
        let mut line = format!(
            "[{:>width$}/{}] {} {} {}",
            index + 1,
            total,
            verdict,
            case.prompt,
            format!("({} ms)", case.elapsed_ms).dimmed(),
            width = width
        );

        match case.verdict() {
            CaseVerdict::Passed => {}
            CaseVerdict::Failed => {
                let actual = case
                    .actual
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string());
                line.push_str(&format!(
                    "\n      {} {}\n      {} {}",
                    "expected:".dimmed(),
                    case.expected,
                    "actual:  ".dimmed(),
                    actual
                ));
            }
            CaseVerdict::Errored => {
                line.push_str(&format!(
                    "\n      {}",
                    case.error.as_deref().unwrap_or("Unknown error")
                ));
            }
        }

        line
    }

    /// Totals, pass rate and average time; `location` is where the report went
    pub fn format_batch_summary(report: &BatchReport, location: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Batch Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", Self::label("Total:"), report.total));
        output.push_str(&format!(
            "{} {}\n",
            Self::label("Passed:"),
            report.passed.to_string().green()
        ));
        output.push_str(&format!(
            "{} {}\n",
            Self::label("Failed:"),
            report.failed.to_string().red()
        ));
        output.push_str(&format!(
            "{} {}\n",
            Self::label("Errors:"),
            report.errors.to_string().red()
        ));
        output.push_str(&format!(
            "{} {}\n",
            Self::label("Validated:"),
            report.validated_count()
        ));
        output.push_str(&format!(
            "{} {:.1}%\n",
            Self::label("Pass rate:"),
            report.pass_rate()
        ));
        output.push_str(&format!(
            "{} {:.0} ms\n",
            Self::label("Average time:"),
            report.average_elapsed_ms()
        ));

        if let Some(location) = location {
            output.push_str(&format!("\n{} {}\n", "Report written to".dimmed(), location));
        }

        output.push_str(&Self::footer());

        output
    }

    fn label(text: &str) -> ColoredString {
        format!("{:<14}", text).cyan().bold()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
