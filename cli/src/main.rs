//! CLI entrypoint for nodeseq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use nodeseq_application::{
    ConsensusProgressNotifier, NoProgress, RunBatchUseCase, RunConsensusInput, RunConsensusUseCase,
};
use nodeseq_domain::{ConsensusPolicy, Model, OutputFormat, Severity};
use nodeseq_infrastructure::{
    ConfigLoader, FileConfig, JsonReportWriter, JsonTestCaseSource, OllamaLlmGateway,
};
use nodeseq_presentation::{
    BatchPresenter, ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig, SimpleProgress,
    TestSuite,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting nodeseq");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{}", issue.to_string().red()),
            Severity::Warning => eprintln!("{}", issue.to_string().yellow()),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let model = match cli.model.as_deref() {
        Some(name) => {
            let Ok(model) = name.parse::<Model>();
            model
        }
        None => config.models.default_model(),
    };

    // === Dependency Injection ===
    let host = config.ollama.resolved_host();
    info!("Using Ollama at {}", host);
    let gateway = Arc::new(OllamaLlmGateway::new(&host, config.ollama.request_timeout())?);

    if let Some(file) = &cli.batch {
        return run_batch(&cli, &config, gateway, file, &model).await;
    }

    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            show_steps: config.repl.show_steps || cli.show_steps,
            history_file: config.repl.history_path(),
        };
        let suite = test_suite(&cli, &config, PathBuf::from(&config.batch.cases_file));

        let mut repl = ChatRepl::new(gateway, config.models.available_models(), model)
            .with_policy(consensus_policy(&cli, &config))
            .with_config(repl_config)
            .with_test_suite(suite);

        repl.run().await?;
        return Ok(());
    }

    // Single request mode - prompt is required
    let prompt = match cli.prompt.clone() {
        Some(p) => p,
        None => bail!("A prompt is required. Use --chat for interactive mode or --batch <file>."),
    };

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .unwrap_or_else(|| config.output.resolved_format()),
        color: config.output.color,
        show_steps: cli.show_steps,
    };

    // Progress would interleave with machine-readable output
    let quiet = cli.quiet || output.format == OutputFormat::Json;

    if !quiet {
        println!();
        println!("{} {}", "Request:".cyan().bold(), prompt);
        println!("{} {}", "Model:".cyan().bold(), model);
        println!();
    }

    let input = RunConsensusInput::new(prompt.clone(), model)
        .with_policy(consensus_policy(&cli, &config))
        .with_verbose(output.show_steps || output.format != OutputFormat::Sequence);

    let use_case = RunConsensusUseCase::new(gateway);
    let progress: Box<dyn ConsensusProgressNotifier> = if quiet {
        Box::new(NoProgress)
    } else {
        Box::new(SimpleProgress::new())
    };
    let result = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let rendered = ConsoleFormatter::render(&result, &prompt, output.format, output.show_steps);
    print!("{}", rendered);
    if output.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` overrides the level picked by `-v`. With a log file, events go
/// through a non-blocking writer whose guard must outlive the program.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// Interactive budget from `[consensus]`, overridden by CLI flags
fn consensus_policy(cli: &Cli, config: &FileConfig) -> ConsensusPolicy {
    let base = config.consensus.to_policy();
    ConsensusPolicy::new(
        cli.max_attempts.unwrap_or(base.max_attempts),
        cli.validation_threshold.unwrap_or(base.validation_threshold),
    )
}

fn test_suite(cli: &Cli, config: &FileConfig, default_file: PathBuf) -> TestSuite {
    let base = config.batch.to_params();
    let params = base
        .clone()
        .with_policy(ConsensusPolicy::new(
            cli.max_attempts.unwrap_or(base.policy.max_attempts),
            cli.validation_threshold
                .unwrap_or(base.policy.validation_threshold),
        ))
        .with_concurrency(cli.concurrency.or(base.concurrency));

    let max_cases = cli
        .max_cases
        .unwrap_or_else(|| config.batch.effective_max_cases());
    let report_path = cli
        .report
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.batch.report_path));

    TestSuite {
        source: Arc::new(JsonTestCaseSource::new(max_cases)),
        sink: Arc::new(JsonReportWriter::new(report_path)),
        default_file,
        params,
    }
}

async fn run_batch(
    cli: &Cli,
    config: &FileConfig,
    gateway: Arc<OllamaLlmGateway>,
    file: &Path,
    model: &Model,
) -> Result<()> {
    let suite = test_suite(cli, config, file.to_path_buf());
    let presenter = BatchPresenter::new(RunBatchUseCase::new(gateway), suite);

    let report = presenter.run(Some(file), model, !cli.quiet).await?;
    info!("Batch finished: {}/{} passed", report.passed, report.total);
    Ok(())
}
