//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::batch::{BatchPresenter, TestSuite};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use nodeseq_application::{LlmGateway, RunBatchUseCase, RunConsensusInput, RunConsensusUseCase};
use nodeseq_domain::{ConsensusPolicy, Model, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::Path;
use std::sync::Arc;

/// A parsed slash command
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Models,
    Model(Option<&'a str>),
    Test(Option<&'a str>),
    Steps,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|s| !s.is_empty())),
            None => (line, None),
        };

        match name {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/help" | "/h" | "/?" => Command::Help,
            "/models" => Command::Models,
            "/model" | "/m" => Command::Model(arg),
            "/test" => Command::Test(arg),
            "/steps" => Command::Steps,
            _ => Command::Unknown(line),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    use_case: RunConsensusUseCase<G>,
    batch: Option<BatchPresenter<G>>,
    models: Vec<Model>,
    model: Model,
    policy: ConsensusPolicy,
    config: ReplConfig,
}

impl<G: LlmGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl starting on `model`
    pub fn new(gateway: Arc<G>, models: Vec<Model>, model: Model) -> Self {
        Self {
            use_case: RunConsensusUseCase::new(Arc::clone(&gateway)),
            gateway,
            batch: None,
            models,
            model,
            policy: ConsensusPolicy::interactive(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_policy(mut self, policy: ConsensusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable `/test`
    pub fn with_test_suite(mut self, suite: TestSuite) -> Self {
        let use_case = RunBatchUseCase::from_consensus(self.use_case.clone());
        self.batch = Some(BatchPresenter::new(use_case, suite));
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.config.history_path();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_request(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        nodeseq - Interactive Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model.to_string().yellow());
        println!(
            "Consensus: {} attempts, {} validations",
            self.policy.max_attempts, self.policy.validation_threshold
        );
        println!();
        println!("Describe what should happen and get a node sequence back.");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /models           - List available models");
        println!("  /model <n|name>   - Switch model");
        println!("  /test [file]      - Run the test suite");
        println!("  /steps            - Toggle step-by-step output");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        match Command::parse(cmd) {
            Command::Quit => {
                println!("Bye!");
                return true;
            }
            Command::Help => self.print_help(),
            Command::Models => self.print_models().await,
            Command::Model(None) => println!("Current model: {}", self.model),
            Command::Model(Some(choice)) => match self.select_model(choice) {
                Ok(model) => println!("{} Switched to {}", "v".green(), model),
                Err(message) => println!("{} {}", "x".red(), message),
            },
            Command::Test(file) => self.run_tests(file).await,
            Command::Steps => {
                self.config.show_steps = !self.config.show_steps;
                let state = if self.config.show_steps { "on" } else { "off" };
                println!("Step-by-step output {}", state);
            }
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// Switch by 1-based index into the model list or by exact name
    fn select_model(&mut self, choice: &str) -> Result<&Model, String> {
        let selected = match choice.parse::<usize>() {
            Ok(n) => n
                .checked_sub(1)
                .and_then(|i| self.models.get(i))
                .ok_or_else(|| format!("No model #{} (1-{})", n, self.models.len()))?,
            Err(_) => self
                .models
                .iter()
                .find(|m| m.as_str() == choice)
                .ok_or_else(|| format!("Unknown model: {} (see /models)", choice))?,
        };
        self.model = selected.clone();
        Ok(&self.model)
    }

    async fn print_models(&self) {
        let installed = self.gateway.available_models().await.ok();

        println!();
        println!("Available models:");
        for (i, model) in self.models.iter().enumerate() {
            let current = if *model == self.model { "*" } else { " " };
            let note = match &installed {
                Some(list) if !list.contains(model) => " (not installed)".dimmed().to_string(),
                _ => String::new(),
            };
            println!("{} {}. {}{}", current, i + 1, model, note);
        }
        println!();
    }

    async fn run_tests(&self, file: Option<&str>) {
        let Some(batch) = &self.batch else {
            println!("Test runs are not configured");
            return;
        };

        println!();
        if let Err(e) = batch
            .run(file.map(Path::new), &self.model, self.config.show_progress)
            .await
        {
            eprintln!("{} {}", "Error:".red(), e);
        }
        println!();
    }

    async fn process_request(&self, request: &str) {
        println!();

        let input = RunConsensusInput::new(request, self.model.clone())
            .with_policy(self.policy)
            .with_verbose(self.config.show_steps);

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(result) => {
                let output = ConsoleFormatter::render(
                    &result,
                    request,
                    OutputFormat::Sequence,
                    self.config.show_steps,
                );
                print!("{}", output);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nodeseq_application::{GatewayError, LlmSession};

    struct IdleGateway;

    #[async_trait]
    impl LlmGateway for IdleGateway {
        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::Other("not used".to_string()))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(Vec::new())
        }
    }

    fn repl() -> ChatRepl<IdleGateway> {
        ChatRepl::new(
            Arc::new(IdleGateway),
            Model::default_models(),
            Model::default(),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/q"), Command::Quit);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/models"), Command::Models);
        assert_eq!(Command::parse("/model"), Command::Model(None));
        assert_eq!(Command::parse("/model  2 "), Command::Model(Some("2")));
        assert_eq!(Command::parse("/test"), Command::Test(None));
        assert_eq!(
            Command::parse("/test cases/ui.json"),
            Command::Test(Some("cases/ui.json"))
        );
        assert_eq!(Command::parse("/steps"), Command::Steps);
        assert_eq!(Command::parse("/nope x"), Command::Unknown("/nope x"));
    }

    #[test]
    fn test_select_model_by_index() {
        let mut repl = repl();
        assert_eq!(repl.select_model("3").unwrap(), &Model::Llama31_8b);
        assert_eq!(repl.model(), &Model::Llama31_8b);
    }

    #[test]
    fn test_select_model_by_name() {
        let mut repl = repl();
        assert_eq!(
            repl.select_model("codegemma:7b").unwrap(),
            &Model::CodeGemma7b
        );
    }

    #[test]
    fn test_select_model_rejects_out_of_range() {
        let mut repl = repl();
        assert!(repl.select_model("0").is_err());
        assert!(repl.select_model("9").is_err());
        assert!(repl.select_model("mistral:7b").is_err());
        assert_eq!(repl.model(), &Model::default());
    }

    #[tokio::test]
    async fn test_steps_toggle_and_quit() {
        let mut repl = repl();
        assert!(!repl.handle_command("/steps").await);
        assert!(repl.config.show_steps);
        assert!(!repl.handle_command("/steps").await);
        assert!(!repl.config.show_steps);
        assert!(repl.handle_command("/quit").await);
    }
}
