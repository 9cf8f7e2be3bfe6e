// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::{ProfileStore, ServiceClient};
use crate::error::QuizError;
use crate::quiz::{QuizEngine, QUESTIONS};
use crate::render;
use crate::types::ResumeFile;
use crate::views::{AdminState, AdminView, RecommendationState, RecommendationView, ResumeSubmission};

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Resume-driven career guidance: upload, assess, get recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Recommendation service address, overrides configuration
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the stored profile
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show what the guidance flow does
    Home,
    /// Upload a PDF resume and store the extracted skills
    Upload {
        file: PathBuf,
        /// Declared media type, guessed from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Take the personality assessment
    Quiz {
        /// Answers in question order, e.g. INTJ or I,N,T,J. Interactive when omitted.
        #[arg(long)]
        answers: Option<String>,
    },
    /// Fetch career recommendations for the stored profile
    Dashboard,
    /// List stored student profiles
    Admin {
        /// Case-insensitive match on personality type or skills
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Forget the stored skills and personality type
    Reset,
    /// Serve the web front end
    Serve {
        #[arg(long)]
        port: Option<u16>,
        /// Mount the admin listing at /admin
        #[arg(long)]
        admin: bool,
    },
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
    }
}

pub async fn handle_command(cli: Cli, mut config: AppConfig) -> Result<()> {
    cli.apply_overrides(&mut config);
    let store = config.profile_store();

    match cli.command {
        Command::Home => {
            print!("{}", render::landing());
            println!("\nStart with: career-compass upload <resume.pdf>");
        }

        Command::Upload { file, content_type } => {
            let client = config.service_client()?;
            let skills = upload(&client, &store, file, content_type.as_deref()).await?;
            println!("✓ Extracted {} skills: {}", skills.len(), skills.join(", "));
            println!("Next: career-compass quiz");
        }

        Command::Quiz { answers } => {
            let engine = match answers {
                Some(answers) => answer_quiz(&answers)?,
                None => {
                    let stdin = std::io::stdin();
                    let stdout = std::io::stdout();
                    run_interactive_quiz(stdin.lock(), stdout.lock())?
                }
            };
            engine.finish(&store)?;
            if let Some(personality) = engine.personality_type() {
                println!("✓ Your personality type: {}", personality);
            }
            println!("Next: career-compass dashboard");
        }

        Command::Dashboard => {
            let client = config.service_client()?;
            let view = RecommendationView::activate(&client, &store).await;
            print!("{}", render::dashboard(&view));
            if let RecommendationState::Failed(message) = view.state() {
                anyhow::bail!("{}", message);
            }
        }

        Command::Admin { filter } => {
            let client = config.service_client()?;
            let mut view = AdminView::activate(&client).await;
            if let AdminState::Failed(message) = view.state() {
                anyhow::bail!("{}", message);
            }
            view.set_filter(filter);
            print!("{}", render::student_table(&view.rows(), view.total()));
        }

        Command::Reset => {
            store.clear()?;
            println!("✓ Cleared stored profile at {}", store.path().display());
        }

        Command::Serve { port, admin } => {
            if let Some(port) = port {
                config.port = port;
            }
            config.admin_enabled |= admin;
            crate::web::start_web_server(config).await?;
        }
    }

    Ok(())
}

pub async fn upload<S>(
    client: &ServiceClient,
    store: &S,
    file: PathBuf,
    content_type: Option<&str>,
) -> Result<Vec<String>>
where
    S: ProfileStore + ?Sized,
{
    let resume = ResumeFile::from_path(&file, content_type).await?;
    let mut submission = ResumeSubmission::new(client, store);
    submission.select(resume)?;

    let outcome = submission
        .submit()
        .await
        .with_context(|| format!("Could not analyze {}", file.display()))?;
    info!("Navigation to {}", outcome.next);
    Ok(outcome.skills)
}

/// Complete the quiz from a compact answer string such as `INTJ` or `i, n, t, j`
pub fn answer_quiz(answers: &str) -> Result<QuizEngine> {
    let letters: String = answers
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let engine = QuizEngine::resume(&letters)?;
    if !engine.is_complete() {
        return Err(QuizError::Unanswered {
            index: engine.current_index().unwrap_or_default(),
        }
        .into());
    }
    Ok(engine)
}

fn parse_choice(line: &str, engine: &QuizEngine) -> Option<char> {
    let question = engine.current_question()?;
    let trimmed = line.trim();
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=question.options.len()).contains(&number) => {
            Some(question.options[number - 1].value)
        }
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Some(letter.to_ascii_uppercase()),
                _ => None,
            }
        }
    }
}

/// Ask each question on `output` and read the choice from `input`.
/// An empty line tries to move on with the current selection.
pub fn run_interactive_quiz<R, W>(mut input: R, mut output: W) -> Result<QuizEngine>
where
    R: BufRead,
    W: Write,
{
    let mut engine = QuizEngine::new();

    while let (Some(index), Some(question)) = (engine.current_index(), engine.current_question()) {
        write!(output, "\n{}", render::question(question, index, QUESTIONS.len()))?;
        write!(output, "Your choice: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("Assessment aborted before question {}", index + 1);
        }

        if !line.trim().is_empty() {
            let selected = match parse_choice(&line, &engine) {
                Some(value) => engine.select(value),
                None => Err(QuizError::InvalidOption {
                    question: question.id,
                    value: line.trim().to_string(),
                }),
            };
            if let Err(e) = selected {
                warn!("Invalid quiz input: {}", e);
                writeln!(output, "{}", e)?;
                continue;
            }
        }

        if let Err(e) = engine.advance() {
            writeln!(output, "{}", e)?;
        }
    }

    Ok(engine)
}
