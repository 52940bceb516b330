use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

mod output;
mod quiz;
mod source;

use crate::output::terminal::TerminalOutput;
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::settings::{Mode, Settings};
use crate::quiz::Quiz;

#[derive(Parser)]
#[command(name = "variant-quiz", version, about = "Multiple-choice quizzes from tagged documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take a quiz in the terminal
    Play(SessionArgs),
    /// Print the compiled question set as JSON
    Compile(SessionArgs),
    /// List the quizzes found in the quiz directory
    List,
}

#[derive(Args)]
struct SessionArgs {
    /// Quiz file, or the name of a quiz in the quiz directory
    quiz: PathBuf,

    /// Only draw a random sample of the questions
    #[arg(long)]
    quick: bool,

    /// Number of questions drawn in quick mode
    #[arg(long, env = "VARIANT_QUIZ_QUICK_COUNT", default_value_t = Settings::default().quick_count)]
    quick_count: NonZeroUsize,

    /// Seed for reproducible question and option order
    #[arg(long)]
    seed: Option<u64>,
}

impl SessionArgs {
    fn settings(&self) -> Settings {
        Settings {
            mode: if self.quick { Mode::Quick } else { Mode::Full },
            quick_count: self.quick_count,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn load(args: &SessionArgs, rng: &mut StdRng) -> Result<QuizDefinition> {
    let path = source::resolve(&args.quiz);
    let definition = QuizDefinition::open(&path, rng)
        .with_context(|| format!("Could not load quiz {:?}", args.quiz))?;
    Ok(definition)
}

fn prompt<I: Iterator<Item = io::Result<String>>>(input: &mut I, question: &str) -> Result<Option<String>> {
    if !question.is_empty() {
        print!("{} ", question);
    }
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

fn confirm<I: Iterator<Item = io::Result<String>>>(input: &mut I, question: &str) -> Result<bool> {
    let answer = prompt(input, &format!("{} [y/N]", question))?;
    Ok(matches!(answer.as_deref(), Some("y") | Some("Y") | Some("yes")))
}

fn play(args: &SessionArgs) -> Result<()> {
    let output = TerminalOutput::default();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut rng = args.rng();

    let definition = loop {
        match load(args, &mut rng) {
            Ok(definition) => break definition,
            Err(e) => {
                error!("Error loading questions: {:#}", e);
                output.say(&Message::LoadFailed(format!("{:#}", e)));
                if !confirm(&mut input, "Try again?")? {
                    return Ok(());
                }
            }
        }
    };
    output.say(&Message::QuizLoaded(definition.get_questions().len()));

    let questions = definition.select(&args.settings(), &mut rng);
    let mut quiz = Quiz::new(questions, output.clone());
    loop {
        if quiz.is_over() {
            info!("Final score: {}/{}", quiz.score(), quiz.total());
            if confirm(&mut input, "Restart the quiz?")? {
                quiz.reset();
                continue;
            }
            return Ok(());
        }

        let line = match prompt(&mut input, ">")? {
            Some(line) => line,
            None => return Ok(()),
        };
        match line.as_str() {
            "quit" | "q" => return Ok(()),
            "end" => quiz.end()?,
            _ if quiz.is_answered() => quiz.next()?,
            _ => {
                let selection = quiz
                    .current_question()
                    .and_then(|question| question.parse_selection(&line));
                match selection {
                    Some(selection) => {
                        let result = quiz.answer(&selection)?;
                        debug!("Answered {:?}, correct: {}", result.selection, result.is_correct);
                    }
                    None => output.say(&Message::InvalidSelection),
                }
            }
        }
    }
}

fn compile(args: &SessionArgs) -> Result<()> {
    let mut rng = args.rng();
    let path = source::resolve(&args.quiz);
    let raw = source::fetch(&path)?;
    let questions = quiz::definition::compile(&raw, &args.settings(), &mut rng)?;
    let json = serde_json::to_string_pretty(&questions).context("could not serialize questions")?;
    println!("{}", json);
    Ok(())
}

fn list() -> Result<()> {
    let dir = source::get_quiz_dir()?;
    let quizzes = source::list()?;
    if quizzes.is_empty() {
        return Err(anyhow!("No quizzes found in {:?}", dir));
    }
    for quiz in quizzes {
        if let Some(name) = quiz.file_stem() {
            println!("{}", name.to_string_lossy());
        }
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Play(args) => play(args),
        Command::Compile(args) => compile(args),
        Command::List => list(),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    info!("Bye");
}
