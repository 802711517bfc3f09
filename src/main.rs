use std::path::PathBuf;

use clap::Parser;
use knowledge_quiz::{Quiz, QuizError, QuestionBank, load_questions_from_json, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in bank
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Player name shown in the name field
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for question draws, for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Append tracing output to this file (filter with QUIZ_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        logging::init_file(path)?;
    }

    let bank = match &args.questions {
        Some(path) => load_questions_from_json(path)?,
        None => QuestionBank::builtin(),
    };

    let quiz = match args.seed {
        Some(seed) => Quiz::with_seed(bank, seed),
        None => Quiz::new(bank),
    };
    let quiz = match &args.name {
        Some(name) => quiz.with_player_name(name),
        None => quiz,
    };

    quiz.run()
}
