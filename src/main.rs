use std::path::PathBuf;

use clap::Parser;
use iq_quiz::{FileSource, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// Maximum number of page buttons shown in the pagination bar
    #[arg(short, long, default_value_t = 10)]
    max_visible: usize,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let quiz = Quiz::new(FileSource::new(args.questions), args.max_visible);

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
