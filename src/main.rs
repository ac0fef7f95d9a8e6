use clap::{Parser, ValueEnum};
use morselingo::{
    config::{Config, ConfigStore, FileConfigStore},
    language::{DirWordSource, EmbeddedWordSource, WordSource, WordStore},
    morse,
    stats::{PracticeStats, StatisticsData},
    word_generator::TrainingWordGenerator,
};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use tracing::Level;

/// adaptive practice words for learning morse code
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Generates morse practice words that get longer and more numerous as your level rises, using only the letters you have unlocked."
)]
pub struct Cli {
    /// player level (1 or higher)
    #[clap(short = 'l', long)]
    level: Option<i32>,

    /// language to pull words from
    #[clap(short = 'L', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// unlocked characters, e.g. "etian"
    #[clap(short = 'a', long)]
    allowed: Option<String>,

    /// read word lists (words-<lang>.json) from this directory instead of the bundled ones
    #[clap(long)]
    words_dir: Option<PathBuf>,

    /// seed for reproducible word selection
    #[clap(long)]
    seed: Option<u64>,

    /// print the morse code for every word
    #[clap(short = 'm', long)]
    morse: bool,

    /// remember level, language and characters for the next run
    #[clap(long)]
    save: bool,

    /// summarize past attempts from a JSON array of practice stats instead of generating words
    #[clap(long)]
    history: Option<PathBuf>,

    /// path of the config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// verbose logging on stderr
    #[clap(long)]
    debug: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SupportedLanguage {
    #[value(name = "en")]
    #[strum(serialize = "en")]
    English,
    #[value(name = "de")]
    #[strum(serialize = "de")]
    German,
}

impl Cli {
    /// Apply command line overrides on top of the stored settings
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(language) = self.language {
            config.language = language.to_string();
        }
        if let Some(ref allowed) = self.allowed {
            config.allowed_chars = allowed.chars().map(String::from).collect();
        }
        if self.morse {
            config.show_morse = true;
        }
        config
    }
}

fn run_with_source<S: WordSource>(cli: &Cli, config: &Config, source: S) -> morselingo::Result<()> {
    let store = WordStore::new(source);
    let mut generator = match cli.seed {
        Some(seed) => TrainingWordGenerator::with_seed(store, seed),
        None => TrainingWordGenerator::with_entropy(store),
    };

    let words = generator.generate(config.level, &config.language, &config.allowed_chars)?;
    if words.is_empty() {
        eprintln!(
            "no practice words available for level {} in '{}' with characters '{}'",
            config.level,
            config.language,
            config.allowed_chars.concat()
        );
        return Ok(());
    }

    println!("{}", words.join(" "));
    if config.show_morse {
        for word in &words {
            println!("{word}  {}", morse::encode(word, " "));
        }
    }
    Ok(())
}

fn print_history(path: &Path) -> morselingo::Result<()> {
    let attempts: Vec<PracticeStats> = serde_json::from_slice(&fs::read(path)?)?;
    let summary = StatisticsData::from_attempts(&attempts);

    println!(
        "{} of {} symbols correct, {} ms per letter",
        summary.total_correct, summary.total_symbols, summary.average_letter_time_ms
    );
    for (ch, letter) in &summary.letters {
        println!(
            "{ch}  {:>3.0}%  {:>5} ms  score {:.2}",
            letter.average_accuracy * 100.0,
            letter.average_time_ms,
            letter.score
        );
    }
    Ok(())
}

fn run(cli: &Cli) -> morselingo::Result<()> {
    if let Some(ref path) = cli.history {
        return print_history(path);
    }

    let store = match cli.config {
        Some(ref path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = cli.merge_into(store.load());

    // only settings that produced a result are remembered
    match cli.words_dir {
        Some(ref dir) => run_with_source(cli, &config, DirWordSource::with_path(dir))?,
        None => run_with_source(cli, &config, EmbeddedWordSource)?,
    }

    if cli.save {
        store.save(&config)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}
