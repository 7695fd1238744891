//! Pass Forge - targeted wordlist generator and password strength analyzer
//!
//! Run without arguments for the interactive menu, or use the `generate` and
//! `analyze` subcommands from scripts.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use inquire::InquireError;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use tracing_subscriber::{fmt as log_fmt, EnvFilter};

use pass_forge::{
    analyze,
    types::{parse_year, DEFAULT_OUTPUT, OUTPUT_ENV},
    FileSink, GenerationConfig, PassForgeError, Result, SeedField, Seeds, Sink, StdoutSink,
    Wordlist, WordlistGenerator, ZxcvbnOracle,
};

#[derive(Debug, Parser)]
#[command(
    name = "pass-forge",
    version,
    about = "Targeted password wordlist generator and strength analyzer (authorized testing only)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a wordlist from personal details
    Generate(GenerateArgs),
    /// Estimate the strength of a password
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    surname: Option<String>,
    #[arg(long)]
    nickname: Option<String>,
    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    dob: Option<String>,
    #[arg(long)]
    pet: Option<String>,
    #[arg(long)]
    city: Option<String>,
    /// Output file (default: $PASS_FORGE_OUTPUT or custom_wordlist.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Year used as "now" for year suffixes (default: $PASS_FORGE_YEAR or the current year)
    #[arg(long)]
    year: Option<String>,
    /// Print the wordlist to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Print a JSON generation summary
    #[arg(long, conflicts_with = "stdout")]
    json: bool,
}

impl GenerateArgs {
    fn seeds(&self) -> Seeds {
        Seeds {
            name: self.name.clone(),
            surname: self.surname.clone(),
            nickname: self.nickname.clone(),
            dob: self.dob.clone(),
            pet: self.pet.clone(),
            city: self.city.clone(),
        }
    }

    fn config(&self) -> Result<GenerationConfig> {
        match &self.year {
            Some(raw) => Ok(GenerationConfig::default().with_year(parse_year(raw)?)),
            None => GenerationConfig::from_env(),
        }
    }
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    password: String,
    /// Personal words that should count against the password (repeatable)
    #[arg(long = "hint", value_name = "WORD")]
    hints: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();

    // Initialize the library
    if let Err(e) = pass_forge::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    let cli = Cli::parse();
    let outcome = match cli.command {
        Some(Command::Generate(args)) => run_generate(&args),
        Some(Command::Analyze(args)) => run_analyze(&args),
        None => run_menu(),
    };

    if let Err(e) = outcome {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Structured logs go to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = log_fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }
}

fn default_output() -> PathBuf {
    env::var(OUTPUT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT))
}

/// Non-interactive generation
fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = args.config()?;
    let Some(wordlist) = build_wordlist(&args.seeds(), config, !args.stdout)? else {
        return Ok(());
    };

    if args.stdout {
        wordlist.write_to(&mut StdoutSink)?;
        eprintln!("✅ Generated {} unique passwords.", wordlist.len());
        return Ok(());
    }

    let mut sink = FileSink::new(args.output.clone().unwrap_or_else(default_output));
    save_with_spinner(&wordlist, &mut sink)?;
    print_saved(&wordlist, &sink);

    if args.json {
        println!("{}", serde_json::to_string_pretty(wordlist.summary())?);
    }
    Ok(())
}

/// Run the pipeline and report what went in.
///
/// Returns `None` when there was nothing to generate. Progress lines go to
/// stderr when stdout carries the wordlist itself.
fn build_wordlist(seeds: &Seeds, config: GenerationConfig, chatty: bool) -> Result<Option<Wordlist>> {
    let say = |msg: String| {
        if chatty {
            println!("{}", msg);
        } else {
            eprintln!("{}", msg);
        }
    };

    let generator = WordlistGenerator::new(config);
    let wordlist = match generator.generate(seeds) {
        Ok(wordlist) => wordlist,
        Err(PassForgeError::EmptySeedSet) => {
            say(PassForgeError::EmptySeedSet.user_message());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    for warning in wordlist.warnings() {
        say(warning.user_message());
    }
    say(format!("\nBase words collected: {}", wordlist.base_tokens().join(", ")));
    Ok(Some(wordlist))
}

fn save_with_spinner(wordlist: &Wordlist, sink: &mut dyn Sink) -> Result<usize> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Writing {} passwords to {}", wordlist.len(), sink.target()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = wordlist.write_to(sink);
    spinner.finish_and_clear();
    result
}

fn print_saved(wordlist: &Wordlist, sink: &dyn Sink) {
    println!("\n🎉 Successfully generated {} unique passwords.", wordlist.len());
    println!("💾 Wordlist saved to '{}'", sink.target());
}

/// Non-interactive analysis
fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let oracle = ZxcvbnOracle::new().with_user_inputs(args.hints.clone());
    let result = analyze(&oracle, &args.password)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.report(&args.password));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Analyze,
    Generate,
    Exit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Analyze => write!(f, "Password Strength Analyzer"),
            MenuChoice::Generate => write!(f, "Custom Wordlist Generator"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Interactive menu loop
fn run_menu() -> Result<()> {
    println!("🔐 Pass Forge - for authorized security testing only");
    println!("═══════════════════════════════════════════════════");

    loop {
        let choice = Select::new(
            "Select an option:",
            vec![MenuChoice::Analyze, MenuChoice::Generate, MenuChoice::Exit],
        )
        .prompt();

        let step = match choice {
            Ok(MenuChoice::Analyze) => interactive_analyze(),
            Ok(MenuChoice::Generate) => interactive_generate(),
            Ok(MenuChoice::Exit) => break,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        match step {
            Ok(()) => {}
            Err(PassForgeError::Prompt { .. }) => println!("\n↩️  Back to menu\n"),
            Err(e) => return Err(e),
        }
    }

    println!("👋 Exiting the program. Goodbye!");
    Ok(())
}

fn interactive_analyze() -> Result<()> {
    let password = Password::new("Enter a password to analyze its strength:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    match analyze(&ZxcvbnOracle::new(), &password) {
        Ok(result) => println!("\n{}\n", result.report(&password)),
        Err(PassForgeError::EmptyPassword) => println!("{}", PassForgeError::EmptyPassword.user_message()),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Interactive seed collection: every field may be skipped with Enter
fn collect_seeds() -> Result<Seeds> {
    println!("--- Custom Wordlist Generator ---");
    println!("Enter some personal details to generate a wordlist. Press Enter to skip any field.");

    let mut seeds = Seeds::new();
    for field in SeedField::ALL {
        let value = Text::new(field.prompt())
            .with_help_message("Press Enter to skip")
            .prompt()?;
        seeds.set(field, Some(value));
    }
    Ok(seeds)
}

fn interactive_generate() -> Result<()> {
    let seeds = collect_seeds()?;
    let Some(wordlist) = build_wordlist(&seeds, GenerationConfig::from_env()?, true)? else {
        return Ok(());
    };

    let mut sink = FileSink::new(default_output());
    loop {
        match save_with_spinner(&wordlist, &mut sink) {
            Ok(_) => {
                print_saved(&wordlist, &sink);
                println!("---------------------------------\n");
                return Ok(());
            }
            Err(e @ PassForgeError::SinkWrite { .. }) => {
                println!("{}", e.user_message());
                // The list is already built; only the destination changes
                let retry = Text::new("Save to (leave empty to discard):")
                    .with_default(sink.target())
                    .prompt()?;
                if retry.trim().is_empty() {
                    return Ok(());
                }
                sink = FileSink::new(retry.trim());
            }
            Err(e) => return Err(e),
        }
    }
}
