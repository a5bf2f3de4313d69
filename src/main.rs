use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::debug;
use passgauge::{
    meter, CharacterClass, Generated, GeneratorConfig, PasswordGenerator, Result,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random passwords and show their strength
    Generate(GenerateArgs),

    /// Show the strength of an existing password
    Score {
        /// Password to score
        #[arg(allow_hyphen_values = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Generate(_) => "generate",
            Command::Score { .. } => "score",
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length
    #[arg(long, short, env = "PASSGAUGE_LENGTH")]
    length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    count: usize,

    /// Print results as JSON, one object per line
    #[arg(long)]
    json: bool,

    /// JSON configuration file
    #[arg(long, env = "PASSGAUGE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    // Subcommand name only, the args can hold a password.
    debug!("running {} command", cli.command.name());

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(args, out),
        Command::Score { password, json } => {
            print_generated(out, &Generated::new(password), json)
        }
    }
}

fn build_generator(args: &GenerateArgs) -> Result<PasswordGenerator> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let mut generator = PasswordGenerator::new(config)?;
    if let Some(length) = args.length {
        generator.set_length(length)?;
    }

    let disabled = [
        (CharacterClass::Uppercase, args.no_uppercase),
        (CharacterClass::Lowercase, args.no_lowercase),
        (CharacterClass::Digits, args.no_digits),
        (CharacterClass::Symbols, args.no_symbols),
    ];
    for (class, off) in disabled {
        if off {
            generator.set_class(class, false);
        }
    }

    Ok(generator)
}

fn generate<W: Write>(args: GenerateArgs, out: &mut W) -> Result<()> {
    let mut generator = build_generator(&args)?;

    for _ in 0..args.count {
        let generated = generator.generate()?;
        print_generated(out, generated, args.json)?;
    }

    Ok(())
}

fn print_generated<W: Write>(out: &mut W, generated: &Generated, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(generated)?)?;
    } else {
        writeln!(out, "{}", generated.password().bold())?;
        writeln!(
            out,
            "{} {}",
            meter::render(&generated.assessment(), meter::DEFAULT_WIDTH),
            format!("({}/100)", generated.assessment().score)
                .as_str()
                .dimmed()
        )?;
    }

    Ok(())
}
