use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use textops::{Config, Op, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textops", about = "Trim, split and case-convert text")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Emit JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Strip leading and trailing whitespace
    Trim {
        /// Input file(s) or directory (default: stdin)
        inputs: Vec<PathBuf>,
    },
    /// Split on a single-character delimiter, one token per line
    Split {
        /// Delimiter (default: from config or ',')
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Trim whitespace around every token
        #[arg(long)]
        trim_tokens: bool,

        /// Input file(s) or directory (default: stdin)
        inputs: Vec<PathBuf>,
    },
    /// Convert ASCII letters to uppercase
    Upper {
        /// Input file(s) or directory (default: stdin)
        inputs: Vec<PathBuf>,
    },
    /// Convert ASCII letters to lowercase
    Lower {
        /// Input file(s) or directory (default: stdin)
        inputs: Vec<PathBuf>,
    },
}

fn die(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    process::exit(1);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_stdin() -> String {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .unwrap_or_else(|e| die(format!("cannot read stdin: {}", e)));
    text
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        textops::load_config(config_path).unwrap_or_else(|e| die(e))
    } else {
        let defaults = ["textops.config.json", "config/textops.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "using config");
                loaded = Some(textops::load_config(&path).unwrap_or_else(|e| die(e)));
                break;
            }
        }
        loaded.unwrap_or_else(Config::default)
    };

    // CLI overrides
    if cli.json {
        config.output = OutputFormat::Json;
    }
    let (op, inputs) = match cli.command {
        Command::Trim { inputs } => (Op::Trim, inputs),
        Command::Upper { inputs } => (Op::Upper, inputs),
        Command::Lower { inputs } => (Op::Lower, inputs),
        Command::Split {
            delimiter,
            trim_tokens,
            inputs,
        } => {
            if let Some(d) = delimiter {
                config.delimiter = d;
            }
            if trim_tokens {
                config.trim_tokens = true;
            }
            (Op::Split(config.delimiter), inputs)
        }
    };

    let (text, file_count) = if inputs.is_empty() {
        (read_stdin(), 0)
    } else {
        let files = textops::list_files(&inputs, &config).unwrap_or_else(|e| die(e));
        let text = textops::read_inputs(&files).unwrap_or_else(|e| die(e));
        (text, files.len())
    };

    let output = textops::apply(&text, op, &config);
    let result = textops::render(&output, &config).unwrap_or_else(|e| die(e));

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &result)
            .unwrap_or_else(|e| die(format!("cannot write {}: {}", output_path.display(), e)));
        let items = match &output {
            textops::Output::Tokens(tokens) => tokens.len(),
            textops::Output::Text(_) => 1,
        };
        tracing::info!(
            files = file_count,
            items,
            path = %output_path.display(),
            "wrote output"
        );
    } else {
        print!("{}", result);
    }
}
