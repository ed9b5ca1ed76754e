use act_transpiler::config::Config;
use act_transpiler::error::CompilerError;
use act_transpiler::lexer::Lexer;
use act_transpiler::transpile;
use clap::{ArgAction, Parser as ClapParser, Subcommand};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

#[derive(ClapParser)]
#[command(author, version, about = "ACT to batch file transpiler")]
struct Cli {
    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpile a source file and write the generated batch script
    Build {
        /// Source file, or - for standard input
        input: PathBuf,
        /// Output file (defaults to the input name with the configured extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the transpile result as JSON instead of writing a file
        #[arg(long)]
        json: bool,
    },
    /// Transpile a source file and report diagnostics without writing anything
    Check {
        /// Source file, or - for standard input
        input: PathBuf,
        /// Print the transpile result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the token list of a source file as JSON
    Tokens {
        /// Source file, or - for standard input
        input: PathBuf,
    },
    /// Manage actc configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the config file location
    Path,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_source(path: &Path) -> Result<String, CompilerError> {
    if is_stdin(path) {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.is_file() {
        return Err(CompilerError::FileNotFound(format!(
            "Source file not found: {}",
            path.display()
        )));
    }

    Ok(fs::read_to_string(path)?)
}

fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        String::from("<stdin>")
    } else {
        path.display().to_string()
    }
}

fn build(input: &Path, output: Option<PathBuf>, json: bool, config: &Config) -> Result<(), CompilerError> {
    let source = read_source(input)?;
    let result = transpile(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        result.into_result()?;
        return Ok(());
    }

    let script = result.into_result()?;
    let output = match output {
        Some(path) => path,
        None if is_stdin(input) => {
            print!("{}", script);
            return Ok(());
        }
        None => config.output_path_for(input),
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&output, script)?;
    info!("Wrote {}", output.display());
    println!("{} -> {}", display_name(input), output.display());
    Ok(())
}

fn check(input: &Path, json: bool) -> Result<(), CompilerError> {
    let source = read_source(input)?;
    let result = transpile(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    result.into_result()?;
    if !json {
        println!("{}: ok", display_name(input));
    }
    Ok(())
}

fn tokens(input: &Path) -> Result<(), CompilerError> {
    let source = read_source(input)?;
    let tokens = Lexer::new(&source).tokenize()?;
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

fn config_command(command: ConfigCommands, config: &Config) -> Result<(), CompilerError> {
    match command {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommands::Init => {
            let config_path = Config::get_config_path();
            if config_path.exists() {
                println!("Config file already exists at: {}", config_path.display());
            } else {
                Config::default().save()?;
                println!("Initialized new config file at: {}", config_path.display());
            }
        }
        ConfigCommands::Path => {
            println!("{}", Config::get_config_path().display());
        }
    }
    Ok(())
}

fn log_level(verbose: u8, config: &Config) -> LevelFilter {
    match verbose {
        0 => LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    if let Err(e) = SimpleLogger::new()
        .with_level(log_level(cli.verbose, &config))
        .init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let (input, result) = match cli.command {
        Commands::Build { input, output, json } => {
            let result = build(&input, output, json, &config);
            (Some(input), result)
        }
        Commands::Check { input, json } => {
            let result = check(&input, json);
            (Some(input), result)
        }
        Commands::Tokens { input } => {
            let result = tokens(&input);
            (Some(input), result)
        }
        Commands::Config { command } => (None, config_command(command, &config)),
    };

    match (result, input) {
        (Ok(()), _) => ExitCode::SUCCESS,
        (Err(CompilerError::Transpile(e)), Some(input)) => {
            eprintln!("{}: {}", display_name(&input), e);
            ExitCode::FAILURE
        }
        (Err(e), _) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
