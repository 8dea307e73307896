use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use printlang::{ast::ast::Program, parser::parser::parse_source};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse a program and print its syntax tree
#[derive(Parser, Debug)]
#[command(name = "printlang", version, about)]
struct Args {
    /// Source file to parse; reads stdin when omitted
    file: Option<PathBuf>,

    /// How to print the parsed program
    #[arg(short, long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Log parser decisions (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Pretty-printed syntax tree
    Debug,
    /// Canonical source text
    Source,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("printlang=trace")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let (file_name, source) = match read_source(args.file.as_ref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("failed to read source: {}", err);
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let program = parse_source(&source, Some(file_name));
    info!("Parsed in {:?}", start.elapsed());

    match program {
        Ok(program) => {
            print!("{}", render(&program, args.format));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", err.render(&source));
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            Ok((file_name, read_to_string(path)?))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((String::from("<stdin>"), source))
        }
    }
}

fn render(program: &Program, format: Format) -> String {
    match format {
        Format::Debug => format!("{:#?}\n", program),
        Format::Source => program.to_string(),
    }
}
