use std::env;
use std::fs;
use std::process::ExitCode;

use colored::Colorize;

use w16asm::error::CliError;
use w16asm::output;

const USAGE: &str = "Usage:\n  w16asm <source.asm> <out.bin> [<out.csv>]\n  w16asm -h | --help";

struct ProgramInput {
    source_path: String,
    bin_path: String,
    csv_path: Option<String>,
}

enum Args {
    Help,
    Run(ProgramInput),
}

/// Mirrors the source project's argument loop: `-`-prefixed arguments are
/// flags (only `-h`/`--help`, and only once), everything else is
/// positional (source, then binary, then symbols — at most three).
fn parse_args(args: &[String]) -> Result<Args, CliError> {
    let mut help_flag = false;
    let mut positional: Vec<&String> = Vec::new();

    for arg in args {
        if arg.starts_with('-') {
            if arg == "-h" || arg == "--help" {
                if help_flag {
                    return Err(CliError::ProgramArgumentsInvalid(
                        "help flag was used more than once".to_string(),
                    ));
                }
                help_flag = true;
            } else {
                return Err(CliError::ProgramArgumentsInvalid(format!(
                    "unknown flag \"{arg}\""
                )));
            }
        } else {
            if positional.len() >= 3 {
                return Err(CliError::ProgramArgumentsInvalid("too many arguments".to_string()));
            }
            positional.push(arg);
        }
    }

    if args.is_empty() || help_flag {
        return Ok(Args::Help);
    }

    let Some(bin_path) = positional.get(1) else {
        return Err(CliError::ProgramArgumentsInvalid(
            "destination file path was not provided".to_string(),
        ));
    };

    Ok(Args::Run(ProgramInput {
        source_path: positional[0].clone(),
        bin_path: (*bin_path).clone(),
        csv_path: positional.get(2).map(|s| (*s).clone()),
    }))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let input = match parse_args(&args) {
        Ok(Args::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Args::Run(input)) => input,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            eprintln!("{USAGE}");
            return ExitCode::from(err.code() as u8);
        }
    };

    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Outcome::Cli(err)) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::from(err.code() as u8)
        }
        Err(Outcome::Assembler(err)) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::from(err.kind.code() as u8)
        }
    }
}

enum Outcome {
    Cli(CliError),
    Assembler(w16asm::AssemblerError),
}

fn run(input: &ProgramInput) -> Result<(), Outcome> {
    let source = fs::read(&input.source_path)
        .map_err(|e| Outcome::Cli(CliError::CouldNotReadAsmFile(e.to_string())))?;

    let result = w16asm::assemble(&source).map_err(Outcome::Assembler)?;

    let size = output::program_size(&result);
    if size == 0 {
        return Err(Outcome::Cli(CliError::ResultProgramEmpty));
    }

    fs::write(&input.bin_path, &result.program_memory[..size])
        .map_err(|e| Outcome::Cli(CliError::CouldNotWriteBinFile(e.to_string())))?;

    if let Some(csv_path) = &input.csv_path {
        let csv = output::symbol_table_csv(&result);
        fs::write(csv_path, csv)
            .map_err(|e| Outcome::Cli(CliError::CouldNotWriteSymbolsFile(e.to_string())))?;
    }

    println!("{}", format!("assembled {size} bytes").green());
    Ok(())
}
