use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use serde::Serialize;
use tabwriter::TabWriter;

use skv_core::{derive, validate};

#[derive(Debug, Parser)]
#[command(name = "skv", version, about = "Serial key generator and validator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Derive the serial for an email address.
    Generate {
        /// Email address (identifier) to derive from
        email: String,
        /// Output a single JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a candidate serial against an email address.
    Validate {
        /// Email address (identifier)
        email: String,
        /// Candidate serial
        serial: String,
        /// Output a single JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Prompt for an email address and serial on stdin, then check them.
    Check,
    /// Derive serials for every identifier in a file (one per line).
    Batch {
        /// Input path, one identifier per line (blank lines are skipped)
        input: String,
    },
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    email: &'a str,
    serial: &'a str,
}

#[derive(Serialize)]
struct ValidateOutput<'a> {
    email: &'a str,
    serial: &'a str,
    valid: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Generate { email, json } => {
            let code = derive(email.as_bytes());
            if json {
                let out = GenerateOutput {
                    email: &email,
                    serial: code.as_str(),
                };
                println!("{}", serde_json::to_string(&out)?);
            } else {
                println!("Email: {email}");
                println!("Generated serial: {code}");
            }
        }

        Command::Validate {
            email,
            serial,
            json,
        } => {
            let valid = validate(email.as_bytes(), &serial);
            if json {
                let out = ValidateOutput {
                    email: &email,
                    serial: &serial,
                    valid,
                };
                println!("{}", serde_json::to_string(&out)?);
            } else if valid {
                println!("OK");
            } else {
                // Exact error string, stable for CI / integrations.
                eprintln!("serial mismatch for '{email}'");
            }
            if !valid {
                process::exit(2);
            }
        }

        Command::Check => {
            run_check()?;
        }

        Command::Batch { input } => {
            let s = match fs::read_to_string(&input) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };

            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "email\tserial")?;
            for line in s.lines() {
                if line.is_empty() {
                    continue;
                }
                writeln!(tw, "{line}\t{}", derive(line.as_bytes()))?;
            }
            tw.flush()?;
        }
    }

    Ok(())
}

/// Interactive checker: banner, two prompts, verdict.
///
/// Lines are read unbounded; only the trailing newline is stripped (via
/// `BufRead::lines`), so surrounding whitespace in the email stays part of
/// the identifier. Exits 0 on a correct serial, 2 on an incorrect one.
fn run_check() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("********************************");

    print!("E-Mail address: ");
    io::stdout().flush()?;
    let email = read_line(&mut lines)?;

    print!("Serial number: ");
    io::stdout().flush()?;
    let serial = read_line(&mut lines)?;

    if validate(email.as_bytes(), &serial) {
        println!("Correct serial! Software unlocked.");
        println!("********************************");
        println!("_____/\\__/\\_|  -------  |_/_____");
    } else {
        println!("Incorrect serial.");
        println!("********************************");
        println!("_____/\\_/\\_/\\_|  -------  |_\\___\\");
        process::exit(2);
    }

    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => anyhow::bail!("unexpected end of input"),
    }
}
