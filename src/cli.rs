// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Command, Params};
use crate::error::Error;
use crate::runner;

pub fn run() -> Result<(), Error> {
    let params = parse_cli()?;
    runner::run(&params).map(|_| ())
}

fn parse_cli() -> Result<Params, Error> {
    let mut args = env::args().skip(1);

    let command = match args.next().as_deref() {
        Some("manual") => Command::Manual,
        Some("scrape") => Command::Scrape,
        Some("upload") => Command::Upload,
        Some("-h") | Some("--help") => {
            eprintln!(include_str!("cli_help.txt"));
            std::process::exit(0);
        }
        Some(other) => return Err(bad_arg(format!("Unknown command: {}", other))),
        None => {
            eprintln!(include_str!("cli_help.txt"));
            std::process::exit(0);
        }
    };

    let mut params = Params::new(command);

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| bad_arg("Missing value for --out"))?;
                params.out = PathBuf::from(v);
            }
            "--input" => {
                let v = args.next().ok_or_else(|| bad_arg("Missing value for --input"))?;
                params.input = Some(PathBuf::from(v));
            }
            "--endpoint" => {
                params.endpoint = args.next().ok_or_else(|| bad_arg("Missing value for --endpoint"))?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(bad_arg(format!("Unknown arg: {}", a))),
        }
    }

    Ok(params)
}

fn bad_arg(msg: impl Into<String>) -> Error {
    Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, msg.into()))
}
