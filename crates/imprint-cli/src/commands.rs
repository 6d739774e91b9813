use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use imprint_sdk::{canonicalize, hash_named, Algorithm, EncodedDigest, Encoding, Value};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Canon(args) => cmd_canon(args),
        Command::Hash(args) => cmd_hash(args),
        Command::Algorithms(_) => cmd_algorithms(),
    }
}

fn cmd_canon(args: CanonArgs) -> anyhow::Result<()> {
    let input = read_input(args.file.as_deref())?;
    println!("{}", canonical_of_json(&input)?);
    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    let input = read_input(args.file.as_deref())?;
    let value = parse_value(&input)?;
    debug!(algorithm = %args.algorithm, encoding = %args.encoding, "fingerprinting input");
    match hash_named(&value, &args.algorithm, &args.encoding)? {
        EncodedDigest::Text(text) => println!("{text}"),
        EncodedDigest::Bytes(bytes) => io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

fn cmd_algorithms() -> anyhow::Result<()> {
    println!("{}", "Algorithms:".bold());
    for algorithm in Algorithm::ALL {
        println!("  {}", algorithm.name().cyan());
    }
    println!("{}", "Encodings:".bold());
    for encoding in Encoding::ALL {
        println!("  {}", encoding.name().cyan());
    }
    Ok(())
}

fn parse_value(input: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(input).context("input is not valid JSON")?;
    Ok(Value::from(json))
}

fn canonical_of_json(input: &str) -> anyhow::Result<String> {
    Ok(canonicalize(&parse_value(input)?))
}

fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {path}")),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}
