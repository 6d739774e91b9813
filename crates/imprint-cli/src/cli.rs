use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "imprint",
    about = "Imprint — deterministic canonical fingerprints for structured values",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical string of a JSON document
    Canon(CanonArgs),
    /// Print the fingerprint of a JSON document
    Hash(HashArgs),
    /// List recognized algorithm and encoding names
    Algorithms(AlgorithmsArgs),
}

#[derive(Args)]
pub struct CanonArgs {
    /// Input file; reads stdin when omitted
    pub file: Option<String>,
}

#[derive(Args)]
pub struct HashArgs {
    /// Input file; reads stdin when omitted
    pub file: Option<String>,

    #[arg(short, long, default_value = "sha1")]
    pub algorithm: String,

    #[arg(short, long, default_value = "hex")]
    pub encoding: String,
}

#[derive(Args)]
pub struct AlgorithmsArgs {}
