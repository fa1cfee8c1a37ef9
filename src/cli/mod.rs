//! CLI Module
//!
//! Command-line interface for inspecting and converting PCM payloads.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::ParsePolicy;

/// PCM Audio - convert raw audio/L16 payloads to and from JSON documents
#[derive(Parser, Debug)]
#[command(name = "pcm-audio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a content type and print the format as JSON
    #[command(name = "parse-format")]
    ParseFormat {
        /// Content type, e.g. "audio/L16;rate=44100;channels=2"
        content_type: String,

        /// Reject non-numeric rate/channels values instead of coercing them
        #[arg(long)]
        strict: bool,
    },

    /// Wrap a raw PCM file into a JSON document
    #[command(name = "encode")]
    Encode {
        /// Raw PCM input file
        input: PathBuf,

        /// Content type describing the input
        #[arg(short, long, default_value = "audio/L16")]
        content_type: String,

        /// Reject non-numeric rate/channels values instead of coercing them
        #[arg(long)]
        strict: bool,

        /// Output document (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract the raw PCM bytes from a JSON document
    #[command(name = "decode")]
    Decode {
        /// JSON document to read
        input: PathBuf,

        /// Raw PCM output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show format, frame count and duration of a JSON document
    #[command(name = "info")]
    Info {
        /// JSON document to read
        input: PathBuf,
    },
}

/// Map the `--strict` flag to a parse policy
pub fn parse_policy(strict: bool) -> ParsePolicy {
    if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    }
}
