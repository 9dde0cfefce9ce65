use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

use crate::error::Result;

/// Text encoded when no input is given.
pub const DEMO_TEXT: &str = "huffman coding is simple";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Where the input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
    Demo,
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(_) => write!(f, "command line text"),
            Input::File(path) => write!(f, "file {}", path),
            Input::Demo => write!(f, "demonstration text"),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman encode a text, decode it again and check the round trip",
    long_about = "
    Counts the bytes of the input, builds a huffman tree from those counts, derives a
    prefix-free bit code for each byte, encodes the input and decodes it back. Prints the
    code table, the encoded bits, the decoded text and whether it matches the original."
)]
pub struct Args {
    /// Text to encode
    #[clap()]
    text: Option<String>,

    /// Read the input from a file instead (takes precedence over TEXT)
    #[clap(short = 'f', long = "file")]
    file: Option<String>,

    /// Also print the tree structure
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Sets verbosity. -v shows progress, -vv details, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u64,

    /// Suppress all log messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// All user settable options that control a run
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Source of the bytes to encode
    pub input: Input,
    /// Print the tree structure with the report
    pub show_tree: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Demo,
            show_tree: false,
            verbose: Verbosity::Warnings,
        }
    }

    /// Fetch the bytes to encode.
    pub fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::File(path) => Ok(std::fs::read(path)?),
            Input::Demo => Ok(DEMO_TEXT.as_bytes().to_vec()),
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let input = match (args.file, args.text) {
            (Some(path), _) => Input::File(path),
            (None, Some(text)) => Input::Text(text),
            (None, None) => Input::Demo,
        };
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        HuffOpts {
            input,
            show_tree: args.tree,
            verbose,
        }
    }
}

/// Parse the command line into HuffOpts and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    log::set_max_level(opts.verbose.level_filter());

    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from the {}", opts.input);
    if opts.show_tree {
        info!("Printing the tree structure")
    };
    info!("---- Huffman Initialization End ----\n");
    opts
}
