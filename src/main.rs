//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffman::compression::report::{run, Outcome};
use huffman::tools::cli::huffopts_init;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not initialize the terminal logger.");
    }

    let opts = huffopts_init();

    let text = match opts.read_input() {
        Ok(text) => text,
        Err(e) => {
            error!("Could not read the input: {}", e);
            eprintln!("huffman: {}", e);
            std::process::exit(1);
        }
    };

    //----- Run the whole pipeline and report what happened
    match run(&text) {
        Ok(Outcome::Empty) => {
            println!("Input is empty. Nothing to do.");
        }
        Ok(Outcome::Report(report)) => {
            print!("{}", report);
            if opts.show_tree {
                println!("## Tree Structure ##");
                print!("{}", report.tree.render());
            }
            if !report.round_trip_ok {
                error!("Round trip check failed.");
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Huffman run failed: {}", e);
            eprintln!("huffman: {}", e);
            std::process::exit(1);
        }
    }

    info!("Done.\n");
}
