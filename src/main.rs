//! Draws an `AvlSet` built from `0..count` as a LaTeX document.
//!
//! Usage: `avl-draw [-v] [count] [path]`, defaulting to 20 elements written to `dump.tex`.

extern crate avl_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use avl_collections::avl_tree::AvlSet;
use avl_collections::export::TexOptions;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::process;

const DEFAULT_COUNT: u32 = 20;
const DEFAULT_PATH: &str = "dump.tex";

fn main() {
    let (flags, args): (Vec<String>, Vec<String>) =
        env::args().skip(1).partition(|arg| arg.starts_with('-'));
    let verbose = flags.iter().any(|flag| flag == "-v" || flag == "--verbose");
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = SimpleLogger::init(level, Config::default()) {
        eprintln!("could not initialize logger: {}", err);
    }

    let count = match args.get(0) {
        Some(arg) => match arg.parse::<u32>() {
            Ok(count) => count,
            Err(err) => {
                error!("invalid element count {:?}: {}", arg, err);
                process::exit(2);
            },
        },
        None => DEFAULT_COUNT,
    };
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_PATH);

    let set: AvlSet<u32> = (0..count).collect();
    info!("built a tree of {} elements with height {}", set.len(), set.height());

    if let Err(err) = set.export_to_tex(path, &TexOptions::default()) {
        error!("could not write {}: {}", path, err);
        process::exit(1);
    }
}
