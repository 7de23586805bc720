//! `nested-merge` — structurally merge JSON documents.
//!
//! Usage:
//!   nested-merge '<donor-json>' ['<donor-json>' ...]
//!
//! The target document is read from stdin; each argument is a donor merged
//! into it left to right. The merged document is printed to stdout.

use nested::cli::merge_docs;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Supply at least one donor document as an argument.");
        std::process::exit(1);
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let mut docs = Vec::with_capacity(args.len() + 1);
    docs.push(buf.trim().to_string());
    docs.extend(args);

    match merge_docs(&docs) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
