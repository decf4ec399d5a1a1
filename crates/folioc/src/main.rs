//! Folio CLI
//!
//! Splits a text file into word or line tokens and prints the listing.

use folio_core::SplitMode;
use folioc::commands::{count_and_print, split_and_print};

fn main() {
    folioc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "words" => {
            if args.len() < 3 {
                eprintln!("Usage: folio words <file>");
                std::process::exit(1);
            }
            split_and_print(&args[2], SplitMode::Words);
        }
        "lines" => {
            if args.len() < 3 {
                eprintln!("Usage: folio lines <file>");
                std::process::exit(1);
            }
            split_and_print(&args[2], SplitMode::Lines);
        }
        "count" => {
            if args.len() < 3 {
                eprintln!("Usage: folio count <file> [--mode=words|lines]");
                std::process::exit(1);
            }

            let mut mode = SplitMode::Lines;
            let mut path = None;
            for arg in args.iter().skip(2) {
                match arg.as_str() {
                    "--mode=words" => mode = SplitMode::Words,
                    "--mode=lines" => mode = SplitMode::Lines,
                    other if !other.starts_with('-') && path.is_none() => {
                        path = Some(other);
                    }
                    other => {
                        eprintln!("error: unknown option '{other}'");
                        eprintln!("Usage: folio count <file> [--mode=words|lines]");
                        std::process::exit(1);
                    }
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: folio count <file> [--mode=words|lines]");
                std::process::exit(1);
            };

            count_and_print(path, mode);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Folio {}", env!("CARGO_PKG_VERSION"));
        }
        arg => {
            // Shorthand: folio file.txt = folio lines file.txt
            if std::path::Path::new(arg)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
            {
                split_and_print(arg, SplitMode::Lines);
            } else {
                eprintln!("Unknown command: {arg}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Folio - split a text file into word or line tokens");
    println!();
    println!("Usage: folio <command> [options]");
    println!();
    println!("Commands:");
    println!("  words <file>         Split into alphabetic words and print the listing");
    println!("  lines <file>         Split into trimmed non-blank lines and print the listing");
    println!("  count <file>         Print only the token count");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Count options:");
    println!("  --mode=words|lines   Splitting mode (default: lines)");
    println!();
    println!("Examples:");
    println!("  folio lines hamlet.txt");
    println!("  folio words hamlet.txt");
    println!("  folio count hamlet.txt --mode=words");
    println!("  folio hamlet.txt                # shorthand for: folio lines hamlet.txt");
}
