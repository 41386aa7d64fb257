use std::path::{Path, PathBuf};

use md64::{file_b64, logger};

const INPUT_FILE: &str = "signatures.md";

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [-o <output file>]");
    eprintln!("Decodes {INPUT_FILE}; without -o the decoded bytes go to stdout");
    std::process::exit(1);
}

fn main() {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    let mut output: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = Some(PathBuf::from(path)),
                    None => usage(&args[0]),
                }
            }
            unknown => {
                eprintln!("Unknown option: {unknown}");
                usage(&args[0]);
            }
        }
        i += 1;
    }

    if let Err(e) = file_b64::decode_file(Path::new(INPUT_FILE), output.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
