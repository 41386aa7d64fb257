use std::path::Path;

use md64::{file_b64, logger};

const RAW_FILE: &str = "signatures-raw.md";
const OUTPUT_FILE: &str = "signatures.md";

fn main() {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 1 {
        eprintln!("Usage: {}", args[0]);
        eprintln!("Encodes {RAW_FILE} to Base64 and writes {OUTPUT_FILE}");
        std::process::exit(1);
    }

    if let Err(e) = file_b64::encode_file(Path::new(RAW_FILE), Path::new(OUTPUT_FILE)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
