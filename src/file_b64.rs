use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::markdown;

/// Encode a plaintext file into a markdown document at `output_path`,
/// overwriting any existing file there.
pub fn encode_file(input_path: &Path, output_path: &Path) -> Result<(), Error> {
    if !input_path.is_file() {
        return Err(Error::NotFound(input_path.to_path_buf()));
    }

    log::info!("Reading {}...", input_path.display());
    let raw_content = fs::read_to_string(input_path)?;

    log::info!("Encoding to Base64...");
    let encoded = crate::encode(&raw_content);
    let document = markdown::render_document(&encoded);

    log::info!("Writing to {}...", output_path.display());
    fs::write(output_path, &document)?;

    log::info!(
        "Done. Input: {} bytes, output: {} bytes, Base64: {} characters",
        raw_content.len(),
        document.len(),
        encoded.len()
    );
    Ok(())
}

/// Decode an encoded markdown document. With an output path the decoded
/// text is written there; without one the raw bytes go to stdout, which
/// avoids platform newline translation.
///
/// Nothing is written until the decode has fully succeeded.
pub fn decode_file(input_path: &Path, output_path: Option<&Path>) -> Result<(), Error> {
    if !input_path.is_file() {
        return Err(Error::NotFound(input_path.to_path_buf()));
    }

    log::info!("Reading {}...", input_path.display());
    let content = fs::read_to_string(input_path)?;

    let encoded = markdown::extract_payload(&content)?;
    log::info!("Decoding Base64 ({} characters)...", encoded.len());
    let decoded = crate::decode(encoded)?;

    match output_path {
        Some(path) => {
            fs::write(path, &decoded)?;
            log::info!("Decoded successfully! Written to: {}", path.display());
        }
        None => {
            std::io::stdout().write_all(decoded.as_bytes())?;
            log::info!("Decoded successfully!");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decode_file, encode_file};
    use crate::error::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Helper: write data to a file inside the temp dir and return the file path
    fn write_temp_file(dir: &TempDir, filename: &str, data: &str) -> PathBuf {
        let file_path = dir.path().join(filename);
        fs::write(&file_path, data).expect("write failed");
        file_path
    }

    #[test]
    fn test_encode_decode_file_roundtrip() {
        let tempdir = TempDir::new().unwrap();

        let raw = "# Signatures\n\nSome private content.\nSecond line.\n";
        let infile = write_temp_file(&tempdir, "signatures-raw.md", raw);
        let encoded_path = tempdir.path().join("signatures.md");
        let decoded_path = tempdir.path().join("decoded.md");

        encode_file(&infile, &encoded_path).expect("encode failed");
        decode_file(&encoded_path, Some(&decoded_path)).expect("decode failed");

        let decoded = fs::read_to_string(&decoded_path).expect("read decoded failed");
        assert_eq!(decoded, raw);
    }

    #[test]
    fn test_encode_overwrites_existing_output() {
        let tempdir = TempDir::new().unwrap();

        let infile = write_temp_file(&tempdir, "signatures-raw.md", "fresh content");
        let encoded_path = write_temp_file(&tempdir, "signatures.md", "stale content");

        encode_file(&infile, &encoded_path).expect("encode failed");

        let document = fs::read_to_string(&encoded_path).unwrap();
        assert!(!document.contains("stale content"));
        assert!(document.contains(&crate::encode("fresh content")));
    }

    #[test]
    fn test_encode_is_idempotent() {
        let tempdir = TempDir::new().unwrap();

        let infile = write_temp_file(&tempdir, "signatures-raw.md", "same input");
        let first = tempdir.path().join("first.md");
        let second = tempdir.path().join("second.md");

        encode_file(&infile, &first).expect("first encode failed");
        encode_file(&infile, &second).expect("second encode failed");

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_missing_input_file_fails() {
        let tempdir = TempDir::new().unwrap();

        let missing = tempdir.path().join("nonexistent.md");
        let out_enc = tempdir.path().join("signatures.md");
        let out_dec = tempdir.path().join("decoded.md");

        let result = encode_file(&missing, &out_enc);
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!out_enc.exists(), "No output file on encode failure");

        let result = decode_file(&missing, Some(&out_dec));
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!out_dec.exists(), "No output file on decode failure");
    }

    #[test]
    fn test_decode_malformed_document_fails() {
        let tempdir = TempDir::new().unwrap();

        let no_block = write_temp_file(&tempdir, "no-block.md", "# No code block here\n");
        let out = tempdir.path().join("decoded.md");

        let result = decode_file(&no_block, Some(&out));
        assert!(matches!(result, Err(Error::MalformedDocument)));
        assert!(!out.exists(), "No partial output on malformed input");
    }

    #[test]
    fn test_decode_invalid_payload_fails() {
        let tempdir = TempDir::new().unwrap();

        let bad = write_temp_file(
            &tempdir,
            "bad.md",
            "header\n```\nthis is not base64!\n```\nfooter\n",
        );
        let out = tempdir.path().join("decoded.md");

        let result = decode_file(&bad, Some(&out));
        assert!(matches!(result, Err(Error::Base64(_))));
        assert!(!out.exists(), "No partial output on invalid payload");
    }
}
