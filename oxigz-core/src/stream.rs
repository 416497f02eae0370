//! The stdin/stdout pipeline for the no-path case.

use crate::detect::{ContentKind, classify};
use crate::error::Result;
use crate::gzip;
use crate::options::Options;
use std::io::{Read, Write};

/// Transcode an unseekable input stream to an output stream.
///
/// Standard input cannot be rewound, so the whole stream is read into memory
/// once and classified from the buffer. When the requested mode already
/// matches the data's current state the buffer passes through unchanged
/// (compressing gzip data or decompressing plain data would double-process
/// or fail); otherwise the transcoder runs in the requested direction.
pub fn run_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &Options,
) -> Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    // An input too short to carry the magic can only be plain bytes.
    let kind = classify(&data).unwrap_or(ContentKind::Plain);

    match (options.decompress, kind) {
        (false, ContentKind::Plain) => {
            let compressed = gzip::compress(&data, options.level)?;
            output.write_all(&compressed)?;
        }
        (true, ContentKind::Gzip) => {
            let plain = gzip::decompress(&data)?;
            output.write_all(&plain)?;
        }
        // Already in the requested state: pass through unchanged.
        (false, ContentKind::Gzip) | (true, ContentKind::Plain) => {
            output.write_all(&data)?;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gzip::Level;
    use std::io::Cursor;

    fn run(input: &[u8], options: &Options) -> Vec<u8> {
        let mut out = Vec::new();
        run_stream(&mut Cursor::new(input.to_vec()), &mut out, options).unwrap();
        out
    }

    #[test]
    fn test_compress_plain_stream() {
        let options = Options::default();
        let out = run(b"stream me", &options);
        assert_eq!(gzip::decompress(&out).unwrap(), b"stream me");
    }

    #[test]
    fn test_decompress_gzip_stream() {
        let compressed = gzip::compress(b"round trip", Level::DEFAULT).unwrap();
        let options = Options {
            decompress: true,
            ..Options::default()
        };
        assert_eq!(run(&compressed, &options), b"round trip");
    }

    #[test]
    fn test_compress_already_gzipped_passes_through() {
        let compressed = gzip::compress(b"once is enough", Level::DEFAULT).unwrap();
        let options = Options::default();
        assert_eq!(run(&compressed, &options), compressed);
    }

    #[test]
    fn test_decompress_plain_passes_through() {
        let options = Options {
            decompress: true,
            ..Options::default()
        };
        assert_eq!(run(b"just text", &options), b"just text");
    }

    #[test]
    fn test_short_input_compresses() {
        let options = Options::default();
        let out = run(b"A", &options);
        assert_eq!(gzip::decompress(&out).unwrap(), b"A");
    }
}
