//! gzip helpers.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

pub const DEFAULT_LEVEL: u32 = 5;

/// gzip `content` at `level` (0-9, clamped).
pub fn zip_it(content: impl AsRef<[u8]>, level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(content.as_ref())?;
    encoder.finish()
}

pub fn unzip_it(content: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(content);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_magic_and_restore() {
        let zipped = zip_it("HTML Zipped", DEFAULT_LEVEL).unwrap();
        assert_eq!(&zipped[..2], &[0x1f, 0x8b]);
        assert_eq!(unzip_it(&zipped).unwrap(), b"HTML Zipped");
    }

    #[test]
    fn test_level_is_clamped() {
        let zipped = zip_it("x", 42).unwrap();
        assert_eq!(unzip_it(&zipped).unwrap(), b"x");
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(unzip_it(b"not gzip").is_err());
    }
}
