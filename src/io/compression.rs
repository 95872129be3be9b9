//! Transparent decompression of the input table.
//!
//! Detection is extension-first (`.gz`, `.gzip`), falling back to the gzip
//! magic bytes so a renamed archive still loads. When the
//! `compression-gzip` feature is disabled every input is read as plain text.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

#[cfg(feature = "compression-gzip")]
const GZIP_EXTENSIONS: [&str; 2] = [".gz", ".gzip"];

#[cfg(feature = "compression-gzip")]
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compression detected on an input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Plain,
    #[cfg(feature = "compression-gzip")]
    Gzip,
}

/// Detect a codec from the path alone.
pub fn detect_from_extension(path: impl AsRef<Path>) -> Codec {
    #[cfg(feature = "compression-gzip")]
    {
        let lower = path.as_ref().to_string_lossy().to_lowercase();
        if GZIP_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            return Codec::Gzip;
        }
    }
    #[cfg(not(feature = "compression-gzip"))]
    let _ = path;
    Codec::Plain
}

/// Peek at the start of a buffered stream without consuming it.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> Codec {
    #[cfg(feature = "compression-gzip")]
    {
        if let Ok(buf) = reader.fill_buf()
            && buf.starts_with(&GZIP_MAGIC)
        {
            return Codec::Gzip;
        }
    }
    #[cfg(not(feature = "compression-gzip"))]
    let _ = reader;
    Codec::Plain
}

/// Wrap `reader` with a decompressor when the path or the content says so.
///
/// # Errors
/// Currently infallible for plain input; kept fallible so codecs that validate
/// their header eagerly can report it with context.
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn Read>> {
    let path_hint = path_hint.as_ref();
    let mut buffered = BufReader::new(reader);
    let codec = match detect_from_extension(path_hint) {
        Codec::Plain => detect_from_magic(&mut buffered),
        other => other,
    };
    wrap(codec, buffered).with_context(|| format!("setup decompression for {}", path_hint.display()))
}

fn wrap<R: Read + 'static>(codec: Codec, reader: R) -> Result<Box<dyn Read>> {
    match codec {
        Codec::Plain => Ok(Box::new(reader)),
        #[cfg(feature = "compression-gzip")]
        Codec::Gzip => Ok(Box::new(flate2::read::GzDecoder::new(reader))),
    }
}
