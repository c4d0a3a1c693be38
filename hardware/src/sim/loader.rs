//! Program Image Loader.
//!
//! Reads instruction images from disk. Two formats are accepted:
//!
//! * **Hex**: `@<hex>` records set the current word index, every other
//!   token is one 32-bit hex word placed at the current index, which then
//!   advances by one. `//` starts a comment.
//! * **Raw binary**: little-endian bytes, zero-padded to a whole word.
//!
//! [`bin_to_hex`] converts raw bytes into the hex layout.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::SimError;
use crate::soc::memory::WORD_BYTES;

/// Highest word index an `@` record may select.
pub const MAX_IMAGE_WORDS: usize = 1 << 24;

/// Words per line in [`bin_to_hex`] output.
const WORDS_PER_LINE: usize = 4;

/// Parses a hex image into a dense word vector.
///
/// Word slots skipped by an `@` record are zero.
///
/// # Errors
///
/// [`SimError::HexImage`] for a token that is not a hex number or an
/// address record past [`MAX_IMAGE_WORDS`].
pub fn parse_hex(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.split("//").next().unwrap_or_default();

        for token in line.split_whitespace() {
            if let Some(addr) = token.strip_prefix('@') {
                let addr = usize::from_str_radix(addr, 16).map_err(|e| SimError::HexImage {
                    line: line_no,
                    msg: format!("bad address record `{}`: {}", token, e),
                })?;
                if addr > MAX_IMAGE_WORDS {
                    return Err(SimError::HexImage {
                        line: line_no,
                        msg: format!("address record `{}` is out of range", token),
                    });
                }
                cursor = addr;
                continue;
            }

            let word = u32::from_str_radix(token, 16).map_err(|e| SimError::HexImage {
                line: line_no,
                msg: format!("bad word `{}`: {}", token, e),
            })?;
            if cursor >= MAX_IMAGE_WORDS {
                return Err(SimError::HexImage {
                    line: line_no,
                    msg: "image exceeds the maximum size".to_string(),
                });
            }
            if words.len() <= cursor {
                words.resize(cursor + 1, 0);
            }
            words[cursor] = word;
            cursor += 1;
        }
    }

    Ok(words)
}

/// Splits little-endian bytes into instruction words.
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(WORD_BYTES as usize)
        .map(|chunk| {
            let mut buf = [0u8; WORD_BYTES as usize];
            buf[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(buf)
        })
        .collect()
}

/// Renders raw bytes as a hex image.
///
/// Output starts with `@00000000`, followed by 8-digit upper-case words,
/// four per line.
pub fn bin_to_hex(bytes: &[u8]) -> String {
    let mut out = String::from("@00000000\n");
    for (i, word) in words_from_bytes(bytes).iter().enumerate() {
        out.push_str(&format!("{:08X}", word));
        out.push(if (i + 1) % WORDS_PER_LINE == 0 { '\n' } else { ' ' });
    }
    out
}

/// Loads an image file, choosing the format by extension.
///
/// `.hex` files are parsed as hex images; anything else is raw binary.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let io_err = |source| SimError::Io {
        path: path.display().to_string(),
        source,
    };

    let is_hex = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hex"));

    let words = if is_hex {
        parse_hex(&fs::read_to_string(path).map_err(io_err)?)?
    } else {
        words_from_bytes(&fs::read(path).map_err(io_err)?)
    };

    debug!("[Loader] {} words from {}", words.len(), path.display());
    Ok(words)
}
