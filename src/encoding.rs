//! UTF-8 validation and encoding diagnostics using simdutf8 and chardetng.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use simdutf8::{basic, compat};

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    basic::from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Why a byte buffer failed UTF-8 validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingFailure {
    /// Byte offset of the first invalid sequence.
    pub offset: usize,
    /// The legacy encoding the data most likely uses.
    pub guess: &'static Encoding,
}

/// Validate `data` as UTF-8 and borrow it as `&str`.
///
/// The slow path only runs on failure: simdutf8's `compat` validator locates
/// the first bad byte and chardetng names a plausible source encoding.
pub fn check_utf8(data: &[u8]) -> Result<&str, EncodingFailure> {
    if let Ok(text) = basic::from_utf8(data) {
        return Ok(text);
    }

    let offset = match compat::from_utf8(data) {
        Ok(_) => 0,
        Err(e) => e.valid_up_to(),
    };

    Err(EncodingFailure {
        offset,
        guess: guess_encoding(data),
    })
}

/// Guess the (non UTF-8) encoding of `data`.
pub fn guess_encoding(data: &[u8]) -> &'static Encoding {
    // UTF-16 BOMs first, chardetng doesn't handle these well
    if data.starts_with(&[0xFF, 0xFE]) {
        return encoding_rs::UTF_16LE;
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        return encoding_rs::UTF_16BE;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    detector.guess(None, false)
}
