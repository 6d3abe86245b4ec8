// ============================================================================
// Numeral Module
// Core conversion between integers and Roman numerals
// ============================================================================
//
// This module provides:
// - encode / encode_to_buf: greedy encoding over the symbol ladder
// - decode / is_valid: single-pass lenient decoding
// - NumeralError: error types for both directions
// - The digit table and symbol ladder
//
// Design principles:
// - Pure functions over two constant tables
// - All fallible operations return Result (no panics)
// - No logging; errors are values for the caller to report

mod decoder;
mod encoder;
mod errors;
mod tables;

pub use decoder::{decode, is_valid};
pub(crate) use decoder::normalize;
pub use encoder::{encode, encode_to_buf, NumeralBuf};
pub use errors::{NumeralError, NumeralResult};
pub use tables::{digit_value, DIGITS, LADDER, MAX_NUMERAL_LEN, MAX_VALUE, MIN_VALUE};
