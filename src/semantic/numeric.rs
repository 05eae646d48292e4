//! Conversion of integer literals.
//!
//! Integer fields are 32-bit. A literal outside the target range is an
//! error; the validator reports it and carries on with 0.

use thiserror::Error;

/// Signed field type (bounds and initial values)
pub type Integer = i32;

/// Unsigned field type (array sizes)
pub type Unsigned = u32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("value {literal} out of range {min},{max}")]
    OutOfRange { literal: String, min: i64, max: i64 },
}

impl NumericError {
    fn signed(literal: &str) -> Self {
        Self::OutOfRange {
            literal: literal.to_string(),
            min: Integer::MIN.into(),
            max: Integer::MAX.into(),
        }
    }

    fn unsigned(literal: &str) -> Self {
        Self::OutOfRange {
            literal: literal.to_string(),
            min: Unsigned::MIN.into(),
            max: Unsigned::MAX.into(),
        }
    }
}

/// Parse a signed literal into `[-2^31, 2^31-1]`
pub fn parse_integer(literal: &str) -> Result<Integer, NumericError> {
    literal
        .parse::<Integer>()
        .map_err(|_| NumericError::signed(literal))
}

/// Parse a literal into `[0, 2^32-1]`; any negative literal is out of range
pub fn parse_unsigned(literal: &str) -> Result<Unsigned, NumericError> {
    // "-0" is a valid zero
    if let Some(digits) = literal.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(NumericError::unsigned(literal));
    }
    literal
        .parse::<Unsigned>()
        .map_err(|_| NumericError::unsigned(literal))
}
