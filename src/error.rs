#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("theta_l '{theta_l}' is out of range (valid: 0..31)")]
    InvalidZoomLevel { theta_l: u8 },

    #[error("theta_t '{theta_t}' is out of range (valid: 0..=32)")]
    InvalidTimeGranularity { theta_t: u8 },

    #[error("time span needs {bit_length} bits, more than the supported 64")]
    UnsupportedTimeSpan { bit_length: u32 },

    #[error("character '{character}' at position {position} is not a base-8 digit")]
    InvalidHashCharacter { character: char, position: usize },
}
