//! `hz-to-cent` converts a sequence of frequency values in Hertz to relative
//! pitch values in cents, computed against a reference frequency. One octave
//! (frequency ratio `2:1`) corresponds to 1200 cents, so a value one octave
//! above the reference maps to `1200.0` and one octave below to `-1200.0`.
//!
//! All inputs are validated against the inclusive audible range
//! `[20.0, 20000.0]` Hz before anything is computed. Frequencies below a
//! per-call minimum audible threshold (default: [`MIN_AUDIBLE_HZ`]) are
//! reported as [`f64::NAN`] instead of failing the whole conversion, which is
//! convenient for pitch tracks where unvoiced frames carry a placeholder
//! value.
//!
//! The crate is `no_std`-compatible and only needs `alloc`.
//!
//! ## Example
//! ```rust
//! use hz_to_cent::hz_to_cent;
//!
//! let cents = hz_to_cent(&[220.0, 440.0, 880.0], 440.0).unwrap();
//! assert_eq!(cents, [-1200.0, 0.0, 1200.0]);
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod convert;

pub use convert::{
    hz_to_cent, hz_to_cent_with_min, HzToCentError, CENTS_PER_OCTAVE, MAX_AUDIBLE_HZ,
    MIN_AUDIBLE_HZ,
};
