#![no_std]

// `Vec`-backed owned scratch buffers (see DESIGN.md — ownership model).
extern crate alloc;

// Enables the standard library only for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(test)]
extern crate std;

pub mod bluestein;
pub mod chirp;
pub mod common;
mod engine;
pub mod radix2;
pub mod spectrum;
pub mod twiddle;
pub mod util;

pub use bluestein::Bluestein;
pub use common::{Fft, FftError};
pub use radix2::Radix2Fft;
pub use spectrum::{fftampl, fftfreq, fftfreq_into, fftshift};
