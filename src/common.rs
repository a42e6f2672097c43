// src/common.rs

use core::fmt;
use num_complex::Complex;
use num_traits::Float;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// A kernel was constructed with a size it cannot serve (wrong
    /// power-of-two-ness, or below the minimum size a Bluestein kernel needs).
    DomainError,
    /// A transform was called with a buffer whose length differs from the
    /// kernel's configured size.
    LengthMismatch,
    /// The operation is a documented future feature, not yet implemented.
    Unsupported,
    /// A scalar utility (`pwr2`) was called outside its domain.
    InvalidArgument,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::DomainError => write!(f, "size is not valid for this kernel"),
            FftError::LengthMismatch => write!(f, "buffer length does not match the kernel's fft size"),
            FftError::Unsupported => write!(f, "operation is not supported by this kernel"),
            FftError::InvalidArgument => write!(f, "argument is outside the function's domain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Common front door for the two kernel families: both own their buffers,
/// both gate construction on size, both run in place on a caller-owned
/// signal of their configured length.
pub trait Fft<T: Float> {
    /// The length this kernel was constructed for.
    fn size(&self) -> usize;

    /// Forward DFT, computed in place.
    fn fft(&mut self, x: &mut [Complex<T>]) -> Result<(), FftError>;

    /// Inverse DFT, computed in place. Kernels that do not support an
    /// inverse (the Bluestein kernel, for now) return `FftError::Unsupported`.
    fn ifft(&mut self, x: &mut [Complex<T>]) -> Result<(), FftError>;
}
