// src/radix2.rs
//
// The power-of-two kernel: owns its cache and twiddle table, exposes
// in-place forward/inverse transforms plus allocating copy variants.

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::common::{Fft, FftError};
use crate::engine;
use crate::twiddle::fill_twiddle_table;
use crate::util::pwr2;

/// A reusable radix-2 decimation-in-time FFT kernel for a fixed
/// power-of-two size `N`.
pub struct Radix2Fft<T: Float + FloatConst> {
    cache: Vec<Complex<T>>,
    twiddle: Vec<Complex<T>>,
    fftsize: usize,
    ifswap: bool,
}

impl<T: Float + FloatConst> Radix2Fft<T> {
    /// Build a kernel for transforms of length `n`. `n` must be a positive
    /// power of two.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n == 0 || !n.is_power_of_two() {
            return Err(FftError::DomainError);
        }
        log::trace!("Radix2Fft::new(n={n})");

        let mut twiddle = vec![Complex::new(T::zero(), T::zero()); n / 2];
        fill_twiddle_table(&mut twiddle);
        let p = pwr2(n).map_err(|_| FftError::DomainError)?;

        Ok(Self {
            cache: vec![Complex::new(T::zero(), T::zero()); n],
            twiddle,
            fftsize: n,
            ifswap: p % 2 == 1,
        })
    }

    fn check_len(&self, x: &[Complex<T>]) -> Result<(), FftError> {
        if x.len() != self.fftsize {
            return Err(FftError::LengthMismatch);
        }
        Ok(())
    }

    /// Allocate a fresh complex buffer holding the forward transform of `x`.
    pub fn fft_owned(&mut self, x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = x.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }

    /// Allocate a fresh complex buffer holding the forward transform of a
    /// real-valued signal (promoted to `Complex<T>` with a zero imaginary part).
    pub fn fft_owned_real(&mut self, x: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out: Vec<Complex<T>> = x.iter().map(|&re| Complex::new(re, T::zero())).collect();
        self.fft(&mut out)?;
        Ok(out)
    }

    /// Allocate a fresh complex buffer holding the inverse transform of `x`.
    pub fn ifft_owned(&mut self, x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = x.to_vec();
        self.ifft(&mut out)?;
        Ok(out)
    }

    /// Allocate a fresh complex buffer holding the inverse transform of a
    /// real-valued signal.
    ///
    /// This intentionally delegates to the *forward* transform, mirroring
    /// an inconsistency inherited from the system these numerics are
    /// modeled on (see DESIGN.md). Callers that need an actual inverse of
    /// real data should promote to `Complex<T>` themselves and call
    /// [`Radix2Fft::ifft`].
    pub fn ifft_owned_real(&mut self, x: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        self.fft_owned_real(x)
    }
}

impl<T: Float + FloatConst> Fft<T> for Radix2Fft<T> {
    fn size(&self) -> usize {
        self.fftsize
    }

    fn fft(&mut self, x: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(x)?;
        let hs = self.fftsize / 2;
        engine::forward(x, &mut self.cache, &self.twiddle, hs, self.ifswap);
        Ok(())
    }

    fn ifft(&mut self, x: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(x)?;
        let hs = self.fftsize / 2;
        let n = T::from(self.fftsize).unwrap();
        engine::inverse(x, &mut self.cache, &self.twiddle, hs, self.ifswap, n);
        Ok(())
    }
}

#[cfg(test)]
#[path = "radix2_tests.rs"]
mod tests;
