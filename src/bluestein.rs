// src/bluestein.rs
//
// The chirp-z kernel for sizes that are not a power of two: reduces an
// arbitrary-length DFT to a circular convolution, computed by running the
// shared radix-2 engine (engine.rs) at the next power-of-two size that can
// hold the convolution.

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::chirp::fill_chirp_table;
use crate::common::{Fft, FftError};
use crate::engine;
use crate::twiddle::fill_twiddle_table;
use crate::util::{clp2, pwr2};

/// A reusable Bluestein (chirp-z) FFT kernel for a fixed size `N` that is
/// not a power of two.
pub struct Bluestein<T: Float + FloatConst> {
    fftsize: usize,
    extsize: usize,
    cache0: Vec<Complex<T>>,
    cache1: Vec<Complex<T>>,
    cache2: Vec<Complex<T>>,
    twiddle: Vec<Complex<T>>,
    circulant: Vec<Complex<T>>,
    ifswap: bool,
}

impl<T: Float + FloatConst> Bluestein<T> {
    /// Build a kernel for transforms of length `n`. `n` must be at least 3
    /// and must not be a power of two.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n < 3 || n.is_power_of_two() {
            return Err(FftError::DomainError);
        }

        let m = clp2(2 * (n - 1));
        log::trace!("Bluestein::new(n={n}) extsize={m}");

        let mut twiddle = vec![Complex::new(T::zero(), T::zero()); m / 2];
        fill_twiddle_table(&mut twiddle);

        let mut circulant = vec![Complex::new(T::zero(), T::zero()); m];
        fill_chirp_table(&mut circulant, n);

        let p = pwr2(m).map_err(|_| FftError::DomainError)?;

        Ok(Self {
            fftsize: n,
            extsize: m,
            cache0: vec![Complex::new(T::zero(), T::zero()); m],
            cache1: vec![Complex::new(T::zero(), T::zero()); m],
            cache2: vec![Complex::new(T::zero(), T::zero()); m],
            twiddle,
            circulant,
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
}

impl<T: Float + FloatConst> Fft<T> for Bluestein<T> {
    fn size(&self) -> usize {
        self.fftsize
    }

    fn fft(&mut self, x: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_len(x)?;
        let n = self.fftsize;
        let m = self.extsize;
        let hs = m / 2;

        // H = DFT(chirp), computed once into cache1.
        self.cache1.copy_from_slice(&self.circulant);
        engine::forward(&mut self.cache1, &mut self.cache0, &self.twiddle, hs, self.ifswap);

        // y[i] = x[i] * conj(chi[i]) for i < N, zero-padded to M.
        for i in 0..n {
            self.cache2[i] = x[i] * self.circulant[i].conj();
        }
        for slot in &mut self.cache2[n..m] {
            *slot = Complex::new(T::zero(), T::zero());
        }

        // Y = DFT(y).
        engine::forward(&mut self.cache2, &mut self.cache0, &self.twiddle, hs, self.ifswap);

        // Pointwise multiply in the frequency domain, then invert.
        for i in 0..m {
            self.cache2[i] = self.cache2[i] * self.cache1[i];
        }
        let m_t = T::from(m).unwrap();
        engine::inverse(&mut self.cache2, &mut self.cache0, &self.twiddle, hs, self.ifswap, m_t);

        // Reconstruct the logical-size output.
        for i in 0..n {
            x[i] = self.cache2[i] * self.circulant[i].conj();
        }
        Ok(())
    }

    /// Not implemented: documented future work. Returns
    /// `FftError::Unsupported` without touching `x`.
    fn ifft(&mut self, _x: &mut [Complex<T>]) -> Result<(), FftError> {
        Err(FftError::Unsupported)
    }
}

#[cfg(test)]
#[path = "bluestein_tests.rs"]
mod tests;
