// src/spectrum.rs
//
// Post-processing helpers for a computed spectrum: recentering, the sample
// frequency grid, and amplitude extraction.

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Float;

use crate::util::apy2_complex;

/// Rotate `x` in place by `floor(N/2)`, placing the zero-frequency bin at
/// the center. Works for any copyable element type (complex spectra or
/// real-valued grids alike).
pub fn fftshift<X: Copy>(x: &mut [X]) {
    let n = x.len();
    if n < 2 {
        return;
    }
    let half = n / 2;
    if n % 2 == 0 {
        for i in 0..half {
            x.swap(i, i + half);
        }
    } else {
        // Single-cycle rotation: gcd(n, half) = 1 for odd n, so chasing the
        // cycle starting at index 0 visits every slot exactly once.
        let mut carry = x[0];
        let mut idx = 0usize;
        for _ in 0..n {
            let dest = (idx + half) % n;
            let next_carry = x[dest];
            x[dest] = carry;
            carry = next_carry;
            idx = dest;
        }
    }
}

/// Fill `dest` (length `N`) with the DFT sample-frequency grid for a
/// sampling interval `dt`.
pub fn fftfreq_into<T: Float>(dest: &mut [T], dt: T) {
    let n = dest.len();
    if n == 0 {
        return;
    }
    let df = T::one() / (dt * T::from(n).unwrap());
    let half = n / 2;
    if n % 2 == 0 {
        for (i, slot) in dest.iter_mut().enumerate().take(half) {
            *slot = df * T::from(i).unwrap();
        }
        for (i, slot) in dest.iter_mut().enumerate().skip(half) {
            *slot = df * T::from(i as isize - n as isize).unwrap();
        }
    } else {
        for (i, slot) in dest.iter_mut().enumerate().take(half + 1) {
            *slot = df * T::from(i).unwrap();
        }
        for (i, slot) in dest.iter_mut().enumerate().skip(half + 1) {
            *slot = df * T::from(i as isize - n as isize).unwrap();
        }
    }
}

/// Allocate and fill a length-`n` DFT sample-frequency grid.
pub fn fftfreq<T: Float>(n: usize, dt: T) -> Vec<T> {
    let mut out = vec![T::zero(); n];
    fftfreq_into(&mut out, dt);
    out
}

/// Fill `ampl` with the amplitude of `spec`, normalized by half the
/// destination length.
pub fn fftampl<T: Float>(ampl: &mut [T], spec: &[Complex<T>]) {
    let divisor = T::from(ampl.len() / 2).unwrap();
    for (a, s) in ampl.iter_mut().zip(spec.iter()) {
        *a = apy2_complex(*s) / divisor;
    }
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
