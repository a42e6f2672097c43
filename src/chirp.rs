// src/chirp.rs
//
// The Bluestein circulant chirp table: chi(n) = exp(i*pi*n^2/N), laid out
// over an extended size M so that the chirp-z convolution (see bluestein.rs)
// can run through the same power-of-two radix-2 engine as everything else.

use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Fill `ca` (length `M`) with the circulant chirp for logical size `n`:
/// `ca[0] = 1`, `ca[i] = ca[M-i] = exp(i*pi*i^2/n)` for `i = 1..n`, and
/// zero in between.
pub fn fill_chirp_table<T: Float + FloatConst>(ca: &mut [Complex<T>], n: usize) {
    let m = ca.len();
    ca[0] = Complex::new(T::one(), T::zero());
    let n_t = T::from(n).unwrap();
    for i in 1..n {
        let angle = T::PI() * T::from(i).unwrap().powi(2) / n_t;
        let (sin_t, cos_t) = angle.sin_cos();
        let chi = Complex::new(cos_t, sin_t);
        ca[i] = chi;
        ca[m - i] = chi;
    }
    if n <= m - n {
        for slot in &mut ca[n..=(m - n)] {
            *slot = Complex::new(T::zero(), T::zero());
        }
    }
}

#[cfg(test)]
#[path = "chirp_tests.rs"]
mod tests;
