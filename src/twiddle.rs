// src/twiddle.rs
//
// Fills a length-H table with exp(-i*pi*k/H) for k = 0 .. H, H a power of
// two. See DESIGN.md for why this evaluates cos/sin directly per quadruple
// rather than running the original source's accumulating recurrence.

use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Fill `wa` (length `H`, a power of two) with `wa[k] = (cos(k*theta), sin(k*theta))`,
/// `theta = -pi/H`.
pub fn fill_twiddle_table<T: Float + FloatConst>(wa: &mut [Complex<T>]) {
    let h = wa.len();
    if h == 0 {
        return;
    }
    wa[0] = Complex::new(T::one(), T::zero());
    if h == 1 {
        return;
    }
    wa[h / 2] = Complex::new(T::zero(), -T::one());
    if h / 2 == 1 {
        return;
    }

    let theta = -T::PI() / T::from(h).unwrap();
    for k in 1..(h / 4) {
        let (sin_t, cos_t) = (T::from(k).unwrap() * theta).sin_cos();
        wa[k] = Complex::new(cos_t, sin_t);
        wa[h / 2 - k] = Complex::new(-sin_t, -cos_t);
        wa[h / 2 + k] = Complex::new(sin_t, -cos_t);
        wa[h - k] = Complex::new(-cos_t, sin_t);
    }

    if h >= 4 {
        let r = T::from(0.7071067811865476_f64).unwrap();
        wa[h / 4] = Complex::new(r, -r);
        wa[3 * h / 4] = Complex::new(-r, -r);
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
