// src/engine.rs
//
// The shared radix-2 ping-pong engine. `Radix2Fft` drives this directly
// against its own cache; `Bluestein` drives the same functions against its
// extended-size caches for the inner chirp-z convolution. Keeping this in
// one module means the numerically sensitive pass-scheduling is written
// once instead of duplicated between the two front-ends.

use num_complex::Complex;
use num_traits::Float;

/// One decimation-in-time butterfly pass over a contiguous pair of
/// half-spectra: `ya[yi] = a + b`, `ya[yi+pd] = (a-b) * wa[wi]` for
/// `k = 0..ns`, `xi = si + k*pd`, `yi = si + k*ss`, `wi = k*pd`.
///
/// `xa` is read-only; no slot of `ya` other than the two written above is
/// touched.
fn ctb<T: Float>(
    ya: &mut [Complex<T>],
    xa: &[Complex<T>],
    wa: &[Complex<T>],
    si: usize,
    hs: usize,
    ns: usize,
    ss: usize,
    pd: usize,
) {
    for k in 0..ns {
        let xi = si + k * pd;
        let yi = si + k * ss;
        let wi = k * pd;
        let a = xa[xi];
        let b = xa[xi + hs];
        ya[yi] = a + b;
        ya[yi + pd] = (a - b) * wa[wi];
    }
}

/// Schedule `log2(2*hs)` butterfly passes over `sa`/`ba` with ping-pong,
/// leaving the natural-order DFT of the original `sa` in `ba` when the
/// number of passes is odd, in `sa` when even.
pub(crate) fn ditnn<T: Float>(
    sa: &mut [Complex<T>],
    ba: &mut [Complex<T>],
    wa: &[Complex<T>],
    hs: usize,
) {
    let mut ns = hs;
    let mut pd = 1usize;
    let mut ss = 2usize;
    let mut sf = false;
    while ns > 0 {
        for si in 0..pd {
            if !sf {
                ctb(ba, sa, wa, si, hs, ns, ss, pd);
            } else {
                ctb(sa, ba, wa, si, hs, ns, ss, pd);
            }
        }
        ns /= 2;
        pd *= 2;
        ss *= 2;
        sf = !sf;
    }
}

/// Forward transform of `target` in place, using `scratch` as the engine's
/// ping-pong partner. `ifswap` is `true` iff `log2(target.len())` is odd.
pub(crate) fn forward<T: Float>(
    target: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    twiddle: &[Complex<T>],
    hs: usize,
    ifswap: bool,
) {
    if ifswap {
        scratch.copy_from_slice(target);
        ditnn(scratch, target, twiddle, hs);
    } else {
        ditnn(target, scratch, twiddle, hs);
    }
}

/// Inverse transform of `target` in place: conjugate, forward-transform,
/// conjugate and scale by `1/n`.
pub(crate) fn inverse<T: Float>(
    target: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    twiddle: &[Complex<T>],
    hs: usize,
    ifswap: bool,
    n: T,
) {
    if ifswap {
        for (c, x) in scratch.iter_mut().zip(target.iter()) {
            *c = x.conj();
        }
        ditnn(scratch, target, twiddle, hs);
    } else {
        for x in target.iter_mut() {
            *x = x.conj();
        }
        ditnn(target, scratch, twiddle, hs);
    }
    for x in target.iter_mut() {
        *x = x.conj() / n;
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
