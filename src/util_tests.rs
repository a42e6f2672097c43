use super::*;

#[test]
fn pwr2_rejects_zero() {
    assert_eq!(pwr2(0), Err(FftError::InvalidArgument));
}

#[test]
fn pwr2_floors_log2() {
    assert_eq!(pwr2(1).unwrap(), 0);
    assert_eq!(pwr2(2).unwrap(), 1);
    assert_eq!(pwr2(3).unwrap(), 1);
    assert_eq!(pwr2(4).unwrap(), 2);
    assert_eq!(pwr2(1023).unwrap(), 9);
    assert_eq!(pwr2(1024).unwrap(), 10);
    assert_eq!(pwr2(1 << 20).unwrap(), 20);
}

#[test]
fn clp2_matches_spec_cases() {
    assert_eq!(clp2(0), 1);
    assert_eq!(clp2(1), 2);
    assert_eq!(clp2(2), 2);
    assert_eq!(clp2(3), 4);
    assert_eq!(clp2(4), 4);
    assert_eq!(clp2(5), 8);
    assert_eq!(clp2(501), 512);
    assert_eq!(clp2(1000), 1024);
}

#[test]
fn swap_exchanges_elements() {
    let mut v = [1, 2, 3, 4];
    swap(&mut v, 0, 3);
    assert_eq!(v, [4, 2, 3, 1]);
}

#[test]
fn apy2_matches_hypot() {
    let got = apy2(3.0_f64, 4.0_f64);
    assert!((got - 5.0).abs() < 1e-12);
    assert!((apy2(0.0_f64, 0.0_f64)).abs() < 1e-12);
    assert!((apy2(-3.0_f64, 4.0_f64) - 5.0).abs() < 1e-12);
}

#[test]
fn apy2_propagates_nan() {
    assert!(apy2(f64::NAN, 1.0).is_nan());
    assert!(apy2(1.0, f64::NAN).is_nan());
}

#[test]
fn apy2_complex_matches_apy2_of_parts() {
    let c = num_complex::Complex::new(3.0_f64, -4.0);
    assert!((apy2_complex(c) - 5.0).abs() < 1e-12);
}
