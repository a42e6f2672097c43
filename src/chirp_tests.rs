use super::*;

fn close(a: Complex<f64>, b: Complex<f64>) {
    assert!((a - b).norm() < 1e-12, "{:?} != {:?}", a, b);
}

#[test]
fn origin_is_one() {
    let n = 5usize;
    let m = 16usize;
    let mut ca = vec![Complex::new(0.0_f64, 0.0); m];
    fill_chirp_table(&mut ca, n);
    close(ca[0], Complex::new(1.0, 0.0));
}

#[test]
fn reflects_and_zero_pads() {
    let n = 5usize;
    let m = 16usize;
    let mut ca = vec![Complex::new(1.0_f64, 1.0); m];
    fill_chirp_table(&mut ca, n);
    for i in 1..n {
        close(ca[i], ca[m - i]);
        let theta = core::f64::consts::PI * (i * i) as f64 / (n as f64);
        close(ca[i], Complex::new(theta.cos(), theta.sin()));
    }
    for i in n..=(m - n) {
        close(ca[i], Complex::new(0.0, 0.0));
    }
}

#[test]
fn unit_modulus() {
    let n = 7usize;
    let m = 32usize;
    let mut ca = vec![Complex::new(0.0_f64, 0.0); m];
    fill_chirp_table(&mut ca, n);
    for i in 0..n {
        assert!((ca[i].norm() - 1.0).abs() < 1e-12);
    }
}
