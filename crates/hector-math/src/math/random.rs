use nalgebra::{Quaternion, UnitQuaternion};
use rand::Rng;
use std::f64::consts::TAU;

/// Uniformly distributed random rotation (Shoemake's subgroup algorithm).
pub fn random_unit_quaternion<R: Rng + ?Sized>(rng: &mut R) -> UnitQuaternion<f64> {
    let u1: f64 = rng.gen();
    let a = TAU * rng.gen::<f64>();
    let b = TAU * rng.gen::<f64>();
    let s1 = (1.0 - u1).sqrt();
    let s2 = u1.sqrt();
    UnitQuaternion::from_quaternion(Quaternion::new(
        s2 * b.cos(),
        s1 * a.sin(),
        s1 * a.cos(),
        s2 * b.sin(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn samples_are_unit_and_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut mean_abs_w = 0.0;
        let n = 4000;
        for _ in 0..n {
            let q = random_unit_quaternion(&mut rng);
            assert!((q.coords.norm() - 1.0).abs() < 1e-12);
            mean_abs_w += q.w.abs();
        }
        mean_abs_w /= n as f64;
        // E|w| on the uniform 3-sphere is 4 / (3 pi).
        assert!((mean_abs_w - 4.0 / (3.0 * std::f64::consts::PI)).abs() < 0.02);
    }
}
