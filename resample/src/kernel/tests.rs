use std::str::FromStr;

use common::FloatExt;
use strum::IntoEnumIterator;

use super::*;
use crate::Error;

#[test]
fn linear_samples() {
    assert_eq!(Linear.support(), 1.0);
    assert_eq!(Linear.at(0.0), 1.0);
    assert_eq!(Linear.at(0.25), 0.75);
    assert_eq!(Linear.at(0.5), 0.5);
    assert!(Linear.at(0.999).approximately_eq_within(0.001, 1e-12));
}

#[test]
fn catmull_rom_interpolates_samples() {
    assert_eq!(CatmullRom.support(), 2.0);
    assert_eq!(CatmullRom.at(0.0), 1.0);
    assert!(CatmullRom.at(1.0).approximately_eq(0.0));
    assert!(CatmullRom.at(2.0 - 1e-12).approximately_eq(0.0));
}

#[test]
fn catmull_rom_known_values() {
    // (1.5 * 0.5 - 2.5) * 0.25 + 1
    assert!(CatmullRom.at(0.5).approximately_eq(0.5625));
    // ((-0.5 * 1.5 + 2.5) * 1.5 - 4) * 1.5 + 2
    assert!(CatmullRom.at(1.5).approximately_eq(-0.0625));
}

#[test]
fn catmull_rom_is_continuous_at_one() {
    let below = CatmullRom.at(1.0 - 1e-9);
    let above = CatmullRom.at(1.0);
    assert!(below.approximately_eq(above));
}

#[test]
fn catmull_rom_partition_of_unity() {
    // For any sub-pixel offset the four taps sum to one.
    for i in 0..=20 {
        let f = i as f64 / 20.0;
        let sum: f64 = [1.0 + f, f, 1.0 - f, 2.0 - f]
            .iter()
            .filter(|t| **t < 2.0)
            .map(|&t| CatmullRom.at(t))
            .sum();
        assert!(sum.approximately_eq(1.0), "offset {f}: sum {sum}");
    }
}

#[test]
fn fn_kernel_delegates() {
    let box_kernel = FnKernel::new(0.5, |_| 1.0);
    assert_eq!(box_kernel.support(), 0.5);
    assert_eq!(box_kernel.at(0.25), 1.0);
}

#[test]
fn wrapped_kernels_delegate() {
    let boxed: Box<dyn Kernel> = Box::new(CatmullRom);
    let shared: Arc<dyn Kernel + Send + Sync> = Arc::new(Linear);
    assert_eq!(boxed.support(), 2.0);
    assert_eq!(boxed.at(0.5), CatmullRom.at(0.5));
    assert_eq!(shared.support(), 1.0);
    assert_eq!((&Linear).at(0.5), 0.5);
}

#[test]
fn interpolation_matches_concrete_kernels() {
    for t in [0.0, 0.3, 0.9] {
        assert_eq!(Interpolation::Linear.at(t), Linear.at(t));
    }
    for t in [0.0, 0.5, 1.2, 1.9] {
        assert_eq!(Interpolation::CatmullRom.at(t), CatmullRom.at(t));
    }
    assert_eq!(Interpolation::default(), Interpolation::CatmullRom);
}

#[test]
fn interpolation_parses_names() {
    assert_eq!(
        Interpolation::from_str("linear").unwrap(),
        Interpolation::Linear
    );
    assert_eq!(
        Interpolation::from_str("BiLinear").unwrap(),
        Interpolation::Linear
    );
    assert_eq!(
        Interpolation::from_str("catmull-rom").unwrap(),
        Interpolation::CatmullRom
    );
    assert_eq!(
        Interpolation::from_str("cubic").unwrap(),
        Interpolation::CatmullRom
    );
    assert!(Interpolation::from_str("lanczos").is_err());
}

#[test]
fn interpolation_display_round_trips() {
    for interpolation in Interpolation::iter() {
        let name = interpolation.to_string();
        assert_eq!(Interpolation::from_str(&name).unwrap(), interpolation);
    }
}

#[test]
fn interpolation_from_config() {
    let parsed: Interpolation = serde_json::from_str("\"catmull-rom\"").unwrap();
    assert_eq!(parsed, Interpolation::CatmullRom);
    let parsed: Interpolation = serde_json::from_str("\"bilinear\"").unwrap();
    assert_eq!(parsed, Interpolation::Linear);
    assert_eq!(
        serde_json::to_string(&Interpolation::Linear).unwrap(),
        "\"linear\""
    );
}

#[test]
fn footprint_widens_when_downscaling() {
    let up = Footprint::new(&CatmullRom, 0.5);
    assert_eq!(up.half_width, 2.0);
    assert_eq!(up.arg_scale, 1.0);

    let down = Footprint::new(&CatmullRom, 4.0);
    assert_eq!(down.half_width, 8.0);
    assert_eq!(down.arg_scale, 0.25);
    // A source sample 4 pixels away behaves like t = 1.
    assert!(down.weight(&CatmullRom, 10.0, 6.0).approximately_eq(0.0));
    assert_eq!(down.weight(&CatmullRom, 10.0, 10.0), 1.0);
    assert_eq!(down.weight(&CatmullRom, 10.0, 2.0), 0.0);
}

#[test]
fn validate_rejects_bad_support() {
    assert!(validate(&Linear).is_ok());
    assert_eq!(
        validate(&FnKernel::new(0.0, |_| 1.0)),
        Err(Error::InvalidKernel { support: 0.0 })
    );
    assert!(validate(&FnKernel::new(f64::INFINITY, |_| 1.0)).is_err());
    assert!(validate(&FnKernel::new(-1.0, |_| 1.0)).is_err());
}
