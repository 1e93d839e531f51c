//! Integration tests for the public color difference and conversion API
//!
//! These tests validate:
//! - CIEDE2000 against the Sharma, Wu and Dalal (2005) supplementary test data
//! - Identity, symmetry and non-negativity of the distance
//! - Hue wrap-around and achromatic edge cases
//! - BGR to Lab conversion against fixed points and the palette crate

use ciede2000::{
    bgr_to_lab, distance, BgrColor, ChannelPolicy, ColorConverter, ColorError, DifferenceConfig,
    DistanceCalculator, LabColor,
};
use palette::{white_point::D65, FromColor, Lab, Srgb};

/// (L1, a1, b1, L2, a2, b2, ΔE00) from Table 1 of the CIEDE2000 implementation notes
const SHARMA_PAIRS: [(f64, f64, f64, f64, f64, f64, f64); 34] = [
    (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
    (50.0, 3.1571, -77.2803, 50.0, 0.0, -82.7485, 2.8615),
    (50.0, 2.8361, -74.0200, 50.0, 0.0, -82.7485, 3.4412),
    (50.0, -1.3802, -84.2814, 50.0, 0.0, -82.7485, 1.0000),
    (50.0, -1.1848, -84.8006, 50.0, 0.0, -82.7485, 1.0000),
    (50.0, -0.9009, -85.5211, 50.0, 0.0, -82.7485, 1.0000),
    (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
    (50.0, -1.0, 2.0, 50.0, 0.0, 0.0, 2.3669),
    (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0009, 7.1792),
    (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0010, 7.1792),
    (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0011, 7.2195),
    (50.0, 2.4900, -0.0010, 50.0, -2.4900, 0.0012, 7.2195),
    (50.0, -0.0010, 2.4900, 50.0, 0.0009, -2.4900, 4.8045),
    (50.0, -0.0010, 2.4900, 50.0, 0.0010, -2.4900, 4.8045),
    (50.0, -0.0010, 2.4900, 50.0, 0.0011, -2.4900, 4.7461),
    (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
    (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
    (50.0, 2.5, 0.0, 61.0, -5.0, 29.0, 22.8977),
    (50.0, 2.5, 0.0, 56.0, -27.0, -3.0, 31.9030),
    (50.0, 2.5, 0.0, 58.0, 24.0, 15.0, 19.4535),
    (50.0, 2.5, 0.0, 50.0, 3.1736, 0.5854, 1.0000),
    (50.0, 2.5, 0.0, 50.0, 3.2972, 0.0, 1.0000),
    (50.0, 2.5, 0.0, 50.0, 1.8634, 0.5757, 1.0000),
    (50.0, 2.5, 0.0, 50.0, 3.2592, 0.3350, 1.0000),
    (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
    (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
    (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
    (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
    (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
    (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
    (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
    (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
    (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
    (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
];

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {:.4}, got {:.6}",
        what,
        expected,
        actual
    );
}

// ============================================================================
// CIEDE2000 Reference Data
// ============================================================================

#[test]
fn test_sharma_reference_pairs() {
    for (i, &(l1, a1, b1, l2, a2, b2, expected)) in SHARMA_PAIRS.iter().enumerate() {
        let lab1 = LabColor::new(l1, a1, b1);
        let lab2 = LabColor::new(l2, a2, b2);

        assert_close(distance(lab1, lab2), expected, 1e-4, &format!("Pair {}", i + 1));
        // Reversing the colors must not change the distance
        assert_close(distance(lab2, lab1), expected, 1e-4, &format!("Pair {} reversed", i + 1));
    }
}

// ============================================================================
// Distance Properties
// ============================================================================

#[test]
fn test_distance_identity() {
    for &(l1, a1, b1, l2, a2, b2, _) in SHARMA_PAIRS.iter() {
        for color in [LabColor::new(l1, a1, b1), LabColor::new(l2, a2, b2)] {
            assert_eq!(distance(color, color), 0.0, "{:?}", color);
        }
    }
}

#[test]
fn test_distance_symmetric_and_non_negative() {
    let samples = [
        LabColor::new(0.0, 0.0, 0.0),
        LabColor::new(100.0, 0.0, 0.0),
        LabColor::new(50.0, 80.0, 67.0),
        LabColor::new(30.0, 79.0, -108.0),
        LabColor::new(88.0, -86.0, 83.0),
        LabColor::new(45.0, -0.5, -60.0),
        LabColor::new(70.0, 10.0, 0.0),
        LabColor::new(70.0, -10.0, 0.0001),
    ];
    for lab1 in samples {
        for lab2 in samples {
            let forward = distance(lab1, lab2);
            let backward = distance(lab2, lab1);
            assert!(forward >= 0.0, "{:?} vs {:?} gave {}", lab1, lab2, forward);
            assert!(
                (forward - backward).abs() < 1e-9,
                "{:?} vs {:?}: {} != {}",
                lab1,
                lab2,
                forward,
                backward
            );
        }
    }
}

#[test]
fn test_hue_difference_wraps() {
    // 359° and 1° are 2° apart, the same as 10° and 12°
    let at = |deg: f64| {
        let (sin, cos) = deg.to_radians().sin_cos();
        LabColor::new(50.0, 20.0 * cos, 20.0 * sin)
    };
    let across_zero = distance(at(359.0), at(1.0));
    let mid_range = distance(at(179.0), at(181.0));
    let opposite = distance(at(0.0), at(180.0));

    assert!(across_zero < 1.0, "got {}", across_zero);
    assert!(mid_range < 1.0, "got {}", mid_range);
    assert!(opposite > 10.0 * across_zero);
}

#[test]
fn test_achromatic_singularity() {
    let de = distance(LabColor::new(50.0, 0.0, 0.0), LabColor::new(50.0, 0.0, 0.0001));
    assert!(de.is_finite());
    assert!(de >= 0.0 && de < 1e-3);
}

#[test]
fn test_huge_finite_chroma() {
    let neutral = LabColor::new(50.0, 0.0, 0.0);
    for color in [LabColor::new(50.0, 1e50, 0.0), LabColor::new(50.0, 1e200, 0.0)] {
        assert_eq!(distance(color, color), 0.0, "{:?}", color);

        let de = distance(color, neutral);
        assert!(de.is_finite() && de > 0.0, "{:?} gave {}", color, de);
        assert_close(distance(neutral, color), de, 1e-9, "reversed");
    }
}

#[test]
fn test_try_distance_rejects_non_finite() {
    let calc = DistanceCalculator::new();
    let result = calc.try_distance(LabColor::new(f64::NAN, 0.0, 0.0), LabColor::new(50.0, 0.0, 0.0));
    match result {
        Err(ColorError::InvalidInput { parameter, .. }) => assert_eq!(parameter, "lab1.l"),
        other => panic!("Expected InvalidInput, got: {:?}", other),
    }
}

// ============================================================================
// BGR to Lab Conversion
// ============================================================================

#[test]
fn test_bgr_to_lab_black() {
    let lab = bgr_to_lab(BgrColor::new(0, 0, 0));
    assert_close(lab.l, 0.0, 1e-6, "L");
    assert_close(lab.a, 0.0, 1e-6, "a");
    assert_close(lab.b, 0.0, 1e-6, "b");
}

#[test]
fn test_bgr_to_lab_white() {
    let lab = bgr_to_lab(BgrColor::new(255, 255, 255));
    assert_close(lab.l, 100.0, 0.01, "L");
    assert_close(lab.a, 0.0, 0.01, "a");
    // The rounded sRGB matrix puts white's b* at about -0.0104
    assert_close(lab.b, 0.0, 0.011, "b");
}

#[test]
fn test_bgr_to_lab_gray_point() {
    let lab = bgr_to_lab(BgrColor::new(125, 125, 125));
    assert_close(lab.l, 52.4066, 1e-3, "L");
    assert_close(lab.a, 0.0031, 1e-3, "a");
    assert_close(lab.b, -0.0061, 1e-3, "b");
}

#[test]
fn test_bgr_to_lab_matches_palette() {
    // palette uses unrounded sRGB primaries, so agreement is within 0.1 per channel
    for bgr in [
        BgrColor::new(125, 125, 125),
        BgrColor::new(0, 0, 255),
        BgrColor::new(0, 255, 0),
        BgrColor::new(255, 0, 0),
        BgrColor::new(40, 180, 220),
        BgrColor::new(5, 5, 5),
    ] {
        let ours = bgr_to_lab(bgr);
        let [r, g, b] = bgr.to_rgb().map(|c| f64::from(c) / 255.0);
        let reference = Lab::<D65, f64>::from_color(Srgb::new(r, g, b));

        assert_close(ours.l, reference.l, 0.1, &format!("{:?} L", bgr));
        assert_close(ours.a, reference.a, 0.1, &format!("{:?} a", bgr));
        assert_close(ours.b, reference.b, 0.1, &format!("{:?} b", bgr));
    }
}

#[test]
fn test_out_of_range_channels() {
    let reject = ColorConverter::new();
    assert!(matches!(
        reject.bgr_channels_to_lab(-1, 0, 0),
        Err(ColorError::ChannelOutOfRange { channel: 'B', value: -1 })
    ));

    let clamp = ColorConverter::with_policy(ChannelPolicy::Clamp);
    let lab = clamp.bgr_channels_to_lab(999, 999, 999).unwrap();
    assert_eq!(lab, bgr_to_lab(BgrColor::new(255, 255, 255)));
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_compare_bgr_pixels_with_config() {
    let config = DifferenceConfig::from_json_str(r#"{ "match_tolerance": 1.0 }"#).unwrap();
    let converter = config.converter();

    let a = converter.bgr_to_lab(BgrColor::new(120, 64, 200));
    let b = converter.bgr_to_lab(BgrColor::new(121, 64, 200));
    let c = converter.bgr_to_lab(BgrColor::new(200, 64, 120));

    assert!(config.is_match(a, b));
    assert!(!config.is_match(a, c));
}
