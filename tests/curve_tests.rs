use spline_gen::app::use_cases::curve::{build_spline, sample_coords, sample_curve};
use spline_gen::app::use_cases::drag::drag_constrain;
use spline_gen::app::use_cases::hit_test::hit_test_curve;
use spline_gen::core::{rescale, DecPrecise};
use spline_gen::shared::{point_to_line_segment_collide, point_to_point_collide};
use spline_gen::{
    BoundsRect, CoordinateTransform, Dec16, Interpolator, Point, ScreenPoint, SplineFunction,
    SplineType,
};

fn dec_vec(values: &[i32]) -> Vec<Dec16> {
    values.iter().copied().map(Dec16::from_int).collect()
}

#[test]
fn test_linear_samples_land_on_knot_pixels() {
    let xs = dec_vec(&[0, 25, 50, 75, 100]);
    let ys = dec_vec(&[0, 10, 50, 90, 100]);
    let spline = build_spline(&xs, &ys, SplineType::Linear, Interpolator::DEFAULT_SCALE);

    let user = BoundsRect::from_ints(0, 100, 0, 100);
    let transform = CoordinateTransform::new(user, BoundsRect::window(400, 400));
    let polyline = sample_curve(&spline, &transform, &user, 4);

    assert_eq!(
        polyline,
        vec![
            ScreenPoint::new(0, 400),
            ScreenPoint::new(100, 360),
            ScreenPoint::new(200, 200),
            ScreenPoint::new(300, 40),
            ScreenPoint::new(400, 0),
        ]
    );
    for (&x, &y) in xs.iter().zip(&ys) {
        let (vx, vy) = spline.value(x);
        assert_eq!(vx, x);
        assert!((vy - y).abs() <= Dec16::ONE / 64, "erwartet {y}, erhalten {vy}");
    }
}

#[test]
fn test_identical_points_are_separated_by_min_dist() {
    let anchor = ScreenPoint::new(10, 10);
    let moved = point_to_point_collide(anchor, anchor, 5);
    assert_eq!(moved, ScreenPoint::new(15, 10));
}

#[test]
fn test_probe_at_exact_distance_is_outside() {
    let s0 = ScreenPoint::new(0, 0);
    let s1 = ScreenPoint::new(10, 0);
    assert!(!point_to_line_segment_collide(s0, s1, ScreenPoint::new(5, 3), 3));
    assert!(point_to_line_segment_collide(s0, s1, ScreenPoint::new(5, 2), 3));
}

#[test]
fn test_parametric_right_angle_in_window_space() {
    let xs = dec_vec(&[0, 0, 100]);
    let ys = dec_vec(&[0, 100, 100]);
    let spline = build_spline(&xs, &ys, SplineType::Parametric, Interpolator::DEFAULT_SCALE);
    let SplineFunction::Parametric(parametric) = &spline else {
        panic!("parametrische Kurve erwartet");
    };

    let user = BoundsRect::from_ints(0, 100, 0, 100);
    let transform = CoordinateTransform::new(user, BoundsRect::window(800, 800));
    let expected = [
        ScreenPoint::new(0, 800),
        ScreenPoint::new(0, 0),
        ScreenPoint::new(800, 0),
    ];
    for (&t, corner) in parametric.t_knots().iter().zip(expected) {
        let (x, y) = spline.value(t);
        let screen = transform.to_destination(user.clamp_point(Point::new(x, y)));
        assert!(
            (screen - corner).abs().max_element() <= 2,
            "erwartet {corner}, erhalten {screen}"
        );
    }

    // Anfang und Ende der Abtastung liegen exakt auf den Randpunkten
    let polyline = sample_curve(&spline, &transform, &user, 100);
    assert_eq!(polyline.first(), Some(&expected[0]));
    assert_eq!(polyline.last(), Some(&expected[2]));
}

#[test]
fn test_fallbacks_are_bit_identical() {
    let xs = dec_vec(&[0, 30, 60, 100]);
    let ys = dec_vec(&[5, 80, 20, 60]);
    let akima = build_spline(&xs, &ys, SplineType::CubicMonotone, Interpolator::DEFAULT_SCALE);
    let natural = build_spline(&xs, &ys, SplineType::Cubic, Interpolator::DEFAULT_SCALE);
    assert_eq!(akima, natural);

    let xs = dec_vec(&[0, 100]);
    let ys = dec_vec(&[5, 60]);
    let natural = build_spline(&xs, &ys, SplineType::Cubic, Interpolator::DEFAULT_SCALE);
    let linear = build_spline(&xs, &ys, SplineType::Linear, Interpolator::DEFAULT_SCALE);
    assert_eq!(natural, linear);
}

#[test]
fn test_sampling_covers_domain_for_every_type() {
    let xs = dec_vec(&[0, 20, 45, 70, 85, 100]);
    let ys = dec_vec(&[0, 70, 30, 90, 10, 100]);
    for spline_type in SplineType::ALL {
        let spline = build_spline(&xs, &ys, spline_type, Interpolator::DEFAULT_SCALE);
        let coords = sample_coords(&spline, 37);
        assert_eq!(coords.first(), Some(&spline.coord_min()), "{}", spline_type.label());
        assert_eq!(coords.last(), Some(&spline.coord_max()), "{}", spline_type.label());
        assert!(coords.windows(2).all(|pair| pair[0] < pair[1]));
        for coord in coords {
            let index = spline.closest_knot_index(coord);
            assert!(matches!(index, Some(i) if i < xs.len()));
        }
    }
}

#[test]
fn test_rescale_round_trip_stays_close() {
    let (a, b) = (Dec16::from_int(-40), Dec16::from_int(260));
    let (c, d) = (Dec16::ZERO, Interpolator::DEFAULT_SCALE);
    for value in [-40, -13, 0, 7, 99, 180, 260] {
        let original = Dec16::from_int(value);
        let there = rescale(original, a, b, c, d);
        let back = rescale(there, c, d, a, b);
        assert!((back - original).abs().raw() <= 512, "{value}: {back}");
    }
    let precise = DecPrecise::from_int(3);
    assert_eq!(precise.convert::<16>(), Dec16::from_int(3));
}

#[test]
fn test_curve_hit_and_drag_work_together() {
    let xs = dec_vec(&[0, 50, 100]);
    let ys = dec_vec(&[0, 50, 100]);
    let spline = build_spline(&xs, &ys, SplineType::Linear, Interpolator::DEFAULT_SCALE);
    let user = BoundsRect::from_ints(0, 100, 0, 100);
    let window = BoundsRect::window(800, 800);
    let transform = CoordinateTransform::new(user, window);

    let probe = ScreenPoint::new(600, 199);
    let (click, index) =
        hit_test_curve(&spline, &transform, &user, 100, probe, 6).expect("Kurve getroffen");
    assert_eq!((click, index), (probe, 2));

    let mut points = vec![
        ScreenPoint::new(0, 800),
        ScreenPoint::new(400, 400),
        ScreenPoint::new(800, 0),
    ];
    points.insert(index, click);
    let dragged = drag_constrain(&points, index, ScreenPoint::new(405, 100), 10, false, &window);
    assert_eq!(dragged, ScreenPoint::new(410, 100));
}
