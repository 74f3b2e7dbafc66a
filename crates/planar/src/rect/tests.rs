use super::*;
use crate::coords::{point, unit_x, unit_y, vector};
use crate::math::nearly_equal;
use crate::shape::Shape;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn reference_rect() -> Rectangle {
    Rectangle::new(point(3.0, 4.0), 2.0, 1.0)
}

#[test]
fn new_is_axis_aligned_with_absolute_extents() {
    let r = Rectangle::new(point(3.0, 4.0), -2.0, -1.0);
    assert_eq!(r.half_extents(), (2.0, 1.0));
    assert_eq!(r.axes(), (unit_x(), unit_y()));
    assert_eq!(r, reference_rect());
}

#[test]
fn from_corners_matches_center_form() {
    let r = Rectangle::from_corners(point(1.0, 3.0), point(5.0, 5.0));
    assert_eq!(r.center(), point(3.0, 4.0));
    assert_eq!(r.half_extents(), (2.0, 1.0));
    // axes must be initialized, not left at zero
    assert_eq!(r.axes(), (unit_x(), unit_y()));
    assert_eq!(r, reference_rect());

    // swapped corners give the same box
    let swapped = Rectangle::from_corners(point(5.0, 5.0), point(1.0, 3.0));
    assert_eq!(swapped, r);
}

#[test]
fn rotated_axes_are_orthonormal() {
    for deg in [0.0, 15.0, 30.0, 45.0, 90.0, 135.0, 180.0, 270.0, -60.0, 725.0] {
        let r = Rectangle::rotated(point(-1.0, 2.0), 3.0, 0.5, deg);
        let (a, b) = r.axes();
        assert!(a.dot(&b).abs() < 1e-12, "deg={deg}");
        assert!((a.norm() - 1.0).abs() < 1e-12, "deg={deg}");
        assert!((b.norm() - 1.0).abs() < 1e-12, "deg={deg}");
        // counter-clockwise frame
        assert!((a.x * b.y - a.y * b.x - 1.0).abs() < 1e-12, "deg={deg}");
    }
}

#[test]
fn rotated_quarter_turn_swaps_axes() {
    let r = Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 90.0);
    let (a, b) = r.axes();
    assert!((a - vector(0.0, 1.0)).norm() < 1e-9);
    assert!((b - vector(-1.0, 0.0)).norm() < 1e-9);
    assert_eq!(r.half_extents(), (2.0, 1.0));
}

#[test]
fn rotated_zero_equals_axis_aligned() {
    let r = Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 0.0);
    assert_eq!(r, reference_rect());
}

#[test]
fn copy_keeps_all_fields() {
    let original = Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 30.0);
    let copy = original;
    assert_eq!(copy, original);
    assert_eq!(copy.axes(), original.axes());

    let mut assigned = Rectangle::new(point(6.0, 5.0), 100.0, 100.0);
    assert_ne!(assigned, original);
    assigned = original;
    assert_eq!(assigned, original);
}

#[test]
fn equality_is_exact_per_field() {
    let a = reference_rect();
    assert_ne!(a, Rectangle::new(point(3.0, 4.0), 2.0 + 1e-12, 1.0));
    assert_ne!(a, Rectangle::new(point(3.0, 4.0 + 1e-12), 2.0, 1.0));
    assert_ne!(a, Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 1e-3));
}

#[test]
fn classify_each_branch() {
    let r = Rectangle::new(point(0.0, 0.0), 2.0, 1.0);
    assert_eq!(r.classify(&point(0.5, 0.5)), Containment::Inside);
    assert_eq!(r.classify(&point(-2.0, 1.0)), Containment::Inside);
    assert_eq!(
        r.classify(&point(2.0 + 5e-6, 1.0 + 5e-6)),
        Containment::Corner
    );
    assert_eq!(r.classify(&point(2.0 + 5e-6, 0.5)), Containment::MajorEdge);
    assert_eq!(r.classify(&point(1.0, -1.0 - 5e-6)), Containment::MinorEdge);
    assert_eq!(r.classify(&point(2.0 + 2e-5, 0.0)), Containment::Outside);
    assert_eq!(r.classify(&point(0.0, 1.0 + 2e-5)), Containment::Outside);
    // on the major border but well past the minor one
    assert_eq!(r.classify(&point(2.0 + 5e-6, 1.5)), Containment::Outside);
}

#[test]
fn containment_labels() {
    assert!(Containment::Corner.is_contained());
    assert!(Containment::MinorEdge.is_contained());
    assert!(!Containment::Outside.is_contained());
    assert_eq!(Containment::MajorEdge.as_str(), "major_edge");
}

#[test]
fn project_measures_along_axes() {
    let r = Rectangle::rotated(point(1.0, 1.0), 2.0, 1.0, 90.0);
    let (m_major, m_minor) = r.project(&point(1.0, 3.0));
    assert!(nearly_equal(m_major, 2.0));
    assert!(m_minor < 1e-9);
}

#[test]
fn reference_points() {
    let r = reference_rect();
    assert!(r.contains_point(&point(2.0, 3.5)));
    assert!(r.contains_point(&point(1.0, 5.0)));
    assert!(!r.contains_point(&point(6.0, 5.0)));

    let rotated = Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 90.0);
    assert!(rotated.contains_point(&point(4.0, 6.0)));
    // inside the unrotated box, outside the rotated one
    assert!(!rotated.contains_point(&point(4.5, 4.0)));
}

#[test]
fn corners_are_contained() {
    for deg in [0.0, 10.0, 45.0, 90.0, 123.0, 200.0, 359.0] {
        let r = Rectangle::rotated(point(7.0, -3.0), 4.0, 1.5, deg);
        for c in r.corners() {
            assert!(r.contains_point(&c), "deg={deg} corner={c:?}");
        }
    }
}

#[test]
fn degenerate_rectangle_is_its_center() {
    let c = point(2.0, -1.0);
    let r = Rectangle::new(c, 0.0, 0.0);
    assert_eq!(r.classify(&c), Containment::Inside);
    // zero minor extent: any exact-zero minor projection is on that border too
    assert_eq!(r.classify(&point(2.0 + 5e-6, -1.0)), Containment::Corner);
    assert!(!r.contains_point(&point(2.001, -1.0)));
}

#[test]
fn randomized_inside_and_outside_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let center = point(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let hm = rng.gen_range(0.1..10.0);
        let hn = rng.gen_range(0.1..10.0);
        let deg = rng.gen_range(-360.0..360.0);
        let r = Rectangle::rotated(center, hm, hn, deg);
        let (a, b) = r.axes();

        let u: f64 = rng.gen_range(-1.0..=1.0);
        let v: f64 = rng.gen_range(-1.0..=1.0);
        let inside = center + a * (u * hm) + b * (v * hn);
        assert!(r.contains_point(&inside));

        // push past the major border by a clear margin
        let s = if u < 0.0 { -1.0 } else { 1.0 };
        let outside = center + a * (s * (hm + 1e-3)) + b * (v * hn);
        assert_eq!(r.classify(&outside), Containment::Outside);
    }
}

#[test]
fn usable_as_trait_object() {
    struct Disk {
        center: Point,
        radius: f64,
    }
    impl Shape for Disk {
        fn center(&self) -> Point {
            self.center
        }
        fn contains_point(&self, p: &Point) -> bool {
            (*p - self.center).norm() <= self.radius
        }
    }

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(reference_rect()),
        Box::new(Disk {
            center: point(3.0, 4.0),
            radius: 1.0,
        }),
    ];
    let p = point(3.5, 4.5);
    assert!(shapes.iter().all(|s| s.contains_point(&p)));
    let q = point(4.9, 4.9);
    let hits: Vec<bool> = shapes.iter().map(|s| s.contains_point(&q)).collect();
    assert_eq!(hits, vec![true, false]);
    assert!(shapes.iter().all(|s| s.center() == point(3.0, 4.0)));

    fn accepts<S: Shape>(shape: S, p: &Point) -> bool {
        shape.contains_point(p)
    }
    let r = reference_rect();
    assert!(accepts(&r, &p));
    assert!(accepts(Box::new(r), &p));
}

#[test]
fn send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Rectangle>();
    assert_send_sync::<Containment>();
}
