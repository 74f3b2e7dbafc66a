use planar::prelude::*;

/// One reference query and its expected membership.
pub struct Scenario {
    pub name: &'static str,
    pub rect: Rectangle,
    pub point: Point,
    pub expect_contained: bool,
}

/// A scenario whose classification disagreed with the expectation.
#[derive(Debug)]
pub struct Failure {
    pub name: &'static str,
    pub expect_contained: bool,
    pub got: Containment,
}

/// Reference scenarios: interior, border (on a copy), outside (after
/// assignment), corner construction, rotated rectangle.
pub fn scenarios() -> Vec<Scenario> {
    let base = Rectangle::new(point(3.0, 4.0), 2.0, 1.0);
    let copied = base;
    let mut assigned = Rectangle::new(point(6.0, 5.0), 100.0, 100.0);
    assigned.clone_from(&base);

    vec![
        Scenario {
            name: "interior",
            rect: base,
            point: point(2.0, 3.5),
            expect_contained: true,
        },
        Scenario {
            name: "border_on_copy",
            rect: copied,
            point: point(1.0, 5.0),
            expect_contained: true,
        },
        Scenario {
            name: "outside_after_assign",
            rect: assigned,
            point: point(6.0, 5.0),
            expect_contained: false,
        },
        Scenario {
            name: "from_corners",
            rect: Rectangle::from_corners(point(1.0, 3.0), point(5.0, 5.0)),
            point: point(2.0, 3.5),
            expect_contained: true,
        },
        Scenario {
            name: "rotated_90",
            rect: Rectangle::rotated(point(3.0, 4.0), 2.0, 1.0, 90.0),
            point: point(4.0, 6.0),
            expect_contained: true,
        },
    ]
}

pub fn run(scenarios: &[Scenario]) -> Vec<Failure> {
    let mut failures = Vec::new();
    for s in scenarios {
        let got = s.rect.classify(&s.point);
        tracing::debug!(name = s.name, got = got.as_str(), "scenario");
        if got.is_contained() != s.expect_contained {
            failures.push(Failure {
                name: s.name,
                expect_contained: s.expect_contained,
                got,
            });
        }
    }
    failures
}
