use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod selftest;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Point-in-rectangle queries and reference checks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a point against a rectangle and print the verdict as JSON
    Contains {
        /// Query point as `x,y`
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        point: (f64, f64),
        #[command(flatten)]
        rect: RectArgs,
    },
    /// Run the reference scenarios
    Selftest,
    /// Print name and version as JSON
    Report,
}

/// Either `--corners`, or `--center` with `--half` and an optional `--rotation`.
#[derive(Args)]
struct RectArgs {
    /// Opposite corners as `x0,y0,x1,y1`
    #[arg(
        long,
        value_parser = parse_corners,
        allow_hyphen_values = true,
        conflicts_with_all = ["center", "half", "rotation"]
    )]
    corners: Option<(f64, f64, f64, f64)>,
    /// Center as `x,y`
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    center: Option<(f64, f64)>,
    /// Half extents (major, minor) as `a,b`
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    half: Option<(f64, f64)>,
    /// Counter-clockwise rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,
}

impl RectArgs {
    fn build(&self) -> Result<Rectangle> {
        match (self.corners, self.center, self.half) {
            (Some((x0, y0, x1, y1)), None, None) => {
                Ok(Rectangle::from_corners(point(x0, y0), point(x1, y1)))
            }
            (None, Some((cx, cy)), Some((a, b))) => Ok(match self.rotation {
                Some(deg) => Rectangle::rotated(point(cx, cy), a, b, deg),
                None => Rectangle::new(point(cx, cy), a, b),
            }),
            _ => bail!("rectangle needs --corners, or both --center and --half"),
        }
    }
}

fn parse_floats(s: &str, n: usize) -> Result<Vec<f64>, String> {
    let vals = s
        .split(',')
        .map(|t| {
            let t = t.trim();
            t.parse::<f64>()
                .map_err(|e| format!("`{t}` is not a number: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if vals.len() != n {
        return Err(format!("expected {n} comma-separated numbers, got {}", vals.len()));
    }
    if let Some(bad) = vals.iter().find(|v| !v.is_finite()) {
        return Err(format!("`{bad}` is not finite"));
    }
    Ok(vals)
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let v = parse_floats(s, 2)?;
    Ok((v[0], v[1]))
}

fn parse_corners(s: &str) -> Result<(f64, f64, f64, f64), String> {
    let v = parse_floats(s, 4)?;
    Ok((v[0], v[1], v[2], v[3]))
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Contains { point, rect } => contains(point, &rect),
        Action::Selftest => run_selftest(),
        Action::Report => report(),
    }
}

fn contains((px, py): (f64, f64), args: &RectArgs) -> Result<()> {
    let rect = args.build()?;
    let p = point(px, py);
    let verdict = rect.classify(&p);
    tracing::info!(x = px, y = py, classification = verdict.as_str(), "contains");

    let c = rect.center();
    let (hm, hn) = rect.half_extents();
    let (axis_major, axis_minor) = rect.axes();
    let obj = serde_json::json!({
        "point": [p.x, p.y],
        "center": [c.x, c.y],
        "half_extents": [hm, hn],
        "axis_major": [axis_major.x, axis_major.y],
        "axis_minor": [axis_minor.x, axis_minor.y],
        "classification": verdict.as_str(),
        "contained": verdict.is_contained()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn run_selftest() -> Result<()> {
    let all = selftest::scenarios();
    let failures = selftest::run(&all);
    for f in &failures {
        tracing::error!(
            name = f.name,
            expect_contained = f.expect_contained,
            got = f.got.as_str(),
            "scenario failed"
        );
    }
    if !failures.is_empty() {
        bail!("{} of {} scenarios failed", failures.len(), all.len());
    }
    tracing::info!(count = all.len(), "selftest");
    println!("Congratulations, tests passed.");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "name": "planar",
        "version": planar::VERSION
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
