//! Annular wedge and circular sector path geometry.
//!
//! Angles are in degrees, `0` points up (12 o'clock) and angles grow
//! clockwise. Angles are never wrapped here: a segment may start at `370`
//! and still land on the same points as one starting at `10`.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{normalize_degrees, round_coordinate};
use crate::core::types::Point;
use crate::error::{ChartError, ChartResult};

pub const FULL_CIRCLE_DEG: f64 = 360.0;
pub const HALF_CIRCLE_DEG: f64 = 180.0;
pub const DEFAULT_COORDINATE_DECIMALS: u32 = 3;

/// Sweeps this close to a full turn are drawn as a closed ring.
const FULL_CIRCLE_EPSILON_DEG: f64 = 1e-9;

/// One vector path command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point to `to`.
    ArcTo {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },
    Close,
}

/// Closed path for one sector or annular wedge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcPath {
    center: Point,
    commands: SmallVec<[PathCommand; 8]>,
}

impl ArcPath {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` when the path encloses no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self
            .commands
            .iter()
            .any(|command| matches!(command, PathCommand::ArcTo { .. }))
    }

    /// Returns the large-arc flag of the outer boundary, if the path has one.
    #[must_use]
    pub fn outer_large_arc(&self) -> Option<bool> {
        self.commands.iter().find_map(|command| match command {
            PathCommand::ArcTo { large_arc, .. } => Some(*large_arc),
            _ => None,
        })
    }

    /// Serializes the path as SVG path data (`d` attribute syntax).
    ///
    /// A large arc whose endpoints coincide at this precision is written as
    /// two half arcs through the opposite side of the circle, since an SVG
    /// arc between identical points draws nothing.
    #[must_use]
    pub fn to_svg_path_data(&self, decimals: u32) -> String {
        let coord = |value: f64| round_coordinate(value, decimals);
        let same_at_precision =
            |a: Point, b: Point| coord(a.x) == coord(b.x) && coord(a.y) == coord(b.y);
        let arc = |radius: f64, large_arc: bool, clockwise: bool, to: Point| {
            format!(
                "A {r} {r} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(clockwise),
                coord(to.x),
                coord(to.y),
                r = coord(radius),
            )
        };

        let mut parts: Vec<String> = Vec::with_capacity(self.commands.len() + 2);
        let mut current = self.center;
        for command in &self.commands {
            let part = match *command {
                PathCommand::MoveTo(p) => {
                    current = p;
                    format!("M {} {}", coord(p.x), coord(p.y))
                }
                PathCommand::LineTo(p) => {
                    current = p;
                    format!("L {} {}", coord(p.x), coord(p.y))
                }
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    clockwise,
                    to,
                } => {
                    let from = current;
                    current = to;
                    if large_arc && same_at_precision(from, to) {
                        let opposite = Point::new(
                            2.0 * self.center.x - from.x,
                            2.0 * self.center.y - from.y,
                        );
                        format!(
                            "{} {}",
                            arc(radius, false, clockwise, opposite),
                            arc(radius, false, clockwise, to)
                        )
                    } else {
                        arc(radius, large_arc, clockwise, to)
                    }
                }
                PathCommand::Close => "Z".to_owned(),
            };
            parts.push(part);
        }
        parts.join(" ")
    }

    fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_path_data(DEFAULT_COORDINATE_DECIMALS))
    }
}

/// Maps a clockwise-from-top angle to a point on a circle.
#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg - 90.0) * PI / 180.0;
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Inverse of [`polar_to_cartesian`]: the clockwise-from-top angle of `point`
/// around `center`, in `[0, 360)`.
#[must_use]
pub fn angle_at(center: Point, point: Point) -> f64 {
    let degrees = (point.y - center.y).atan2(point.x - center.x).to_degrees();
    normalize_degrees(degrees + 90.0)
}

/// Large-arc flag for a sweep from `start_angle_deg` to `end_angle_deg`.
#[must_use]
pub fn is_large_arc(start_angle_deg: f64, end_angle_deg: f64) -> bool {
    end_angle_deg - start_angle_deg > HALF_CIRCLE_DEG
}

/// Builds the closed path for a sector (`inner_radius == 0`) or an annular
/// wedge (`inner_radius > 0`).
///
/// A non-positive sweep yields a zero-area path rather than an error, so
/// zero-value segments are always drawable.
pub fn arc_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> ChartResult<ArcPath> {
    validate_arc_input(
        center,
        outer_radius,
        inner_radius,
        start_angle_deg,
        end_angle_deg,
    )?;

    let mut path = ArcPath {
        center,
        commands: SmallVec::new(),
    };
    let outer_start = polar_to_cartesian(center, outer_radius, start_angle_deg);

    let sweep = end_angle_deg - start_angle_deg;
    if sweep <= 0.0 {
        path.push(PathCommand::MoveTo(outer_start));
        path.push(PathCommand::Close);
        return Ok(path);
    }

    let sweep = sweep.min(FULL_CIRCLE_DEG);
    let end_angle_deg = start_angle_deg + sweep;
    let full_circle = sweep >= FULL_CIRCLE_DEG - FULL_CIRCLE_EPSILON_DEG;

    if inner_radius == 0.0 {
        path.push(PathCommand::MoveTo(center));
        path.push(PathCommand::LineTo(outer_start));
        push_arc(
            &mut path,
            center,
            outer_radius,
            start_angle_deg,
            end_angle_deg,
            true,
            full_circle,
        );
        path.push(PathCommand::Close);
        return Ok(path);
    }

    path.push(PathCommand::MoveTo(outer_start));
    push_arc(
        &mut path,
        center,
        outer_radius,
        start_angle_deg,
        end_angle_deg,
        true,
        full_circle,
    );
    path.push(PathCommand::LineTo(polar_to_cartesian(
        center,
        inner_radius,
        end_angle_deg,
    )));
    push_arc(
        &mut path,
        center,
        inner_radius,
        end_angle_deg,
        start_angle_deg,
        false,
        full_circle,
    );
    path.push(PathCommand::Close);
    Ok(path)
}

/// Appends an arc from `from_deg` to `to_deg`. A full turn is split into
/// two half arcs because an SVG arc between coincident points draws nothing.
fn push_arc(
    path: &mut ArcPath,
    center: Point,
    radius: f64,
    from_deg: f64,
    to_deg: f64,
    clockwise: bool,
    full_circle: bool,
) {
    if full_circle {
        let middle_deg = (from_deg + to_deg) / 2.0;
        for target_deg in [middle_deg, to_deg] {
            path.push(PathCommand::ArcTo {
                radius,
                large_arc: false,
                clockwise,
                to: polar_to_cartesian(center, radius, target_deg),
            });
        }
        return;
    }

    let (low_deg, high_deg) = if clockwise {
        (from_deg, to_deg)
    } else {
        (to_deg, from_deg)
    };
    path.push(PathCommand::ArcTo {
        radius,
        large_arc: is_large_arc(low_deg, high_deg),
        clockwise,
        to: polar_to_cartesian(center, radius, to_deg),
    });
}

fn validate_arc_input(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> ChartResult<()> {
    if !center.is_finite() {
        return Err(ChartError::InvalidInput(
            "arc center must be finite".to_owned(),
        ));
    }
    if !start_angle_deg.is_finite() || !end_angle_deg.is_finite() {
        return Err(ChartError::InvalidInput(
            "arc angles must be finite".to_owned(),
        ));
    }
    if !outer_radius.is_finite() || outer_radius < 0.0 {
        return Err(ChartError::InvalidInput(
            "outer radius must be finite and >= 0".to_owned(),
        ));
    }
    if !inner_radius.is_finite() || inner_radius < 0.0 || inner_radius > outer_radius {
        return Err(ChartError::InvalidInput(format!(
            "inner radius must be finite and in [0, {outer_radius}]"
        )));
    }
    Ok(())
}

/// Fixed circle parameters shared by every segment of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl ArcGeometry {
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64) -> ChartResult<Self> {
        validate_arc_input(center, outer_radius, inner_radius, 0.0, 0.0)?;
        Ok(Self {
            center,
            outer_radius,
            inner_radius,
        })
    }

    pub fn path(self, start_angle_deg: f64, end_angle_deg: f64) -> ChartResult<ArcPath> {
        arc_path(
            self.center,
            self.outer_radius,
            self.inner_radius,
            start_angle_deg,
            end_angle_deg,
        )
    }

    /// Returns `true` when `point` lies inside the wedge spanning
    /// `[start_angle_deg, end_angle_deg)`.
    #[must_use]
    pub fn contains(self, point: Point, start_angle_deg: f64, end_angle_deg: f64) -> bool {
        let sweep = end_angle_deg - start_angle_deg;
        if !point.is_finite() || sweep <= 0.0 {
            return false;
        }

        let distance = self.center.distance_to(point);
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }

        if sweep >= FULL_CIRCLE_DEG {
            return true;
        }
        let relative = normalize_degrees(angle_at(self.center, point) - start_angle_deg);
        relative < sweep
    }
}
