//! SVG geometry shared by the chart components

use std::f64::consts::PI;

/// Linear map from a value domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Domain always includes zero so bars grow from a common baseline
    pub fn from_values(min: f64, max: f64, range: (f64, f64)) -> Self {
        let lo = min.min(0.0);
        let mut hi = max.max(0.0);
        if hi - lo <= f64::EPSILON {
            hi = lo + 1.0;
        }
        Self {
            domain: (lo, hi),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// `count + 1` evenly spaced domain values, low to high
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let count = count.max(1);
        (0..=count)
            .map(|i| d0 + (d1 - d0) * i as f64 / count as f64)
            .collect()
    }
}

/// x position of point `index` out of `len` evenly spread over `[start, end]`
pub fn spread(index: usize, len: usize, start: f64, end: f64) -> f64 {
    if len <= 1 {
        return (start + end) / 2.0;
    }
    start + (end - start) * index as f64 / (len - 1) as f64
}

/// SVG path through `points`; a `None` point breaks the line into a new subpath
pub fn line_path(points: &[Option<(f64, f64)>]) -> String {
    runs(points)
        .iter()
        .map(|run| run_path(run))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One closed area per unbroken run, down to `baseline`
pub fn area_path(points: &[Option<(f64, f64)>], baseline: f64) -> String {
    runs(points)
        .iter()
        .filter_map(|run| {
            let (first, last) = (run.first()?, run.last()?);
            Some(format!(
                "{} L {:.2} {:.2} L {:.2} {:.2} Z",
                run_path(run),
                last.0,
                baseline,
                first.0,
                baseline
            ))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn runs(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    points
        .split(Option::is_none)
        .filter(|run| !run.is_empty())
        .map(|run| run.iter().flatten().copied().collect())
        .collect()
}

fn run_path(run: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in run.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        path.push_str(&format!("{} {:.2} {:.2}", cmd, x, y));
    }
    path
}

/// Ring segment between `start` and `end` (fractions of a full turn, 0 at 12 o'clock)
pub fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // a full-circle arc has identical endpoints and renders as nothing
    let end = if end - start >= 1.0 { start + 0.9999 } else { end };
    let large = if end - start > 0.5 { 1 } else { 0 };

    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    format!(
        "M {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {} {} 0 {} 0 {:.2} {:.2} Z",
        ox0, oy0, outer, outer, large, ox1, oy1, ix1, iy1, inner, inner, large, ix0, iy0
    )
}

fn polar(cx: f64, cy: f64, r: f64, turn: f64) -> (f64, f64) {
    let angle = turn * 2.0 * PI - PI / 2.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Cumulative `(start, end)` fractions per value; non-positive values get empty slices
pub fn slices(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let share = if total > 0.0 && *v > 0.0 { v / total } else { 0.0 };
            let slice = (acc, acc + share);
            acc += share;
            slice
        })
        .collect()
}

/// Every `step`-th label index so at most `max` labels are drawn
pub fn label_step(len: usize, max: usize) -> usize {
    if max == 0 {
        return len.max(1);
    }
    len.div_ceil(max).max(1)
}
