// THEORY:
// The `point` module is the geometric half of the crate. It works on sets of integer
// pixel coordinates: how far apart two points are, which member of a set is nearest
// to or farthest from a target, the bounding rectangle of a set, and how to carve a
// set into equal-width strips along one axis.
//
// Key architectural principles:
// 1.  **Snap to members**: `random_point` and `centre_point` compute a location inside
//     the bounding rectangle, then return the nearest actual member of the set. The
//     result is always a point the caller passed in.
// 2.  **Last tie wins**: When several points share the nearest (or farthest)
//     distance, `near_far_point` returns the one that comes last in input order.
// 3.  **Injected randomness**: `random_point` takes the random source as an argument.
//     Tests pass a seeded generator; `random_point_from_entropy` uses the thread RNG.
// 4.  **Bucket indices stay in range**: `split_points` rounds each coordinate to the
//     nearest bucket boundary. A point sitting exactly on the maximum would round to
//     bucket `n`, so indices are clamped to `n - 1`.

pub mod point {
    use crate::core_modules::error::{MathError, MathResult};
    use rand::Rng;
    use std::str::FromStr;
    use tracing::{debug, trace};

    /// An integer 2D coordinate, e.g. a pixel position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    impl Point {
        pub const fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    impl From<(i32, i32)> for Point {
        fn from((x, y): (i32, i32)) -> Self {
            Self { x, y }
        }
    }

    /// Axis-aligned bounds of a point set, in image orientation (top = min y).
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Rect {
        pub left: f64,
        pub top: f64,
        pub right: f64,
        pub bottom: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Axis {
        X,
        Y,
    }

    impl Axis {
        fn coord(self, pt: Point) -> i32 {
            match self {
                Axis::X => pt.x,
                Axis::Y => pt.y,
            }
        }

        fn extent(self, rect: &Rect) -> (f64, f64) {
            match self {
                Axis::X => (rect.left, rect.right),
                Axis::Y => (rect.top, rect.bottom),
            }
        }
    }

    impl FromStr for Axis {
        type Err = MathError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "X" | "x" => Ok(Axis::X),
                "Y" | "y" => Ok(Axis::Y),
                other => Err(MathError::InvalidAxis(other.to_string())),
            }
        }
    }

    pub fn dis(a: f64, b: f64) -> f64 {
        (a - b).abs()
    }

    pub fn dis_int(a: i32, b: i32) -> u32 {
        a.abs_diff(b)
    }

    pub fn dis_byte(a: u8, b: u8) -> u8 {
        a.abs_diff(b)
    }

    /// Euclidean distance built from the per-axis integer distances.
    pub fn dis_pt(pt1: Point, pt2: Point) -> f64 {
        let dx = dis_pt_x(pt1, pt2);
        let dy = dis_pt_y(pt1, pt2);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn dis_pt_x(pt1: Point, pt2: Point) -> f64 {
        f64::from(dis_int(pt1.x, pt2.x))
    }

    pub fn dis_pt_y(pt1: Point, pt2: Point) -> f64 {
        f64::from(dis_int(pt1.y, pt2.y))
    }

    /// Returns `(nearest, farthest)` members of `pts` relative to `to_pt`.
    /// On equal distances the later point in `pts` wins.
    pub fn near_far_point(to_pt: Point, pts: &[Point]) -> MathResult<(Point, Point)> {
        let first = *pts.first().ok_or(MathError::EmptyInput)?;
        let d0 = dis_pt(first, to_pt);
        let (mut nearest, mut d_min) = (first, d0);
        let (mut farthest, mut d_max) = (first, d0);
        for &pt in &pts[1..] {
            let d = dis_pt(pt, to_pt);
            if d <= d_min {
                nearest = pt;
                d_min = d;
            }
            if d >= d_max {
                farthest = pt;
                d_max = d;
            }
        }
        Ok((nearest, farthest))
    }

    pub fn points_rect(pts: &[Point]) -> MathResult<Rect> {
        let first = pts.first().ok_or(MathError::EmptyInput)?;
        let (mut x_min, mut x_max) = (first.x, first.x);
        let (mut y_min, mut y_max) = (first.y, first.y);
        for pt in &pts[1..] {
            x_min = x_min.min(pt.x);
            x_max = x_max.max(pt.x);
            y_min = y_min.min(pt.y);
            y_max = y_max.max(pt.y);
        }
        Ok(Rect {
            left: f64::from(x_min),
            top: f64::from(y_min),
            right: f64::from(x_max),
            bottom: f64::from(y_max),
        })
    }

    /// Picks a member of `pts` by drawing one uniform `r` in `[0, 1)` and walking that
    /// fraction along both axes of the bounding rectangle (padded by half a pixel),
    /// then snapping to the nearest member.
    pub fn random_point<R: Rng + ?Sized>(pts: &[Point], rng: &mut R) -> MathResult<Point> {
        let rect = points_rect(pts)?;
        let r: f64 = rng.random();
        let x = r * (rect.right - rect.left + 0.5) + rect.left;
        let y = r * (rect.bottom - rect.top + 0.5) + rect.top;
        let target = Point::new(x as i32, y as i32);
        let (nearest, _) = near_far_point(target, pts)?;
        trace!(r, ?target, ?nearest, "random point snapped");
        Ok(nearest)
    }

    pub fn random_point_from_entropy(pts: &[Point]) -> MathResult<Point> {
        random_point(pts, &mut rand::rng())
    }

    /// The member of `pts` nearest the centre of their bounding rectangle.
    pub fn centre_point(pts: &[Point]) -> MathResult<Point> {
        let rect = points_rect(pts)?;
        let x = (rect.right + rect.left) / 2.0;
        let y = (rect.bottom + rect.top) / 2.0;
        let target = Point::new(x as i32, y as i32);
        let (nearest, _) = near_far_point(target, pts)?;
        trace!(?target, ?nearest, "centre point snapped");
        Ok(nearest)
    }

    /// Splits `pts` into `n` equal-width buckets along `axis`.
    pub fn split_points(pts: &[Point], axis: Axis, n: usize) -> MathResult<Vec<Vec<Point>>> {
        if n == 0 {
            return Err(MathError::InvalidBucketCount(n));
        }
        let rect = points_rect(pts)?;
        let (lo, hi) = axis.extent(&rect);
        let span = (hi - lo) / n as f64;
        if span == 0.0 {
            debug!(?axis, n, "zero-width point spread, all points in bucket 0");
        }

        let mut areas = vec![Vec::new(); n];
        let mut clamped = 0usize;
        for &pt in pts {
            let mut i = if span == 0.0 {
                0
            } else {
                ((f64::from(axis.coord(pt)) - lo) / span).round() as usize
            };
            if i >= n {
                i = n - 1;
                clamped += 1;
            }
            areas[i].push(pt);
        }
        if clamped > 0 {
            debug!(clamped, n, "bucket index clamped to last bucket");
        }
        Ok(areas)
    }

    /// Same as `split_points` with the axis given as `"X"`/`"x"` or `"Y"`/`"y"`.
    pub fn split_pts_xy(pts: &[Point], xy: &str, n: usize) -> MathResult<Vec<Vec<Point>>> {
        split_points(pts, xy.parse()?, n)
    }
}
