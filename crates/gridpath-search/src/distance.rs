use gridpath_core::{Cost, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    let (dx, dy) = a.abs_diff(b);
    dx.saturating_add(dy)
}

/// Octile distance: the cheapest 8-way walk on an open grid where a straight
/// step costs `straight` and a diagonal step costs `diagonal`.
///
/// Equal to `straight·(dx+dy) + (diagonal − 2·straight)·min(dx,dy)`,
/// written so it never goes through a negative intermediate.
#[inline]
pub fn octile(a: Point, b: Point, straight: Cost, diagonal: Cost) -> Cost {
    let (dx, dy) = a.abs_diff(b);
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    straight
        .saturating_mul(hi - lo)
        .saturating_add(diagonal.saturating_mul(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn octile_matches_closed_form() {
        for (dx, dy) in [(0, 0), (3, 0), (0, 4), (2, 2), (5, 3), (1, 7)] {
            let a = Point::new(0, 0);
            let b = Point::new(dx, dy);
            let expected = 10 * (dx + dy) + (14 - 20) * dx.min(dy);
            assert_eq!(octile(a, b, 10, 14), expected as Cost, "dx={dx} dy={dy}");
        }
    }
}
