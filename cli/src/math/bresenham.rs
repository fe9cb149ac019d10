//! Bresenham's line-drawing algorithm.
//!
//! https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm#Algorithm_for_integer_arithmetic

/// Pixel position.
pub type Point = [isize; 2];

/// Returns an iterator of points along a line between `start` and `end`
/// generated using Bresenham's line-drawing algorithm.
///
/// Note that the points may be in reverse order (i.e. from `end` to `start`).
pub fn line(mut start: Point, mut end: Point) -> impl Iterator<Item = Point> {
    let mut delta = sub(end, start);

    let longest_axis = if delta[0].abs() >= delta[1].abs() { 0 } else { 1 };
    // Ensure that delta[longest_axis] is positive.
    let negate = delta[longest_axis] < 0;
    if negate {
        start = neg(start);
        end = neg(end);
        delta = neg(delta);
    }

    let double_delta = [delta[0] * 2, delta[1] * 2];
    let double_longest_axis_len = double_delta[longest_axis];

    let mut current = start;
    let mut error = [
        delta[0].signum() * delta[longest_axis],
        delta[1].signum() * delta[longest_axis],
    ];
    (0..=delta[longest_axis]).map(move |_| {
        let ret = current;
        if ret != end {
            for axis in 0..2 {
                error[axis] += double_delta[axis];
                // Integer division and remainder both round toward zero.
                current[axis] += error[axis] / double_longest_axis_len;
                error[axis] %= double_longest_axis_len;
            }
        }
        if negate {
            neg(ret)
        } else {
            ret
        }
    })
}

fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1]]
}

fn neg(a: Point) -> Point {
    [-a[0], -a[1]]
}
