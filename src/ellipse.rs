//! Pixel-exact ellipse rasterization.
//!
//! Every backend draws ellipses with these spans so the outline and the filled shape look identical everywhere.
//!
//! A pixel `(i, j)` of a `width x height` box belongs to the ellipse when its center lies inside the ellipse passing through the centers of the outermost pixels, widened by half a pixel.
//! With `A = width - 1`, `B = height - 1`, `X = 2i - A` and `Y = 2j - B` that is:
//!
//! ```text
//! X²B² + Y²A² < A²B² + AB(A + B)
//! ```
//!
//! All math is done in integers so no rounding can make the shape asymmetric.

use glam::IVec2;
use smallvec::SmallVec;

/// Calculate the points of a one pixel wide ellipse outline fitting inside a box.
///
/// The points are ordered row by row from top to bottom, left to right within a row.
/// No point is returned twice, except for a `1x1` box which returns the same point twice so it can be used as a line.
///
/// # Arguments
///
/// * `x` - Horizontal position of the top-left corner of the bounding box.
/// * `y` - Vertical position of the top-left corner of the bounding box.
/// * `width` - Width of the bounding box, nothing is returned when it's zero or negative.
/// * `height` - Height of the bounding box, nothing is returned when it's zero or negative.
///
/// # Example
///
/// ```
/// use glam::IVec2;
///
/// // A 3x3 circle is a plus without the center pixel
/// assert_eq!(
///     pixdraw::ellipse::ellipse_outline(0, 0, 3, 3),
///     [IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(2, 1), IVec2::new(1, 2)]
/// );
/// ```
#[inline]
#[must_use]
pub fn ellipse_outline(x: i32, y: i32, width: i32, height: i32) -> Vec<IVec2> {
    if width <= 0 || height <= 0 {
        return Vec::new();
    }

    if width == 1 && height == 1 {
        let point = IVec2::new(x, y);

        return vec![point, point];
    }

    let spans = row_spans(width, height);
    let mut points = Vec::with_capacity(spans.len() * 2);

    for (row, &span) in spans.iter().enumerate() {
        let above = row.checked_sub(1).map(|above| spans[above]);
        let below = spans.get(row + 1).copied();

        let py = y + row as i32;
        for (from, to) in outline_row(span, above, below) {
            points.extend((from..=to).map(|px| IVec2::new(x + px, py)));
        }
    }

    points
}

/// Calculate the horizontal spans of a filled ellipse fitting inside a box.
///
/// Every item is the inclusive left and right point of a single row, ordered from top to bottom.
/// Every row of the box has exactly one span.
///
/// # Arguments
///
/// * `x` - Horizontal position of the top-left corner of the bounding box.
/// * `y` - Vertical position of the top-left corner of the bounding box.
/// * `width` - Width of the bounding box, nothing is returned when it's zero or negative.
/// * `height` - Height of the bounding box, nothing is returned when it's zero or negative.
///
/// # Example
///
/// ```
/// use glam::IVec2;
///
/// assert_eq!(
///     pixdraw::ellipse::ellipse_area(3, 4, 1, 1),
///     [(IVec2::new(3, 4), IVec2::new(3, 4))]
/// );
/// ```
#[inline]
#[must_use]
pub fn ellipse_area(x: i32, y: i32, width: i32, height: i32) -> Vec<(IVec2, IVec2)> {
    if width <= 0 || height <= 0 {
        return Vec::new();
    }

    row_spans(width, height)
        .into_iter()
        .enumerate()
        .map(|(row, (left, right))| {
            let py = y + row as i32;

            (IVec2::new(x + left, py), IVec2::new(x + right, py))
        })
        .collect()
}

/// Inclusive horizontal span of a single row, relative to the left of the box.
///
/// Both the width and the height must be positive and the row must be inside of the box.
/// Gives the same result as the span of that row in [`ellipse_area`], without calculating the other rows.
pub(crate) fn row_span(width: i32, height: i32, row: i32) -> (i32, i32) {
    debug_assert!(width > 0 && height > 0 && (0..height).contains(&row));

    // A single row or column degenerates into a line
    if width == 1 || height == 1 {
        return (0, width - 1);
    }

    let inside = contains(width, height);

    // The middle column is always inside, and in the left half a column is only inside when the one to its right is
    let (mut low, mut high) = (0, (width - 1) / 2);
    while low < high {
        let middle = low + (high - low) / 2;
        if inside(middle, row) {
            high = middle;
        } else {
            low = middle + 1;
        }
    }

    (low, width - 1 - low)
}

/// Parts of a row that belong to the outline, as inclusive spans relative to the left of the box.
///
/// Neighbouring rows outside of the box are `None`, which makes every pixel of the edge rows part of the outline.
/// A span is empty when its start is past its end.
pub(crate) fn outline_row(
    (left, right): (i32, i32),
    above: Option<(i32, i32)>,
    below: Option<(i32, i32)>,
) -> [(i32, i32); 2] {
    const EMPTY: (i32, i32) = (1, 0);

    let (above_left, above_right) = above.unwrap_or(EMPTY);
    let (below_left, below_right) = below.unwrap_or(EMPTY);

    // Interior pixels have all four neighbours inside of the ellipse
    let interior_left = (left + 1).max(above_left).max(below_left);
    let interior_right = (right - 1).min(above_right).min(below_right);

    if interior_left > interior_right {
        [(left, right), EMPTY]
    } else {
        [(left, interior_left - 1), (interior_right + 1, right)]
    }
}

/// Inclusive horizontal span of every row, relative to the left of the box.
///
/// Both the width and the height must be positive.
fn row_spans(width: i32, height: i32) -> SmallVec<[(i32, i32); 64]> {
    debug_assert!(width > 0 && height > 0);

    let rows = height as usize;

    // A single row or column degenerates into a line
    if width == 1 || height == 1 {
        return std::iter::repeat((0, width - 1)).take(rows).collect();
    }

    let inside = contains(width, height);

    let mut spans = SmallVec::from_elem((0, 0), rows);

    // Start at the middle of the top row, which is always inside, and walk outwards
    // Every next row towards the center is at least as wide so the walk never has to go back
    let mut left = (width - 1) / 2;
    for row in 0..=((height - 1) / 2) {
        while left > 0 && inside(left - 1, row) {
            left -= 1;
        }

        let span = (left, width - 1 - left);

        // The bottom half mirrors the top half
        spans[row as usize] = span;
        spans[(height - 1 - row) as usize] = span;
    }

    spans
}

/// Whether the pixel at a column and row of the box is part of the ellipse.
fn contains(width: i32, height: i32) -> impl Fn(i32, i32) -> bool {
    let a = i128::from(width - 1);
    let b = i128::from(height - 1);
    let threshold = a * a * b * b + a * b * (a + b);

    move |column, row| {
        let dx = 2 * i128::from(column) - a;
        let dy = 2 * i128::from(row) - b;

        dx * dx * b * b + dy * dy * a * a < threshold
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;
    use hashbrown::HashSet;

    use super::{ellipse_area, ellipse_outline, row_span, row_spans};

    /// Convert spans to the amount of pixels per row.
    fn row_widths(width: i32, height: i32) -> Vec<i32> {
        row_spans(width, height)
            .into_iter()
            .map(|(left, right)| right - left + 1)
            .collect()
    }

    #[test]
    fn empty_when_zero_or_negative_size() {
        assert!(ellipse_area(5, 5, 0, 5).is_empty());
        assert!(ellipse_area(5, 5, 5, 0).is_empty());
        assert!(ellipse_area(5, 5, -3, 5).is_empty());
        assert!(ellipse_outline(5, 5, 0, 5).is_empty());
        assert!(ellipse_outline(5, 5, 5, 0).is_empty());
        assert!(ellipse_outline(5, 5, 5, -1).is_empty());
    }

    #[test]
    fn single_pixel_is_duplicated_point() {
        let point = IVec2::new(3, 4);

        assert_eq!(ellipse_outline(3, 4, 1, 1), [point, point]);
        assert_eq!(ellipse_area(3, 4, 1, 1), [(point, point)]);
    }

    #[test]
    fn three_by_three_circle() {
        assert_eq!(
            ellipse_area(1, 2, 3, 3),
            [
                (IVec2::new(2, 2), IVec2::new(2, 2)),
                (IVec2::new(1, 3), IVec2::new(3, 3)),
                (IVec2::new(2, 4), IVec2::new(2, 4)),
            ]
        );
        assert_eq!(
            ellipse_outline(1, 2, 3, 3),
            [
                IVec2::new(2, 2),
                IVec2::new(1, 3),
                IVec2::new(3, 3),
                IVec2::new(2, 4),
            ]
        );
    }

    #[test]
    fn one_wide_is_a_line() {
        assert_eq!(
            ellipse_outline(2, 0, 1, 4),
            [
                IVec2::new(2, 0),
                IVec2::new(2, 1),
                IVec2::new(2, 2),
                IVec2::new(2, 3),
            ]
        );
        assert_eq!(
            ellipse_area(0, 7, 5, 1),
            [(IVec2::new(0, 7), IVec2::new(4, 7))]
        );
    }

    #[test]
    fn known_shapes() {
        assert_eq!(row_widths(2, 2), [2, 2]);
        assert_eq!(row_widths(4, 4), [2, 4, 4, 2]);
        assert_eq!(row_widths(5, 5), [3, 5, 5, 5, 3]);
        assert_eq!(row_widths(10, 3), [8, 10, 8]);
    }

    #[test]
    fn middle_row_is_always_full() {
        for width in 1..40 {
            for height in 1..40 {
                let spans = row_spans(width, height);

                assert_eq!(spans[(height as usize - 1) / 2], (0, width - 1));
                assert_eq!(spans[height as usize / 2], (0, width - 1));
            }
        }
    }

    #[test]
    fn outline_of_big_circle_is_closed() {
        let outline = ellipse_outline(0, 0, 21, 21)
            .into_iter()
            .collect::<HashSet<_>>();

        // Every outline pixel must touch another outline pixel, including diagonally
        for point in &outline {
            let neighbours = (-1..=1)
                .flat_map(|dy| (-1..=1).map(move |dx| IVec2::new(dx, dy)))
                .filter(|offset| *offset != IVec2::ZERO)
                .filter(|offset| outline.contains(&(*point + *offset)))
                .count();

            assert!(neighbours >= 2, "outline pixel {point} is dangling");
        }
    }

    #[test]
    fn single_row_matches_all_rows() {
        for width in 1..40 {
            for height in 1..40 {
                let spans = row_spans(width, height);

                for row in 0..height {
                    assert_eq!(row_span(width, height, row), spans[row as usize], "{width}x{height}");
                }
            }
        }

        // Rows of huge ellipses can be calculated without the rest
        assert_eq!(row_span(10, 1 << 30, 0), (3, 6));
        assert_eq!(row_span(i32::MAX, i32::MAX, i32::MAX / 2), (0, i32::MAX - 1));
    }

    #[test]
    fn outline_has_no_duplicates() {
        for width in 1..30 {
            for height in 1..30 {
                if width == 1 && height == 1 {
                    continue;
                }

                let outline = ellipse_outline(0, 0, width, height);
                let unique = outline.iter().collect::<HashSet<_>>();

                assert_eq!(outline.len(), unique.len(), "{width}x{height}");
            }
        }
    }
}
