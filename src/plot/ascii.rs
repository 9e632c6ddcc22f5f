//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - data points: `o`
//! - connecting line / perfect-fit diagonal: `-`

/// Observed vs predicted scatter with the `predicted == observed` diagonal.
pub fn render_scatter(observed: &[f64], predicted: &[f64], width: usize, height: usize, title: &str) -> String {
    let points: Vec<(f64, f64)> = observed
        .iter()
        .zip(predicted)
        .map(|(&o, &p)| (o, p))
        .filter(|(o, p)| o.is_finite() && p.is_finite())
        .collect();

    // Shared range on both axes so the diagonal is the identity line.
    let (lo, hi) = value_range(points.iter().flat_map(|&(o, p)| [o, p])).unwrap_or((0.0, 1.0));
    let (lo, hi) = pad_range(lo, hi, 0.05);

    let diagonal = [(lo, lo), (hi, hi)];
    render_plot(&points, Some(&diagonal), (lo, hi), (lo, hi), width, height, title)
}

/// A per-degree series (markers joined by a line).
///
/// `y_limits` pins the vertical range; values outside it are drawn on the edge.
pub fn render_series(
    xs: &[f64],
    ys: &[f64],
    y_limits: Option<(f64, f64)>,
    width: usize,
    height: usize,
    title: &str,
) -> String {
    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let (x_min, x_max) = value_range(points.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let y_range = match y_limits {
        Some(limits) => limits,
        None => {
            let (y_min, y_max) = value_range(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
            pad_range(y_min, y_max, 0.05)
        }
    };

    render_plot(&points, Some(&points), (x_min, x_max), y_range, width, height, title)
}

fn render_plot(
    points: &[(f64, f64)],
    line: Option<&[(f64, f64)]>,
    x_range: (f64, f64),
    y_range: (f64, f64),
    width: usize,
    height: usize,
    title: &str,
) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let (x_min, x_max) = x_range;
    let (y_min, y_max) = y_range;

    let mut grid = vec![vec![' '; width]; height];

    // Draw the line first (so points can overlay).
    if let Some(line) = line {
        draw_polyline(&mut grid, line, x_range, y_range);
    }

    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{title}: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Finite `(min, max)` with `max > min`; a single value is widened by ±0.5.
fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    if max > min {
        Some((min, max))
    } else {
        Some((min - 0.5, max + 0.5))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], line: &[(f64, f64)], x_range: (f64, f64), y_range: (f64, f64)) {
    if line.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in line {
        let col = map_x(x, x_range.0, x_range.1, width);
        let row = map_y(y, y_range.0, y_range.1, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
