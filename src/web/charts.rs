//! Server-side SVG charts for the analytics page. Plain string building,
//! no client-side scripting.

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 52.0;
const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 16.0;

const PALETTE: [&str; 8] = [
    "#2563eb", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#0ea5e9", "#f97316", "#64748b",
];

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn svg_open(title: &str) -> String {
    format!(
        r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{title}">
<text x="{mid}" y="18" text-anchor="middle" font-size="14" font-weight="bold">{title}</text>
"#,
        w = WIDTH,
        h = HEIGHT,
        mid = WIDTH / 2.0,
        title = xml_escape(title),
    )
}

/// Vertical bars, one per labelled count. Values are drawn above each bar
/// and labels below the baseline.
pub fn bar_chart(title: &str, series: &[(String, i64)]) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f64;
    let band = plot_w / series.len() as f64;
    let bar_w = band * 0.7;
    let baseline = MARGIN_TOP + plot_h;

    let mut svg = svg_open(title);
    svg.push_str(&format!(
        r##"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="#94a3b8" stroke-width="1"/>
"##,
        x1 = MARGIN_LEFT,
        x2 = MARGIN_LEFT + plot_w,
        y = baseline,
    ));

    for (i, (label, count)) in series.iter().enumerate() {
        let h = (*count as f64 / max) * plot_h;
        let x = MARGIN_LEFT + i as f64 * band + (band - bar_w) / 2.0;
        let y = baseline - h;
        let center = x + bar_w / 2.0;

        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"/>
<text x="{center:.1}" y="{vy:.1}" text-anchor="middle" font-size="10">{count}</text>
<text x="{center:.1}" y="{ly:.1}" text-anchor="middle" font-size="10">{label}</text>
"#,
            w = bar_w,
            fill = PALETTE[0],
            vy = y - 4.0,
            ly = baseline + 14.0,
            label = xml_escape(label),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// A single polyline through the labelled counts, with a dot at each point.
pub fn line_chart(title: &str, series: &[(String, i64)]) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f64;
    let baseline = MARGIN_TOP + plot_h;
    // A single point sits in the middle rather than dividing by zero.
    let step = if series.len() > 1 {
        plot_w / (series.len() - 1) as f64
    } else {
        0.0
    };

    let point = |i: usize, count: i64| -> (f64, f64) {
        let x = if series.len() > 1 {
            MARGIN_LEFT + i as f64 * step
        } else {
            MARGIN_LEFT + plot_w / 2.0
        };
        let y = baseline - (count as f64 / max) * plot_h;
        (x, y)
    };

    let mut svg = svg_open(title);
    svg.push_str(&format!(
        r##"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="#94a3b8" stroke-width="1"/>
"##,
        x1 = MARGIN_LEFT,
        x2 = MARGIN_LEFT + plot_w,
        y = baseline,
    ));

    if series.len() > 1 {
        let points: Vec<String> = series
            .iter()
            .enumerate()
            .map(|(i, (_, count))| {
                let (x, y) = point(i, *count);
                format!("{x:.1},{y:.1}")
            })
            .collect();
        svg.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>
"#,
            points.join(" "),
            PALETTE[0],
        ));
    }

    for (i, (label, count)) in series.iter().enumerate() {
        let (x, y) = point(i, *count);
        svg.push_str(&format!(
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{fill}"/>
<text x="{x:.1}" y="{vy:.1}" text-anchor="middle" font-size="10">{count}</text>
<text x="{x:.1}" y="{ly:.1}" text-anchor="middle" font-size="10">{label}</text>
"#,
            fill = PALETTE[0],
            vy = y - 8.0,
            ly = baseline + 14.0,
            label = xml_escape(label),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// One slice per labelled count, with a legend down the right-hand side.
pub fn pie_chart(title: &str, series: &[(String, i64)]) -> String {
    let total: i64 = series.iter().map(|(_, c)| *c).sum();
    let cx = 200.0;
    let cy = MARGIN_TOP + (HEIGHT - MARGIN_TOP - 16.0) / 2.0;
    let r = 110.0;

    let mut svg = svg_open(title);

    if series.len() == 1 || total == 0 {
        // A lone slice is the whole circle; an arc from a point to itself
        // renders nothing.
        svg.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>
"#,
            PALETTE[0],
        ));
    } else {
        let mut angle = -90.0_f64;
        for (i, (_, count)) in series.iter().enumerate() {
            let sweep = 360.0 * *count as f64 / total as f64;
            let start = angle.to_radians();
            let end = (angle + sweep).to_radians();
            let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = i32::from(sweep > 180.0);

            svg.push_str(&format!(
                r#"<path d="M {cx:.1} {cy:.1} L {x1:.1} {y1:.1} A {r:.1} {r:.1} 0 {large_arc} 1 {x2:.1} {y2:.1} Z" fill="{fill}"/>
"#,
                fill = PALETTE[i % PALETTE.len()],
            ));
            angle += sweep;
        }
    }

    let legend_x = 380.0;
    for (i, (label, count)) in series.iter().enumerate() {
        let y = 48.0 + i as f64 * 20.0;
        svg.push_str(&format!(
            r#"<rect x="{legend_x}" y="{ry:.1}" width="12" height="12" fill="{fill}"/>
<text x="{tx}" y="{ty:.1}" font-size="11">{label} ({count})</text>
"#,
            ry = y - 10.0,
            fill = PALETTE[i % PALETTE.len()],
            tx = legend_x + 18.0,
            ty = y,
            label = xml_escape(label),
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn bar_chart_draws_one_rect_per_category() {
        let svg = bar_chart("Test", &series(&[("2024-01-01", 2), ("2024-01-02", 5)]));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("2024-01-02"));
    }

    #[test]
    fn line_chart_handles_a_single_point() {
        let svg = line_chart("Test", &series(&[("2024-01", 3)]));
        assert!(!svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn pie_chart_single_slice_is_a_full_circle() {
        let svg = pie_chart("Test", &series(&[("Treasurer", 4)]));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("Treasurer (4)"));
    }

    #[test]
    fn pie_chart_escapes_user_labels() {
        let svg = pie_chart("Test", &series(&[("<script>", 1), ("Member", 3)]));
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }
}
