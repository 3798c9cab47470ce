//! Pie Chart Component
//!
//! Static sample pie rendered as inline SVG.

use leptos::prelude::*;

/// Sample shares and their fill colors
const SLICES: [(f64, &str); 4] = [
    (35.0, "#2563eb"),
    (25.0, "#16a34a"),
    (22.0, "#f59e0b"),
    (18.0, "#dc2626"),
];

const CENTER: f64 = 50.0;
const RADIUS: f64 = 45.0;

/// SVG path for each share, starting at twelve o'clock, clockwise
fn slice_paths(values: &[f64]) -> Vec<String> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let point = |fraction: f64| {
        let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
        (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
    };

    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let end = start + value / total;
            let (x1, y1) = point(start);
            let (x2, y2) = point(end);
            let large_arc = if end - start > 0.5 { 1 } else { 0 };
            start = end;
            format!(
                "M {c} {c} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z",
                c = CENTER,
                r = RADIUS,
            )
        })
        .collect()
}

#[component]
pub fn PieChart() -> impl IntoView {
    let values: Vec<f64> = SLICES.iter().map(|(v, _)| *v).collect();
    let paths = slice_paths(&values)
        .into_iter()
        .zip(SLICES.iter().map(|(_, color)| *color))
        .map(|(d, fill)| view! { <path d=d fill=fill stroke="white" stroke-width="1"/> })
        .collect_view();

    view! {
        <svg class="pie-chart" viewBox="0 0 100 100" width="100%" height="100%">
            {paths}
        </svg>
    }
}
