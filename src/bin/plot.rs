//! Standalone chart demo. Renders one fixed data series to plot.svg and
//! exits; it shares nothing with the dashboard beyond the chart helpers.

use clubhouse::web::charts;

fn main() -> anyhow::Result<()> {
    let x = [1, 2, 3, 4, 5];
    let y = [10, 30, 25, 35, 55];

    let series: Vec<(String, i64)> = x
        .iter()
        .zip(y.iter())
        .map(|(x, y)| (x.to_string(), *y))
        .collect();

    let svg = charts::bar_chart("Graph", &series);
    std::fs::write("plot.svg", svg)?;

    println!("Wrote plot.svg");
    Ok(())
}
