use itertools::Itertools;
use std::{collections::HashMap, error::Error, path::Path, time::Duration};

use plotters::prelude::*;

/// Plots one line per driver, each point the sorted runtime over solved
/// fixtures, so the reader can compare depth-first against breadth-first
/// at a glance.
pub fn plot_runtimes(
    measurement: HashMap<String, Vec<Duration>>,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let drawing_area = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let max_instances = measurement
        .values()
        .map(|vec| vec.len())
        .max()
        .expect("measurement was empty");

    let max_duration = measurement
        .values()
        .filter_map(|vec| vec.iter().max())
        .max()
        .expect("measurement was empty");

    let max_duration = max_duration.as_millis();
    let mut chart = ChartBuilder::on(&drawing_area)
        .x_label_area_size(30)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0..max_instances, 0..max_duration)?;

    chart
        .configure_mesh()
        .x_desc("Number of solved instances")
        .y_desc("CPU-Time (ms)")
        .draw()?;

    let mut colors = vec![(255, 0, 0), (0, 255, 0), (0, 0, 255)].into_iter().cycle();
    for (name, times) in measurement.iter() {
        let (r, g, b) = colors.next().unwrap();
        let line_color = RGBColor(r, g, b);
        let point_color = RGBColor(r, g, b);

        let y = times.iter().map(|dur| dur.as_millis()).sorted().collect::<Vec<_>>();

        let points = PointSeries::of_element(y.iter().cloned().enumerate(), 5, &point_color, &|c, s, st| {
            Circle::new(c, s, st)
        });
        chart.draw_series(points)?;

        let lines = LineSeries::new(y.into_iter().enumerate(), &line_color);
        chart
            .draw_series(lines)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x - 20, y)], &line_color));
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(5)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::plot_runtimes;
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn plots_two_drivers() {
        let mut map = HashMap::new();
        map.insert(
            "depth".to_string(),
            vec![10, 5, 7, 9, 20, 3].into_iter().map(Duration::from_millis).collect(),
        );
        map.insert(
            "breadth".to_string(),
            vec![1, 30, 24, 7, 5, 20, 3].into_iter().map(Duration::from_millis).collect(),
        );

        let path = std::env::temp_dir().join("satbench_plot_test.svg");
        plot_runtimes(map, &path, (1280, 720)).unwrap();
        let _ = std::fs::remove_file(path);
    }
}
