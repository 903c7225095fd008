// src/view/chart.rs
//
// Polyline through the selected samples.
//
// Vertex i sits at x = i / (N - 1) * W (0 for a single sample) and
// y = H/2 - sample * H/2, so +1.0 touches the top edge and -1.0 the bottom.

pub const CHART_PLACEHOLDER: &str = "Select a range to visualize the samples.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleChart {
    Placeholder(&'static str),
    Path {
        width: f64,
        height: f64,
        points: Vec<ChartPoint>,
    },
}

impl SampleChart {
    pub fn from_samples(samples: &[f32], width: f64, height: f64) -> Self {
        if samples.is_empty() {
            return SampleChart::Placeholder(CHART_PLACEHOLDER);
        }

        let mid = height / 2.0;
        let span = samples.len().saturating_sub(1).max(1) as f64;
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &s)| ChartPoint {
                x: i as f64 / span * width,
                y: mid - s as f64 * mid,
            })
            .collect();

        SampleChart::Path {
            width,
            height,
            points,
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        match self {
            SampleChart::Placeholder(_) => &[],
            SampleChart::Path { points, .. } => points,
        }
    }

    /// SVG path data: `M` to the first vertex, `L` to each following one.
    ///
    /// Empty for the placeholder.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            out.push_str(&format!("{}{:.2},{:.2}", cmd, p.x, p.y));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_span_viewport() {
        let chart = SampleChart::from_samples(&[0.0, 1.0, -1.0, 0.5, -0.25], 400.0, 100.0);
        let pts = chart.points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0].x, 0.0);
        assert_eq!(pts[4].x, 400.0);
        assert!(pts.windows(2).all(|w| w[0].x <= w[1].x));

        assert_eq!(pts[0].y, 50.0);
        assert_eq!(pts[1].y, 0.0);
        assert_eq!(pts[2].y, 100.0);
        assert_eq!(pts[3].y, 25.0);
    }

    #[test]
    fn test_path_data() {
        let chart = SampleChart::from_samples(&[1.0, 0.0, -0.5], 400.0, 100.0);
        assert_eq!(chart.path_data(), "M0.00,0.00 L200.00,50.00 L400.00,75.00");
    }

    #[test]
    fn test_single_sample_at_origin() {
        let chart = SampleChart::from_samples(&[0.5], 400.0, 100.0);
        assert_eq!(chart.points(), &[ChartPoint { x: 0.0, y: 25.0 }]);
        assert_eq!(chart.path_data(), "M0.00,25.00");
    }

    #[test]
    fn test_empty_is_placeholder() {
        let chart = SampleChart::from_samples(&[], 400.0, 100.0);
        assert_eq!(chart, SampleChart::Placeholder(CHART_PLACEHOLDER));
        assert!(chart.path_data().is_empty());
    }
}
