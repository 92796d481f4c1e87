// Sample transform - culling and axis bound computation for one graph panel

use crate::domain::sample::{AxisBounds, ChartSeries, GraphData, Sample};
use crate::domain::timeframe::TimeFrame;

/// Prepare one day of samples for display: down-sample them to the
/// timeframe's stride and compute rounded value-axis bounds.
///
/// The min/max scan covers every sample, not just the culled subset,
/// so culling never distorts the displayed value range. Returns `None`
/// for an empty input.
pub fn transform(samples: &[Sample], timeframe: TimeFrame) -> Option<GraphData> {
    let first = samples.first()?;
    let mut min_value = first.value;
    let mut max_value = first.value;
    let mut timestamps = Vec::new();
    let mut values = Vec::new();

    for (index, sample) in samples.iter().enumerate() {
        if sample.value < min_value {
            min_value = sample.value;
        }
        if sample.value > max_value {
            max_value = sample.value;
        }
        if timeframe.keeps(index) {
            timestamps.push(sample.timestamp.clone());
            values.push(sample.value);
        }
    }

    Some(GraphData::new(
        ChartSeries::new(timestamps, values),
        compute_bounds(min_value, max_value),
    ))
}

/// Axis bounds for the observed value range: the rounded floor of the
/// minimum, the rounded ceiling of the maximum, and their midpoint.
pub fn compute_bounds(min: f64, max: f64) -> AxisBounds {
    let lower = floor_bound(min);
    let upper = ceil_bound(max);
    AxisBounds::new(min, max, [lower, (upper + lower) / 2.0, upper])
}

/// Round up to the nearest multiple of the value's leading decimal
/// place: 1234 -> 2000, 42 -> 50, 0.4 -> 1.
///
/// The digit count is taken on the magnitude; a negative value is
/// rounded toward zero by mirroring the floor of its magnitude, which
/// keeps `ceil_bound(v) >= v` for every finite input.
pub fn ceil_bound(raw: f64) -> f64 {
    let value = raw.ceil();
    if value < 0.0 {
        -floor_to_place(-value)
    } else {
        ceil_to_place(value)
    }
}

/// Round down to the nearest multiple of the value's leading decimal
/// place: 567 -> 500, 42 -> 40. Symmetric counterpart of [`ceil_bound`];
/// satisfies `floor_bound(v) <= v` for every finite input.
pub fn floor_bound(raw: f64) -> f64 {
    let value = raw.floor();
    if value < 0.0 {
        -ceil_to_place(-value)
    } else {
        floor_to_place(value)
    }
}

fn ceil_to_place(value: f64) -> f64 {
    let place = leading_place(value);
    (value / place).ceil() * place
}

fn floor_to_place(value: f64) -> f64 {
    let place = leading_place(value);
    (value / place).floor() * place
}

/// 10^(digits - 1) for a non-negative integral value; 0 counts as one
/// digit so it rounds against place 1.
fn leading_place(value: f64) -> f64 {
    let digits = match value as i64 {
        0 => 1,
        n => n.ilog10() + 1,
    };
    10f64.powi(digits as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts: &str, value: f64) -> Sample {
        Sample::new(ts.to_string(), value)
    }

    #[test]
    fn test_ceil_bound_rounds_to_leading_place() {
        assert_eq!(ceil_bound(1234.0), 2000.0);
        assert_eq!(ceil_bound(42.0), 50.0);
        assert_eq!(ceil_bound(567.0), 600.0);
        assert_eq!(ceil_bound(9.0), 9.0);
        assert_eq!(ceil_bound(0.4), 1.0);
        assert_eq!(ceil_bound(0.0), 0.0);
    }

    #[test]
    fn test_floor_bound_rounds_to_leading_place() {
        assert_eq!(floor_bound(567.0), 500.0);
        assert_eq!(floor_bound(42.0), 40.0);
        assert_eq!(floor_bound(1234.0), 1000.0);
        assert_eq!(floor_bound(0.4), 0.0);
        assert_eq!(floor_bound(0.0), 0.0);
    }

    #[test]
    fn test_negative_values_mirror_the_magnitude() {
        // Bounds must still bracket the value when it is below zero.
        assert_eq!(ceil_bound(-567.0), -500.0);
        assert_eq!(floor_bound(-567.0), -600.0);
        assert_eq!(ceil_bound(-0.4), 0.0);
        assert_eq!(floor_bound(-0.4), -1.0);
    }

    #[test]
    fn test_bounds_bracket_every_input() {
        let inputs = [0.0, 0.01, 0.9, 1.0, 4.2, 42.0, 567.0, 1234.0, 99999.0, -1.0, -42.0, -987.6];
        for v in inputs {
            assert!(ceil_bound(v) >= v, "ceil_bound({v}) < {v}");
            assert!(floor_bound(v) <= v, "floor_bound({v}) > {v}");
        }
    }

    #[test]
    fn test_two_hourly_samples() {
        let samples = vec![
            sample("2024-01-01T00:00:00.000Z", 567.0),
            sample("2024-01-01T01:00:00.000Z", 1234.0),
        ];
        let graph = transform(&samples, TimeFrame::Day).unwrap();

        assert_eq!(graph.bounds.min, 567.0);
        assert_eq!(graph.bounds.max, 1234.0);
        assert_eq!(graph.bounds.ticks, [500.0, 1250.0, 2000.0]);
        assert_eq!(graph.series.values, vec![567.0, 1234.0]);
    }

    #[test]
    fn test_single_sample() {
        let samples = vec![sample("2024-01-01T00:00:00.000Z", 42.0)];
        let graph = transform(&samples, TimeFrame::Month).unwrap();

        assert_eq!(graph.bounds.ticks, [40.0, 45.0, 50.0]);
        assert_eq!(graph.series.timestamps.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(transform(&[], TimeFrame::Day).is_none());
    }

    #[test]
    fn test_culling_keeps_extrema_in_bounds() {
        // The minimum lands on an index the week stride drops; the
        // bounds must still see it.
        let mut samples: Vec<Sample> = (0..24)
            .map(|h| sample(&format!("2024-01-01T{h:02}:00:00.000Z"), 100.0))
            .collect();
        samples[7].value = 3.0;
        samples[13].value = 250.0;

        let graph = transform(&samples, TimeFrame::Week).unwrap();

        assert_eq!(graph.bounds.min, 3.0);
        assert_eq!(graph.bounds.max, 250.0);
        assert_eq!(graph.series.values.len(), 4); // indices 0, 6, 12, 18
        assert!(graph.series.values.iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_series_stays_index_aligned() {
        let samples: Vec<Sample> = (0..48)
            .map(|i| sample(&format!("2024-01-01T{:02}:{:02}:00.000Z", i / 2, (i % 2) * 30), i as f64))
            .collect();
        let graph = transform(&samples, TimeFrame::Month).unwrap();

        assert_eq!(graph.series.timestamps.len(), graph.series.values.len());
        for (k, value) in graph.series.values.iter().enumerate() {
            let original = &samples[k * TimeFrame::Month.stride()];
            assert_eq!(*value, original.value);
            assert_eq!(graph.series.timestamps[k], original.timestamp);
        }
    }

    #[test]
    fn test_ticks_are_monotonic() {
        let cases = [(567.0, 1234.0), (42.0, 42.0), (-987.6, -1.0), (0.0, 0.0), (-5.0, 5.0)];
        for (min, max) in cases {
            let bounds = compute_bounds(min, max);
            assert!(bounds.ticks[0] <= bounds.ticks[1]);
            assert!(bounds.ticks[1] <= bounds.ticks[2]);
            assert!(bounds.ticks[0] <= min && max <= bounds.ticks[2]);
        }
    }

    #[test]
    fn test_transform_is_idempotent() {
        let samples: Vec<Sample> = (0..30)
            .map(|i| sample(&format!("2024-01-01T00:{i:02}:00.000Z"), (i * 17 % 90) as f64))
            .collect();
        let first = transform(&samples, TimeFrame::Week);
        let second = transform(&samples, TimeFrame::Week);
        assert_eq!(first, second);
    }
}
