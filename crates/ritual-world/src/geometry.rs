//! Distance and summary statistics over block positions.
//!
//! Statistics return `None` for empty input instead of dividing by zero.
//! The scanner never hits that case because it seeds an empty distance set
//! with a single `0`.

use ritual_types::BlockPos;

/// Euclidean distance between two block positions.
pub fn distance(a: BlockPos, b: BlockPos) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    let dz = f64::from(a.z) - f64::from(b.z);
    dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
}

/// Arithmetic mean of `values`, or `None` when `values` is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    let count = count_as_f64(values.len())?;
    Some(values.iter().sum::<f64>() / count)
}

/// Population standard deviation of `values` around a precomputed `mean`.
///
/// Returns `None` when `values` is empty.
pub fn standard_deviation(mean: f64, values: &[f64]) -> Option<f64> {
    let count = count_as_f64(values.len())?;
    let variance = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum::<f64>()
        / count;
    Some(variance.sqrt())
}

/// Convert a non-zero element count to `f64` without precision loss.
fn count_as_f64(len: usize) -> Option<f64> {
    if len == 0 {
        return None;
    }
    u32::try_from(len).ok().map(f64::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_is_euclidean() {
        let a = BlockPos::new(0, 0, 0);
        let b = BlockPos::new(3, 4, 0);
        assert!((distance(a, b) - 5.0).abs() < EPS);
        assert!((distance(b, a) - 5.0).abs() < EPS);
    }

    #[test]
    fn distance_includes_vertical_axis() {
        let a = BlockPos::new(1, 1, 1);
        let b = BlockPos::new(2, 3, 3);
        assert!((distance(a, b) - 3.0).abs() < EPS);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = BlockPos::new(-7, 64, 12);
        assert!(distance(a, a).abs() < EPS);
    }

    #[test]
    fn mean_of_values() {
        assert!((mean(&[1.0, 2.0, 3.0, 6.0]).unwrap() - 3.0).abs() < EPS);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn standard_deviation_is_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values).unwrap();
        assert!((m - 5.0).abs() < EPS);
        let sd = standard_deviation(m, &values).unwrap();
        assert!((sd - 2.0).abs() < EPS);
    }

    #[test]
    fn standard_deviation_of_constant_values_is_zero() {
        let values = [3.0, 3.0, 3.0];
        let sd = standard_deviation(3.0, &values).unwrap();
        assert!(sd.abs() < EPS);
    }

    #[test]
    fn standard_deviation_of_empty_is_none() {
        assert!(standard_deviation(0.0, &[]).is_none());
    }
}
