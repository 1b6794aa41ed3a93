pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean; `NaN` for an empty slice.
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return f64::NAN;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Smallest and largest finite value, ignoring `NaN`.
    pub fn finite_range(samples: &[f64]) -> Option<(f64, f64)> {
        samples
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_sequence_is_nan() {
        assert!(StatsHelper::mean(&[]).is_nan());
    }

    #[test]
    fn mean_handles_single_value() {
        assert_eq!(StatsHelper::mean(&[4.0]), 4.0);
        assert_eq!(StatsHelper::mean(&[10.0, 12.0]), 11.0);
    }

    #[test]
    fn finite_range_skips_nan() {
        assert_eq!(
            StatsHelper::finite_range(&[f64::NAN, 3.0, -1.0]),
            Some((-1.0, 3.0))
        );
        assert_eq!(StatsHelper::finite_range(&[f64::NAN]), None);
    }
}
