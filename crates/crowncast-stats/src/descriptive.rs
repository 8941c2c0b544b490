/// Summary statistics for a dataset of `f32` values.
///
/// Covers the measures the retention pipeline needs: central tendency
/// (mean, median) and dispersion (variance, standard deviation). The
/// median is the midpoint of the two central values for even-sized
/// datasets, making it robust against a single abnormal observation.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Smallest value in the dataset.
    pub min: f32,
    /// Largest value in the dataset.
    pub max: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Median (midpoint of the central pair for even-sized datasets).
    pub median: f32,
    /// Population variance.
    pub variance: f32,
    /// Population standard deviation.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes statistics from unsorted values.
    ///
    /// Returns `None` for an empty dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crowncast_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0, 5.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes statistics from values already sorted ascending.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crowncast_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f32;
        let mean = sorted_values.iter().copied().sum::<f32>() / n;

        let mid = sorted_values.len() / 2;
        let median = if sorted_values.len() % 2 == 0 {
            (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
        } else {
            sorted_values[mid]
        };

        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_yields_none() {
        assert_eq!(DescriptiveStats::new([]), None);
    }

    #[test]
    fn single_value_dataset() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn median_resists_outliers() {
        // One abnormally long session should not drag the median.
        let stats = DescriptiveStats::new([10.0, 12.0, 14.0, 300.0]).unwrap();
        assert_eq!(stats.median, 13.0);
        assert!(stats.mean > 80.0);
    }

    #[test]
    fn variance_of_constant_data_is_zero() {
        let stats = DescriptiveStats::new([0.5, 0.5, 0.5]).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
