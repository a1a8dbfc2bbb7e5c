//! Streaming mean accumulators, generic over the float type (`f64` by default).

use nalgebra::RealField;

/// Running mean of values the caller guarantees to be finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanAggregator<T = f64> {
    sum: T,
    count: usize,
}

impl<T: RealField + Copy> Default for MeanAggregator<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            count: 0,
        }
    }
}

impl<T: RealField + Copy> MeanAggregator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, value: T) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of all added values; 0 if nothing was added.
    #[inline]
    pub fn mean(&self) -> T {
        if self.count > 0 {
            self.sum / nalgebra::convert::<f64, T>(self.count as f64)
        } else {
            T::zero()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Like `MeanAggregator`, but `add` silently drops non-finite values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobustMeanAggregator<T = f64> {
    inner: MeanAggregator<T>,
}

impl<T: RealField + Copy> Default for RobustMeanAggregator<T> {
    fn default() -> Self {
        Self {
            inner: MeanAggregator::default(),
        }
    }
}

impl<T: RealField + Copy> RobustMeanAggregator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, value: T) {
        if value.is_finite() {
            self.inner.add(value);
        }
    }

    /// Skips the finiteness check.
    #[inline]
    pub fn add_finite(&mut self, value: T) {
        self.inner.add(value);
    }

    #[inline]
    pub fn mean(&self) -> T {
        self.inner.mean()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mean_is_zero() {
        let agg = MeanAggregator::<f64>::new();
        assert_eq!(agg.mean(), 0.0);
        assert!(agg.is_empty());
        assert_eq!(RobustMeanAggregator::<f64>::new().mean(), 0.0);
        assert_eq!(MeanAggregator::<f32>::new().mean(), 0.0);
    }

    #[test]
    fn clear_then_readd_reproduces_mean() {
        let values = [1.5f64, -2.0, 4.25, 10.0];
        let mut agg = MeanAggregator::new();
        values.iter().for_each(|v| agg.add(*v));
        let first = agg.mean();
        assert_eq!(agg.count(), 4);
        agg.clear();
        assert_eq!(agg.mean(), 0.0);
        values.iter().for_each(|v| agg.add(*v));
        assert_eq!(agg.mean(), first);
        assert!((first - 3.4375).abs() < 1e-12);
    }

    #[test]
    fn single_precision_mean() {
        let mut agg = MeanAggregator::<f32>::new();
        for v in [0.5f32, 1.5, 2.5, 3.5] {
            agg.add(v);
        }
        assert_eq!(agg.mean(), 2.0f32);

        let mut robust = RobustMeanAggregator::<f32>::new();
        for v in [1.0f32, f32::NAN, 2.0, f32::INFINITY] {
            robust.add(v);
        }
        assert_eq!(robust.count(), 2);
        assert_eq!(robust.mean(), 1.5f32);
    }

    #[test]
    fn robust_skips_non_finite() {
        let mut agg = RobustMeanAggregator::new();
        for v in [1.0f64, f64::NAN, 3.0, f64::INFINITY, f64::NEG_INFINITY] {
            agg.add(v);
        }
        assert_eq!(agg.count(), 2);
        assert_eq!(agg.mean(), 2.0);
        agg.add_finite(5.0);
        assert_eq!(agg.mean(), 3.0);
        agg.clear();
        assert!(agg.is_empty());
    }
}
