//! Elementwise transforms and single-axis reductions.

use super::{GridIndices, NamedArray};
use crate::error::{DataError, Result};

impl<T> NamedArray<T> {
    /// Apply `f` to every value, keeping the axes unchanged.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> NamedArray<U> {
        NamedArray {
            axes: self.axes.clone(),
            strides: self.strides.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Collapse the axis called `name`, feeding each lane along it to `f`.
    ///
    /// Lanes are presented in axis order. The reduced axis is dropped and the
    /// other axes keep their relative order.
    pub fn reduce_with<U>(
        &self,
        name: &str,
        mut f: impl FnMut(&[&T]) -> U,
    ) -> Result<NamedArray<U>> {
        let position = self.axis_index(name)?;
        let lane_len = self.axes[position].size;
        let lane_stride = self.strides[position];

        let mut kept_axes = self.axes.clone();
        kept_axes.remove(position);
        let mut kept_strides = self.strides.clone();
        kept_strides.remove(position);

        let shape: Vec<usize> = kept_axes.iter().map(|a| a.size).collect();
        let mut lane: Vec<&T> = Vec::with_capacity(lane_len);
        let mut data = Vec::with_capacity(shape.iter().product());
        for idx in GridIndices::new(&shape) {
            let base: usize = idx.iter().zip(&kept_strides).map(|(i, s)| i * s).sum();
            lane.clear();
            lane.extend((0..lane_len).map(|k| &self.data[base + k * lane_stride]));
            data.push(f(lane.as_slice()));
        }
        NamedArray::new(kept_axes, data)
    }
}

impl NamedArray<f64> {
    /// Sum along the axis called `name`, dropping it.
    pub fn reduce_sum(&self, name: &str) -> Result<NamedArray<f64>> {
        self.reduce_with(name, |lane| lane.iter().map(|v| **v).sum())
    }

    /// Arithmetic mean along the axis called `name`, dropping it.
    ///
    /// # Errors
    ///
    /// [`DataError::EmptyAxis`] if the axis has length zero, in addition to the
    /// lookup errors of [`NamedArray::axis_index`].
    pub fn reduce_mean(&self, name: &str) -> Result<NamedArray<f64>> {
        let count = self.size(name)?;
        if count == 0 {
            return Err(DataError::EmptyAxis {
                name: name.to_string(),
            });
        }
        let count = count as f64;
        self.reduce_with(name, |lane| lane.iter().map(|v| **v).sum::<f64>() / count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{Axis, SliceSpec};

    fn time_trial() -> NamedArray {
        NamedArray::new(
            vec![Axis::new("time", 3), Axis::new("trial", 2)],
            vec![100.0, 100.0, 90.0, 95.0, 80.0, 85.0],
        )
        .unwrap()
    }

    #[test]
    fn test_reduce_mean_over_trials() {
        let mean = time_trial().reduce_mean("trial").unwrap();
        assert_eq!(mean.axis_names().collect::<Vec<_>>(), vec!["time"]);
        assert_eq!(mean.to_vec1().unwrap(), vec![100.0, 92.5, 82.5]);
    }

    #[test]
    fn test_reduce_sum_over_time() {
        let sum = time_trial().reduce_sum("time").unwrap();
        assert_eq!(sum.to_vec1().unwrap(), vec![270.0, 280.0]);
    }

    #[test]
    fn test_reduce_matches_select_then_reduce() {
        let array = NamedArray::from_fn(
            vec![Axis::new("x", 3), Axis::new("trial", 4), Axis::new("y", 2)],
            |idx| (idx[0] * 7 + idx[1] * 3 + idx[2]) as f64,
        )
        .unwrap();

        let reduced = array.reduce_mean("trial").unwrap();
        assert_eq!(reduced.axis_names().collect::<Vec<_>>(), vec!["x", "y"]);

        for x in 0..3 {
            for y in 0..2 {
                let lane = array
                    .select(&SliceSpec::new().index("x", x).index("y", y))
                    .unwrap()
                    .to_vec1()
                    .unwrap();
                let expected = lane.iter().sum::<f64>() / lane.len() as f64;
                assert_eq!(reduced.get(&[x, y]), Some(&expected));
            }
        }
    }

    #[test]
    fn test_mean_of_single_trial_is_identity() {
        let array = NamedArray::new(
            vec![Axis::new("time", 4), Axis::new("trial", 1)],
            vec![10.0, 7.5, 3.25, 0.0],
        )
        .unwrap();
        let mean = array.reduce_mean("trial").unwrap();
        assert_eq!(mean.to_vec1().unwrap(), vec![10.0, 7.5, 3.25, 0.0]);
    }

    #[test]
    fn test_mean_over_empty_axis_fails() {
        let array: NamedArray =
            NamedArray::new(vec![Axis::new("time", 2), Axis::new("trial", 0)], vec![]).unwrap();
        assert_eq!(
            array.reduce_mean("trial").unwrap_err(),
            DataError::EmptyAxis {
                name: "trial".to_string()
            }
        );
    }

    #[test]
    fn test_reduce_last_axis_gives_scalar() {
        let array = NamedArray::new(vec![Axis::new("trial", 2)], vec![80.0, 70.0]).unwrap();
        let mean = array.reduce_mean("trial").unwrap();
        assert_eq!(mean.scalar(), Some(&75.0));
    }

    #[test]
    fn test_map_keeps_axes() {
        let infected = time_trial().map(|s| 100.0 - s);
        assert_eq!(infected.axes(), time_trial().axes());
        assert_eq!(infected.data(), &[0.0, 0.0, 10.0, 5.0, 20.0, 15.0]);
    }
}
