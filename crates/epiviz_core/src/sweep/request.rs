//! Translating a choice of free sweep dimensions into a slice of the sweep array.

use rustc_hash::FxHashMap;

use super::SweepDim;
use crate::array::{AxisSelector, NamedArray, SliceSpec};
use crate::error::{DataError, Result};
use crate::model::{TIME_AXIS, TRIAL_AXIS};

/// Which sweep dimensions are plotted and where the others are pinned.
///
/// Fixed indices are 1-based, matching how sweep positions are presented to
/// users. Dimensions without an explicit fixed index are pinned to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRequest {
    free: Vec<SweepDim>,
    fixed: FxHashMap<SweepDim, usize>,
}

impl SweepRequest {
    /// Build a request from one or two free dimensions and 1-based fixed
    /// indices for (some of) the others.
    ///
    /// A fixed index supplied for a free dimension is ignored.
    ///
    /// # Errors
    ///
    /// [`DataError::FreeDimensionCount`] unless exactly one or two free
    /// dimensions are given, [`DataError::DuplicateDimension`] if both free
    /// dimensions are the same.
    pub fn new(
        free: &[SweepDim],
        fixed: impl IntoIterator<Item = (SweepDim, usize)>,
    ) -> Result<Self> {
        if free.is_empty() || free.len() > 2 {
            return Err(DataError::FreeDimensionCount { count: free.len() });
        }
        if let [first, second] = free
            && first == second
        {
            return Err(DataError::DuplicateDimension {
                name: first.axis_name().to_string(),
            });
        }

        Ok(Self {
            free: free.to_vec(),
            fixed: fixed.into_iter().collect(),
        })
    }

    /// Like [`SweepRequest::new`] but with dimensions given by axis name.
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownDimension`] for a name outside the sweep
    /// enumeration, plus the errors of [`SweepRequest::new`].
    pub fn from_names(free: &[&str], fixed: &[(&str, usize)]) -> Result<Self> {
        let free = free
            .iter()
            .map(|name| name.parse::<SweepDim>())
            .collect::<Result<Vec<_>>>()?;
        let fixed = fixed
            .iter()
            .map(|(name, index)| name.parse::<SweepDim>().map(|dim| (dim, *index)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&free, fixed)
    }

    /// Free dimensions in request order.
    #[must_use]
    pub fn free_dims(&self) -> &[SweepDim] {
        &self.free
    }

    #[must_use]
    pub fn is_free(&self, dim: SweepDim) -> bool {
        self.free.contains(&dim)
    }

    /// Check if this request produces a 2D surface
    #[must_use]
    pub fn is_surface(&self) -> bool {
        self.free.len() == 2
    }

    /// 1-based position `dim` is pinned to when it is not free.
    #[must_use]
    pub fn fixed_index(&self, dim: SweepDim) -> usize {
        self.fixed.get(&dim).copied().unwrap_or(1)
    }

    /// Build the slice over a sweep array.
    ///
    /// `time` is pinned to the last recorded step, `trial` and the free
    /// dimensions are kept whole and every other sweep axis is pinned to its
    /// fixed index (converted to 0-based).
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownAxis`] if the array lacks one of the expected axes,
    /// [`DataError::IndexOutOfRange`] if a fixed index is 0 or past the end of
    /// its axis (the error carries the 1-based index as requested), or if the
    /// time axis is empty.
    pub fn slice_spec<T>(&self, array: &NamedArray<T>) -> Result<SliceSpec> {
        let mut spec = SliceSpec::new();

        let steps = array.size(TIME_AXIS)?;
        let last = steps.checked_sub(1).ok_or(DataError::IndexOutOfRange {
            axis: TIME_AXIS.to_string(),
            index: 0,
            size: 0,
        })?;
        spec.set(TIME_AXIS, AxisSelector::Index(last));

        array.size(TRIAL_AXIS)?;
        spec.set(TRIAL_AXIS, AxisSelector::All);

        for dim in SweepDim::ALL {
            let size = array.size(dim.axis_name())?;
            let selector = if self.is_free(dim) {
                AxisSelector::All
            } else {
                let index = self.fixed_index(dim);
                if index == 0 || index > size {
                    return Err(DataError::IndexOutOfRange {
                        axis: dim.axis_name().to_string(),
                        index,
                        size,
                    });
                }
                AxisSelector::Index(index - 1)
            };
            spec.set(dim.axis_name(), selector);
        }

        Ok(spec)
    }
}
