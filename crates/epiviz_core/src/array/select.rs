//! Name-keyed slicing and axis reordering.

use rustc_hash::FxHashMap;

use super::{GridIndices, NamedArray};
use crate::error::{DataError, Result};

/// How a single axis is treated by [`NamedArray::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector {
    /// Keep one position; the axis is dropped from the result.
    Index(usize),
    /// Keep the whole axis in place.
    All,
}

/// Selectors keyed by axis name. Axes without an entry are kept whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceSpec {
    selectors: FxHashMap<String, AxisSelector>,
}

impl SliceSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `axis` to a single 0-based position.
    #[must_use]
    pub fn index(mut self, axis: impl Into<String>, index: usize) -> Self {
        self.set(axis, AxisSelector::Index(index));
        self
    }

    /// Keep `axis` whole.
    #[must_use]
    pub fn all(mut self, axis: impl Into<String>) -> Self {
        self.set(axis, AxisSelector::All);
        self
    }

    pub fn set(&mut self, axis: impl Into<String>, selector: AxisSelector) {
        self.selectors.insert(axis.into(), selector);
    }

    /// Selector for `axis`, defaulting to [`AxisSelector::All`].
    pub fn get(&self, axis: &str) -> AxisSelector {
        self.selectors
            .get(axis)
            .copied()
            .unwrap_or(AxisSelector::All)
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.selectors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl<T: Clone> NamedArray<T> {
    /// Slice the array by axis name.
    ///
    /// Axes pinned with [`AxisSelector::Index`] are dropped; the remaining axes
    /// keep their original relative order. Pinning every axis yields a rank-0
    /// array whose value is available through [`NamedArray::scalar`].
    ///
    /// # Errors
    ///
    /// [`DataError::UnknownAxis`] if the slice names an axis the array does not
    /// have, [`DataError::IndexOutOfRange`] if a pinned index is past the end
    /// of its axis.
    pub fn select(&self, spec: &SliceSpec) -> Result<Self> {
        for name in spec.axis_names() {
            self.axis_index(name)?;
        }

        let mut base = 0;
        let mut kept_axes = Vec::with_capacity(self.axes.len());
        let mut kept_strides = Vec::with_capacity(self.axes.len());
        for (axis, &stride) in self.axes.iter().zip(&self.strides) {
            match spec.get(&axis.name) {
                AxisSelector::Index(index) => {
                    if index >= axis.size {
                        return Err(DataError::IndexOutOfRange {
                            axis: axis.name.clone(),
                            index,
                            size: axis.size,
                        });
                    }
                    base += index * stride;
                }
                AxisSelector::All => {
                    kept_axes.push(axis.clone());
                    kept_strides.push(stride);
                }
            }
        }

        let shape: Vec<usize> = kept_axes.iter().map(|a| a.size).collect();
        let data = GridIndices::new(&shape)
            .map(|idx| self.data[base + offset(&idx, &kept_strides)].clone())
            .collect();
        NamedArray::new(kept_axes, data)
    }

    /// Reorder the axes so they appear in `order`.
    ///
    /// # Errors
    ///
    /// [`DataError::RankMismatch`] unless `order` names as many axes as the
    /// array has, [`DataError::UnknownAxis`] for a name that is not present and
    /// [`DataError::DuplicateAxis`] for a name listed twice.
    pub fn permute(&self, order: &[&str]) -> Result<Self> {
        if order.len() != self.ndim() {
            return Err(DataError::RankMismatch {
                expected: self.ndim(),
                actual: order.len(),
            });
        }
        let positions = order
            .iter()
            .map(|name| self.axis_index(name))
            .collect::<Result<Vec<_>>>()?;
        for (i, name) in order.iter().enumerate() {
            if order[..i].contains(name) {
                return Err(DataError::DuplicateAxis {
                    name: (*name).to_string(),
                });
            }
        }

        let axes: Vec<_> = positions.iter().map(|&p| self.axes[p].clone()).collect();
        let strides: Vec<usize> = positions.iter().map(|&p| self.strides[p]).collect();
        let shape: Vec<usize> = axes.iter().map(|a| a.size).collect();
        let data = GridIndices::new(&shape)
            .map(|idx| self.data[offset(&idx, &strides)].clone())
            .collect();
        NamedArray::new(axes, data)
    }
}

fn offset(indices: &[usize], strides: &[usize]) -> usize {
    indices.iter().zip(strides).map(|(i, s)| i * s).sum()
}
