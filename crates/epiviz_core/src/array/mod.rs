//! Numeric containers addressed by named axes.
//!
//! [`NamedArray`] keeps its values in a flat buffer in row-major order (the
//! last axis varies fastest) together with the ordered list of axes and their
//! precomputed strides. Every operation returns a new array; the receiver is
//! never mutated.
//!
//! ```ignore
//! use epiviz_core::array::{Axis, AxisSelector, NamedArray, SliceSpec};
//!
//! let array = NamedArray::new(
//!     vec![Axis::new("time", 3), Axis::new("trial", 2)],
//!     vec![100.0, 100.0, 90.0, 95.0, 80.0, 85.0],
//! )?;
//!
//! let last = array.select(&SliceSpec::new().index("time", 2))?;
//! assert_eq!(last.to_vec1()?, vec![80.0, 85.0]);
//!
//! let mean = array.reduce_mean("trial")?;
//! assert_eq!(mean.to_vec1()?, vec![100.0, 92.5, 82.5]);
//! ```

mod reduce;
mod select;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DataError, Result};

pub use select::{AxisSelector, SliceSpec};

/// A named axis and its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub size: usize,
}

impl Axis {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// N-dimensional array whose axes are addressed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArray<T = f64> {
    axes: Vec<Axis>,
    strides: Vec<usize>,
    data: Vec<T>,
}

impl<T> NamedArray<T> {
    /// Create an array from axes and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ShapeMismatch`] if `data.len()` differs from the
    /// product of the axis sizes, [`DataError::DuplicateAxis`] if two axes
    /// share a name, or [`DataError::ShapeOverflow`] if that product does not
    /// fit in `usize`.
    pub fn new(axes: Vec<Axis>, data: Vec<T>) -> Result<Self> {
        check_unique(&axes)?;
        let (strides, expected) = compute_strides(&axes)?;
        if data.len() != expected {
            return Err(DataError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            axes,
            strides,
            data,
        })
    }

    /// Create an array by evaluating `f` at every multi-index in row-major order.
    pub fn from_fn(axes: Vec<Axis>, mut f: impl FnMut(&[usize]) -> T) -> Result<Self> {
        check_unique(&axes)?;
        let (strides, _) = compute_strides(&axes)?;
        let shape: Vec<usize> = axes.iter().map(|a| a.size).collect();
        let data = GridIndices::new(&shape).map(|idx| f(&idx)).collect();
        Ok(Self {
            axes,
            strides,
            data,
        })
    }

    /// Create a rank-0 array holding a single value.
    pub fn scalar_value(value: T) -> Self {
        Self {
            axes: Vec::new(),
            strides: Vec::new(),
            data: vec![value],
        }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis names in storage order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name.as_str())
    }

    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.size).collect()
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the underlying values.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Position of the axis called `name`.
    pub fn axis_index(&self, name: &str) -> Result<usize> {
        self.axes
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| DataError::unknown_axis(name))
    }

    /// Length of the axis called `name`.
    pub fn size(&self, name: &str) -> Result<usize> {
        self.axis_index(name).map(|i| self.axes[i].size)
    }

    /// Value at a positional multi-index.
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).map(|i| &self.data[i])
    }

    /// The single value of a rank-0 array.
    pub fn scalar(&self) -> Option<&T> {
        if self.axes.is_empty() {
            self.data.first()
        } else {
            None
        }
    }

    fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.axes.len() {
            return None;
        }
        let mut flat = 0;
        for ((&idx, axis), &stride) in indices.iter().zip(&self.axes).zip(&self.strides) {
            if idx >= axis.size {
                return None;
            }
            flat += idx * stride;
        }
        Some(flat)
    }

    /// Iterate over all positional multi-indices in storage order.
    pub fn indices(&self) -> GridIndices {
        GridIndices::new(&self.shape())
    }
}

impl<T: Clone> NamedArray<T> {
    /// Create an array with every cell set to `value`.
    pub fn filled(axes: Vec<Axis>, value: T) -> Result<Self> {
        let (_, total) = compute_strides(&axes)?;
        Self::new(axes, vec![value; total])
    }

    /// Strip axis names, returning the shape and a copy of the values.
    pub fn to_plain(&self) -> (Vec<usize>, Vec<T>) {
        (self.shape(), self.data.clone())
    }

    /// Values of a rank-1 array.
    pub fn to_vec1(&self) -> Result<Vec<T>> {
        self.expect_rank(1)?;
        let (_, data) = self.to_plain();
        Ok(data)
    }

    /// Values of a rank-2 array as rows along the first axis.
    pub fn to_vec2(&self) -> Result<Vec<Vec<T>>> {
        self.expect_rank(2)?;
        let (shape, data) = self.to_plain();
        let (rows, cols) = (shape[0], shape[1]);
        if cols == 0 {
            return Ok(vec![Vec::new(); rows]);
        }
        Ok(data.chunks(cols).map(<[T]>::to_vec).collect())
    }

    fn expect_rank(&self, expected: usize) -> Result<()> {
        if self.ndim() == expected {
            Ok(())
        } else {
            Err(DataError::RankMismatch {
                expected,
                actual: self.ndim(),
            })
        }
    }
}

fn check_unique(axes: &[Axis]) -> Result<()> {
    for (i, axis) in axes.iter().enumerate() {
        if axes[..i].iter().any(|a| a.name == axis.name) {
            return Err(DataError::DuplicateAxis {
                name: axis.name.clone(),
            });
        }
    }
    Ok(())
}

/// Compute strides for row-major order, plus the total element count.
///
/// Fails with [`DataError::ShapeOverflow`] if any trailing product of axis
/// sizes does not fit in `usize`.
fn compute_strides(axes: &[Axis]) -> Result<(Vec<usize>, usize)> {
    let mut strides = vec![1; axes.len()];
    let mut total: usize = 1;
    for (i, axis) in axes.iter().enumerate().rev() {
        strides[i] = total;
        total = total
            .checked_mul(axis.size)
            .ok_or_else(|| DataError::ShapeOverflow {
                shape: axes.iter().map(|a| a.size).collect(),
            })?;
    }
    Ok((strides, total))
}

/// Iterator over all indices of a shape, last dimension fastest.
pub struct GridIndices {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl GridIndices {
    fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            done: shape.contains(&0),
        }
    }
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        if self.shape.is_empty() {
            self.done = true;
            return Some(result);
        }

        for i in (0..self.shape.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.shape[i] {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
            }
        }

        Some(result)
    }
}

/// On-disk layout: axes plus row-major values, strides are recomputed on load.
#[derive(Deserialize)]
struct RawArray<T> {
    axes: Vec<Axis>,
    data: Vec<T>,
}

impl<T: Serialize> Serialize for NamedArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NamedArray", 2)?;
        state.serialize_field("axes", &self.axes)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NamedArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawArray::<T>::deserialize(deserializer)?;
        NamedArray::new(raw.axes, raw.data).map_err(D::Error::custom)
    }
}
