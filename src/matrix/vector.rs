//! One-dimensional vectors with row or column orientation.
//!
//! A `Vector` stores its scalars contiguously and records whether it is a row
//! (`1×n`) or a column (`n×1`). The nested column form, a sequence of
//! single-element sequences, is accepted by [`Vector::from_nested`] and by
//! [`Entry::Nested`], and validated on the way in.

use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use std::fmt;

/// Row or column orientation of a vector, or of the vectors making up a matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Row => "row",
            Orientation::Column => "column",
        }
    }
}

/// A single value offered to [`Vector::add_element`].
///
/// Row vectors take bare scalars, column vectors take one-element sequences.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<T> {
    Scalar(T),
    Nested(Vec<T>),
}

#[derive(Clone, Debug)]
pub struct Vector<T> {
    elements: Vec<T>,
    orientation: Orientation,
}

fn check_finite<T: Numerical>(elements: &[T]) -> Result<()> {
    match elements.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(ErrorKind::VectorValidation(format!(
            "entry {i} is not a finite scalar ({})",
            elements[i]
        ))
        .into()),
        None => Ok(()),
    }
}

impl<T: Numerical> Vector<T> {
    /// Build a row vector from a flat sequence.
    pub fn row(elements: Vec<T>) -> Result<Self> {
        check_finite(&elements)?;
        Ok(Self {
            elements,
            orientation: Orientation::Row,
        })
    }

    /// Build a column vector from a flat sequence.
    pub fn column(elements: Vec<T>) -> Result<Self> {
        check_finite(&elements)?;
        Ok(Self {
            elements,
            orientation: Orientation::Column,
        })
    }

    /// Build a column vector from single-element entries.
    ///
    /// Any entry whose length is not exactly one is rejected.
    pub fn from_nested(entries: Vec<Vec<T>>) -> Result<Self> {
        if let Some((i, e)) = entries.iter().enumerate().find(|(_, e)| e.len() != 1) {
            return Err(ErrorKind::VectorValidation(format!(
                "column entry {i} has length {}, expected 1",
                e.len()
            ))
            .into());
        }
        Self::column(entries.into_iter().flatten().collect())
    }

    pub(crate) fn from_parts(elements: Vec<T>, orientation: Orientation) -> Self {
        Self { elements, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_row(&self) -> bool {
        self.orientation == Orientation::Row
    }

    pub fn is_column(&self) -> bool {
        self.orientation == Orientation::Column
    }

    pub fn rows(&self) -> usize {
        match self.orientation {
            Orientation::Row => 1,
            Orientation::Column => self.elements.len(),
        }
    }

    pub fn columns(&self) -> usize {
        match self.orientation {
            Orientation::Row => self.elements.len(),
            Orientation::Column => 1,
        }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `"(rows,columns)"`.
    pub fn shape(&self) -> String {
        format!("({},{})", self.rows(), self.columns())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.elements.get(index).copied().ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if !value.is_finite() {
            return Err(ErrorKind::InvalidArgument(format!("cannot store {value}")).into());
        }
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(index)),
        }
    }

    fn out_of_bounds(&self, index: usize) -> crate::error::LinalgError {
        let (row, col) = match self.orientation {
            Orientation::Row => (0, index),
            Orientation::Column => (index, 0),
        };
        ErrorKind::IndexOutOfBounds {
            row,
            col,
            shape: self.shape(),
        }
        .into()
    }

    /// Append one entry, which must match the current orientation.
    pub fn add_element(&mut self, value: Entry<T>) -> Result<()> {
        let orientation = self.orientation.name();
        let x = match (self.orientation, value) {
            (Orientation::Row, Entry::Scalar(x)) => x,
            (Orientation::Column, Entry::Nested(v)) if v.len() == 1 => v[0],
            (Orientation::Column, Entry::Nested(v)) => {
                return Err(ErrorKind::InvalidElement {
                    orientation,
                    reason: format!("nested entry has length {}, expected 1", v.len()),
                }
                .into());
            }
            (Orientation::Row, Entry::Nested(_)) => {
                return Err(ErrorKind::InvalidElement {
                    orientation,
                    reason: "expected a bare scalar".into(),
                }
                .into());
            }
            (Orientation::Column, Entry::Scalar(_)) => {
                return Err(ErrorKind::InvalidElement {
                    orientation,
                    reason: "expected a single-element entry".into(),
                }
                .into());
            }
        };
        if !x.is_finite() {
            return Err(ErrorKind::InvalidElement {
                orientation,
                reason: format!("{x} is not a finite scalar"),
            }
            .into());
        }
        self.elements.push(x);
        Ok(())
    }

    /// Append scalars in order, each wrapped to fit the vector's orientation.
    pub fn add_elements(&mut self, values: &[T]) -> Result<()> {
        for &x in values {
            let entry = match self.orientation {
                Orientation::Row => Entry::Scalar(x),
                Orientation::Column => Entry::Nested(vec![x]),
            };
            self.add_element(entry)?;
        }
        Ok(())
    }

    /// Same scalars, opposite orientation.
    pub fn transpose(&self) -> Self {
        Self::from_parts(self.elements.clone(), self.orientation.flip())
    }

    /// Σ conj(self[i]) · other[i].
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.size() != other.size() {
            return Err(ErrorKind::DimensionMismatch {
                op: "dot",
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }
        Ok(dot_slices(&self.elements, &other.elements))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> T {
        norm_slice(&self.elements)
    }

    pub fn scale(&self, scalar: T) -> Result<Self> {
        if !scalar.is_finite() {
            return Err(ErrorKind::InvalidArgument(format!("cannot scale by {scalar}")).into());
        }
        let elements: Vec<T> = self.elements.iter().map(|&x| x * scalar).collect();
        check_finite(&elements)?;
        Ok(Self::from_parts(elements, self.orientation))
    }

    /// Same orientation and size, and every difference has modulus at most `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.orientation == other.orientation
            && self.size() == other.size()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(&a, &b)| (a - b).modulus() <= tol)
    }
}

pub(crate) fn dot_slices<T: Numerical>(x: &[T], y: &[T]) -> T {
    x.iter()
        .zip(y)
        .fold(T::zero_value(), |acc, (&a, &b)| acc + a.conj() * b)
}

/// Euclidean norm, scaled by the largest modulus so the squares cannot overflow.
pub(crate) fn norm_slice<T: Numerical>(x: &[T]) -> T {
    let scale = x.iter().map(|a| a.modulus()).fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return T::from_integral(scale);
    }
    let sq = x
        .iter()
        .map(|a| {
            let r = a.modulus() / scale;
            r * r
        })
        .sum::<f64>();
    T::from_integral(scale * sq.sqrt())
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation && self.elements == other.elements
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Numerical> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.orientation {
            Orientation::Row => ", ",
            Orientation::Column => "; ",
        };
        f.write_str("[")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}
