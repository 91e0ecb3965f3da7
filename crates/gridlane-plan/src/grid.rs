//! Parameter grid definitions and cartesian enumeration.

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a job by the enumerator (1-based, dense).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(u32);

impl JobId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Renders the identifier zero-padded to the given width.
    pub fn zero_padded(&self, width: usize) -> String {
        format!("{:0width$}", self.0)
    }
}

/// One discrete value on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    /// Integer value, rendered verbatim.
    Int(i64),
    /// Floating point value, rendered through the default decimal form.
    Number(f64),
    /// String value, substituted verbatim.
    Text(String),
}

impl AxisValue {
    /// Returns the canonical text form substituted into templates.
    ///
    /// Non-finite floats have no text form and are rejected; the pipeline
    /// surfaces this during plan validation, before any file is written.
    pub fn canonical_text(&self) -> Result<String, GridlaneError> {
        match self {
            AxisValue::Int(value) => Ok(value.to_string()),
            AxisValue::Number(value) if value.is_finite() => Ok(value.to_string()),
            AxisValue::Number(value) => Err(GridlaneError::Config(
                ErrorInfo::new(
                    "non-finite-value",
                    format!("axis value {value} cannot be rendered as text"),
                )
                .with_hint("replace NaN/infinite grid values with finite numbers"),
            )),
            AxisValue::Text(value) => Ok(value.clone()),
        }
    }
}

/// One independent dimension of the sweep: a named, ordered, finite value set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis name; also the template marker spelled `##<name>##`.
    pub name: String,
    /// Ordered discrete values visited during enumeration.
    pub values: Vec<AxisValue>,
}

impl Axis {
    /// Creates an axis from an explicit value list.
    pub fn new(name: impl Into<String>, values: Vec<AxisValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates an axis of `count` evenly spaced values over `[start, stop]`,
    /// endpoints included. A single-element axis holds `start`.
    pub fn linspace(name: impl Into<String>, start: f64, stop: f64, count: usize) -> Self {
        let values = match count {
            0 => Vec::new(),
            1 => vec![AxisValue::Number(start)],
            _ => (0..count)
                .map(|i| {
                    let frac = i as f64 / (count - 1) as f64;
                    AxisValue::Number(start + frac * (stop - start))
                })
                .collect(),
        };
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of discrete values on this axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the axis carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered collection of axes spanning the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGrid {
    axes: Vec<Axis>,
}

impl ParameterGrid {
    /// Creates a grid from the given axes, first axis varying slowest.
    pub fn new(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    /// Returns the axes in enumeration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Total number of parameter points (product of all axis lengths).
    pub fn total_points(&self) -> usize {
        self.axes.iter().map(Axis::len).product()
    }

    /// Iterates every parameter point exactly once, assigning dense 1-based
    /// job identifiers as it goes.
    pub fn enumerate(&self) -> GridEnumerator<'_> {
        let remaining = self.total_points();
        GridEnumerator {
            axes: &self.axes,
            cursor: vec![0; self.axes.len()],
            remaining,
            next_id: 1,
        }
    }
}

/// One specific combination of values, one per axis, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterPoint {
    bindings: Vec<(String, AxisValue)>,
}

impl ParameterPoint {
    /// Returns the `(axis name, value)` pairs in axis order.
    pub fn bindings(&self) -> &[(String, AxisValue)] {
        &self.bindings
    }

    /// Looks up the value bound to the named axis.
    pub fn value_for(&self, axis: &str) -> Option<&AxisValue> {
        self.bindings
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }
}

/// Iterator over `(JobId, ParameterPoint)` in standard nested order: the
/// first axis varies slowest, the last axis fastest. The job counter is
/// carried in the iterator state rather than any ambient global.
#[derive(Debug)]
pub struct GridEnumerator<'a> {
    axes: &'a [Axis],
    cursor: Vec<usize>,
    remaining: usize,
    next_id: u32,
}

impl<'a> Iterator for GridEnumerator<'a> {
    type Item = (JobId, ParameterPoint);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bindings = self
            .axes
            .iter()
            .zip(&self.cursor)
            .map(|(axis, &idx)| (axis.name.clone(), axis.values[idx].clone()))
            .collect();
        let id = JobId::from_raw(self.next_id);
        self.next_id += 1;
        self.remaining -= 1;

        // Odometer advance: last axis ticks fastest.
        for pos in (0..self.axes.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.axes[pos].len() {
                break;
            }
            self.cursor[pos] = 0;
        }

        Some((id, ParameterPoint { bindings }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for GridEnumerator<'a> {}
