//! Input marshaling: generic numeric sequences into fixed-width buffers.
//!
//! Everything that depends on the caller's numeric types happens here, so the
//! DP loop only ever sees `f64` values and `usize` weights laid out
//! contiguously.
//!
//! Checks run in order: lengths, capacity, weights, values. The first
//! violation is reported and no buffers are returned.

use num_traits::ToPrimitive;

use crate::error::{KnapsackError, Result};

/// Validated, fixed-width knapsack instance.
///
/// `values[k]` and `weights[k]` describe item `k`. Both buffers always have
/// the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBuffers {
    values: Vec<f64>,
    weights: Vec<usize>,
    capacity: usize,
}

impl ItemBuffers {
    /// Marshal caller-supplied sequences of any primitive numeric type.
    ///
    /// Weights and capacity may be signed integers or integral floats; they
    /// are rejected when negative, fractional or wider than `usize`. Values
    /// must be finite.
    ///
    /// ```
    /// use knapsack_dp::ItemBuffers;
    ///
    /// let items = ItemBuffers::marshal(&[60.0f32, 100.0, 120.0], &[10i64, 20, 30], 50u32).unwrap();
    /// assert_eq!(items.weights(), &[10, 20, 30]);
    /// assert_eq!(items.capacity(), 50);
    ///
    /// assert!(ItemBuffers::marshal(&[1.0], &[-1i32], 5).is_err());
    /// ```
    pub fn marshal<V, W, C>(values: &[V], weights: &[W], capacity: C) -> Result<Self>
    where
        V: ToPrimitive,
        W: ToPrimitive,
        C: ToPrimitive,
    {
        if values.len() != weights.len() {
            return Err(KnapsackError::invalid(
                "values",
                format!(
                    "length {} does not match weights length {}",
                    values.len(),
                    weights.len()
                ),
            ));
        }

        let capacity =
            to_index(&capacity).map_err(|why| KnapsackError::invalid("capacity", why))?;

        let weights = weights
            .iter()
            .enumerate()
            .map(|(k, w)| {
                to_index(w)
                    .map_err(|why| KnapsackError::invalid("weights", format!("element {k} {why}")))
            })
            .collect::<Result<Vec<usize>>>()?;

        let values = values
            .iter()
            .enumerate()
            .map(|(k, v)| {
                to_value(v)
                    .map_err(|why| KnapsackError::invalid("values", format!("element {k} {why}")))
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Build from buffers that are already in native form.
    ///
    /// Only the length match and value finiteness need checking here; the
    /// weight and capacity types already rule out negatives.
    pub fn new(values: Vec<f64>, weights: Vec<usize>, capacity: usize) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::invalid(
                "values",
                format!(
                    "length {} does not match weights length {}",
                    values.len(),
                    weights.len()
                ),
            ));
        }
        if let Some(k) = values.iter().position(|v| !v.is_finite()) {
            return Err(KnapsackError::invalid(
                "values",
                format!("element {k} is not finite ({})", values[k]),
            ));
        }
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate `(value, weight)` pairs in input order.
    pub fn items(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.values.iter().copied().zip(self.weights.iter().copied())
    }

    /// Same items with a different capacity.
    pub fn with_capacity(&self, capacity: usize) -> Self {
        Self {
            values: self.values.clone(),
            weights: self.weights.clone(),
            capacity,
        }
    }
}

/// Convert a non-negative integral number into a table index.
fn to_index<T: ToPrimitive>(x: &T) -> std::result::Result<usize, String> {
    // Every primitive converts to f64 (possibly rounded), which is enough to
    // decide sign and integrality; the exact value comes from `to_usize`.
    let approx = x
        .to_f64()
        .ok_or_else(|| "is not representable as a number".to_string())?;
    if approx.is_nan() {
        return Err("is NaN".to_string());
    }
    if approx < 0.0 {
        return Err(format!("is negative ({approx})"));
    }
    if approx.fract() != 0.0 {
        return Err(format!("is not an integer ({approx})"));
    }
    x.to_usize()
        .ok_or_else(|| format!("does not fit a table index ({approx})"))
}

fn to_value<T: ToPrimitive>(x: &T) -> std::result::Result<f64, String> {
    match x.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(format!("is not finite ({v})")),
        None => Err("is not representable as f64".to_string()),
    }
}
