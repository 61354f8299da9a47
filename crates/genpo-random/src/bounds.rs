//! Integer bounds used to constrain generation.

use genpo_poly::{GenpoError, Result};

/// A closed integer interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound, inclusive.
    pub min: i64,
    /// Upper bound, inclusive.
    pub max: i64,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `max < min`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let interval = Self { min, max };
        interval.validate()?;
        Ok(interval)
    }

    /// The single-value interval `[value, value]`.
    #[must_use]
    pub fn exactly(value: i64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Checks that `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `max < min`.
    pub fn validate(&self) -> Result<()> {
        if self.max < self.min {
            return Err(GenpoError::invalid(format!(
                "interval is inverted: max ({}) < min ({})",
                self.max, self.min
            )));
        }
        Ok(())
    }

    /// Returns true if `value` lies in the interval.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Optional bounds on the degree contributed by a set of multiplicities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeBounds {
    /// Smallest admissible degree, if any.
    pub min: Option<i64>,
    /// Largest admissible degree, if any.
    pub max: Option<i64>,
}

impl GradeBounds {
    /// No constraint at all.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Both ends constrained.
    #[must_use]
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Only an upper bound.
    #[must_use]
    pub fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Only a lower bound.
    #[must_use]
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Returns true if neither end is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Checks that `min <= max` when both are set.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if the bounds are inverted.
    pub fn validate(&self) -> Result<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if max < min => Err(GenpoError::invalid(format!(
                "degree bounds are inverted: max ({max}) < min ({min})"
            ))),
            _ => Ok(()),
        }
    }

    /// Returns true if `degree` satisfies every bound that is set.
    #[must_use]
    pub fn contains(&self, degree: i64) -> bool {
        self.min.map_or(true, |min| degree >= min) && self.max.map_or(true, |max| degree <= max)
    }
}
