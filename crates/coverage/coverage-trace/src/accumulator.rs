//! Capped per-cycle area accounting

use core::fmt;

/// Running total of pixel area drawn in the current flush cycle
///
/// Every contribution is clamped to the capacity still left on the display,
/// so the total never exceeds the drawable area and never decreases between
/// resets. A negative estimate is an invariant violation: the accumulator
/// halts for the rest of the session and every later [`add`](Self::add)
/// fails.
#[derive(Debug, Clone)]
pub struct AreaAccumulator {
    total_area: u64,
    accumulated: u64,
    halted: bool,
}

impl AreaAccumulator {
    /// Create an empty accumulator capped at `total_area` pixels
    pub fn new(total_area: u64) -> Self {
        Self {
            total_area,
            accumulated: 0,
            halted: false,
        }
    }

    /// Add an estimated area, clamped to the remaining capacity
    ///
    /// Returns the contribution actually applied.
    ///
    /// # Errors
    ///
    /// - [`AccountingError::NegativeArea`] if `amount` is below zero; the
    ///   total is left unchanged and the accumulator halts
    /// - [`AccountingError::Halted`] on every call after a halt
    pub fn add(&mut self, amount: i64) -> Result<u64, AccountingError> {
        if self.halted {
            return Err(AccountingError::Halted);
        }

        let Ok(amount) = u64::try_from(amount) else {
            self.halted = true;
            return Err(AccountingError::NegativeArea { amount });
        };

        let contribution = amount.min(self.remaining_capacity());
        self.accumulated = self.accumulated.saturating_add(contribution);
        Ok(contribution)
    }

    /// Zero the running total; a halt survives resets
    pub fn reset(&mut self) {
        self.accumulated = 0;
    }

    /// Area accumulated since the last reset
    pub fn area_drawn(&self) -> u64 {
        self.accumulated
    }

    /// Drawable area this accumulator caps against
    pub fn total_area(&self) -> u64 {
        self.total_area
    }

    /// Capacity left before the cap is reached
    pub fn remaining_capacity(&self) -> u64 {
        self.total_area.saturating_sub(self.accumulated)
    }

    /// Whether an invariant violation stopped accounting for this session
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Unrecoverable accounting failures
///
/// Both variants mean the coverage statistics for this session are no longer
/// meaningful. They are not retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountingError {
    /// An estimate below zero reached the accumulator
    NegativeArea {
        /// Rejected estimate
        amount: i64,
    },
    /// Accounting already halted after an earlier violation
    Halted,
}

impl fmt::Display for AccountingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeArea { amount } => {
                write!(f, "area drawn can't be negative ({amount})")
            }
            Self::Halted => write!(f, "area accounting halted after an earlier violation"),
        }
    }
}

impl std::error::Error for AccountingError {}
