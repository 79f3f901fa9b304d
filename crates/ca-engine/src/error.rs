//! Canonical error codes for the engine façade.
//!
//! Why this design
//! - Callers may compare codes directly (TH-style external ABI compat), so the
//!   numeric mapping is fixed via explicit `#[repr(i32)]` discriminants.
//! - `EngineError` pairs a code with a short human-readable detail string,
//!   matching the shape of `rand4::GeneratorError` / `geom4::VolumeError`
//!   elsewhere in this workspace: a plain enum, a `Display` impl, no `thiserror`.

use std::fmt;

/// Negative-integer error codes surfaced to callers of the engine façade.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    AlreadyInitialized = -1,
    CellsNull = -2,
    AllocationFailed = -3,
    InvalidState = -4,
    InvalidStateCondition = -5,
    InvalidRadius = -6,
    InvalidNumStates = -7,
    NeighborhoodAllocationFailed = -8,
    CustomRuleMissing = -9,
    RadiusTooLarge = -10,
}

impl ErrorCode {
    /// Canonical human-readable message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "grid dimensions are already configured",
            Self::CellsNull => "cell buffers are not allocated",
            Self::AllocationFailed => "failed to allocate grid buffers",
            Self::InvalidState => "cell state is out of range",
            Self::InvalidStateCondition => "seed state is not below num_states",
            Self::InvalidRadius => "boundary radius must be >= 1",
            Self::InvalidNumStates => "num_states must be >= 2",
            Self::NeighborhoodAllocationFailed => "failed to allocate a neighborhood scratch buffer",
            Self::CustomRuleMissing => "rule is Custom but no custom rule was supplied",
            Self::RadiusTooLarge => "boundary radius exceeds half of an active axis length",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// An engine error: a canonical code plus a short call-site detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineError {
    pub code: ErrorCode,
    pub detail: String,
}

impl EngineError {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    pub fn code(code: ErrorCode) -> Self {
        Self::new(code, code.message())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.detail)
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
