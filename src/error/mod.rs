use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid synapse parameters or evaluation inputs
#[derive(Clone, Copy, PartialEq)]
pub enum SynapseError {
    /// Time constant is zero, negative or not finite
    NonPositiveTimeConstant,
    /// Evaluation time is NaN
    InvalidTime,
    /// A spike time is NaN
    InvalidSpikeTime,
    /// Membrane potential or reversal potential is NaN
    InvalidVoltage,
    /// Synapse type cannot be found
    SynapseNotFound,
    /// Maximal conductance is not finite
    InvalidConductance,
}

impl Display for SynapseError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            SynapseError::NonPositiveTimeConstant => "Time constant must be finite and greater than 0",
            SynapseError::InvalidTime => "Evaluation time cannot be NaN",
            SynapseError::InvalidSpikeTime => "Spike times cannot be NaN",
            SynapseError::InvalidVoltage => "Membrane and reversal potential cannot be NaN",
            SynapseError::SynapseNotFound => "Synapse type not found",
            SynapseError::InvalidConductance => "Maximal conductance must be finite",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for SynapseError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for evaluating synapses over a series of time points
#[derive(Clone, Copy, PartialEq)]
pub enum TraceError {
    /// Time points and voltages are not the same length
    LengthMismatch,
    /// Timestep is zero, negative or not finite
    NonPositiveTimestep,
    /// Interval end is before its start or either bound is not finite
    InvalidInterval,
    /// Interval and timestep would generate more than `MAX_TIME_POINTS` time points
    TooManyTimePoints,
}

impl Display for TraceError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            TraceError::LengthMismatch => "Time points and voltages must have the same length",
            TraceError::NonPositiveTimestep => "Timestep must be finite and greater than 0",
            TraceError::InvalidInterval => "Interval bounds must be finite and stop cannot be before start",
            TraceError::TooManyTimePoints => "Interval and timestep generate too many time points",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for TraceError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
#[derive(Clone, Copy, PartialEq)]
pub enum SynapticKineticsError {
    /// Errors related to synapse parameters and inputs
    SynapseRelatedError(SynapseError),
    /// Errors related to traces over time
    TraceRelatedError(TraceError),
}

impl Display for SynapticKineticsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SynapticKineticsError::SynapseRelatedError(err) => write!(f, "{}", err),
            SynapticKineticsError::TraceRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for SynapticKineticsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for SynapseError {}

impl std::error::Error for TraceError {}

impl std::error::Error for SynapticKineticsError {}

impl From<SynapseError> for SynapticKineticsError {
    fn from(err: SynapseError) -> SynapticKineticsError {
        SynapticKineticsError::SynapseRelatedError(err)
    }
}

impl From<TraceError> for SynapticKineticsError {
    fn from(err: TraceError) -> SynapticKineticsError {
        SynapticKineticsError::TraceRelatedError(err)
    }
}
