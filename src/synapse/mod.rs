//! Single exponential synapse kinetics, conductance decays exponentially after every
//! presynaptic spike and the resulting current is scaled by the driving force
//! between the membrane potential and the reversal potential of the synapse.

use std::collections::{btree_map::Keys, BTreeMap};
use log::debug;
use ndarray::Array1;
use crate::error::SynapseError;


/// Default maximal synaptic conductance (nS)
pub const DEFAULT_G_MAX: f64 = 50.;
/// Default synapse time constant (ms)
pub const DEFAULT_TAU: f64 = 5.;
/// Converts nS * mV to the unit of the returned current
pub const CURRENT_UNIT_SCALE: f64 = 1e-3;

/// Heaviside step function, returns `true` when `x` is 0 or greater
/// and `false` otherwise (including when `x` is NaN)
pub fn heaviside(x: f64) -> bool {
    x >= 0.
}

/// Elementwise [`heaviside`] over an array, output has the same shape as the input
pub fn heaviside_array(x: &Array1<f64>) -> Array1<bool> {
    x.mapv(heaviside)
}

pub(crate) fn check_time_constant(tau: f64) -> Result<(), SynapseError> {
    if !tau.is_finite() || tau <= 0. {
        debug!("rejected time constant: {}", tau);
        return Err(SynapseError::NonPositiveTimeConstant);
    }

    Ok(())
}

pub(crate) fn check_conductance(g_max: f64) -> Result<(), SynapseError> {
    if !g_max.is_finite() {
        debug!("rejected maximal conductance: {}", g_max);
        return Err(SynapseError::InvalidConductance);
    }

    Ok(())
}

pub(crate) fn check_time(t: f64) -> Result<(), SynapseError> {
    if t.is_nan() {
        debug!("rejected evaluation time: {}", t);
        return Err(SynapseError::InvalidTime);
    }

    Ok(())
}

pub(crate) fn check_spikes(spikes: &[f64]) -> Result<(), SynapseError> {
    if let Some(position) = spikes.iter().position(|spike| spike.is_nan()) {
        debug!("rejected spike time at index {}", position);
        return Err(SynapseError::InvalidSpikeTime);
    }

    Ok(())
}

pub(crate) fn check_voltage(voltage: f64, reversal: f64) -> Result<(), SynapseError> {
    if voltage.is_nan() || reversal.is_nan() {
        debug!("rejected voltage: {}, reversal: {}", voltage, reversal);
        return Err(SynapseError::InvalidVoltage);
    }

    Ok(())
}

/// Sums the decayed conductance of every spike at or before `t`, inputs must already be validated
pub(crate) fn sum_conductance(t: f64, spikes: &[f64], g_max: f64, tau: f64) -> f64 {
    let mut total = 0.;
    for spike in spikes {
        let elapsed = t - spike;
        // future spikes are skipped, never multiplied by 0 (exp may overflow)
        if heaviside(elapsed) {
            total += g_max * (-elapsed / tau).exp();
        }
    }

    total
}

pub(crate) fn driving_current(g: f64, voltage: f64, reversal: f64) -> f64 {
    CURRENT_UNIT_SCALE * g * (voltage - reversal)
}

/// Calculates single exponential conductance decay (nS) at time `t` (ms) given
/// the presynaptic spike times (ms), the maximal conductance `g_max` (nS) and
/// the synapse time constant `tau` (ms)
///
/// Spikes after `t` contribute nothing, a spike exactly at `t` contributes `g_max`,
/// an empty spike train results in `0.`
///
/// Returns an error if `tau` is not finite and positive, if `g_max` is not finite
/// or if `t` or any spike time is NaN
pub fn conductance(t: f64, spikes: &[f64], g_max: f64, tau: f64) -> Result<f64, SynapseError> {
    check_time_constant(tau)?;
    check_conductance(g_max)?;
    check_time(t)?;
    check_spikes(spikes)?;

    Ok(sum_conductance(t, spikes, g_max, tau))
}

/// Calculates conductance (nS) from a single presynaptic spike,
/// equivalent to calling [`conductance`] with a one element spike train
pub fn conductance_single_spike(t: f64, spike: f64, g_max: f64, tau: f64) -> Result<f64, SynapseError> {
    conductance(t, &[spike], g_max, tau)
}

/// Calculates the current generated by a single exponential synapse
///
/// - `t` : time to evaluate at (ms)
///
/// - `voltage` : membrane potential at time `t` (mV)
///
/// - `spikes` : presynaptic spike times (ms)
///
/// - `g_max` : maximal conductance (nS)
///
/// - `tau` : synapse time constant (ms)
///
/// - `reversal` : reversal potential of the synapse (mV)
pub fn synaptic_current(
    t: f64,
    voltage: f64,
    spikes: &[f64],
    g_max: f64,
    tau: f64,
    reversal: f64,
) -> Result<f64, SynapseError> {
    check_voltage(voltage, reversal)?;
    let g = conductance(t, spikes, g_max, tau)?;

    Ok(driving_current(g, voltage, reversal))
}

/// Default for excitatory AMPA synapse
pub trait AMPADefault {
    fn ampa_default() -> Self;
}

/// Default for inhibitory GABAa synapse
pub trait GABAaDefault {
    fn gabaa_default() -> Self;
}

/// Parameters of a single exponential synapse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleExponentialSynapse {
    /// Maximal synaptic conductance (nS)
    pub g_max: f64,
    /// Synapse time constant (ms)
    pub tau: f64,
    /// Reversal potential (mV)
    pub reversal: f64,
}

impl Default for SingleExponentialSynapse {
    fn default() -> Self {
        SingleExponentialSynapse {
            g_max: DEFAULT_G_MAX, // 50 nS
            tau: DEFAULT_TAU, // 5 ms
            reversal: 0., // 0 mV
        }
    }
}

macro_rules! impl_single_exponential_synapse_default {
    ($trait:ident, $method:ident, $g_max:expr, $tau:expr, $reversal:expr) => {
        impl $trait for SingleExponentialSynapse {
            fn $method() -> Self {
                SingleExponentialSynapse {
                    g_max: $g_max,
                    tau: $tau,
                    reversal: $reversal,
                }
            }
        }
    };
}

impl_single_exponential_synapse_default!(AMPADefault, ampa_default, 50., 4., 0.);
impl_single_exponential_synapse_default!(GABAaDefault, gabaa_default, 50., 8., -70.);

impl SingleExponentialSynapse {
    /// Checks that the time constant is positive, the maximal conductance is finite
    /// and the reversal potential is a number
    pub fn validate(&self) -> Result<(), SynapseError> {
        check_time_constant(self.tau)?;
        check_conductance(self.g_max)?;
        if self.reversal.is_nan() {
            debug!("rejected reversal potential: {}", self.reversal);
            return Err(SynapseError::InvalidVoltage);
        }

        Ok(())
    }

    /// Calculates conductance (nS) at time `t` (ms) given the presynaptic spike times (ms)
    pub fn conductance(&self, t: f64, spikes: &[f64]) -> Result<f64, SynapseError> {
        conductance(t, spikes, self.g_max, self.tau)
    }

    /// Calculates conductance (nS) at time `t` (ms) from a single presynaptic spike (ms)
    pub fn conductance_single_spike(&self, t: f64, spike: f64) -> Result<f64, SynapseError> {
        conductance_single_spike(t, spike, self.g_max, self.tau)
    }

    /// Calculates current at time `t` (ms) given membrane potential `voltage` (mV) and
    /// the presynaptic spike times (ms)
    pub fn current(&self, t: f64, voltage: f64, spikes: &[f64]) -> Result<f64, SynapseError> {
        synaptic_current(t, voltage, spikes, self.g_max, self.tau, self.reversal)
    }
}

/// Current generated by an excitatory synapse (`g_max = 50`, `tau = 4`, `reversal = 0`)
pub fn excitatory_current(t: f64, voltage: f64, spikes: &[f64]) -> Result<f64, SynapseError> {
    SingleExponentialSynapse::ampa_default().current(t, voltage, spikes)
}

/// Current generated by an inhibitory synapse (`g_max = 50`, `tau = 8`, `reversal = -70`)
pub fn inhibitory_current(t: f64, voltage: f64, spikes: &[f64]) -> Result<f64, SynapseError> {
    SingleExponentialSynapse::gabaa_default().current(t, voltage, spikes)
}

/// Type of synapse, either excitatory or inhibitory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SynapseType {
    /// Excitatory synapse (AMPA)
    Excitatory,
    /// Inhibitory synapse (GABAa)
    Inhibitory,
}

impl SynapseType {
    /// Returns the default parameters for the given synapse type
    pub fn default_synapse(&self) -> SingleExponentialSynapse {
        match self {
            SynapseType::Excitatory => SingleExponentialSynapse::ampa_default(),
            SynapseType::Inhibitory => SingleExponentialSynapse::gabaa_default(),
        }
    }

    /// Converts type to string
    pub fn to_str(&self) -> &str {
        match self {
            SynapseType::Excitatory => "Excitatory",
            SynapseType::Inhibitory => "Inhibitory",
        }
    }
}

/// A synapse alongside the presynaptic spike times it has received
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpikingSynapse {
    /// Synapse parameters
    pub synapse: SingleExponentialSynapse,
    /// Presynaptic spike times (ms)
    pub spikes: Vec<f64>,
}

/// Multiple synapses with their associated synapse type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Synapses {
    synapses: BTreeMap<SynapseType, SpikingSynapse>,
}

impl Synapses {
    /// Returns how many synapses there are
    pub fn len(&self) -> usize {
        self.synapses.len()
    }

    /// Returns if there are no synapses
    pub fn is_empty(&self) -> bool {
        self.synapses.is_empty()
    }

    /// Returns the synapse types as a set of keys
    pub fn keys(&self) -> Keys<SynapseType, SpikingSynapse> {
        self.synapses.keys()
    }

    /// Gets the synapse associated with the given [`SynapseType`]
    pub fn get(&self, synapse_type: &SynapseType) -> Option<&SpikingSynapse> {
        self.synapses.get(synapse_type)
    }

    /// Inserts the given synapse with the associated [`SynapseType`] and an empty spike train,
    /// replacing any synapse already present for that type
    pub fn insert(
        &mut self,
        synapse_type: SynapseType,
        synapse: SingleExponentialSynapse,
    ) -> Result<(), SynapseError> {
        synapse.validate()?;
        self.synapses.insert(synapse_type, SpikingSynapse { synapse, spikes: vec![] });

        Ok(())
    }

    /// Records a presynaptic spike at time `spike` (ms) on the given synapse
    pub fn add_spike(&mut self, synapse_type: &SynapseType, spike: f64) -> Result<(), SynapseError> {
        if spike.is_nan() {
            debug!("rejected spike time for {} synapse", synapse_type.to_str());
            return Err(SynapseError::InvalidSpikeTime);
        }

        match self.synapses.get_mut(synapse_type) {
            Some(spiking_synapse) => {
                spiking_synapse.spikes.push(spike);
                Ok(())
            },
            None => Err(SynapseError::SynapseNotFound),
        }
    }

    /// Returns the total conductance (nS) of every synapse at time `t` (ms)
    pub fn total_conductance(&self, t: f64) -> Result<f64, SynapseError> {
        let mut total = 0.;
        for spiking_synapse in self.synapses.values() {
            total += spiking_synapse.synapse.conductance(t, &spiking_synapse.spikes)?;
        }

        Ok(total)
    }

    /// Returns the total current of every synapse at time `t` (ms) given
    /// the membrane potential `voltage` (mV)
    pub fn total_current(&self, t: f64, voltage: f64) -> Result<f64, SynapseError> {
        let mut total = 0.;
        for spiking_synapse in self.synapses.values() {
            total += spiking_synapse.synapse.current(t, voltage, &spiking_synapse.spikes)?;
        }

        Ok(total)
    }
}
