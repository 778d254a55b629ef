//! # Exponential Synapses
//!
//! `exponential_synapses` calculates synaptic conductance and current using single
//! exponential decay kinetics. Every presynaptic spike opens the synapse to its
//! maximal conductance which then decays with the synapse time constant, the current
//! is the conductance scaled by the driving force between the membrane potential
//! and the reversal potential of the synapse. Spike times and membrane potentials
//! are supplied by the caller, nothing is integrated over time.
//!
//! Time is in ms, conductance in nS, voltage in mV.
//!
//! ## Example Code
//!
//! ### Conductance from a spike train
//!
//! ```rust
//! use exponential_synapses::{
//!     error::SynapseError,
//!     synapse::{conductance, conductance_single_spike},
//! };
//!
//! fn main() -> Result<(), SynapseError> {
//!     // a spike exactly at the evaluation time contributes the maximal conductance
//!     assert_eq!(conductance(1., &[1.], 50., 5.)?, 50.);
//!     // spikes that have not happened yet do not contribute
//!     assert_eq!(conductance(1., &[1., 10000.], 50., 5.)?, 50.);
//!     // a single spike time can be passed directly
//!     assert_eq!(conductance_single_spike(1., 2., 50., 5.)?, 0.);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Excitatory and inhibitory currents
//!
//! ```rust
//! use exponential_synapses::{
//!     error::SynapseError,
//!     synapse::{
//!         excitatory_current, inhibitory_current, synaptic_current,
//!         AMPADefault, SingleExponentialSynapse,
//!     },
//! };
//!
//! fn main() -> Result<(), SynapseError> {
//!     let spikes = [0., 2.5, 4.];
//!     let voltage = -65.;
//!
//!     let i_ampa = excitatory_current(5., voltage, &spikes)?;
//!     assert_eq!(i_ampa, synaptic_current(5., voltage, &spikes, 50., 4., 0.)?);
//!
//!     let i_gaba = inhibitory_current(5., voltage, &spikes)?;
//!     assert_eq!(i_gaba, synaptic_current(5., voltage, &spikes, 50., 8., -70.)?);
//!
//!     // presets can be customized with struct update syntax
//!     let weak_ampa = SingleExponentialSynapse {
//!         g_max: 10.,
//!         ..SingleExponentialSynapse::ampa_default()
//!     };
//!     assert!(weak_ampa.current(5., voltage, &spikes)?.abs() < i_ampa.abs());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Conductance over time
//!
//! ```rust
//! use exponential_synapses::{
//!     error::SynapticKineticsError,
//!     synapse::{GABAaDefault, SingleExponentialSynapse},
//!     trace::{conductance_trace, time_grid},
//! };
//!
//! fn main() -> Result<(), SynapticKineticsError> {
//!     let synapse = SingleExponentialSynapse::gabaa_default();
//!     let times = time_grid(0., 100., 0.1)?;
//!
//!     let trace = conductance_trace(&synapse, times.view(), &[10., 40.])?;
//!     assert_eq!(trace.len(), times.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod synapse;
pub mod trace;
