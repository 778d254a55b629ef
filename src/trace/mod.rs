//! Evaluates synapses over a series of time points in parallel.

use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use crate::{
    error::{SynapseError, SynapticKineticsError, TraceError},
    synapse::{
        check_spikes, check_time, check_voltage, driving_current,
        sum_conductance, SingleExponentialSynapse,
    },
};


/// Maximum number of time points [`time_grid`] will generate (80 MB of `f64`)
pub const MAX_TIME_POINTS: usize = 10_000_000;

/// Generates evenly spaced time points (ms) from `start` up to but not including `stop`
/// separated by the timestep `dt` (ms), at most [`MAX_TIME_POINTS`] points are generated
pub fn time_grid(start: f64, stop: f64, dt: f64) -> Result<Array1<f64>, TraceError> {
    if !dt.is_finite() || dt <= 0. {
        debug!("rejected timestep: {}", dt);
        return Err(TraceError::NonPositiveTimestep);
    }
    if !start.is_finite() || !stop.is_finite() || stop < start {
        debug!("rejected interval: [{}, {})", start, stop);
        return Err(TraceError::InvalidInterval);
    }

    let n = ((stop - start) / dt).ceil();
    if !n.is_finite() || n > MAX_TIME_POINTS as f64 {
        debug!("rejected interval: [{}, {}) with timestep {} generates {} time points", start, stop, dt, n);
        return Err(TraceError::TooManyTimePoints);
    }

    Ok(Array1::range(start, stop, dt))
}

fn check_times(times: &ArrayView1<f64>) -> Result<(), SynapseError> {
    for t in times.iter() {
        check_time(*t)?;
    }

    Ok(())
}

/// Calculates the conductance (nS) of the synapse at every time point (ms) in `times`,
/// element `i` of the output is the conductance at `times[i]`
pub fn conductance_trace(
    synapse: &SingleExponentialSynapse,
    times: ArrayView1<f64>,
    spikes: &[f64],
) -> Result<Array1<f64>, SynapseError> {
    synapse.validate()?;
    check_times(&times)?;
    check_spikes(spikes)?;

    trace!("evaluating conductance at {} time points over {} spikes", times.len(), spikes.len());

    let (g_max, tau) = (synapse.g_max, synapse.tau);
    let values: Vec<f64> = (0..times.len())
        .into_par_iter()
        .map(|i| sum_conductance(times[i], spikes, g_max, tau))
        .collect();

    Ok(Array1::from_vec(values))
}

/// Calculates the current of the synapse at every time point (ms) in `times` given the
/// membrane potential (mV) at each of those time points, `times` and `voltages` must
/// be the same length
pub fn current_trace(
    synapse: &SingleExponentialSynapse,
    times: ArrayView1<f64>,
    voltages: ArrayView1<f64>,
    spikes: &[f64],
) -> Result<Array1<f64>, SynapticKineticsError> {
    if times.len() != voltages.len() {
        return Err(TraceError::LengthMismatch.into());
    }
    for voltage in voltages.iter() {
        check_voltage(*voltage, synapse.reversal)?;
    }

    let conductances = conductance_trace(synapse, times, spikes)?;

    let reversal = synapse.reversal;
    let values: Vec<f64> = (0..conductances.len())
        .into_par_iter()
        .map(|i| driving_current(conductances[i], voltages[i], reversal))
        .collect();

    Ok(Array1::from_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() -> Result<(), TraceError> {
        let grid = time_grid(3., 3., 0.1)?;

        assert!(grid.is_empty());

        Ok(())
    }

    #[test]
    fn test_check_times_rejects_nan() {
        let times = Array1::from_vec(vec![0., f64::NAN, 2.]);

        assert_eq!(check_times(&times.view()), Err(SynapseError::InvalidTime));
    }
}
