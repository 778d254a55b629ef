#[cfg(test)]
mod tests {
    use ndarray::Array1;
    extern crate exponential_synapses;
    use exponential_synapses::{
        error::{SynapseError, SynapticKineticsError, TraceError},
        synapse::{AMPADefault, GABAaDefault, SingleExponentialSynapse},
        trace::{conductance_trace, current_trace, time_grid, MAX_TIME_POINTS},
    };


    #[test]
    pub fn test_time_grid() -> Result<(), TraceError> {
        let grid = time_grid(0., 1., 0.25)?;

        assert_eq!(grid, Array1::from_vec(vec![0., 0.25, 0.5, 0.75]));

        Ok(())
    }

    #[test]
    pub fn test_invalid_time_grid() {
        assert_eq!(time_grid(0., 1., 0.), Err(TraceError::NonPositiveTimestep));
        assert_eq!(time_grid(0., 1., -0.1), Err(TraceError::NonPositiveTimestep));
        assert_eq!(time_grid(0., 1., f64::NAN), Err(TraceError::NonPositiveTimestep));
        assert_eq!(time_grid(1., 0., 0.1), Err(TraceError::InvalidInterval));
        assert_eq!(time_grid(0., f64::INFINITY, 0.1), Err(TraceError::InvalidInterval));
    }

    #[test]
    pub fn test_time_grid_point_limit() -> Result<(), TraceError> {
        assert_eq!(time_grid(-f64::MAX, f64::MAX, 1.), Err(TraceError::TooManyTimePoints));
        assert_eq!(time_grid(0., 1e9, 1e-3), Err(TraceError::TooManyTimePoints));
        assert_eq!(
            time_grid(0., MAX_TIME_POINTS as f64 + 1., 1.),
            Err(TraceError::TooManyTimePoints),
        );

        let grid = time_grid(0., 1000., 0.5)?;
        assert_eq!(grid.len(), 2000);
        assert!(grid.len() <= MAX_TIME_POINTS);

        Ok(())
    }

    #[test]
    pub fn test_conductance_trace_matches_scalar() -> Result<(), SynapticKineticsError> {
        let synapse = SingleExponentialSynapse::ampa_default();
        let spikes = [5., 12.5, 30.];
        let times = time_grid(0., 50., 0.5)?;

        let trace = conductance_trace(&synapse, times.view(), &spikes)?;

        assert_eq!(trace.len(), times.len());
        for (t, g) in times.iter().zip(trace.iter()) {
            assert_eq!(*g, synapse.conductance(*t, &spikes)?);
        }

        Ok(())
    }

    #[test]
    pub fn test_current_trace_matches_scalar() -> Result<(), SynapticKineticsError> {
        let synapse = SingleExponentialSynapse::gabaa_default();
        let spikes = [1., 3., 20.];
        let times = time_grid(0., 40., 1.)?;
        let voltages = times.mapv(|t| -65. + 0.5 * t);

        let trace = current_trace(&synapse, times.view(), voltages.view(), &spikes)?;

        assert_eq!(trace.len(), times.len());
        for ((t, voltage), current) in times.iter().zip(voltages.iter()).zip(trace.iter()) {
            assert_eq!(*current, synapse.current(*t, *voltage, &spikes)?);
        }

        Ok(())
    }

    #[test]
    pub fn test_trace_before_first_spike() -> Result<(), SynapticKineticsError> {
        let synapse = SingleExponentialSynapse::default();
        let times = time_grid(0., 10., 1.)?;

        let trace = conductance_trace(&synapse, times.view(), &[10.])?;

        assert!(trace.iter().all(|g| *g == 0.));

        Ok(())
    }

    #[test]
    pub fn test_empty_times() -> Result<(), SynapticKineticsError> {
        let synapse = SingleExponentialSynapse::default();
        let times: Array1<f64> = Array1::from_vec(vec![]);

        let trace = current_trace(&synapse, times.view(), times.view(), &[1.])?;

        assert!(trace.is_empty());

        Ok(())
    }

    #[test]
    pub fn test_invalid_traces() {
        let synapse = SingleExponentialSynapse::default();
        let times = Array1::from_vec(vec![0., 1., 2.]);
        let voltages = Array1::from_vec(vec![-65., -65.]);

        assert_eq!(
            current_trace(&synapse, times.view(), voltages.view(), &[1.]),
            Err(SynapticKineticsError::TraceRelatedError(TraceError::LengthMismatch)),
        );

        let voltages = Array1::from_vec(vec![-65., f64::NAN, -65.]);
        assert_eq!(
            current_trace(&synapse, times.view(), voltages.view(), &[1.]),
            Err(SynapticKineticsError::SynapseRelatedError(SynapseError::InvalidVoltage)),
        );

        let broken = SingleExponentialSynapse { tau: 0., ..SingleExponentialSynapse::default() };
        assert_eq!(
            conductance_trace(&broken, times.view(), &[1.]),
            Err(SynapseError::NonPositiveTimeConstant),
        );
        assert_eq!(
            conductance_trace(&synapse, times.view(), &[f64::NAN]),
            Err(SynapseError::InvalidSpikeTime),
        );
    }
}
