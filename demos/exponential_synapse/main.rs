use std::{
    fs::File,
    io::{BufWriter, Write},
};
extern crate exponential_synapses;
use exponential_synapses::synapse::{AMPADefault, GABAaDefault, SingleExponentialSynapse};
use exponential_synapses::trace::{conductance_trace, current_trace, time_grid};


// Evaluates an excitatory and an inhibitory synapse receiving the same
// presynaptic spike train while the membrane is held at -65 mV, .csv containing
// the conductances and currents is written to a file in the working directory
fn main() {
    env_logger::init();

    let ampa = SingleExponentialSynapse::ampa_default();
    let gabaa = SingleExponentialSynapse::gabaa_default();

    let spikes = [10., 15., 40., 42.5, 45., 70.];
    let times = time_grid(0., 100., 0.1).expect("Could not create time grid");
    let voltages = times.mapv(|_| -65_f64);

    let ampa_conductances = conductance_trace(&ampa, times.view(), &spikes)
        .expect("Could not calculate AMPA conductance");
    let gabaa_conductances = conductance_trace(&gabaa, times.view(), &spikes)
        .expect("Could not calculate GABAa conductance");
    let ampa_currents = current_trace(&ampa, times.view(), voltages.view(), &spikes)
        .expect("Could not calculate AMPA current");
    let gabaa_currents = current_trace(&gabaa, times.view(), voltages.view(), &spikes)
        .expect("Could not calculate GABAa current");

    let mut file = BufWriter::new(File::create("exponential_synapse.csv")
        .expect("Could not create file"));

    writeln!(file, "t,ampa_g,gabaa_g,ampa_i,gabaa_i").expect("Could not write to file");
    for i in 0..times.len() {
        writeln!(
            file,
            "{},{},{},{},{}",
            times[i],
            ampa_conductances[i],
            gabaa_conductances[i],
            ampa_currents[i],
            gabaa_currents[i],
        ).expect("Could not write to file");
    }
}
