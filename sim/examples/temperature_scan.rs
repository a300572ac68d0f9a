use ising::{analysis, Simulation, SimulationConfig};

/// Independent fixed-temperature runs on either side of T_c
///
/// Each temperature gets its own seeded simulation: equilibrate, then sample
/// energy and magnetization once per sweep.
fn main() -> ising::Result<()> {
    let lattice_size = 32;
    let equilibration_sweeps = 1000;
    let sampling_sweeps = 2000;
    let t_critical = analysis::critical_temperature();
    let sites = lattice_size * lattice_size;

    println!("2D Ising model, {0}x{0} lattice, T_c = {1:.4}", lattice_size, t_critical);
    println!("{:>8} {:>8} {:>10} {:>10} {:>10} {:>10}", "T", "T/Tc", "E", "|M|", "C", "chi");

    for (i, temperature) in [1.5, 2.0, 2.2, 2.269, 2.4, 2.6, 3.0, 3.5].into_iter().enumerate() {
        let config = SimulationConfig::default()
            .with_size(lattice_size)
            .with_temperature(temperature)
            .with_seed(1000 + i as u64);
        let mut ising = Simulation::new(config)?;
        ising.run(equilibration_sweeps);

        let mut energies = Vec::with_capacity(sampling_sweeps);
        let mut magnetizations = Vec::with_capacity(sampling_sweeps);
        let mut abs_magnetizations = Vec::with_capacity(sampling_sweeps);
        for _ in 0..sampling_sweeps {
            ising.advance_sweep();
            energies.push(ising.total_energy());
            magnetizations.push(ising.total_magnetization());
            abs_magnetizations.push(ising.abs_magnetization_per_site());
        }

        println!(
            "{:8.4} {:8.4} {:10.4} {:10.4} {:10.4} {:10.4}",
            temperature,
            temperature / t_critical,
            analysis::mean(&energies) / sites as f64,
            analysis::mean(&abs_magnetizations),
            analysis::specific_heat(&energies, temperature, sites),
            analysis::susceptibility(&magnetizations, temperature, sites)
        );
    }

    Ok(())
}
