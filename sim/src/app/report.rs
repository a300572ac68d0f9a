use crate::app::runner::RunSummary;
use ising::{analysis, Simulation};
use tracing::info;

/// Terminal stand-in for a heat map of the lattice.
pub fn render_lattice(simulation: &Simulation) {
    info!(
        "Time = {} MCS\n{}",
        simulation.sweeps(),
        simulation.lattice()
    );
}

pub fn report_summary(summary: &RunSummary) {
    let sites = summary.size * summary.size;
    let energies: Vec<f64> = summary.samples.iter().map(|s| s.energy).collect();
    let magnetizations: Vec<f64> = summary.samples.iter().map(|s| s.magnetization).collect();
    let t_c = analysis::critical_temperature();

    info!("\nSimulation finished after {} sweeps.", summary.sweeps);
    info!(
        "  Temperature: {:.4} (T/T_c = {:.4}, T_c = {:.4})",
        summary.temperature,
        summary.temperature / t_c,
        t_c
    );
    info!("  Acceptance ratio: {:.4}", summary.acceptance_ratio);

    let final_obs = &summary.final_observables;
    info!(
        "  Final energy: {:.4} ({:.6} per site)",
        final_obs.energy,
        final_obs.energy / sites as f64
    );
    info!(
        "  Final magnetization: {:+.4} (|m| = {:.6} per site)",
        final_obs.magnetization,
        (final_obs.magnetization / sites as f64).abs()
    );

    if summary.samples.len() > 1 {
        info!("\nOver {} recorded samples:", summary.samples.len());
        info!(
            "  <E>/N² = {:.6}",
            analysis::mean(&energies) / sites as f64
        );
        info!(
            "  <|M|>/N² = {:.6}",
            analysis::mean(&magnetizations.iter().map(|m| m.abs()).collect::<Vec<_>>())
                / sites as f64
        );
        info!(
            "  Specific heat: {:.6}",
            analysis::specific_heat(&energies, summary.temperature, sites)
        );
        info!(
            "  Susceptibility: {:.6}",
            analysis::susceptibility(&magnetizations, summary.temperature, sites)
        );
    }

    if !summary.snapshots.is_empty() {
        info!("  Wrote {} snapshot files", summary.snapshots.len());
    }
    if let Some(ref path) = summary.observables_file {
        info!("  Observables written to {}", path.display());
    }
}
