//! Utility functions for analyzing Ising model results

/// Critical temperature of the square-lattice Ising model (Onsager)
/// T_c = 2J / (k_B * ln(1 + √2)) ≈ 2.269 J/k_B
pub fn critical_temperature() -> f64 {
    2.0 / (1.0 + 2.0_f64.sqrt()).ln()
}

/// Energy per site of a fully aligned lattice with J = 1.
pub fn ground_state_energy_per_site() -> f64 {
    // 4 aligned neighbors, each bond shared by two sites: -4J / 2
    -2.0
}

pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn variance(samples: &[f64]) -> f64 {
    let mean = mean(samples);
    let mean_squared = samples.iter().map(|v| v * v).sum::<f64>() / samples.len() as f64;
    mean_squared - mean * mean
}

/// Specific heat per site from total-energy samples: C = Var(E) / (T² N²).
pub fn specific_heat(energy_samples: &[f64], temperature: f64, sites: usize) -> f64 {
    if energy_samples.len() < 2 {
        return 0.0;
    }
    variance(energy_samples) / (temperature * temperature * sites as f64)
}

/// Magnetic susceptibility per site from total-magnetization samples:
/// χ = Var(M) / (T N²).
pub fn susceptibility(magnetization_samples: &[f64], temperature: f64, sites: usize) -> f64 {
    if magnetization_samples.len() < 2 {
        return 0.0;
    }
    variance(magnetization_samples) / (temperature * sites as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_critical_temperature() {
        assert_relative_eq!(critical_temperature(), 2.269, epsilon = 0.001);
    }

    #[test]
    fn test_fluctuations_need_two_samples() {
        assert_eq!(specific_heat(&[], 1.0, 4), 0.0);
        assert_eq!(specific_heat(&[-8.0], 1.0, 4), 0.0);
        assert_eq!(susceptibility(&[4.0], 1.0, 4), 0.0);
    }

    #[test]
    fn test_specific_heat_and_susceptibility() {
        // Var = 1 for samples {-1, 1}
        let samples = [-1.0, 1.0, -1.0, 1.0];
        assert_relative_eq!(specific_heat(&samples, 2.0, 4), 1.0 / 16.0, epsilon = 1e-12);
        assert_relative_eq!(susceptibility(&samples, 2.0, 4), 1.0 / 8.0, epsilon = 1e-12);

        let constant = [-32.0; 10];
        assert_relative_eq!(specific_heat(&constant, 1.0, 16), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
