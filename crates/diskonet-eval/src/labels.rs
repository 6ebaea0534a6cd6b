//! Text formatting for parameter and colour-bar labels.

/// Jupiter's mass in solar masses.
pub const JUPITER_MASS: f64 = 9.548e-4;

/// Convert a planet-to-star mass ratio into Jupiter masses.
pub fn planet_mass_in_jupiter(mass_ratio: f64) -> f64 {
    mass_ratio / JUPITER_MASS
}

/// Format `f` with one decimal of mantissa as a LaTeX power of ten.
///
/// ```
/// use diskonet_eval::labels::latex_float;
///
/// assert_eq!(latex_float(0.00123), r"$1.2 \times 10^{-3}$");
/// assert_eq!(latex_float(f64::NAN), "NaN");
/// ```
pub fn latex_float(f: f64) -> String {
    let formatted = format!("{f:.1e}");
    match formatted.split_once('e') {
        Some((base, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(r"${base} \times 10^{{{exp}}}$"),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latex_float_handles_sign_and_positive_exponents() {
        assert_eq!(latex_float(-2.5e4), r"$-2.5 \times 10^{4}$");
        assert_eq!(latex_float(1.0), r"$1.0 \times 10^{0}$");
    }

    #[test]
    fn infinities_pass_through() {
        assert_eq!(latex_float(f64::INFINITY), "inf");
    }

    #[test]
    fn one_jupiter_mass() {
        assert!((planet_mass_in_jupiter(9.548e-4) - 1.0).abs() < 1e-12);
    }
}
