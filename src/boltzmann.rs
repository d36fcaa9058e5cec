//! 에너지 차이를 볼츠만 인자로 바꾸는 공통 계산.

use crate::error::CalcError;

/// 기체상수 [kJ/(mol·K)]
pub const GAS_CONSTANT_KJ_PER_MOL_K: f64 = 8.314e-3;

/// 기본 온도 [K] (25 °C)
pub const DEFAULT_TEMPERATURE_K: f64 = 298.0;

/// 절대온도가 0 K보다 큰지 확인한다. NaN도 거부한다.
pub fn require_positive_temperature(temperature_k: f64) -> Result<(), CalcError> {
    if temperature_k > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid(format!(
            "온도는 0 K보다 커야 합니다. 입력값 T = {temperature_k} K"
        )))
    }
}

/// exp(ΔE / RT) 를 계산한다. ΔE [kJ/mol], T [K].
///
/// 결과는 오버플로 시 +∞, 언더플로 시 0에 수렴할 수 있으며 둘 다 유효한 값이다.
pub fn boltzmann_factor(delta_e_kj_mol: f64, temperature_k: f64) -> Result<f64, CalcError> {
    require_positive_temperature(temperature_k)?;
    Ok((delta_e_kj_mol / (GAS_CONSTANT_KJ_PER_MOL_K * temperature_k)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_energy_gives_unity() {
        assert_eq!(boltzmann_factor(0.0, DEFAULT_TEMPERATURE_K).unwrap(), 1.0);
    }

    #[test]
    fn rt_at_room_temperature() {
        // RT ≈ 2.4776 kJ/mol 에서 ΔE = RT 이면 e
        let rt = GAS_CONSTANT_KJ_PER_MOL_K * DEFAULT_TEMPERATURE_K;
        assert_relative_eq!(
            boltzmann_factor(rt, DEFAULT_TEMPERATURE_K).unwrap(),
            std::f64::consts::E,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_non_positive_temperature() {
        assert!(boltzmann_factor(10.0, 0.0).is_err());
        assert!(boltzmann_factor(10.0, -5.0).is_err());
        assert!(boltzmann_factor(10.0, f64::NAN).is_err());
    }
}
