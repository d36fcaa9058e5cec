//! 아레니우스 탈착 모델로 흡착제 간 상대 체류 수명을 계산한다.
//!
//! 탈착 속도 k = A·exp(-E_a / RT), E_a ≈ |결합에너지| 이므로
//! 수명 τ ∝ exp(|E| / RT) 이고 두 흡착제의 수명비는
//! τ_new / τ_ref = exp[(|E_new| - |E_ref|) / RT] 이다.
//! 전지수 인자 A가 두 흡착제에서 같다고 가정한다.

use log::debug;

use crate::boltzmann;
use crate::error::CalcError;

pub use crate::boltzmann::DEFAULT_TEMPERATURE_K;

/// 기준 흡착제(GAC) 결합에너지 [kJ/mol]
pub const REFERENCE_BINDING_KJ_MOL: f64 = -45.0;
/// 고유속 GAC 접촉조의 기준 파과 시간 [h]
pub const REFERENCE_LIFETIME_HOURS: f64 = 48.0;

/// 상대 수명 배수 τ_new / τ_ref 를 계산한다.
///
/// 결합에너지는 부호와 무관하게 크기만 사용한다.
/// |new| > |reference| 이면 1보다 크고, 인자를 바꾸면 역수가 된다.
/// T ≤ 0 이면 [`CalcError::InvalidParameter`].
pub fn lifetime_factor(
    binding_energy_new: f64,
    binding_energy_reference: f64,
    temperature_k: f64,
) -> Result<f64, CalcError> {
    let delta_e = binding_energy_new.abs() - binding_energy_reference.abs();
    let factor = boltzmann::boltzmann_factor(delta_e, temperature_k)?;
    debug!(
        "lifetime: E_new={binding_energy_new}, E_ref={binding_energy_reference}, T={temperature_k}, factor={factor:e}"
    );
    Ok(factor)
}

/// 기준 흡착제의 수명에 상대 배수를 곱해 절대 수명을 추정한다.
///
/// 결과 단위는 `reference_lifetime`의 단위를 따른다.
pub fn absolute_lifetime(
    binding_energy: f64,
    reference_binding: f64,
    reference_lifetime: f64,
    temperature_k: f64,
) -> Result<f64, CalcError> {
    let factor = lifetime_factor(binding_energy, reference_binding, temperature_k)?;
    Ok(reference_lifetime * factor)
}

/// 단일 수명 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifetimeEstimate {
    pub binding_energy_new: f64,
    pub binding_energy_reference: f64,
    pub temperature_k: f64,
    pub factor: f64,
    pub reference_lifetime: f64,
    /// reference_lifetime × factor
    pub lifetime: f64,
}

pub fn estimate_lifetime(
    binding_energy_new: f64,
    binding_energy_reference: f64,
    reference_lifetime: f64,
    temperature_k: f64,
) -> Result<LifetimeEstimate, CalcError> {
    let factor = lifetime_factor(binding_energy_new, binding_energy_reference, temperature_k)?;
    Ok(LifetimeEstimate {
        binding_energy_new,
        binding_energy_reference,
        temperature_k,
        factor,
        reference_lifetime,
        lifetime: reference_lifetime * factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identical_energies_give_unity() {
        assert_eq!(lifetime_factor(-45.0, -45.0, DEFAULT_TEMPERATURE_K).unwrap(), 1.0);
    }

    #[test]
    fn conservative_fluorocatcher_vs_gac() {
        let f = lifetime_factor(-85.0, -45.0, 298.0).unwrap();
        assert_relative_eq!(f, 1.027_103_7e7, max_relative = 1e-6);
    }

    #[test]
    fn sign_does_not_matter() {
        let a = lifetime_factor(-60.0, -45.0, 298.0).unwrap();
        let b = lifetime_factor(60.0, 45.0, 298.0).unwrap();
        let c = lifetime_factor(-60.0, 45.0, 298.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn weaker_binding_shortens_lifetime() {
        let f = lifetime_factor(-30.0, -45.0, 298.0).unwrap();
        assert!(f > 0.0 && f < 1.0);
    }

    #[test]
    fn temperature_must_be_positive() {
        let CalcError::InvalidParameter(msg) = lifetime_factor(-85.0, -45.0, 0.0).unwrap_err();
        assert!(msg.contains("T = 0"), "{msg}");
        assert!(lifetime_factor(-85.0, -45.0, -10.0).is_err());
    }

    #[test]
    fn absolute_lifetime_scales_reference() {
        let hours = absolute_lifetime(
            -45.0,
            REFERENCE_BINDING_KJ_MOL,
            REFERENCE_LIFETIME_HOURS,
            DEFAULT_TEMPERATURE_K,
        )
        .unwrap();
        assert_eq!(hours, 48.0);

        let hours = absolute_lifetime(-60.0, -45.0, 48.0, 298.0).unwrap();
        let factor = lifetime_factor(-60.0, -45.0, 298.0).unwrap();
        assert_relative_eq!(hours, 48.0 * factor);
    }

    #[test]
    fn estimate_matches_absolute_lifetime() {
        let est = estimate_lifetime(-121.0, -45.0, 48.0, 298.0).unwrap();
        let hours = absolute_lifetime(-121.0, -45.0, 48.0, 298.0).unwrap();
        assert_eq!(est.lifetime, hours);
        assert_relative_eq!(est.factor, 2.099e13, max_relative = 1e-3);
    }
}
