//! PFAS 흡착제 비교. 기준 흡착제 대비 상대 수명과 운전 기간 환산값을 계산한다.

use serde::{Deserialize, Serialize};

use super::lifetime::{self, DEFAULT_TEMPERATURE_K, REFERENCE_BINDING_KJ_MOL};
use super::screening::IRREVERSIBILITY_THRESHOLD_KJ_MOL;
use crate::error::CalcError;

/// 흡착제 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adsorbent {
    pub name: String,
    /// 결합에너지 [kJ/mol], 음수일수록 강한 결합
    pub binding_energy_kj_mol: f64,
    pub mechanism: String,
    pub source: String,
}

impl Adsorbent {
    pub fn new(name: &str, binding_energy_kj_mol: f64, mechanism: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            binding_energy_kj_mol,
            mechanism: mechanism.to_string(),
            source: source.to_string(),
        }
    }
}

/// 기준 흡착제 (입상 활성탄).
pub fn default_reference() -> Adsorbent {
    Adsorbent::new(
        "GAC (Standard)",
        REFERENCE_BINDING_KJ_MOL,
        "Non-specific van der Waals",
        "Literature consensus",
    )
}

/// 비교 후보 흡착제 목록.
pub fn default_candidates() -> Vec<Adsorbent> {
    vec![
        Adsorbent::new(
            "IX Resin",
            -60.0,
            "Electrostatic (sulfonate -> quaternary amine)",
            "Literature consensus",
        ),
        Adsorbent::new(
            "Fluorocatcher (conservative)",
            -85.0,
            "Pre-organized binding pocket",
            "DFT (30 calculations, 100% convergence)",
        ),
        Adsorbent::new(
            "Fluorocatcher FC-8 (best)",
            -121.0,
            "Optimized for C8 perfluoroalkyl chain",
            "DFT task fluoro_fc8_pfoa, CONVERGED",
        ),
    ]
}

/// 수명 비교 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsorptionScenario {
    pub temperature_k: f64,
    /// 비가역 결합 임계값 [kJ/mol]
    pub threshold_kj_mol: f64,
    /// 기준 흡착제의 파과까지 운전 기간 [월]
    pub reference_service_months: f64,
}

impl Default for AdsorptionScenario {
    fn default() -> Self {
        Self {
            temperature_k: DEFAULT_TEMPERATURE_K,
            threshold_kj_mol: IRREVERSIBILITY_THRESHOLD_KJ_MOL,
            reference_service_months: 6.0,
        }
    }
}

/// 흡착제별 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct AdsorbentResult {
    pub adsorbent: Adsorbent,
    /// 기준 대비 상대 수명
    pub relative_lifetime: f64,
    /// 기준 운전 기간 × 상대 수명 [월]
    pub service_months: f64,
    pub is_reference: bool,
}

/// 흡착제 비교 결과. 첫 줄은 항상 기준 흡착제(배수 1.0)이다.
#[derive(Debug, Clone, PartialEq)]
pub struct AdsorptionAudit {
    pub scenario: AdsorptionScenario,
    pub results: Vec<AdsorbentResult>,
    /// 임계값 결합에너지에서의 기준 대비 수명 배수
    pub threshold_factor: f64,
}

impl AdsorptionAudit {
    pub fn reference(&self) -> &AdsorbentResult {
        &self.results[0]
    }

    /// 상대 수명이 가장 긴 후보. 후보가 없으면 None.
    pub fn best_candidate(&self) -> Option<&AdsorbentResult> {
        self.results
            .iter()
            .skip(1)
            .max_by(|a, b| a.relative_lifetime.total_cmp(&b.relative_lifetime))
    }
}

/// 기준 흡착제 대비 각 후보의 상대 수명을 계산한다.
pub fn audit_adsorbents(
    scenario: &AdsorptionScenario,
    reference: &Adsorbent,
    candidates: &[Adsorbent],
) -> Result<AdsorptionAudit, CalcError> {
    let mut results = Vec::with_capacity(candidates.len() + 1);
    let reference_factor = lifetime::lifetime_factor(
        reference.binding_energy_kj_mol,
        reference.binding_energy_kj_mol,
        scenario.temperature_k,
    )?;
    results.push(AdsorbentResult {
        adsorbent: reference.clone(),
        relative_lifetime: reference_factor,
        service_months: scenario.reference_service_months * reference_factor,
        is_reference: true,
    });
    for candidate in candidates {
        let factor = lifetime::lifetime_factor(
            candidate.binding_energy_kj_mol,
            reference.binding_energy_kj_mol,
            scenario.temperature_k,
        )?;
        results.push(AdsorbentResult {
            adsorbent: candidate.clone(),
            relative_lifetime: factor,
            service_months: scenario.reference_service_months * factor,
            is_reference: false,
        });
    }
    let threshold_factor = lifetime::lifetime_factor(
        scenario.threshold_kj_mol,
        reference.binding_energy_kj_mol,
        scenario.temperature_k,
    )?;
    Ok(AdsorptionAudit {
        scenario: *scenario,
        results,
        threshold_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_audit() -> AdsorptionAudit {
        audit_adsorbents(
            &AdsorptionScenario::default(),
            &default_reference(),
            &default_candidates(),
        )
        .unwrap()
    }

    #[test]
    fn reference_row_is_exactly_one() {
        let audit = default_audit();
        assert!(audit.reference().is_reference);
        assert_eq!(audit.reference().relative_lifetime, 1.0);
        assert_eq!(audit.reference().service_months, 6.0);
    }

    #[test]
    fn factors_grow_with_binding_strength() {
        let audit = default_audit();
        let factors: Vec<f64> = audit.results.iter().map(|r| r.relative_lifetime).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(factors[2], 1.027_103_7e7, max_relative = 1e-6);
    }

    #[test]
    fn best_candidate_is_fc8() {
        let audit = default_audit();
        let best = audit.best_candidate().unwrap();
        assert_eq!(best.adsorbent.name, "Fluorocatcher FC-8 (best)");
        assert_relative_eq!(best.service_months, 6.0 * best.relative_lifetime);
    }

    #[test]
    fn threshold_factor_sits_between_ix_and_fluorocatcher() {
        let audit = default_audit();
        assert!(audit.threshold_factor > audit.results[1].relative_lifetime);
        assert!(audit.threshold_factor < audit.results[2].relative_lifetime);
    }

    #[test]
    fn no_candidates_means_no_best() {
        let audit =
            audit_adsorbents(&AdsorptionScenario::default(), &default_reference(), &[]).unwrap();
        assert_eq!(audit.results.len(), 1);
        assert!(audit.best_candidate().is_none());
    }

    #[test]
    fn bad_temperature_is_reported() {
        let scenario = AdsorptionScenario {
            temperature_k: -1.0,
            ..AdsorptionScenario::default()
        };
        assert!(audit_adsorbents(&scenario, &default_reference(), &default_candidates()).is_err());
    }
}
