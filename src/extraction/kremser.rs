//! Kremser-Brown-Souders 식으로 향류 액-액 추출의 이론 평형 단수를 계산한다.
//!
//! ```text
//!         ln[ x_p(1 - x_f) / (x_f(1 - x_p)) ]
//!   N  =  -----------------------------------
//!                      ln(β)
//! ```
//!
//! - x_p: 목표 제품 순도(분율), x_f: 원료 순도(분율), β: 분리계수
//! - 희박 용액, 일정 분배비, 단마다 평형을 가정한다.

use log::debug;

use crate::boltzmann;
use crate::error::CalcError;

/// 목표 순도 기본값 (자석 등급 Nd 99.9%)
pub const DEFAULT_TARGET_PURITY: f64 = 0.999;
/// 원료 순도 기본값 (Fe 리치 침출액 중 Nd 10%)
pub const DEFAULT_FEED_PURITY: f64 = 0.10;
/// 실제 믹서-세틀러 단 효율 기본값
pub const DEFAULT_STAGE_EFFICIENCY: f64 = 0.9;

/// 단수 계산의 중간값. 상세 보고서 출력용.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBreakdown {
    pub beta: f64,
    pub feed_purity: f64,
    pub target_purity: f64,
    /// x_p(1-x_f) / (x_f(1-x_p))
    pub separation_degree: f64,
    pub ln_separation_degree: f64,
    pub ln_beta: f64,
    /// 이론 단수 N
    pub stages: f64,
}

fn require_separable(beta: f64) -> Result<(), CalcError> {
    if beta > 1.0 {
        Ok(())
    } else {
        Err(CalcError::invalid(format!(
            "분리계수 β는 1보다 커야 분리가 일어납니다. 입력값 β = {beta:.4}"
        )))
    }
}

fn require_purity_order(target_purity: f64, feed_purity: f64) -> Result<(), CalcError> {
    let ordered = 0.0 < feed_purity && feed_purity < target_purity && target_purity < 1.0;
    if ordered {
        Ok(())
    } else {
        Err(CalcError::invalid(format!(
            "순도는 0 < feed_purity < target_purity < 1 이어야 합니다. \
             입력값 feed = {feed_purity}, target = {target_purity}"
        )))
    }
}

/// 분리도 x_p(1-x_f) / (x_f(1-x_p)) 를 계산한다. 순서가 맞으면 항상 1보다 크다.
pub fn separation_degree(target_purity: f64, feed_purity: f64) -> Result<f64, CalcError> {
    require_purity_order(target_purity, feed_purity)?;
    Ok((target_purity * (1.0 - feed_purity)) / (feed_purity * (1.0 - target_purity)))
}

/// 이론 평형 단수 N을 계산한다.
///
/// β ≤ 1 이거나 `0 < feed < target < 1` 이 아니면 [`CalcError::InvalidParameter`].
/// β가 1에 가까워질수록 N은 무한히 커지며 이는 유효한 결과다.
/// 실제 단수(올림, 효율 보정)는 호출 측 책임이다. [`practical_stages`] 참고.
pub fn stage_count(beta: f64, target_purity: f64, feed_purity: f64) -> Result<f64, CalcError> {
    Ok(stage_breakdown(beta, target_purity, feed_purity)?.stages)
}

/// 단수 계산의 중간값을 모두 반환한다.
pub fn stage_breakdown(
    beta: f64,
    target_purity: f64,
    feed_purity: f64,
) -> Result<StageBreakdown, CalcError> {
    require_separable(beta)?;
    let degree = separation_degree(target_purity, feed_purity)?;
    let ln_degree = degree.ln();
    let ln_beta = beta.ln();
    let stages = ln_degree / ln_beta;
    debug!(
        "kremser: beta={beta}, x_f={feed_purity}, x_p={target_purity}, degree={degree:.2}, N={stages:.4}"
    );
    Ok(StageBreakdown {
        beta,
        feed_purity,
        target_purity,
        separation_degree: degree,
        ln_separation_degree: ln_degree,
        ln_beta,
        stages,
    })
}

/// 이론 단수를 단 효율로 나눈 뒤 올림한 실제 단수. 최소 1단.
///
/// 기준 추출제와 후보 추출제 모두 같은 올림 규칙을 쓴다.
/// β → 1⁺ 에서는 단수가 매우 커지므로 `u64` 로 돌려주고, 그 범위도 넘으면 오류로 처리한다.
pub fn practical_stages(theoretical_stages: f64, efficiency: f64) -> Result<u64, CalcError> {
    if !(efficiency > 0.0 && efficiency <= 1.0) {
        return Err(CalcError::invalid(format!(
            "단 효율은 (0, 1] 범위여야 합니다. 입력값 = {efficiency}"
        )));
    }
    if !(theoretical_stages.is_finite() && theoretical_stages >= 0.0) {
        return Err(CalcError::invalid(format!(
            "이론 단수는 0 이상의 유한값이어야 합니다. 입력값 N = {theoretical_stages}"
        )));
    }
    let stages = (theoretical_stages / efficiency).ceil();
    if stages >= u64::MAX as f64 {
        return Err(CalcError::invalid(format!(
            "실제 단수가 표현 범위를 넘습니다. N / η = {stages:e}"
        )));
    }
    Ok((stages as u64).max(1))
}

/// DFT 결합에너지 차이로부터 이론 분리계수를 추정한다. β = exp(ΔΔE / RT)
///
/// 엔트로피 기여를 무시하므로 분리계수의 상한에 해당한다.
/// ΔΔE가 크면 +∞ 로 발산할 수 있다.
pub fn separation_factor_from_binding_energy(
    delta_delta_e_kj_mol: f64,
    temperature_k: f64,
) -> Result<f64, CalcError> {
    boltzmann::boltzmann_factor(delta_delta_e_kj_mol, temperature_k)
}
