//! 희토류(Nd/Fe) 분리 기술 비교. 기준 추출제 대비 후보 추출제의 단수 절감을 계산한다.

use serde::{Deserialize, Serialize};

use super::kremser::{
    self, StageBreakdown, DEFAULT_FEED_PURITY, DEFAULT_STAGE_EFFICIENCY, DEFAULT_TARGET_PURITY,
};
use crate::error::CalcError;

/// 비교 대상 추출제 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extractant {
    pub name: String,
    /// 분리계수 β (Nd/Fe)
    pub beta: f64,
    /// 값의 출처
    pub source: String,
}

impl Extractant {
    pub fn new(name: &str, beta: f64, source: &str) -> Self {
        Self {
            name: name.to_string(),
            beta,
            source: source.to_string(),
        }
    }
}

/// 기본 비교표. 첫 줄이 기준(산업 표준), 마지막 줄이 후보 기술이다.
pub fn default_extractants() -> Vec<Extractant> {
    vec![
        Extractant::new(
            "P507 (Industrial Standard)",
            2.5,
            "Gupta & Krishnamurthy (2005)",
        ),
        Extractant::new(
            "Janus Ligand",
            11_000.0,
            "DFT (73 calculations, 98.6% convergence), conservative cap",
        ),
    ]
}

/// 분리 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionScenario {
    pub target_purity: f64,
    pub feed_purity: f64,
    /// 믹서-세틀러 단 효율(0~1]
    pub stage_efficiency: f64,
}

impl Default for ExtractionScenario {
    fn default() -> Self {
        Self {
            target_purity: DEFAULT_TARGET_PURITY,
            feed_purity: DEFAULT_FEED_PURITY,
            stage_efficiency: DEFAULT_STAGE_EFFICIENCY,
        }
    }
}

/// 추출제별 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractantResult {
    pub extractant: Extractant,
    pub theoretical_stages: f64,
    pub practical_stages: u64,
    /// 상세 보고서용 중간값
    pub breakdown: StageBreakdown,
}

/// 기준 대비 후보 기술의 비교 지표.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSummary {
    /// β_candidate / β_baseline
    pub selectivity_improvement: f64,
    /// N_baseline / N_candidate
    pub stage_reduction: f64,
    /// (N_baseline - N_candidate) / N_baseline × 100
    pub capex_reduction_pct: f64,
}

/// 분리 감사 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionAudit {
    pub scenario: ExtractionScenario,
    pub results: Vec<ExtractantResult>,
    /// 추출제가 2개 이상이고 양쪽 이론 단수가 모두 0 보다 클 때만 존재
    pub summary: Option<ComparisonSummary>,
}

impl ExtractionAudit {
    pub fn baseline(&self) -> Option<&ExtractantResult> {
        self.results.first()
    }

    pub fn candidate(&self) -> Option<&ExtractantResult> {
        if self.results.len() < 2 {
            return None;
        }
        self.results.last()
    }
}

/// 모든 추출제의 이론/실제 단수를 계산하고 첫 줄 대비 마지막 줄을 비교한다.
pub fn audit_extractants(
    scenario: &ExtractionScenario,
    extractants: &[Extractant],
) -> Result<ExtractionAudit, CalcError> {
    let results = extractants
        .iter()
        .map(|ex| {
            let breakdown =
                kremser::stage_breakdown(ex.beta, scenario.target_purity, scenario.feed_purity)?;
            let practical =
                kremser::practical_stages(breakdown.stages, scenario.stage_efficiency)?;
            Ok(ExtractantResult {
                extractant: ex.clone(),
                theoretical_stages: breakdown.stages,
                practical_stages: practical,
                breakdown,
            })
        })
        .collect::<Result<Vec<_>, CalcError>>()?;

    let summary = match (results.first(), results.last()) {
        (Some(base), Some(cand)) if results.len() >= 2 => compare(base, cand),
        _ => None,
    };

    Ok(ExtractionAudit {
        scenario: *scenario,
        results,
        summary,
    })
}

/// 어느 한쪽의 이론 단수가 0 이면 (β = ∞) 비율이 정의되지 않으므로 비교하지 않는다.
fn compare(base: &ExtractantResult, cand: &ExtractantResult) -> Option<ComparisonSummary> {
    let n_base = base.theoretical_stages;
    let n_cand = cand.theoretical_stages;
    if n_base == 0.0 || n_cand == 0.0 {
        log::debug!(
            "단수 비교 생략: {} N = {n_base}, {} N = {n_cand}",
            base.extractant.name,
            cand.extractant.name
        );
        return None;
    }
    Some(ComparisonSummary {
        selectivity_improvement: cand.extractant.beta / base.extractant.beta,
        stage_reduction: n_base / n_cand,
        capex_reduction_pct: (n_base - n_cand) / n_base * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_audit_compares_p507_and_janus() {
        let audit = audit_extractants(&ExtractionScenario::default(), &default_extractants())
            .unwrap();
        assert_eq!(audit.results.len(), 2);
        let base = audit.baseline().unwrap();
        let cand = audit.candidate().unwrap();
        assert_eq!(base.practical_stages, 12);
        assert_eq!(cand.practical_stages, 2);

        let s = audit.summary.unwrap();
        assert_relative_eq!(s.selectivity_improvement, 4400.0);
        assert_relative_eq!(
            s.stage_reduction,
            base.theoretical_stages / cand.theoretical_stages
        );
        assert!(s.capex_reduction_pct > 90.0 && s.capex_reduction_pct < 100.0);
    }

    #[test]
    fn single_extractant_has_no_summary() {
        let audit = audit_extractants(
            &ExtractionScenario::default(),
            &[Extractant::new("only", 3.0, "-")],
        )
        .unwrap();
        assert!(audit.summary.is_none());
        assert!(audit.candidate().is_none());
    }

    #[test]
    fn infinite_baseline_beta_skips_comparison() {
        let rows = vec![
            Extractant::new("perfect", f64::INFINITY, "-"),
            Extractant::new("janus", 11_000.0, "-"),
        ];
        let audit = audit_extractants(&ExtractionScenario::default(), &rows).unwrap();
        assert_eq!(audit.baseline().unwrap().theoretical_stages, 0.0);
        assert_eq!(audit.baseline().unwrap().practical_stages, 1);
        assert!(audit.summary.is_none());
        assert!(audit.candidate().is_some());
    }

    #[test]
    fn invalid_row_fails_the_audit() {
        let rows = vec![
            Extractant::new("ok", 3.0, "-"),
            Extractant::new("bad", 1.0, "-"),
        ];
        assert!(audit_extractants(&ExtractionScenario::default(), &rows).is_err());
    }
}
