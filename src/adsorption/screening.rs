//! Fluorocatcher 계열 DFT 스크리닝 결과표.
//!
//! CP2K 2024.1, PBE-D3(BJ), DZVP-MOLOPT-SR-GTH, COSMO(ε = 78.4) 조건의 결합에너지.

use std::collections::BTreeSet;

/// 열역학적 "비가역" 결합 임계값 [kJ/mol]
pub const IRREVERSIBILITY_THRESHOLD_KJ_MOL: f64 = -80.0;

/// (호스트, 게스트) 결합에너지 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningRow {
    pub host: String,
    pub guest: String,
    pub binding_energy_kj_mol: f64,
}

/// 임계값 대비 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningStatus {
    ExceedsThreshold,
    BelowThreshold,
}

impl ScreeningStatus {
    /// 결합에너지가 임계값보다 더 음수이면 임계값을 넘은 것으로 본다.
    pub fn classify(binding_energy_kj_mol: f64, threshold_kj_mol: f64) -> Self {
        if binding_energy_kj_mol < threshold_kj_mol {
            ScreeningStatus::ExceedsThreshold
        } else {
            ScreeningStatus::BelowThreshold
        }
    }
}

const FLUOROCATCHER_DATA: &[(&str, &str, f64)] = &[
    ("FC-1", "PFOA", -85.2),
    ("FC-2", "PFOA", -91.7),
    ("FC-3", "PFOA", -88.4),
    ("FC-4", "PFOA", -95.1),
    ("FC-5", "PFOA", -102.3),
    ("FC-6", "PFOA", -108.6),
    ("FC-7", "PFOA", -115.2),
    ("FC-8", "PFOA", -121.0),
    ("FC-8", "PFOS", -118.5),
    ("FC-8", "PFHxS", -105.3),
    ("FC-8", "PFBS", -95.2),
    ("FC-8", "PFBA", -88.7),
    ("FC-8", "GenX", -92.1),
];

/// (호스트, 게스트) 순으로 정렬된 스크리닝 결과를 반환한다.
pub fn fluorocatcher_screening() -> Vec<ScreeningRow> {
    let mut rows: Vec<ScreeningRow> = FLUOROCATCHER_DATA
        .iter()
        .map(|&(host, guest, e)| ScreeningRow {
            host: host.to_string(),
            guest: guest.to_string(),
            binding_energy_kj_mol: e,
        })
        .collect();
    rows.sort_by(|a, b| (&a.host, &a.guest).cmp(&(&b.host, &b.guest)));
    rows
}

/// 서로 다른 호스트 수와, 모든 게스트에 대해 임계값을 넘는 호스트 수.
pub fn hosts_exceeding(rows: &[ScreeningRow], threshold_kj_mol: f64) -> (usize, usize) {
    let hosts: BTreeSet<&str> = rows.iter().map(|r| r.host.as_str()).collect();
    let exceeding = hosts
        .iter()
        .filter(|&&host| {
            rows.iter().filter(|r| r.host == host).all(|r| {
                ScreeningStatus::classify(r.binding_energy_kj_mol, threshold_kj_mol)
                    == ScreeningStatus::ExceedsThreshold
            })
        })
        .count();
    (hosts.len(), exceeding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_sorted_by_host_then_guest() {
        let rows = fluorocatcher_screening();
        assert_eq!(rows.len(), 13);
        assert!(rows
            .windows(2)
            .all(|w| (&w[0].host, &w[0].guest) <= (&w[1].host, &w[1].guest)));
        assert_eq!(rows[0].host, "FC-1");
        // FC-8 게스트는 대소문자 구분 사전순: GenX < PFBA < ...
        assert_eq!(rows[7].guest, "GenX");
    }

    #[test]
    fn classification_uses_strict_comparison() {
        use ScreeningStatus::*;
        assert_eq!(ScreeningStatus::classify(-85.2, -80.0), ExceedsThreshold);
        assert_eq!(ScreeningStatus::classify(-80.0, -80.0), BelowThreshold);
        assert_eq!(ScreeningStatus::classify(-45.0, -80.0), BelowThreshold);
    }

    #[test]
    fn every_host_exceeds_threshold() {
        let rows = fluorocatcher_screening();
        assert_eq!(hosts_exceeding(&rows, IRREVERSIBILITY_THRESHOLD_KJ_MOL), (8, 8));
        assert_eq!(hosts_exceeding(&rows, -100.0), (8, 3));
    }
}
