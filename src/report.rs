//! 감사 결과를 사람이 읽는 텍스트 보고서로 만든다.

use std::fmt::Write as _;

use prettytable::{format, row, Table};

use crate::adsorption::{
    hosts_exceeding, AdsorptionAudit, LifetimeEstimate, ScreeningRow, ScreeningStatus,
};
use crate::extraction::{ExtractionAudit, StageBreakdown};
use crate::i18n::{keys, Translator};

const WIDTH: usize = 72;

/// 천 단위 구분 기호를 넣어 숫자를 포맷한다. 비유한 값은 그대로 출력한다.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    if value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 수명 배수 표기. 작은 값은 소수 둘째 자리, 큰 값은 정수로 반올림한다.
fn format_factor(factor: f64) -> String {
    if factor.is_finite() && factor < 100.0 {
        format!("{factor:.2}×")
    } else {
        format!("{}×", format_thousands(factor, 0))
    }
}

fn format_beta(beta: f64) -> String {
    if beta < 100.0 {
        format!("{beta:.1}")
    } else {
        format_thousands(beta, 0)
    }
}

fn rule(out: &mut String, ch: char) {
    out.push_str(&ch.to_string().repeat(WIDTH));
    out.push('\n');
}

fn heading(out: &mut String, ch: char, title: &str) {
    rule(out, ch);
    out.push_str(title);
    out.push('\n');
    rule(out, ch);
    out.push('\n');
}

fn compact_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table
}

/// 분리 기술 감사 보고서. `details`가 참이면 각 기술의 Kremser 중간값을 덧붙인다.
pub fn render_extraction_report(audit: &ExtractionAudit, tr: &Translator, details: bool) -> String {
    let mut out = String::new();
    let scenario = &audit.scenario;

    heading(&mut out, '=', tr.t(keys::EXTRACTION_TITLE));
    rule(&mut out, '-');
    let _ = writeln!(out, "{}", tr.t(keys::EXTRACTION_OBJECTIVE));
    rule(&mut out, '-');
    out.push('\n');
    let _ = writeln!(
        out,
        "{} {:.1}% Nd",
        tr.t(keys::TARGET_PURITY),
        scenario.target_purity * 100.0
    );
    let _ = writeln!(
        out,
        "{} {:.1}% Nd",
        tr.t(keys::FEED_PURITY),
        scenario.feed_purity * 100.0
    );
    out.push('\n');

    heading(&mut out, '-', tr.t(keys::TECHNOLOGY_COMPARISON));
    let efficiency_pct = scenario.stage_efficiency * 100.0;
    for (i, r) in audit.results.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, r.extractant.name);
        let _ = writeln!(out, "   └─ {} {}", tr.t(keys::LABEL_BETA), format_beta(r.extractant.beta));
        let _ = writeln!(out, "   └─ {} {}", tr.t(keys::LABEL_SOURCE), r.extractant.source);
        let _ = writeln!(
            out,
            "   └─ {} {:.2}",
            tr.t(keys::LABEL_THEORETICAL_STAGES),
            r.theoretical_stages
        );
        let _ = writeln!(
            out,
            "   └─ {} (~{efficiency_pct:.0}% {}): {}",
            tr.t(keys::LABEL_PRACTICAL_STAGES),
            tr.t(keys::LABEL_EFFICIENCY),
            r.practical_stages
        );
        if details {
            render_breakdown(&mut out, &r.breakdown, tr, "   ");
        }
        out.push('\n');
    }

    let mut table = compact_table();
    table.set_titles(row![
        tr.t(keys::COL_TECHNOLOGY),
        tr.t(keys::COL_BETA),
        tr.t(keys::COL_THEORETICAL),
        tr.t(keys::COL_PRACTICAL)
    ]);
    for res in &audit.results {
        table.add_row(row![
            res.extractant.name,
            r->format_beta(res.extractant.beta),
            r->format!("{:.2}", res.theoretical_stages),
            r->res.practical_stages
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    heading(&mut out, '=', tr.t(keys::CONCLUSIONS));
    let (Some(base), Some(cand)) = (audit.baseline(), audit.candidate()) else {
        let _ = writeln!(out, "{}", tr.t(keys::SINGLE_TECHNOLOGY));
        return out;
    };
    let Some(summary) = audit.summary else {
        let _ = writeln!(out, "{}", tr.t(keys::ZERO_STAGE_COMPARISON));
        return out;
    };
    let _ = writeln!(out, "{}", tr.t(keys::GAP_HEADING));
    let _ = writeln!(
        out,
        "   {} ~{} ({})",
        tr.t(keys::GAP_BASELINE_STAGES),
        base.practical_stages,
        base.extractant.name
    );
    out.push('\n');
    let _ = writeln!(out, "{}", tr.t(keys::ADVANTAGE_HEADING));
    let _ = writeln!(
        out,
        "   {} ~{:.1} ({})",
        tr.t(keys::ADVANTAGE_STAGES),
        cand.theoretical_stages,
        cand.extractant.name
    );
    let _ = writeln!(
        out,
        "   {} {}×",
        tr.t(keys::SELECTIVITY_IMPROVEMENT),
        format_thousands(summary.selectivity_improvement, 0)
    );
    let _ = writeln!(
        out,
        "   {} {:.1}×",
        tr.t(keys::STAGE_REDUCTION),
        summary.stage_reduction
    );
    out.push('\n');
    let _ = writeln!(out, "{}", tr.t(keys::ECONOMIC_HEADING));
    let _ = writeln!(
        out,
        "   {} ~{:.0}%",
        tr.t(keys::CAPEX_REDUCTION),
        summary.capex_reduction_pct
    );
    out
}

fn render_breakdown(out: &mut String, b: &StageBreakdown, tr: &Translator, indent: &str) {
    let _ = writeln!(out, "{indent}{}", tr.t(keys::DETAILS_HEADING));
    let _ = writeln!(out, "{indent}  β: {}", format_thousands(b.beta, 2));
    let _ = writeln!(
        out,
        "{indent}  x_f: {:.4} ({:.1}%)",
        b.feed_purity,
        b.feed_purity * 100.0
    );
    let _ = writeln!(
        out,
        "{indent}  x_p: {:.4} ({:.1}%)",
        b.target_purity,
        b.target_purity * 100.0
    );
    let _ = writeln!(
        out,
        "{indent}  {} {}",
        tr.t(keys::DETAIL_SEPARATION_DEGREE),
        format_thousands(b.separation_degree, 2)
    );
    let _ = writeln!(
        out,
        "{indent}  {} {:.4}",
        tr.t(keys::DETAIL_LN_DEGREE),
        b.ln_separation_degree
    );
    let _ = writeln!(out, "{indent}  {} {:.4}", tr.t(keys::DETAIL_LN_BETA), b.ln_beta);
    let _ = writeln!(out, "{indent}  N: {:.2}", b.stages);
}

/// PFAS 흡착제 감사 보고서. 스크리닝 표와 결론을 포함한다.
pub fn render_adsorption_report(
    audit: &AdsorptionAudit,
    screening: &[ScreeningRow],
    tr: &Translator,
) -> String {
    let mut out = String::new();
    let scenario = &audit.scenario;
    let reference = audit.reference();

    heading(&mut out, '=', tr.t(keys::ADSORPTION_TITLE));
    let _ = writeln!(
        out,
        "{} {:.1} K",
        tr.t(keys::LABEL_TEMPERATURE),
        scenario.temperature_k
    );
    out.push('\n');

    heading(&mut out, '-', tr.t(keys::ADSORBENT_COMPARISON));
    for (i, r) in audit.results.iter().enumerate() {
        let mark = if r.is_reference {
            format!(" {}", tr.t(keys::REFERENCE_MARK))
        } else {
            String::new()
        };
        let _ = writeln!(out, "{}. {}{mark}", i + 1, r.adsorbent.name);
        let _ = writeln!(
            out,
            "   └─ {} {:.1} kJ/mol",
            tr.t(keys::LABEL_BINDING),
            r.adsorbent.binding_energy_kj_mol
        );
        let _ = writeln!(out, "   └─ {} {}", tr.t(keys::LABEL_MECHANISM), r.adsorbent.mechanism);
        let _ = writeln!(out, "   └─ {} {}", tr.t(keys::LABEL_SOURCE), r.adsorbent.source);
        let _ = writeln!(
            out,
            "   └─ {} {} {}",
            tr.t(keys::LABEL_RELATIVE_LIFETIME),
            format_factor(r.relative_lifetime),
            tr.t(keys::VS_REFERENCE)
        );
        out.push('\n');
    }

    let mut table = compact_table();
    table.set_titles(row![
        tr.t(keys::COL_ADSORBENT),
        tr.t(keys::COL_BINDING),
        tr.t(keys::COL_RELATIVE_LIFETIME)
    ]);
    for res in &audit.results {
        table.add_row(row![
            res.adsorbent.name,
            r->format!("{:.1}", res.adsorbent.binding_energy_kj_mol),
            r->format_factor(res.relative_lifetime)
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    if !screening.is_empty() {
        heading(&mut out, '-', tr.t(keys::SCREENING_TITLE));
        let mut table = compact_table();
        table.set_titles(row![
            tr.t(keys::COL_HOST),
            tr.t(keys::COL_GUEST),
            tr.t(keys::COL_BINDING),
            tr.t(keys::COL_STATUS)
        ]);
        for entry in screening {
            let status =
                match ScreeningStatus::classify(entry.binding_energy_kj_mol, scenario.threshold_kj_mol)
                {
                    ScreeningStatus::ExceedsThreshold => tr.t(keys::STATUS_EXCEEDS),
                    ScreeningStatus::BelowThreshold => tr.t(keys::STATUS_BELOW),
                };
            table.add_row(row![
                entry.host,
                entry.guest,
                r->format!("{:.1}", entry.binding_energy_kj_mol),
                status
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    heading(&mut out, '=', tr.t(keys::CONCLUSIONS));
    let _ = writeln!(out, "{}", tr.t(keys::THRESHOLD_HEADING));
    let _ = writeln!(
        out,
        "   {} {:.1}",
        tr.t(keys::THRESHOLD_LINE),
        scenario.threshold_kj_mol
    );
    let _ = writeln!(
        out,
        "   {} {}",
        tr.t(keys::THRESHOLD_FACTOR),
        format_factor(audit.threshold_factor)
    );
    if !screening.is_empty() {
        let (hosts, exceeding) = hosts_exceeding(screening, scenario.threshold_kj_mol);
        let _ = writeln!(out, "   {} {exceeding}/{hosts}", tr.t(keys::HOSTS_EXCEEDING));
    }

    if let Some(best) = audit.best_candidate() {
        out.push('\n');
        let _ = writeln!(out, "{} {}", tr.t(keys::BEST_HEADING), best.adsorbent.name);
        let _ = writeln!(
            out,
            "   {} {} {}",
            tr.t(keys::LABEL_RELATIVE_LIFETIME),
            format_factor(best.relative_lifetime),
            tr.t(keys::VS_REFERENCE)
        );
        let _ = writeln!(
            out,
            "   {} {:.1} ({})",
            tr.t(keys::REFERENCE_SERVICE),
            reference.service_months,
            reference.adsorbent.name
        );
        let _ = writeln!(
            out,
            "   {} {}",
            tr.t(keys::PROJECTED_SERVICE),
            format_thousands(best.service_months, 0)
        );
    }
    out
}

/// 단일 단수 계산 결과.
pub fn render_stage_calculation(
    breakdown: &StageBreakdown,
    practical_stages: u64,
    efficiency: f64,
    tr: &Translator,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::STAGES_HEADING));
    let _ = writeln!(
        out,
        "{} {:.4}",
        tr.t(keys::LABEL_THEORETICAL_STAGES),
        breakdown.stages
    );
    let _ = writeln!(
        out,
        "{} (~{:.0}% {}): {practical_stages}",
        tr.t(keys::LABEL_PRACTICAL_STAGES),
        efficiency * 100.0,
        tr.t(keys::LABEL_EFFICIENCY)
    );
    render_breakdown(&mut out, breakdown, tr, "");
    out
}

/// 단일 수명 계산 결과.
pub fn render_lifetime_calculation(estimate: &LifetimeEstimate, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::LIFETIME_HEADING));
    let _ = writeln!(
        out,
        "{} {:.1} kJ/mol",
        tr.t(keys::LABEL_NEW_BINDING),
        estimate.binding_energy_new
    );
    let _ = writeln!(
        out,
        "{} {:.1} kJ/mol",
        tr.t(keys::LABEL_REFERENCE_BINDING),
        estimate.binding_energy_reference
    );
    let _ = writeln!(
        out,
        "{} {:.2} K",
        tr.t(keys::LABEL_TEMPERATURE),
        estimate.temperature_k
    );
    let _ = writeln!(
        out,
        "{} {:.6e} ({})",
        tr.t(keys::LABEL_RELATIVE_LIFETIME),
        estimate.factor,
        format_factor(estimate.factor)
    );
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::LABEL_ABSOLUTE_LIFETIME),
        format_thousands(estimate.lifetime, 1)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(11_000.0, 0), "11,000");
        assert_eq!(format_thousands(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(-1_000.5, 1), "-1,000.5");
        assert_eq!(format_thousands(-0.01, 0), "0");
        assert_eq!(format_thousands(f64::INFINITY, 0), "inf");
    }

    #[test]
    fn factor_formatting_switches_at_hundred() {
        assert_eq!(format_factor(1.0), "1.00×");
        assert_eq!(format_factor(425.9), "426×");
        assert_eq!(format_factor(10_271_037.26), "10,271,037×");
    }

    #[test]
    fn beta_formatting() {
        assert_eq!(format_beta(2.5), "2.5");
        assert_eq!(format_beta(11_000.0), "11,000");
    }
}
