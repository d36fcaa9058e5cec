use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const CHART_WRITTEN: &str = "general.chart_written";
    pub const CONVERSION_RESULT: &str = "general.conversion_result";

    pub const EXTRACTION_TITLE: &str = "extraction.title";
    pub const EXTRACTION_OBJECTIVE: &str = "extraction.objective";
    pub const TARGET_PURITY: &str = "extraction.target_purity";
    pub const FEED_PURITY: &str = "extraction.feed_purity";
    pub const TECHNOLOGY_COMPARISON: &str = "extraction.technology_comparison";
    pub const LABEL_BETA: &str = "extraction.label_beta";
    pub const LABEL_SOURCE: &str = "general.label_source";
    pub const LABEL_THEORETICAL_STAGES: &str = "extraction.label_theoretical_stages";
    pub const LABEL_PRACTICAL_STAGES: &str = "extraction.label_practical_stages";
    pub const LABEL_EFFICIENCY: &str = "extraction.label_efficiency";
    pub const DETAILS_HEADING: &str = "extraction.details_heading";
    pub const DETAIL_SEPARATION_DEGREE: &str = "extraction.detail_separation_degree";
    pub const DETAIL_LN_DEGREE: &str = "extraction.detail_ln_degree";
    pub const DETAIL_LN_BETA: &str = "extraction.detail_ln_beta";
    pub const COL_TECHNOLOGY: &str = "extraction.col_technology";
    pub const COL_BETA: &str = "extraction.col_beta";
    pub const COL_THEORETICAL: &str = "extraction.col_theoretical";
    pub const COL_PRACTICAL: &str = "extraction.col_practical";
    pub const CONCLUSIONS: &str = "general.conclusions";
    pub const GAP_HEADING: &str = "extraction.gap_heading";
    pub const GAP_BASELINE_STAGES: &str = "extraction.gap_baseline_stages";
    pub const ADVANTAGE_HEADING: &str = "extraction.advantage_heading";
    pub const ADVANTAGE_STAGES: &str = "extraction.advantage_stages";
    pub const SELECTIVITY_IMPROVEMENT: &str = "extraction.selectivity_improvement";
    pub const STAGE_REDUCTION: &str = "extraction.stage_reduction";
    pub const ECONOMIC_HEADING: &str = "extraction.economic_heading";
    pub const CAPEX_REDUCTION: &str = "extraction.capex_reduction";
    pub const SINGLE_TECHNOLOGY: &str = "extraction.single_technology";
    pub const ZERO_STAGE_COMPARISON: &str = "extraction.zero_stage_comparison";

    pub const ADSORPTION_TITLE: &str = "adsorption.title";
    pub const ADSORBENT_COMPARISON: &str = "adsorption.comparison";
    pub const LABEL_TEMPERATURE: &str = "adsorption.label_temperature";
    pub const LABEL_BINDING: &str = "adsorption.label_binding";
    pub const LABEL_MECHANISM: &str = "adsorption.label_mechanism";
    pub const LABEL_RELATIVE_LIFETIME: &str = "adsorption.label_relative_lifetime";
    pub const REFERENCE_MARK: &str = "adsorption.reference_mark";
    pub const VS_REFERENCE: &str = "adsorption.vs_reference";
    pub const COL_ADSORBENT: &str = "adsorption.col_adsorbent";
    pub const COL_BINDING: &str = "adsorption.col_binding";
    pub const COL_RELATIVE_LIFETIME: &str = "adsorption.col_relative_lifetime";
    pub const SCREENING_TITLE: &str = "adsorption.screening_title";
    pub const COL_HOST: &str = "adsorption.col_host";
    pub const COL_GUEST: &str = "adsorption.col_guest";
    pub const COL_STATUS: &str = "adsorption.col_status";
    pub const STATUS_EXCEEDS: &str = "adsorption.status_exceeds";
    pub const STATUS_BELOW: &str = "adsorption.status_below";
    pub const THRESHOLD_HEADING: &str = "adsorption.threshold_heading";
    pub const THRESHOLD_LINE: &str = "adsorption.threshold_line";
    pub const THRESHOLD_FACTOR: &str = "adsorption.threshold_factor";
    pub const HOSTS_EXCEEDING: &str = "adsorption.hosts_exceeding";
    pub const BEST_HEADING: &str = "adsorption.best_heading";
    pub const REFERENCE_SERVICE: &str = "adsorption.reference_service";
    pub const PROJECTED_SERVICE: &str = "adsorption.projected_service";

    pub const STAGES_HEADING: &str = "calc.stages_heading";
    pub const LIFETIME_HEADING: &str = "calc.lifetime_heading";
    pub const LABEL_NEW_BINDING: &str = "calc.label_new_binding";
    pub const LABEL_REFERENCE_BINDING: &str = "calc.label_reference_binding";
    pub const LABEL_ABSOLUTE_LIFETIME: &str = "calc.label_absolute_lifetime";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        log::warn!("언어팩을 해석할 수 없습니다: {}", path.display());
    }
    map
}

/// 언어팩은 `[섹션]` 아래 문자열만 담는다. 키는 `섹션.이름` 으로 펼친다.
/// 최상위에 `"섹션.이름" = "..."` 로 적어도 된다. 문자열이 아닌 값은 무시한다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    for (name, value) in root {
        match value {
            toml::Value::String(text) => {
                map.insert(name, text);
            }
            toml::Value::Table(section) => {
                map.extend(section.into_iter().filter_map(|(key, v)| match v {
                    toml::Value::String(text) => Some((format!("{name}.{key}"), text)),
                    _ => None,
                }));
            }
            _ => log::debug!("언어팩 항목 무시: {name}"),
        }
    }
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        CHART_WRITTEN => "차트 생성:",
        CONVERSION_RESULT => "변환 결과:",
        EXTRACTION_TITLE => "전략 소재 감사: 자석 재활용 효율",
        EXTRACTION_OBJECTIVE => "목표: 자석 스크랩에서 네오디뮴(Nd)과 철(Fe) 분리",
        TARGET_PURITY => "목표 순도:",
        FEED_PURITY => "원료 순도:",
        TECHNOLOGY_COMPARISON => "기술 비교",
        LABEL_BETA => "분리계수 (β):",
        LABEL_SOURCE => "출처:",
        LABEL_THEORETICAL_STAGES => "이론 단수:",
        LABEL_PRACTICAL_STAGES => "실제 단수",
        LABEL_EFFICIENCY => "효율",
        DETAILS_HEADING => "[Kremser 계산 상세]",
        DETAIL_SEPARATION_DEGREE => "분리도:",
        DETAIL_LN_DEGREE => "ln(분리도):",
        DETAIL_LN_BETA => "ln(β):",
        COL_TECHNOLOGY => "기술",
        COL_BETA => "β (Nd/Fe)",
        COL_THEORETICAL => "이론 단수",
        COL_PRACTICAL => "실제 단수",
        CONCLUSIONS => "감사 결론",
        GAP_HEADING => "1. 효율 격차:",
        GAP_BASELINE_STAGES => "기준 기술의 믹서-세틀러 단수:",
        ADVANTAGE_HEADING => "2. 후보 기술의 이점:",
        ADVANTAGE_STAGES => "목표 순도 도달 단수:",
        SELECTIVITY_IMPROVEMENT => "선택도 향상:",
        STAGE_REDUCTION => "단수 감소:",
        ECONOMIC_HEADING => "3. 경제적 효과:",
        CAPEX_REDUCTION => "설비투자(CapEx) 절감:",
        SINGLE_TECHNOLOGY => "비교할 기술이 2개 미만이라 결론을 생략합니다.",
        ZERO_STAGE_COMPARISON => "이론 단수가 0인 기술이 있어 (β = ∞) 단수 비교를 생략합니다.",
        ADSORPTION_TITLE => "규제 대응 감사: PFAS 제거",
        ADSORBENT_COMPARISON => "흡착제 비교",
        LABEL_TEMPERATURE => "온도:",
        LABEL_BINDING => "결합에너지:",
        LABEL_MECHANISM => "결합 기구:",
        LABEL_RELATIVE_LIFETIME => "상대 수명:",
        REFERENCE_MARK => "(기준)",
        VS_REFERENCE => "(기준 대비)",
        COL_ADSORBENT => "흡착제",
        COL_BINDING => "결합에너지 (kJ/mol)",
        COL_RELATIVE_LIFETIME => "상대 수명",
        SCREENING_TITLE => "DFT 스크리닝 결과: FLUOROCATCHER 계열",
        COL_HOST => "호스트",
        COL_GUEST => "게스트",
        COL_STATUS => "판정",
        STATUS_EXCEEDS => "임계값 초과",
        STATUS_BELOW => "임계값 미달",
        THRESHOLD_HEADING => "1. 비가역 결합 임계값:",
        THRESHOLD_LINE => "상온에서 필요한 결합에너지 (kJ/mol):",
        THRESHOLD_FACTOR => "임계값에서 기준 대비 수명 연장:",
        HOSTS_EXCEEDING => "임계값을 넘는 변형체:",
        BEST_HEADING => "2. 선도 후보:",
        REFERENCE_SERVICE => "기준 흡착제 운전 기간 (월):",
        PROJECTED_SERVICE => "예상 운전 기간 (월):",
        STAGES_HEADING => "-- 단수 계산 --",
        LIFETIME_HEADING => "-- 수명 계산 --",
        LABEL_NEW_BINDING => "신규 결합에너지:",
        LABEL_REFERENCE_BINDING => "기준 결합에너지:",
        LABEL_ABSOLUTE_LIFETIME => "추정 수명 (h):",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        CHART_WRITTEN => "Chart written:",
        CONVERSION_RESULT => "Result:",
        EXTRACTION_TITLE => "STRATEGIC MATERIALS AUDIT: MAGNET RECYCLING EFFICIENCY",
        EXTRACTION_OBJECTIVE => "OBJECTIVE: Separate Neodymium (Nd) from Iron (Fe) in Magnet Scrap",
        TARGET_PURITY => "TARGET PURITY:",
        FEED_PURITY => "FEED PURITY:",
        TECHNOLOGY_COMPARISON => "TECHNOLOGY COMPARISON",
        LABEL_BETA => "Separation Factor (β):",
        LABEL_SOURCE => "Source:",
        LABEL_THEORETICAL_STAGES => "Theoretical Stages:",
        LABEL_PRACTICAL_STAGES => "Practical Stages",
        LABEL_EFFICIENCY => "eff",
        DETAILS_HEADING => "[Kremser Calculation Details]",
        DETAIL_SEPARATION_DEGREE => "Separation degree:",
        DETAIL_LN_DEGREE => "ln(separation degree):",
        DETAIL_LN_BETA => "ln(β):",
        COL_TECHNOLOGY => "TECHNOLOGY",
        COL_BETA => "BETA (Nd/Fe)",
        COL_THEORETICAL => "THEORETICAL STAGES",
        COL_PRACTICAL => "PRACTICAL STAGES",
        CONCLUSIONS => "AUDIT CONCLUSIONS",
        GAP_HEADING => "1. EFFICIENCY GAP:",
        GAP_BASELINE_STAGES => "Mixer-settler stages required by the baseline:",
        ADVANTAGE_HEADING => "2. CANDIDATE ADVANTAGE:",
        ADVANTAGE_STAGES => "Stages to reach target purity:",
        SELECTIVITY_IMPROVEMENT => "Selectivity improvement:",
        STAGE_REDUCTION => "Stage reduction:",
        ECONOMIC_HEADING => "3. ECONOMIC IMPACT:",
        CAPEX_REDUCTION => "CapEx reduction:",
        SINGLE_TECHNOLOGY => "Fewer than two technologies configured; conclusions skipped.",
        ZERO_STAGE_COMPARISON => "A technology needs zero theoretical stages (β = ∞); stage comparison skipped.",
        ADSORPTION_TITLE => "COMPLIANCE SIDE STREAM AUDIT: PFAS REMEDIATION",
        ADSORBENT_COMPARISON => "ADSORBENT COMPARISON",
        LABEL_TEMPERATURE => "Temperature:",
        LABEL_BINDING => "Binding Energy:",
        LABEL_MECHANISM => "Mechanism:",
        LABEL_RELATIVE_LIFETIME => "Relative Lifetime:",
        REFERENCE_MARK => "(reference)",
        VS_REFERENCE => "vs reference",
        COL_ADSORBENT => "ADSORBENT",
        COL_BINDING => "BINDING (kJ/mol)",
        COL_RELATIVE_LIFETIME => "RELATIVE LIFETIME",
        SCREENING_TITLE => "DFT SCREENING RESULTS: FLUOROCATCHER FAMILY",
        COL_HOST => "HOST",
        COL_GUEST => "GUEST",
        COL_STATUS => "STATUS",
        STATUS_EXCEEDS => "Exceeds threshold",
        STATUS_BELOW => "Below threshold",
        THRESHOLD_HEADING => "1. IRREVERSIBILITY THRESHOLD:",
        THRESHOLD_LINE => "Binding energy required at room temperature (kJ/mol):",
        THRESHOLD_FACTOR => "Lifetime extension at threshold vs reference:",
        HOSTS_EXCEEDING => "Variants exceeding threshold:",
        BEST_HEADING => "2. LEAD CANDIDATE:",
        REFERENCE_SERVICE => "Reference service life (months):",
        PROJECTED_SERVICE => "Projected service life (months):",
        STAGES_HEADING => "-- Stage Calculation --",
        LIFETIME_HEADING => "-- Lifetime Calculation --",
        LABEL_NEW_BINDING => "New binding energy:",
        LABEL_REFERENCE_BINDING => "Reference binding energy:",
        LABEL_ABSOLUTE_LIFETIME => "Estimated lifetime (h):",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        let tr = Translator::new("de");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
    }

    #[test]
    fn every_korean_key_has_english() {
        let en_tr = Translator::new("en");
        let ko_tr = Translator::new("ko");
        for key in [keys::EXTRACTION_TITLE, keys::SCREENING_TITLE, keys::CAPEX_REDUCTION] {
            assert_ne!(ko_tr.t(key), "[missing translation]");
            assert_ne!(en_tr.t(key), ko_tr.t(key));
        }
    }

    #[test]
    fn pack_accepts_sections_and_dotted_keys() {
        let map = parse_toml_to_map(
            "\"report.heading\" = \"H\"\nlimit = 3\n[extraction]\ncapex_reduction = \"C\"\nrank = 1\n",
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["report.heading"], "H");
        assert_eq!(map[keys::CAPEX_REDUCTION], "C");
        assert!(parse_toml_to_map("limit = 3").is_none());
        assert!(parse_toml_to_map("not toml ===").is_none());
    }

    #[test]
    fn pack_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.toml"),
            "[general]\nerror_prefix = \"Failure\"\n",
        )
        .unwrap();
        let tr = Translator::new_with_pack("en", dir.path().to_str());
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Failure");
        assert_eq!(tr.t(keys::TARGET_PURITY), "TARGET PURITY:");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("C"), None);
    }
}
