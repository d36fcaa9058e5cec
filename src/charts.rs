//! 벤치마크 그림 4종을 그린다.
//!
//! SVG는 제목/축/주석을 포함하고, PNG는 RGB 버퍼에 데이터만 그린 뒤 `image`로 인코딩한다.
//! 폰트 백엔드를 빌드에 넣지 않으므로 래스터 그림에는 글자를 그리지 않는다.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::adsorption::Adsorbent;
use crate::config::{ChartFormat, Config};
use crate::error::CalcError;
use crate::extraction::{self, CurvePoint};

const GENESIS: RGBColor = RGBColor(0x2E, 0x7D, 0x32);
const STANDARD: RGBColor = RGBColor(0xC6, 0x28, 0x28);
const NEUTRAL: RGBColor = RGBColor(0x42, 0x42, 0x42);
const HIGHLIGHT: RGBColor = RGBColor(0x15, 0x65, 0xC0);
const WARNING: RGBColor = RGBColor(0xF5, 0x7C, 0x00);
const BACKGROUND: RGBColor = RGBColor(0xFA, 0xFA, 0xFA);

const FONT: &str = "sans-serif";

/// 곡선 y축 상한 [단]
const CURVE_Y_MAX: f64 = 200.0;
/// 실용 단수 기준선 [단]
const PRACTICAL_STAGE_LINE: f64 = 10.0;

/// (항목, 기준값, 후보값). 단위는 항목 이름에 표기.
const ECONOMIC_ITEMS: [(&str, f64, f64); 4] = [
    ("CapEx ($M)", 7.5, 0.75),
    ("OpEx ($M/yr)", 1.5, 0.15),
    ("Footprint (m²)", 1000.0, 100.0),
    ("Stages", 10.0, 1.0),
];

/// 공급망 단계별 단일 국가 점유율 [%]
const SUPPLY_CHAIN: [(&str, f64); 4] = [
    ("Mining", 60.0),
    ("Processing", 85.0),
    ("Oxide Separation", 92.0),
    ("Magnet Production", 94.0),
];
const VULNERABILITY_LINE_PCT: f64 = 50.0;

/// 차트 생성 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("차트 그리기 오류: {0}")]
    Draw(String),
    #[error("이미지 버퍼 크기가 맞지 않습니다: {width}×{height}")]
    Buffer { width: u32, height: u32 },
    #[error("PNG 인코딩 오류: {0}")]
    Encode(#[from] image::ImageError),
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

fn draw_err<E: Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// 그림 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    SeparationEfficiency,
    BindingEnergy,
    EconomicImpact,
    SupplyChainRisk,
}

impl Figure {
    pub const ALL: [Figure; 4] = [
        Figure::SeparationEfficiency,
        Figure::BindingEnergy,
        Figure::EconomicImpact,
        Figure::SupplyChainRisk,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            Figure::SeparationEfficiency => "separation_efficiency_curve",
            Figure::BindingEnergy => "binding_energy_comparison",
            Figure::EconomicImpact => "economic_impact",
            Figure::SupplyChainRisk => "supply_chain_risk",
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
        labels: bool,
    ) -> Result<(), ChartError> {
        root.fill(&BACKGROUND).map_err(draw_err)?;
        match self {
            Figure::SeparationEfficiency => draw_separation_curve(root, data, labels),
            Figure::BindingEnergy => draw_binding_energy(root, data, labels),
            Figure::EconomicImpact => draw_economic_impact(root, labels),
            Figure::SupplyChainRisk => draw_supply_chain(root, labels),
        }?;
        root.present().map_err(draw_err)
    }
}

/// 곡선 위에 표시할 기술 한 점.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub point: CurvePoint,
}

/// 설정에서 계산한 그림 데이터.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub curve: Vec<CurvePoint>,
    /// 기준 기술, 후보 기술 순
    pub markers: Vec<Marker>,
    /// 기준 흡착제 + 후보들
    pub adsorbents: Vec<Adsorbent>,
    pub threshold_kj_mol: f64,
}

impl ChartData {
    pub fn from_config(config: &Config) -> Result<Self, CalcError> {
        let scenario = &config.extraction.scenario;
        let charts = &config.charts;
        let betas = extraction::log_space(
            charts.sweep_start_exponent,
            charts.sweep_end_exponent,
            charts.sweep_points,
        );
        let curve = extraction::stage_curve(&betas, scenario.target_purity, scenario.feed_purity)?;

        let audit = extraction::audit_extractants(scenario, &config.extraction.extractants)?;
        let markers = audit
            .baseline()
            .into_iter()
            .chain(audit.candidate())
            .map(|r| Marker {
                label: r.extractant.name.clone(),
                point: CurvePoint {
                    beta: r.extractant.beta,
                    stages: r.theoretical_stages,
                },
            })
            .collect();

        let adsorption_cfg = &config.adsorption;
        let adsorbents = std::iter::once(adsorption_cfg.reference.clone())
            .chain(adsorption_cfg.candidates.iter().cloned())
            .collect();

        Ok(Self {
            curve,
            markers,
            adsorbents,
            threshold_kj_mol: adsorption_cfg.scenario.threshold_kj_mol,
        })
    }
}

/// 모든 그림을 설정된 형식으로 `output_dir`에 저장하고 생성된 경로를 반환한다.
pub fn generate_all(config: &Config, output_dir: &Path) -> Result<Vec<PathBuf>, ChartError> {
    fs::create_dir_all(output_dir)?;
    let data = ChartData::from_config(config)?;
    let (width, height) = (config.charts.width, config.charts.height);
    let mut written = Vec::new();
    for figure in Figure::ALL {
        for &format in &config.charts.formats {
            let path = output_dir.join(format!("{}.{}", figure.file_stem(), format.extension()));
            render_figure(figure, &data, format, &path, (width, height))?;
            info!("차트 저장: {}", path.display());
            written.push(path);
        }
    }
    Ok(written)
}

/// 그림 하나를 지정한 형식으로 파일에 저장한다.
pub fn render_figure(
    figure: Figure,
    data: &ChartData,
    format: ChartFormat,
    path: &Path,
    (width, height): (u32, u32),
) -> Result<(), ChartError> {
    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, (width, height)).into_drawing_area();
            figure.draw(&root, data, true)
        }
        ChartFormat::Png => {
            let mut buffer = vec![0u8; width as usize * height as usize * 3];
            {
                let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
                    .into_drawing_area();
                figure.draw(&root, data, false)?;
            }
            let image = image::RgbImage::from_raw(width, height, buffer)
                .ok_or(ChartError::Buffer { width, height })?;
            image.save_with_format(path, image::ImageFormat::Png)?;
            Ok(())
        }
    }
}

fn text_style(size: i32, color: &RGBColor) -> TextStyle<'static> {
    (FONT, size).into_font().color(color)
}

fn draw_separation_curve<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    labels: bool,
) -> Result<(), ChartError> {
    let mut builder = ChartBuilder::on(root);
    builder.margin(24);
    if labels {
        builder
            .caption(
                "Rare Earth Separation Efficiency: Stages vs. Selectivity",
                (FONT, 26),
            )
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d((1f64..1e5f64).log_scale(), 0f64..CURVE_Y_MAX)
        .map_err(draw_err)?;

    if labels {
        chart
            .configure_mesh()
            .x_desc("Separation Factor (β)")
            .y_desc("Theoretical Stages (N)")
            .light_line_style(&NEUTRAL.mix(0.08))
            .draw()
            .map_err(draw_err)?;
    }

    chart
        .draw_series(LineSeries::new(
            data.curve
                .iter()
                .map(|p| (p.beta, p.stages.min(CURVE_Y_MAX))),
            NEUTRAL.stroke_width(3),
        ))
        .map_err(draw_err)?
        .label("Kremser Equation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], NEUTRAL.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            vec![(1.0, PRACTICAL_STAGE_LINE), (1e5, PRACTICAL_STAGE_LINE)],
            HIGHLIGHT.mix(0.7).stroke_width(2),
        ))
        .map_err(draw_err)?
        .label("Practical threshold (~10 stages)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], HIGHLIGHT.stroke_width(2)));

    let last = data.markers.len().saturating_sub(1);
    for (i, marker) in data.markers.iter().enumerate() {
        let (color, label_offset) = if i == last && i > 0 {
            (GENESIS, 25.0)
        } else {
            (STANDARD, 30.0)
        };
        let at = (marker.point.beta, marker.point.stages.min(CURVE_Y_MAX));
        if i == last && i > 0 {
            chart
                .draw_series(std::iter::once(TriangleMarker::new(at, 12, color.filled())))
                .map_err(draw_err)?;
        } else {
            chart
                .draw_series(std::iter::once(Circle::new(at, 9, color.filled())))
                .map_err(draw_err)?;
        }
        if labels {
            let text = format!(
                "{}: β = {}, {:.1} stages",
                marker.label,
                crate::report::format_thousands(marker.point.beta, 1),
                marker.point.stages
            );
            chart
                .draw_series(std::iter::once(Text::new(
                    text,
                    (at.0, (at.1 + label_offset).min(CURVE_Y_MAX - 10.0)),
                    text_style(16, &color),
                )))
                .map_err(draw_err)?;
        }
    }

    if labels {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&NEUTRAL)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}

fn draw_binding_energy<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    labels: bool,
) -> Result<(), ChartError> {
    let n = data.adsorbents.len().max(1);
    let y_max = data
        .adsorbents
        .iter()
        .map(|a| a.binding_energy_kj_mol.abs())
        .fold(data.threshold_kj_mol.abs(), f64::max)
        * 1.25;

    let mut builder = ChartBuilder::on(root);
    builder.margin(24);
    if labels {
        builder
            .caption("PFAS Adsorbent Performance: Binding Energy Comparison", (FONT, 26))
            .x_label_area_size(20)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_max)
        .map_err(draw_err)?;

    if labels {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_desc("|Binding Energy| (kJ/mol)")
            .light_line_style(&NEUTRAL.mix(0.08))
            .draw()
            .map_err(draw_err)?;
    }

    let last = data.adsorbents.len().saturating_sub(1);
    chart
        .draw_series(data.adsorbents.iter().enumerate().map(|(i, a)| {
            let color = match i {
                0 => STANDARD,
                _ if i == last => GENESIS,
                _ => WARNING,
            };
            let x = i as f64;
            Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, a.binding_energy_kj_mol.abs())],
                color.filled(),
            )
        }))
        .map_err(draw_err)?;

    let threshold = data.threshold_kj_mol.abs();
    chart
        .draw_series(LineSeries::new(
            vec![(-0.5, threshold), (n as f64 - 0.5, threshold)],
            HIGHLIGHT.stroke_width(2),
        ))
        .map_err(draw_err)?;

    if labels {
        chart
            .draw_series(data.adsorbents.iter().enumerate().map(|(i, a)| {
                Text::new(
                    format!("{} ({:.0})", a.name, a.binding_energy_kj_mol),
                    (i as f64 - 0.35, a.binding_energy_kj_mol.abs() + y_max * 0.03),
                    text_style(14, &NEUTRAL),
                )
            }))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{:.0} kJ/mol irreversibility threshold", data.threshold_kj_mol),
                (-0.45, threshold + y_max * 0.02),
                text_style(14, &HIGHLIGHT),
            )))
            .map_err(draw_err)?;
    }
    Ok(())
}

fn draw_economic_impact<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: bool,
) -> Result<(), ChartError> {
    let n = ECONOMIC_ITEMS.len();
    let mut builder = ChartBuilder::on(root);
    builder.margin(24);
    if labels {
        builder
            .caption("Economic Impact: Candidate vs. Baseline", (FONT, 26))
            .x_label_area_size(20)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..130f64)
        .map_err(draw_err)?;

    if labels {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_desc("Relative Value (Baseline = 100%)")
            .light_line_style(&NEUTRAL.mix(0.08))
            .draw()
            .map_err(draw_err)?;
    }

    chart
        .draw_series(ECONOMIC_ITEMS.iter().enumerate().map(|(i, _)| {
            let x = i as f64;
            Rectangle::new([(x - 0.38, 0.0), (x - 0.02, 100.0)], STANDARD.filled())
        }))
        .map_err(draw_err)?
        .label("Baseline")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], STANDARD.filled()));

    chart
        .draw_series(ECONOMIC_ITEMS.iter().enumerate().map(|(i, &(_, base, cand))| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.02, 0.0), (x + 0.38, cand / base * 100.0)],
                GENESIS.filled(),
            )
        }))
        .map_err(draw_err)?
        .label("Candidate")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], GENESIS.filled()));

    if labels {
        chart
            .draw_series(ECONOMIC_ITEMS.iter().enumerate().map(|(i, &(name, base, cand))| {
                let reduction = (1.0 - cand / base) * 100.0;
                Text::new(
                    format!("{name}: -{reduction:.0}%"),
                    (i as f64 - 0.38, 112.0),
                    text_style(14, &WARNING),
                )
            }))
            .map_err(draw_err)?;
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&NEUTRAL)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}

/// 점유율이 높을수록 진한 빨강. t ∈ [0, 1].
fn red_scale(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(0xFF, 0x67), lerp(0xE0, 0x00), lerp(0xD6, 0x0D))
}

fn draw_supply_chain<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: bool,
) -> Result<(), ChartError> {
    let n = SUPPLY_CHAIN.len();
    let mut builder = ChartBuilder::on(root);
    builder.margin(24);
    if labels {
        builder
            .caption("Rare Earth Supply Chain Concentration Risk", (FONT, 26))
            .x_label_area_size(50)
            .y_label_area_size(20);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..110f64, -0.5f64..(n as f64 - 0.5))
        .map_err(draw_err)?;

    if labels {
        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_desc("Single-Nation Control (%)")
            .light_line_style(&NEUTRAL.mix(0.08))
            .draw()
            .map_err(draw_err)?;
    }

    // 첫 단계가 위쪽에 오도록 y를 뒤집는다
    let row_y = |i: usize| (n - 1 - i) as f64;
    chart
        .draw_series(SUPPLY_CHAIN.iter().enumerate().map(|(i, &(_, pct))| {
            let y = row_y(i);
            Rectangle::new(
                [(0.0, y - 0.35), (pct, y + 0.35)],
                red_scale(pct / 100.0 * 0.7 + 0.3).filled(),
            )
        }))
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            vec![
                (VULNERABILITY_LINE_PCT, -0.5),
                (VULNERABILITY_LINE_PCT, n as f64 - 0.5),
            ],
            WARNING.stroke_width(2),
        ))
        .map_err(draw_err)?;

    if labels {
        chart
            .draw_series(SUPPLY_CHAIN.iter().enumerate().map(|(i, &(name, pct))| {
                Text::new(
                    format!("{name} {pct:.0}%"),
                    (2.0, row_y(i) + 0.42),
                    text_style(14, &NEUTRAL),
                )
            }))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                "Strategic vulnerability threshold",
                (VULNERABILITY_LINE_PCT + 2.0, -0.3),
                text_style(14, &WARNING),
            )))
            .map_err(draw_err)?;
    }
    Ok(())
}
