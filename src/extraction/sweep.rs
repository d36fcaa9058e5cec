//! 분리계수 스윕. 단수-β 곡선 차트의 데이터로 사용한다.

use log::debug;

use super::kremser;
use crate::error::CalcError;

/// 곡선 위의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub beta: f64,
    pub stages: f64,
}

/// 10^start_exp ~ 10^end_exp 구간을 로그 등간격으로 나눈 `count`개의 값.
pub fn log_space(start_exp: f64, end_exp: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exp)],
        _ => {
            let step = (end_exp - start_exp) / (count - 1) as f64;
            (0..count)
                .map(|i| 10f64.powf(start_exp + step * i as f64))
                .collect()
        }
    }
}

/// 각 β에 대해 이론 단수를 계산한다.
///
/// β ≤ 1 인 점은 유한한 단수가 없으므로 건너뛴다.
/// 순도 조건 위반은 스윕 전체를 실패시킨다.
pub fn stage_curve(
    betas: &[f64],
    target_purity: f64,
    feed_purity: f64,
) -> Result<Vec<CurvePoint>, CalcError> {
    kremser::separation_degree(target_purity, feed_purity)?;
    let mut skipped = 0usize;
    let mut points = Vec::with_capacity(betas.len());
    for &beta in betas {
        if !(beta > 1.0) {
            skipped += 1;
            continue;
        }
        let stages = kremser::stage_count(beta, target_purity, feed_purity)?;
        points.push(CurvePoint { beta, stages });
    }
    if skipped > 0 {
        debug!("stage curve: β ≤ 1 인 점 {skipped}개 제외");
    }
    Ok(points)
}
