use thiserror::Error;

/// 추출 단수/수명 계산 중 발생 가능한 오류를 표현한다.
///
/// 두 계산식 모두 결정적인 선행조건 위반만 오류로 취급한다.
/// 극단적으로 크거나 작은 결과값은 오류가 아니다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 수식의 정의역을 벗어난 입력값
    #[error("입력 오류: {0}")]
    InvalidParameter(String),
}

impl CalcError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CalcError::InvalidParameter(msg.into())
    }
}
