use thiserror::Error;

use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
}

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    MolarEnergy,
}

impl std::str::FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t" | "temp" | "temperature" => Ok(QuantityKind::Temperature),
            "e" | "energy" | "molar-energy" | "molar_energy" => Ok(QuantityKind::MolarEnergy),
            _ => Err(ConversionError::UnknownQuantity(s.to_string())),
        }
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `K`, `F`, `kJ/mol`, `kcal/mol`, `eV`, `Ha` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::MolarEnergy => {
            let from = parse_molar_energy_unit(from_unit_str)?;
            let to = parse_molar_energy_unit(to_unit_str)?;
            Ok(convert_molar_energy(value, from, to))
        }
    }
}

/// 단위 문자열을 표준 표기로 바꾼다. `c` → `°C`, `kcal` → `kcal/mol`
pub fn unit_symbol(kind: QuantityKind, unit_str: &str) -> Result<&'static str, ConversionError> {
    Ok(match kind {
        QuantityKind::Temperature => parse_temperature_unit(unit_str)?.symbol(),
        QuantityKind::MolarEnergy => parse_molar_energy_unit(unit_str)?.symbol(),
    })
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_molar_energy_unit(s: &str) -> Result<MolarEnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kj/mol" | "kj" | "kjmol" => Ok(MolarEnergyUnit::KilojoulePerMol),
        "j/mol" | "j" => Ok(MolarEnergyUnit::JoulePerMol),
        "kcal/mol" | "kcal" => Ok(MolarEnergyUnit::KilocaloriePerMol),
        "ev" | "electronvolt" => Ok(MolarEnergyUnit::Electronvolt),
        "ha" | "hartree" | "eh" => Ok(MolarEnergyUnit::Hartree),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
