use serde::{Deserialize, Serialize};

/// 온도 단위. 계산식은 모두 켈빈을 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "R",
        }
    }

    /// K = (값 + offset) × scale
    fn affine(&self) -> (f64, f64) {
        match self {
            TemperatureUnit::Kelvin => (0.0, 1.0),
            TemperatureUnit::Celsius => (273.15, 1.0),
            TemperatureUnit::Fahrenheit => (459.67, 5.0 / 9.0),
            TemperatureUnit::Rankine => (0.0, 5.0 / 9.0),
        }
    }
}

pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    let (offset, scale) = unit.affine();
    (value + offset) * scale
}

pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    let (offset, scale) = unit.affine();
    value_k / scale - offset
}

/// 켈빈을 거쳐 온도 단위를 바꾼다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn absolute_zero_everywhere() {
        for unit in [
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Rankine,
        ] {
            let v = from_kelvin(0.0, unit);
            assert_relative_eq!(to_kelvin(v, unit), 0.0, epsilon = 1e-9);
        }
        assert_relative_eq!(from_kelvin(0.0, TemperatureUnit::Fahrenheit), -459.67);
    }

    #[test]
    fn boiling_point_of_water() {
        assert_relative_eq!(
            convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            212.0,
            max_relative = 1e-12
        );
        assert_eq!(TemperatureUnit::Rankine.symbol(), "R");
    }
}
