//! 대기압 액체 물(0~100°C) 물성 프리셋.
//! 밀도는 seuif97(IAPWS-IF97), 점도는 Vogel형 상관식,
//! 열전도율·비열은 표 보간으로 구한다.

use seuif97::{pt, OV};

use super::PropertyError;

/// 대기압 표준 압력 [MPa]. IF97 입력용.
const ATMOSPHERIC_MPA: f64 = 0.101325;

/// 액체 물 물성 묶음.
#[derive(Debug, Clone)]
pub struct WaterProperties {
    /// 기준 온도 [°C]
    pub temperature_c: f64,
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 열전도율 [W/(m·K)]
    pub conductivity_w_per_m_k: f64,
    /// 정압비열 [J/(kg·K)]
    pub specific_heat_j_per_kg_k: f64,
    /// 프란틀수
    pub prandtl: f64,
}

/// 대기압 액체 물의 물성을 계산한다. 지원 범위는 0~100°C.
pub fn water_properties(t_c: f64) -> Result<WaterProperties, PropertyError> {
    if !(0.0..=100.0).contains(&t_c) {
        return Err(PropertyError::OutOfRange(
            "물 프리셋은 0~100°C(대기압 액체)만 지원합니다.",
        ));
    }

    // Region 1(압축수) 강제 지정. 포화 경계 근처에서 증기 쪽으로 빠지는 것을 막는다.
    let v = pt(ATMOSPHERIC_MPA, t_c, (OV, 1));
    if v.is_nan() || v <= 0.0 {
        return Err(PropertyError::If97(
            "IF97 계산 실패(유효 범위 밖이거나 수렴 실패)",
        ));
    }
    let density = 1.0 / v;

    let viscosity = water_viscosity_pa_s(t_c);
    let conductivity = interpolate(&CONDUCTIVITY_W_PER_M_K, t_c);
    let specific_heat = interpolate(&SPECIFIC_HEAT_KJ_PER_KG_K, t_c) * 1000.0;
    let prandtl = specific_heat * viscosity / conductivity;

    Ok(WaterProperties {
        temperature_c: t_c,
        density_kg_per_m3: density,
        viscosity_pa_s: viscosity,
        conductivity_w_per_m_k: conductivity,
        specific_heat_j_per_kg_k: specific_heat,
        prandtl,
    })
}

/// Vogel형 상관식 μ = 2.414×10⁻⁵ · 10^(247.8/(T−140)), T는 K.
/// 0~100°C에서 문헌값 대비 오차 1% 이내다.
pub fn water_viscosity_pa_s(t_c: f64) -> f64 {
    let t_k = t_c + 273.15;
    2.414e-5 * 10.0_f64.powf(247.8 / (t_k - 140.0))
}

#[derive(Debug, Clone, Copy)]
struct PropPoint {
    temp_c: f64,
    value: f64,
}

const fn pp(temp_c: f64, value: f64) -> PropPoint {
    PropPoint { temp_c, value }
}

// 대기압 액체 물 열전도율 [W/(m·K)]
const CONDUCTIVITY_W_PER_M_K: [PropPoint; 11] = [
    pp(0.0, 0.561),
    pp(10.0, 0.580),
    pp(20.0, 0.598),
    pp(30.0, 0.615),
    pp(40.0, 0.630),
    pp(50.0, 0.643),
    pp(60.0, 0.654),
    pp(70.0, 0.663),
    pp(80.0, 0.670),
    pp(90.0, 0.675),
    pp(100.0, 0.679),
];

// 대기압 액체 물 정압비열 [kJ/(kg·K)]
const SPECIFIC_HEAT_KJ_PER_KG_K: [PropPoint; 11] = [
    pp(0.0, 4.217),
    pp(10.0, 4.193),
    pp(20.0, 4.182),
    pp(30.0, 4.178),
    pp(40.0, 4.179),
    pp(50.0, 4.181),
    pp(60.0, 4.185),
    pp(70.0, 4.190),
    pp(80.0, 4.197),
    pp(90.0, 4.205),
    pp(100.0, 4.216),
];

/// 범위 검사를 마친 입력에 대한 단순 선형 보간. 끝점 밖은 끝값으로 고정한다.
fn interpolate(points: &[PropPoint], temp_c: f64) -> f64 {
    if temp_c <= points[0].temp_c {
        return points[0].value;
    }
    if temp_c >= points[points.len() - 1].temp_c {
        return points[points.len() - 1].value;
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if temp_c >= a.temp_c && temp_c <= b.temp_c {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            return a.value + frac * (b.value - a.value);
        }
    }
    points[points.len() - 1].value
}

// NOTE:
// - 열전도율/비열 표는 대기압 포화 액체 기준의 공개 핸드북 값이다.
// - 밀도만 IF97 정식 계산이므로, 포화 경계(100°C) 근처에서도 액체 값이 유지된다.
