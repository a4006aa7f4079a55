//! 건조 공기 물성 프리셋(250~500 K).
//! 밀도는 이상기체, 점도·열전도율은 Sutherland 식, 비열은 표 보간.

use super::PropertyError;

/// 공기 기체상수 [J/(kg·K)]
const R_AIR: f64 = 287.05;

/// Sutherland 기준 점도 [Pa·s] (273.15 K)
const MU_REF: f64 = 1.716e-5;
/// 점도 Sutherland 상수 [K]
const S_MU: f64 = 110.4;
/// Sutherland 기준 열전도율 [W/(m·K)] (273.15 K)
const K_REF: f64 = 0.0241;
/// 열전도율 Sutherland 상수 [K]
const S_K: f64 = 194.0;
const T_REF: f64 = 273.15;

/// 건조 공기 물성 묶음.
#[derive(Debug, Clone)]
pub struct AirProperties {
    /// 기준 온도 [°C]
    pub temperature_c: f64,
    /// 기준 압력 [bar, 절대]
    pub pressure_bar: f64,
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
    /// 체적팽창계수 β = 1/T [1/K]. 자연대류 입력용.
    pub expansion_coeff_per_k: f64,
}

/// 건조 공기의 물성을 계산한다. 온도 범위는 250~500 K(−23~227°C).
pub fn air_properties(t_c: f64, p_bar: f64) -> Result<AirProperties, PropertyError> {
    let t_k = t_c + 273.15;
    if !(250.0..=500.0).contains(&t_k) {
        return Err(PropertyError::OutOfRange(
            "공기 프리셋은 250~500 K 범위만 지원합니다.",
        ));
    }
    if p_bar <= 0.0 {
        return Err(PropertyError::OutOfRange("압력은 절대압으로 0보다 커야 합니다."));
    }

    let p_pa = p_bar * 1.0e5;
    let density = p_pa / (R_AIR * t_k);
    let viscosity = MU_REF * (t_k / T_REF).powf(1.5) * (T_REF + S_MU) / (t_k + S_MU);
    let conductivity = K_REF * (t_k / T_REF).powf(1.5) * (T_REF + S_K) / (t_k + S_K);
    let specific_heat = interpolate_cp(t_k);
    let prandtl = specific_heat * viscosity / conductivity;

    Ok(AirProperties {
        temperature_c: t_c,
        pressure_bar: p_bar,
        density_kg_per_m3: density,
        viscosity_pa_s: viscosity,
        conductivity_w_per_m_k: conductivity,
        specific_heat_j_per_kg_k: specific_heat,
        prandtl,
        expansion_coeff_per_k: 1.0 / t_k,
    })
}

// 건조 공기 정압비열 [J/(kg·K)], 온도 키는 K
const CP_TABLE: [(f64, f64); 6] = [
    (250.0, 1006.0),
    (300.0, 1007.0),
    (350.0, 1009.0),
    (400.0, 1014.0),
    (450.0, 1021.0),
    (500.0, 1030.0),
];

fn interpolate_cp(t_k: f64) -> f64 {
    if t_k <= CP_TABLE[0].0 {
        return CP_TABLE[0].1;
    }
    if t_k >= CP_TABLE[CP_TABLE.len() - 1].0 {
        return CP_TABLE[CP_TABLE.len() - 1].1;
    }
    for win in CP_TABLE.windows(2) {
        let (ta, va) = win[0];
        let (tb, vb) = win[1];
        if t_k >= ta && t_k <= tb {
            let frac = (t_k - ta) / (tb - ta);
            return va + frac * (vb - va);
        }
    }
    CP_TABLE[CP_TABLE.len() - 1].1
}
