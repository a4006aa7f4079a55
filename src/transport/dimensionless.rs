/// 표준 중력가속도 [m/s²]
pub const G: f64 = 9.80665;

/// 층류 상한 레이놀즈수. 이 값 미만이면 층류 상관식을 적용한다.
pub const RE_LAMINAR_LIMIT: f64 = 2100.0;
/// 완전 난류 하한 레이놀즈수. Dittus-Boelter 계열 상관식의 유효 하한이다.
pub const RE_TURBULENT_LIMIT: f64 = 10_000.0;

/// 무차원수 계산 오류를 표현한다.
#[derive(Debug)]
pub enum DimensionlessError {
    /// 입력값이 물리적으로 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for DimensionlessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionlessError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for DimensionlessError {}

/// 레이놀즈수 기준 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Re < 2100
    Laminar,
    /// 2100 ≤ Re < 10000
    Transitional,
    /// Re ≥ 10000
    Turbulent,
}

/// 레이놀즈수로 유동 영역을 판정한다.
pub fn classify_regime(reynolds: f64) -> FlowRegime {
    if reynolds < RE_LAMINAR_LIMIT {
        FlowRegime::Laminar
    } else if reynolds < RE_TURBULENT_LIMIT {
        FlowRegime::Transitional
    } else {
        FlowRegime::Turbulent
    }
}

/// 관내 유동 레이놀즈수 Re = ρ·u·d/μ.
pub fn reynolds_pipe(
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
    diameter_m: f64,
    viscosity_pa_s: f64,
) -> Result<f64, DimensionlessError> {
    if density_kg_per_m3 <= 0.0 || diameter_m <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "밀도와 내경은 0보다 커야 합니다.",
        ));
    }
    if viscosity_pa_s <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "점도는 0보다 커야 합니다. cP 입력 시 Pa·s 환산을 확인하세요.",
        ));
    }
    Ok(density_kg_per_m3 * velocity_m_per_s.abs() * diameter_m / viscosity_pa_s)
}

/// 질량유량 기준 레이놀즈수 Re = 4·ṁ/(π·d·μ).
pub fn reynolds_from_mass_flow(
    mass_flow_kg_per_s: f64,
    diameter_m: f64,
    viscosity_pa_s: f64,
) -> Result<f64, DimensionlessError> {
    if mass_flow_kg_per_s <= 0.0 || diameter_m <= 0.0 || viscosity_pa_s <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "질량유량, 내경, 점도는 0보다 커야 합니다.",
        ));
    }
    Ok(4.0 * mass_flow_kg_per_s / (std::f64::consts::PI * diameter_m * viscosity_pa_s))
}

/// 동점성계수 기준 레이놀즈수 Re = u·L/ν.
pub fn reynolds_kinematic(
    velocity_m_per_s: f64,
    length_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> Result<f64, DimensionlessError> {
    if length_m <= 0.0 || kinematic_viscosity_m2_per_s <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "특성 길이와 동점성계수는 0보다 커야 합니다.",
        ));
    }
    Ok(velocity_m_per_s.abs() * length_m / kinematic_viscosity_m2_per_s)
}

/// 프란틀수 Pr = cp·μ/k.
pub fn prandtl(
    specific_heat_j_per_kg_k: f64,
    viscosity_pa_s: f64,
    conductivity_w_per_m_k: f64,
) -> Result<f64, DimensionlessError> {
    if specific_heat_j_per_kg_k <= 0.0 || viscosity_pa_s <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "비열과 점도는 0보다 커야 합니다.",
        ));
    }
    if conductivity_w_per_m_k <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "열전도율은 0보다 커야 합니다.",
        ));
    }
    Ok(specific_heat_j_per_kg_k * viscosity_pa_s / conductivity_w_per_m_k)
}

/// 누셀트수 Nu = h·L/k. 측정·추정된 경막계수에서 역산할 때 사용한다.
pub fn nusselt_from_film(
    film_coefficient_w_per_m2_k: f64,
    characteristic_length_m: f64,
    conductivity_w_per_m_k: f64,
) -> Result<f64, DimensionlessError> {
    if film_coefficient_w_per_m2_k <= 0.0
        || characteristic_length_m <= 0.0
        || conductivity_w_per_m_k <= 0.0
    {
        return Err(DimensionlessError::InvalidInput(
            "경막계수, 특성 길이, 열전도율은 0보다 커야 합니다.",
        ));
    }
    Ok(film_coefficient_w_per_m2_k * characteristic_length_m / conductivity_w_per_m_k)
}

/// 그라쇼프수 Gr = g·β·|ΔT|·L³/ν².
pub fn grashof(
    expansion_coeff_per_k: f64,
    delta_t_k: f64,
    characteristic_length_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> Result<f64, DimensionlessError> {
    if expansion_coeff_per_k <= 0.0 || characteristic_length_m <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "체적팽창계수와 특성 길이는 0보다 커야 합니다.",
        ));
    }
    if kinematic_viscosity_m2_per_s <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "동점성계수는 0보다 커야 합니다.",
        ));
    }
    if delta_t_k == 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "온도차가 0이면 자연대류 구동력이 없습니다.",
        ));
    }
    let l3 = characteristic_length_m.powi(3);
    Ok(G * expansion_coeff_per_k * delta_t_k.abs() * l3
        / (kinematic_viscosity_m2_per_s * kinematic_viscosity_m2_per_s))
}

/// 레일리수 Ra = Gr·Pr.
pub fn rayleigh(grashof: f64, prandtl: f64) -> f64 {
    grashof * prandtl
}

/// 스탠턴수 St = h/(ρ·u·cp). 경막계수를 아는 경우의 입력 모드.
pub fn stanton_from_film(
    film_coefficient_w_per_m2_k: f64,
    density_kg_per_m3: f64,
    velocity_m_per_s: f64,
    specific_heat_j_per_kg_k: f64,
) -> Result<f64, DimensionlessError> {
    if film_coefficient_w_per_m2_k <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "경막계수는 0보다 커야 합니다.",
        ));
    }
    if density_kg_per_m3 <= 0.0 || velocity_m_per_s <= 0.0 || specific_heat_j_per_kg_k <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "밀도, 유속, 비열은 0보다 커야 합니다.",
        ));
    }
    Ok(film_coefficient_w_per_m2_k
        / (density_kg_per_m3 * velocity_m_per_s * specific_heat_j_per_kg_k))
}

/// 스탠턴수 St = Nu/(Re·Pr). 무차원수 조합으로 구하는 입력 모드.
pub fn stanton_from_groups(
    nusselt: f64,
    reynolds: f64,
    prandtl: f64,
) -> Result<f64, DimensionlessError> {
    if nusselt <= 0.0 || reynolds <= 0.0 || prandtl <= 0.0 {
        return Err(DimensionlessError::InvalidInput(
            "Nu, Re, Pr은 모두 0보다 커야 합니다.",
        ));
    }
    Ok(nusselt / (reynolds * prandtl))
}
