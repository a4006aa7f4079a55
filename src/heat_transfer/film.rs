use super::correlations;
use crate::transport::{classify_regime, grashof, prandtl, rayleigh, reynolds_pipe, FlowRegime};

/// 경막계수 계산 오류를 표현한다.
#[derive(Debug)]
pub enum CorrelationError {
    /// 입력값이 물리적으로 잘못된 경우
    InvalidInput(&'static str),
    /// 상관식 유효 범위를 벗어난 경우
    OutOfRange(&'static str),
}

impl std::fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            CorrelationError::OutOfRange(msg) => write!(f, "유효 범위 밖: {msg}"),
        }
    }
}

impl std::error::Error for CorrelationError {}

impl From<crate::transport::DimensionlessError> for CorrelationError {
    fn from(value: crate::transport::DimensionlessError) -> Self {
        match value {
            crate::transport::DimensionlessError::InvalidInput(msg) => {
                CorrelationError::InvalidInput(msg)
            }
        }
    }
}

/// 열 이동 방향. Dittus-Boelter 지수 n을 가른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalDuty {
    /// 유체 가열 (n = 0.4)
    Heating,
    /// 유체 냉각 (n = 0.3)
    Cooling,
}

/// 난류 영역에서 사용할 상관식 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeCorrelation {
    /// 벽면 점도가 있으면 Sieder-Tate, 없으면 Dittus-Boelter
    Auto,
    DittusBoelter,
    Colburn,
    SiederTate,
    /// Colburn 유사로 St를 구한 뒤 h = St·ρ·u·cp
    StantonAnalogy,
}

/// 관내 강제대류 경막계수 계산 입력.
#[derive(Debug, Clone)]
pub struct TubeFlowInput {
    /// 유체 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 관 내경 [m]
    pub diameter_m: f64,
    /// 벌크 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 벽면 온도 기준 점도 [Pa·s]. Sieder-Tate 보정에 사용한다.
    pub wall_viscosity_pa_s: Option<f64>,
    /// 정압비열 [J/(kg·K)]
    pub specific_heat_j_per_kg_k: f64,
    /// 열전도율 [W/(m·K)]
    pub conductivity_w_per_m_k: f64,
    /// 관 길이 [m]. 층류/천이 상관식의 입구 효과 보정에 필요하다.
    pub tube_length_m: Option<f64>,
    /// 가열/냉각 구분
    pub duty: ThermalDuty,
    /// 난류 상관식 선택
    pub correlation: TubeCorrelation,
}

/// 관내 강제대류 계산 결과.
#[derive(Debug, Clone)]
pub struct TubeFilmResult {
    pub reynolds: f64,
    pub prandtl: f64,
    pub nusselt: f64,
    /// 경막 열전달계수 [W/(m²·K)]
    pub film_coefficient_w_per_m2_k: f64,
    pub regime: FlowRegime,
    /// 실제 적용된 상관식 이름
    pub correlation_name: &'static str,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 유동 영역과 입력 모드에 따라 상관식을 선택해 관내 경막계수를 계산한다.
///
/// - Re < 2100: Sieder-Tate 층류식, 그레츠수가 작으면 Nu = 3.66
/// - 2100 ≤ Re < 10⁴: Hausen 천이식 (경고 포함)
/// - Re ≥ 10⁴: 선택한 난류 상관식 (Auto는 벽면 점도 유무로 결정)
pub fn tube_film_coefficient(input: TubeFlowInput) -> Result<TubeFilmResult, CorrelationError> {
    if input.velocity_m_per_s <= 0.0 {
        return Err(CorrelationError::InvalidInput(
            "관내 유동은 유속이 0보다 커야 합니다.",
        ));
    }
    if let Some(mu_w) = input.wall_viscosity_pa_s {
        if mu_w <= 0.0 {
            return Err(CorrelationError::InvalidInput(
                "벽면 점도는 0보다 커야 합니다.",
            ));
        }
    }
    if let Some(l) = input.tube_length_m {
        if l <= 0.0 {
            return Err(CorrelationError::InvalidInput(
                "관 길이는 0보다 커야 합니다.",
            ));
        }
    }

    let re = reynolds_pipe(
        input.density_kg_per_m3,
        input.velocity_m_per_s,
        input.diameter_m,
        input.viscosity_pa_s,
    )?;
    let pr = prandtl(
        input.specific_heat_j_per_kg_k,
        input.viscosity_pa_s,
        input.conductivity_w_per_m_k,
    )?;
    let regime = classify_regime(re);

    let mut warnings = Vec::new();
    let viscosity_ratio = match input.wall_viscosity_pa_s {
        Some(mu_w) => input.viscosity_pa_s / mu_w,
        None => 1.0,
    };

    let (nusselt, correlation_name) = match regime {
        FlowRegime::Laminar => laminar_nusselt(&input, re, pr, viscosity_ratio, &mut warnings),
        FlowRegime::Transitional => {
            warnings.push(
                "천이 영역(2100 ≤ Re < 10⁴)입니다. Hausen 상관식 결과는 참고용입니다.".into(),
            );
            let d_over_l = match input.tube_length_m {
                Some(l) => input.diameter_m / l,
                None => {
                    warnings.push("관 길이 미입력: 입구 효과 보정 없이 계산합니다.".into());
                    0.0
                }
            };
            if input.wall_viscosity_pa_s.is_none() {
                warnings.push("벽면 점도 미입력: (μ/μw) = 1로 가정합니다.".into());
            }
            (
                correlations::hausen_transitional(re, pr, d_over_l, viscosity_ratio),
                "Hausen",
            )
        }
        FlowRegime::Turbulent => turbulent_nusselt(&input, re, pr, viscosity_ratio, &mut warnings)?,
    };

    if regime != FlowRegime::Turbulent && input.correlation != TubeCorrelation::Auto {
        warnings.push(format!(
            "Re = {re:.0} 영역에서는 선택한 난류 상관식 대신 영역별 상관식을 적용했습니다."
        ));
    }
    if regime == FlowRegime::Turbulent && !(0.6..=160.0).contains(&pr) {
        warnings.push(format!(
            "Pr = {pr:.2}는 난류 상관식 유효 범위(0.6~160)를 벗어납니다."
        ));
    }

    let film = nusselt * input.conductivity_w_per_m_k / input.diameter_m;
    Ok(TubeFilmResult {
        reynolds: re,
        prandtl: pr,
        nusselt,
        film_coefficient_w_per_m2_k: film,
        regime,
        correlation_name,
        warnings,
    })
}

/// 그레츠수가 이 값보다 작으면 층류식 대신 완전 발달 한계값을 쓴다.
const GRAETZ_LOWER_LIMIT: f64 = 10.0;

fn laminar_nusselt(
    input: &TubeFlowInput,
    re: f64,
    pr: f64,
    viscosity_ratio: f64,
    warnings: &mut Vec<String>,
) -> (f64, &'static str) {
    match input.tube_length_m {
        Some(length_m) => {
            let graetz = re * pr * input.diameter_m / length_m;
            if graetz < GRAETZ_LOWER_LIMIT {
                warnings.push(format!(
                    "그레츠수 {graetz:.1}가 작아 완전 발달 한계값 Nu = 3.66을 적용합니다."
                ));
                (correlations::NU_LAMINAR_FULLY_DEVELOPED, "Nu = 3.66")
            } else {
                if input.wall_viscosity_pa_s.is_none() {
                    warnings.push("벽면 점도 미입력: (μ/μw) = 1로 가정합니다.".into());
                }
                (
                    correlations::sieder_tate_laminar(graetz, viscosity_ratio),
                    "Sieder-Tate (laminar)",
                )
            }
        }
        None => {
            warnings.push("관 길이 미입력: 완전 발달 층류 Nu = 3.66으로 가정합니다.".into());
            (correlations::NU_LAMINAR_FULLY_DEVELOPED, "Nu = 3.66")
        }
    }
}

fn turbulent_nusselt(
    input: &TubeFlowInput,
    re: f64,
    pr: f64,
    viscosity_ratio: f64,
    warnings: &mut Vec<String>,
) -> Result<(f64, &'static str), CorrelationError> {
    let n = match input.duty {
        ThermalDuty::Heating => 0.4,
        ThermalDuty::Cooling => 0.3,
    };
    let picked = match input.correlation {
        TubeCorrelation::Auto => {
            if input.wall_viscosity_pa_s.is_some() {
                TubeCorrelation::SiederTate
            } else {
                TubeCorrelation::DittusBoelter
            }
        }
        other => other,
    };
    let result = match picked {
        TubeCorrelation::DittusBoelter => (
            correlations::dittus_boelter(re, pr, n),
            "Dittus-Boelter",
        ),
        TubeCorrelation::Colburn => (correlations::colburn(re, pr), "Colburn"),
        TubeCorrelation::SiederTate => {
            if input.wall_viscosity_pa_s.is_none() {
                return Err(CorrelationError::InvalidInput(
                    "Sieder-Tate 상관식은 벽면 점도가 필요합니다.",
                ));
            }
            (
                correlations::sieder_tate_turbulent(re, pr, viscosity_ratio),
                "Sieder-Tate",
            )
        }
        TubeCorrelation::StantonAnalogy => {
            // St 경로도 Nu = St·Re·Pr로 환산해 동일한 결과 구조를 유지한다.
            let st = correlations::stanton_colburn_analogy(re, pr);
            warnings.push(format!("Colburn 유사 기준 St = {st:.4e}"));
            (st * re * pr, "Stanton-Colburn analogy")
        }
        TubeCorrelation::Auto => unreachable!("Auto는 위에서 구체 상관식으로 치환된다"),
    };
    Ok(result)
}

/// 원통 외부 직교류 경막계수 계산 입력.
#[derive(Debug, Clone)]
pub struct CrossflowCylinderInput {
    /// 유체 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 접근 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 원통 외경 [m]
    pub diameter_m: f64,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 정압비열 [J/(kg·K)]
    pub specific_heat_j_per_kg_k: f64,
    /// 열전도율 [W/(m·K)]
    pub conductivity_w_per_m_k: f64,
}

/// 원통 외부 직교류 계산 결과.
#[derive(Debug, Clone)]
pub struct CrossflowFilmResult {
    pub reynolds: f64,
    pub prandtl: f64,
    pub nusselt: f64,
    /// 경막 열전달계수 [W/(m²·K)]
    pub film_coefficient_w_per_m2_k: f64,
    pub correlation_name: &'static str,
    pub warnings: Vec<String>,
}

/// Churchill-Bernstein 상관식으로 원통 외부 직교류 경막계수를 계산한다.
pub fn crossflow_cylinder_film_coefficient(
    input: CrossflowCylinderInput,
) -> Result<CrossflowFilmResult, CorrelationError> {
    if input.velocity_m_per_s <= 0.0 {
        return Err(CorrelationError::InvalidInput(
            "접근 유속은 0보다 커야 합니다.",
        ));
    }
    let re = reynolds_pipe(
        input.density_kg_per_m3,
        input.velocity_m_per_s,
        input.diameter_m,
        input.viscosity_pa_s,
    )?;
    let pr = prandtl(
        input.specific_heat_j_per_kg_k,
        input.viscosity_pa_s,
        input.conductivity_w_per_m_k,
    )?;
    if re * pr <= 0.2 {
        return Err(CorrelationError::OutOfRange(
            "Churchill-Bernstein은 Re·Pr > 0.2에서만 유효합니다.",
        ));
    }

    let nusselt = correlations::churchill_bernstein(re, pr);
    let film = nusselt * input.conductivity_w_per_m_k / input.diameter_m;
    Ok(CrossflowFilmResult {
        reynolds: re,
        prandtl: pr,
        nusselt,
        film_coefficient_w_per_m2_k: film,
        correlation_name: "Churchill-Bernstein",
        warnings: Vec::new(),
    })
}

/// 수직면 자연대류 경막계수 계산 입력.
#[derive(Debug, Clone)]
pub struct NaturalConvectionInput {
    /// 체적팽창계수 β [1/K]. 이상기체는 1/T 근사를 쓴다.
    pub expansion_coeff_per_k: f64,
    /// 표면-유체 온도차 [K]
    pub delta_t_k: f64,
    /// 수직 특성 길이(높이) [m]
    pub height_m: f64,
    /// 동점성계수 ν [m²/s]
    pub kinematic_viscosity_m2_per_s: f64,
    /// 프란틀수
    pub prandtl: f64,
    /// 열전도율 [W/(m·K)]
    pub conductivity_w_per_m_k: f64,
}

/// 수직면 자연대류 계산 결과.
#[derive(Debug, Clone)]
pub struct NaturalConvectionResult {
    pub grashof: f64,
    pub rayleigh: f64,
    pub prandtl: f64,
    pub nusselt: f64,
    /// 경막 열전달계수 [W/(m²·K)]
    pub film_coefficient_w_per_m2_k: f64,
    pub correlation_name: &'static str,
    pub warnings: Vec<String>,
}

/// 레일리수 층류/난류 분기 경계.
const RA_LAMINAR_LIMIT: f64 = 1.0e9;

/// Churchill-Chu 상관식으로 수직면 자연대류 경막계수를 계산한다.
/// Ra ≤ 10⁹이면 층류식, 그보다 크면 전 영역식을 적용한다.
pub fn natural_convection_vertical(
    input: NaturalConvectionInput,
) -> Result<NaturalConvectionResult, CorrelationError> {
    if input.prandtl <= 0.0 {
        return Err(CorrelationError::InvalidInput(
            "프란틀수는 0보다 커야 합니다.",
        ));
    }
    if input.conductivity_w_per_m_k <= 0.0 {
        return Err(CorrelationError::InvalidInput(
            "열전도율은 0보다 커야 합니다.",
        ));
    }
    let gr = grashof(
        input.expansion_coeff_per_k,
        input.delta_t_k,
        input.height_m,
        input.kinematic_viscosity_m2_per_s,
    )?;
    let ra = rayleigh(gr, input.prandtl);

    let mut warnings = Vec::new();
    let (nusselt, correlation_name) = if ra <= RA_LAMINAR_LIMIT {
        (
            correlations::churchill_chu_laminar(ra, input.prandtl),
            "Churchill-Chu (laminar)",
        )
    } else {
        if ra > 1.0e12 {
            warnings.push(format!(
                "Ra = {ra:.2e}는 상관식 검증 범위(~10¹²)를 넘어 불확실성이 큽니다."
            ));
        }
        (
            correlations::churchill_chu_all(ra, input.prandtl),
            "Churchill-Chu",
        )
    };

    let film = nusselt * input.conductivity_w_per_m_k / input.height_m;
    Ok(NaturalConvectionResult {
        grashof: gr,
        rayleigh: ra,
        prandtl: input.prandtl,
        nusselt,
        film_coefficient_w_per_m2_k: film,
        correlation_name,
        warnings,
    })
}
