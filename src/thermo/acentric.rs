use crate::units::pressure::{ATM_BAR, MMHG_PER_BAR};

/// 열역학 보조 계산 오류.
#[derive(Debug)]
pub enum ThermoError {
    InvalidInput(&'static str),
}

impl std::fmt::Display for ThermoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThermoError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for ThermoError {}

/// Antoine 상수 세트. log10(P[mmHg]) = A − B / (C + T[°C]) 형식이다.
#[derive(Debug, Clone, Copy)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// 상수 적용 하한 온도 [°C]
    pub t_min_c: f64,
    /// 상수 적용 상한 온도 [°C]
    pub t_max_c: f64,
}

impl AntoineCoefficients {
    /// 주어진 온도에서 증기압을 계산한다 [bar].
    pub fn vapor_pressure_bar(&self, t_c: f64) -> f64 {
        let log_p_mmhg = self.a - self.b / (self.c + t_c);
        10.0_f64.powf(log_p_mmhg) / MMHG_PER_BAR
    }

    fn in_range(&self, t_c: f64) -> bool {
        (self.t_min_c..=self.t_max_c).contains(&t_c)
    }
}

/// 정의식 기반 이심인자 계산 결과.
#[derive(Debug, Clone)]
pub struct AcentricDefinitionResult {
    /// 이심인자 ω
    pub acentric_factor: f64,
    /// 평가 온도 Tr = 0.7에 해당하는 온도 [°C]
    pub evaluation_temperature_c: f64,
    /// 평가 온도에서의 증기압 [bar]
    pub vapor_pressure_bar: f64,
    /// 환산 증기압 Psat/Pc
    pub reduced_vapor_pressure: f64,
    pub warnings: Vec<String>,
}

/// 정의식으로 이심인자를 계산한다.
///
/// ω = −log10(Psat/Pc) − 1, Psat는 Tr = 0.7 (T = 0.7·Tc)에서 Antoine 식으로 구한다.
pub fn acentric_from_antoine(
    antoine: &AntoineCoefficients,
    tc_k: f64,
    pc_bar: f64,
) -> Result<AcentricDefinitionResult, ThermoError> {
    if tc_k <= 0.0 {
        return Err(ThermoError::InvalidInput("임계온도는 0 K보다 커야 합니다."));
    }
    if pc_bar <= 0.0 {
        return Err(ThermoError::InvalidInput("임계압력은 0보다 커야 합니다."));
    }

    let t_eval_k = 0.7 * tc_k;
    let t_eval_c = t_eval_k - 273.15;
    if antoine.c + t_eval_c <= 0.0 {
        return Err(ThermoError::InvalidInput(
            "Antoine 식 분모(C + T)가 0 이하가 되어 평가할 수 없습니다.",
        ));
    }

    let mut warnings = Vec::new();
    if !antoine.in_range(t_eval_c) {
        warnings.push(format!(
            "평가 온도 {:.2}°C가 Antoine 상수 적용 범위({:.0}~{:.0}°C)를 벗어나 외삽했습니다.",
            t_eval_c, antoine.t_min_c, antoine.t_max_c
        ));
    }

    let psat_bar = antoine.vapor_pressure_bar(t_eval_c);
    let reduced = psat_bar / pc_bar;
    let omega = -reduced.log10() - 1.0;
    Ok(AcentricDefinitionResult {
        acentric_factor: omega,
        evaluation_temperature_c: t_eval_c,
        vapor_pressure_bar: psat_bar,
        reduced_vapor_pressure: reduced,
        warnings,
    })
}

fn check_boiling_inputs(tb_k: f64, tc_k: f64, pc_bar: f64) -> Result<f64, ThermoError> {
    if tb_k <= 0.0 {
        return Err(ThermoError::InvalidInput(
            "정상 끓는점은 0 K보다 커야 합니다.",
        ));
    }
    if tc_k <= 0.0 {
        return Err(ThermoError::InvalidInput("임계온도는 0 K보다 커야 합니다."));
    }
    if pc_bar <= 0.0 {
        return Err(ThermoError::InvalidInput("임계압력은 0보다 커야 합니다."));
    }
    let theta = tb_k / tc_k;
    if theta >= 1.0 {
        return Err(ThermoError::InvalidInput(
            "끓는점이 임계온도 이상이면 계산할 수 없습니다.",
        ));
    }
    Ok(theta)
}

/// Edmister 추산식으로 이심인자를 계산한다.
///
/// ω = (3/7)·[θ/(1−θ)]·log10(Pc[atm]) − 1, θ = Tb/Tc.
pub fn acentric_edmister(tb_k: f64, tc_k: f64, pc_bar: f64) -> Result<f64, ThermoError> {
    let theta = check_boiling_inputs(tb_k, tc_k, pc_bar)?;
    let pc_atm = pc_bar / ATM_BAR;
    Ok((3.0 / 7.0) * (theta / (1.0 - theta)) * pc_atm.log10() - 1.0)
}

/// Lee-Kesler 추산식으로 이심인자를 계산한다. ω = α/β, 압력은 atm 기준.
pub fn acentric_lee_kesler(tb_k: f64, tc_k: f64, pc_bar: f64) -> Result<f64, ThermoError> {
    let theta = check_boiling_inputs(tb_k, tc_k, pc_bar)?;
    let pc_atm = pc_bar / ATM_BAR;
    let alpha = -pc_atm.ln() - 5.92714 + 6.09648 / theta + 1.28862 * theta.ln()
        - 0.169347 * theta.powi(6);
    let beta = 15.2518 - 15.6875 / theta - 13.4721 * theta.ln() + 0.43577 * theta.powi(6);
    Ok(alpha / beta)
}

/// 환산 상태량.
#[derive(Debug, Clone, Copy)]
pub struct ReducedState {
    /// Tr = T/Tc
    pub reduced_temperature: f64,
    /// Pr = P/Pc
    pub reduced_pressure: f64,
}

/// 환산온도·환산압력을 계산한다. 온도는 K, 압력은 절대압 기준.
pub fn reduced_state(
    t_k: f64,
    p_bar: f64,
    tc_k: f64,
    pc_bar: f64,
) -> Result<ReducedState, ThermoError> {
    if t_k <= 0.0 {
        return Err(ThermoError::InvalidInput("온도는 0 K보다 커야 합니다."));
    }
    if p_bar <= 0.0 {
        return Err(ThermoError::InvalidInput("압력은 절대압으로 0보다 커야 합니다."));
    }
    if tc_k <= 0.0 {
        return Err(ThermoError::InvalidInput("임계온도는 0 K보다 커야 합니다."));
    }
    if pc_bar <= 0.0 {
        return Err(ThermoError::InvalidInput("임계압력은 0보다 커야 합니다."));
    }
    Ok(ReducedState {
        reduced_temperature: t_k / tc_k,
        reduced_pressure: p_bar / pc_bar,
    })
}
