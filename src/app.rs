use crate::config::Config;
use crate::heat_transfer::CorrelationError;
use crate::i18n::{self, Translator};
use crate::properties::PropertyError;
use crate::report::ReportError;
use crate::thermo::ThermoError;
use crate::transport::DimensionlessError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 무차원수 계산 오류
    Dimensionless(DimensionlessError),
    /// 경막계수 계산 오류
    Correlation(CorrelationError),
    /// 열역학 보조 계산 오류
    Thermo(ThermoError),
    /// 물성 프리셋 오류
    Property(PropertyError),
    /// 보고서 저장 오류
    Report(ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Dimensionless(e) => write!(f, "무차원수 계산 오류: {e}"),
            AppError::Correlation(e) => write!(f, "경막계수 계산 오류: {e}"),
            AppError::Thermo(e) => write!(f, "열역학 계산 오류: {e}"),
            AppError::Property(e) => write!(f, "물성 계산 오류: {e}"),
            AppError::Report(e) => write!(f, "보고서 저장 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DimensionlessError> for AppError {
    fn from(value: DimensionlessError) -> Self {
        AppError::Dimensionless(value)
    }
}

impl From<CorrelationError> for AppError {
    fn from(value: CorrelationError) -> Self {
        AppError::Correlation(value)
    }
}

impl From<ThermoError> for AppError {
    fn from(value: ThermoError) -> Self {
        AppError::Thermo(value)
    }
}

impl From<PropertyError> for AppError {
    fn from(value: PropertyError) -> Self {
        AppError::Property(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Dimensionless => ui_cli::handle_dimensionless(tr, config)?,
            MenuChoice::FilmCoefficient => ui_cli::handle_film_coefficient(tr, config)?,
            MenuChoice::Thermo => ui_cli::handle_thermo(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
