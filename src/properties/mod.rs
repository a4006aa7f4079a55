//! 물·공기 물성 프리셋. 수동 입력 없이 온도(·압력)만으로
//! 무차원수 계산에 필요한 물성 묶음을 만들어 준다.

pub mod air;
pub mod water;

pub use air::*;
pub use water::*;

/// 물성 프리셋 계산 오류.
#[derive(Debug)]
pub enum PropertyError {
    /// 지원 범위를 벗어난 입력
    OutOfRange(&'static str),
    /// IF97 계산 실패
    If97(&'static str),
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::OutOfRange(msg) => write!(f, "범위를 벗어남: {msg}"),
            PropertyError::If97(msg) => write!(f, "IF97 오류: {msg}"),
        }
    }
}

impl std::error::Error for PropertyError {}
