//! 유동·전열 무차원수 계산 모듈 모음.

pub mod dimensionless;

pub use dimensionless::*;
