//! 대류 경막 열전달계수 계산 모듈 모음.
//! 유동 영역과 입력 모드에 따라 교재 누셀트 상관식을 선택해 h = Nu·k/L을 구한다.

pub mod correlations;
pub mod film;

pub use film::*;
