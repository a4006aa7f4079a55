//! 순수 물질 열역학 보조 계산(이심인자, 환산 상태량).

pub mod acentric;

pub use acentric::*;
