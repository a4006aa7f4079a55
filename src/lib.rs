//! 계산 로직을 라이브러리로 분리해 CLI 외의 프런트엔드 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod heat_transfer;
pub mod i18n;
pub mod properties;
pub mod report;
pub mod substance_db;
pub mod thermo;
pub mod transport;
pub mod ui_cli;
pub mod units;
