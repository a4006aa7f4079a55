//! 교재 누셀트 상관식 모음. 모든 함수는 무차원수만 받아 Nu를 돌려주는 순수 함수다.
//! 유효 범위 검사와 경고 구성은 상위의 선택 로직(film 모듈)이 담당한다.

/// Dittus-Boelter: Nu = 0.023·Re^0.8·Pr^n (가열 n=0.4, 냉각 n=0.3).
pub fn dittus_boelter(reynolds: f64, prandtl: f64, exponent_n: f64) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(exponent_n)
}

/// Colburn: Nu = 0.023·Re^0.8·Pr^(1/3).
pub fn colburn(reynolds: f64, prandtl: f64) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(1.0 / 3.0)
}

/// Sieder-Tate(난류): Nu = 0.027·Re^0.8·Pr^(1/3)·(μ/μw)^0.14.
pub fn sieder_tate_turbulent(reynolds: f64, prandtl: f64, viscosity_ratio: f64) -> f64 {
    0.027 * reynolds.powf(0.8) * prandtl.powf(1.0 / 3.0) * viscosity_ratio.powf(0.14)
}

/// Sieder-Tate(층류): Nu = 1.86·(Re·Pr·d/L)^(1/3)·(μ/μw)^0.14.
/// Re·Pr·d/L은 그레츠수 Gz에 해당한다.
pub fn sieder_tate_laminar(graetz: f64, viscosity_ratio: f64) -> f64 {
    1.86 * graetz.powf(1.0 / 3.0) * viscosity_ratio.powf(0.14)
}

/// 완전 발달 층류(등온 벽)의 한계 누셀트수.
pub const NU_LAMINAR_FULLY_DEVELOPED: f64 = 3.66;

/// Hausen(천이 영역): Nu = 0.116·(Re^(2/3)−125)·Pr^(1/3)·(1+(d/L)^(2/3))·(μ/μw)^0.14.
pub fn hausen_transitional(
    reynolds: f64,
    prandtl: f64,
    diameter_over_length: f64,
    viscosity_ratio: f64,
) -> f64 {
    0.116
        * (reynolds.powf(2.0 / 3.0) - 125.0)
        * prandtl.powf(1.0 / 3.0)
        * (1.0 + diameter_over_length.powf(2.0 / 3.0))
        * viscosity_ratio.powf(0.14)
}

/// Colburn 유사(스탠턴수 경로): St·Pr^(2/3) = 0.023·Re^(-0.2).
pub fn stanton_colburn_analogy(reynolds: f64, prandtl: f64) -> f64 {
    0.023 * reynolds.powf(-0.2) * prandtl.powf(-2.0 / 3.0)
}

/// Churchill-Bernstein(원통 외부 직교류):
/// Nu = 0.3 + 0.62·Re^(1/2)·Pr^(1/3)/[1+(0.4/Pr)^(2/3)]^(1/4)·[1+(Re/282000)^(5/8)]^(4/5).
/// Re·Pr > 0.2에서 유효하다.
pub fn churchill_bernstein(reynolds: f64, prandtl: f64) -> f64 {
    let base = 0.62 * reynolds.sqrt() * prandtl.powf(1.0 / 3.0)
        / (1.0 + (0.4 / prandtl).powf(2.0 / 3.0)).powf(0.25);
    let high_re = (1.0 + (reynolds / 282_000.0).powf(5.0 / 8.0)).powf(4.0 / 5.0);
    0.3 + base * high_re
}

/// Churchill-Chu(수직면 자연대류, 층류 Ra ≤ 1e9):
/// Nu = 0.68 + 0.670·Ra^(1/4)/[1+(0.492/Pr)^(9/16)]^(4/9).
pub fn churchill_chu_laminar(rayleigh: f64, prandtl: f64) -> f64 {
    let damping = (1.0 + (0.492 / prandtl).powf(9.0 / 16.0)).powf(4.0 / 9.0);
    0.68 + 0.670 * rayleigh.powf(0.25) / damping
}

/// Churchill-Chu(수직면 자연대류, 전 영역):
/// Nu = {0.825 + 0.387·Ra^(1/6)/[1+(0.492/Pr)^(9/16)]^(8/27)}².
pub fn churchill_chu_all(rayleigh: f64, prandtl: f64) -> f64 {
    let damping = (1.0 + (0.492 / prandtl).powf(9.0 / 16.0)).powf(8.0 / 27.0);
    let root = 0.825 + 0.387 * rayleigh.powf(1.0 / 6.0) / damping;
    root * root
}
