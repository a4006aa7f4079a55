use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::heat_transfer::{
    self, CrossflowCylinderInput, NaturalConvectionInput, ThermalDuty, TubeCorrelation,
    TubeFlowInput,
};
use crate::i18n::{keys, Translator};
use crate::properties;
use crate::report::{self, Report};
use crate::substance_db;
use crate::thermo;
use crate::transport::{self, FlowRegime};
use crate::units::{
    convert_conductivity, convert_density, convert_length, convert_pressure, convert_specific_heat,
    convert_velocity, convert_viscosity, to_celsius, to_kelvin, ConductivityUnit, DensityUnit,
    LengthUnit, PressureUnit, SpecificHeatUnit, TemperatureUnit, VelocityUnit, ViscosityUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Dimensionless,
    FilmCoefficient,
    Thermo,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_DIMENSIONLESS));
    println!("{}", tr.t(keys::MAIN_MENU_FILM));
    println!("{}", tr.t(keys::MAIN_MENU_THERMO));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Dimensionless),
            "2" => return Ok(MenuChoice::FilmCoefficient),
            "3" => return Ok(MenuChoice::Thermo),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 무차원수 메뉴를 처리한다.
pub fn handle_dimensionless(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DIMENSIONLESS_HEADING));
    println!("{}", tr.t(keys::DIMENSIONLESS_OPTIONS_LINE1));
    println!("{}", tr.t(keys::DIMENSIONLESS_OPTIONS_LINE2));
    println!("{}", tr.t(keys::HELP_DIMENSIONLESS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => reynolds_by_velocity(tr, cfg)?,
        "2" => reynolds_by_mass_flow(tr, cfg)?,
        "3" => reynolds_by_kinematic(tr, cfg)?,
        "4" => prandtl_menu(tr, cfg)?,
        "5" => nusselt_menu(tr, cfg)?,
        "6" => grashof_menu(tr, cfg)?,
        "7" => stanton_by_film(tr, cfg)?,
        "8" => stanton_by_groups(tr, cfg)?,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn reynolds_by_velocity(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let density = read_density_si(tr, cfg)?;
    let velocity = read_velocity_si(tr, cfg)?;
    let diameter = read_length_si(tr, cfg, keys::PROMPT_DIAMETER)?;
    let viscosity = read_viscosity_si(tr, cfg, keys::PROMPT_VISCOSITY)?;
    let re = transport::reynolds_pipe(density, velocity, diameter, viscosity)?;
    let regime = transport::classify_regime(re);

    let mut rpt = Report::new("reynolds", tr.t(keys::LABEL_REYNOLDS));
    rpt.push_input(tr.t(keys::LABEL_DENSITY), format!("{} kg/m³", fmt_num(density)));
    rpt.push_input(tr.t(keys::LABEL_VELOCITY), format!("{} m/s", fmt_num(velocity)));
    rpt.push_input(tr.t(keys::LABEL_DIAMETER), format!("{} m", fmt_num(diameter)));
    rpt.push_input(tr.t(keys::LABEL_VISCOSITY), format!("{} Pa·s", fmt_num(viscosity)));
    rpt.push_result(tr.t(keys::LABEL_REYNOLDS), fmt_num(re));
    rpt.push_result(tr.t(keys::RESULT_REGIME), tr.t(regime_key(regime)));
    show_report(tr, cfg, &rpt)
}

fn reynolds_by_mass_flow(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let mass_flow = read_f64(tr, tr.t(keys::PROMPT_MASS_FLOW))?;
    let diameter = read_length_si(tr, cfg, keys::PROMPT_DIAMETER)?;
    let viscosity = read_viscosity_si(tr, cfg, keys::PROMPT_VISCOSITY)?;
    let re = transport::reynolds_from_mass_flow(mass_flow, diameter, viscosity)?;
    let regime = transport::classify_regime(re);

    let mut rpt = Report::new("reynolds", tr.t(keys::LABEL_REYNOLDS));
    rpt.push_input(tr.t(keys::LABEL_MASS_FLOW), format!("{} kg/s", fmt_num(mass_flow)));
    rpt.push_input(tr.t(keys::LABEL_DIAMETER), format!("{} m", fmt_num(diameter)));
    rpt.push_input(tr.t(keys::LABEL_VISCOSITY), format!("{} Pa·s", fmt_num(viscosity)));
    rpt.push_result(tr.t(keys::LABEL_REYNOLDS), fmt_num(re));
    rpt.push_result(tr.t(keys::RESULT_REGIME), tr.t(regime_key(regime)));
    show_report(tr, cfg, &rpt)
}

fn reynolds_by_kinematic(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let velocity = read_velocity_si(tr, cfg)?;
    let length = read_length_si(tr, cfg, keys::PROMPT_CHAR_LENGTH)?;
    let nu = read_f64(tr, tr.t(keys::PROMPT_KINEMATIC_VISCOSITY))?;
    let re = transport::reynolds_kinematic(velocity, length, nu)?;

    let mut rpt = Report::new("reynolds", tr.t(keys::LABEL_REYNOLDS));
    rpt.push_input(tr.t(keys::LABEL_VELOCITY), format!("{} m/s", fmt_num(velocity)));
    rpt.push_input(tr.t(keys::LABEL_CHAR_LENGTH), format!("{} m", fmt_num(length)));
    rpt.push_input(
        tr.t(keys::LABEL_KINEMATIC_VISCOSITY),
        format!("{} m²/s", fmt_num(nu)),
    );
    rpt.push_result(tr.t(keys::LABEL_REYNOLDS), fmt_num(re));
    show_report(tr, cfg, &rpt)
}

fn prandtl_menu(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let cp = read_specific_heat_si(tr, cfg)?;
    let viscosity = read_viscosity_si(tr, cfg, keys::PROMPT_VISCOSITY)?;
    let conductivity = read_conductivity_si(tr, cfg)?;
    let pr = transport::prandtl(cp, viscosity, conductivity)?;

    let mut rpt = Report::new("prandtl", tr.t(keys::LABEL_PRANDTL));
    rpt.push_input(
        tr.t(keys::LABEL_SPECIFIC_HEAT),
        format!("{} J/(kg·K)", fmt_num(cp)),
    );
    rpt.push_input(tr.t(keys::LABEL_VISCOSITY), format!("{} Pa·s", fmt_num(viscosity)));
    rpt.push_input(
        tr.t(keys::LABEL_CONDUCTIVITY),
        format!("{} W/(m·K)", fmt_num(conductivity)),
    );
    rpt.push_result(tr.t(keys::LABEL_PRANDTL), fmt_num(pr));
    show_report(tr, cfg, &rpt)
}

fn nusselt_menu(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let film = read_f64(tr, tr.t(keys::PROMPT_FILM_COEFF))?;
    let length = read_length_si(tr, cfg, keys::PROMPT_CHAR_LENGTH)?;
    let conductivity = read_conductivity_si(tr, cfg)?;
    let nu = transport::nusselt_from_film(film, length, conductivity)?;

    let mut rpt = Report::new("nusselt", tr.t(keys::LABEL_NUSSELT));
    rpt.push_input(
        tr.t(keys::LABEL_FILM_COEFF),
        format!("{} W/(m²·K)", fmt_num(film)),
    );
    rpt.push_input(tr.t(keys::LABEL_CHAR_LENGTH), format!("{} m", fmt_num(length)));
    rpt.push_input(
        tr.t(keys::LABEL_CONDUCTIVITY),
        format!("{} W/(m·K)", fmt_num(conductivity)),
    );
    rpt.push_result(tr.t(keys::LABEL_NUSSELT), fmt_num(nu));
    show_report(tr, cfg, &rpt)
}

fn grashof_menu(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let beta = read_f64(tr, tr.t(keys::PROMPT_EXPANSION_COEFF))?;
    let delta_t = read_f64(tr, tr.t(keys::PROMPT_DELTA_T))?;
    let length = read_length_si(tr, cfg, keys::PROMPT_CHAR_LENGTH)?;
    let nu = read_f64(tr, tr.t(keys::PROMPT_KINEMATIC_VISCOSITY))?;
    let gr = transport::grashof(beta, delta_t, length, nu)?;

    let mut rpt = Report::new("grashof", tr.t(keys::LABEL_GRASHOF));
    rpt.push_input(
        tr.t(keys::LABEL_EXPANSION_COEFF),
        format!("{} 1/K", fmt_num(beta)),
    );
    rpt.push_input(tr.t(keys::LABEL_DELTA_T), format!("{} K", fmt_num(delta_t)));
    rpt.push_input(tr.t(keys::LABEL_CHAR_LENGTH), format!("{} m", fmt_num(length)));
    rpt.push_input(
        tr.t(keys::LABEL_KINEMATIC_VISCOSITY),
        format!("{} m²/s", fmt_num(nu)),
    );
    rpt.push_result(tr.t(keys::LABEL_GRASHOF), fmt_num(gr));

    // Pr을 알면 Ra까지 같이 보여준다.
    let pr = read_f64(tr, tr.t(keys::PROMPT_PRANDTL_OPTIONAL))?;
    if pr > 0.0 {
        rpt.push_input(tr.t(keys::LABEL_PRANDTL), fmt_num(pr));
        rpt.push_result(tr.t(keys::LABEL_RAYLEIGH), fmt_num(transport::rayleigh(gr, pr)));
    }
    show_report(tr, cfg, &rpt)
}

fn stanton_by_film(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let film = read_f64(tr, tr.t(keys::PROMPT_FILM_COEFF))?;
    let density = read_density_si(tr, cfg)?;
    let velocity = read_velocity_si(tr, cfg)?;
    let cp = read_specific_heat_si(tr, cfg)?;
    let st = transport::stanton_from_film(film, density, velocity, cp)?;

    let mut rpt = Report::new("stanton", tr.t(keys::LABEL_STANTON));
    rpt.push_input(
        tr.t(keys::LABEL_FILM_COEFF),
        format!("{} W/(m²·K)", fmt_num(film)),
    );
    rpt.push_input(tr.t(keys::LABEL_DENSITY), format!("{} kg/m³", fmt_num(density)));
    rpt.push_input(tr.t(keys::LABEL_VELOCITY), format!("{} m/s", fmt_num(velocity)));
    rpt.push_input(
        tr.t(keys::LABEL_SPECIFIC_HEAT),
        format!("{} J/(kg·K)", fmt_num(cp)),
    );
    rpt.push_result(tr.t(keys::LABEL_STANTON), fmt_num(st));
    show_report(tr, cfg, &rpt)
}

fn stanton_by_groups(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let nu = read_f64(tr, tr.t(keys::PROMPT_NUSSELT))?;
    let re = read_f64(tr, tr.t(keys::PROMPT_REYNOLDS))?;
    let pr = read_f64(tr, tr.t(keys::PROMPT_PRANDTL))?;
    let st = transport::stanton_from_groups(nu, re, pr)?;

    let mut rpt = Report::new("stanton", tr.t(keys::LABEL_STANTON));
    rpt.push_input(tr.t(keys::LABEL_NUSSELT), fmt_num(nu));
    rpt.push_input(tr.t(keys::LABEL_REYNOLDS), fmt_num(re));
    rpt.push_input(tr.t(keys::LABEL_PRANDTL), fmt_num(pr));
    rpt.push_result(tr.t(keys::LABEL_STANTON), fmt_num(st));
    show_report(tr, cfg, &rpt)
}

/// 경막계수 메뉴를 처리한다.
pub fn handle_film_coefficient(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FILM_HEADING));
    println!("{}", tr.t(keys::FILM_OPTION_TUBE));
    println!("{}", tr.t(keys::FILM_OPTION_CROSSFLOW));
    println!("{}", tr.t(keys::FILM_OPTION_NATURAL));
    println!("{}", tr.t(keys::HELP_FILM_TUBE));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => film_tube(tr, cfg)?,
        "2" => film_crossflow(tr, cfg)?,
        "3" => film_natural(tr, cfg)?,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn film_tube(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let fluid = read_fluid_props(tr, cfg, true)?;
    let velocity = read_velocity_si(tr, cfg)?;
    let diameter = read_length_si(tr, cfg, keys::PROMPT_DIAMETER)?;
    let length = read_f64(tr, tr.t(keys::PROMPT_TUBE_LENGTH))?;
    let tube_length_m = if length > 0.0 { Some(length) } else { None };
    let duty = read_duty(tr)?;
    let correlation = read_correlation(tr)?;

    let input = TubeFlowInput {
        density_kg_per_m3: fluid.density_kg_per_m3,
        velocity_m_per_s: velocity,
        diameter_m: diameter,
        viscosity_pa_s: fluid.viscosity_pa_s,
        wall_viscosity_pa_s: fluid.wall_viscosity_pa_s,
        specific_heat_j_per_kg_k: fluid.specific_heat_j_per_kg_k,
        conductivity_w_per_m_k: fluid.conductivity_w_per_m_k,
        tube_length_m,
        duty,
        correlation,
    };
    let result = heat_transfer::tube_film_coefficient(input)?;

    let mut rpt = Report::new("film_tube", tr.t(keys::TITLE_FILM_TUBE));
    rpt.push_input(tr.t(keys::LABEL_FLUID), fluid.description.clone());
    push_fluid_inputs(&mut rpt, tr, &fluid);
    rpt.push_input(tr.t(keys::LABEL_VELOCITY), format!("{} m/s", fmt_num(velocity)));
    rpt.push_input(tr.t(keys::LABEL_DIAMETER), format!("{} m", fmt_num(diameter)));
    if let Some(l) = tube_length_m {
        rpt.push_input(tr.t(keys::LABEL_TUBE_LENGTH), format!("{} m", fmt_num(l)));
    }
    rpt.push_result(tr.t(keys::LABEL_REYNOLDS), fmt_num(result.reynolds));
    rpt.push_result(tr.t(keys::RESULT_REGIME), tr.t(regime_key(result.regime)));
    rpt.push_result(tr.t(keys::LABEL_PRANDTL), fmt_num(result.prandtl));
    rpt.push_result(tr.t(keys::LABEL_CORRELATION), result.correlation_name);
    rpt.push_result(tr.t(keys::LABEL_NUSSELT), fmt_num(result.nusselt));
    rpt.push_result(
        tr.t(keys::LABEL_FILM_COEFF),
        format!("{} W/(m²·K)", fmt_num(result.film_coefficient_w_per_m2_k)),
    );
    rpt.extend_warnings(&result.warnings);
    show_report(tr, cfg, &rpt)
}

fn film_crossflow(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let fluid = read_fluid_props(tr, cfg, false)?;
    let velocity = read_velocity_si(tr, cfg)?;
    let diameter = read_length_si(tr, cfg, keys::PROMPT_DIAMETER)?;

    let input = CrossflowCylinderInput {
        density_kg_per_m3: fluid.density_kg_per_m3,
        velocity_m_per_s: velocity,
        diameter_m: diameter,
        viscosity_pa_s: fluid.viscosity_pa_s,
        specific_heat_j_per_kg_k: fluid.specific_heat_j_per_kg_k,
        conductivity_w_per_m_k: fluid.conductivity_w_per_m_k,
    };
    let result = heat_transfer::crossflow_cylinder_film_coefficient(input)?;

    let mut rpt = Report::new("film_crossflow", tr.t(keys::TITLE_FILM_CROSSFLOW));
    rpt.push_input(tr.t(keys::LABEL_FLUID), fluid.description.clone());
    push_fluid_inputs(&mut rpt, tr, &fluid);
    rpt.push_input(tr.t(keys::LABEL_VELOCITY), format!("{} m/s", fmt_num(velocity)));
    rpt.push_input(tr.t(keys::LABEL_DIAMETER), format!("{} m", fmt_num(diameter)));
    rpt.push_result(tr.t(keys::LABEL_REYNOLDS), fmt_num(result.reynolds));
    rpt.push_result(tr.t(keys::LABEL_PRANDTL), fmt_num(result.prandtl));
    rpt.push_result(tr.t(keys::LABEL_CORRELATION), result.correlation_name);
    rpt.push_result(tr.t(keys::LABEL_NUSSELT), fmt_num(result.nusselt));
    rpt.push_result(
        tr.t(keys::LABEL_FILM_COEFF),
        format!("{} W/(m²·K)", fmt_num(result.film_coefficient_w_per_m2_k)),
    );
    rpt.extend_warnings(&result.warnings);
    show_report(tr, cfg, &rpt)
}

fn film_natural(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let sel = read_line(tr.t(keys::PROMPT_FLUID_SOURCE_NATURAL))?;
    let (input, fluid_desc) = match sel.trim() {
        "2" => {
            let t_k = read_temperature_k(tr, cfg)?;
            let p_bar = read_pressure_bar(tr, cfg)?;
            let props = properties::air_properties(t_k - 273.15, p_bar)?;
            let delta_t = read_f64(tr, tr.t(keys::PROMPT_DELTA_T))?;
            let height = read_length_si(tr, cfg, keys::PROMPT_CHAR_LENGTH)?;
            let input = NaturalConvectionInput {
                expansion_coeff_per_k: props.expansion_coeff_per_k,
                delta_t_k: delta_t,
                height_m: height,
                kinematic_viscosity_m2_per_s: props.viscosity_pa_s / props.density_kg_per_m3,
                prandtl: props.prandtl,
                conductivity_w_per_m_k: props.conductivity_w_per_m_k,
            };
            let desc = format!(
                "{} ({:.1} °C, {:.3} bar)",
                tr.t(keys::LABEL_FLUID_AIR),
                props.temperature_c,
                props.pressure_bar
            );
            (input, desc)
        }
        _ => {
            let beta = read_f64(tr, tr.t(keys::PROMPT_EXPANSION_COEFF))?;
            let delta_t = read_f64(tr, tr.t(keys::PROMPT_DELTA_T))?;
            let height = read_length_si(tr, cfg, keys::PROMPT_CHAR_LENGTH)?;
            let nu = read_f64(tr, tr.t(keys::PROMPT_KINEMATIC_VISCOSITY))?;
            let pr = read_f64(tr, tr.t(keys::PROMPT_PRANDTL))?;
            let k = read_conductivity_si(tr, cfg)?;
            let input = NaturalConvectionInput {
                expansion_coeff_per_k: beta,
                delta_t_k: delta_t,
                height_m: height,
                kinematic_viscosity_m2_per_s: nu,
                prandtl: pr,
                conductivity_w_per_m_k: k,
            };
            (input, tr.t(keys::LABEL_FLUID_MANUAL).to_string())
        }
    };

    let beta = input.expansion_coeff_per_k;
    let delta_t = input.delta_t_k;
    let height = input.height_m;
    let nu = input.kinematic_viscosity_m2_per_s;
    let result = heat_transfer::natural_convection_vertical(input)?;

    let mut rpt = Report::new("film_natural", tr.t(keys::TITLE_FILM_NATURAL));
    rpt.push_input(tr.t(keys::LABEL_FLUID), fluid_desc);
    rpt.push_input(tr.t(keys::LABEL_EXPANSION_COEFF), format!("{} 1/K", fmt_num(beta)));
    rpt.push_input(tr.t(keys::LABEL_DELTA_T), format!("{} K", fmt_num(delta_t)));
    rpt.push_input(tr.t(keys::LABEL_CHAR_LENGTH), format!("{} m", fmt_num(height)));
    rpt.push_input(
        tr.t(keys::LABEL_KINEMATIC_VISCOSITY),
        format!("{} m²/s", fmt_num(nu)),
    );
    rpt.push_result(tr.t(keys::LABEL_GRASHOF), fmt_num(result.grashof));
    rpt.push_result(tr.t(keys::LABEL_RAYLEIGH), fmt_num(result.rayleigh));
    rpt.push_result(tr.t(keys::LABEL_PRANDTL), fmt_num(result.prandtl));
    rpt.push_result(tr.t(keys::LABEL_CORRELATION), result.correlation_name);
    rpt.push_result(tr.t(keys::LABEL_NUSSELT), fmt_num(result.nusselt));
    rpt.push_result(
        tr.t(keys::LABEL_FILM_COEFF),
        format!("{} W/(m²·K)", fmt_num(result.film_coefficient_w_per_m2_k)),
    );
    rpt.extend_warnings(&result.warnings);
    show_report(tr, cfg, &rpt)
}

/// 이심인자·환산 상태량 메뉴를 처리한다.
pub fn handle_thermo(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::THERMO_HEADING));
    println!("{}", tr.t(keys::THERMO_OPTION_ACENTRIC_DB));
    println!("{}", tr.t(keys::THERMO_OPTION_ACENTRIC_MANUAL));
    println!("{}", tr.t(keys::THERMO_OPTION_REDUCED));
    println!("{}", tr.t(keys::HELP_THERMO));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => acentric_from_db(tr, cfg)?,
        "2" => acentric_manual(tr, cfg)?,
        "3" => reduced_state_menu(tr, cfg)?,
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn print_substance_list(tr: &Translator) {
    println!("{}", tr.t(keys::THERMO_LIST_SUBSTANCES));
    let entries: Vec<String> = substance_db::substances()
        .iter()
        .map(|s| format!("{} ({})", s.name, s.formula))
        .collect();
    for chunk in entries.chunks(3) {
        println!("  {}", chunk.join("  |  "));
    }
}

fn acentric_from_db(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    print_substance_list(tr);
    let query = read_line(tr.t(keys::PROMPT_SUBSTANCE))?;
    let Some(substance) = substance_db::find_substance(query.trim()) else {
        println!("{}", tr.t(keys::ERROR_UNKNOWN_SUBSTANCE));
        return Ok(());
    };

    let tb = substance.boiling_point_k;
    let tc = substance.critical_temperature_k;
    let pc = substance.critical_pressure_bar;

    let mut rpt = Report::new(
        "acentric",
        format!("{} - {}", tr.t(keys::TITLE_ACENTRIC), substance.name),
    );
    rpt.push_input(
        tr.t(keys::LABEL_SUBSTANCE),
        format!("{} ({})", substance.name, substance.formula),
    );
    rpt.push_input(tr.t(keys::LABEL_BOILING_POINT), format!("{tb} K"));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_T), format!("{tc} K"));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_P), format!("{pc} bar"));

    if let Some(antoine) = &substance.antoine {
        let definition = thermo::acentric_from_antoine(antoine, tc, pc)?;
        rpt.push_result(
            tr.t(keys::LABEL_ACENTRIC_DEFINITION),
            fmt_num(definition.acentric_factor),
        );
        rpt.push_result(
            tr.t(keys::LABEL_EVAL_TEMPERATURE),
            format!("{:.2} °C", definition.evaluation_temperature_c),
        );
        rpt.push_result(
            tr.t(keys::LABEL_VAPOR_PRESSURE),
            format!("{} bar", fmt_num(definition.vapor_pressure_bar)),
        );
        rpt.extend_warnings(&definition.warnings);
    } else {
        println!("{}", tr.t(keys::ERROR_NO_ANTOINE));
    }
    rpt.push_result(
        tr.t(keys::LABEL_ACENTRIC_EDMISTER),
        fmt_num(thermo::acentric_edmister(tb, tc, pc)?),
    );
    rpt.push_result(
        tr.t(keys::LABEL_ACENTRIC_LEE_KESLER),
        fmt_num(thermo::acentric_lee_kesler(tb, tc, pc)?),
    );
    rpt.push_result(
        tr.t(keys::LABEL_ACENTRIC_LIT),
        fmt_num(substance.acentric_factor_lit),
    );
    if !substance.notes.is_empty() {
        rpt.push_warning(substance.notes);
    }
    show_report(tr, cfg, &rpt)
}

fn acentric_manual(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let tb = read_f64(tr, tr.t(keys::PROMPT_BOILING_POINT))?;
    let tc = read_f64(tr, tr.t(keys::PROMPT_CRITICAL_T))?;
    let pc = read_f64(tr, tr.t(keys::PROMPT_CRITICAL_P))?;

    let mut rpt = Report::new("acentric", tr.t(keys::TITLE_ACENTRIC));
    rpt.push_input(tr.t(keys::LABEL_BOILING_POINT), format!("{tb} K"));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_T), format!("{tc} K"));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_P), format!("{pc} bar"));

    let wants_antoine = read_line(tr.t(keys::PROMPT_HAS_ANTOINE))?;
    if matches!(wants_antoine.trim(), "y" | "Y") {
        let a = read_f64(tr, tr.t(keys::PROMPT_ANTOINE_A))?;
        let b = read_f64(tr, tr.t(keys::PROMPT_ANTOINE_B))?;
        let c = read_f64(tr, tr.t(keys::PROMPT_ANTOINE_C))?;
        // 직접 입력 상수에는 적용 범위를 강제하지 않는다.
        let antoine = thermo::AntoineCoefficients {
            a,
            b,
            c,
            t_min_c: f64::MIN,
            t_max_c: f64::MAX,
        };
        let definition = thermo::acentric_from_antoine(&antoine, tc, pc)?;
        rpt.push_result(
            tr.t(keys::LABEL_ACENTRIC_DEFINITION),
            fmt_num(definition.acentric_factor),
        );
        rpt.push_result(
            tr.t(keys::LABEL_EVAL_TEMPERATURE),
            format!("{:.2} °C", definition.evaluation_temperature_c),
        );
        rpt.push_result(
            tr.t(keys::LABEL_VAPOR_PRESSURE),
            format!("{} bar", fmt_num(definition.vapor_pressure_bar)),
        );
        rpt.extend_warnings(&definition.warnings);
    }
    rpt.push_result(
        tr.t(keys::LABEL_ACENTRIC_EDMISTER),
        fmt_num(thermo::acentric_edmister(tb, tc, pc)?),
    );
    rpt.push_result(
        tr.t(keys::LABEL_ACENTRIC_LEE_KESLER),
        fmt_num(thermo::acentric_lee_kesler(tb, tc, pc)?),
    );
    show_report(tr, cfg, &rpt)
}

fn reduced_state_menu(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    print_substance_list(tr);
    let query = read_line(tr.t(keys::PROMPT_SUBSTANCE_OR_ENTER))?;
    let query = query.trim();
    let (tc, pc, substance_desc) = if query.is_empty() {
        let tc = read_f64(tr, tr.t(keys::PROMPT_CRITICAL_T))?;
        let pc = read_f64(tr, tr.t(keys::PROMPT_CRITICAL_P))?;
        (tc, pc, tr.t(keys::LABEL_FLUID_MANUAL).to_string())
    } else {
        let Some(substance) = substance_db::find_substance(query) else {
            println!("{}", tr.t(keys::ERROR_UNKNOWN_SUBSTANCE));
            return Ok(());
        };
        (
            substance.critical_temperature_k,
            substance.critical_pressure_bar,
            format!("{} ({})", substance.name, substance.formula),
        )
    };

    let t_k = read_temperature_k(tr, cfg)?;
    let p_bar = read_pressure_bar(tr, cfg)?;
    let state = thermo::reduced_state(t_k, p_bar, tc, pc)?;

    let mut rpt = Report::new("reduced_state", tr.t(keys::TITLE_REDUCED));
    rpt.push_input(tr.t(keys::LABEL_SUBSTANCE), substance_desc);
    rpt.push_input(tr.t(keys::LABEL_TEMPERATURE), format!("{} K", fmt_num(t_k)));
    rpt.push_input(tr.t(keys::LABEL_PRESSURE), format!("{} bar", fmt_num(p_bar)));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_T), format!("{tc} K"));
    rpt.push_input(tr.t(keys::LABEL_CRITICAL_P), format!("{pc} bar"));
    rpt.push_result(tr.t(keys::LABEL_REDUCED_T), fmt_num(state.reduced_temperature));
    rpt.push_result(tr.t(keys::LABEL_REDUCED_P), fmt_num(state.reduced_pressure));
    show_report(tr, cfg, &rpt)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_REPORT_DIR), cfg.report_dir);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim() {
                code @ ("ko" | "en" | "auto") => {
                    cfg.language = code.to_string();
                    println!("{}", tr.t(keys::SETTINGS_SAVED));
                    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_RESTART));
                }
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        "2" => {
            let dir = read_line(tr.t(keys::SETTINGS_PROMPT_REPORT_DIR))?;
            let dir = dir.trim();
            if dir.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
            } else {
                cfg.report_dir = dir.to_string();
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 수동/프리셋 공용 유체 물성 묶음.
struct FluidProps {
    description: String,
    density_kg_per_m3: f64,
    viscosity_pa_s: f64,
    specific_heat_j_per_kg_k: f64,
    conductivity_w_per_m_k: f64,
    wall_viscosity_pa_s: Option<f64>,
}

/// 유체 물성을 직접 입력받거나 물/공기 프리셋에서 가져온다.
fn read_fluid_props(tr: &Translator, cfg: &Config, ask_wall: bool) -> Result<FluidProps, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_FLUID_SOURCE))?;
    match sel.trim() {
        "2" => {
            let t_c = to_celsius(read_temperature_k(tr, cfg)?, TemperatureUnit::Kelvin);
            let props = properties::water_properties(t_c)?;
            let wall_viscosity = if ask_wall {
                let t_wall = read_f64(tr, tr.t(keys::PROMPT_WALL_TEMPERATURE))?;
                (t_wall > 0.0).then(|| properties::water_viscosity_pa_s(t_wall))
            } else {
                None
            };
            Ok(FluidProps {
                description: format!("{} ({:.1} °C)", tr.t(keys::LABEL_FLUID_WATER), t_c),
                density_kg_per_m3: props.density_kg_per_m3,
                viscosity_pa_s: props.viscosity_pa_s,
                specific_heat_j_per_kg_k: props.specific_heat_j_per_kg_k,
                conductivity_w_per_m_k: props.conductivity_w_per_m_k,
                wall_viscosity_pa_s: wall_viscosity,
            })
        }
        "3" => {
            let t_c = to_celsius(read_temperature_k(tr, cfg)?, TemperatureUnit::Kelvin);
            let p_bar = read_pressure_bar(tr, cfg)?;
            let props = properties::air_properties(t_c, p_bar)?;
            let wall_viscosity = if ask_wall {
                let t_wall = read_f64(tr, tr.t(keys::PROMPT_WALL_TEMPERATURE))?;
                if t_wall > 0.0 {
                    Some(properties::air_properties(t_wall, p_bar)?.viscosity_pa_s)
                } else {
                    None
                }
            } else {
                None
            };
            Ok(FluidProps {
                description: format!(
                    "{} ({:.1} °C, {:.3} bar)",
                    tr.t(keys::LABEL_FLUID_AIR),
                    t_c,
                    p_bar
                ),
                density_kg_per_m3: props.density_kg_per_m3,
                viscosity_pa_s: props.viscosity_pa_s,
                specific_heat_j_per_kg_k: props.specific_heat_j_per_kg_k,
                conductivity_w_per_m_k: props.conductivity_w_per_m_k,
                wall_viscosity_pa_s: wall_viscosity,
            })
        }
        _ => {
            let density = read_density_si(tr, cfg)?;
            let viscosity = read_viscosity_si(tr, cfg, keys::PROMPT_VISCOSITY)?;
            let cp = read_specific_heat_si(tr, cfg)?;
            let conductivity = read_conductivity_si(tr, cfg)?;
            let wall_viscosity = if ask_wall {
                let value = read_f64(tr, tr.t(keys::PROMPT_WALL_VISCOSITY))?;
                if value > 0.0 {
                    let unit = read_viscosity_unit(tr, cfg)?;
                    Some(convert_viscosity(value, unit, ViscosityUnit::PascalSecond))
                } else {
                    None
                }
            } else {
                None
            };
            Ok(FluidProps {
                description: tr.t(keys::LABEL_FLUID_MANUAL).to_string(),
                density_kg_per_m3: density,
                viscosity_pa_s: viscosity,
                specific_heat_j_per_kg_k: cp,
                conductivity_w_per_m_k: conductivity,
                wall_viscosity_pa_s: wall_viscosity,
            })
        }
    }
}

fn push_fluid_inputs(rpt: &mut Report, tr: &Translator, fluid: &FluidProps) {
    rpt.push_input(
        tr.t(keys::LABEL_DENSITY),
        format!("{} kg/m³", fmt_num(fluid.density_kg_per_m3)),
    );
    rpt.push_input(
        tr.t(keys::LABEL_VISCOSITY),
        format!("{} Pa·s", fmt_num(fluid.viscosity_pa_s)),
    );
    if let Some(mu_w) = fluid.wall_viscosity_pa_s {
        rpt.push_input(tr.t(keys::LABEL_WALL_VISCOSITY), format!("{} Pa·s", fmt_num(mu_w)));
    }
    rpt.push_input(
        tr.t(keys::LABEL_SPECIFIC_HEAT),
        format!("{} J/(kg·K)", fmt_num(fluid.specific_heat_j_per_kg_k)),
    );
    rpt.push_input(
        tr.t(keys::LABEL_CONDUCTIVITY),
        format!("{} W/(m·K)", fmt_num(fluid.conductivity_w_per_m_k)),
    );
}

fn read_duty(tr: &Translator) -> Result<ThermalDuty, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_DUTY))?;
    Ok(match sel.trim() {
        "2" => ThermalDuty::Cooling,
        _ => ThermalDuty::Heating,
    })
}

fn read_correlation(tr: &Translator) -> Result<TubeCorrelation, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_CORRELATION))?;
    Ok(match sel.trim() {
        "2" => TubeCorrelation::DittusBoelter,
        "3" => TubeCorrelation::Colburn,
        "4" => TubeCorrelation::SiederTate,
        "5" => TubeCorrelation::StantonAnalogy,
        _ => TubeCorrelation::Auto,
    })
}

/// 결과 보고서를 화면에 보여주고 파일 저장 여부를 묻는다.
fn show_report(tr: &Translator, cfg: &Config, rpt: &Report) -> Result<(), AppError> {
    println!("\n{}", rpt.render(tr));
    let answer = read_line(tr.t(keys::PROMPT_SAVE_REPORT))?;
    if matches!(answer.trim(), "y" | "Y") {
        let path = report::save_report(rpt, tr, Path::new(&cfg.report_dir))?;
        println!("{} {}", tr.t(keys::REPORT_SAVED), path.display());
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn regime_key(regime: FlowRegime) -> &'static str {
    match regime {
        FlowRegime::Laminar => keys::REGIME_LAMINAR,
        FlowRegime::Transitional => keys::REGIME_TRANSITIONAL,
        FlowRegime::Turbulent => keys::REGIME_TURBULENT,
    }
}

/// 크기가 천차만별인 무차원수를 보기 좋게 포맷한다.
fn fmt_num(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude >= 1.0e5 || magnitude < 1.0e-3) {
        format!("{value:.4e}")
    } else {
        format!("{value:.4}")
    }
}

fn read_temperature_unit(tr: &Translator, cfg: &Config) -> Result<TemperatureUnit, AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Celsius,
        "2" => TemperatureUnit::Kelvin,
        "3" => TemperatureUnit::Fahrenheit,
        _ => cfg.default_units.temperature,
    };
    Ok(unit)
}

fn read_pressure_unit(tr: &Translator, cfg: &Config) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => PressureUnit::Bar,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::MegaPascal,
        "4" => PressureUnit::Atm,
        "5" => PressureUnit::Psi,
        "6" => PressureUnit::MmHg,
        _ => cfg.default_units.pressure,
    };
    Ok(unit)
}

fn read_viscosity_unit(tr: &Translator, cfg: &Config) -> Result<ViscosityUnit, AppError> {
    println!("{}", tr.t(keys::VISCOSITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => ViscosityUnit::PascalSecond,
        "2" => ViscosityUnit::Centipoise,
        "3" => ViscosityUnit::Poise,
        _ => cfg.default_units.viscosity,
    };
    Ok(unit)
}

fn read_length_unit(tr: &Translator, cfg: &Config) -> Result<LengthUnit, AppError> {
    println!("{}", tr.t(keys::LENGTH_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => LengthUnit::Meter,
        "2" => LengthUnit::Centimeter,
        "3" => LengthUnit::Millimeter,
        "4" => LengthUnit::Inch,
        _ => cfg.default_units.length,
    };
    Ok(unit)
}

fn read_velocity_unit(tr: &Translator, cfg: &Config) -> Result<VelocityUnit, AppError> {
    println!("{}", tr.t(keys::VELOCITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => VelocityUnit::MeterPerSecond,
        "2" => VelocityUnit::FootPerSecond,
        "3" => VelocityUnit::KilometerPerHour,
        _ => cfg.default_units.velocity,
    };
    Ok(unit)
}

fn read_density_unit(tr: &Translator, cfg: &Config) -> Result<DensityUnit, AppError> {
    println!("{}", tr.t(keys::DENSITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => DensityUnit::KgPerCubicMeter,
        "2" => DensityUnit::GramPerCubicCentimeter,
        "3" => DensityUnit::PoundPerCubicFoot,
        _ => cfg.default_units.density,
    };
    Ok(unit)
}

fn read_conductivity_unit(tr: &Translator, cfg: &Config) -> Result<ConductivityUnit, AppError> {
    println!("{}", tr.t(keys::CONDUCTIVITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => ConductivityUnit::WattPerMeterKelvin,
        "2" => ConductivityUnit::KcalPerHourMeterCelsius,
        "3" => ConductivityUnit::BtuPerHourFootFahrenheit,
        _ => cfg.default_units.conductivity,
    };
    Ok(unit)
}

fn read_specific_heat_unit(tr: &Translator, cfg: &Config) -> Result<SpecificHeatUnit, AppError> {
    println!("{}", tr.t(keys::SPECIFIC_HEAT_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => SpecificHeatUnit::JoulePerKgKelvin,
        "2" => SpecificHeatUnit::KilojoulePerKgKelvin,
        "3" => SpecificHeatUnit::KcalPerKgCelsius,
        "4" => SpecificHeatUnit::BtuPerPoundFahrenheit,
        _ => cfg.default_units.specific_heat,
    };
    Ok(unit)
}

fn read_temperature_k(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_TEMPERATURE_VALUE))?;
    let unit = read_temperature_unit(tr, cfg)?;
    Ok(to_kelvin(value, unit))
}

fn read_pressure_bar(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_PRESSURE_VALUE))?;
    let unit = read_pressure_unit(tr, cfg)?;
    Ok(convert_pressure(value, unit, PressureUnit::Bar))
}

fn read_density_si(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_DENSITY))?;
    let unit = read_density_unit(tr, cfg)?;
    Ok(convert_density(value, unit, DensityUnit::KgPerCubicMeter))
}

fn read_velocity_si(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_VELOCITY))?;
    let unit = read_velocity_unit(tr, cfg)?;
    Ok(convert_velocity(value, unit, VelocityUnit::MeterPerSecond))
}

fn read_length_si(tr: &Translator, cfg: &Config, prompt_key: &str) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(prompt_key))?;
    let unit = read_length_unit(tr, cfg)?;
    Ok(convert_length(value, unit, LengthUnit::Meter))
}

fn read_viscosity_si(tr: &Translator, cfg: &Config, prompt_key: &str) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(prompt_key))?;
    let unit = read_viscosity_unit(tr, cfg)?;
    Ok(convert_viscosity(value, unit, ViscosityUnit::PascalSecond))
}

fn read_conductivity_si(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_CONDUCTIVITY))?;
    let unit = read_conductivity_unit(tr, cfg)?;
    Ok(convert_conductivity(value, unit, ConductivityUnit::WattPerMeterKelvin))
}

fn read_specific_heat_si(tr: &Translator, cfg: &Config) -> Result<f64, AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_SPECIFIC_HEAT))?;
    let unit = read_specific_heat_unit(tr, cfg)?;
    Ok(convert_specific_heat(
        value,
        unit,
        SpecificHeatUnit::JoulePerKgKelvin,
    ))
}
