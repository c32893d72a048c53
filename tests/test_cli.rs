use std::fs;

#[test]
fn barnwell_default_site() {
    assert_cli::Assert::main_binary()
        .stdout()
        .contains("Emplazamiento (predefinido): Barnwell")
        .stdout()
        .contains("Demanda de calor [kWh]: 1790.3")
        .stdout()
        .contains("Consumo de gas de caldera [kWh]: 721.5")
        .stdout()
        .contains("Emisiones de CO2 [kg]: 393.6")
        .stdout()
        .contains("** Resumen anual (Barnwell)")
        .unwrap();
}

#[test]
fn custom_site() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Custom"])
        .stdout()
        .contains("Emplazamiento (usuario): Custom")
        .stdout()
        .contains("Demanda de calor [kWh]: 1620.0")
        .stdout()
        .contains("Cogeneración (CHP): no instalada")
        .unwrap();
}

#[test]
fn list_sites() {
    assert_cli::Assert::main_binary()
        .with_args(&["--list"])
        .stdout()
        .contains("- Barnwell\n- Custom")
        .unwrap();
}

#[test]
fn list_sites_from_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["--sites", "test_data/sites.json", "--list"])
        .stdout()
        .contains("- Escuela\n- Hospital")
        .unwrap();
}

#[test]
fn unknown_site() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Atlantis"])
        .fails_with(exitcode::DATAERR)
        .and()
        .stderr()
        .contains("Emplazamiento desconocido \"Atlantis\"")
        .unwrap();
}

#[test]
fn bad_sites_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["--sites", "test_data/sites_mal.json"])
        .fails_with(exitcode::DATAERR)
        .unwrap();
}

#[test]
fn missing_params_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/no_existe.json"])
        .fails_with(exitcode::IOERR)
        .unwrap();
}

#[test]
fn params_file_with_zero_cop() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/parametros_bdc.json"])
        .stdout()
        .contains("Parámetros (archivo): \"test_data/parametros_bdc.json\"")
        .stdout()
        .contains("Demanda de calor [kWh]: 1200.0")
        .stdout()
        .contains("Producción térmica caldera [kWh]: 840.0")
        .stdout()
        .contains("Consumo eléctrico bomba de calor [kWh]: 0.0")
        .stdout()
        .contains("** Avisos\n- COP de la bomba de calor nulo o negativo")
        .stdout()
        .doesnt_contain("AVISO: COP de la bomba de calor")
        .unwrap();
}

#[test]
fn params_and_site_conflict() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/parametros_bdc.json", "-s", "Barnwell"])
        .fails()
        .unwrap();
}

#[test]
fn overrides_from_command_line() {
    assert_cli::Assert::main_binary()
        .with_args(&["--area", "20000", "--loss", "0.0"])
        .stdout()
        .contains("Superficie [m2]: 20000.00")
        .stdout()
        .contains("Demanda de calor [kWh]: 1080.0")
        .unwrap();
}

#[test]
fn warm_outdoor_temperature() {
    assert_cli::Assert::main_binary()
        .with_args(&["--text", "25"])
        .stdout()
        .contains("AVISO: temperatura exterior superior a la interior")
        .stdout()
        .contains("** Avisos\n- demanda de calor negativa")
        .stdout()
        .doesnt_contain("AVISO: demanda de calor negativa")
        .stdout()
        .contains("Producción térmica caldera [kWh]: 0.0")
        .unwrap();
}

#[test]
fn negative_override_values() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Custom", "--tint", "-5", "--text", "-10"])
        .stdout()
        .contains("T_int [ºC]: -5.0")
        .stdout()
        .contains("T_ext [ºC]: -10.0")
        .stdout()
        .contains("Demanda de calor [kWh]: 540.0")
        .unwrap();
}

#[test]
fn negative_fraction_is_rejected() {
    assert_cli::Assert::main_binary()
        .with_args(&["--loss", "-0.5"])
        .fails_with(exitcode::DATAERR)
        .and()
        .stderr()
        .contains("debe estar entre 0.00 y 1.00")
        .unwrap();
}

#[test]
fn fraction_out_of_range() {
    assert_cli::Assert::main_binary()
        .with_args(&["--boiler_eff", "1.5"])
        .fails_with(exitcode::DATAERR)
        .and()
        .stderr()
        .contains("debe estar entre 0.00 y 1.00")
        .unwrap();
}

#[test]
fn incomplete_climate_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["--clima", "test_data/clima_incompleto.json"])
        .fails_with(exitcode::DATAERR)
        .and()
        .stderr()
        .contains("12 meses")
        .unwrap();
}

#[test]
fn leap_year_climate_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["--clima", "test_data/clima_bisiesto.json"])
        .fails_with(exitcode::DATAERR)
        .and()
        .stderr()
        .contains("Número de días incorrecto para Feb")
        .unwrap();
}

#[test]
fn csv_and_json_output() {
    let dir = std::env::temp_dir();
    let csvpath = dir.join("dhbalance_test_forecast.csv");
    let jsonpath = dir.join("dhbalance_test_results.json");
    let csvname = csvpath.to_string_lossy().into_owned();
    let jsonname = jsonpath.to_string_lossy().into_owned();

    assert_cli::Assert::main_binary()
        .with_args(&[
            "--clima",
            "test_data/clima_frio.json",
            "--csv",
            &csvname,
            "--json",
            &jsonname,
        ])
        .stdout()
        .contains("#META DH_CLIMA: test_data/clima_frio.json")
        .unwrap();

    let csv = fs::read_to_string(&csvpath).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines[0].starts_with("month,days,heat_demand_kwh"));
    assert!(lines[13].starts_with("TOTAL,365,"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&jsonpath).unwrap()).unwrap();
    assert_eq!(json["site"], "Barnwell");
    assert_eq!(json["daily"]["days"], 1);
    assert_eq!(json["forecast"]["months"].as_array().unwrap().len(), 12);
}

#[test]
fn show_license() {
    assert_cli::Assert::main_binary()
        .with_args(&["-L"])
        .stdout()
        .contains("Permission is hereby granted")
        .unwrap();
}
