// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

#[macro_use]
extern crate clap;

use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use serde::Serialize;

use dhbalance::{
    site::{self, SitePresets},
    types::{normalize, Balance, MetaVec, Params, RawParams},
    *,
};

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Archivo {} no encontrado", path.display()))
}

fn writefile(path: &Path, content: &[u8]) {
    if let Err(err) = fs::write(path, content) {
        eprintln!(
            "ERROR: no se ha podido escribir en \"{}\": {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    }
}

/// Inicia el registro de diagnóstico según el nivel de detalle (-v)
fn init_tracing(verbosity: u64) {
    let level = match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("AVISO: no se ha podido iniciar el registro de diagnóstico");
    }
}

/// Carga los emplazamientos predefinidos desde archivo o los de la librería
fn get_presets(archivo: Option<&str>) -> SitePresets {
    match archivo {
        Some(archivo) => {
            let path = Path::new(archivo);
            let presets_string = readfile(path).unwrap_or_else(|err| {
                eprintln!(
                    "ERROR: No se ha podido leer el archivo de emplazamientos \"{}\" -> {:#}",
                    path.display(),
                    err
                );
                exit(exitcode::IOERR);
            });
            println!("Emplazamientos (archivo): \"{}\"", path.display());
            presets_string.parse().unwrap_or_else(|err| {
                eprintln!(
                    "ERROR: Formato incorrecto del archivo de emplazamientos \"{}\" ({})",
                    path.display(),
                    err
                );
                exit(exitcode::DATAERR);
            })
        }
        None => site::default_presets(),
    }
}

/// Obtén los datos de entrada
/// Archivo de parámetros > Emplazamiento predefinido (CLI) > Emplazamiento por defecto
fn get_raw_params(matches: &ArgMatches<'_>, presets: &SitePresets) -> (String, RawParams) {
    if let Some(archivo) = matches.value_of("archivo_parametros") {
        let path = Path::new(archivo);
        let params_string = readfile(path).unwrap_or_else(|err| {
            eprintln!(
                "ERROR: No se ha podido leer el archivo de parámetros \"{}\" -> {:#}",
                path.display(),
                err
            );
            exit(exitcode::IOERR);
        });
        println!("Parámetros (archivo): \"{}\"", path.display());
        let raw: RawParams = serde_json::from_str(&params_string).unwrap_or_else(|err| {
            eprintln!(
                "ERROR: Formato incorrecto del archivo de parámetros \"{}\" ({})",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        });
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| archivo.to_string());
        return (name, raw);
    }

    let (name, orig) = match matches.value_of("site") {
        Some(name) => (name, "usuario"),
        None => (site::data::SITE_DEFAULT, "predefinido"),
    };
    match presets.get(name) {
        Some(raw) => {
            println!("Emplazamiento ({}): {}", orig, name);
            (name.to_string(), raw.clone())
        }
        None => {
            eprintln!(
                "ERROR: Emplazamiento desconocido \"{}\". Disponibles: {}",
                name,
                presets.names().join(", ")
            );
            exit(exitcode::DATAERR);
        }
    }
}

/// Valor numérico de un argumento de la CLI, si se ha indicado
fn get_value(matches: &ArgMatches<'_>, name: &str, descr: &str) -> Option<f64> {
    if matches.occurrences_of(name) == 0 {
        return None;
    }
    let value = value_t!(matches, name, f64).unwrap_or_else(|_| {
        eprintln!(
            "ERROR: El valor de {} indicado no es un valor numérico válido",
            descr
        );
        exit(exitcode::DATAERR);
    });
    Some(value)
}

/// Sustituye los datos de entrada por los valores indicados en la CLI
fn apply_overrides(matches: &ArgMatches<'_>, raw: &mut RawParams, verbosity: u64) {
    let overrides: [(&str, &str, &mut Option<f64>); 6] = [
        ("area", "superficie", &mut raw.floor_area),
        ("tint", "temperatura interior", &mut raw.indoor_temp),
        ("text", "temperatura exterior", &mut raw.outdoor_temp),
        ("uvalue", "transmitancia", &mut raw.u_value),
        ("loss", "fracción de pérdidas", &mut raw.system_loss_fraction),
        ("boiler_eff", "rendimiento de caldera", &mut raw.boiler_efficiency),
    ];
    for (name, descr, field) in overrides {
        if let Some(value) = get_value(matches, name, descr) {
            if verbosity > 0 {
                println!("Valor de {} (usuario): {}", descr, value);
            }
            *field = Some(value);
        }
    }
}

/// Comprueba que las fracciones indicadas en la CLI están en [0, 1]
fn validate_fractions(matches: &ArgMatches<'_>) {
    for (name, descr) in &[
        ("loss", "la fracción de pérdidas"),
        ("boiler_eff", "el rendimiento de caldera"),
    ] {
        if let Some(value) = get_value(matches, name, descr) {
            if !(0.0..=1.0).contains(&value) {
                eprintln!(
                    "ERROR: {} debe estar entre 0.00 y 1.00 y vale {:.2}",
                    descr, value
                );
                exit(exitcode::DATAERR);
            }
        }
    }
}

/// Carga el perfil climático desde archivo o el de referencia
fn get_climate(archivo: Option<&str>) -> (String, ClimateProfile) {
    match archivo {
        Some(archivo) => {
            let path = Path::new(archivo);
            let clima = readfile(path)
                .and_then(|s| s.parse::<ClimateProfile>().map_err(anyhow::Error::from))
                .unwrap_or_else(|err| {
                    eprintln!(
                        "ERROR: No se ha podido interpretar el archivo climático \"{}\" -> {:#}",
                        path.display(),
                        err
                    );
                    exit(exitcode::DATAERR);
                });
            println!("Perfil climático (archivo): \"{}\"", path.display());
            (path.display().to_string(), clima)
        }
        None => ("referencia".to_string(), ClimateProfile::default()),
    }
}

/// Resultados completos para la salida JSON
#[derive(Serialize)]
struct Report<'a> {
    version: &'a str,
    site: &'a str,
    params: &'a Params,
    daily: &'a Balance,
    forecast: &'a ForecastSeries,
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("DhBalance")
        .bin_name("dhbalance")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("DhBalance - Balance energético de instalaciones de calefacción de distrito.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("site")
            .short("s")
            .long("site")
            .value_name("EMPLAZAMIENTO")
            .help("Emplazamiento predefinido (p.e. Barnwell, Custom)")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_parametros")
            .short("p")
            .long("params")
            .value_name("ARCHIVO_PARAMETROS")
            .conflicts_with("site")
            .help("Archivo JSON de parámetros de cálculo")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("archivo_emplazamientos")
            .long("sites")
            .value_name("ARCHIVO_EMPLAZAMIENTOS")
            .help("Archivo JSON de emplazamientos predefinidos")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("archivo_clima")
            .long("clima")
            .value_name("ARCHIVO_CLIMA")
            .help("Archivo JSON con el perfil climático mensual")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("area")
            .long("area")
            .value_name("AREA")
            .allow_hyphen_values(true)
            .help("Superficie [m2]")
            .takes_value(true))
        .arg(Arg::with_name("tint")
            .long("tint")
            .value_name("T_INT")
            .allow_hyphen_values(true)
            .help("Temperatura interior [ºC]")
            .takes_value(true))
        .arg(Arg::with_name("text")
            .long("text")
            .value_name("T_EXT")
            .allow_hyphen_values(true)
            .help("Temperatura exterior [ºC]")
            .takes_value(true))
        .arg(Arg::with_name("uvalue")
            .long("uvalue")
            .value_name("U")
            .allow_hyphen_values(true)
            .help("Transmitancia de la envolvente [W/m2K]")
            .takes_value(true))
        .arg(Arg::with_name("loss")
            .long("loss")
            .value_name("F_LOSS")
            .allow_hyphen_values(true)
            .help("Fracción de pérdidas del sistema [0, 1]")
            .takes_value(true))
        .arg(Arg::with_name("boiler_eff")
            .long("boiler_eff")
            .value_name("ETA")
            .allow_hyphen_values(true)
            .help("Rendimiento de la caldera [0, 1]")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_csv")
            .long("csv")
            .value_name("ARCHIVO_SALIDA_CSV")
            .help("Archivo de salida de la previsión mensual en formato CSV")
            .takes_value(true))
        .arg(Arg::with_name("list")
            .long("list")
            .help("Muestra los emplazamientos predefinidos disponibles"))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <dani@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_tracing(verbosity);

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    // Emplazamientos predefinidos -----------------------------------------------------------------
    let presets = get_presets(matches.value_of("archivo_emplazamientos"));

    if matches.is_present("list") {
        println!("** Emplazamientos disponibles");
        for name in presets.names() {
            println!("- {}", name);
        }
        exit(exitcode::OK);
    }

    println!("** Datos de entrada");

    // Parámetros de cálculo -----------------------------------------------------------------------
    validate_fractions(&matches);
    let (site_name, mut raw) = get_raw_params(&matches, &presets);
    apply_overrides(&matches, &mut raw, verbosity);
    let params = normalize(raw);

    println!("{}", site::params_to_plain(&params));
    for warning in params.check() {
        println!("AVISO: {}", warning);
    }

    // Perfil climático ------------------------------------------------------------------------------
    let (clima_name, clima) = get_climate(matches.value_of("archivo_clima"));

    // Cálculo del balance diario y de la previsión mensual -----------------------------------------
    let daily = daily_balance(&params);
    let mut forecast = monthly_forecast(&params, &clima);
    forecast.set_meta(site::META_SITE, &site_name);
    forecast.set_meta(site::META_CLIMATE, &clima_name);
    if let Some(archivo) = matches.value_of("archivo_parametros") {
        forecast.set_meta(site::META_PARAMS, archivo);
    }

    // Salida de resultados ------------------------------------------------------------------------
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let report = Report {
            version: VERSION,
            site: &site_name,
            params: &params,
            daily: &daily,
            forecast: &forecast,
        };
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido convertir el balance al formato JSON");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(path, json.as_bytes());
    }

    if matches.is_present("archivo_salida_csv") {
        let path = Path::new(matches.value_of_os("archivo_salida_csv").unwrap());
        if verbosity > 0 {
            println!("Previsión mensual en formato CSV: {:?}", path.display());
        }
        let csv = site::forecast_to_csv(&forecast).unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido generar la previsión en formato CSV ({})", error);
            exit(exitcode::DATAERR);
        });
        writefile(path, csv.as_bytes());
    }

    // Mostrar siempre en formato plain. Los avisos del cálculo van en cada bloque
    println!("\n** Balance energético diario");
    println!("{}", site::balance_to_plain(&daily));

    println!("\n** Previsión mensual");
    println!("{}", site::forecast_to_plain(&forecast));
}
