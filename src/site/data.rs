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

/*!
Datos de referencia
===================

Temperaturas exteriores climáticas mensuales y emplazamientos predefinidos.
*/

/// Temperatura exterior climática de cada mes, de enero a diciembre [ºC].
pub const MONTHLY_OUTDOOR_TEMPS: [f64; 12] = [
    5.0,  // Jan
    5.5,  // Feb
    7.0,  // Mar
    9.0,  // Apr
    11.0, // May
    13.5, // Jun
    15.0, // Jul
    15.0, // Aug
    13.0, // Sep
    10.0, // Oct
    7.0,  // Nov
    5.5,  // Dec
];

/// Nombre del emplazamiento predefinido por defecto.
pub const SITE_DEFAULT: &str = "Barnwell";

/// Emplazamientos predefinidos.
///
/// `Custom` no define ningún valor y toma todos los valores por defecto.
pub const SITES_DEFAULT: &str = r#"{
    "Barnwell": {
        "floor_area": 22102,
        "indoor_temp": 20,
        "outdoor_temp": 5,
        "u_value": 0.15,
        "system_loss_fraction": 0.5,
        "boiler_efficiency": 0.85,
        "gas_emission_factor": 0.233,
        "electricity_price": 0.25,
        "chp": {
            "installed": true,
            "thermal_kw": 44.7,
            "electric_kw": 19.965,
            "gas_kw": 67.9,
            "hours_per_day": 15,
            "adjustment_fraction": 0.95
        },
        "heat_pump": {
            "installed": true,
            "thermal_kw": 60,
            "hours_per_day": 9,
            "cop": 4.0
        }
    },
    "Custom": {}
}"#;
