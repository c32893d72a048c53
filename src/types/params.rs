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
Parámetros de cálculo
=====================

Conjunto de parámetros físicos y de operación de un emplazamiento (`Params`) y su forma de
entrada externa (`RawParams`), con los valores por defecto y la normalización de los
sistemas no instalados.
*/

use serde::{Deserialize, Serialize};

use crate::types::BalanceWarning;

/// Horas de un día
pub const HOURS_PER_DAY: f64 = 24.0;

/// Parámetros de la unidad de cogeneración (CHP)
///
/// Combined heat and power unit parameters
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChpParams {
    /// Unit is installed
    pub installed: bool,
    /// Thermal output [kW]
    pub thermal_kw: f64,
    /// Electrical output [kW]
    pub electric_kw: f64,
    /// Gas input [kW]
    pub gas_kw: f64,
    /// Operating hours per day [h], in [0, 24]
    pub hours_per_day: f64,
    /// Output adjustment factor [-], in [0, 1]
    pub adjustment_fraction: f64,
}

/// Parámetros de la bomba de calor
///
/// Heat pump parameters
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatPumpParams {
    /// Unit is installed
    pub installed: bool,
    /// Thermal output [kW]
    pub thermal_kw: f64,
    /// Operating hours per day [h], in [0, 24]
    pub hours_per_day: f64,
    /// Coefficient of performance [-]
    pub cop: f64,
}

/// Conjunto de parámetros normalizado de un emplazamiento
///
/// Normalized parameter set for one site. Disabled sources hold only zero values.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Heated floor area [m2]
    pub floor_area: f64,
    /// Indoor set point temperature [ºC]
    pub indoor_temp: f64,
    /// Outdoor temperature [ºC]
    pub outdoor_temp: f64,
    /// Envelope thermal transmittance [W/m2K]
    pub u_value: f64,
    /// Distribution losses as a fraction of the heat demand [-], in [0, 1]
    pub system_loss_fraction: f64,
    /// Boiler efficiency [-], in [0, 1]
    pub boiler_efficiency: f64,
    /// Gas emission factor [kg_CO2/kWh]
    pub gas_emission_factor: f64,
    /// Electricity price [currency/kWh]
    pub electricity_price: f64,
    /// CHP unit
    pub chp: ChpParams,
    /// Heat pump
    pub heat_pump: HeatPumpParams,
}

impl Params {
    /// Copia de los parámetros con otra temperatura exterior
    ///
    /// Copy of the parameter set with the outdoor temperature replaced
    pub fn with_outdoor_temp(&self, outdoor_temp: f64) -> Self {
        Self {
            outdoor_temp,
            ..*self
        }
    }

    /// Avisos de configuración que no dependen del periodo de cálculo
    ///
    /// Configuration warnings independent of the evaluation period. These never stop
    /// the calculation.
    pub fn check(&self) -> Vec<BalanceWarning> {
        let mut warnings = Vec::new();
        if self.floor_area <= 0.0 {
            warnings.push(BalanceWarning::NonPositiveArea);
        }
        if self.u_value <= 0.0 {
            warnings.push(BalanceWarning::NonPositiveUValue);
        }
        if self.outdoor_temp > self.indoor_temp {
            warnings.push(BalanceWarning::OutdoorAboveIndoor);
        }
        warnings
    }
}

impl Default for Params {
    fn default() -> Self {
        normalize(RawParams::default())
    }
}

impl From<RawParams> for Params {
    fn from(raw: RawParams) -> Self {
        normalize(raw)
    }
}

/// Datos de entrada de la unidad de cogeneración, con campos opcionales
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawChp {
    /// Unit is installed (false)
    pub installed: Option<bool>,
    /// Thermal output [kW] (0.0)
    pub thermal_kw: Option<f64>,
    /// Electrical output [kW] (0.0)
    pub electric_kw: Option<f64>,
    /// Gas input [kW] (0.0)
    pub gas_kw: Option<f64>,
    /// Operating hours per day [h] (0.0)
    pub hours_per_day: Option<f64>,
    /// Output adjustment factor [-] (1.0)
    pub adjustment_fraction: Option<f64>,
}

/// Datos de entrada de la bomba de calor, con campos opcionales
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHeatPump {
    /// Unit is installed (false)
    pub installed: Option<bool>,
    /// Thermal output [kW] (0.0)
    pub thermal_kw: Option<f64>,
    /// Operating hours per day [h] (0.0)
    pub hours_per_day: Option<f64>,
    /// Coefficient of performance [-] (0.0)
    pub cop: Option<f64>,
}

/// Datos de entrada de un emplazamiento tal como llegan del exterior
///
/// Raw parameter set as supplied by the caller (JSON files, presets, command line).
/// Missing values take the defaults shown in parentheses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawParams {
    /// Heated floor area [m2] (20000)
    pub floor_area: Option<f64>,
    /// Indoor temperature [ºC] (20)
    pub indoor_temp: Option<f64>,
    /// Outdoor temperature [ºC] (5)
    pub outdoor_temp: Option<f64>,
    /// Envelope thermal transmittance [W/m2K] (0.15)
    pub u_value: Option<f64>,
    /// Distribution losses fraction [-] (0.5)
    pub system_loss_fraction: Option<f64>,
    /// Boiler efficiency [-] (0.85)
    pub boiler_efficiency: Option<f64>,
    /// Gas emission factor [kg_CO2/kWh] (0.233)
    pub gas_emission_factor: Option<f64>,
    /// Electricity price [currency/kWh] (0.25)
    pub electricity_price: Option<f64>,
    /// CHP unit
    pub chp: RawChp,
    /// Heat pump
    pub heat_pump: RawHeatPump,
}

/// Superficie por defecto [m2]
pub const FLOOR_AREA_DEFAULT: f64 = 20_000.0;
/// Temperatura interior por defecto [ºC]
pub const INDOOR_TEMP_DEFAULT: f64 = 20.0;
/// Temperatura exterior por defecto [ºC]
pub const OUTDOOR_TEMP_DEFAULT: f64 = 5.0;
/// Transmitancia por defecto [W/m2K]
pub const U_VALUE_DEFAULT: f64 = 0.15;
/// Fracción de pérdidas del sistema por defecto [-]
pub const SYSTEM_LOSS_DEFAULT: f64 = 0.5;
/// Rendimiento de caldera por defecto [-]
pub const BOILER_EFFICIENCY_DEFAULT: f64 = 0.85;
/// Factor de emisión del gas por defecto [kg_CO2/kWh]
pub const GAS_EMISSION_DEFAULT: f64 = 0.233;
/// Precio de la electricidad por defecto [/kWh]
pub const ELECTRICITY_PRICE_DEFAULT: f64 = 0.25;
/// Factor de ajuste de la cogeneración por defecto [-]
pub const CHP_ADJUSTMENT_DEFAULT: f64 = 1.0;

/// Limita una fracción al intervalo [0, 1]. NaN se toma como 0.
fn clamp_fraction(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0).min(1.0)
    }
}

/// Limita las horas de funcionamiento diario al intervalo [0, 24]. NaN se toma como 0.
fn clamp_hours(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0).min(HOURS_PER_DAY)
    }
}

/// Normaliza los datos de entrada
///
/// Build a parameter set from raw input:
///
/// - missing values take their defaults
/// - fraction inputs (system loss, boiler efficiency, CHP adjustment) are clamped to [0, 1]
/// - daily operating hours are clamped to [0, 24]
/// - every field of a source that is not installed is set to zero
///
/// Out of range physical values (e.g. negative temperature differences) are kept as they are.
pub fn normalize(raw: RawParams) -> Params {
    let chp = if raw.chp.installed.unwrap_or(false) {
        ChpParams {
            installed: true,
            thermal_kw: raw.chp.thermal_kw.unwrap_or(0.0),
            electric_kw: raw.chp.electric_kw.unwrap_or(0.0),
            gas_kw: raw.chp.gas_kw.unwrap_or(0.0),
            hours_per_day: clamp_hours(raw.chp.hours_per_day.unwrap_or(0.0)),
            adjustment_fraction: clamp_fraction(
                raw.chp.adjustment_fraction.unwrap_or(CHP_ADJUSTMENT_DEFAULT),
            ),
        }
    } else {
        ChpParams::default()
    };

    let heat_pump = if raw.heat_pump.installed.unwrap_or(false) {
        HeatPumpParams {
            installed: true,
            thermal_kw: raw.heat_pump.thermal_kw.unwrap_or(0.0),
            hours_per_day: clamp_hours(raw.heat_pump.hours_per_day.unwrap_or(0.0)),
            cop: raw.heat_pump.cop.unwrap_or(0.0),
        }
    } else {
        HeatPumpParams::default()
    };

    Params {
        floor_area: raw.floor_area.unwrap_or(FLOOR_AREA_DEFAULT),
        indoor_temp: raw.indoor_temp.unwrap_or(INDOOR_TEMP_DEFAULT),
        outdoor_temp: raw.outdoor_temp.unwrap_or(OUTDOOR_TEMP_DEFAULT),
        u_value: raw.u_value.unwrap_or(U_VALUE_DEFAULT),
        system_loss_fraction: clamp_fraction(
            raw.system_loss_fraction.unwrap_or(SYSTEM_LOSS_DEFAULT),
        ),
        boiler_efficiency: clamp_fraction(
            raw.boiler_efficiency.unwrap_or(BOILER_EFFICIENCY_DEFAULT),
        ),
        gas_emission_factor: raw.gas_emission_factor.unwrap_or(GAS_EMISSION_DEFAULT),
        electricity_price: raw.electricity_price.unwrap_or(ELECTRICITY_PRICE_DEFAULT),
        chp,
        heat_pump,
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let params = Params::default();
        assert_eq!(params.floor_area, 20_000.0);
        assert_eq!(params.system_loss_fraction, 0.5);
        assert_eq!(params.boiler_efficiency, 0.85);
        assert_eq!(params.chp, ChpParams::default());
        assert_eq!(params.heat_pump, HeatPumpParams::default());
    }

    #[test]
    fn disabled_sources_are_zeroed() {
        let raw = RawParams {
            chp: RawChp {
                installed: Some(false),
                thermal_kw: Some(44.7),
                electric_kw: Some(19.965),
                gas_kw: Some(67.9),
                hours_per_day: Some(15.0),
                adjustment_fraction: Some(0.95),
            },
            heat_pump: RawHeatPump {
                installed: None,
                thermal_kw: Some(60.0),
                hours_per_day: Some(9.0),
                cop: Some(4.0),
            },
            ..Default::default()
        };
        let params = normalize(raw);
        assert_eq!(params.chp, ChpParams::default());
        assert_eq!(params.heat_pump, HeatPumpParams::default());
    }

    #[test]
    fn fractions_and_hours_are_clamped() {
        let raw = RawParams {
            system_loss_fraction: Some(1.5),
            boiler_efficiency: Some(-0.2),
            chp: RawChp {
                installed: Some(true),
                hours_per_day: Some(30.0),
                adjustment_fraction: Some(f64::NAN),
                ..Default::default()
            },
            heat_pump: RawHeatPump {
                installed: Some(true),
                hours_per_day: Some(-3.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let params = normalize(raw);
        assert_eq!(params.system_loss_fraction, 1.0);
        assert_eq!(params.boiler_efficiency, 0.0);
        assert_eq!(params.chp.hours_per_day, 24.0);
        assert_eq!(params.chp.adjustment_fraction, 0.0);
        assert_eq!(params.heat_pump.hours_per_day, 0.0);
    }

    #[test]
    fn physical_values_are_not_rejected() {
        let raw = RawParams {
            floor_area: Some(-10.0),
            outdoor_temp: Some(25.0),
            ..Default::default()
        };
        let params = normalize(raw);
        assert_eq!(params.floor_area, -10.0);
        assert_eq!(params.outdoor_temp, 25.0);
        assert_eq!(
            params.check(),
            vec![
                BalanceWarning::NonPositiveArea,
                BalanceWarning::OutdoorAboveIndoor
            ]
        );
    }

    #[test]
    fn raw_params_from_json() {
        let raw: RawParams = serde_json::from_str(
            r#"{ "floor_area": 1000, "heat_pump": { "installed": true, "thermal_kw": 10, "cop": 3.5 } }"#,
        )
        .unwrap();
        let params = Params::from(raw);
        assert_eq!(params.floor_area, 1000.0);
        assert_eq!(params.indoor_temp, 20.0);
        assert!(params.heat_pump.installed);
        assert_eq!(params.heat_pump.cop, 3.5);
        assert_eq!(params.heat_pump.hours_per_day, 0.0);
    }

    #[test]
    fn outdoor_temp_substitution() {
        let params = Params::default();
        let july = params.with_outdoor_temp(15.0);
        assert_eq!(july.outdoor_temp, 15.0);
        assert_eq!(july.indoor_temp, params.indoor_temp);
        assert_eq!(params.outdoor_temp, 5.0);
    }
}
