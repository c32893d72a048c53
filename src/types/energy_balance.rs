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
Resultados del balance
======================

Registro de resultados de un periodo de cálculo (`EnergyBalance`) y resultado completo de una
evaluación (`Balance`), con los avisos encontrados.
*/

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::types::BalanceWarning;

/// Registro de resultados de un periodo
///
/// Energy, fuel, cost and emission figures for one evaluation period. All quantities are
/// totals over the period.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// Heat demand, including system losses [kWh]. May be negative.
    #[serde(serialize_with = "round_serialize_3")]
    pub heat_demand_kwh: f64,
    /// CHP thermal output [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub chp_thermal_kwh: f64,
    /// CHP electrical output [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub chp_electric_kwh: f64,
    /// CHP gas input [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub chp_gas_kwh: f64,
    /// Heat pump thermal output [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub hp_thermal_kwh: f64,
    /// Heat pump electricity use [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub hp_electric_kwh: f64,
    /// Boiler thermal output (residual demand) [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler_thermal_kwh: f64,
    /// Boiler gas input [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler_gas_kwh: f64,
    /// Total gas input (boiler + CHP) [kWh]
    #[serde(serialize_with = "round_serialize_3")]
    pub total_gas_kwh: f64,
    /// CO2 emissions [kg_CO2]
    #[serde(serialize_with = "round_serialize_3")]
    pub co2_kg: f64,
    /// Cost of the electricity used by the heat pump [currency]
    #[serde(serialize_with = "round_serialize_3")]
    pub electricity_cost: f64,
}

fn round_serialize_3<S>(x: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64((x * 1000.0).round() / 1000.0)
}

impl EnergyBalance {
    /// Nombres de los campos, en el orden de `EnergyBalance::values`
    pub const FIELDS: [&'static str; 11] = [
        "heat_demand_kwh",
        "chp_thermal_kwh",
        "chp_electric_kwh",
        "chp_gas_kwh",
        "hp_thermal_kwh",
        "hp_electric_kwh",
        "boiler_thermal_kwh",
        "boiler_gas_kwh",
        "total_gas_kwh",
        "co2_kg",
        "electricity_cost",
    ];

    /// Valores de los campos, en el orden de `EnergyBalance::FIELDS`
    pub fn values(&self) -> [f64; 11] {
        [
            self.heat_demand_kwh,
            self.chp_thermal_kwh,
            self.chp_electric_kwh,
            self.chp_gas_kwh,
            self.hp_thermal_kwh,
            self.hp_electric_kwh,
            self.boiler_thermal_kwh,
            self.boiler_gas_kwh,
            self.total_gas_kwh,
            self.co2_kg,
            self.electricity_cost,
        ]
    }
}

impl fmt::Display for EnergyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = Self::FIELDS
            .iter()
            .zip(self.values().iter())
            .map(|(k, v)| format!("{}: {:.3}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{ {} }}", fields)
    }
}

// Field-wise addition, used for aggregating periods

impl Add for EnergyBalance {
    type Output = EnergyBalance;

    fn add(self, other: EnergyBalance) -> EnergyBalance {
        EnergyBalance {
            heat_demand_kwh: self.heat_demand_kwh + other.heat_demand_kwh,
            chp_thermal_kwh: self.chp_thermal_kwh + other.chp_thermal_kwh,
            chp_electric_kwh: self.chp_electric_kwh + other.chp_electric_kwh,
            chp_gas_kwh: self.chp_gas_kwh + other.chp_gas_kwh,
            hp_thermal_kwh: self.hp_thermal_kwh + other.hp_thermal_kwh,
            hp_electric_kwh: self.hp_electric_kwh + other.hp_electric_kwh,
            boiler_thermal_kwh: self.boiler_thermal_kwh + other.boiler_thermal_kwh,
            boiler_gas_kwh: self.boiler_gas_kwh + other.boiler_gas_kwh,
            total_gas_kwh: self.total_gas_kwh + other.total_gas_kwh,
            co2_kg: self.co2_kg + other.co2_kg,
            electricity_cost: self.electricity_cost + other.electricity_cost,
        }
    }
}

impl<'a> Add for &'a EnergyBalance {
    type Output = EnergyBalance;

    fn add(self, other: &EnergyBalance) -> EnergyBalance {
        *self + *other
    }
}

impl AddAssign for EnergyBalance {
    fn add_assign(&mut self, other: EnergyBalance) {
        *self = *self + other;
    }
}

impl Sum for EnergyBalance {
    fn sum<I: Iterator<Item = EnergyBalance>>(iter: I) -> Self {
        iter.fold(EnergyBalance::default(), |acc, e| acc + e)
    }
}

impl<'a> Sum<&'a EnergyBalance> for EnergyBalance {
    fn sum<I: Iterator<Item = &'a EnergyBalance>>(iter: I) -> Self {
        iter.fold(EnergyBalance::default(), |acc, e| acc + *e)
    }
}

/// Resultado de la evaluación de un periodo
///
/// Evaluated period: length, outdoor temperature used, results and warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Period length [days]
    pub days: u32,
    /// Outdoor temperature used in the evaluation [ºC]
    pub outdoor_temp: f64,
    /// Energy balance results
    pub energy: EnergyBalance,
    /// Non fatal warning conditions
    pub warnings: Vec<BalanceWarning>,
}

impl Balance {
    /// ¿Se han encontrado avisos?
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ========================== Tests
