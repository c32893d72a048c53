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
Previsión mensual
=================

Serie de previsión anual: el balance se evalúa una vez por mes sustituyendo la temperatura
exterior de los parámetros por la temperatura climática del mes y usando la duración del mes.
El resto de parámetros se mantienen fijos.

Los totales anuales son la suma, campo a campo, de los doce meses.
*/

use serde::{Deserialize, Serialize};

use crate::{
    balance::energy_balance,
    climate::ClimateProfile,
    types::{BalanceWarning, EnergyBalance, Meta, MetaVec, Month, Params},
};

/// Resultado de un mes de la previsión
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBalance {
    /// Month
    pub month: Month,
    /// Days in month
    pub days: u32,
    /// Climatological outdoor temperature used [ºC]
    pub outdoor_temp: f64,
    /// Energy balance results for the whole month
    pub energy: EnergyBalance,
    /// Non fatal warning conditions
    pub warnings: Vec<BalanceWarning>,
}

/// Serie de previsión anual
///
/// Monthly forecast series, Jan to Dec, with annual totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Metadata
    pub meta: Vec<Meta>,
    /// Monthly results, in calendar order
    pub months: Vec<MonthlyBalance>,
    /// Annual totals (field-wise sum of monthly results)
    pub annual: EnergyBalance,
}

impl MetaVec for ForecastSeries {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

/// Fila plana de la serie de previsión (un mes o el total anual)
///
/// Flat row with named numeric columns, one per month plus the annual total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Month label or `TOTAL`
    pub month: String,
    /// Days in period
    pub days: u32,
    /// Heat demand [kWh]
    pub heat_demand_kwh: f64,
    /// CHP thermal output [kWh]
    pub chp_thermal_kwh: f64,
    /// CHP electrical output [kWh]
    pub chp_electric_kwh: f64,
    /// CHP gas input [kWh]
    pub chp_gas_kwh: f64,
    /// Heat pump thermal output [kWh]
    pub hp_thermal_kwh: f64,
    /// Heat pump electricity use [kWh]
    pub hp_electric_kwh: f64,
    /// Boiler thermal output [kWh]
    pub boiler_thermal_kwh: f64,
    /// Boiler gas input [kWh]
    pub boiler_gas_kwh: f64,
    /// Total gas input [kWh]
    pub total_gas_kwh: f64,
    /// CO2 emissions [kg_CO2]
    pub co2_kg: f64,
    /// Electricity cost [currency]
    pub electricity_cost: f64,
}

impl ForecastRow {
    fn new(month: String, days: u32, e: &EnergyBalance) -> Self {
        Self {
            month,
            days,
            heat_demand_kwh: e.heat_demand_kwh,
            chp_thermal_kwh: e.chp_thermal_kwh,
            chp_electric_kwh: e.chp_electric_kwh,
            chp_gas_kwh: e.chp_gas_kwh,
            hp_thermal_kwh: e.hp_thermal_kwh,
            hp_electric_kwh: e.hp_electric_kwh,
            boiler_thermal_kwh: e.boiler_thermal_kwh,
            boiler_gas_kwh: e.boiler_gas_kwh,
            total_gas_kwh: e.total_gas_kwh,
            co2_kg: e.co2_kg,
            electricity_cost: e.electricity_cost,
        }
    }
}

impl ForecastSeries {
    /// Días totales de la serie
    pub fn days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }

    /// Resultado de un mes
    pub fn month(&self, month: Month) -> Option<&MonthlyBalance> {
        self.months.iter().find(|m| m.month == month)
    }

    /// Avisos encontrados en algún mes, sin repeticiones y en orden de aparición
    pub fn warnings(&self) -> Vec<BalanceWarning> {
        let mut warnings: Vec<BalanceWarning> = Vec::new();
        for w in self.months.iter().flat_map(|m| m.warnings.iter()) {
            if !warnings.contains(w) {
                warnings.push(*w);
            }
        }
        warnings
    }

    /// Filas planas: un mes por fila, en orden de calendario
    pub fn rows(&self) -> Vec<ForecastRow> {
        self.months
            .iter()
            .map(|m| ForecastRow::new(m.month.to_string(), m.days, &m.energy))
            .collect()
    }

    /// Fila plana con los totales anuales
    pub fn total_row(&self) -> ForecastRow {
        ForecastRow::new("TOTAL".to_string(), self.days(), &self.annual)
    }
}

/// Calcula la previsión mensual
///
/// Build the twelve month forecast series. Each month is evaluated independently with the
/// month's climatological outdoor temperature and day count. Annual totals are the field-wise
/// sum of the monthly results.
///
/// * `params` - normalized parameter set (its outdoor temperature is not used)
/// * `climate` - monthly climate profile
pub fn monthly_forecast(params: &Params, climate: &ClimateProfile) -> ForecastSeries {
    let months: Vec<MonthlyBalance> = climate
        .months()
        .iter()
        .map(|mc| {
            let balance = energy_balance(&params.with_outdoor_temp(mc.outdoor_temp), mc.days);
            MonthlyBalance {
                month: mc.month,
                days: balance.days,
                outdoor_temp: balance.outdoor_temp,
                energy: balance.energy,
                warnings: balance.warnings,
            }
        })
        .collect();

    let annual: EnergyBalance = months.iter().map(|m| &m.energy).sum();

    ForecastSeries {
        meta: vec![],
        months,
        annual,
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn forecast_calendar_order() {
        let series = monthly_forecast(&Params::default(), &ClimateProfile::default());
        let labels: Vec<String> = series.rows().iter().map(|r| r.month.clone()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(series.days(), 365);
        assert_eq!(series.total_row().month, "TOTAL");
    }

    #[test]
    fn forecast_uses_month_temperature() {
        let params = Params::default().with_outdoor_temp(-30.0);
        let series = monthly_forecast(&params, &ClimateProfile::default());
        let jul = series.month(Month::Jul).unwrap();
        assert_eq!(jul.outdoor_temp, 15.0);
        assert_eq!(jul.days, 31);
        // 0.15 * 20000 * (20 - 15) * 24 * 31 / 1000 * 1.5
        assert_abs_diff_eq!(jul.energy.heat_demand_kwh, 16740.0, epsilon = 1e-6);
    }

    #[test]
    fn forecast_warnings_are_deduplicated() {
        let params = Params {
            boiler_efficiency: 0.0,
            ..Params::default()
        };
        let series = monthly_forecast(&params, &ClimateProfile::default());
        assert!(series.months.iter().all(|m| m.warnings.len() == 1));
        assert_eq!(series.warnings(), vec![BalanceWarning::BoilerEfficiencyZero]);
        assert_eq!(series.annual.boiler_gas_kwh, 0.0);
    }
}
