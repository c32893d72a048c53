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
Balance energético de un periodo
================================

Evaluación del balance de la instalación para un periodo de `days` días:

1. Demanda de calor de la envolvente, incrementada con las pérdidas del sistema
2. Aportación de la cogeneración (CHP)
3. Aportación de la bomba de calor
4. Caldera de apoyo, que cubre la demanda restante (prioridad fija CHP -> BdC -> caldera)
5. Consumo total de gas, emisiones y coste de la electricidad

El cálculo no produce errores: las divisiones por cero (rendimiento de caldera nulo, COP nulo)
se resuelven como términos nulos y se informan como avisos.

*/

use tracing::{debug, warn};

use crate::types::{Balance, BalanceWarning, EnergyBalance, Params, HOURS_PER_DAY};

/// Demanda de calor del periodo, con pérdidas del sistema [kWh]
///
/// heat_demand = U · A · (T_int - T_ext) · 24 · days / 1000 · (1 + f_loss)
///
/// The result is negative when the outdoor temperature is above the indoor temperature.
/// It is not clamped.
pub fn heat_demand(params: &Params, days: f64) -> f64 {
    let hours = HOURS_PER_DAY * days;
    params.u_value * params.floor_area * (params.indoor_temp - params.outdoor_temp) * hours
        / 1000.0
        * (1.0 + params.system_loss_fraction)
}

/// Calcula el balance energético diario
///
/// Evaluate the energy balance for one day
pub fn daily_balance(params: &Params) -> Balance {
    energy_balance(params, 1)
}

/// Calcula el balance energético de un periodo
///
/// Evaluate the energy balance of the installation for a period of `days` days using the
/// outdoor temperature of `params`.
///
/// * `params` - normalized parameter set
/// * `days` - period length [days]
///
/// Disabled sources contribute zero energy. Boiler output is the only clamped quantity
/// (residual demand, never negative).
#[allow(non_snake_case)]
pub fn energy_balance(params: &Params, days: u32) -> Balance {
    let d = f64::from(days);
    let mut warnings = Vec::new();

    // * Heat demand, including distribution losses
    let Q_dem = heat_demand(params, d);
    if Q_dem < 0.0 {
        warnings.push(BalanceWarning::NegativeHeatDemand);
    }

    // * CHP output and gas input
    let chp = &params.chp;
    let (Q_chp, E_chp, G_chp) = if chp.installed {
        let k = chp.adjustment_fraction * chp.hours_per_day * d;
        (chp.thermal_kw * k, chp.electric_kw * k, chp.gas_kw * k)
    } else {
        (0.0, 0.0, 0.0)
    };

    // * Heat pump output and electricity use
    let hp = &params.heat_pump;
    let (Q_hp, E_hp) = if hp.installed {
        let Q_hp = hp.thermal_kw * hp.hours_per_day * d;
        let E_hp = if hp.cop > 0.0 {
            Q_hp / hp.cop
        } else {
            warnings.push(BalanceWarning::HeatPumpCopZero);
            0.0
        };
        (Q_hp, E_hp)
    } else {
        (0.0, 0.0)
    };

    // * Boiler covers the residual demand
    let Q_boiler = (Q_dem - Q_chp - Q_hp).max(0.0);
    let G_boiler = if Q_boiler > 0.0 {
        if params.boiler_efficiency > 0.0 {
            Q_boiler / params.boiler_efficiency
        } else {
            warnings.push(BalanceWarning::BoilerEfficiencyZero);
            0.0
        }
    } else {
        0.0
    };

    // * Gas, emissions and electricity cost. CHP electricity is not costed.
    let G_tot = G_boiler + G_chp;
    let energy = EnergyBalance {
        heat_demand_kwh: Q_dem,
        chp_thermal_kwh: Q_chp,
        chp_electric_kwh: E_chp,
        chp_gas_kwh: G_chp,
        hp_thermal_kwh: Q_hp,
        hp_electric_kwh: E_hp,
        boiler_thermal_kwh: Q_boiler,
        boiler_gas_kwh: G_boiler,
        total_gas_kwh: G_tot,
        co2_kg: G_tot * params.gas_emission_factor,
        electricity_cost: E_hp * params.electricity_price,
    };

    debug!(
        days,
        outdoor_temp = params.outdoor_temp,
        heat_demand = Q_dem,
        boiler_thermal = Q_boiler,
        "balance evaluated"
    );
    for w in &warnings {
        warn!(days, outdoor_temp = params.outdoor_temp, "{}", w);
    }

    Balance {
        days,
        outdoor_temp: params.outdoor_temp,
        energy,
        warnings,
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChpParams, HeatPumpParams};
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    fn envelope() -> Params {
        Params {
            floor_area: 22102.0,
            indoor_temp: 20.0,
            outdoor_temp: 5.0,
            u_value: 0.15,
            system_loss_fraction: 0.5,
            boiler_efficiency: 0.85,
            gas_emission_factor: 0.233,
            electricity_price: 0.25,
            chp: ChpParams::default(),
            heat_pump: HeatPumpParams::default(),
        }
    }

    #[test]
    fn heat_demand_daily_and_monthly() {
        let p = envelope();
        assert_abs_diff_eq!(heat_demand(&p, 1.0), 1790.262, epsilon = 1e-6);
        assert_abs_diff_eq!(heat_demand(&p, 31.0), 1790.262 * 31.0, epsilon = 1e-6);
    }

    #[test]
    fn chp_only() {
        let p = Params {
            chp: ChpParams {
                installed: true,
                thermal_kw: 44.7,
                electric_kw: 19.965,
                gas_kw: 67.9,
                hours_per_day: 15.0,
                adjustment_fraction: 0.95,
            },
            ..envelope()
        };
        let e = daily_balance(&p).energy;
        assert_abs_diff_eq!(e.chp_thermal_kwh, 636.975, epsilon = 1e-9);
        assert_abs_diff_eq!(e.chp_electric_kwh, 19.965 * 0.95 * 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(e.chp_gas_kwh, 967.575, epsilon = 1e-9);
        assert_abs_diff_eq!(e.boiler_thermal_kwh, 1790.262 - 636.975, epsilon = 1e-6);
        // CHP gas counts for emissions, CHP electricity is not costed
        assert_abs_diff_eq!(e.total_gas_kwh, e.boiler_gas_kwh + 967.575, epsilon = 1e-9);
        assert_abs_diff_eq!(e.co2_kg, e.total_gas_kwh * 0.233, epsilon = 1e-9);
        assert_eq!(e.electricity_cost, 0.0);
    }

    #[test]
    fn disabled_sources_ignore_capacities() {
        // Capacities left over in a disabled unit do not contribute
        let p = Params {
            chp: ChpParams {
                installed: false,
                thermal_kw: 44.7,
                electric_kw: 19.965,
                gas_kw: 67.9,
                hours_per_day: 15.0,
                adjustment_fraction: 0.95,
            },
            heat_pump: HeatPumpParams {
                installed: false,
                thermal_kw: 60.0,
                hours_per_day: 9.0,
                cop: 0.0,
            },
            ..envelope()
        };
        let b = daily_balance(&p);
        assert_eq!(b.energy.chp_thermal_kwh, 0.0);
        assert_eq!(b.energy.chp_gas_kwh, 0.0);
        assert_eq!(b.energy.hp_thermal_kwh, 0.0);
        assert_eq!(b.energy.hp_electric_kwh, 0.0);
        assert_eq!(b.energy.boiler_thermal_kwh, b.energy.heat_demand_kwh);
        assert!(b.warnings.is_empty());
    }

    #[test]
    fn surplus_from_priority_sources() {
        // CHP + HP exceed the demand: boiler clamps to zero, no boiler gas
        let p = Params {
            outdoor_temp: 18.0,
            heat_pump: HeatPumpParams {
                installed: true,
                thermal_kw: 60.0,
                hours_per_day: 24.0,
                cop: 3.0,
            },
            ..envelope()
        };
        let b = daily_balance(&p);
        assert!(b.energy.heat_demand_kwh < b.energy.hp_thermal_kwh);
        assert_eq!(b.energy.boiler_thermal_kwh, 0.0);
        assert_eq!(b.energy.boiler_gas_kwh, 0.0);
        assert_abs_diff_eq!(b.energy.hp_electric_kwh, 480.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.energy.electricity_cost, 120.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_heat_demand_is_kept() {
        let p = Params {
            outdoor_temp: 25.0,
            ..envelope()
        };
        let b = daily_balance(&p);
        assert!(b.energy.heat_demand_kwh < 0.0);
        assert_eq!(b.energy.boiler_thermal_kwh, 0.0);
        assert_eq!(b.energy.boiler_gas_kwh, 0.0);
        assert_eq!(b.warnings, vec![BalanceWarning::NegativeHeatDemand]);
    }

    #[test]
    fn zero_days() {
        let b = energy_balance(&envelope(), 0);
        assert_eq!(b.energy, EnergyBalance::default());
        assert!(b.warnings.is_empty());
    }

    #[test]
    fn no_boiler_warning_without_residual() {
        let p = Params {
            boiler_efficiency: 0.0,
            outdoor_temp: 20.0,
            ..envelope()
        };
        let b = daily_balance(&p);
        assert_eq!(b.energy.boiler_thermal_kwh, 0.0);
        assert!(!b.has_warnings());
    }
}
