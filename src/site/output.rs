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

/*! # Salida de resultados

Representación de balances y previsiones en texto simple y CSV.

*/

use std::io;

use itertools::Itertools; // join

use super::META_SITE;
use crate::{
    error::Result,
    forecast::ForecastSeries,
    types::{Balance, BalanceWarning, MetaVec, Params},
};

fn warnings_to_plain(warnings: &[BalanceWarning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    format!(
        "\n\n** Avisos\n{}",
        warnings.iter().map(|w| format!("- {}", w)).join("\n")
    )
}

fn source_to_plain(installed: bool, description: String) -> String {
    if installed {
        description
    } else {
        "no instalada".to_string()
    }
}

/// Muestra los parámetros de cálculo de forma simplificada.
pub fn params_to_plain(params: &Params) -> String {
    let Params {
        floor_area,
        indoor_temp,
        outdoor_temp,
        u_value,
        system_loss_fraction,
        boiler_efficiency,
        gas_emission_factor,
        electricity_price,
        chp,
        heat_pump,
    } = params;

    let chp_desc = source_to_plain(
        chp.installed,
        format!(
            "{:.1} kW térmicos, {:.3} kW eléctricos, {:.1} kW de gas, {:.1} h/día, ajuste {:.0}%",
            chp.thermal_kw,
            chp.electric_kw,
            chp.gas_kw,
            chp.hours_per_day,
            chp.adjustment_fraction * 100.0
        ),
    );
    let hp_desc = source_to_plain(
        heat_pump.installed,
        format!(
            "{:.1} kW térmicos, {:.1} h/día, COP {:.2}",
            heat_pump.thermal_kw, heat_pump.hours_per_day, heat_pump.cop
        ),
    );

    format!(
        "Superficie [m2]: {:.2}
T_int [ºC]: {:.1}
T_ext [ºC]: {:.1}
U [W/m2K]: {:.3}
Pérdidas del sistema [%]: {:.0}
Rendimiento de caldera [%]: {:.0}
Factor de emisión del gas [kg_CO2/kWh]: {:.3}
Precio de la electricidad [/kWh]: {:.3}
Cogeneración (CHP): {}
Bomba de calor: {}",
        floor_area,
        indoor_temp,
        outdoor_temp,
        u_value,
        system_loss_fraction * 100.0,
        boiler_efficiency * 100.0,
        gas_emission_factor,
        electricity_price,
        chp_desc,
        hp_desc
    )
}

/// Muestra el balance de un periodo de forma simplificada.
pub fn balance_to_plain(balance: &Balance) -> String {
    let e = &balance.energy;
    format!(
        "Periodo [días]: {}
T_ext [ºC]: {:.1}

Demanda de calor [kWh]: {:.1}
Consumo de gas de caldera [kWh]: {:.1}
Emisiones de CO2 [kg]: {:.1}

Producción térmica CHP [kWh]: {:.1}
Producción eléctrica CHP [kWh]: {:.1}
Consumo de gas CHP [kWh]: {:.1}
Producción térmica bomba de calor [kWh]: {:.1}
Consumo eléctrico bomba de calor [kWh]: {:.1}
Producción térmica caldera [kWh]: {:.1}
Consumo total de gas [kWh]: {:.1}
Coste de la electricidad: {:.2}{}",
        balance.days,
        balance.outdoor_temp,
        e.heat_demand_kwh,
        e.boiler_gas_kwh,
        e.co2_kg,
        e.chp_thermal_kwh,
        e.chp_electric_kwh,
        e.chp_gas_kwh,
        e.hp_thermal_kwh,
        e.hp_electric_kwh,
        e.boiler_thermal_kwh,
        e.total_gas_kwh,
        e.electricity_cost,
        warnings_to_plain(&balance.warnings)
    )
}

/// Muestra la previsión mensual como tabla y resumen anual.
pub fn forecast_to_plain(series: &ForecastSeries) -> String {
    let metalines = series.meta.iter().join("\n");
    let header = format!(
        "{:<5} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Mes", "Calor[kWh]", "GasCald[kWh]", "GasCHP[kWh]", "ElecBdC[kWh]", "CO2[kg]"
    );
    let rows = series
        .months
        .iter()
        .map(|m| {
            format!(
                "{:<5} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
                m.month.to_string(),
                m.energy.heat_demand_kwh,
                m.energy.boiler_gas_kwh,
                m.energy.chp_gas_kwh,
                m.energy.hp_electric_kwh,
                m.energy.co2_kg
            )
        })
        .join("\n");
    let annual = &series.annual;
    let site = series
        .get_meta(META_SITE)
        .map(|s| format!(" ({})", s))
        .unwrap_or_default();

    format!(
        "{}{}{}
{}

** Resumen anual{}

Demanda de calor anual [kWh]: {:.0}
Consumo total de gas [kWh]: {:.0}
Consumo eléctrico bomba de calor [kWh]: {:.0}
Emisiones de CO2 [kg]: {:.0}
Coste de la electricidad: {:.2}{}",
        metalines,
        if metalines.is_empty() { "" } else { "\n" },
        header,
        rows,
        site,
        annual.heat_demand_kwh,
        annual.total_gas_kwh,
        annual.hp_electric_kwh,
        annual.co2_kg,
        annual.electricity_cost,
        warnings_to_plain(&series.warnings())
    )
}

/// Escribe la previsión mensual en formato CSV: cabecera, una fila por mes y fila de totales.
pub fn write_forecast_csv<W: io::Write>(series: &ForecastSeries, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in series.rows() {
        wtr.serialize(row)?;
    }
    wtr.serialize(series.total_row())?;
    wtr.flush()?;
    Ok(())
}

/// Previsión mensual en formato CSV
pub fn forecast_to_csv(series: &ForecastSeries) -> Result<String> {
    let mut buf = Vec::new();
    write_forecast_csv(series, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        balance::daily_balance, climate::ClimateProfile, forecast::monthly_forecast,
        site::presets::default_presets, types::Meta,
    };
    use pretty_assertions::assert_eq;

    fn barnwell() -> Params {
        default_presets().params("Barnwell").unwrap()
    }

    #[test]
    fn plain_balance() {
        let out = balance_to_plain(&daily_balance(&barnwell()));
        assert!(out.contains("Demanda de calor [kWh]: 1790.3"));
        assert!(out.contains("Producción térmica CHP [kWh]: 637.0"));
        assert!(out.contains("Consumo eléctrico bomba de calor [kWh]: 135.0"));
        assert!(!out.contains("** Avisos"));
    }

    #[test]
    fn plain_balance_warnings() {
        let params = Params {
            boiler_efficiency: 0.0,
            ..barnwell()
        };
        let out = balance_to_plain(&daily_balance(&params));
        assert!(out.contains("** Avisos\n- rendimiento de caldera nulo"));
    }

    #[test]
    fn plain_params() {
        let out = params_to_plain(&Params::default());
        assert!(out.contains("Superficie [m2]: 20000.00"));
        assert!(out.contains("Cogeneración (CHP): no instalada"));
        let out = params_to_plain(&barnwell());
        assert!(out.contains("Bomba de calor: 60.0 kW térmicos, 9.0 h/día, COP 4.00"));
    }

    #[test]
    fn plain_forecast() {
        let mut series = monthly_forecast(&barnwell(), &ClimateProfile::default());
        series.meta.push(Meta::new(META_SITE, "Barnwell"));
        let out = forecast_to_plain(&series);
        assert!(out.starts_with("#META DH_SITE: Barnwell\nMes"));
        assert!(out.contains("** Resumen anual (Barnwell)"));
        assert_eq!(out.lines().filter(|l| l.starts_with("Jan ")).count(), 1);
    }

    #[test]
    fn csv_forecast() {
        let series = monthly_forecast(&barnwell(), &ClimateProfile::default());
        let csv = forecast_to_csv(&series).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[0],
            "month,days,heat_demand_kwh,chp_thermal_kwh,chp_electric_kwh,chp_gas_kwh,hp_thermal_kwh,hp_electric_kwh,boiler_thermal_kwh,boiler_gas_kwh,total_gas_kwh,co2_kg,electricity_cost"
        );
        assert!(lines[1].starts_with("Jan,31,"));
        assert!(lines[12].starts_with("Dec,31,"));
        assert!(lines[13].starts_with("TOTAL,365,"));
    }
}
