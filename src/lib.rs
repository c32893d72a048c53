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
DhBalance
=========

This crate provides a library and binary that **computes the energy balance of a district
heating installation** supplied by up to three heat sources: a combined heat and power unit
(CHP), a heat pump and a backup gas boiler.

From the building envelope parameters (floor area, U-value, indoor and outdoor temperatures,
distribution losses) and the configuration of the heat sources, it computes the heat demand,
the output of each source, gas and electricity use, CO2 emissions and electricity cost, both
for a single day and for a twelve month forecast built from a monthly climate profile.

It holds the following assumptions:

- fixed dispatch priority: CHP and heat pump output is used first, the boiler covers the rest
- the heat demand is not clamped (it is negative when outdoor temperature is above indoor)
- only the boiler residual output is clamped to non negative values
- CO2 emissions include both boiler and CHP gas input
- the electricity generated by the CHP is not costed
- a zero boiler efficiency or heat pump COP gives zero fuel/electricity use and a warning

Este *crate* proporciona una biblioteca y un programa que **calcula el balance energético de
una instalación de calefacción de distrito** abastecida por hasta tres sistemas: cogeneración
(CHP), bomba de calor y caldera de gas de apoyo.

Realiza los siguientes supuestos:

- prioridad fija: se usa primero la producción de la cogeneración y de la bomba de calor y la
  caldera cubre la demanda restante
- la demanda de calor no se limita (es negativa si la temperatura exterior supera a la interior)
- solo la producción de la caldera se limita a valores no negativos
- las emisiones incluyen el gas de la caldera y el de la cogeneración
- la electricidad generada por la cogeneración no se contabiliza como coste
- un rendimiento de caldera o un COP nulos producen consumos nulos y un aviso

# Ejemplo

```rust
use dhbalance::*;

// Parámetros de un emplazamiento predefinido
let params = site::default_presets().params("Barnwell").unwrap();

// Balance diario
let balance = daily_balance(&params);
println!("{}", site::balance_to_plain(&balance));

// Previsión mensual con el perfil climático de referencia
let forecast = monthly_forecast(&params, &ClimateProfile::default());
println!("{}", site::forecast_to_plain(&forecast));
```

*/

#![deny(missing_docs)]

mod balance;
mod climate;
mod forecast;

pub mod error;
pub mod site;
pub mod types;

pub use balance::*;
pub use climate::*;
pub use forecast::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
