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
Avisos del cálculo
==================

Condiciones no fatales detectadas al evaluar un balance. Suelen indicar una configuración
incompleta, no un resultado nulo deseado.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aviso de cálculo (no fatal)
///
/// Non fatal warning condition found while building or evaluating a parameter set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceWarning {
    /// Boiler has to supply heat but its efficiency is zero. Boiler gas is taken as zero.
    BoilerEfficiencyZero,
    /// Heat pump is installed with a non positive COP. Heat pump electricity is taken as zero.
    HeatPumpCopZero,
    /// Heat demand is negative (outdoor temperature above indoor temperature)
    NegativeHeatDemand,
    /// Floor area is zero or negative
    NonPositiveArea,
    /// U-value is zero or negative
    NonPositiveUValue,
    /// Outdoor temperature above indoor temperature
    OutdoorAboveIndoor,
}

impl fmt::Display for BalanceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BalanceWarning::*;
        let msg = match self {
            BoilerEfficiencyZero => {
                "rendimiento de caldera nulo con demanda pendiente: se toma consumo de gas de caldera nulo"
            }
            HeatPumpCopZero => {
                "COP de la bomba de calor nulo o negativo: se toma consumo eléctrico de la bomba nulo"
            }
            NegativeHeatDemand => "demanda de calor negativa (temperatura exterior superior a la interior)",
            NonPositiveArea => "superficie nula o negativa",
            NonPositiveUValue => "transmitancia (U) nula o negativa",
            OutdoorAboveIndoor => "temperatura exterior superior a la interior",
        };
        write!(f, "{}", msg)
    }
}
