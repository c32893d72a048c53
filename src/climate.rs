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
Datos climáticos de referencia
==============================

Perfil mensual de temperatura exterior y duración de cada mes usado para la previsión anual.
El perfil por defecto es el de `site::data`.
*/

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    error::{DhError, Result},
    site::data::MONTHLY_OUTDOOR_TEMPS,
    types::Month,
};

/// Datos climáticos de un mes
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    /// Month
    pub month: Month,
    /// Climatological outdoor temperature [ºC]
    pub outdoor_temp: f64,
    /// Days in month
    pub days: u32,
}

/// Perfil climático anual: doce meses en orden de calendario
///
/// Twelve month climate profile, in calendar order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MonthlyClimate>", into = "Vec<MonthlyClimate>")]
pub struct ClimateProfile {
    months: Vec<MonthlyClimate>,
}

impl ClimateProfile {
    /// Construye un perfil a partir de una lista de meses
    ///
    /// # Errors
    ///
    /// * The list must hold exactly twelve months, Jan to Dec, in calendar order
    /// * Day counts must match the non-leap calendar (February has 28 days)
    pub fn new(months: Vec<MonthlyClimate>) -> Result<Self> {
        if months.len() != 12 {
            return Err(DhError::WrongInput(format!(
                "El perfil climático debe tener 12 meses y tiene {}",
                months.len()
            )));
        }
        if let Some((expected, found)) = Month::iter()
            .zip(months.iter().map(|m| m.month))
            .find(|(expected, found)| expected != found)
        {
            return Err(DhError::WrongInput(format!(
                "Mes fuera de orden en el perfil climático: se esperaba {} y se encontró {}",
                expected, found
            )));
        }
        if let Some(m) = months.iter().find(|m| m.days != m.month.days()) {
            return Err(DhError::WrongInput(format!(
                "Número de días incorrecto para {} en el perfil climático: {} (debe ser {})",
                m.month,
                m.days,
                m.month.days()
            )));
        }
        Ok(Self { months })
    }

    /// Meses del perfil, en orden de calendario
    pub fn months(&self) -> &[MonthlyClimate] {
        &self.months
    }

    /// Datos de un mes
    pub fn month(&self, month: Month) -> &MonthlyClimate {
        &self.months[month as usize]
    }

    /// Días totales del perfil
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }
}

impl Default for ClimateProfile {
    fn default() -> Self {
        let months = Month::iter()
            .zip(MONTHLY_OUTDOOR_TEMPS.iter())
            .map(|(month, &outdoor_temp)| MonthlyClimate {
                month,
                outdoor_temp,
                days: month.days(),
            })
            .collect();
        Self { months }
    }
}

impl std::convert::TryFrom<Vec<MonthlyClimate>> for ClimateProfile {
    type Error = DhError;

    fn try_from(months: Vec<MonthlyClimate>) -> Result<Self> {
        Self::new(months)
    }
}

impl From<ClimateProfile> for Vec<MonthlyClimate> {
    fn from(profile: ClimateProfile) -> Self {
        profile.months
    }
}

impl FromStr for ClimateProfile {
    type Err = DhError;

    /// Lee un perfil climático en formato JSON
    fn from_str(s: &str) -> Result<ClimateProfile> {
        let months: Vec<MonthlyClimate> = serde_json::from_str(s)?;
        Self::new(months)
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_profile() {
        let clima = ClimateProfile::default();
        assert_eq!(clima.months().len(), 12);
        assert_eq!(clima.total_days(), 365);
        assert_eq!(clima.month(Month::Feb).days, 28);
        assert_eq!(clima.month(Month::Jun).outdoor_temp, 13.5);
        assert_eq!(clima.month(Month::Dec).outdoor_temp, 5.5);
    }

    #[test]
    fn profile_json_roundtrip() {
        let clima = ClimateProfile::default();
        let json = serde_json::to_string(&clima).unwrap();
        assert!(json.starts_with(r#"[{"month":"Jan","outdoor_temp":5.0,"days":31}"#));
        assert_eq!(json.parse::<ClimateProfile>().unwrap(), clima);
    }

    #[test]
    fn profile_validation() {
        let mut months = ClimateProfile::default().months().to_vec();
        months.swap(0, 1);
        assert!(ClimateProfile::new(months.clone()).is_err());
        months.swap(0, 1);

        // Calendario fijo sin años bisiestos
        let mut bisiesto = months.clone();
        bisiesto[1].days = 29;
        assert!(matches!(
            ClimateProfile::new(bisiesto),
            Err(DhError::WrongInput(_))
        ));
        let mut sin_dias = months.clone();
        sin_dias[0].days = 0;
        assert!(ClimateProfile::new(sin_dias).is_err());

        months.truncate(11);
        assert!(ClimateProfile::new(months).is_err());
        assert!("[]".parse::<ClimateProfile>().is_err());
        assert!("not json".parse::<ClimateProfile>().is_err());
    }
}
