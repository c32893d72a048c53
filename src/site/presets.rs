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

/*! # Emplazamientos predefinidos

Registro cargable nombre de emplazamiento -> datos de entrada (`RawParams`), en formato JSON.

```json
{
    "Barnwell": { "floor_area": 22102, "chp": { "installed": true, "thermal_kw": 44.7 } },
    "Custom": {}
}
```
*/

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::data::SITES_DEFAULT;
use crate::{
    error::{DhError, Result},
    types::{normalize, Params, RawParams},
};

/// Emplazamientos predefinidos, ordenados por nombre
///
/// Site presets: site name -> raw parameter set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SitePresets {
    sites: BTreeMap<String, RawParams>,
}

impl SitePresets {
    /// Nombres de los emplazamientos disponibles
    pub fn names(&self) -> Vec<&str> {
        self.sites.keys().map(String::as_str).collect()
    }

    /// Datos de entrada (sin normalizar) de un emplazamiento
    pub fn get(&self, name: &str) -> Option<&RawParams> {
        self.sites.get(name)
    }

    /// Parámetros normalizados de un emplazamiento
    ///
    /// # Errors
    ///
    /// * Unknown site name
    pub fn params(&self, name: &str) -> Result<Params> {
        self.get(name).cloned().map(normalize).ok_or_else(|| {
            DhError::WrongInput(format!(
                "Emplazamiento desconocido \"{}\". Disponibles: {}",
                name,
                self.names().join(", ")
            ))
        })
    }
}

impl FromStr for SitePresets {
    type Err = DhError;

    fn from_str(s: &str) -> Result<SitePresets> {
        let s = s.trim_start_matches('\u{feff}');
        let presets: SitePresets = serde_json::from_str(s)?;
        if presets.sites.is_empty() {
            return Err(DhError::WrongInput(
                "No se ha definido ningún emplazamiento".into(),
            ));
        }
        Ok(presets)
    }
}

impl fmt::Display for SitePresets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

/// Emplazamientos predefinidos de la librería
pub fn default_presets() -> SitePresets {
    // Built-in data is checked by tests
    SITES_DEFAULT.parse().unwrap_or_default()
}

// ========================== Tests
