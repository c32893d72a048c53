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
Metadatos
=========

Pares clave-valor que acompañan a los resultados (emplazamiento, origen de los datos
climáticos, etc.) y su representación textual `#META clave: valor`.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadato de un conjunto de resultados
///
/// Metadata entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

/// Trait común para gestionar metadatos
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Get mutable vector of metadata
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta>;

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<String> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.clone())
    }

    /// Update metadata value for key or insert new metadata.
    fn set_meta(&mut self, key: &str, value: &str) {
        let meta = self.get_mut_metavec();
        match meta.iter().position(|m| m.key == key) {
            Some(pos) => meta[pos].value = value.to_string(),
            None => meta.push(Meta::new(key, value)),
        };
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Holder(Vec<Meta>);

    impl MetaVec for Holder {
        fn get_metavec(&self) -> &Vec<Meta> {
            &self.0
        }
        fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
            &mut self.0
        }
    }

    #[test]
    fn tmeta() {
        let meta = Meta::new("DH_SITE", "Barnwell");
        let metastr = "#META DH_SITE: Barnwell";
        assert_eq!(format!("{}", meta), metastr);
    }

    #[test]
    fn metavec() {
        let mut holder = Holder(vec![]);
        holder.set_meta("DH_CLIMA", "referencia");
        holder.set_meta("DH_SITE", "Custom");
        holder.set_meta("DH_SITE", "Barnwell");
        assert_eq!(holder.get_meta("DH_SITE").unwrap(), "Barnwell");
        assert_eq!(holder.get_meta("DH_PARAMETROS"), None);
        assert_eq!(holder.0.len(), 2);
    }
}
