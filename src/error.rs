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
Errores
=======

Tipo de error de la librería y alias `Result`.

El motor de cálculo no produce errores (las divisiones por cero se resuelven como términos
nulos con aviso). Solo fallan las operaciones en los bordes: interpretación de archivos de
emplazamientos, de parámetros o de datos climáticos y escritura de resultados.
*/

use thiserror::Error;

/// Error de la librería
///
/// Library error type
#[derive(Debug, Error)]
pub enum DhError {
    /// Datos de entrada incorrectos
    #[error("Datos de entrada incorrectos: {0}")]
    WrongInput(String),
    /// Error de lectura o escritura
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),
    /// Error en datos JSON
    #[error("Formato JSON incorrecto: {0}")]
    Json(#[from] serde_json::Error),
    /// Error al generar datos CSV
    #[error("Error al generar CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Resultado con el tipo de error de la librería
pub type Result<T> = std::result::Result<T, DhError>;

