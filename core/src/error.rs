//! Error types for the map marker renderer.
// Copyright (C) 2024  Frankie Baffa
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    error::Error as StdError,
    fmt::{
        Display,
        Formatter,
        Result as FmtResult,
    },
    result::Result as StdResult,
};

/// The error type for the map marker renderer.
///
/// Rendering itself never fails. Errors only arise when interpreting
/// caller-supplied input such as a textual match criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub
enum Error {
    InvalidCriterion(String),
}

impl Display for Error {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidCriterion(input) => fmtr.write_fmt(format_args!(
                "Invalid match criterion {:?}, expected \"all\", \"none\" or a numeric mark id",
                input,
            )),
        }
    }
}

impl StdError for Error {}

/// The result type for the map marker renderer.
pub type Result<T> = StdResult<T, Error>;
