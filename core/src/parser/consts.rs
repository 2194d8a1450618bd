//! Constants for the marker tag grammar.
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

pub(crate)
mod tag;

/// Rendered when a matched tag has no true-branch.
pub(crate)
const DEFAULT_TRUE: &str = "X";

/// Rendered when an unmatched tag has no false-branch.
pub(crate)
const DEFAULT_FALSE: &str = " ";

pub(crate)
const NEWLINE: char = '\n';

pub(crate)
const CARRIAGE_RETURN: char = '\r';
