//! Rendering of marker tags embedded in plain-text maps.
//!
//! A marker tag such as `<x:12?@|.>` marks a spot on a map. When rendered, a
//! tag whose id matches the renderer's [`MatchCriterion`] is replaced with its
//! true-branch (`@`), every other tag with its false-branch (`.`).
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

mod criterion;
mod error;
mod parser;
mod renderer;
mod source;

pub use {
    criterion::MatchCriterion,
    error::{
        Error,
        Result,
    },
    parser::MarkerTag,
    renderer::MarkerRenderer,
    source::Coordinate,
};
