//! Read-position tracking over an in-memory map.
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

use {
    crate::parser::consts::{
        NEWLINE,
        tag::OPENER,
    },
    std::fmt::{
        Display,
        Formatter,
        Result as FmtResult,
    },
};

/// A zero-based line and character position within a map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub
struct Coordinate {
    line: usize,
    position: usize,
}

impl Coordinate {
    /// The zero-based line.
    pub
    fn line(&self) -> usize {
        self.line
    }

    /// The zero-based character position within the line.
    pub
    fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self, c: char) {
        if c == NEWLINE {
            self.line += 1;
            self.position = 0;
        }
        else {
            self.position += 1;
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        fmtr.write_fmt(format_args!(
            "line {} position {}",
            self.line + 1,
            self.position + 1,
        ))
    }
}

/// A borrowed map with a cursor.
#[derive(Debug)]
pub(crate)
struct Source<'a> {
    content: &'a str,
    offset: usize,
    coord: Coordinate,
}

impl<'a> Source<'a> {
    pub(crate)
    fn new(content: &'a str) -> Self {
        Self {
            content,
            offset: 0,
            coord: Coordinate::default(),
        }
    }

    /// The unread remainder of the map.
    pub(crate)
    fn pos(&self) -> &'a str {
        &self.content[self.offset..]
    }

    /// The whole map, read or not.
    pub(crate)
    fn content(&self) -> &'a str {
        self.content
    }

    /// Bytes read so far.
    pub(crate)
    fn offset(&self) -> usize {
        self.offset
    }

    pub(crate)
    fn coord(&self) -> Coordinate {
        self.coord
    }

    pub(crate)
    fn eof(&self) -> bool {
        self.offset == self.content.len()
    }

    pub(crate)
    fn starts_with_opener(&self) -> bool {
        self.pos()
            .get(..OPENER.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(OPENER))
    }

    /// Take `len` bytes. `len` must fall on a character boundary.
    pub(crate)
    fn take_bytes(&mut self, len: usize) -> &'a str {
        let taken = &self.pos()[..len];
        for c in taken.chars() {
            self.coord.advance(c);
        }

        self.offset += len;
        taken
    }
}
