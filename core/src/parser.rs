//! The marker tag scanner.
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
//
// A tag has the shape `<x:ID?TRUE|FALSE>`:
//
// * `ID` is one or more ascii digits.
// * `TRUE` may not contain a bare `|` or `>`; they are written `||` and `>>`.
// * `FALSE` may not contain a bare `>`; it is written `>>`.
// * Neither branch may cross a line break.
//
// Anything that fails to scan as a tag is passed through as text.

pub(crate)
mod consts;

use {
    crate::source::{
        Coordinate,
        Source,
    },
    consts::{
        CARRIAGE_RETURN,
        DEFAULT_FALSE,
        DEFAULT_TRUE,
        NEWLINE,
        tag::{
            self,
            esc,
        },
    },
    std::borrow::Cow,
};

/// A marker tag found in a map.
///
/// Branches are kept exactly as written, escapes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub
struct MarkerTag<'a> {
    id: &'a str,
    true_branch: Option<&'a str>,
    false_branch: Option<&'a str>,
    coord: Coordinate,
}

impl<'a> MarkerTag<'a> {
    /// The mark id, as written.
    pub
    fn id(&self) -> &'a str {
        self.id
    }

    /// The escaped true-branch, if one was written.
    pub
    fn true_branch(&self) -> Option<&'a str> {
        self.true_branch
    }

    /// The escaped false-branch, if one was written.
    pub
    fn false_branch(&self) -> Option<&'a str> {
        self.false_branch
    }

    /// Where the tag's opener sits in the map.
    pub
    fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The text replacing this tag.
    ///
    /// Only the selected branch is unescaped.
    pub
    fn substitution(&self, matched: bool) -> Cow<'a, str> {
        if matched {
            self.true_branch
                .map(unescape_true)
                .unwrap_or(Cow::Borrowed(DEFAULT_TRUE))
        }
        else {
            self.false_branch
                .map(unescape_false)
                .unwrap_or(Cow::Borrowed(DEFAULT_FALSE))
        }
    }
}

/// Collapse every `||` to `|` and every `>>` to `>`.
pub(crate)
fn unescape_true(branch: &str) -> Cow<'_, str> {
    collapse(collapse(Cow::Borrowed(branch), esc::FALSE_SEPARATOR), esc::ENDER)
}

/// Collapse every `>>` to `>`.
pub(crate)
fn unescape_false(branch: &str) -> Cow<'_, str> {
    collapse(Cow::Borrowed(branch), esc::ENDER)
}

// single left-to-right pass, pairs never overlap
fn collapse<'a>(branch: Cow<'a, str>, escaped: &str) -> Cow<'a, str> {
    if !branch.contains(escaped) {
        return branch;
    }

    Cow::Owned(branch.replace(escaped, &escaped[..1]))
}

fn non_empty(branch: &str) -> Option<&str> {
    Some(branch).filter(|b| !b.is_empty())
}

fn is_line_break(c: char) -> bool {
    c == NEWLINE || c == CARRIAGE_RETURN
}

/// Where the false-branch begins when the true-branch ends at `at`.
fn false_branch_start(src: &str, at: usize) -> usize {
    if src[at..].starts_with(tag::FALSE_SEPARATOR) {
        at + 1
    }
    else {
        at
    }
}

/// Branch scan results for the rest of one line, filled right to left.
///
/// Escape pairs are indivisible and their pairing only depends on where a run
/// of `|` or `>` begins, so every offset can be answered from the offsets
/// after it. Each line is filled at most once per parse.
#[derive(Debug, Default)]
struct BranchTable {
    start: usize,
    end: usize,
    /// The `>` closing a false-branch read from each offset. The longest
    /// reading wins; when it runs into a line break, the start of the latest
    /// `>>` is taken as the ender instead.
    ender: Vec<Option<usize>>,
    /// The furthest true-branch end reachable from each offset whose
    /// false-branch can still be closed.
    true_end: Vec<Option<usize>>,
}

impl BranchTable {
    fn covers(&self, at: usize) -> bool {
        !self.ender.is_empty() && self.start <= at && at <= self.end
    }

    fn ender_at(&self, at: usize) -> Option<usize> {
        self.ender[at - self.start]
    }

    fn true_end_at(&self, at: usize) -> Option<usize> {
        self.true_end[at - self.start]
    }

    fn closes(&self, src: &str, at: usize) -> bool {
        self.ender_at(false_branch_start(src, at)).is_some()
    }

    /// Fill from `start` to the end of its line, reusing the buffers.
    fn fill(&mut self, src: &str, start: usize) {
        let end = src[start..]
            .find(is_line_break)
            .map(|idx| idx + start)
            .unwrap_or(src.len());
        let line = &src[start..end];

        self.start = start;
        self.end = end;
        self.ender.clear();
        self.ender.resize(line.len() + 1, None);
        self.true_end.clear();
        self.true_end.resize(line.len() + 1, None);

        for (idx, c) in line.char_indices().rev() {
            let at = start + idx;
            self.ender[idx] = if c != tag::ENDER {
                self.ender_at(at + c.len_utf8())
            }
            else if src[at..].starts_with(esc::ENDER) {
                self.ender_at(at + esc::ENDER.len()).or(Some(at))
            }
            else {
                Some(at)
            };
        }

        for (idx, c) in line.char_indices().rev() {
            let at = start + idx;
            let next = if c == tag::ENDER {
                src[at..].starts_with(esc::ENDER).then_some(at + esc::ENDER.len())
            }
            else if c == tag::FALSE_SEPARATOR {
                src[at..].starts_with(esc::FALSE_SEPARATOR)
                    .then_some(at + esc::FALSE_SEPARATOR.len())
            }
            else {
                Some(at + c.len_utf8())
            };

            let further = next.and_then(|next| self.true_end_at(next));
            self.true_end[idx] = further.or_else(|| self.closes(src, at).then_some(at));
        }
    }

    /// Scan the branches of a tag whose `?` sits just before `start`.
    ///
    /// Returns the raw branches and the offset just past the closing `>`.
    fn branches<'a>(&mut self, src: &'a str, start: usize)
        -> Option<(Option<&'a str>, Option<&'a str>, usize)>
    {
        if !self.covers(start) {
            self.fill(src, start);
        }

        let true_end = self.true_end_at(start)?;
        let false_start = false_branch_start(src, true_end);
        let false_end = self.ender_at(false_start)?;

        Some((
            non_empty(&src[start..true_end]),
            non_empty(&src[false_start..false_end]),
            false_end + 1,
        ))
    }
}

/// A run of the map: either literal text or a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate)
enum Segment<'a> {
    Text(&'a str),
    Tag(MarkerTag<'a>),
}

/// Splits a map into text and tags, left to right.
#[derive(Debug)]
pub(crate)
struct Parser<'a> {
    source: Source<'a>,
    table: BranchTable,
}

impl<'a> Parser<'a> {
    pub(crate)
    fn new(map: &'a str) -> Self {
        Self {
            source: Source::new(map),
            table: BranchTable::default(),
        }
    }

    fn src(&self) -> &Source<'a> {
        &self.source
    }

    fn src_mut(&mut self) -> &mut Source<'a> {
        &mut self.source
    }

    /// Scan a tag at the current position, consuming it if well-formed.
    fn marker_tag(&mut self) -> Option<MarkerTag<'a>> {
        if !self.src().starts_with_opener() {
            return None;
        }

        let pos = self.src().pos();
        let id_len = pos[tag::OPENER.len()..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if id_len == 0 {
            return None;
        }

        let id_end = tag::OPENER.len() + id_len;
        let id = &pos[tag::OPENER.len()..id_end];

        let (true_branch, false_branch, len) = match pos[id_end..].chars().next() {
            Some(tag::ENDER) => (None, None, id_end + 1),
            Some(tag::TRUE_SEPARATOR) => {
                let offset = self.src().offset();
                let content = self.src().content();
                let (true_branch, false_branch, end) = self.table
                    .branches(content, offset + id_end + 1)?;
                (true_branch, false_branch, end - offset)
            },
            _ => return None,
        };

        let coord = self.src().coord();
        self.src_mut().take_bytes(len);

        Some(MarkerTag { id, true_branch, false_branch, coord, })
    }

    /// Take text up to the next character that could open a tag.
    fn text(&mut self) -> Option<&'a str> {
        let pos = self.src().pos();
        let first = pos.chars().next()?.len_utf8();
        let len = pos[first..]
            .find('<')
            .map(|idx| idx + first)
            .unwrap_or(pos.len());

        Some(self.src_mut().take_bytes(len))
    }

    fn parse_next(&mut self) -> Option<Segment<'a>> {
        if self.src().eof() {
            return None;
        }

        if let Some(tag) = self.marker_tag() {
            return Some(Segment::Tag(tag));
        }

        self.text().map(Segment::Text)
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_next()
    }
}
