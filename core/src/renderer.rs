//! Rendering of maps containing marker tags.
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
    crate::{
        criterion::MatchCriterion,
        parser::{
            MarkerTag,
            Parser,
            Segment,
        },
    },
    std::fmt::{
        Display,
        Formatter,
        Result as FmtResult,
    },
    tracing::{
        debug,
        trace,
    },
};

/// Renders a map, replacing each marker tag with its true- or false-branch.
///
/// `render` borrows the renderer immutably, so an instance may be rendered
/// from many threads at once. Changing the criterion requires `&mut self`;
/// callers sharing one renderer must serialize those changes themselves.
#[derive(Clone, Debug)]
pub
struct MarkerRenderer {
    original: String,
    criterion: MatchCriterion,
}

impl MarkerRenderer {
    /// Create a new renderer that renders every tag unmatched.
    ///
    /// # Arguments
    ///
    /// * `map` - The map containing marker tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapmark_core::MarkerRenderer;
    ///
    /// let renderer = MarkerRenderer::new("[<x:1>]-[<x:2>]");
    /// assert_eq!("[ ]-[ ]", renderer.render());
    /// ```
    pub
    fn new<S>(map: S) -> Self
    where
        S: Into<String>
    {
        Self::with_criterion(map, MatchCriterion::default())
    }

    /// Create a new renderer with a starting criterion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapmark_core::{ MarkerRenderer, MatchCriterion, };
    ///
    /// let renderer = MarkerRenderer::with_criterion("[<x:1?You>]", MatchCriterion::All);
    /// assert_eq!("[You]", renderer.render());
    /// ```
    pub
    fn with_criterion<S, C>(map: S, criterion: C) -> Self
    where
        S: Into<String>,
        C: Into<MatchCriterion>
    {
        Self {
            original: map.into(),
            criterion: criterion.into(),
        }
    }

    /// Borrow the unrendered map.
    pub
    fn original(&self) -> &str {
        &self.original
    }

    pub
    fn criterion(&self) -> &MatchCriterion {
        &self.criterion
    }

    pub
    fn criterion_mut(&mut self) -> &mut MatchCriterion {
        &mut self.criterion
    }

    /// Replace the criterion used by subsequent renders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapmark_core::MarkerRenderer;
    ///
    /// let mut renderer = MarkerRenderer::new("[<x:1>]-[<x:2>]-[<x:3>]");
    /// renderer.set_criterion(2);
    /// assert_eq!("[ ]-[X]-[ ]", renderer.render());
    /// ```
    pub
    fn set_criterion<C>(&mut self, criterion: C)
    where
        C: Into<MatchCriterion>
    {
        self.criterion = criterion.into();
    }

    /// Every well-formed tag in the map, in order.
    pub
    fn tags(&self) -> Vec<MarkerTag<'_>> {
        Parser::new(&self.original)
            .filter_map(|segment| match segment {
                Segment::Tag(tag) => Some(tag),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// The distinct mark ids in the map, in order of first appearance.
    pub
    fn marker_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for tag in self.tags() {
            if !ids.contains(&tag.id()) {
                ids.push(tag.id());
            }
        }

        ids
    }

    /// Render the map against the current criterion.
    ///
    /// Never fails. Malformed tags are emitted as they were written.
    pub
    fn render(&self) -> String {
        let mut output = String::with_capacity(self.original.len());
        let mut tag_count = 0usize;

        for segment in Parser::new(&self.original) {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Tag(tag) => {
                    let matched = self.criterion.is_match(tag.id());
                    trace!(id = tag.id(), coord = %tag.coord(), matched, "resolved tag");

                    output.push_str(&tag.substitution(matched));
                    tag_count += 1;
                },
            }
        }

        debug!(
            criterion = %self.criterion,
            tags = tag_count,
            input_len = self.original.len(),
            output_len = output.len(),
            "rendered map"
        );

        output
    }
}

impl Display for MarkerRenderer {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        fmtr.write_str(&self.render())
    }
}
