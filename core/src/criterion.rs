//! The rule deciding which marker tags render as matched.
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
    crate::error::{
        Error,
        Result,
    },
    serde::{
        de::{
            Error as DeError,
            MapAccess,
            Visitor,
        },
        ser::SerializeMap,
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    },
    std::{
        fmt::{
            Display,
            Formatter,
            Result as FmtResult,
        },
        result::Result as StdResult,
        str::FromStr,
    },
};

const ALL: &str = "all";
const NONE: &str = "none";
const ID_KEY: &str = "id";
const ID_FIELDS: &[&str] = &[ID_KEY];

/// The mark id a renderer matches tags against.
///
/// In MUD maps the id is usually the vnum of the room the player stands in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub
enum MatchCriterion {
    /// Every tag renders its true-branch. Useful while building a map.
    All,
    /// Every tag renders its false-branch.
    #[default]
    None,
    /// Only tags whose id is exactly this string render their true-branch.
    Id(String),
}

impl MatchCriterion {
    /// Match tags with the given id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapmark_core::MatchCriterion;
    ///
    /// assert!(MatchCriterion::id(12).is_match("12"));
    /// assert!(!MatchCriterion::id(12).is_match("012"));
    /// ```
    pub
    fn id<I: ToString>(id: I) -> Self {
        Self::Id(id.to_string())
    }

    /// `All` or `None` when `input` is one of their keywords.
    fn keyword(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case(ALL) {
            Some(Self::All)
        }
        else if trimmed.eq_ignore_ascii_case(NONE) {
            Some(Self::None)
        }
        else {
            None
        }
    }

    /// Whether a tag carrying `id` renders its true-branch.
    pub
    fn is_match(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Id(want) => want == id,
        }
    }
}

impl FromStr for MatchCriterion {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if let Some(keyword) = Self::keyword(trimmed) {
            Ok(keyword)
        }
        else if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self::Id(trimmed.to_owned()))
        }
        else {
            Err(Error::InvalidCriterion(input.to_owned()))
        }
    }
}

impl Display for MatchCriterion {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::All => fmtr.write_str(ALL),
            Self::None => fmtr.write_str(NONE),
            Self::Id(id) => fmtr.write_str(id),
        }
    }
}

impl From<bool> for MatchCriterion {
    fn from(all: bool) -> Self {
        if all {
            Self::All
        }
        else {
            Self::None
        }
    }
}

impl From<&str> for MatchCriterion {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

impl From<String> for MatchCriterion {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<T: Into<MatchCriterion>> From<Option<T>> for MatchCriterion {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

macro_rules! from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for MatchCriterion {
                fn from(id: $int) -> Self {
                    Self::Id(id.to_string())
                }
            }
        )*
    }
}

from_integer!(u8, u16, u32, u64, usize, i32, i64);

/// `All` is `true` and `None` is null. An id is a bare string unless it reads
/// as a keyword, in which case it is written as `{"id": ..}`.
impl Serialize for MatchCriterion {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            Self::All => serializer.serialize_bool(true),
            Self::None => serializer.serialize_none(),
            Self::Id(id) if Self::keyword(id).is_some() => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ID_KEY, id)?;
                map.end()
            },
            Self::Id(id) => serializer.serialize_str(id),
        }
    }
}

struct CriterionVisitor;

impl<'de> Visitor<'de> for CriterionVisitor {
    type Value = MatchCriterion;

    fn expecting(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        fmtr.write_str("a boolean, null, a mark id, \"all\", \"none\" or {\"id\": ..}")
    }

    fn visit_bool<E: DeError>(self, all: bool) -> StdResult<Self::Value, E> {
        Ok(all.into())
    }

    fn visit_unit<E: DeError>(self) -> StdResult<Self::Value, E> {
        Ok(MatchCriterion::None)
    }

    fn visit_none<E: DeError>(self) -> StdResult<Self::Value, E> {
        Ok(MatchCriterion::None)
    }

    fn visit_some<D>(self, deserializer: D) -> StdResult<Self::Value, D::Error>
    where
        D: Deserializer<'de>
    {
        MatchCriterion::deserialize(deserializer)
    }

    fn visit_u64<E: DeError>(self, id: u64) -> StdResult<Self::Value, E> {
        Ok(id.into())
    }

    fn visit_i64<E: DeError>(self, id: i64) -> StdResult<Self::Value, E> {
        Ok(id.into())
    }

    fn visit_str<E: DeError>(self, input: &str) -> StdResult<Self::Value, E> {
        Ok(MatchCriterion::keyword(input).unwrap_or_else(|| input.into()))
    }

    fn visit_map<A>(self, mut map: A) -> StdResult<Self::Value, A::Error>
    where
        A: MapAccess<'de>
    {
        let mut id: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key != ID_KEY {
                return Err(A::Error::unknown_field(&key, ID_FIELDS));
            }

            if id.is_some() {
                return Err(A::Error::duplicate_field(ID_KEY));
            }

            id = Some(map.next_value()?);
        }

        id.map(MatchCriterion::Id)
            .ok_or_else(|| A::Error::missing_field(ID_KEY))
    }
}

impl<'de> Deserialize<'de> for MatchCriterion {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        deserializer.deserialize_any(CriterionVisitor)
    }
}
