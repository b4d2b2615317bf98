use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Deserializer, Serialize};

/// A song's artist, title and lyrics.
///
/// Fields are fixed at construction. Equality compares all three fields,
/// while [`Song::natural_cmp`] only looks at artist and title, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    #[serde(default, deserialize_with = "null_as_empty")]
    artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    /// May contain embedded line breaks.
    #[serde(default, deserialize_with = "null_as_empty")]
    lyrics: String,
}

impl Song {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            lyrics: lyrics.into(),
        }
    }

    /// Builds a song from values that may be missing; a missing value is
    /// stored as an empty string.
    pub fn from_options(
        artist: Option<String>,
        title: Option<String>,
        lyrics: Option<String>,
    ) -> Self {
        Self {
            artist: artist.unwrap_or_default(),
            title: title.unwrap_or_default(),
            lyrics: lyrics.unwrap_or_default(),
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    /// Natural order: artist first, then title, both case-insensitive.
    pub fn natural_cmp(&self, other: &Song) -> Ordering {
        self.compare_keys(&other.artist, &other.title).cmp(&0)
    }

    /// Integer comparison kept for callers that expect a signed distance
    /// rather than an [`Ordering`].
    ///
    /// Returns `-1` when there is nothing to compare against. Otherwise the
    /// sign matches [`Song::natural_cmp`].
    pub fn compare_to(&self, other: Option<&Song>) -> i32 {
        match other {
            None => -1,
            Some(other) => self.compare_keys(&other.artist, &other.title),
        }
    }

    fn compare_keys(&self, artist: &str, title: &str) -> i32 {
        match compare_ignore_case(&self.artist, artist) {
            0 => compare_ignore_case(&self.title, title),
            by_artist => by_artist,
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, \"{}\"", self.artist, self.title)
    }
}

/// Compares two strings character by character ignoring case.
///
/// Returns the difference of the first pair of folded characters that differ,
/// or the difference in length when one string is a prefix of the other.
pub fn compare_ignore_case(a: &str, b: &str) -> i32 {
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                if l == r {
                    continue;
                }
                let (l, r) = (fold(l), fold(r));
                if l != r {
                    return l as i32 - r as i32;
                }
            }
            (Some(_), None) => return left.count() as i32 + 1,
            (None, Some(_)) => return -(right.count() as i32 + 1),
            (None, None) => return 0,
        }
    }
}

// upper then lower, so scripts with asymmetric case maps still meet.
// A multi-char upper mapping keeps the original; a multi-char lower mapping
// ('İ' -> "i\u{307}") keeps its leading char.
fn fold(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    upper.to_lowercase().next().unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
