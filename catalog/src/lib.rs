use std::cmp::Ordering;

use song::{compare_ignore_case, Song};
use tracing::{debug, instrument, trace};

/// Songs kept in natural order so lookups can binary search.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip_all, level = "trace")]
    pub fn from_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut songs: Vec<Song> = songs.into_iter().collect();
        sort_songs(&mut songs);
        debug!(n_songs = songs.len(), "built catalog");

        Self { songs }
    }

    /// Inserts after any songs that already compare equal.
    pub fn insert(&mut self, song: Song) {
        let index = self
            .songs
            .partition_point(|existing| existing.natural_cmp(&song) != Ordering::Greater);
        trace!(index, %song, "inserting song");
        self.songs.insert(index, song);
    }

    /// First song matching `artist` and `title`, ignoring case.
    #[instrument(skip(self), level = "trace")]
    pub fn find(&self, artist: &str, title: &str) -> Option<&Song> {
        let index = self
            .songs
            .partition_point(|song| key_cmp(song, artist, title) == Ordering::Less);

        self.songs
            .get(index)
            .filter(|song| key_cmp(song, artist, title) == Ordering::Equal)
    }

    /// Every song by `artist`, ignoring case, in title order.
    #[instrument(skip(self), level = "trace")]
    pub fn by_artist(&self, artist: &str) -> &[Song] {
        let start = self
            .songs
            .partition_point(|song| compare_ignore_case(song.artist(), artist) < 0);
        let end = self
            .songs
            .partition_point(|song| compare_ignore_case(song.artist(), artist) <= 0);

        &self.songs[start..end]
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }
}

impl FromIterator<Song> for Catalog {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self::from_songs(iter)
    }
}

impl IntoIterator for Catalog {
    type Item = Song;
    type IntoIter = std::vec::IntoIter<Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

/// Stable sort by natural order.
#[instrument(skip_all, level = "trace")]
pub fn sort_songs(songs: &mut [Song]) {
    songs.sort_by(Song::natural_cmp);
}

fn key_cmp(song: &Song, artist: &str, title: &str) -> Ordering {
    match compare_ignore_case(song.artist(), artist) {
        0 => compare_ignore_case(song.title(), title).cmp(&0),
        by_artist => by_artist.cmp(&0),
    }
}
