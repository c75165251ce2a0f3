//! Ordered tag-key aliases.
//!
//! Containers disagree on tag key spelling (`artist` in Vorbis comments,
//! `ARTIST` from some taggers, `Artist` from others), so each logical field
//! lists the spellings it accepts in priority order.

use std::collections::BTreeMap;

/// A logical field and the tag keys that may carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGroup {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

pub const TITLE: AliasGroup = AliasGroup {
    field: "title",
    aliases: &["title", "Title", "TITLE"],
};

pub const ARTIST: AliasGroup = AliasGroup {
    field: "artist",
    aliases: &["artist", "Artist", "ARTIST"],
};

pub const ALBUM: AliasGroup = AliasGroup {
    field: "album",
    aliases: &["album", "Album", "ALBUM"],
};

pub const LYRICS: AliasGroup = AliasGroup {
    field: "lyrics",
    aliases: &["lyrics", "Lyrics", "unsyncedlyrics", "syncedlyrics", "LYRICS"],
};

impl AliasGroup {
    /// First alias present in `tags`, with its value.
    pub fn resolve<'a>(&self, tags: &'a BTreeMap<String, String>) -> Option<(&'static str, &'a str)> {
        self.aliases
            .iter()
            .find_map(|key| tags.get(*key).map(|value| (*key, value.as_str())))
    }

    /// Value of the first alias present, or an empty string.
    pub fn value_or_empty(&self, tags: &BTreeMap<String, String>) -> String {
        self.resolve(tags)
            .map(|(_, value)| value.to_string())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.aliases.contains(&key)
    }
}
