//! Fallback avatar glyphs for profiles without an uploaded image.

/// Shown for missing names and for names that do not start with a letter a-z.
pub const UNKNOWN_AVATAR: &str = "👤";

const LETTER_AVATARS: [&str; 26] = [
    "🌟", "🎨", "🚀", "🦕", "🌈", "🦊", "🌺", "🦔", "🎪", "🎯", "🪁", "🦁", "🌙", "🦉", "🐙",
    "🐼", "👑", "🤖", "⭐", "🐢", "🦄", "🎻", "🐋", "❌", "🪀", "⚡",
];

/// Pick a glyph from the lowercase first letter of `name`.
#[must_use]
pub fn default_avatar_emoji(name: Option<&str>) -> &'static str {
    let Some(first) = name.and_then(|n| n.chars().next()) else {
        return UNKNOWN_AVATAR;
    };
    let first = first.to_ascii_lowercase();
    if first.is_ascii_lowercase() {
        LETTER_AVATARS[usize::from(first as u8 - b'a')]
    } else {
        UNKNOWN_AVATAR
    }
}
