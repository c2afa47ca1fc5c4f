/// Glyph used when an icon name is not in [`ICON_MAP`].
pub const DEFAULT_ICON: &str = "⭐";

pub const ICON_MAP: &[(&str, &str)] = &[
    ("users", "👥"),
    ("award", "🏆"),
    ("headphones", "🎧"),
    ("star", "⭐"),
    ("check", "✓"),
    ("shield", "🛡️"),
    ("zap", "⚡"),
    ("heart", "❤️"),
    ("globe", "🌐"),
    ("clock", "⏰"),
    ("mail", "✉️"),
    ("phone", "📞"),
    ("map-pin", "📍"),
    ("calendar", "📅"),
    ("settings", "⚙️"),
    ("lock", "🔒"),
    ("eye", "👁️"),
    ("home", "🏠"),
    ("user", "👤"),
    ("search", "🔍"),
    ("play", "▶️"),
    ("pause", "⏸️"),
    ("download", "⬇️"),
    ("upload", "⬆️"),
    ("trash", "🗑️"),
    ("edit", "✏️"),
    ("plus", "➕"),
    ("minus", "➖"),
    ("arrow-right", "→"),
    ("arrow-left", "←"),
    ("arrow-up", "↑"),
    ("arrow-down", "↓"),
];

pub fn resolve_icon(name: &str) -> &'static str {
    ICON_MAP
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_ICON)
}

pub const DEFAULT_SOCIAL_NETWORKS: &[&str] = &["facebook", "twitter", "instagram", "linkedin"];

/// Brand color and glyph for a social network badge.
pub fn social_badge(network: &str) -> (&'static str, String) {
    match network {
        "facebook" => ("#1877F2", "f".to_string()),
        "twitter" => ("#1DA1F2", "𝕏".to_string()),
        "instagram" => ("#E4405F", "📷".to_string()),
        "linkedin" => ("#0077B5", "in".to_string()),
        "youtube" => ("#FF0000", "▶".to_string()),
        other => ("#6b7280", other.chars().next().map(String::from).unwrap_or_default()),
    }
}
