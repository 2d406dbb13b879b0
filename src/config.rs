/// Store listing destinations. A bare "#" marks a listing that is not live
/// yet; the badge click handler treats it as unresolved.
pub const APP_STORE_URL: &str = "#";
pub const PLAY_STORE_URL: &str = "#";

/// Href value meaning "no real destination configured".
pub const PLACEHOLDER_HREF: &str = "#";

pub const SUPPORT_EMAIL: &str = "support@clientist.app";
