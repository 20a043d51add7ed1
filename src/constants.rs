// DOM hooks expected in index.html.
pub const CANVAS_ID: &str = "fireworks-canvas";
pub const ENVELOPE_ID: &str = "envelope";
pub const CARD_ID: &str = "card";
pub const CARD_TITLE_ID: &str = "card-title";
pub const CARD_LINES_ID: &str = "card-lines";
pub const LUCKY_WORD_ID: &str = "lucky-word";
pub const REFRESH_BUTTON_ID: &str = "refresh-button";
pub const SHARE_BUTTON_ID: &str = "share-button";
pub const MUTE_BUTTON_ID: &str = "mute-button";
pub const SHARE_OVERLAY_ID: &str = "share-overlay";

pub const MUTE_LABEL_ON: &str = "🔇";
pub const MUTE_LABEL_OFF: &str = "🔊";
