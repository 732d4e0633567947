// DOM contract and presentation tuning for the page.

// Element hooks
pub const CANVAS_ID: &str = "petal-canvas";
pub const AUDIO_ID: &str = "bg-music";
pub const AUDIO_BUTTON_SELECTOR: &str = ".audio-control";
pub const AUDIO_ICON_ID: &str = "audio-icon";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const TILT_SELECTOR: &str = ".glass-card";

// Icon classes swapped by the audio toggle
pub const ICON_PLAY_CLASS: &str = "ph-play";
pub const ICON_PAUSE_CLASS: &str = "ph-pause";

// Glyph rendering
pub const GLYPH_FONT_FAMILY: &str = "\"Playfair Display\", serif";

// Scroll reveals: an element becomes visible once its top edge crosses this
// fraction of the viewport height
pub const REVEAL_CLASS: &str = "is-visible";
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

// Card tilt
pub const TILT_MAX_DEG: f64 = 8.0; // limited for subtlety
pub const TILT_SCALE: f64 = 1.02;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
