// DOM contract with the page markup. Ids and selectors only; tuning lives in
// `birthday_core::constants`.

pub const BG_CANVAS_ID: &str = "bgCanvas";
pub const FX_CANVAS_ID: &str = "fxCanvas";
pub const START_BUTTON_ID: &str = "startBtn";
pub const MIC_STATUS_ID: &str = "micStatus";
pub const INITIAL_STATE_ID: &str = "initial-state";
pub const FINAL_STATE_ID: &str = "final-state";
pub const BG_MUSIC_ID: &str = "bgMusic";
pub const VIDEO_ID: &str = "birthdayVideo";
pub const CANDLE_SELECTOR: &str = ".candle";

pub const HIDDEN_CLASS: &str = "hidden";

// Start button fades via CSS, then leaves layout after this delay.
pub const START_BUTTON_REMOVE_MS: i32 = 500;

pub const MIC_DENIED_COLOR: &str = "#ff4444";
pub const MIC_DENIED_HTML: &str =
    "🚫 <b>Microphone Denied</b><br><small>Tap the candle to blow it out!</small>";

// Loop labels used in frame-error logs.
pub const STARS_LOOP: &str = "stars";
pub const EFFECTS_LOOP: &str = "effects";
pub const BREATH_LOOP: &str = "breath";
