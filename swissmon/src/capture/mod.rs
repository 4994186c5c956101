mod capture;

pub use capture::{
    CaptureModifiers,
    MAX_CAPTURE_RATE,
    hp_modifier,
    level_modifier,
};
