//! Score, timer and result text in the host page

use web_sys::Document;

/// Page element ids the HUD writes to. Missing elements are skipped.
pub const SCORE_ID: &str = "score";
pub const TIMER_ID: &str = "timer";
pub const BANNER_ID: &str = "banner";

/// Last text written per element, so unchanged text is not rewritten
#[derive(Default)]
pub struct Hud {
    score: Option<String>,
    timer: Option<String>,
    banner: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, document: &Document, score: &str, timer: &str, banner: &str) {
        set_if_changed(document, SCORE_ID, &mut self.score, score);
        set_if_changed(document, TIMER_ID, &mut self.timer, timer);
        set_if_changed(document, BANNER_ID, &mut self.banner, banner);
    }

    /// Forget cached text so the next update rewrites every element
    pub fn invalidate(&mut self) {
        *self = Self::default();
    }
}

fn set_if_changed(document: &Document, id: &str, cached: &mut Option<String>, text: &str) {
    if cached.as_deref() == Some(text) {
        return;
    }
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
    *cached = Some(text.to_string());
}
