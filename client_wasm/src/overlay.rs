//! Page elements around the canvas: the taunt banner and the play-again screen

use game_core::Events;

/// What the page should currently show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub canvas_hidden: bool,
    pub play_again_hidden: bool,
    pub taunt_hidden: bool,
    pub taunt: &'static str,
}

impl OverlayView {
    pub fn new() -> Self {
        Self {
            canvas_hidden: false,
            play_again_hidden: true,
            taunt_hidden: true,
            taunt: "",
        }
    }

    /// Fold one frame's events into the view. Returns true if anything changed.
    pub fn on_frame(&mut self, events: &Events) -> bool {
        let before = self.clone();

        if let Some(taunt) = events.taunt {
            self.taunt = taunt;
            self.taunt_hidden = false;
        }

        if events.winner.is_some() {
            self.canvas_hidden = true;
            self.play_again_hidden = false;
            self.taunt_hidden = true;
        }

        *self != before
    }

    pub fn on_restart(&mut self) {
        self.canvas_hidden = false;
        self.play_again_hidden = true;
    }
}

impl Default for OverlayView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::OverlayElements;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::OverlayView;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    pub const CANVAS_ID: &str = "game";
    pub const PLAY_AGAIN_ID: &str = "gameOver";
    pub const TAUNT_ID: &str = "trashTalkMessage";

    pub struct OverlayElements {
        canvas: HtmlElement,
        play_again: HtmlElement,
        taunt: HtmlElement,
    }

    fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
    }

    impl OverlayElements {
        pub fn find(document: &Document) -> Result<Self, JsValue> {
            Ok(Self {
                canvas: html_element(document, CANVAS_ID)?,
                play_again: html_element(document, PLAY_AGAIN_ID)?,
                taunt: html_element(document, TAUNT_ID)?,
            })
        }

        pub fn play_again(&self) -> &HtmlElement {
            &self.play_again
        }

        pub fn apply(&self, view: &OverlayView) {
            self.canvas.set_hidden(view.canvas_hidden);
            self.play_again.set_hidden(view.play_again_hidden);
            self.taunt.set_inner_text(view.taunt);
            self.taunt.set_hidden(view.taunt_hidden);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn test_point_shows_taunt() {
        let mut view = OverlayView::new();
        let events = Events {
            right_scored: true,
            taunt: Some("Keep it up"),
            ..Events::default()
        };
        assert!(view.on_frame(&events));
        assert!(!view.taunt_hidden);
        assert_eq!(view.taunt, "Keep it up");
        assert!(!view.on_frame(&Events::new()), "Quiet frame changes nothing");
        assert!(!view.taunt_hidden, "Banner stays up between points");
    }

    #[test]
    fn test_game_over_hides_canvas_and_taunt() {
        let mut view = OverlayView::new();
        let events = Events {
            left_scored: true,
            taunt: Some("Good work"),
            winner: Some(Side::Left),
            ..Events::default()
        };
        view.on_frame(&events);
        assert!(view.canvas_hidden);
        assert!(!view.play_again_hidden);
        assert!(view.taunt_hidden);

        view.on_restart();
        assert!(!view.canvas_hidden);
        assert!(view.play_again_hidden);
    }
}
