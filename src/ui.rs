use crate::constants::*;
use crate::dom;
use hongbao_core::{Card, CardState};
use web_sys as web;

/// Reflect the card state and current greeting in the DOM.
pub fn render_card(document: &web::Document, card: &Card) {
    let state = card.state();
    dom::set_visible(document, ENVELOPE_ID, state == CardState::Closed);
    dom::set_visible(document, CARD_ID, state == CardState::Opened);

    let greeting = card.greeting();
    dom::set_text(document, CARD_TITLE_ID, greeting.title);
    dom::set_text(document, LUCKY_WORD_ID, &greeting.lucky_word.to_string());

    if let Some(container) = document.get_element_by_id(CARD_LINES_ID) {
        container.set_text_content(None);
        for line in greeting.lines {
            if let Ok(p) = document.create_element("p") {
                p.set_text_content(Some(line));
                let _ = container.append_child(&p);
            }
        }
    }
}

pub fn render_mute(document: &web::Document, muted: bool) {
    let label = if muted { MUTE_LABEL_ON } else { MUTE_LABEL_OFF };
    dom::set_text(document, MUTE_BUTTON_ID, label);
}
