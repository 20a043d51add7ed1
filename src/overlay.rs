use crate::constants::SHARE_OVERLAY_ID;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    dom::set_visible(document, SHARE_OVERLAY_ID, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_visible(document, SHARE_OVERLAY_ID, false);
}
