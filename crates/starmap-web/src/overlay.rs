use crate::constants::BACKDROP_ID;
use crate::constants::VISIBLE_CLASS;
use web_sys as web;

// Backdrop dimming the map behind the bottom sheet.

#[inline]
pub fn show(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(BACKDROP_ID) {
        _ = el.class_list().add_1(VISIBLE_CLASS);
        true
    } else {
        false
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(BACKDROP_ID) {
        _ = el.class_list().remove_1(VISIBLE_CLASS);
    }
}
