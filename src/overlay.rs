use crate::constants::{ABOUT_TEXT, TEXT_OVERLAY_ID};
use crate::layout;
use room_core::TextOverlay;
use std::time::Duration;
use web_sys as web;

/// Builds `#text-overlay` with its `<pre>` body inside `container`.
pub fn create(document: &web::Document, container: &web::Element) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    el.set_id(TEXT_OVERLAY_ID);
    let pre = document
        .create_element("pre")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    pre.set_text_content(Some(ABOUT_TEXT));
    el.append_child(&pre)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(el)
}

/// Mirror the overlay's bounds and fade onto the element.
#[inline]
pub fn apply(el: &web::Element, overlay: &TextOverlay, now: Duration) {
    let style = layout::overlay_style(
        &overlay.bounds,
        overlay.opacity(now),
        overlay.is_displayed(),
    );
    _ = el.set_attribute("style", &style);
}
