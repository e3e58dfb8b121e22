/// Page hooks and layout tuning for the web front end.
///
/// Element ids must match `index.html`.
pub const CONTAINER_ID: &str = "container";
pub const CANVAS_ID: &str = "app-canvas";
pub const TOGGLE_BUTTON_ID: &str = "toggle-btn";
pub const TEXT_OVERLAY_ID: &str = "text-overlay";

// Vertical space kept free for the toolbar (CSS px)
pub const TOOLBAR_HEIGHT_PX: f64 = 100.0;

// Backdrop composited onto both back walls
pub const BACKDROP_IMAGE_URL: &str = "lainx420.png";

/// Body of the `<pre>` block pinned over the back wall.
pub const ABOUT_TEXT: &str = "0-Day Research Labs is dedicated to discovering novel high-quality 0-day exploits and advanced vulnerabilities in computer systems.

We are leading the way in augmenting discovery with the use of frontier AI techniques in order to deliver the world\u{2019}s most innovative service at the cutting edge of vulnerability research.


For further information or general enquiries, please contact us.";
