//! HTML pages for the builder itself.
//!
//! These wrap the editing workflow. The portfolio markup that gets exported
//! lives in `render`; these pages only frame it in preview iframes.
//!
//! ## Module Structure
//!
//! - `styles` - CSS for the builder pages
//! - `components` - Nav bar and base page template
//! - `gallery` - Template picker
//! - `customize` - Form with live preview
//! - `preview` - Full preview with the download link

mod components;
mod customize;
mod gallery;
mod preview;
mod styles;

pub use components::{base_html, nav_bar};
pub use customize::render_customize;
pub use gallery::render_gallery;
pub use preview::render_preview;
pub use styles::STYLE;
