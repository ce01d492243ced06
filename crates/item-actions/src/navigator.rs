//! Navigation seam

use crate::error::ActionResult;

/// Full-page navigation, e.g. assigning `window.location.href`
pub trait Navigator {
    fn navigate(&self, url: &str) -> ActionResult<()>;
}
