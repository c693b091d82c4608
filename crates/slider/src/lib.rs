//! Image before/after drag-slider.
//!
//! Binds to a fixed container structure in the hosting page and
//! resizes the "before" panel in response to pointer position,
//! producing an interactive reveal between two stacked images.
//!
//! Expected structure inside the bound container:
//!
//! ```text
//! <div id="comp1">
//!   <div class="bal-after">
//!     ...
//!     <div class="bal-afterPosition">After label</div>
//!   </div>
//!   <div class="bal-before">
//!     <div class="bal-before-inset"> ... </div>
//!   </div>
//!   <div class="bal-handle"></div>
//! </div>
//! ```
//!
//! The host feeds viewport resizes to [`BeforeAfterSlider::on_resize`]
//! and pointer samples to [`BeforeAfterSlider::on_pointer`]. Every
//! qualifying sample repositions the slider immediately; there is no
//! drag state, debouncing, or easing. Dropping the widget detaches it.

use tracing::warn;
use wipekit_common::{WidgetDefaults, WipekitError, WipekitResult};
use wipekit_page_host::{Element, Page};
use wipekit_page_model::event::PointerEvent;
use wipekit_page_model::style::{StyleProperty, StyleValue};

/// Selector for the sliding "before" panel.
pub const BEFORE_SELECTOR: &str = ".bal-before";
/// Selector for the inset wrapper cropped by the panel.
pub const BEFORE_INSET_SELECTOR: &str = ".bal-before-inset";
/// Selector for the revealed "after" label.
pub const AFTER_LABEL_SELECTOR: &str = ".bal-afterPosition";
/// Selector for the drag handle.
pub const HANDLE_SELECTOR: &str = ".bal-handle";

/// One bound slider instance.
///
/// Holds handles to the container and its four required sub-elements;
/// the split state itself lives in the page as inline percentage
/// styles.
pub struct BeforeAfterSlider<P: Page> {
    container: P::Elem,
    before_panel: P::Elem,
    before_inset: P::Elem,
    after_label: P::Elem,
    handle: P::Elem,
    dead_zone_px: f64,
}

impl<P: Page> BeforeAfterSlider<P> {
    /// Bind to the container matched by `selector`.
    ///
    /// All lookups happen before any style write: a missing container
    /// or sub-element aborts with [`WipekitError::ElementMissing`] and
    /// leaves the page untouched. On success the inset wrapper is
    /// sized to the container's rendered width (so the cropped
    /// background image stays sized to the container) and the panel
    /// and handle start at the configured initial reveal.
    pub fn bind(page: &P, selector: &str, defaults: &WidgetDefaults) -> WipekitResult<Self> {
        let Some(container) = page.query(selector) else {
            warn!(selector, "slider container not found");
            return Err(WipekitError::element_missing(selector));
        };

        let before_panel = require(page, &container, selector, BEFORE_SELECTOR)?;
        let before_inset = require(page, &container, selector, BEFORE_INSET_SELECTOR)?;
        let after_label = require(page, &container, selector, AFTER_LABEL_SELECTOR)?;
        let handle = require(page, &container, selector, HANDLE_SELECTOR)?;

        let slider = Self {
            container,
            before_panel,
            before_inset,
            after_label,
            handle,
            dead_zone_px: defaults.edge_dead_zone_px,
        };

        slider.sync_inset_width();
        slider.apply_reveal(defaults.initial_reveal_percent);
        Ok(slider)
    }

    /// Re-sync the inset wrapper to the container's rendered width.
    ///
    /// Wired to the viewport resize signal; idempotent and safe to
    /// call arbitrarily often. Panel and handle state are untouched.
    pub fn on_resize(&self) {
        self.sync_inset_width();
    }

    /// Reposition from a pointer sample.
    ///
    /// Samples within the edge dead zone leave the slider untouched so
    /// the handle never fully disappears. Mouse and touch take the
    /// same path.
    pub fn on_pointer(&self, event: &PointerEvent) {
        let width = self.container.offset_width();
        let offset_x = event.client_x - self.container.offset_left();
        if offset_x <= self.dead_zone_px || offset_x >= width - self.dead_zone_px {
            return;
        }

        let percent = offset_x * 100.0 / width;
        self.apply_reveal(percent);
        // The revealed label must stack above the sliding panel once
        // interaction begins.
        self.after_label
            .set_style(StyleProperty::ZIndex, StyleValue::Layer(1));
    }

    fn apply_reveal(&self, percent: f64) {
        self.before_panel
            .set_style(StyleProperty::Width, StyleValue::Percent(percent));
        self.handle
            .set_style(StyleProperty::Left, StyleValue::Percent(percent));
    }

    fn sync_inset_width(&self) {
        let width = self.container.offset_width();
        self.before_inset
            .set_style(StyleProperty::Width, StyleValue::Px(width));
    }
}

fn require<P: Page>(
    page: &P,
    root: &P::Elem,
    container_selector: &str,
    selector: &str,
) -> WipekitResult<P::Elem> {
    page.query_within(root, selector).ok_or_else(|| {
        warn!(
            container = container_selector,
            selector, "slider sub-element missing"
        );
        WipekitError::element_missing(selector)
    })
}
