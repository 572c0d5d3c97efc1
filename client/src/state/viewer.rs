//! Responsive viewer session state.
//!
//! DESIGN
//! ======
//! The viewer tracks three values: the resolved target URL, the selected
//! device profile, and whether the embedded page is still loading. They are
//! held in one record and only change through the transition methods below,
//! so "a URL change always re-enters loading until the next load signal"
//! holds by construction.
//!
//! Failure of the embedded page to load is not observable from the host; a
//! blocked or broken embed stays in [`LoadState::Loading`].

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

/// URL shown when neither the route nor the caller supplies one.
pub const DEFAULT_TARGET_URL: &str = "https://eloy-portf.netlify.app/";

/// Fixed height of the embed area, shared by every device profile.
pub const FRAME_HEIGHT: &str = "70vh";

/// Upper bound on the embed area height.
pub const FRAME_MAX_HEIGHT: &str = "70vh";

/// Device class used to size the embedded view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceProfile {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Width of the embed area for a device profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameWidth {
    /// Fixed width in CSS pixels.
    Pixels(u32),
    /// Full width of the containing element.
    Full,
}

impl FrameWidth {
    /// CSS value for the `width` property.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Pixels(px) => format!("{px}px"),
            Self::Full => "100%".to_owned(),
        }
    }
}

impl DeviceProfile {
    /// All profiles in the order their controls are rendered.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Stable lowercase identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Accessible label for the device control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile View",
            Self::Tablet => "Tablet View",
            Self::Desktop => "Desktop View",
        }
    }

    /// Glyph rendered inside the device control.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Mobile => "📱",
            Self::Tablet => "▭",
            Self::Desktop => "🖥",
        }
    }

    #[must_use]
    pub fn width(self) -> FrameWidth {
        match self {
            Self::Mobile => FrameWidth::Pixels(375),
            Self::Tablet => FrameWidth::Pixels(768),
            Self::Desktop => FrameWidth::Full,
        }
    }
}

/// Load lifecycle of the embedded page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the embedded page's load signal.
    #[default]
    Loading,
    /// The embedded page reported that it finished loading.
    Ready,
}

/// Transient state of one responsive viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    target_url: String,
    device: DeviceProfile,
    load: LoadState,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_URL)
    }
}

impl ViewerState {
    /// Start a viewer on `target_url` with the desktop profile, waiting for
    /// the first load signal.
    #[must_use]
    pub fn new(target_url: impl Into<String>) -> Self {
        Self { target_url: target_url.into(), device: DeviceProfile::default(), load: LoadState::Loading }
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Whether there is anything to embed.
    #[must_use]
    pub fn has_target(&self) -> bool {
        !self.target_url.is_empty()
    }

    /// Point the viewer at a new URL. Re-enters [`LoadState::Loading`] when the
    /// URL actually changes and returns whether it did.
    pub fn set_target_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if url == self.target_url {
            return false;
        }
        self.target_url = url;
        self.load = LoadState::Loading;
        true
    }

    /// Switch device profile. Selecting the active profile is a no-op and
    /// returns `false`. Never touches the load state.
    pub fn select_device(&mut self, device: DeviceProfile) -> bool {
        if device == self.device {
            return false;
        }
        self.device = device;
        true
    }

    /// The embedded page signalled completion of its load.
    pub fn finish_load(&mut self) {
        self.load = LoadState::Ready;
    }

    /// Inline style for the embed area.
    #[must_use]
    pub fn frame_style(&self) -> String {
        format!(
            "width: {}; height: {FRAME_HEIGHT}; max-height: {FRAME_MAX_HEIGHT};",
            self.device.width().css()
        )
    }
}
