//! Touch-device detection.
//!
//! The tracker branches between a pointer interaction path and a touch
//! interaction path. Which one applies is a platform capability, probed
//! once and revalidated on viewport resizes. The probe sits behind a
//! trait so the state machine is testable without a real device.

/// Capability provider telling the tracker whether touch is the primary
/// input modality.
pub trait TouchCapability {
    /// Returns `true` when the platform's primary input is a touchscreen.
    fn is_touch_primary(&self) -> bool;
}

/// The real platform probe.
///
/// On the web this sniffs the navigator the same way the desktop-vs-touch
/// split is usually decided: touch points first, user agent as fallback.
/// Native builds are treated as pointer devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTouch;

impl TouchCapability for PlatformTouch {
    fn is_touch_primary(&self) -> bool {
        platform_is_touch_primary()
    }
}

/// A fixed capability answer, for embedding and for tests.
#[derive(Debug, Clone, Copy)]
pub struct ForcedTouch(pub bool);

impl TouchCapability for ForcedTouch {
    fn is_touch_primary(&self) -> bool {
        self.0
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_is_touch_primary() -> bool {
    if let Some(win) = web_sys::window() {
        let nav = win.navigator();
        if nav.max_touch_points() > 0 {
            return true;
        }
        if let Ok(ua) = nav.user_agent() {
            let ua = ua.to_lowercase();
            const MOBILE_MARKERS: [&str; 8] = [
                "android",
                "webos",
                "iphone",
                "ipad",
                "ipod",
                "blackberry",
                "iemobile",
                "opera mini",
            ];
            return MOBILE_MARKERS.iter().any(|marker| ua.contains(marker));
        }
    }
    false
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_is_touch_primary() -> bool {
    false
}
