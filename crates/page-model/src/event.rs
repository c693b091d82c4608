//! Pointer input delivered by the hosting page.
//!
//! Coordinates are client (viewport) pixels, the same space as the
//! bounding rects the page reports. Mouse and touch samples carry the
//! same payload and take the same widget path.

use serde::{Deserialize, Serialize};

/// Input device that produced a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerDevice {
    Mouse,
    Touch,
}

/// A single pointer position sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Horizontal position in client pixels.
    pub client_x: f64,
    /// Vertical position in client pixels.
    pub client_y: f64,
    /// Originating device.
    pub device: PointerDevice,
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            device: PointerDevice::Mouse,
        }
    }

    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            device: PointerDevice::Touch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_device_tag() {
        let event = PointerEvent::touch(120.0, 40.0);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"touch\""));

        let parsed: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
