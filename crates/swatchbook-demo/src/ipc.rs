//! IPC message contracts between the demo host and the UI.
//!
//! These enums define the complete set of messages exchanged over the
//! JSON-lines bridge. They use the `#[serde(tag = "type", content = "data")]`
//! layout so each line reads `{"type": "...", "data": {...}}`.

use serde::{Deserialize, Serialize};

use swatchbook_core::{HarmonyScheme, HarmonySet, PaletteEntry, PickerSnapshot, Swatch};

/// Messages from the host to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// The picker color changed; every field except the one being edited
    /// may be refreshed from this snapshot.
    PickerUpdated {
        /// Current picker display state.
        snapshot: PickerSnapshot,
    },

    /// Text the hex field should show after sanitizing or committing.
    HexField {
        /// Field text, always starting with `#`.
        text: String,
    },

    /// Palette extracted from a loaded image.
    PaletteExtracted {
        /// File path of the image.
        path: String,
        /// Width of the (possibly downscaled) image that was sampled.
        width: u32,
        /// Height of the (possibly downscaled) image that was sampled.
        height: u32,
        /// Most frequent colors first.
        entries: Vec<PaletteEntry>,
    },

    /// The wheel selection or harmony scheme changed.
    WheelUpdated {
        /// Picked base color.
        selection: WheelSelection,
        /// Harmony derived from the selection.
        harmony: HarmonySet,
    },

    /// An error occurred in the host.
    Error {
        /// Error description.
        message: String,
    },
}

/// Messages from the UI to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// Request a fresh snapshot of host state after the UI connects.
    RequestState,

    /// The hex field was edited.
    EditHex {
        /// Raw field text.
        text: String,
    },

    /// The hex field lost focus.
    CommitHex {
        /// Raw field text.
        text: String,
    },

    /// The rgb field was edited.
    EditRgb {
        /// Raw field text.
        text: String,
    },

    /// The hsl field was edited.
    EditHsl {
        /// Raw field text.
        text: String,
    },

    /// An HSL slider moved.
    SetSliders {
        /// Hue slider, 0–360.
        h: u16,
        /// Saturation slider, 0–100.
        s: u8,
        /// Lightness slider, 0–100.
        l: u8,
    },

    /// The native color input changed.
    SetColor {
        /// `#rrggbb` from the color input.
        hex: String,
    },

    /// Extract a palette from an image file.
    LoadImage {
        /// File path to the image.
        path: String,
    },

    /// Pointer pressed or dragged on the color wheel.
    WheelPick {
        /// X position in wheel pixels.
        x: f64,
        /// Y position in wheel pixels.
        y: f64,
    },

    /// A harmony button was pressed.
    SetHarmony {
        /// Scheme to show.
        scheme: HarmonyScheme,
    },
}

/// The color currently picked on the wheel, with its readouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSelection {
    /// Color and display strings.
    pub swatch: Swatch,
    /// Uppercase `#RRGGBB` label.
    pub hex_label: String,
    /// `r, g, b` readout.
    pub rgb_readout: String,
    /// `h°, s%, l%` readout.
    pub hsl_readout: String,
    /// Marker position on the wheel.
    pub marker: [f64; 2],
}
