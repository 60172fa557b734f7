//! Dispatch of UI messages onto the core tools.
//!
//! A [`Session`] owns the state of all three tools. Each inbound message
//! is handled to completion and yields zero or more outbound messages;
//! input the core cannot apply yields nothing, so the UI keeps showing
//! what the user typed.

use std::path::Path;

use swatchbook_core::color::format::{hsl_readout, rgb_readout};
use swatchbook_core::normalize::{commit_hex_field, sanitize_hex_field};
use swatchbook_core::{
    Color, ExtractionConfig, HarmonyScheme, HarmonySet, Hsl, PickerState, Swatch, WheelGeometry,
    extract_palette,
};

use crate::config::AppConfig;
use crate::image_loader;
use crate::ipc::{CoreToUi, UiToCore, WheelSelection};

/// State of the picker, palette and wheel tools.
#[derive(Debug, Clone)]
pub struct Session {
    picker: PickerState,
    wheel: WheelGeometry,
    selection: Option<Hsl>,
    scheme: HarmonyScheme,
    extraction: ExtractionConfig,
    max_image_size: u32,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            picker: PickerState::default(),
            wheel: WheelGeometry::new(config.wheel_size),
            selection: None,
            scheme: HarmonyScheme::default(),
            extraction: config.extraction,
            max_image_size: config.max_image_size,
        }
    }

    /// Handle one message from the UI.
    pub fn handle(&mut self, msg: UiToCore) -> Vec<CoreToUi> {
        let mut out = Vec::new();

        match msg {
            UiToCore::RequestState => {
                out.push(self.picker_updated());
                if let Some(update) = self.wheel_updated() {
                    out.push(update);
                }
            }
            UiToCore::EditHex { text } => {
                let field = sanitize_hex_field(&text);
                let changed = self.picker.set_hex_text(&field);
                if field != text {
                    out.push(CoreToUi::HexField { text: field });
                }
                if changed {
                    out.push(self.picker_updated());
                }
            }
            UiToCore::CommitHex { text } => {
                let field = commit_hex_field(&text);
                let changed = self.picker.set_hex_text(&field);
                out.push(CoreToUi::HexField { text: field });
                if changed {
                    out.push(self.picker_updated());
                }
            }
            UiToCore::EditRgb { text } => {
                if self.picker.set_rgb_text(&text) {
                    out.push(self.picker_updated());
                }
            }
            UiToCore::EditHsl { text } => {
                if self.picker.set_hsl_text(&text) {
                    out.push(self.picker_updated());
                }
            }
            UiToCore::SetSliders { h, s, l } => {
                if self.picker.set_sliders(h, s, l) {
                    out.push(self.picker_updated());
                }
            }
            UiToCore::SetColor { hex } => match Color::from_hex(&hex) {
                Ok(color) => {
                    if self.picker.set_color(color) {
                        out.push(self.picker_updated());
                    }
                }
                Err(e) => out.push(CoreToUi::Error {
                    message: e.to_string(),
                }),
            },
            UiToCore::LoadImage { path } => out.push(self.extract(path)),
            UiToCore::WheelPick { x, y } => match self.wheel.pick(x, y) {
                Some(hsl) => {
                    self.selection = Some(hsl);
                    // A new pick always starts from the analogous view.
                    self.scheme = HarmonyScheme::Analogous;
                    out.extend(self.wheel_updated());
                }
                None => tracing::trace!("wheel pick outside the disc at ({x}, {y})"),
            },
            UiToCore::SetHarmony { scheme } => {
                self.scheme = scheme;
                match self.wheel_updated() {
                    Some(update) => out.push(update),
                    None => tracing::debug!("SetHarmony({scheme}): nothing picked on the wheel yet"),
                }
            }
        }

        out
    }

    fn picker_updated(&self) -> CoreToUi {
        CoreToUi::PickerUpdated {
            snapshot: self.picker.snapshot(),
        }
    }

    fn wheel_updated(&self) -> Option<CoreToUi> {
        let hsl = self.selection?;
        let swatch = Swatch::from_hsl(hsl);
        let (mx, my) = self.wheel.position_of(hsl);

        let selection = WheelSelection {
            hex_label: swatch.hex.to_uppercase(),
            rgb_readout: rgb_readout(swatch.color),
            hsl_readout: hsl_readout(hsl),
            marker: [mx, my],
            swatch,
        };
        // Harmonies are built from the base as displayed, i.e. rounded.
        let harmony = HarmonySet::new(hsl.rounded(), self.scheme);

        Some(CoreToUi::WheelUpdated { selection, harmony })
    }

    fn extract(&self, path: String) -> CoreToUi {
        let buffer = match image_loader::load_image(Path::new(&path), self.max_image_size) {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!("LoadImage {path}: {e}");
                return CoreToUi::Error {
                    message: e.to_string(),
                };
            }
        };

        let entries = extract_palette(&buffer, &self.extraction);
        tracing::info!("extracted {} colors from {path}", entries.len());

        CoreToUi::PaletteExtracted {
            path,
            width: buffer.width(),
            height: buffer.height(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn session() -> Session {
        Session::new(&AppConfig::from_lookup(|_| None))
    }

    fn text(s: &str) -> String {
        s.to_string()
    }

    fn snapshot_of(msgs: &[CoreToUi]) -> &swatchbook_core::PickerSnapshot {
        msgs.iter()
            .find_map(|m| match m {
                CoreToUi::PickerUpdated { snapshot } => Some(snapshot),
                _ => None,
            })
            .expect("a PickerUpdated message")
    }

    #[test]
    fn test_request_state_before_any_pick() {
        let out = session().handle(UiToCore::RequestState);
        assert_eq!(out.len(), 1);
        assert_eq!(snapshot_of(&out).hex_field, "#4285F4");
    }

    #[test]
    fn test_edit_hex_sanitizes_and_applies() {
        let mut session = session();
        let out = session.handle(UiToCore::EditHex { text: text("ff00zz00") });

        assert_eq!(out[0], CoreToUi::HexField { text: text("#ff0000") });
        assert_eq!(snapshot_of(&out).swatch.rgb_text, "rgb(255, 0, 0)");
    }

    #[test]
    fn test_partial_hex_produces_no_update() {
        let mut session = session();
        assert!(session.handle(UiToCore::EditHex { text: text("#ff") }).is_empty());
    }

    #[test]
    fn test_commit_hex_expands_short_form() {
        let mut session = session();
        let out = session.handle(UiToCore::CommitHex { text: text("#abc") });
        assert_eq!(out[0], CoreToUi::HexField { text: text("#aabbcc") });
        assert_eq!(snapshot_of(&out).hex_field, "#AABBCC");
    }

    #[test]
    fn test_commit_empty_hex_restores_default() {
        let mut session = session();
        session.handle(UiToCore::EditRgb { text: text("0, 0, 0") });
        let out = session.handle(UiToCore::CommitHex { text: text("#") });
        assert_eq!(out[0], CoreToUi::HexField { text: text("#4285f4") });
        assert_eq!(snapshot_of(&out).swatch.hex, "#4285f4");
    }

    #[test]
    fn test_invalid_rgb_is_silent() {
        let mut session = session();
        assert!(session.handle(UiToCore::EditRgb { text: text("999,0,0") }).is_empty());
    }

    #[test]
    fn test_sliders_update_picker() {
        let mut session = session();
        let out = session.handle(UiToCore::SetSliders { h: 216, s: 50, l: 50 });
        let snapshot = snapshot_of(&out);
        assert_eq!(snapshot.swatch.hex, "#4073bf");
        assert_eq!(snapshot.sliders, [216, 50, 50]);

        assert!(session.handle(UiToCore::SetSliders { h: 216, s: 50, l: 50 }).is_empty());
    }

    #[test]
    fn test_set_color_rejects_bad_hex() {
        let mut session = session();
        let out = session.handle(UiToCore::SetColor { hex: text("#12") });
        assert!(matches!(out.as_slice(), [CoreToUi::Error { .. }]));
    }

    #[test]
    fn test_wheel_pick_then_scheme_change() {
        let mut session = session();
        let out = session.handle(UiToCore::WheelPick { x: 390.0, y: 200.0 });
        let [CoreToUi::WheelUpdated { selection, harmony }] = out.as_slice() else {
            panic!("expected a single WheelUpdated, got {out:?}");
        };
        assert_eq!(selection.hex_label, "#FF0000");
        assert_eq!(selection.rgb_readout, "255, 0, 0");
        assert_eq!(selection.hsl_readout, "0°, 100%, 50%");
        assert_eq!(harmony.scheme, HarmonyScheme::Analogous);
        assert_eq!(harmony.swatches.len(), 3);

        let out = session.handle(UiToCore::SetHarmony {
            scheme: HarmonyScheme::Tetradic,
        });
        let [CoreToUi::WheelUpdated { harmony, .. }] = out.as_slice() else {
            panic!("expected a single WheelUpdated, got {out:?}");
        };
        let hues: Vec<f64> = harmony.swatches.iter().map(|s| s.hsl.h).collect();
        assert_eq!(hues, vec![0.0, 60.0, 180.0, 240.0]);
    }

    #[test]
    fn test_new_pick_resets_to_analogous() {
        let mut session = session();
        session.handle(UiToCore::WheelPick { x: 200.0, y: 200.0 });
        session.handle(UiToCore::SetHarmony {
            scheme: HarmonyScheme::Triadic,
        });
        let out = session.handle(UiToCore::WheelPick { x: 250.0, y: 200.0 });
        let [CoreToUi::WheelUpdated { harmony, .. }] = out.as_slice() else {
            panic!("expected a single WheelUpdated, got {out:?}");
        };
        assert_eq!(harmony.scheme, HarmonyScheme::Analogous);
    }

    #[test]
    fn test_wheel_pick_outside_is_ignored() {
        let mut session = session();
        assert!(session.handle(UiToCore::WheelPick { x: 0.0, y: 0.0 }).is_empty());
        assert!(
            session
                .handle(UiToCore::SetHarmony {
                    scheme: HarmonyScheme::Complementary
                })
                .is_empty()
        );
    }

    #[test]
    fn test_load_image_extracts_palette() {
        let path = std::env::temp_dir().join(format!("swatchbook-session-{}.png", std::process::id()));
        RgbaImage::from_pixel(8, 8, Rgba([0, 128, 255, 255]))
            .save(&path)
            .unwrap();

        let out = session().handle(UiToCore::LoadImage {
            path: path.display().to_string(),
        });
        let _ = std::fs::remove_file(&path);

        let [CoreToUi::PaletteExtracted { width, height, entries, .. }] = out.as_slice() else {
            panic!("expected PaletteExtracted, got {out:?}");
        };
        assert_eq!((*width, *height), (8, 8));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hex, "#0080ff");
        assert_eq!(entries[0].count, 16);
    }

    #[test]
    fn test_load_non_image_reports_error() {
        let out = session().handle(UiToCore::LoadImage {
            path: text("palette.pdf"),
        });
        let [CoreToUi::Error { message }] = out.as_slice() else {
            panic!("expected Error, got {out:?}");
        };
        assert!(message.contains("not an image"), "{message}");
    }
}
