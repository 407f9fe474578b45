/// UI module
///
/// This module builds all widgets, including:
/// - The static navigation header (header.rs)
/// - The upload area and submit control (uploader.rs)
/// - The multi-mode image comparison view (comparison.rs)
/// - The rendered analysis report (report.rs)
///
/// Shared palette and container styles live here so the banding colors
/// stay identical between the overall score bar and the metric bars.
use iced::widget::container;
use iced::{border, Color, Theme};

use crate::state::report::ScoreBand;

pub mod comparison;
pub mod header;
pub mod report;
pub mod uploader;

pub fn positive() -> Color {
    Color::from_rgb8(0x22, 0xC5, 0x5E)
}

pub fn caution() -> Color {
    Color::from_rgb8(0xEA, 0xB3, 0x08)
}

pub fn negative() -> Color {
    Color::from_rgb8(0xEF, 0x44, 0x44)
}

pub fn muted() -> Color {
    Color::from_rgb8(0x6B, 0x72, 0x80)
}

/// Unfilled portion of score bars.
pub fn track() -> Color {
    Color::from_rgb8(0xE5, 0xE7, 0xEB)
}

/// One color per band, applied per value, never relative to other
/// values on screen.
pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => positive(),
        ScoreBand::Caution => caution(),
        ScoreBand::Weak => negative(),
    }
}

/// White card that groups one section of the page.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: border::rounded(12.0),
        ..container::Style::default()
    }
}

/// Small framed tile, used for images and metric cells.
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(0xF9, 0xFA, 0xFB).into()),
        border: border::rounded(8.0)
            .color(Color::from_rgb8(0xE5, 0xE7, 0xEB))
            .width(1.0),
        ..container::Style::default()
    }
}

/// Outlined area the preview or the picker prompt sits in.
pub fn drop_zone(_theme: &Theme) -> container::Style {
    container::Style {
        border: border::rounded(12.0)
            .color(Color::from_rgb8(0xD1, 0xD5, 0xDB))
            .width(2.0),
        ..container::Style::default()
    }
}
