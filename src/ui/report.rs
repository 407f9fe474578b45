/// Rendered analysis report
///
/// Pure presentation of a completed `AnalysisReport`: overall score
/// bar, improvement and strength panels, and the per-metric grid. No
/// state lives here; everything derives from the report itself.
use iced::widget::{column, container, horizontal_space, progress_bar, row, text, Column};
use iced::{border, Alignment, Color, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::report::{humanize_metric, AnalysisReport, ScoreBand};
use crate::ui;
use crate::Message;

pub fn view<'a>(report: &'a AnalysisReport) -> Element<'a, Message> {
    let overall = column![
        row![
            text("Overall Score").size(16),
            horizontal_space(),
            text(format!("{}/100", report.overall_score)).size(18),
        ]
        .align_y(Alignment::Center),
        banded_bar(report.overall_score, 14.0),
    ]
    .spacing(8);

    let panels = row![
        list_panel("Areas for Improvement", &report.improvements, ui::negative()),
        list_panel("Strengths", &report.strengths, ui::positive()),
    ]
    .spacing(16);

    let cells: Vec<Element<'a, Message>> = report
        .metrics
        .iter()
        .map(|(key, value)| metric_cell(key, *value))
        .collect();
    let grid = Wrap::with_elements(cells).spacing(12.0).line_spacing(12.0);

    container(
        column![
            text("Analysis Results").size(20),
            overall,
            panels,
            text("Detailed Metrics").size(16),
            grid,
        ]
        .spacing(20),
    )
    .padding(24)
    .width(Length::Fill)
    .style(ui::card)
    .into()
}

/// Proportional bar with the three-band fill color.
fn banded_bar<'a>(value: u8, height: f32) -> Element<'a, Message> {
    let fill = ui::band_color(ScoreBand::for_value(value));
    progress_bar(0.0..=100.0, f32::from(value.min(100)))
        .height(height)
        .style(move |_theme: &Theme| progress_bar::Style {
            background: ui::track().into(),
            bar: fill.into(),
            border: border::rounded(height / 2.0),
        })
        .into()
}

/// Tinted panel listing report entries in input order. Zero entries
/// renders an empty panel body, not a placeholder.
fn list_panel<'a>(title: &'static str, items: &'a [String], tone: Color) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(8);
    for item in items {
        rows = rows.push(
            row![text("•").color(tone), text(item.as_str()).size(14)].spacing(8),
        );
    }

    container(column![text(title).size(15).color(tone), rows].spacing(12))
        .padding(16)
        .width(Length::FillPortion(1))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Color { a: 0.08, ..tone }.into()),
            border: border::rounded(10.0).color(Color { a: 0.25, ..tone }).width(1.0),
            ..container::Style::default()
        })
        .into()
}

fn metric_cell<'a>(key: &str, value: u8) -> Element<'a, Message> {
    container(
        column![
            text(humanize_metric(key)).size(13).color(ui::muted()),
            row![
                text(value.to_string()).size(18),
                horizontal_space(),
                container(banded_bar(value, 8.0)).width(Length::Fixed(64.0)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        ]
        .spacing(6),
    )
    .padding(14)
    .width(Length::Fixed(170.0))
    .style(ui::tile)
    .into()
}
