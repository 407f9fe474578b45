/// Multi-mode image comparison view
///
/// Renders the original screenshot and, when the analysis produced an
/// annotated copy, the selected comparison layout plus the mode
/// selector. Which panes show for which mode is decided by
/// `ComparisonLayout`, not here.
use iced::widget::{button, column, container, image, text, Column, Row};
use iced::{Alignment, Element, Length, Theme};

use crate::state::view_mode::{ComparisonLayout, ViewMode};
use crate::ui;
use crate::Message;

const IMAGE_HEIGHT: f32 = 280.0;

pub fn view(
    preview: &image::Handle,
    annotated: Option<&image::Handle>,
    mode: ViewMode,
) -> Element<'static, Message> {
    let layout = ComparisonLayout::resolve(mode, annotated.is_some());

    let mut panes = Row::new().spacing(24).align_y(Alignment::Center);
    if layout.show_original {
        panes = panes.push(labeled_image(preview.clone(), "Original Image"));
    }
    if layout.show_connector {
        panes = panes.push(text("→").size(28).color(ui::muted()));
    }
    if layout.show_annotated {
        if let Some(handle) = annotated {
            panes = panes.push(labeled_image(handle.clone(), "Detected Elements"));
        }
    }

    let mut content = Column::new().spacing(16).align_x(Alignment::Center);
    if layout.show_selector {
        content = content.push(mode_selector(mode));
    }
    content.push(panes).into()
}

fn labeled_image(handle: image::Handle, label: &'static str) -> Element<'static, Message> {
    column![
        container(image(handle).height(Length::Fixed(IMAGE_HEIGHT)))
            .padding(4)
            .style(ui::tile),
        text(label).size(13).color(ui::muted()),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

fn mode_selector(active: ViewMode) -> Element<'static, Message> {
    let mut controls = Row::new().spacing(8);
    for mode in ViewMode::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if mode == active {
            button::primary
        } else {
            button::secondary
        };
        controls = controls.push(
            button(text(mode.label()).size(13))
                .style(style)
                .on_press(Message::SetViewMode(mode)),
        );
    }
    controls.into()
}
