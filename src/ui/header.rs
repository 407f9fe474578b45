/// Static navigation header
use iced::widget::{container, text};
use iced::{Color, Element, Length};

use crate::Message;

pub fn view() -> Element<'static, Message> {
    container(text("UI Analyzer").size(24))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(16)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb8(0xF3, 0xF4, 0xF6).into()),
            ..container::Style::default()
        })
        .into()
}
