/// Upload area and submit control
///
/// Shows either the picker prompt or the comparison view for the
/// current image, plus the analyze button. Enablement mirrors the
/// session invariant: an image must exist and no request may be in
/// flight.
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::state::session::{RequestPhase, Session};
use crate::state::view_mode::ViewMode;
use crate::ui::{self, comparison};
use crate::Message;

pub fn view<'a>(session: &'a Session, mode: ViewMode) -> Element<'a, Message> {
    let zone: Element<'a, Message> = match session.image() {
        Some(image) => column![
            comparison::view(&image.preview, session.annotated(), mode),
            button(text("Upload New Image").size(14))
                .style(button::secondary)
                .on_press(Message::PickImage),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into(),
        None => column![
            text("Pick a UI screenshot to get started").color(ui::muted()),
            button(text("Browse Files").size(14)).on_press(Message::PickImage),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
    };

    let analyzing = session.phase() == RequestPhase::Pending;
    let submit = button(text(if analyzing { "Analyzing..." } else { "Analyze UI" }).size(16))
        .padding(12)
        .style(button::success)
        .on_press_maybe(session.can_submit().then_some(Message::Submit));

    container(
        column![
            text("Upload your image to get started").size(22),
            container(zone)
                .width(Length::Fill)
                .padding(24)
                .style(ui::drop_zone),
            container(submit).center_x(Length::Fill),
        ]
        .spacing(24),
    )
    .padding(24)
    .width(Length::Fill)
    .style(ui::card)
    .into()
}
