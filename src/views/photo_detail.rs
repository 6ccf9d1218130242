use crate::components::delete_photo_button;
use crate::message::Message;
use crate::model::PhotoRef;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

/// Full-size view of `current`. Previous/Next are disabled when there is no
/// neighbour on that side.
pub fn photo_detail(
    current: &PhotoRef,
    previous: Option<&PhotoRef>,
    next: Option<&PhotoRef>,
) -> Element<'static, Message> {
    let picture = mouse_area(
        image(Handle::from_path(current.path()))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .on_press(Message::BackToGrid);

    let delete = container(delete_photo_button(current))
        .width(Length::Fill)
        .align_x(Alignment::End)
        .padding(16);

    let viewer = stack![picture, delete]
        .width(Length::Fill)
        .height(Length::Fill);

    let caption = text(current.display_name())
        .size(16)
        .wrapping(Wrapping::WordOrGlyph);

    let controls = row![
        button("Previous").on_press_maybe(step_message(previous, Message::ShowPrevious)),
        Space::with_width(Length::Fill),
        button("Home").on_press(Message::BackToGrid),
        Space::with_width(Length::Fill),
        button("Next").on_press_maybe(step_message(next, Message::ShowNext)),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    column![viewer, caption, controls]
        .spacing(16)
        .padding([24, 8])
        .align_x(Alignment::Center)
        .into()
}

/// Message for a Previous/Next button; `None` leaves the button disabled.
fn step_message(target: Option<&PhotoRef>, message: Message) -> Option<Message> {
    target.map(|_| message)
}
