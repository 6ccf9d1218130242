use crate::message::Message;
use crate::model::PhotoRef;
use iced::widget::{button, container, text, Button};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

pub const FAB_SIZE: f32 = 64.0;
/// Gap between the add button and the window edges.
pub const FAB_MARGIN: f32 = 24.0;
/// Space the add button takes from the bottom edge.
pub const FAB_CLEARANCE: f32 = FAB_SIZE + FAB_MARGIN;
const DELETE_SIZE: f32 = 50.0;

/// Round floating button that launches the photo picker.
pub fn add_photo_button() -> Button<'static, Message> {
    let label = container(text("+").size(40))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    button(label)
        .width(Length::Fixed(FAB_SIZE))
        .height(Length::Fixed(FAB_SIZE))
        .padding(0)
        .on_press(Message::PickPhoto)
        .style(|theme, status| round_button_style(theme, status, false))
}

pub fn delete_photo_button(photo: &PhotoRef) -> Button<'static, Message> {
    let label = container(text("Delete").size(13))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    button(label)
        .width(Length::Fixed(DELETE_SIZE + 14.0))
        .height(Length::Fixed(DELETE_SIZE))
        .padding(0)
        .on_press(Message::DeletePhoto(photo.clone()))
        .style(|theme, status| round_button_style(theme, status, true))
}

fn round_button_style(
    theme: &Theme,
    status: button::Status,
    destructive: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let (strong, base) = if destructive {
        (palette.danger.strong, palette.danger.base)
    } else {
        (palette.primary.strong, palette.primary.base)
    };

    let background_color = match status {
        button::Status::Active => strong.color,
        button::Status::Hovered => base.color,
        button::Status::Pressed => base.color.scale_alpha(0.9),
        button::Status::Disabled => strong.color.scale_alpha(0.5),
    };

    button::Style {
        background: Some(Background::Color(background_color)),
        text_color: strong.text,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(999.0),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.4),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
    }
}

/// Flat frame around a grid thumbnail that lights up on hover.
pub fn thumbnail_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.strong.color))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(6.0),
        },
        shadow: Shadow::default(),
    }
}
