use crate::components::thumbnail_button_style;
use crate::message::Message;
use crate::model::PhotoRef;
use iced::widget::image::Handle;
use iced::widget::{button, column, image, scrollable, text, Column, Row};
use iced::{ContentFit, Element, Length};

const THUMBNAIL_PADDING: u16 = 4;

pub fn photo_grid(
    photos: &[PhotoRef],
    columns: usize,
    thumbnail_size: f32,
) -> Element<'static, Message> {
    let header = text(photo_count_label(photos.len())).size(20);

    if photos.is_empty() {
        return column![header, text("No photos yet. Press + to add one.")]
            .spacing(12)
            .into();
    }

    let grid: Column<'static, Message> = photos
        .chunks(columns.max(1))
        .fold(Column::new(), |grid, chunk| grid.push(grid_row(chunk, thumbnail_size)));

    column![header, scrollable(grid).height(Length::Fill)]
        .spacing(12)
        .into()
}

fn grid_row(chunk: &[PhotoRef], thumbnail_size: f32) -> Row<'static, Message> {
    chunk
        .iter()
        .fold(Row::new(), |cells, photo| cells.push(thumbnail(photo, thumbnail_size)))
}

fn thumbnail(photo: &PhotoRef, size: f32) -> Element<'static, Message> {
    let picture = image(Handle::from_path(photo.path()))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .content_fit(ContentFit::Cover);

    button(picture)
        .padding(THUMBNAIL_PADDING)
        .on_press(Message::OpenPhoto(photo.clone()))
        .style(thumbnail_button_style)
        .into()
}

pub fn photo_count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} photo{suffix}")
}
