use iced::{Alignment, Color, Element, Length};
use iced::widget::{Button, Column, Container, Row, Space, Text};

use crate::client::gui::views::file_browser::{card_style, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::models::file::FileRecord;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::format_upload_date;

fn field<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .push(Text::new(label).size(14).style(TEXT_SECONDARY))
        .push(Text::new(value).size(16).style(TEXT_PRIMARY))
        .into()
}

/// Label and display value of every field the modal shows, in order.
pub fn detail_fields(file: &FileRecord) -> [(&'static str, String); 4] {
    [
        ("Filename", file.filename.clone()),
        ("Type", file.content_type.clone()),
        ("File Path", file.file_path.clone()),
        ("Upload Date", format_upload_date(&file.upload_date)),
    ]
}

/// Modal body for one record. Closing is handled by the close button here and
/// by the modal backdrop in the app.
pub fn view(file: &FileRecord) -> Element<'_, Message> {
    let close = Button::new(Text::new("×").size(22).style(TEXT_PRIMARY))
        .style(iced::theme::Button::Text)
        .on_press(Message::CloseModal)
        .padding([2, 10]);

    let title = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new("File Details").font(BOLD_FONT).size(24).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(close);

    let divider = Container::new(Space::new(Length::Fill, Length::Fixed(1.0))).style(
        iced::theme::Container::Custom(Box::new(|_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
            ..Default::default()
        })),
    );

    let download = Button::new(
        Container::new(Text::new("Download File").font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Positive)
    .on_press(Message::Download { id: file.id.clone(), filename: file.filename.clone() })
    .padding(12)
    .width(Length::Fill);

    let body = detail_fields(file)
        .into_iter()
        .fold(Column::new().spacing(16).push(title).push(divider), |col, (label, value)| {
            col.push(field(label, value))
        })
        .push(download);

    Container::new(body)
        .padding(32)
        .max_width(500.0)
        .style(card_style())
        .into()
}
