use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::FileAppState;
use crate::client::models::file::FileRecord;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{format_upload_date, GridContent, EMPTY_PLACEHOLDER, LOADING_TEXT};

pub const BG_MAIN: Color = Color::from_rgb(0.12, 0.24, 0.45); // Deep blue
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.30, 0.52);
const PANEL_BG: Color = Color::from_rgb(0.15, 0.27, 0.49);
const BADGE_BG: Color = Color::from_rgb(0.16, 0.33, 0.58);
const BADGE_TEXT: Color = Color::from_rgb(0.56, 0.79, 0.98);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.75, 0.78, 0.85);

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn rounded(background: Color, radius: f32) -> iced::theme::Container {
    iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(background)),
            text_color: Some(TEXT_PRIMARY),
            border: iced::Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: radius.into(),
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            },
        }
    }))
}

pub fn card_style() -> iced::theme::Container {
    rounded(CARD_BG, 12.0)
}

fn upload_bar(state: &FileAppState) -> Element<'_, Message> {
    let input = TextInput::new("Path of the file to upload", &state.upload_path)
        .on_input(Message::UploadPathChanged)
        .on_submit(Message::UploadRequested)
        .padding(12)
        .width(Length::Fill);

    let upload_button = Button::new(Text::new("Upload File").font(BOLD_FONT).size(16))
        .style(iced::theme::Button::Positive)
        .on_press(Message::UploadRequested)
        .padding([12, 32]);

    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(input)
            .push(upload_button),
    )
    .padding(16)
    .width(Length::Fill)
    .style(rounded(PANEL_BG, 8.0))
    .into()
}

fn file_card(file: &FileRecord) -> Element<'_, Message> {
    let badge = Container::new(Text::new(&file.content_type).size(12).style(BADGE_TEXT))
        .padding([4, 10])
        .style(rounded(BADGE_BG, 12.0));

    let meta = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(badge)
        .push(Text::new(format_upload_date(&file.upload_date)).size(12).style(TEXT_SECONDARY));

    let info = Column::new()
        .spacing(8)
        .width(Length::Fill)
        .push(Text::new(&file.filename).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
        .push(meta);

    // inner button captures its press before the card does
    let download = Button::new(Text::new("Download").font(BOLD_FONT).size(14))
        .style(iced::theme::Button::Primary)
        .on_press(Message::Download { id: file.id.clone(), filename: file.filename.clone() })
        .padding([10, 20]);

    let body = Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(info)
            .push(download),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style());

    Button::new(body)
        .style(iced::theme::Button::Text)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::ShowDetails(file.id.clone()))
        .into()
}

fn grid_view(state: &FileAppState) -> Element<'_, Message> {
    match state.grid() {
        GridContent::Loading => Container::new(Text::new(LOADING_TEXT).size(20).style(TEXT_PRIMARY))
            .width(Length::Fill)
            .center_x()
            .padding(32)
            .into(),
        GridContent::Empty => Container::new(Text::new(EMPTY_PLACEHOLDER).size(18).style(TEXT_SECONDARY))
            .width(Length::Fill)
            .center_x()
            .padding([64, 32])
            .style(rounded(PANEL_BG, 12.0))
            .into(),
        GridContent::Cards(files) => {
            let cards = files
                .iter()
                .fold(Column::new().spacing(16), |col, file| col.push(file_card(file)));
            iced::widget::scrollable(cards.padding([0, 8]))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}

pub fn view(state: &FileAppState) -> Element<'_, Message> {
    let refresh = Button::new(Text::new("Refresh").size(14))
        .style(iced::theme::Button::Secondary)
        .on_press(Message::Refresh)
        .padding(10);

    let header = Row::new()
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fixed(90.0), Length::Fixed(0.0)))
        .push(
            Container::new(Text::new("Simple File Storage").font(BOLD_FONT).size(36).style(TEXT_PRIMARY))
                .width(Length::Fill)
                .center_x(),
        )
        .push(Container::new(refresh).width(Length::Fixed(90.0)));

    let mut content = Column::new()
        .spacing(24)
        .padding(32)
        .max_width(1200.0)
        .push(header);
    // upload is not offered while a request is in flight
    if state.can_upload() {
        content = content.push(upload_bar(state));
    }
    content = content.push(grid_view(state));

    let page = Column::new()
        .push(Container::new(logger_view(&state.logger)).width(Length::Fill).padding([8, 12, 0, 12]))
        .push(Container::new(content).width(Length::Fill).height(Length::Fill).center_x())
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(rounded(BG_MAIN, 0.0))
        .into()
}
