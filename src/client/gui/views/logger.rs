use iced::{Element, Font, Length};
use iced::widget::{Column, Container, Row, Text};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
}

/// A transient toast. `id` is what `Message::DismissToast` refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
        }
    }
    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            LogLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
        }
    }
}

fn toast_view(log: &LogMessage) -> Element<'_, Message> {
    let bg_color = log.color();
    Container::new(
        Row::new()
            .spacing(12)
            .push(
                Text::new(log.emoji())
                    .font(Font::with_name("Segoe UI Emoji"))
                    .size(20)
                    .style(iced::Color::WHITE),
            )
            .push(Text::new(&log.message).size(16).style(iced::Color::WHITE)),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        }
    })))
    .into()
}

/// Stack of live toasts, newest last. Renders nothing when empty.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    if messages.is_empty() {
        return iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)).into();
    }
    messages
        .iter()
        .fold(Column::new().spacing(8), |col, log| col.push(toast_view(log)))
        .width(Length::Fill)
        .into()
}
