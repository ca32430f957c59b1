// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible set.
//!
//! Toasts are drawn as small cards with a kind-colored palette, an optional
//! icon and a close button. Older toasts are inset and faded according to
//! their stack index.

use crate::config::{STACK_MIN_OPACITY, STACK_OFFSET_PX, STACK_OPACITY_FALLOFF};
use crate::toast::{Manager, Message, ToastDescriptor, ToastPosition};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::{ColorScheme, KindPalette};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<'a>(descriptor: &ToastDescriptor, scheme: &ColorScheme) -> Element<'a, Message> {
        let colors = card_colors(descriptor, scheme.for_kind(descriptor.kind));
        let icon_size = descriptor.style.icon_size.unwrap_or(sizing::ICON_MD);
        let message_size = descriptor.style.message_size.unwrap_or(typography::BODY_LG);

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(glyph) = icons::resolve(&descriptor.icon, descriptor.kind) {
            let icon_widget = Text::new(glyph.to_owned())
                .size(icon_size)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.icon),
                });
            content = content.push(Container::new(icon_widget).padding(spacing::XXS));
        }

        let message_widget = Text::new(descriptor.message.clone())
            .size(message_size)
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text),
            });

        // Dismiss button: the inbound requestDismiss path
        let close_glyph = Text::new(icons::CLOSE)
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text),
            });
        let dismiss_button = button(close_glyph)
            .on_press(Message::Dismiss(descriptor.id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = content
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let inset = stack_inset(descriptor.stack_index);
        let card = Container::new(content)
            .width(Length::Fixed(card_width(inset)))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| toast_container_style(colors));

        Container::new(card)
            .padding(Padding {
                top: 0.0,
                right: inset,
                bottom: 0.0,
                left: inset,
            })
            .into()
    }

    /// Renders the overlay with every visible toast of `manager`.
    pub fn view_overlay<'a>(manager: &Manager, scheme: &ColorScheme) -> Element<'a, Message> {
        Self::view_descriptors(&manager.descriptors(), scheme)
    }

    /// Renders an overlay from a visible-set snapshot.
    ///
    /// Top-anchored toasts stack downward from the top edge and
    /// bottom-anchored toasts upward from the bottom edge; in both cases the
    /// newest toast sits closest to its edge.
    pub fn view_descriptors<'a>(
        toasts: &[ToastDescriptor],
        scheme: &ColorScheme,
    ) -> Element<'a, Message> {
        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (top, bottom) = split_by_anchor(toasts);
        let top: Vec<Element<'a, Message>> =
            top.into_iter().map(|toast| Self::view(toast, scheme)).collect();
        let bottom: Vec<Element<'a, Message>> = bottom
            .into_iter()
            .map(|toast| Self::view(toast, scheme))
            .collect();

        let top_column = Column::with_children(top)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);
        let bottom_column = Column::with_children(bottom)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        Column::new()
            .push(
                Container::new(top_column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Top),
            )
            .push(
                Container::new(bottom_column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom),
            )
            .padding(spacing::MD)
            .into()
    }
}

/// Splits a visible-set snapshot into top and bottom columns, each in
/// top-to-bottom drawing order.
fn split_by_anchor(
    toasts: &[ToastDescriptor],
) -> (Vec<&ToastDescriptor>, Vec<&ToastDescriptor>) {
    let top = toasts
        .iter()
        .filter(|toast| toast.position == ToastPosition::Top)
        .collect();
    let bottom = toasts
        .iter()
        .rev()
        .filter(|toast| toast.position == ToastPosition::Bottom)
        .collect();
    (top, bottom)
}

/// Opacity multiplier for a toast at `stack_index`.
#[must_use]
pub fn stack_opacity(stack_index: usize) -> f32 {
    (opacity::OPAQUE - STACK_OPACITY_FALLOFF * stack_index as f32).max(STACK_MIN_OPACITY)
}

/// Horizontal inset for a toast at `stack_index`.
#[must_use]
pub fn stack_inset(stack_index: usize) -> f32 {
    STACK_OFFSET_PX * stack_index as f32
}

fn card_width(inset: f32) -> f32 {
    (sizing::TOAST_WIDTH - 2.0 * inset).max(sizing::TOAST_WIDTH / 2.0)
}

/// Card colors after style overrides and stacking falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardColors {
    background: Color,
    text: Color,
    border: Color,
    icon: Color,
}

fn card_colors(descriptor: &ToastDescriptor, palette: &KindPalette) -> CardColors {
    let alpha = stack_opacity(descriptor.stack_index);
    let style = &descriptor.style;

    CardColors {
        background: fade(style.background.unwrap_or(palette.background), alpha),
        text: fade(style.text_color.unwrap_or(palette.text), alpha),
        border: fade(style.border_color.unwrap_or(palette.border), alpha),
        icon: fade(style.icon_color.unwrap_or(palette.icon), alpha),
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(colors: CardColors) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors.background)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let pressed_overlay = |alpha: f32| button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..Color::BLACK
        })),
        text_color: Color::BLACK,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: Color::BLACK,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => pressed_overlay(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => pressed_overlay(opacity::OVERLAY_MEDIUM),
    }
}
