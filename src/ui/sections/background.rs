// SPDX-License-Identifier: MPL-2.0
//! Faint code snippets pinned behind the page.

use super::Message;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles::text::{tone, Tone};
use iced::widget::{text, Column, Container, Space};
use iced::{alignment, Element, Font, Length};

const PROFILE_SNIPPET: &str = "const antonio = {
  role: \"Data Scientist\",
  focus: \"Sports Analytics\",
  stack: [\"Python\", \"R\", \"SQL\"]
};";

const MATCH_LOOP_SNIPPET: &str = "while (match_ongoing) {
  predict_outcome();
  optimize_odds();
}";

/// Full-window layer; put it under the page in a stack.
pub fn view<'a>() -> Element<'a, Message> {
    let snippet = |code: &'static str| {
        text(code)
            .size(typography::BODY_SM)
            .font(Font::MONOSPACE)
            .style(tone(Tone::Muted, opacity::DECORATION))
    };

    let top = Container::new(snippet(PROFILE_SNIPPET))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding([spacing::XXXL + spacing::MD, spacing::XL]);

    let bottom = Container::new(snippet(MATCH_LOOP_SNIPPET))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .padding([spacing::XXXL + spacing::MD, spacing::XL]);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top)
        .push(Space::new().height(Length::Fill))
        .push(bottom)
        .into()
}
