use super::messages::Message;
use super::state::{
    App, FONT_FAMILIES, FONT_WEIGHTS, MAX_FONT_SIZE, MAX_HORIZONTAL_MARGIN, MAX_LINE_SPACING,
    MAX_VERTICAL_MARGIN, MIN_FONT_SIZE, MIN_LINE_SPACING, PAGE_SCROLL_ID,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, pick_list, row, scrollable, slider,
    text, text_input,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let total_pages = self.reader.page_count();

        let open_input = text_input("path/to/book.pdf or .epub", &self.open_path_input)
            .on_input(Message::OpenPathInputChanged)
            .on_submit(Message::OpenPathSubmitted)
            .width(Length::Fixed(280.0));
        let open_button = if self.document_loading {
            button("Open")
        } else {
            button("Open").on_press(Message::OpenPathSubmitted)
        };

        let prev_button = if self.reader.current_page > 0 {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };
        let next_button = if self.reader.current_page + 1 < total_pages {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };

        let page_jump = text_input("page", &self.page_input)
            .on_input(Message::PageInputChanged)
            .on_submit(Message::PageInputSubmitted)
            .width(Length::Fixed(64.0));

        let theme_toggle = button(
            if matches!(self.config.theme, crate::config::ThemeMode::Night) {
                "Day Mode"
            } else {
                "Night Mode"
            },
        )
        .on_press(Message::ToggleTheme);
        let settings_toggle = button(if self.config.show_settings {
            "Hide Settings"
        } else {
            "Show Settings"
        })
        .on_press(Message::ToggleSettings);

        let controls = row![
            open_input,
            open_button,
            prev_button,
            next_button,
            text("Go to"),
            page_jump,
            button("A-").on_press(Message::ZoomOut),
            button("A+").on_press(Message::ZoomIn),
            horizontal_space(),
            theme_toggle,
            settings_toggle,
            button("About").on_press(Message::ToggleAbout),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let page_content: Element<'_, Message> = if total_pages == 0 {
            text(if self.document_loading {
                "Loading document..."
            } else {
                "No document loaded. Enter a path above to open a PDF or EPUB."
            })
            .size(self.config.font_size as f32)
            .width(Length::Fill)
            .into()
        } else {
            text(self.reader.current_page_text())
                .size(self.config.font_size as f32)
                .line_height(LineHeight::Relative(self.config.line_spacing))
                .width(Length::Fill)
                .wrapping(Wrapping::WordOrGlyph)
                .align_x(Horizontal::Left)
                .font(self.current_font())
                .into()
        };

        let page_view = scrollable(
            container(page_content)
                .width(Length::Fill)
                .padding([self.config.margin_vertical, self.config.margin_horizontal]),
        )
        .id(PAGE_SCROLL_ID.clone())
        .height(Length::FillPortion(1));

        let status = row![
            text(self.status_line()),
            horizontal_space(),
            text(format!("Font: {}", self.config.font_size)),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let mut content: Column<'_, Message> = column![controls]
            .padding(16)
            .spacing(12)
            .height(Length::Fill);

        if let Some(error) = &self.load_error {
            let banner = container(
                row![
                    text(error.as_str()),
                    horizontal_space(),
                    button("Dismiss").on_press(Message::DismissLoadError),
                ]
                .spacing(10)
                .align_y(Vertical::Center),
            )
            .width(Length::Fill)
            .padding(8);
            content = content.push(banner);
        }

        content = content.push(page_view).push(status);

        let mut layout: Row<'_, Message> = row![container(content).width(Length::Fill)].spacing(16);

        if self.show_about {
            layout = layout.push(self.about_panel());
        }
        if self.config.show_settings {
            layout = layout.push(self.settings_panel());
        }

        layout.into()
    }

    pub(super) fn settings_panel(&self) -> Element<'_, Message> {
        let family_picker = pick_list(
            FONT_FAMILIES,
            Some(self.config.font_family),
            Message::FontFamilyChanged,
        );
        let weight_picker = pick_list(
            FONT_WEIGHTS,
            Some(self.config.font_weight),
            Message::FontWeightChanged,
        );

        let font_size_slider = slider(
            MIN_FONT_SIZE as f32..=MAX_FONT_SIZE as f32,
            self.config.font_size as f32,
            |value| Message::FontSizeChanged(value.round() as u32),
        )
        .step(1.0);

        let line_spacing_slider = slider(
            MIN_LINE_SPACING..=MAX_LINE_SPACING,
            self.config.line_spacing,
            Message::LineSpacingChanged,
        )
        .step(0.05);

        let margin_slider = slider(
            0.0..=MAX_HORIZONTAL_MARGIN as f32,
            self.config.margin_horizontal as f32,
            |value| Message::MarginHorizontalChanged(value.round() as u16),
        );

        let margin_vertical_slider = slider(
            0.0..=MAX_VERTICAL_MARGIN as f32,
            self.config.margin_vertical as f32,
            |value| Message::MarginVerticalChanged(value.round() as u16),
        );

        let panel = column![
            text("Reader Settings").size(20.0),
            row![text("Font family"), family_picker]
                .spacing(8)
                .align_y(Vertical::Center),
            row![text("Font weight"), weight_picker]
                .spacing(8)
                .align_y(Vertical::Center),
            row![
                text(format!("Font size: {}", self.config.font_size)),
                font_size_slider
            ]
            .spacing(8)
            .align_y(Vertical::Center),
            row![text("Line spacing"), line_spacing_slider]
                .spacing(8)
                .align_y(Vertical::Center),
            row![
                text(format!(
                    "Horizontal margin: {} px",
                    self.config.margin_horizontal
                )),
                margin_slider
            ]
            .spacing(8)
            .align_y(Vertical::Center),
            row![
                text(format!(
                    "Vertical margin: {} px",
                    self.config.margin_vertical
                )),
                margin_vertical_slider
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        ]
        .spacing(12)
        .width(Length::Fixed(280.0));

        container(panel).padding(12).into()
    }

    pub(super) fn about_panel(&self) -> Element<'_, Message> {
        let panel = column![
            text("Folio").size(20.0),
            text(format!("Version {}", env!("CARGO_PKG_VERSION"))),
            text("A page-wise PDF and EPUB reader."),
            text("PDF text comes from lopdf, EPUB chapters from the epub crate via html2text, and the window is drawn by iced."),
            button("Close").on_press(Message::ToggleAbout),
        ]
        .spacing(12)
        .width(Length::Fixed(280.0));

        container(panel).padding(12).into()
    }
}
