use crate::config::{FontFamily, FontWeight};
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits for reader controls.
pub(crate) const MIN_FONT_SIZE: u32 = 8;
pub(crate) const MAX_FONT_SIZE: u32 = 40;
pub(crate) const MIN_LINE_SPACING: f32 = 0.8;
pub(crate) const MAX_LINE_SPACING: f32 = 2.5;
pub(crate) const MAX_HORIZONTAL_MARGIN: u16 = 400;
pub(crate) const MAX_VERTICAL_MARGIN: u16 = 100;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) const FONT_FAMILIES: [FontFamily; 3] =
    [FontFamily::Sans, FontFamily::Serif, FontFamily::Monospace];
pub(crate) const FONT_WEIGHTS: [FontWeight; 3] =
    [FontWeight::Light, FontWeight::Normal, FontWeight::Bold];
