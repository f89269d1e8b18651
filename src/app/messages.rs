use crate::config::{FontFamily, FontWeight};
use crate::loader::Document;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPathInputChanged(String),
    OpenPathSubmitted,
    OpenFileRequested(PathBuf),
    DocumentLoaded {
        path: PathBuf,
        document: Document,
    },
    DocumentLoadFailed {
        path: PathBuf,
        error: String,
    },
    DismissLoadError,
    NextPage,
    PreviousPage,
    PageInputChanged(String),
    PageInputSubmitted,
    FontSizeChanged(u32),
    ZoomIn,
    ZoomOut,
    FontFamilyChanged(FontFamily),
    FontWeightChanged(FontWeight),
    LineSpacingChanged(f32),
    MarginHorizontalChanged(u16),
    MarginVerticalChanged(u16),
    ToggleTheme,
    ToggleSettings,
    ToggleAbout,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Quit,
}
