// src/config/state.rs
use super::options::AppOptions;

/// Which main view is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Toc,
    Cards,
}

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    pub view: View,

    /// 0-based card page currently shown.
    pub card_page: usize,

    /// Card to highlight after a TOC jump; cleared on manual paging.
    pub focus_id: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
