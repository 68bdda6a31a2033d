use crate::icons::IconService;
use crate::theme::{Palette, ThemeState};

/// Shared state handed to every component while drawing a frame
pub struct RenderContext<'a> {
    pub theme: &'a ThemeState,
    pub palette: Palette,
    pub icons: &'a IconService,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a ThemeState, icons: &'a IconService) -> Self {
        Self {
            theme,
            palette: theme.palette(),
            icons,
        }
    }
}
