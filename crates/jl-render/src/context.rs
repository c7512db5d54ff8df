/// Per-render-pass settings handed to every strategy.
///
/// Created once by the caller and passed by reference. The built-in
/// strategies do not inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub disable_color: bool,
    pub width: Option<usize>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.disable_color = !enabled;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}
