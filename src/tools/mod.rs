/// Which kind of shape a new drag on the canvas creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Line,
    Rectangle,
}

impl ToolMode {
    /// All tools, in the order their buttons appear.
    pub const ALL: [ToolMode; 2] = [ToolMode::Line, ToolMode::Rectangle];

    /// Button label for the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
        }
    }
}
