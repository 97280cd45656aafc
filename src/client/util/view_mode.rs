/// How the character listing is laid out; switching never refetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid view",
            Self::Table => "Table view",
        }
    }
}
