/// Post search radio: exactly one of the two input groups is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Id,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleGroups {
    pub id: bool,
    pub title: bool,
}

impl SearchMode {
    pub fn visible_groups(&self) -> VisibleGroups {
        VisibleGroups {
            id: matches!(self, SearchMode::Id),
            title: matches!(self, SearchMode::Title),
        }
    }
}
