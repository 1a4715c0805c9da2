#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    NextTab,
    PreviousTab,
    SelectTab(usize),
}
