pub mod memory;

pub use memory::MemoryPage;

/// Everything a label carries: status text, a browse link, and the state's
/// colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelContent {
    pub text: String,
    /// Empty when the title carries no recognized issue id.
    pub href: String,
    pub background: String,
    pub foreground: String,
}

/// The page being decorated, seen through opaque handles.
///
/// `pull_request_titles` returns every title element the page exposes, both
/// list-view rows and the single-PR header. `find_label` must return the
/// label previously created for a title, so repeated passes mutate the same
/// element in place; at most one label exists per title.
pub trait PageSurface {
    type Title: Clone;
    type Label;

    fn pull_request_titles(&self) -> Vec<Self::Title>;

    fn title_text(&self, title: &Self::Title) -> String;

    fn find_label(&self, title: &Self::Title) -> Option<Self::Label>;

    fn create_label(&mut self, title: &Self::Title) -> Self::Label;

    fn write_label(&mut self, label: &mut Self::Label, content: &LabelContent);
}
