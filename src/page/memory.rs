use std::collections::HashMap;

use crate::page::{LabelContent, PageSurface};

/// In-process page: a plain list of titles with one optional label slot per
/// title. Used by the CLI front-end and as the page double in tests.
#[derive(Debug, Default)]
pub struct MemoryPage {
    titles: Vec<String>,
    /// title index -> (creation ordinal, current content)
    labels: HashMap<usize, (usize, LabelContent)>,
    created: usize,
}

impl MemoryPage {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            ..Self::default()
        }
    }

    /// Current label content for a title, if one was ever created.
    pub fn label(&self, title: usize) -> Option<&LabelContent> {
        self.labels.get(&title).map(|(_, content)| content)
    }

    /// Creation ordinal of a title's label; stable across passes.
    pub fn label_identity(&self, title: usize) -> Option<usize> {
        self.labels.get(&title).map(|(ordinal, _)| *ordinal)
    }

    /// Total number of label elements ever created.
    pub fn labels_created(&self) -> usize {
        self.created
    }
}

impl PageSurface for MemoryPage {
    type Title = usize;
    type Label = usize;

    fn pull_request_titles(&self) -> Vec<usize> {
        (0..self.titles.len()).collect()
    }

    fn title_text(&self, title: &usize) -> String {
        self.titles[*title].clone()
    }

    fn find_label(&self, title: &usize) -> Option<usize> {
        self.labels.get(title).map(|_| *title)
    }

    fn create_label(&mut self, title: &usize) -> usize {
        let ordinal = self.created;
        self.created += 1;
        self.labels.insert(
            *title,
            (
                ordinal,
                LabelContent {
                    text: String::new(),
                    href: String::new(),
                    background: String::new(),
                    foreground: String::new(),
                },
            ),
        );
        *title
    }

    fn write_label(&mut self, label: &mut usize, content: &LabelContent) {
        if let Some((_, current)) = self.labels.get_mut(label) {
            *current = content.clone();
        }
    }
}
