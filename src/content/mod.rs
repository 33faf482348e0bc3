// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content shipped with the binary.
//!
//! Everything here is immutable and ordered: the page renders items in the
//! order they are declared, and nothing mutates them at runtime.

mod gallery;
mod profile;
mod projects;

pub use gallery::{gallery_items, GalleryItem};
pub use profile::{experiences, profile, skill_groups, Experience, Profile, SkillGroup};
pub use projects::{projects, Project, ProjectAction, ProjectStatus};

/// A file offered for download, looked up by name in the documents directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    /// File name inside the documents directory.
    pub file_name: &'static str,
    /// i18n key of the button label.
    pub label_key: &'static str,
    /// i18n key of the short caption shown under the label.
    pub caption_key: &'static str,
}

pub const RESUME: Document = Document {
    file_name: "Resume.pdf",
    label_key: "document-resume",
    caption_key: "document-caption-cv",
};

pub const THESIS: Document = Document {
    file_name: "Thesis_Final_Version.pdf",
    label_key: "document-download-pdf",
    caption_key: "document-caption-thesis",
};

pub const THESIS_SLIDES: Document = Document {
    file_name: "FINAL PRESENTATION.pdf",
    label_key: "document-download-slides",
    caption_key: "document-caption-slides",
};

pub const RL_SLIDES: Document = Document {
    file_name: "RL_Presentation.pdf",
    label_key: "document-download-slides",
    caption_key: "document-caption-slides",
};

pub const TWEETS_SLIDES: Document = Document {
    file_name: "Trump_Presentation.pdf",
    label_key: "document-download-slides",
    caption_key: "document-caption-slides",
};

/// Every document referenced by the page, resume first.
pub fn documents() -> impl Iterator<Item = Document> {
    [RESUME, THESIS, THESIS_SLIDES, RL_SLIDES, TWEETS_SLIDES].into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn document_file_names_are_unique() {
        let names: HashSet<_> = documents().map(|doc| doc.file_name).collect();
        assert_eq!(names.len(), documents().count());
    }

    #[test]
    fn every_document_in_projects_is_listed() {
        let listed: Vec<_> = documents().collect();
        for project in projects() {
            for doc in project.action.documents() {
                assert!(listed.contains(&doc), "{} is not listed", doc.file_name);
            }
        }
    }
}
