/// Named bundle of embedded template files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSet {
    /// Server entry candidates and the webpack server build shared by all providers.
    Common,
    Aws,
    Gcloud,
    Firebase,
}

impl TemplateSet {
    pub const ALL: [TemplateSet; 4] =
        [TemplateSet::Common, TemplateSet::Aws, TemplateSet::Gcloud, TemplateSet::Firebase];

    /// Directory name under the embedded templates root.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateSet::Common => "common",
            TemplateSet::Aws => "aws",
            TemplateSet::Gcloud => "gcloud",
            TemplateSet::Firebase => "firebase",
        }
    }
}

/// How a template overlay treats files that already exist in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace existing files.
    Overwrite,
    /// Fail when an existing file differs from the template; identical files are left alone.
    Error,
}

/// A single file from a template set, with its path relative to the set root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

/// Placeholder tokens substituted after a template merge.
pub mod placeholders {
    pub const APP_NAME: &str = "__appName__";
    pub const DIST_FOLDER: &str = "__distFolder__";
    pub const DIST_BROWSER_FOLDER: &str = "__distBrowserFolder__";
    pub const DIST_SERVER_FOLDER: &str = "__distServerFolder__";
}
