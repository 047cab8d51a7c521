use serde::{Deserialize, Serialize};

/// One case-study entry in the portfolio catalog.
///
/// Records are immutable once loaded into a [`Catalog`](crate::Catalog);
/// the catalog owns them and hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cover image reference. Opaque to this crate.
    pub image: String,
    /// Extra images shown in the detail carousel after the cover.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectRecord {
    /// Create a record with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            gallery: Vec::new(),
            technologies: Vec::new(),
            demo_url: None,
            github_url: None,
            featured: false,
        }
    }

    #[must_use]
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_gallery<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gallery = images.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    #[must_use]
    pub fn with_links(mut self, demo_url: Option<String>, github_url: Option<String>) -> Self {
        self.demo_url = demo_url;
        self.github_url = github_url;
        self
    }

    /// All images in carousel order: the cover first, then the gallery.
    ///
    /// An empty cover reference is skipped.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image.as_str())
            .filter(|image| !image.is_empty())
            .chain(self.gallery.iter().map(String::as_str))
    }

    pub fn image_count(&self) -> usize {
        self.images().count()
    }
}
