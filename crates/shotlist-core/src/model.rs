//! The scene/shot/fragment document model.
//!
//! A [`Document`] is an ordered list of [`Scene`]s, each an ordered list of
//! [`Shot`]s, each an ordered list of [`Fragment`]s. The model itself
//! upholds the no-empty invariant: [`Document::push_scene`] drops scenes
//! without shots and [`Scene::push_shot`] drops shots without fragments, so a
//! finished document never contains empty segments.

use crate::render::{self, RenderOptions};

/// An atomic piece of shot content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text.
    PlainText(String),
    /// A hyperlink.
    Link {
        /// Anchor text.
        text: String,
        /// Link target.
        href: String,
    },
}

impl Fragment {
    /// Create a plain text fragment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::PlainText(content.into())
    }

    /// Create a link fragment.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    /// The human-readable text of the fragment, without decoration.
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(content) => content,
            Self::Link { text, .. } => text,
        }
    }
}

/// A sub-segment of a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shot {
    label: Option<String>,
    fragments: Vec<Fragment>,
}

impl Shot {
    /// Create an empty shot labeled with the tag that opened it.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            fragments: Vec::new(),
        }
    }

    /// Create an empty unlabeled shot.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Builder form of [`Shot::push`].
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.push(fragment);
        self
    }

    /// The tag that opened this shot, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Fragments in document order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns `true` if the shot holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Linearize the shot's fragments. See [`render::render`].
    pub fn plain_text(&self, options: RenderOptions) -> String {
        render::render(self, options)
    }
}

/// A top-level narrative segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    label: Option<String>,
    shots: Vec<Shot>,
}

impl Scene {
    /// Create an empty scene labeled with the tag that opened it.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            shots: Vec::new(),
        }
    }

    /// Create an empty unlabeled scene.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Append `shot` if it holds at least one fragment.
    ///
    /// Returns `true` if the shot was kept, `false` if it was discarded.
    pub fn push_shot(&mut self, shot: Shot) -> bool {
        if shot.is_empty() {
            return false;
        }
        self.shots.push(shot);
        true
    }

    /// Builder form of [`Scene::push_shot`].
    pub fn with_shot(mut self, shot: Shot) -> Self {
        self.push_shot(shot);
        self
    }

    /// The tag that opened this scene, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Shots in document order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Returns `true` if the scene holds no shots.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

/// The restructured document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: Option<String>,
    scenes: Vec<Scene>,
}

impl Document {
    /// Create an empty untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Append `scene` if it holds at least one shot.
    ///
    /// Returns `true` if the scene was kept, `false` if it was discarded.
    pub fn push_scene(&mut self, scene: Scene) -> bool {
        if scene.is_empty() {
            return false;
        }
        self.scenes.push(scene);
        true
    }

    /// Builder form of [`Document::push_scene`].
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.push_scene(scene);
        self
    }

    /// Document title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Scenes in document order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Returns `true` if the document has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Total number of shots across all scenes.
    pub fn shot_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.shots.len()).sum()
    }
}
