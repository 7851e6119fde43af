//! Plain-text rendering of shots.

use crate::model::{Fragment, Shot};

/// Decoration options for [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap link text in square brackets.
    pub link_decorator: bool,

    /// Follow link text with the target in parentheses.
    pub href: bool,
}

impl RenderOptions {
    /// Create render options.
    ///
    /// # Arguments
    ///
    /// * `link_decorator` - Render links as `[text]` instead of `text`.
    /// * `href` - Append `(href)` after each link.
    pub fn new(link_decorator: bool, href: bool) -> Self {
        Self {
            link_decorator,
            href,
        }
    }
}

/// Linearize a shot's fragments into plain text.
///
/// Fragments are concatenated in order with no separator. Plain text renders
/// as-is; a link renders as its text, wrapped as `[text]` when
/// [`RenderOptions::link_decorator`] is set, followed by `(href)` when
/// [`RenderOptions::href`] is set.
///
/// # Examples
///
/// ```
/// # use shotlist_core::model::{Fragment, Shot};
/// # use shotlist_core::render::{render, RenderOptions};
/// let shot = Shot::anonymous()
///     .with_fragment(Fragment::plain("Go "))
///     .with_fragment(Fragment::link("Home", "/home"));
///
/// assert_eq!(render(&shot, RenderOptions::new(false, false)), "Go Home");
/// assert_eq!(render(&shot, RenderOptions::new(true, true)), "Go [Home](/home)");
/// ```
pub fn render(shot: &Shot, options: RenderOptions) -> String {
    let mut out = String::new();

    for fragment in shot.fragments() {
        match fragment {
            Fragment::PlainText(content) => out.push_str(content),
            Fragment::Link { text, href } => {
                if options.link_decorator {
                    out.push('[');
                    out.push_str(text);
                    out.push(']');
                } else {
                    out.push_str(text);
                }

                if options.href {
                    out.push('(');
                    out.push_str(href);
                    out.push(')');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Shot {
        Shot::anonymous().with_fragment(Fragment::link("Home", "/home"))
    }

    #[test]
    fn test_link_decorations() {
        let shot = home();
        assert_eq!(render(&shot, RenderOptions::new(false, false)), "Home");
        assert_eq!(render(&shot, RenderOptions::new(true, false)), "[Home]");
        assert_eq!(render(&shot, RenderOptions::new(false, true)), "Home(/home)");
        assert_eq!(render(&shot, RenderOptions::new(true, true)), "[Home](/home)");
    }

    #[test]
    fn test_no_separator_between_fragments() {
        let shot = Shot::anonymous()
            .with_fragment(Fragment::plain("See"))
            .with_fragment(Fragment::link("docs", "/docs"))
            .with_fragment(Fragment::plain("now."));

        assert_eq!(render(&shot, RenderOptions::new(true, false)), "See[docs]now.");
    }

    #[test]
    fn test_plain_text_is_not_decorated() {
        let shot = Shot::anonymous().with_fragment(Fragment::plain("[not a link]"));
        assert_eq!(render(&shot, RenderOptions::new(true, true)), "[not a link]");
    }

    #[test]
    fn test_render_is_idempotent() {
        let shot = home();
        let before = shot.clone();
        let options = RenderOptions::new(true, true);

        let first = render(&shot, options);
        let second = render(&shot, options);

        assert_eq!(first, second);
        assert_eq!(shot, before);
    }

    #[test]
    fn test_empty_shot_renders_empty() {
        assert_eq!(render(&Shot::anonymous(), RenderOptions::default()), "");
    }

    #[test]
    fn test_shot_plain_text_delegates() {
        let options = RenderOptions::new(true, true);
        assert_eq!(home().plain_text(options), render(&home(), options));
    }
}
