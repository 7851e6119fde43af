//! The layout engine: restructures a markup tree into scenes and shots.
//!
//! Layout walks the tree depth-first in document order. Each node is
//! classified by its tag, and the matching rules fire in a fixed order:
//!
//! 1. **Skip**: the node and its subtree are ignored.
//! 2. **Scene boundary**: the pending shot and scene are tied off, and a new
//!    scene labeled with the tag opens together with an unlabeled shot.
//! 3. **Shot boundary**: the pending shot is tied off and a new shot labeled
//!    with the tag opens, inside an anonymous scene if none is open.
//! 4. **Leaf** (links and text nodes): the node's text becomes one fragment
//!    of the current shot. A leaf that is the last child of its parent ties
//!    off the shot. Leaves are never descended into.
//! 5. **Container**: everything else; its children are visited in order.
//!
//! Tying off appends a segment to its parent only if it is non-empty, so the
//! finished [`Document`] never holds an empty scene or shot.

use log::{debug, info, trace};

use shotlist_core::{
    classify::{Role, RoleSet, TagClassifier},
    markup::{Element, Node},
    model::{Document, Fragment, Scene, Shot},
};

use crate::error::FormatError;

/// Lay out the tree rooted at `root` into a [`Document`].
///
/// The returned document has no title; see [`find_title`].
///
/// # Errors
///
/// Returns a [`FormatError`] if a link-classified element has no `href`
/// attribute.
///
/// # Examples
///
/// ```
/// # use shotlist::layout::layout;
/// # use shotlist::markup::{Element, Node};
/// # use shotlist::classify::TagClassifier;
/// let body = Element::new("body")
///     .with_child(Element::new("h1").with_child(Node::text("Welcome")))
///     .with_child(Element::new("p").with_child(Node::text("Hello")));
///
/// let document = layout(&body.into(), &TagClassifier::html())?;
///
/// assert_eq!(document.scenes().len(), 1);
/// assert_eq!(document.scenes()[0].label(), Some("h1"));
/// assert_eq!(document.shot_count(), 2);
/// # Ok::<(), shotlist::FormatError>(())
/// ```
pub fn layout(root: &Node, classifier: &TagClassifier) -> Result<Document, FormatError> {
    let mut cursor = Cursor::default();

    // Frames are (node, has_next_sibling); children are pushed in reverse so
    // they pop in document order.
    let mut stack: Vec<(&Node, bool)> = vec![(root, false)];

    while let Some((node, has_next_sibling)) = stack.pop() {
        let element = match node {
            Node::Text(text) => {
                cursor.leaf(Fragment::plain(normalize(text.content())), has_next_sibling);
                continue;
            }
            Node::Element(element) => element,
        };

        let roles = classifier.roles(element.tag());
        trace!(tag = element.tag(), roles:?; "Visiting element");

        if cursor.element(element, roles, has_next_sibling)? {
            let children = element.children();
            stack.extend(
                children
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, child)| (child, index + 1 < children.len())),
            );
        }
    }

    let document = cursor.finish();
    info!(
        scenes = document.scenes().len(),
        shots = document.shot_count();
        "Layout complete"
    );

    Ok(document)
}

/// Trimmed text content of the first element tagged `tag`, in pre-order.
///
/// Returns `None` if there is no such element or its text is blank.
pub fn find_title(root: &Node, tag: &str) -> Option<String> {
    let title = root.find(tag)?.text_content();
    let title = title.trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// The first element tagged `tag` in pre-order, or `root` itself if there is
/// none.
pub fn find_root<'a>(root: &'a Node, tag: &str) -> &'a Node {
    root.find(tag).unwrap_or_else(|| {
        debug!(tag; "Layout root not found, laying out the whole tree");
        root
    })
}

/// Replace each newline with a single space.
fn normalize(text: &str) -> String {
    text.replace('\n', " ")
}

/// Traversal state for a single [`layout`] call.
#[derive(Debug, Default)]
struct Cursor {
    document: Document,
    scene: Option<Scene>,
    shot: Option<Shot>,
}

impl Cursor {
    /// Apply the boundary and leaf rules for `element`.
    ///
    /// Returns `true` if the traversal should descend into its children.
    fn element(
        &mut self,
        element: &Element,
        roles: RoleSet,
        has_next_sibling: bool,
    ) -> Result<bool, FormatError> {
        if roles.contains(Role::Skip) {
            return Ok(false);
        }

        if roles.contains(Role::SceneBoundary) {
            self.open_scene(element.tag());
        }

        if roles.contains(Role::ShotBoundary) {
            self.open_shot(element.tag());
        }

        if roles.contains(Role::Link) {
            let text = element.text_content();
            if is_blank(&text) {
                return Ok(false);
            }

            let href = element
                .attribute("href")
                .ok_or_else(|| FormatError::missing_href(element))?;
            self.leaf(Fragment::link(normalize(&text), href), has_next_sibling);
            return Ok(false);
        }

        Ok(true)
    }

    /// Append a leaf fragment, tying off the shot after the last sibling.
    fn leaf(&mut self, fragment: Fragment, has_next_sibling: bool) {
        if is_blank(fragment.text()) {
            return;
        }

        self.scene.get_or_insert_with(Scene::anonymous);
        self.shot.get_or_insert_with(Shot::anonymous).push(fragment);

        if !has_next_sibling {
            self.tie_off_shot();
            self.shot = Some(Shot::anonymous());
        }
    }

    fn open_scene(&mut self, tag: &str) {
        self.tie_off_shot();
        self.tie_off_scene();

        debug!(tag; "Opening scene");
        self.scene = Some(Scene::new(Some(tag.to_string())));
        self.shot = Some(Shot::anonymous());
    }

    fn open_shot(&mut self, tag: &str) {
        self.scene.get_or_insert_with(Scene::anonymous);
        self.tie_off_shot();

        trace!(tag; "Opening shot");
        self.shot = Some(Shot::new(Some(tag.to_string())));
    }

    fn tie_off_shot(&mut self) {
        let Some(shot) = self.shot.take() else {
            return;
        };

        let scene = self.scene.get_or_insert_with(Scene::anonymous);
        if !scene.push_shot(shot) {
            trace!("Discarded empty shot");
        }
    }

    fn tie_off_scene(&mut self) {
        let Some(scene) = self.scene.take() else {
            return;
        };

        if !self.document.push_scene(scene) {
            trace!("Discarded empty scene");
        }
    }

    fn finish(mut self) -> Document {
        self.tie_off_shot();
        self.tie_off_scene();
        self.document
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    use shotlist_core::{render::RenderOptions, span::Span};

    fn p(text: &str) -> Element {
        Element::new("p").with_child(Node::text(text))
    }

    fn a(text: &str, href: &str) -> Element {
        Element::new("a")
            .with_attribute("href", href)
            .with_child(Node::text(text))
    }

    fn run(root: Element) -> Document {
        layout(&root.into(), &TagClassifier::html()).expect("layout should succeed")
    }

    /// `(scene label, [(shot label, text)])` view of a document.
    fn outline(document: &Document) -> Vec<(Option<&str>, Vec<(Option<&str>, String)>)> {
        let options = RenderOptions::new(true, true);
        document
            .scenes()
            .iter()
            .map(|scene| {
                let shots = scene
                    .shots()
                    .iter()
                    .map(|shot| (shot.label(), shot.plain_text(options)))
                    .collect();
                (scene.label(), shots)
            })
            .collect()
    }

    #[test]
    fn test_heading_and_paragraphs() {
        let body = Element::new("body")
            .with_child(Element::new("h1").with_child(Node::text("Welcome")))
            .with_child(p("Hello"))
            .with_child(p("World"));

        assert_eq!(
            outline(&run(body)),
            vec![(
                Some("h1"),
                vec![
                    (Some("h1"), "Welcome".to_string()),
                    (Some("p"), "Hello".to_string()),
                    (Some("p"), "World".to_string()),
                ]
            )]
        );
    }

    #[test]
    fn test_definition_list() {
        let body = Element::new("body").with_child(
            Element::new("dl")
                .with_child(Element::new("dt").with_child(Node::text("Term")))
                .with_child(Element::new("dd").with_child(Node::text("Definition"))),
        );

        assert_eq!(
            outline(&run(body)),
            vec![(
                Some("dl"),
                vec![
                    (Some("dt"), "Term".to_string()),
                    (Some("dd"), "Definition".to_string()),
                ]
            )]
        );
    }

    #[test]
    fn test_link_fragment() {
        let body = Element::new("body").with_child(
            Element::new("p")
                .with_child(Node::text("Go "))
                .with_child(a("Home", "/home")),
        );
        let document = run(body);

        let shot = &document.scenes()[0].shots()[0];
        assert_eq!(
            shot.fragments(),
            &[Fragment::plain("Go "), Fragment::link("Home", "/home")]
        );
        assert_eq!(shot.plain_text(RenderOptions::new(true, true)), "Go [Home](/home)");
        assert_eq!(shot.plain_text(RenderOptions::new(false, false)), "Go Home");
    }

    #[test]
    fn test_trailing_content_after_last_shot() {
        let body = Element::new("body")
            .with_child(Element::new("h1").with_child(Node::text("Title")))
            .with_child(p("Only"))
            .with_child(Node::text("tail"));

        assert_eq!(
            outline(&run(body)),
            vec![(
                Some("h1"),
                vec![
                    (Some("h1"), "Title".to_string()),
                    (Some("p"), "Only".to_string()),
                    (None, "tail".to_string()),
                ]
            )]
        );
    }

    #[test]
    fn test_missing_href_is_an_error() {
        let body = Element::new("body").with_child(
            Element::new("p").with_child(
                Element::new("a")
                    .with_child(Node::text("Nowhere"))
                    .with_span(Span::new(3..20)),
            ),
        );

        let err = layout(&body.into(), &TagClassifier::html()).expect_err("missing href");
        assert_eq!(err.tag(), "a");
        assert_eq!(err.span(), Span::new(3..20));
    }

    #[test]
    fn test_blank_link_without_href_is_ignored() {
        let link = Element::new("a").with_child(Node::text("  "));
        let body = Element::new("body").with_child(Element::new("p").with_child(link));

        assert!(run(body).is_empty());
    }

    #[test]
    fn test_skip_drops_subtree() {
        let html = Element::new("html")
            .with_child(Element::new("title").with_child(Node::text("Ignored")))
            .with_child(p("Kept"));

        assert_eq!(
            outline(&run(html)),
            vec![(None, vec![(Some("p"), "Kept".to_string())])]
        );
    }

    #[test]
    fn test_skip_wins_over_other_roles() {
        let classifier = TagClassifier::html()
            .with_role("aside", Role::Skip)
            .with_role("aside", Role::SceneBoundary);
        let body = Element::new("body")
            .with_child(Element::new("aside").with_child(p("hidden")))
            .with_child(p("shown"));

        let document = layout(&body.into(), &classifier).expect("layout should succeed");
        assert_eq!(document.scenes().len(), 1);
        assert_eq!(document.scenes()[0].label(), None);
    }

    #[test]
    fn test_whitespace_only_content_is_neutral() {
        let plain = Element::new("body")
            .with_child(Element::new("h1").with_child(Node::text("A")))
            .with_child(p("B"));
        let padded = Element::new("body")
            .with_child(Node::text("\n  "))
            .with_child(Element::new("h1").with_child(Node::text("A")))
            .with_child(Node::text("\n  "))
            .with_child(p("B"))
            .with_child(Node::text("\n"));

        assert_eq!(outline(&run(plain)), outline(&run(padded)));
    }

    #[test]
    fn test_whitespace_sibling_keeps_shot_open() {
        // The trailing whitespace node is a sibling, so "A" does not tie the
        // shot off; "B" in the next paragraph joins it through the open shot.
        let body = Element::new("body")
            .with_child(
                Element::new("div")
                    .with_child(Node::text("A"))
                    .with_child(Node::text(" ")),
            )
            .with_child(Element::new("div").with_child(Node::text("B")));

        assert_eq!(
            outline(&run(body)),
            vec![(None, vec![(None, "AB".to_string())])]
        );
    }

    #[test]
    fn test_newlines_become_spaces() {
        let body = Element::new("body")
            .with_child(Element::new("p").with_child(Node::text("one\ntwo")))
            .with_child(Element::new("p").with_child(a("three\nfour", "/x")));
        let document = run(body);
        let shots = document.scenes()[0].shots();

        assert_eq!(shots[0].fragments(), &[Fragment::plain("one two")]);
        assert_eq!(shots[1].fragments(), &[Fragment::link("three four", "/x")]);
    }

    #[test]
    fn test_empty_boundaries_are_discarded() {
        let body = Element::new("body")
            .with_child(Element::new("h1"))
            .with_child(Element::new("dl"))
            .with_child(Element::new("p"))
            .with_child(Element::new("h1").with_child(Node::text("Real")));

        assert_eq!(
            outline(&run(body)),
            vec![(Some("h1"), vec![(Some("h1"), "Real".to_string())])]
        );
    }

    #[test]
    fn test_heading_then_empty_paragraph() {
        let body = Element::new("body")
            .with_child(Element::new("h1").with_child(Node::text("X")))
            .with_child(Element::new("p"))
            .with_child(p("after"));

        assert_eq!(
            outline(&run(body)),
            vec![(
                Some("h1"),
                vec![
                    (Some("h1"), "X".to_string()),
                    (Some("p"), "after".to_string()),
                ]
            )]
        );
    }

    #[test]
    fn test_empty_tree() {
        assert!(run(Element::new("body")).is_empty());
        assert!(
            layout(&Node::text("   "), &TagClassifier::html())
                .expect("layout should succeed")
                .is_empty()
        );
    }

    #[test]
    fn test_content_before_any_boundary() {
        let body = Element::new("body")
            .with_child(Node::text("Preface"))
            .with_child(Element::new("h1").with_child(Node::text("One")));

        assert_eq!(
            outline(&run(body)),
            vec![
                (None, vec![(None, "Preface".to_string())]),
                (Some("h1"), vec![(Some("h1"), "One".to_string())]),
            ]
        );
    }

    #[test]
    fn test_nested_containers_keep_document_order() {
        let body = Element::new("body").with_child(
            Element::new("div")
                .with_child(
                    Element::new("section")
                        .with_child(p("1"))
                        .with_child(p("2")),
                )
                .with_child(p("3")),
        );

        let texts: Vec<String> = outline(&run(body))
            .into_iter()
            .flat_map(|(_, shots)| shots.into_iter().map(|(_, text)| text))
            .collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_link_with_nested_markup_uses_all_text() {
        let link = Element::new("a")
            .with_attribute("href", "/docs")
            .with_child(Element::new("em").with_child(Node::text("Read")))
            .with_child(Node::text(" more"));
        let body = Element::new("body").with_child(Element::new("p").with_child(link));

        let document = run(body);
        assert_eq!(
            document.scenes()[0].shots()[0].fragments(),
            &[Fragment::link("Read more", "/docs")]
        );
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut node = Element::new("div").with_child(Node::text("deep"));
        for _ in 0..100_000 {
            node = Element::new("div").with_child(node);
        }
        let root = Node::from(Element::new("body").with_child(node));

        let document = layout(&root, &TagClassifier::html()).expect("layout should succeed");
        assert_eq!(document.shot_count(), 1);
    }

    #[test]
    fn test_find_title() {
        let root: Node = Element::new("html")
            .with_child(
                Element::new("head")
                    .with_child(Element::new("title").with_child(Node::text("  My Film \n"))),
            )
            .into();

        assert_eq!(find_title(&root, "title"), Some("My Film".to_string()));
        assert_eq!(find_title(&root, "missing"), None);

        let blank: Node = Element::new("title").with_child(Node::text(" ")).into();
        assert_eq!(find_title(&blank, "title"), None);
    }

    #[test]
    fn test_find_root_falls_back_to_tree() {
        let root: Node = Element::new("html")
            .with_child(Element::new("body").with_child(p("x")))
            .into();

        let body = find_root(&root, "body").as_element().map(Element::tag);
        assert_eq!(body, Some("body"));
        assert!(std::ptr::eq(find_root(&root, "main"), &root));
    }
}
