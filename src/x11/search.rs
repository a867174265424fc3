//! Depth-first window discovery across every screen.

use anyhow::Result;
use tracing::{trace, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt, Window};

use crate::x11::{WindowInfo, class};

/// The slice of an X session the search needs.
///
/// Implemented for every x11rb connection; tests drive the walk with a
/// scripted hierarchy instead.
pub trait WindowTree {
    /// Root windows, one per screen, in screen-index order.
    fn screen_roots(&self) -> Vec<Window>;

    /// Direct children of `window`, in the order the server reports them.
    fn children(&self, window: Window) -> Result<Vec<Window>>;

    /// The window's WM_CLASS instance name, if it has one.
    fn class_name(&self, window: Window) -> Option<String>;
}

impl<C: Connection> WindowTree for C {
    fn screen_roots(&self) -> Vec<Window> {
        self.setup().roots.iter().map(|screen| screen.root).collect()
    }

    fn children(&self, window: Window) -> Result<Vec<Window>> {
        Ok(self.query_tree(window)?.reply()?.children)
    }

    fn class_name(&self, window: Window) -> Option<String> {
        class::class_name(self, window)
    }
}

/// Exact, case-sensitive comparison of `window`'s class name against `target`.
pub fn window_matches<T: WindowTree + ?Sized>(tree: &T, window: Window, target: &str) -> bool {
    tree.class_name(window).is_some_and(|name| name == target)
}

/// Find the first window whose class name equals `class_name`.
///
/// Screens are searched in ascending order. Within a screen the walk is
/// pre-order depth-first (a window is tested before its children), driven
/// by an explicit worklist so traversal depth never touches the call
/// stack. A failed child enumeration prunes only that subtree.
pub fn find_window_by_class<T: WindowTree + ?Sized>(
    tree: &T,
    class_name: &str,
) -> Option<WindowInfo> {
    for (screen, root) in tree.screen_roots().into_iter().enumerate() {
        let mut worklist = vec![(root, 0usize)];

        while let Some((window, depth)) = worklist.pop() {
            trace!("visiting window {} at depth {} on screen {}", window, depth, screen);

            if window_matches(tree, window, class_name) {
                return Some(WindowInfo {
                    window,
                    screen,
                    class_name: Some(class_name.to_owned()),
                });
            }

            match tree.children(window) {
                Ok(children) => {
                    // Reversed so the server's first child is popped first.
                    worklist.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
                }
                Err(err) => {
                    warn!("could not acquire the children of window {}: {}", window, err);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeTree {
        roots: Vec<Window>,
        children: HashMap<Window, Vec<Window>>,
        classes: HashMap<Window, String>,
        broken: Vec<Window>,
        visited: RefCell<Vec<Window>>,
    }

    impl FakeTree {
        fn with_roots(roots: &[Window]) -> Self {
            Self {
                roots: roots.to_vec(),
                ..Self::default()
            }
        }

        fn child(mut self, parent: Window, child: Window) -> Self {
            self.children.entry(parent).or_default().push(child);
            self
        }

        fn class(mut self, window: Window, class: &str) -> Self {
            self.classes.insert(window, class.to_owned());
            self
        }

        fn broken(mut self, window: Window) -> Self {
            self.broken.push(window);
            self
        }
    }

    impl WindowTree for FakeTree {
        fn screen_roots(&self) -> Vec<Window> {
            self.roots.clone()
        }

        fn children(&self, window: Window) -> Result<Vec<Window>> {
            if self.broken.contains(&window) {
                bail!("tree query failed");
            }
            Ok(self.children.get(&window).cloned().unwrap_or_default())
        }

        fn class_name(&self, window: Window) -> Option<String> {
            self.visited.borrow_mut().push(window);
            self.classes.get(&window).cloned()
        }
    }

    #[test]
    fn finds_deeply_nested_window() {
        let mut tree = FakeTree::with_roots(&[1]);
        for window in 1..50 {
            tree = tree.child(window, window + 1);
        }
        let tree = tree.class(50, "term");

        let found = find_window_by_class(&tree, "term").unwrap();
        assert_eq!(found.window, 50);
        assert_eq!(found.screen, 0);
        assert_eq!(found.class_name.as_deref(), Some("term"));
    }

    #[test]
    fn finds_match_on_second_screen() {
        let tree = FakeTree::with_roots(&[1, 100])
            .child(1, 2)
            .child(100, 101)
            .class(101, "term");

        let found = find_window_by_class(&tree, "term").unwrap();
        assert_eq!(found.window, 101);
        assert_eq!(found.screen, 1);
    }

    #[test]
    fn window_is_tested_before_its_children() {
        let tree = FakeTree::with_roots(&[1]).child(1, 2).class(1, "term").class(2, "term");

        let found = find_window_by_class(&tree, "term").unwrap();
        assert_eq!(found.window, 1);
        assert_eq!(*tree.visited.borrow(), vec![1]);
    }

    #[test]
    fn first_subtree_wins_over_later_sibling() {
        let tree = FakeTree::with_roots(&[1])
            .child(1, 2)
            .child(1, 3)
            .child(2, 4)
            .class(4, "term")
            .class(3, "term");

        let found = find_window_by_class(&tree, "term").unwrap();
        assert_eq!(found.window, 4);
    }

    #[test]
    fn no_match_visits_every_window_on_every_screen() {
        let tree = FakeTree::with_roots(&[1, 100])
            .child(1, 2)
            .child(1, 3)
            .child(100, 101);

        assert_eq!(find_window_by_class(&tree, "term"), None);

        let visited = tree.visited.borrow();
        for window in [1, 2, 3, 100, 101] {
            assert!(visited.contains(&window), "window {} was not visited", window);
        }
    }

    #[test]
    fn broken_subtree_does_not_abort_the_search() {
        let tree = FakeTree::with_roots(&[1])
            .child(1, 2)
            .child(1, 3)
            .broken(2)
            .class(3, "term");

        let found = find_window_by_class(&tree, "term").unwrap();
        assert_eq!(found.window, 3);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let tree = FakeTree::with_roots(&[1]).class(1, "Navigator");

        assert!(window_matches(&tree, 1, "Navigator"));
        assert!(!window_matches(&tree, 1, "navigator"));
        assert!(!window_matches(&tree, 1, "Navigat"));
        assert_eq!(find_window_by_class(&tree, "navigator"), None);
    }
}
