//! Minimal element tree standing in for the browser DOM in tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::element::MenuElement;
use super::geometry::Rect;

#[derive(Default)]
struct NodeData {
    classes: Vec<String>,
    left: Option<String>,
    rect: Rect,
    children: Vec<TestNode>,
    parent: Weak<RefCell<NodeData>>,
}

#[derive(Clone)]
pub struct TestNode(Rc<RefCell<NodeData>>);

impl PartialEq for TestNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for TestNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TestNode({})", self.0.borrow().classes.join(" "))
    }
}

impl TestNode {
    /// Node carrying the space-separated `classes`
    pub fn new(classes: &str) -> Self {
        let data = NodeData {
            classes: classes.split_whitespace().map(str::to_string).collect(),
            ..NodeData::default()
        };
        Self(Rc::new(RefCell::new(data)))
    }

    pub fn with_rect(self, left: f64, width: f64) -> Self {
        self.0.borrow_mut().rect = Rect::new(left, 0.0, width, 30.0);
        self
    }

    /// Append `child` and return self, for building trees inline
    pub fn child(self, child: TestNode) -> Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn left(&self) -> Option<String> {
        self.0.borrow().left.clone()
    }

    fn parent(&self) -> Option<TestNode> {
        self.0.borrow().parent.upgrade().map(TestNode)
    }

    fn descendants(&self) -> Vec<TestNode> {
        let mut out = Vec::new();
        for child in self.0.borrow().children.iter() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    /// Supports `.a` and `.a, .b` selectors only
    fn matches(&self, selector: &str) -> bool {
        selector.split(',').any(|part| {
            part.trim()
                .strip_prefix('.')
                .is_some_and(|class| self.has_class(class))
        })
    }
}

impl MenuElement for TestNode {
    fn query(&self, selector: &str) -> Option<Self> {
        self.descendants().into_iter().find(|n| n.matches(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.matches(selector))
            .collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn set_left(&self, value: &str) {
        self.0.borrow_mut().left = Some(value.to_string());
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }
}
