//! Arena-held view of a Robot Framework report.
//!
//! Nodes are stored in one `Vec` and refer to their children by index, so the
//! tree has no back-references and is dropped in one piece after extraction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusState {
    Pass,
    Fail,
    /// SKIP, NOT RUN and anything else that is not a failure.
    Other,
}

impl StatusState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PASS" => StatusState::Pass,
            "FAIL" => StatusState::Fail,
            _ => StatusState::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Suite { name: Option<String> },
    Test { name: Option<String> },
    Keyword { name: Option<String> },
    Status { state: StatusState, text: Option<String> },
    Message { text: String },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl ReportTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node under `parent`, or as a top-level suite when `parent` is `None`.
    pub fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn children_where<'a>(
        &'a self,
        id: NodeId,
        pred: impl Fn(&NodeKind) -> bool + 'a,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(move |c| pred(&self.nodes[c.0].kind))
    }

    pub fn suites(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_where(id, |k| matches!(k, NodeKind::Suite { .. }))
    }

    pub fn tests(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_where(id, |k| matches!(k, NodeKind::Test { .. }))
    }

    pub fn keywords(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_where(id, |k| matches!(k, NodeKind::Keyword { .. }))
    }

    /// Message texts of a keyword, in document order.
    pub fn messages(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.nodes[id.0]
            .children
            .iter()
            .filter_map(|c| match &self.nodes[c.0].kind {
                NodeKind::Message { text } => Some(text.as_str()),
                _ => None,
            })
    }

    /// First status child of a test or keyword.
    pub fn status(&self, id: NodeId) -> Option<(StatusState, Option<&str>)> {
        self.nodes[id.0]
            .children
            .iter()
            .find_map(|c| match &self.nodes[c.0].kind {
                NodeKind::Status { state, text } => Some((*state, text.as_deref())),
                _ => None,
            })
    }

    pub fn keyword_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Keyword { name } => name.as_deref(),
            _ => None,
        }
    }

    /// Depth-first walk: within a suite its tests come before its child
    /// suites; a test or keyword is visited before the keywords it contains.
    pub fn walk<V: ReportVisitor + ?Sized>(&self, visitor: &mut V) {
        for &root in &self.roots {
            self.walk_suite(root, visitor);
        }
    }

    fn walk_suite<V: ReportVisitor + ?Sized>(&self, suite: NodeId, visitor: &mut V) {
        for test in self.tests(suite) {
            visitor.visit_test(self, test);
            for kw in self.keywords(test) {
                self.walk_keyword(kw, visitor);
            }
        }
        for child in self.suites(suite) {
            self.walk_suite(child, visitor);
        }
    }

    fn walk_keyword<V: ReportVisitor + ?Sized>(&self, kw: NodeId, visitor: &mut V) {
        visitor.visit_keyword(self, kw);
        for child in self.keywords(kw) {
            self.walk_keyword(child, visitor);
        }
    }
}

pub trait ReportVisitor {
    fn visit_test(&mut self, _tree: &ReportTree, _test: NodeId) {}
    fn visit_keyword(&mut self, _tree: &ReportTree, _keyword: NodeId) {}
}
