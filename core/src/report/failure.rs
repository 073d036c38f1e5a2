use super::tree::{NodeId, ReportTree, ReportVisitor, StatusState};

/// Collects FAIL status texts in walk order.
#[derive(Default)]
struct FailureCollector {
    messages: Vec<String>,
}

impl FailureCollector {
    fn record(&mut self, tree: &ReportTree, node: NodeId) {
        if let Some((StatusState::Fail, Some(text))) = tree.status(node) {
            if !text.is_empty() {
                self.messages.push(text.to_string());
            }
        }
    }
}

impl ReportVisitor for FailureCollector {
    fn visit_test(&mut self, tree: &ReportTree, test: NodeId) {
        self.record(tree, test);
    }

    fn visit_keyword(&mut self, tree: &ReportTree, keyword: NodeId) {
        self.record(tree, keyword);
    }
}

/// First failure diagnostic in depth-first order, taken as the root cause.
pub fn first_failure(tree: &ReportTree) -> Option<String> {
    let mut collector = FailureCollector::default();
    tree.walk(&mut collector);
    collector.messages.into_iter().next()
}
