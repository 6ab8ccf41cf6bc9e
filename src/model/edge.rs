//! Edge attributes: labels and an optional weight.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Label tokens on one edge. Most edges carry one or two.
pub type Labels = SmallVec<[String; 2]>;

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// Attributes of a directed edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeAttrs {
    pub labels: Labels,
    /// `None` means unweighted; treated as cost 1.
    pub weight: Option<f64>,
}

impl EdgeAttrs {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, weight: Option<f64>) -> Self {
        let mut attrs = Self { labels: Labels::new(), weight };
        attrs.merge_labels(labels);
        attrs
    }

    /// Append labels not already present, preserving declaration order.
    pub fn merge_labels(&mut self, labels: impl IntoIterator<Item = impl Into<String>>) {
        for label in labels {
            let label = label.into();
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels shared with `other`, in this edge's order.
    pub fn shared_labels(&self, other: &EdgeAttrs) -> Labels {
        self.labels
            .iter()
            .filter(|l| other.has_label(l))
            .cloned()
            .collect()
    }

    /// Cost of traversing this edge.
    pub fn cost(&self, weighted: bool) -> f64 {
        if weighted { self.weight.unwrap_or(1.0) } else { 1.0 }
    }
}
