//! Include tree rebuilt from a listing's include summary.
//!
//! The summary lists every file in the order the compiler pulled it in, each
//! with the sequence number of its logical parent. That trace is depth first,
//! so comparing a row's parent index with the parent index of the previously
//! inserted node tells whether the row nests deeper, stays level, or climbs
//! back up. Nodes live in an arena and refer to each other by index.

use std::fmt;

use smol_str::SmolStr;

use crate::syntax::IncludeFileSummaryRecord;

/// Record type of the main input file.
pub const INPUT_RECORD_TYPE: &str = "INPUT";

/// Index of a node within its [`IncludeTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IncludeNodeId(pub usize);

impl IncludeNodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for IncludeNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// Which summary rows to leave out of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct IncludeTreeOptions {
    /// Record types to skip, matched exactly against the upper-cased type.
    pub ignore_types: Vec<String>,
    /// Filename fragments to skip, matched case-insensitively.
    pub ignore_files: Vec<String>,
    /// Force the row after the root to `INPUT`. The compiler wraps the real
    /// entry point in a synthetic file, which shows up as that second row.
    pub normalize_entry_point: bool,
}

impl Default for IncludeTreeOptions {
    fn default() -> Self {
        Self {
            ignore_types: Vec::new(),
            ignore_files: Vec::new(),
            normalize_entry_point: true,
        }
    }
}

impl IncludeTreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignored_type(mut self, record_type: impl Into<String>) -> Self {
        self.ignore_types.push(record_type.into());
        self
    }

    pub fn with_ignored_file(mut self, fragment: impl Into<String>) -> Self {
        self.ignore_files.push(fragment.into());
        self
    }

    pub fn with_normalize_entry_point(mut self, normalize: bool) -> Self {
        self.normalize_entry_point = normalize;
        self
    }

    /// Whether a row with this type and filename is filtered out.
    ///
    /// Blank file fragments are ignored.
    pub fn excludes(&self, record_type: &str, filename: &str) -> bool {
        if self
            .ignore_types
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(record_type))
        {
            return true;
        }
        let filename = filename.to_lowercase();
        self.ignore_files
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .any(|fragment| filename.contains(&fragment.to_lowercase()))
    }
}

/// One file in the include tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeNode {
    pub id: IncludeNodeId,
    pub sequence_number: u32,
    pub global_line: u32,
    pub record_type: SmolStr,
    /// Sequence number of the logical parent, as listed.
    pub parent_index: u32,
    pub local_line: u32,
    pub filename: String,
    pub parent: Option<IncludeNodeId>,
    pub children: Vec<IncludeNodeId>,
    /// True once the node has children.
    pub collapsible: bool,
}

impl IncludeNode {
    fn from_record(id: IncludeNodeId, record: &IncludeFileSummaryRecord) -> Self {
        Self {
            id,
            sequence_number: record.sequence_number,
            global_line: record.global_line,
            record_type: record.record_type.clone(),
            parent_index: record.parent_index,
            local_line: record.local_line,
            filename: record.filename.clone(),
            parent: None,
            children: Vec::new(),
            collapsible: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of include nodes with a single root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeTree {
    nodes: Vec<IncludeNode>,
}

impl IncludeTree {
    pub fn root(&self) -> &IncludeNode {
        &self.nodes[0]
    }

    pub fn get(&self, id: IncludeNodeId) -> Option<&IncludeNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: a tree always has its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[IncludeNode] {
        &self.nodes
    }

    pub fn children(&self, id: IncludeNodeId) -> impl Iterator<Item = &IncludeNode> {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.get(*child))
    }

    pub fn parent(&self, id: IncludeNodeId) -> Option<&IncludeNode> {
        self.get(id)?.parent.and_then(|parent| self.get(parent))
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: IncludeNodeId) -> Vec<IncludeNodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.get(id).and_then(|node| node.parent);
        while let Some(ancestor) = current {
            ancestors.push(ancestor);
            current = self.get(ancestor).and_then(|node| node.parent);
        }
        ancestors
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: IncludeNodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Pre-order traversal from the root, with each node's depth.
    pub fn walk(&self) -> Vec<(usize, &IncludeNode)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(0, IncludeNodeId(0))];
        while let Some((depth, id)) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            out.push((depth, node));
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
        }
        out
    }

    /// Nodes whose filename ends with `name`, ignoring case.
    pub fn find_by_file(&self, name: &str) -> Vec<&IncludeNode> {
        let name = name.to_lowercase();
        self.nodes
            .iter()
            .filter(|node| node.filename.to_lowercase().ends_with(&name))
            .collect()
    }

    fn attach(&mut self, parent: IncludeNodeId, mut node: IncludeNode) -> IncludeNodeId {
        let id = node.id;
        node.parent = Some(parent);
        self.nodes.push(node);
        let parent = &mut self.nodes[parent.0];
        parent.children.push(id);
        parent.collapsible = true;
        id
    }
}

/// Rebuild the include tree from summary rows in emission order.
///
/// The first row becomes the root. Returns `None` only when there are no
/// rows at all.
pub fn build_include_tree(
    records: &[IncludeFileSummaryRecord],
    options: &IncludeTreeOptions,
) -> Option<IncludeTree> {
    let (first, rest) = records.split_first()?;
    if first.record_type != INPUT_RECORD_TYPE {
        tracing::debug!("include summary starts with {} row", first.record_type);
    }

    let mut tree = IncludeTree {
        nodes: vec![IncludeNode::from_record(IncludeNodeId(0), first)],
    };
    let root = IncludeNodeId(0);
    let mut cursor = root;

    for (position, record) in rest.iter().enumerate() {
        let mut node = IncludeNode::from_record(IncludeNodeId(tree.nodes.len()), record);
        if position == 0 && options.normalize_entry_point {
            node.record_type = SmolStr::new_static(INPUT_RECORD_TYPE);
        }
        if options.excludes(&node.record_type, &node.filename) {
            tracing::trace!("include tree: skipping {} {}", record.record_type, record.filename);
            continue;
        }

        let current = &tree.nodes[cursor.0];
        let parent = if current.parent_index < record.parent_index {
            cursor
        } else if current.parent_index == record.parent_index {
            current.parent.unwrap_or(root)
        } else {
            let mut ancestor = cursor;
            while let Some(up) = tree.nodes[ancestor.0].parent {
                if tree.nodes[ancestor.0].parent_index < record.parent_index {
                    break;
                }
                ancestor = up;
            }
            ancestor
        };
        cursor = tree.attach(parent, node);
    }

    tracing::debug!("include tree: {} nodes", tree.len());
    Some(tree)
}
