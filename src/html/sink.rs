//! html5ever TreeSink building the static DOM arena.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::{DomNode, NodeData};

/// Handle used by TreeSink to reference nodes: an index into the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct NodeId(pub usize);

/// TreeSink implementation over a children-vector arena.
///
/// Uses interior mutability (RefCell) because html5ever's TreeSink trait
/// takes `&self` while the arena needs mutation.
pub(crate) struct DomSink {
    nodes: RefCell<Vec<DomNode>>,
    quirks_mode: RefCell<QuirksMode>,
}

impl DomSink {
    pub(crate) fn new() -> Self {
        let document = DomNode {
            data: NodeData::Document,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: RefCell::new(vec![document]),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    pub(crate) fn into_nodes(self) -> Vec<DomNode> {
        self.nodes.into_inner()
    }

    fn alloc(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(DomNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        NodeId(nodes.len() - 1)
    }

    fn append_node(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent.0);
        nodes[parent.0].children.push(child.0);
    }

    /// Append text, merging into a trailing text child when present:
    /// html5ever delivers text in chunks.
    fn append_text(&self, parent: NodeId, text: &str) {
        {
            let mut nodes = self.nodes.borrow_mut();
            if let Some(&last) = nodes[parent.0].children.last()
                && let NodeData::Text(existing) = &mut nodes[last].data
            {
                existing.push_str(text);
                return;
            }
        }
        let node = self.alloc(NodeData::Text(text.to_string()));
        self.append_node(parent, node);
    }

    fn insert_before(&self, sibling: NodeId, new_node: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes[sibling.0].parent else {
            return;
        };
        let Some(pos) = nodes[parent].children.iter().position(|&c| c == sibling.0) else {
            return;
        };
        nodes[new_node.0].parent = Some(parent);
        nodes[parent].children.insert(pos, new_node.0);
    }
}

impl TreeSink for DomSink {
    type Handle = NodeId;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, _msg: std::borrow::Cow<'static, str>) {
        // Lenient, like browsers.
    }

    fn get_document(&self) -> Self::Handle {
        NodeId(0)
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let nodes = self.nodes.borrow();
        match &nodes[target.0].data {
            NodeData::Element { name, .. } => {
                // SAFETY: the arena lives as long as self and the tree
                // builder uses the returned reference immediately, before
                // the next sink call can mutate the arena. The borrow
                // checker cannot see this through the RefCell, so the
                // lifetime is extended manually.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attrs = attrs
            .into_iter()
            .map(|a| (a.name.local.as_ref().to_string(), a.value.to_string()))
            .collect();
        self.alloc(NodeData::Element { name, attrs })
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        self.alloc(NodeData::Comment)
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        self.alloc(NodeData::Comment)
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(node) => self.append_node(*parent, node),
            NodeOrText::AppendText(text) => self.append_text(*parent, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.nodes.borrow()[element.0].parent.is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        let doctype = self.alloc(NodeData::Doctype);
        self.append_node(NodeId(0), doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents are skipped at extraction time anyway.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        match new_node {
            NodeOrText::AppendNode(node) => self.insert_before(*sibling, node),
            NodeOrText::AppendText(text) => {
                let node = self.alloc(NodeData::Text(text.to_string()));
                self.insert_before(*sibling, node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut nodes = self.nodes.borrow_mut();
        if let NodeData::Element { attrs: existing, .. } = &mut nodes[target.0].data {
            for attr in attrs {
                let local = attr.name.local.as_ref();
                if !existing.iter().any(|(name, _)| name == local) {
                    existing.push((local.to_string(), attr.value.to_string()));
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes[target.0].parent.take() else {
            return;
        };
        nodes[parent].children.retain(|&c| c != target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for &child in &children {
            nodes[child].parent = Some(new_parent.0);
        }
        nodes[new_parent.0].children.extend(children);
    }
}
