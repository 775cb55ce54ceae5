//! Tree Transformation Engine
//!
//! Postorder reduction of a syntax tree without recursion. Work lives on a
//! heap-allocated stack of frames, so tree depth is bounded by memory, not
//! by the call stack.
//!
//! # Frames
//!
//! Each frame is visited twice. The first visit pushes one frame per
//! structural child (a list field gets a list frame, which in turn pushes
//! one frame per element). The second visit hands the collected child
//! results to the [`Reducer`] and delivers the output to the parent frame.

use gql_ir::{ChildKey, NodeChild, NodeRef};
use rustc_hash::FxHashMap;

/// Per-kind reduction applied bottom-up by [`transform`].
pub trait Reducer<'a> {
    type Output;

    /// Reduce `node` given the outputs of its structural children.
    fn reduce(&mut self, node: NodeRef<'a>, children: ChildResults<Self::Output>) -> Self::Output;
}

/// Reduced output of one child field.
#[derive(Debug)]
pub enum ChildResult<T> {
    Node(T),
    List(Vec<T>),
}

/// Child outputs of one node, keyed by field.
#[derive(Debug)]
pub struct ChildResults<T> {
    fields: FxHashMap<ChildKey, ChildResult<T>>,
}

impl<T> Default for ChildResults<T> {
    fn default() -> Self {
        ChildResults {
            fields: FxHashMap::default(),
        }
    }
}

impl<T> ChildResults<T> {
    fn insert(&mut self, key: ChildKey, result: ChildResult<T>) {
        self.fields.insert(key, result);
    }

    /// Take the output of a single-node field; `None` if the field was
    /// absent.
    pub fn take(&mut self, key: ChildKey) -> Option<T> {
        match self.fields.remove(&key) {
            Some(ChildResult::Node(node)) => Some(node),
            Some(ChildResult::List(_)) | None => None,
        }
    }

    /// Take the outputs of a list field, in element order.
    pub fn take_list(&mut self, key: ChildKey) -> Vec<T> {
        match self.fields.remove(&key) {
            Some(ChildResult::List(list)) => list,
            Some(ChildResult::Node(_)) | None => Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FrameState {
    NotEntered,
    ChildrenPushed,
}

/// Where a frame's output goes.
#[derive(Copy, Clone, Debug)]
enum Parent {
    Root,
    Frame(usize),
}

/// Position of a frame within its parent.
#[derive(Copy, Clone, Debug)]
enum Slot {
    Field(ChildKey),
    Index(usize),
}

enum FrameItem<'a, T> {
    Node {
        node: NodeRef<'a>,
        results: ChildResults<T>,
    },
    List {
        nodes: Vec<NodeRef<'a>>,
        results: Vec<Option<T>>,
    },
}

struct Frame<'a, T> {
    item: FrameItem<'a, T>,
    state: FrameState,
    parent: Parent,
    slot: Slot,
}

impl<'a, T> Frame<'a, T> {
    fn new(child: NodeChild<'a>, parent: Parent, slot: Slot) -> Self {
        let item = match child {
            NodeChild::Node(node) => FrameItem::Node {
                node,
                results: ChildResults::default(),
            },
            NodeChild::List(nodes) => FrameItem::List {
                results: nodes.iter().map(|_| None).collect(),
                nodes,
            },
        };
        Frame {
            item,
            state: FrameState::NotEntered,
            parent,
            slot,
        }
    }
}

/// Reduce the tree under `root` bottom-up and return the root's output.
pub fn transform<'a, R: Reducer<'a>>(root: NodeRef<'a>, reducer: &mut R) -> R::Output {
    let mut root_results = ChildResults::default();
    let mut stack: Vec<Frame<'a, R::Output>> = Vec::new();
    push_children(&mut stack, root, Parent::Root);

    while let Some(top) = stack.len().checked_sub(1) {
        if stack[top].state == FrameState::NotEntered {
            stack[top].state = FrameState::ChildrenPushed;
            let parent = Parent::Frame(top);
            match &stack[top].item {
                FrameItem::Node { node, .. } => {
                    let node = *node;
                    push_children(&mut stack, node, parent);
                }
                FrameItem::List { nodes, .. } => {
                    let elements: Vec<_> = nodes.iter().copied().enumerate().rev().collect();
                    for (index, node) in elements {
                        stack.push(Frame::new(NodeChild::Node(node), parent, Slot::Index(index)));
                    }
                }
            }
            continue;
        }

        let Some(frame) = stack.pop() else {
            break;
        };
        let result = match frame.item {
            FrameItem::Node { node, results } => ChildResult::Node(reducer.reduce(node, results)),
            FrameItem::List { results, .. } => ChildResult::List(results.into_iter().flatten().collect()),
        };
        let target = match frame.parent {
            Parent::Root => &mut root_results,
            Parent::Frame(index) => match &mut stack[index].item {
                FrameItem::Node { results, .. } => results,
                FrameItem::List { results, .. } => {
                    if let (Slot::Index(index), ChildResult::Node(output)) = (frame.slot, result) {
                        if let Some(slot) = results.get_mut(index) {
                            *slot = Some(output);
                        }
                    }
                    continue;
                }
            },
        };
        if let Slot::Field(key) = frame.slot {
            target.insert(key, result);
        }
    }

    reducer.reduce(root, root_results)
}

/// Push frames for the children of `node` so the first child is on top.
fn push_children<'a, T>(stack: &mut Vec<Frame<'a, T>>, node: NodeRef<'a>, parent: Parent) {
    for (key, child) in node.children().into_iter().rev() {
        stack.push(Frame::new(child, parent, Slot::Field(key)));
    }
}
