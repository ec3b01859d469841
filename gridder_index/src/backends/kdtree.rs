// Copyright 2025 the Gridder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static 2-d tree backend generic over scalar `T: Scalar`.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::backend::NearestBackend;
use crate::types::{Aabb2D, Neighbor, Point2D, Scalar, distance2, lt, within};

/// A bulk-built 2-d tree.
///
/// Nodes split at the median of the axis with the widest extent. Each node
/// keeps the bounding box of its points, which gives a tight lower bound for
/// pruning during queries.
pub struct KdTree<T: Scalar> {
    max_leaf: usize,
    root: Option<NodeIdx>,
    arena: Vec<Node<T>>,
    len: usize,
}

enum Kind<T: Scalar> {
    Leaf(Vec<KdItem<T>>),
    Internal { left: NodeIdx, right: NodeIdx },
}

struct Node<T: Scalar> {
    bbox: Aabb2D<T>,
    kind: Kind<T>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

type KdItem<TS> = (usize, Point2D<TS>);

impl<T: Scalar> Default for KdTree<T> {
    fn default() -> Self {
        Self {
            max_leaf: 8,
            root: None,
            arena: Vec::new(),
            len: 0,
        }
    }
}

impl<T: Scalar> KdTree<T> {
    /// Build a tree over `points` with the default leaf size.
    pub fn from_points(points: &[Point2D<T>]) -> Self {
        Self::with_leaf_size(points, 8)
    }

    /// Build a tree over `points`, splitting nodes holding more than `max_leaf` points.
    pub fn with_leaf_size(points: &[Point2D<T>], max_leaf: usize) -> Self {
        let max_leaf = max_leaf.max(1);
        let mut tree = Self {
            max_leaf,
            root: None,
            arena: Vec::with_capacity(2 * points.len() / max_leaf + 1),
            len: points.len(),
        };
        if !points.is_empty() {
            let items: Vec<KdItem<T>> = points.iter().copied().enumerate().collect();
            tree.root = Some(Self::build_node(&mut tree.arena, items, max_leaf));
        }
        log::trace!(
            "kd-tree built: {} points, {} nodes",
            tree.len,
            tree.arena.len()
        );
        tree
    }

    fn bbox_items(items: &[KdItem<T>]) -> Aabb2D<T> {
        let mut it = items.iter();
        if let Some((_, p)) = it.next() {
            let mut acc = Aabb2D::from_point(*p);
            for (_, q) in it {
                acc = acc.union(&Aabb2D::from_point(*q));
            }
            acc
        } else {
            Aabb2D::new(T::zero(), T::zero(), T::zero(), T::zero())
        }
    }

    fn build_node(arena: &mut Vec<Node<T>>, mut items: Vec<KdItem<T>>, max_leaf: usize) -> NodeIdx {
        let bbox = Self::bbox_items(&items);
        if items.len() <= max_leaf {
            arena.push(Node {
                bbox,
                kind: Kind::Leaf(items),
            });
            return NodeIdx::new(arena.len() - 1);
        }

        // Split along the wider axis; slot order keeps duplicates deterministic.
        let split_x = !lt(
            T::widen(T::sub(bbox.max_x, bbox.min_x)),
            T::widen(T::sub(bbox.max_y, bbox.min_y)),
        );
        items.sort_by(|a, b| {
            let (ca, cb) = if split_x {
                (a.1.x, b.1.x)
            } else {
                (a.1.y, b.1.y)
            };
            ca.partial_cmp(&cb)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let right_items = items.split_off(items.len() / 2);

        // Reserve this node's position before the children so the root stays first.
        let idx = arena.len();
        arena.push(Node {
            bbox,
            kind: Kind::Leaf(Vec::new()),
        });
        let left = Self::build_node(arena, items, max_leaf);
        let right = Self::build_node(arena, right_items, max_leaf);
        arena[idx].kind = Kind::Internal { left, right };
        NodeIdx::new(idx)
    }
}

impl<T: Scalar> NearestBackend<T> for KdTree<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn nearest(&self, x: T, y: T, max_distance2: Option<T::Acc>) -> Option<Neighbor<T>> {
        let root_idx = self.root?;
        let q = Point2D::new(x, y);
        let mut best: Option<Neighbor<T>> = None;
        let root_bound = self.arena[root_idx.get()].bbox.distance2_to_point(x, y);
        let mut stack = vec![(root_idx, root_bound)];
        while let Some((i, bound)) = stack.pop() {
            if !within(bound, max_distance2) {
                continue;
            }
            if let Some(b) = best.as_ref()
                && lt(b.distance2, bound)
            {
                continue;
            }
            match &self.arena[i.get()].kind {
                Kind::Leaf(items) => {
                    for (slot, p) in items {
                        let d2 = distance2(q, *p);
                        if within(d2, max_distance2)
                            && Neighbor::improves(best.as_ref(), *slot, d2)
                        {
                            best = Some(Neighbor {
                                slot: *slot,
                                distance2: d2,
                            });
                        }
                    }
                }
                Kind::Internal { left, right } => {
                    let lb = self.arena[left.get()].bbox.distance2_to_point(x, y);
                    let rb = self.arena[right.get()].bbox.distance2_to_point(x, y);
                    // Push the farther child first so the nearer one is visited next.
                    if lt(lb, rb) {
                        stack.push((*right, rb));
                        stack.push((*left, lb));
                    } else {
                        stack.push((*left, lb));
                        stack.push((*right, rb));
                    }
                }
            }
        }
        best
    }
}

impl<T: Scalar> Debug for KdTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("max_leaf", &self.max_leaf)
            .field("arena_nodes", &self.arena.len())
            .field("points", &self.len)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

/// Convenience type aliases for common scalar choices.
/// 2-d tree with f32 coordinates and f64 metrics.
pub type KdTreeF32 = KdTree<f32>;

/// 2-d tree with f64 coordinates.
pub type KdTreeF64 = KdTree<f64>;
