//! Best-first search over caller-defined graphs.
//!
//! [`Search`] runs Dijkstra / uniform-cost search, or A* when a heuristic is
//! supplied. The graph is never materialized: the caller supplies a
//! [`Graph`] that expands one node into `(neighbor, edge cost)` pairs on
//! demand. Any `Fn(&N) -> impl IntoIterator<Item = (N, Cost)>` is a graph.
//!
//! ```
//! use aoc_search::Search;
//!
//! // A line 0 -> 1 -> 2 -> ... with edge cost equal to the target node.
//! let line = |n: &u32| if *n < 5 { vec![(n + 1, u64::from(n + 1))] } else { vec![] };
//! let result = Search::new().goal(|n: &u32| *n == 3).run(&line, 0);
//! assert_eq!(result.cost(), Some(6));
//! assert_eq!(result.path().unwrap().nodes, vec![0, 1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::{BuildHasherDefault, Hash};
use std::ops::Deref;

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, trace};
use rustc_hash::FxHasher;

/// Edge and path cost. Unsigned, so edge costs can never be negative.
pub type Cost = u64;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Node expansion: the outgoing edges of a node.
pub trait Graph<N> {
    type Neighbors: IntoIterator<Item = (N, Cost)>;

    fn neighbors(&self, node: &N) -> Self::Neighbors;

    /// Plain uniform-cost search from `start` with every option at its default.
    fn search(&self, start: N) -> SearchResult<N>
    where
        N: Clone + Eq + Hash,
    {
        Search::new().run(self, start)
    }
}

impl<N, F, I> Graph<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = (N, Cost)>,
{
    type Neighbors = I;

    #[inline]
    fn neighbors(&self, node: &N) -> I {
        self(node)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct TreeEntry {
    /// Index of the predecessor in the tree. The start node points at itself.
    predecessor: usize,
    cost: Cost,
    finalized: bool,
}

/// Every node the search discovered, with its predecessor and best known cost.
///
/// Iteration follows discovery order, the start node first. Costs of
/// finalized nodes are optimal; nodes still open when a goal stopped the
/// search carry the best cost seen so far.
#[derive(Clone, Debug)]
pub struct SearchTree<N> {
    nodes: FxIndexMap<N, TreeEntry>,
}

impl<N: Eq + Hash> SearchTree<N> {
    fn new(start: N) -> Self {
        let mut nodes = FxIndexMap::default();
        nodes.insert(
            start,
            TreeEntry {
                predecessor: 0,
                cost: 0,
                finalized: false,
            },
        );
        Self { nodes }
    }

    /// Predecessor and cumulative cost of `node`.
    pub fn get(&self, node: &N) -> Option<(&N, Cost)> {
        let entry = self.nodes.get(node)?;
        let (predecessor, _) = self.nodes.get_index(entry.predecessor)?;
        Some((predecessor, entry.cost))
    }

    #[inline]
    pub fn cost(&self, node: &N) -> Option<Cost> {
        self.nodes.get(node).map(|e| e.cost)
    }

    #[inline]
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.get(node).map(|(p, _)| p)
    }

    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Whether `node` was popped from the frontier, fixing its cost.
    #[inline]
    pub fn is_finalized(&self, node: &N) -> bool {
        self.nodes.get(node).is_some_and(|e| e.finalized)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(node, predecessor, cost)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, Cost)> + '_ {
        self.nodes.iter().filter_map(|(node, entry)| {
            let (predecessor, _) = self.nodes.get_index(entry.predecessor)?;
            Some((node, predecessor, entry.cost))
        })
    }

    /// Walk predecessor links from `node` back to the start.
    ///
    /// Returns `None` if the search never reached `node`.
    pub fn path_to(&self, node: &N) -> Option<SearchPath<N>>
    where
        N: Clone,
    {
        let (mut idx, _, entry) = self.nodes.get_full(node)?;
        let cost = entry.cost;
        let mut nodes = Vec::new();
        loop {
            let (current, entry) = self.nodes.get_index(idx)?;
            nodes.push(current.clone());
            if entry.predecessor == idx {
                break;
            }
            idx = entry.predecessor;
        }
        nodes.reverse();
        Some(SearchPath { nodes, cost })
    }
}

/// Outcome of one search. A missing destination means no reachable node
/// satisfied the goal; that is not an error.
#[derive(Clone, Debug)]
pub struct SearchResult<N> {
    start: N,
    destination: Option<N>,
    tree: SearchTree<N>,
}

impl<N: Clone + Eq + Hash> SearchResult<N> {
    #[inline]
    pub fn start(&self) -> &N {
        &self.start
    }

    #[inline]
    pub fn destination(&self) -> Option<&N> {
        self.destination.as_ref()
    }

    #[inline]
    pub fn tree(&self) -> &SearchTree<N> {
        &self.tree
    }

    /// Cost of the destination, if one was found.
    pub fn cost(&self) -> Option<Cost> {
        self.tree.cost(self.destination.as_ref()?)
    }

    /// Path from the start to the destination.
    pub fn path(&self) -> Option<SearchPath<N>> {
        self.tree.path_to(self.destination.as_ref()?)
    }

    #[inline]
    pub fn path_to(&self, node: &N) -> Option<SearchPath<N>> {
        self.tree.path_to(node)
    }

    pub fn finalized_count(&self) -> usize {
        self.tree.nodes.values().filter(|e| e.finalized).count()
    }
}

/// Nodes from the start to some destination, both included, with the total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPath<N> {
    pub nodes: Vec<N>,
    pub cost: Cost,
}

impl<N> SearchPath<N> {
    /// Number of edges walked.
    #[inline]
    pub fn edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N> Deref for SearchPath<N> {
    type Target = [N];
    #[inline]
    fn deref(&self) -> &[N] {
        &self.nodes
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Candidate {
    /// `cost + heuristic`.
    priority: Cost,
    cost: Cost,
    idx: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        // Ties go to the deeper node, then to the earlier discovery.
        other
            .priority
            .cmp(&self.priority)
            .then(self.cost.cmp(&other.cost))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Options for one search run.
///
/// Defaults: unbounded cost, no visitor, zero heuristic (plain Dijkstra) and
/// a goal that never matches, so the search explores everything reachable.
pub struct Search<'a, N> {
    max_cost: Cost,
    on_visit: Box<dyn FnMut(&N) + 'a>,
    heuristic: Box<dyn Fn(&N) -> Cost + 'a>,
    goal: Box<dyn Fn(&N) -> bool + 'a>,
}

impl<N> Default for Search<'_, N> {
    fn default() -> Self {
        Self {
            max_cost: Cost::MAX,
            on_visit: Box::new(|_: &N| {}),
            heuristic: Box::new(|_: &N| 0),
            goal: Box::new(|_: &N| false),
        }
    }
}

impl<'a, N: Clone + Eq + Hash> Search<'a, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any path whose cost would exceed `max_cost`.
    pub fn max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Called once per finalized node, in finalization order. The goal node
    /// itself is not reported.
    pub fn on_visit(mut self, on_visit: impl FnMut(&N) + 'a) -> Self {
        self.on_visit = Box::new(on_visit);
        self
    }

    /// Cost-to-go estimate. Only orders the frontier; recorded costs never
    /// include it. Must not overestimate for the first goal hit to be optimal.
    pub fn heuristic(mut self, heuristic: impl Fn(&N) -> Cost + 'a) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Stop as soon as a finalized node satisfies `goal`.
    pub fn goal(mut self, goal: impl Fn(&N) -> bool + 'a) -> Self {
        self.goal = Box::new(goal);
        self
    }

    pub fn run<G>(mut self, graph: &G, start: N) -> SearchResult<N>
    where
        G: Graph<N> + ?Sized,
    {
        let mut tree = SearchTree::new(start.clone());
        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            priority: 0,
            cost: 0,
            idx: 0,
        });
        let mut finalized = 0usize;

        let destination = loop {
            let Some(Candidate { cost, idx, .. }) = frontier.pop() else {
                break None;
            };

            // Skip stale entries.
            if tree.nodes[idx].finalized {
                continue;
            }
            tree.nodes[idx].finalized = true;
            finalized += 1;

            let Some((node, _)) = tree.nodes.get_index(idx) else {
                continue;
            };
            let node = node.clone();
            trace!("finalized node #{idx} at cost {cost}");

            if (self.goal)(&node) {
                break Some(node);
            }
            (self.on_visit)(&node);

            for (next, edge_cost) in graph.neighbors(&node) {
                let tentative = cost.saturating_add(edge_cost);
                if tentative > self.max_cost {
                    continue;
                }

                let next_idx = match tree.nodes.entry(next) {
                    Entry::Occupied(mut e) => {
                        let known = e.get_mut();
                        if known.finalized || tentative > known.cost {
                            continue;
                        }
                        known.predecessor = idx;
                        known.cost = tentative;
                        e.index()
                    }
                    Entry::Vacant(e) => {
                        let next_idx = e.index();
                        e.insert(TreeEntry {
                            predecessor: idx,
                            cost: tentative,
                            finalized: false,
                        });
                        next_idx
                    }
                };

                let Some((next, _)) = tree.nodes.get_index(next_idx) else {
                    continue;
                };
                frontier.push(Candidate {
                    priority: tentative.saturating_add((self.heuristic)(next)),
                    cost: tentative,
                    idx: next_idx,
                });
            }
        };

        debug!(
            "search finished: {finalized} finalized, {} discovered, destination {}",
            tree.len(),
            if destination.is_some() { "found" } else { "not found" }
        );

        SearchResult {
            start,
            destination,
            tree,
        }
    }
}
