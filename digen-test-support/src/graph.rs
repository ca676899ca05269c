//! Reference graph checks used to verify generated datasets.
//!
//! These helpers operate on plain `(u, v)` pairs so they stay independent of
//! the payload types under test. Edges naming a node outside `0..n` are
//! ignored.

use std::collections::VecDeque;

/// Builds outgoing adjacency lists for `n` nodes.
#[must_use]
pub fn adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut lists = vec![Vec::new(); n];
    for &(u, v) in edges {
        if v >= n {
            continue;
        }
        if let Some(list) = lists.get_mut(u) {
            list.push(v);
        }
    }
    lists
}

/// Counts incoming edges per node.
#[must_use]
pub fn in_degrees(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut degrees = vec![0; n];
    for &(u, v) in edges {
        if u >= n {
            continue;
        }
        if let Some(degree) = degrees.get_mut(v) {
            *degree += 1;
        }
    }
    degrees
}

/// Returns `true` when Kahn's algorithm can order every node, i.e. the graph
/// has no directed cycle. Self-loops count as cycles.
///
/// # Examples
/// ```
/// use digen_test_support::graph::is_acyclic;
///
/// assert!(is_acyclic(3, &[(0, 1), (1, 2)]));
/// assert!(!is_acyclic(3, &[(0, 1), (1, 2), (2, 0)]));
/// ```
#[must_use]
pub fn is_acyclic(n: usize, edges: &[(usize, usize)]) -> bool {
    let lists = adjacency(n, edges);
    let mut degrees = in_degrees(n, edges);
    let mut ready: VecDeque<usize> = degrees
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node, _)| node)
        .collect();
    let mut ordered = 0;
    while let Some(node) = ready.pop_front() {
        ordered += 1;
        for &next in &lists[node] {
            degrees[next] -= 1;
            if degrees[next] == 0 {
                ready.push_back(next);
            }
        }
    }
    ordered == n
}

/// Computes strongly connected components with an iterative Tarjan walk.
///
/// Each component is sorted ascending; components appear in the order Tarjan
/// completes them (reverse topological order of the condensation).
///
/// # Examples
/// ```
/// use digen_test_support::graph::strongly_connected_components;
///
/// let components = strongly_connected_components(4, &[(0, 1), (1, 0), (1, 2), (2, 3)]);
/// assert!(components.contains(&vec![0, 1]));
/// assert_eq!(components.len(), 3);
/// ```
#[must_use]
pub fn strongly_connected_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let lists = adjacency(n, edges);
    let mut index: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![0; n];
    let mut on_stack = vec![false; n];
    let mut stack = Vec::new();
    let mut counter = 0;
    let mut components = Vec::new();

    for root in 0..n {
        if index[root].is_some() {
            continue;
        }
        index[root] = Some(counter);
        low[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(&(node, cursor)) = frames.last() {
            if let Some(&next) = lists[node].get(cursor) {
                if let Some(frame) = frames.last_mut() {
                    frame.1 += 1;
                }
                match index[next] {
                    None => {
                        index[next] = Some(counter);
                        low[next] = counter;
                        counter += 1;
                        stack.push(next);
                        on_stack[next] = true;
                        frames.push((next, 0));
                    }
                    Some(visited) if on_stack[next] => low[node] = low[node].min(visited),
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                low[parent] = low[parent].min(low[node]);
            }
            if index[node] == Some(low[node]) {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    on_stack[member] = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }
        }
    }
    components
}

/// Counts edges that point backwards relative to `order`.
///
/// A graph whose edges all point forward in some order is acyclic, so every
/// cycle contributes at least one back-edge.
#[must_use]
pub fn back_edge_count(order: &[usize], edges: &[(usize, usize)]) -> usize {
    let mut position = vec![usize::MAX; order.len()];
    for (rank, &node) in order.iter().enumerate() {
        if let Some(slot) = position.get_mut(node) {
            *slot = rank;
        }
    }
    edges
        .iter()
        .filter(|&&(u, v)| match (position.get(u), position.get(v)) {
            (Some(from), Some(to)) => from > to,
            _ => false,
        })
        .count()
}
