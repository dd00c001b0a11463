//! Cycle-tolerant dependency graph.
//!
//! Built from per-node dependency lists by depth-first search with
//! white/gray/black coloring. An edge into a gray node closes a cycle; it is
//! recorded and left out of the graph, so what remains is always acyclic and
//! has a topological order.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3-22.4

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// Dependency graph over node indices `0..n`.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    dependencies: Vec<Vec<usize>>,
    dependents: Vec<Vec<usize>>,
    order: Vec<usize>,
    skipped: Vec<(usize, usize)>,
    cyclic: Vec<bool>,
}

impl DependencyGraph {
    /// Builds the graph. `dependencies[i]` lists the nodes node `i` waits on.
    ///
    /// Out-of-range indices and repeated edges are ignored. Nodes are
    /// visited in index order, so the result is deterministic.
    pub fn build(dependencies: &[Vec<usize>]) -> Self {
        let n = dependencies.len();
        let mut builder = Builder {
            input: dependencies,
            marks: vec![Mark::White; n],
            stack: Vec::new(),
            graph: Self {
                dependencies: vec![Vec::new(); n],
                dependents: vec![Vec::new(); n],
                order: Vec::with_capacity(n),
                skipped: Vec::new(),
                cyclic: vec![false; n],
            },
        };

        for node in 0..n {
            if builder.marks[node] == Mark::White {
                builder.visit(node);
            }
        }

        let mut graph = builder.graph;
        for node in 0..n {
            for &dep in &graph.dependencies[node] {
                graph.dependents[dep].push(node);
            }
        }
        graph
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Kept dependencies of `node`.
    pub fn dependencies(&self, node: usize) -> &[usize] {
        &self.dependencies[node]
    }

    /// Nodes that wait on `node` through kept edges.
    pub fn dependents(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }

    /// Topological order: every node appears after all its kept dependencies.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Edges dropped for closing a cycle, as `(node, dependency)`.
    pub fn skipped_edges(&self) -> &[(usize, usize)] {
        &self.skipped
    }

    /// Whether `node` sits on a detected cycle.
    pub fn is_cyclic(&self, node: usize) -> bool {
        self.cyclic[node]
    }

    /// Whether any cycle was detected.
    pub fn has_cycles(&self) -> bool {
        !self.skipped.is_empty()
    }
}

struct Builder<'a> {
    input: &'a [Vec<usize>],
    marks: Vec<Mark>,
    stack: Vec<usize>,
    graph: DependencyGraph,
}

impl Builder<'_> {
    fn visit(&mut self, node: usize) {
        self.marks[node] = Mark::Gray;
        self.stack.push(node);

        let input = self.input;
        for &dep in &input[node] {
            if dep >= input.len() || self.graph.dependencies[node].contains(&dep) {
                continue;
            }
            match self.marks[dep] {
                Mark::White => {
                    self.visit(dep);
                    self.graph.dependencies[node].push(dep);
                }
                Mark::Black => self.graph.dependencies[node].push(dep),
                Mark::Gray => {
                    // Back edge: everything on the stack from `dep` up is on the cycle.
                    if !self.graph.skipped.contains(&(node, dep)) {
                        self.graph.skipped.push((node, dep));
                    }
                    if let Some(pos) = self.stack.iter().position(|&s| s == dep) {
                        for &member in &self.stack[pos..] {
                            self.graph.cyclic[member] = true;
                        }
                    }
                }
            }
        }

        self.stack.pop();
        self.marks[node] = Mark::Black;
        self.graph.order.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[usize], node: usize) -> usize {
        order.iter().position(|&n| n == node).unwrap()
    }

    #[test]
    fn test_linear_chain() {
        // 0 <- 1 <- 2
        let g = DependencyGraph::build(&[vec![], vec![0], vec![1]]);
        assert_eq!(g.order(), &[0, 1, 2]);
        assert_eq!(g.dependents(0), &[1]);
        assert!(!g.has_cycles());
    }

    #[test]
    fn test_diamond_order() {
        // 3 waits on 1 and 2, both wait on 0
        let g = DependencyGraph::build(&[vec![], vec![0], vec![0], vec![1, 2]]);
        let order = g.order();
        assert!(position(order, 0) < position(order, 1));
        assert!(position(order, 0) < position(order, 2));
        assert!(position(order, 1) < position(order, 3));
        assert!(position(order, 2) < position(order, 3));
        assert_eq!(g.dependents(0), &[1, 2]);
    }

    #[test]
    fn test_cycle_edge_skipped() {
        // 0 -> 1 -> 2 -> 0, plus 3 waiting on 2
        let g = DependencyGraph::build(&[vec![1], vec![2], vec![0], vec![2]]);
        assert_eq!(g.skipped_edges(), &[(2, 0)]);
        assert!(g.is_cyclic(0) && g.is_cyclic(1) && g.is_cyclic(2));
        assert!(!g.is_cyclic(3));
        assert_eq!(g.order().len(), 4);
        assert!(g.dependencies(2).is_empty());
    }

    #[test]
    fn test_self_loop_and_bad_index() {
        let g = DependencyGraph::build(&[vec![0, 7], vec![0, 0]]);
        assert_eq!(g.skipped_edges(), &[(0, 0)]);
        assert!(g.is_cyclic(0));
        assert!(!g.is_cyclic(1));
        assert_eq!(g.dependencies(1), &[0]);
    }
}
