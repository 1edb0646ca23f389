use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Returns every node reachable from `root`, `root` included.
///
/// `neighbors` is read as a directed adjacency list: an entry `a -> {b}` lets the traversal go from `a`
/// to `b`, but not back unless `b` also lists `a`. Nodes without an entry have no outgoing edges.
///
/// # Example
/// ```
/// use std::collections::{HashMap, HashSet};
/// use trains::bfs::bfs;
///
/// let neighbors = HashMap::from([
///     (1, HashSet::from([2])),
///     (2, HashSet::from([1, 6])),
///     (3, HashSet::from([1, 4])),
/// ]);
///
/// assert_eq!(bfs(1, &neighbors), HashSet::from([1, 2, 6]));
/// ```
pub fn bfs<T>(root: T, neighbors: &HashMap<T, HashSet<T>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut visited = HashSet::from([root.clone()]);
    let mut to_visit = VecDeque::from([root]);

    while let Some(node) = to_visit.pop_front() {
        let Some(next_nodes) = neighbors.get(&node) else {
            continue;
        };

        for next_node in next_nodes {
            if visited.insert(next_node.clone()) {
                to_visit.push_back(next_node.clone());
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_without_edges_reaches_only_root() {
        let neighbors: HashMap<&str, HashSet<&str>> = HashMap::new();
        assert_eq!(bfs("c1", &neighbors), HashSet::from(["c1"]));
    }

    #[test]
    fn bfs_follows_both_directions_when_listed() {
        let neighbors = HashMap::from([("c1", HashSet::from(["c2"])), ("c2", HashSet::from(["c1"]))]);
        assert_eq!(bfs("c1", &neighbors), HashSet::from(["c1", "c2"]));
    }

    #[test]
    fn bfs_is_directed() {
        let neighbors = HashMap::from([
            (1, HashSet::from([2])),
            (2, HashSet::from([1, 6])),
            (3, HashSet::from([1, 4])),
        ]);

        // 3 points to 1, but nothing points to 3.
        assert_eq!(bfs(1, &neighbors), HashSet::from([1, 2, 6]));
        assert_eq!(bfs(3, &neighbors), HashSet::from([1, 2, 3, 4, 6]));
    }

    #[test]
    fn bfs_handles_cycles() {
        let neighbors = HashMap::from([
            ('a', HashSet::from(['b'])),
            ('b', HashSet::from(['c'])),
            ('c', HashSet::from(['a'])),
        ]);
        assert_eq!(bfs('b', &neighbors), HashSet::from(['a', 'b', 'c']));
    }

    #[test]
    fn bfs_root_missing_from_mapping() {
        let neighbors = HashMap::from([(2, HashSet::from([3]))]);
        assert_eq!(bfs(1, &neighbors), HashSet::from([1]));
    }
}
