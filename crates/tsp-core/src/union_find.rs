//! Disjoint-set (union-find) structure used by subtour-elimination cut separation.

/// Weighted-union, path-compressing disjoint-set structure over `0..n`.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSets {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Finds the root of `p`'s set, compressing the path traversed onto that root.
    pub fn find(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = p;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`. No-op if they are already the same set.
    pub fn merge(&mut self, x: usize, y: usize) {
        let i = self.find(x);
        let j = self.find(y);
        if i == j {
            return;
        }

        if self.size[i] < self.size[j] {
            self.parent[i] = j;
            self.size[j] += self.size[i];
        } else {
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }
        self.count -= 1;
    }

    /// Whether `x` and `y` currently belong to the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets remaining.
    pub fn count(&self) -> usize {
        self.count
    }

    /// All elements whose root equals `find(id)`'s.
    pub fn set(&mut self, id: usize) -> Vec<usize> {
        let root = self.find(id);
        (0..self.parent.len())
            .filter(|&i| self.find(i) == root)
            .collect()
    }
}
