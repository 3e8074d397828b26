use crate::error::{Error, Result};

/// Disjoint set union over `0..n` with full path compression and union by size.
///
/// Built once per partitioning run; the backing vectors never grow.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    parent: Vec<usize>,
    count: Vec<usize>, // subtree size, only meaningful at roots
    components: usize,
    hops: u64,
}

impl DisjointSetUnion {
    #[inline]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: vec![1; n],
            components: n,
            hops: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently represented.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node on the walk is re-pointed directly at the root. Panics when
    /// `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        assert!(
            x < self.parent.len(),
            "union-find index {x} out of range (len {})",
            self.parent.len()
        );
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
            self.hops += 1;
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Checked form of [`find`](Self::find) for indices from untrusted input.
    pub fn try_find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            return Err(Error::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(self.find(x))
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// The smaller root is attached under the larger one; on a tie `y`'s root
    /// goes under `x`'s root. Calling it again for the same pair is a no-op.
    pub fn union(&mut self, x: usize, y: usize) {
        let xr = self.find(x);
        let yr = self.find(y);
        if xr == yr {
            return;
        }
        if self.count[xr] < self.count[yr] {
            self.parent[xr] = yr;
            self.count[yr] += self.count[xr];
        } else {
            self.parent[yr] = xr;
            self.count[xr] += self.count[yr];
        }
        self.components -= 1;
    }

    #[inline]
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing `x`.
    #[inline]
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.count[root]
    }

    /// Total parent-pointer hops taken by `find` since construction or the
    /// last reset. Used to check amortized cost without timing.
    #[inline]
    pub fn find_hops(&self) -> u64 {
        self.hops
    }

    #[inline]
    pub fn reset_find_hops(&mut self) {
        self.hops = 0;
    }
}
