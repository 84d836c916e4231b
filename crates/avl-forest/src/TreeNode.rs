use crate::types::{Augmented, KvNode, Node};

/// Arena node of the search tree.
#[derive(Clone, Debug)]
pub struct TreeNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Auxiliary slot. The AVL balance engine caches the subtree height here.
    /// A freshly attached leaf starts at 0 until the insert hook visits it.
    pub aux: i32,
}

impl<K, V> TreeNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            aux: 0,
        }
    }
}

impl<K, V> Node for TreeNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for TreeNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }
}

impl<K, V> Augmented for TreeNode<K, V> {
    fn aux(&self) -> i32 {
        self.aux
    }

    fn set_aux(&mut self, aux: i32) {
        self.aux = aux;
    }
}
