use std::fmt::Display;

use crate::tree::SearchTree;
use crate::types::PositionalTree;

struct Cell {
    label: String,
    col: usize,
    depth: usize,
}

impl Cell {
    fn center(&self) -> usize {
        self.col + (self.label.chars().count().max(1) - 1) / 2
    }
}

/// Renders the keys of `tree` on a 2D character grid.
///
/// A key at depth `d` sits on row `2 * d`, in a column given by its in-order
/// rank, so no two keys ever overlap. The row between a parent and its
/// children carries `/` and `\` connectors halfway between them.
///
/// ```text
///     C
///    / \
///   B   D
///  /     \
/// A       E
/// ```
pub fn render<K, V, C>(tree: &SearchTree<K, V, C>) -> String
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = tree.root() else {
        return String::new();
    };

    let mut ranks = vec![0usize; tree.arena().len()];
    let mut labels = Vec::with_capacity(tree.len());
    let mut curr = tree.first();
    while let Some(i) = curr {
        ranks[i as usize] = labels.len();
        labels.push(tree.key(i).to_string());
        curr = tree.next(i);
    }
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1) + 1;

    let mut cells: Vec<Option<Cell>> = (0..tree.arena().len()).map(|_| None).collect();
    let mut links = Vec::new();
    let mut stack = vec![(root, 0usize)];
    let mut max_depth = 0;
    while let Some((i, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        let rank = ranks[i as usize];
        cells[i as usize] = Some(Cell {
            label: std::mem::take(&mut labels[rank]),
            col: rank * width,
            depth,
        });
        if let Some(l) = tree.left(i) {
            links.push((i, l, '/'));
            stack.push((l, depth + 1));
        }
        if let Some(r) = tree.right(i) {
            links.push((i, r, '\\'));
            stack.push((r, depth + 1));
        }
    }

    let mut grid = vec![vec![' '; tree.len() * width]; 2 * max_depth + 1];
    for cell in cells.iter().flatten() {
        for (offset, ch) in cell.label.chars().enumerate() {
            grid[2 * cell.depth][cell.col + offset] = ch;
        }
    }
    for (parent, child, ch) in links {
        let (Some(p), Some(c)) = (&cells[parent as usize], &cells[child as usize]) else {
            continue;
        };
        grid[2 * p.depth + 1][(p.center() + c.center()) / 2] = ch;
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Search;

    #[test]
    fn empty_tree_renders_nothing() {
        let tree = SearchTree::<i32, ()>::new();
        assert_eq!(render(&tree), "");
    }

    #[test]
    fn wide_labels_do_not_overlap() {
        let mut tree = SearchTree::<i32, ()>::new();
        for k in [100, 5, 2000] {
            if let Search::Vacant { parent, left } = tree.search(&k) {
                tree.attach(parent, left, k, ());
            }
        }
        assert_eq!(render(&tree), "     100\n   /    \\\n5         2000");
    }
}
