use crate::types::Node;

use super::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Rotates `x` above its parent, keeping the in-order sequence intact.
pub fn rotate<N: Node>(arena: &mut [N], x: u32) {
    let y = get_p(arena, x).expect("rotated node has a parent");
    let z = get_p(arena, y);

    set_p(arena, x, z);
    replace_child(arena, z, y, Some(x));

    if get_l(arena, y) == Some(x) {
        let xr = get_r(arena, x);
        set_l(arena, y, xr);
        if let Some(xr) = xr {
            set_p(arena, xr, Some(y));
        }
        set_r(arena, x, Some(y));
    } else {
        let xl = get_l(arena, x);
        set_r(arena, y, xl);
        if let Some(xl) = xl {
            set_p(arena, xl, Some(y));
        }
        set_l(arena, x, Some(y));
    }
    set_p(arena, y, Some(x));
}

/// Trinode restructuring of `x`, its parent `y` and grandparent `z`.
///
/// When the three are collinear (`x` and `y` on the same side) one rotation
/// of `y` suffices; otherwise `x` is rotated twice. Returns the median node,
/// which now sits where `z` was.
pub fn restructure<N: Node>(arena: &mut [N], x: u32) -> u32 {
    let y = get_p(arena, x).expect("restructured node has a parent");
    let z = get_p(arena, y).expect("restructured node has a grandparent");
    let x_right = get_r(arena, y) == Some(x);
    let y_right = get_r(arena, z) == Some(y);
    if x_right == y_right {
        rotate(arena, y);
        y
    } else {
        rotate(arena, x);
        rotate(arena, x);
        x
    }
}
