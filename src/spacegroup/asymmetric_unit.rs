//! The asymmetric units of the 230 space groups.
//!
//! Each space group carries one literal membership rule: a conjunction of
//! per-axis intervals with boundaries in twenty-fourths and, for a subset of
//! the higher-symmetry groups, an additional inequality mixing two or three
//! coordinates. There is no derivable closed form; the table is data,
//! auditable entry by entry.

use std::fmt;

use anyhow::{self, ensure};
use nalgebra::Vector3;

#[cfg(test)]
#[path = "asymmetric_unit_tests.rs"]
mod asymmetric_unit_tests;

type F32 = fraction::GenericFraction<u32>;

/// The default tolerance added to every boundary to absorb floating
/// round-off.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// An interval on one fractional axis, with the boundaries as numerators
/// over twenty-four. The lower end is always closed; the upper end may be
/// open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisInterval {
    /// The lower boundary, in twenty-fourths.
    pub lower: i32,

    /// The upper boundary, in twenty-fourths.
    pub upper: i32,

    /// Whether the upper end is open.
    pub upper_open: bool,
}

impl AxisInterval {
    /// An interval closed at both ends.
    pub const fn closed(lower: i32, upper: i32) -> Self {
        Self {
            lower,
            upper,
            upper_open: false,
        }
    }

    /// An interval with an open upper end.
    pub const fn open(lower: i32, upper: i32) -> Self {
        Self {
            lower,
            upper,
            upper_open: true,
        }
    }

    fn contains_raw(&self, v: f64, eps: f64) -> bool {
        let lower = f64::from(self.lower) / 24.0;
        let upper = f64::from(self.upper) / 24.0;
        if v < lower - eps {
            return false;
        }
        if self.upper_open {
            v < upper + eps
        } else {
            v <= upper + eps
        }
    }

    /// Whether the residue class of `w` (a coordinate wrapped into
    /// $`[-1/2, 1/2)`$) meets this interval: both representatives `w` and
    /// `w + 1` are tested, so boundaries symmetric around zero and
    /// boundaries within $`[0, 1]`$ are honoured alike.
    pub fn contains(&self, w: f64, eps: f64) -> bool {
        self.contains_raw(w, eps) || self.contains_raw(w + 1.0, eps)
    }

    /// The representative of the residue class of `w` lying inside this
    /// interval, preferring `w` itself; used to evaluate the extra
    /// inequality of a rule on the same representative that passed the
    /// interval test.
    pub fn representative(&self, w: f64, eps: f64) -> f64 {
        if self.contains_raw(w, eps) {
            w
        } else {
            w + 1.0
        }
    }
}

impl fmt::Display for AxisInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper_relation = if self.upper_open { "<" } else { "<=" };
        write!(
            f,
            "{}<={{}}{}{}",
            format_boundary(self.lower),
            upper_relation,
            format_boundary(self.upper)
        )
    }
}

fn format_boundary(numerator: i32) -> String {
    let value = F32::new(numerator.unsigned_abs(), 24u32);
    if numerator < 0 {
        format!("-{value}")
    } else {
        format!("{value}")
    }
}

/// The membership rule of one space group's asymmetric unit.
#[derive(Clone, Copy)]
pub struct AsymmetricUnit {
    /// The interval on x.
    pub x: AxisInterval,

    /// The interval on y.
    pub y: AxisInterval,

    /// The interval on z.
    pub z: AxisInterval,

    /// An additional inequality between the coordinates, where the published
    /// unit is not a box.
    pub extra: Option<fn(&Vector3<f64>, f64) -> bool>,
}

impl AsymmetricUnit {
    const fn boxed(x: AxisInterval, y: AxisInterval, z: AxisInterval) -> Self {
        Self {
            x,
            y,
            z,
            extra: None,
        }
    }

    const fn bounded(
        x: AxisInterval,
        y: AxisInterval,
        z: AxisInterval,
        extra: fn(&Vector3<f64>, f64) -> bool,
    ) -> Self {
        Self {
            x,
            y,
            z,
            extra: Some(extra),
        }
    }

    /// Whether a fractional point lies inside this asymmetric unit, within
    /// the tolerance `eps` on every boundary.
    ///
    /// The point is first wrapped per axis into the centred cell,
    /// $`w = v - \mathrm{round}(v) \in [-1/2, 1/2)`$, and each interval is
    /// tested against both representatives of the residue class. The extra
    /// inequality, if any, is evaluated on the in-interval representatives.
    pub fn contains(&self, point: &Vector3<f64>, eps: f64) -> bool {
        let w = point.map(|v| v - v.round());
        if !(self.x.contains(w.x, eps) && self.y.contains(w.y, eps) && self.z.contains(w.z, eps)) {
            return false;
        }
        match self.extra {
            None => true,
            Some(extra) => {
                let u = Vector3::new(
                    self.x.representative(w.x, eps),
                    self.y.representative(w.y, eps),
                    self.z.representative(w.z, eps),
                );
                extra(&u, eps)
            }
        }
    }
}

impl fmt::Display for AsymmetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.x.to_string().replace("{}", "x");
        let y = self.y.to_string().replace("{}", "y");
        let z = self.z.to_string().replace("{}", "z");
        write!(f, "{x}; {y}; {z}")?;
        if self.extra.is_some() {
            write!(f, "; ...")?;
        }
        Ok(())
    }
}

/// Whether a fractional point lies inside the asymmetric unit of the given
/// space group, within the default tolerance.
///
/// # Errors
///
/// Errors for a space-group number outside 1-230.
pub fn contains(space_group_number: usize, point: &Vector3<f64>) -> Result<bool, anyhow::Error> {
    contains_with_tolerance(space_group_number, point, DEFAULT_TOLERANCE)
}

/// Whether a fractional point lies inside the asymmetric unit of the given
/// space group, within `eps`.
///
/// # Errors
///
/// Errors for a space-group number outside 1-230.
pub fn contains_with_tolerance(
    space_group_number: usize,
    point: &Vector3<f64>,
    eps: f64,
) -> Result<bool, anyhow::Error> {
    Ok(asymmetric_unit(space_group_number)?.contains(point, eps))
}

/// The asymmetric-unit rule of the given space group.
///
/// # Errors
///
/// Errors for a space-group number outside 1-230.
pub fn asymmetric_unit(
    space_group_number: usize,
) -> Result<&'static AsymmetricUnit, anyhow::Error> {
    ensure!(
        (1..=230).contains(&space_group_number),
        "{space_group_number} is not a space-group number (expected 1-230)."
    );
    Ok(&ASYMMETRIC_UNIT_DATA[space_group_number])
}

fn in_range(lower: f64, upper: f64, v: f64, eps: f64) -> bool {
    lower - eps <= v && v <= upper + eps
}

// The extra inequalities of the non-box units. The simple wedges are named
// after their constraint; each trigonal and cubic predicate is named after
// the first space group it serves.

/// $`x \le y`$.
fn x_le_y(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= u.y + eps
}

/// $`y \le x`$.
fn y_le_x(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x + eps
}

/// $`y \le 1/2 - x`$.
fn y_le_half_minus_x(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= 0.5 - u.x + eps
}

/// $`x \le y \le 1 - x`$.
fn between_diagonals(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= u.y + eps && u.y <= 1.0 - u.x + eps
}

/// $`x \le y \le 1/2 - x`$.
fn x_le_y_le_half_minus_x(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= u.y + eps && u.y <= 0.5 - u.x + eps
}

/// $`y \le x`$ and $`z \le y`$.
fn y_le_x_z_le_y(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x + eps && u.z <= u.y + eps
}

/// $`z \le \min(x, y)`$.
fn z_le_min_x_y(u: &Vector3<f64>, eps: f64) -> bool {
    u.z <= u.x.min(u.y) + eps
}

/// $`x \le (1 + y)/2`$ and $`y \le \min(1 - x, (1 + x)/2)`$.
fn extra_143(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= (1.0 + u.y) / 2.0 + eps && u.y <= (1.0 - u.x).min((1.0 + u.x) / 2.0) + eps
}

/// $`x \le 2y`$ and $`y \le \min(1 - x, 2x)`$.
fn extra_156(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= 2.0 * u.y + eps && u.y <= (1.0 - u.x).min(2.0 * u.x) + eps
}

/// $`x \le (1 + y)/2`$ and $`y \le \min(1 - x, x)`$.
fn extra_157(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= (1.0 + u.y) / 2.0 + eps && u.y <= (1.0 - u.x).min(u.x) + eps
}

/// $`x \le (1 + y)/2`$ and $`y \le x/2`$.
fn extra_164(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= (1.0 + u.y) / 2.0 + eps && u.y <= u.x / 2.0 + eps
}

/// $`x \le 2y`$ and $`y \le \min(1 - x, x)`$.
fn extra_194(u: &Vector3<f64>, eps: f64) -> bool {
    u.x <= 2.0 * u.y + eps && u.y <= (1.0 - u.x).min(u.x) + eps
}

/// $`y \le 1 - x`$ and $`z \le \min(x, y)`$.
fn extra_195(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= 1.0 - u.x + eps && u.z <= u.x.min(u.y) + eps
}

/// $`y \le x`$ and $`\max(x - 1/2, -y) \le z \le \min(1/2 - x, y)`$.
fn extra_196(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x + eps && in_range((u.x - 0.5).max(-u.y), (0.5 - u.x).min(u.y), u.z, eps)
}

/// $`y \le \min(x, 1 - x)`$ and $`z \le y`$.
fn extra_197(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x.min(1.0 - u.x) + eps && u.z <= u.y + eps
}

/// $`\max(x - 1/2, -y) \le z \le \min(x, y)`$.
fn extra_198(u: &Vector3<f64>, eps: f64) -> bool {
    in_range((u.x - 0.5).max(-u.y), u.x.min(u.y), u.z, eps)
}

/// $`y \le x`$ and $`z \le \min(1/2 - x, y)`$.
fn extra_202(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x + eps && u.z <= (0.5 - u.x).min(u.y) + eps
}

/// $`y \le \min(x, 1/2 - x)`$ and $`-y \le z \le y`$.
fn extra_203(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x.min(0.5 - u.x) + eps && in_range(-u.y, u.y, u.z, eps)
}

/// $`z \le \min(x, 1/2 - x, 1/2 - y)`$.
fn extra_206(u: &Vector3<f64>, eps: f64) -> bool {
    u.z <= u.x.min(0.5 - u.x).min(0.5 - u.y) + eps
}

/// $`\max(-x, x - 1/2, -y, y - 1/2) \le z \le \min(x, 1/2 - x, 1/2 - y)`$.
fn extra_208(u: &Vector3<f64>, eps: f64) -> bool {
    in_range(
        (-u.x).max(u.x - 0.5).max(-u.y).max(u.y - 0.5),
        u.x.min(0.5 - u.x).min(0.5 - u.y),
        u.z,
        eps,
    )
}

/// $`y \le \min(x, 1/2 - x)`$ and $`-y \le z \le \min(x, 1/2 - x)`$.
fn extra_210(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x.min(0.5 - u.x) + eps && in_range(-u.y, u.x.min(0.5 - u.x), u.z, eps)
}

/// $`z \le \min(x, 1/2 - x, y, 1/2 - y)`$.
fn extra_211(u: &Vector3<f64>, eps: f64) -> bool {
    u.z <= u.x.min(0.5 - u.x).min(u.y).min(0.5 - u.y) + eps
}

/// $`\max(-y, x - 1/2) \le z \le \min(1/2 - y, 2x - y, 2y - x, y - 2x + 1/2)`$.
fn extra_212(u: &Vector3<f64>, eps: f64) -> bool {
    in_range(
        (-u.y).max(u.x - 0.5),
        (0.5 - u.y)
            .min(2.0 * u.x - u.y)
            .min(2.0 * u.y - u.x)
            .min(u.y - 2.0 * u.x + 0.5),
        u.z,
        eps,
    )
}

/// $`x \le y \le x + 1/2`$ and
/// $`(y - x)/2 \le z \le \min(y, (3 - 4x - 2y)/2, (3 - 2x - 2y)/4)`$.
fn extra_213(u: &Vector3<f64>, eps: f64) -> bool {
    in_range(u.x, u.x + 0.5, u.y, eps)
        && in_range(
            (u.y - u.x) / 2.0,
            u.y.min((-4.0 * u.x - 2.0 * u.y + 3.0) / 2.0)
                .min((3.0 - 2.0 * u.x - 2.0 * u.y) / 4.0),
            u.z,
            eps,
        )
}

/// $`\max(x, y, y - x - 1/8) \le z \le y + 1/4`$.
fn extra_214(u: &Vector3<f64>, eps: f64) -> bool {
    in_range(u.x.max(u.y).max(u.y - u.x - 0.125), u.y + 0.25, u.z, eps)
}

/// $`y \le \min(x, 1 - x)`$ and $`-y \le z \le y`$.
fn extra_216(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x.min(1.0 - u.x) + eps && in_range(-u.y, u.y, u.z, eps)
}

/// $`y \le \min(x, 1/2 - x)`$ and $`z \le y`$.
fn extra_225(u: &Vector3<f64>, eps: f64) -> bool {
    u.y <= u.x.min(0.5 - u.x) + eps && u.z <= u.y + eps
}

/// $`\max(x, -x, y, -y) \le z`$.
fn extra_230(u: &Vector3<f64>, eps: f64) -> bool {
    u.x.max(-u.x).max(u.y).max(-u.y) <= u.z + eps
}

/// The 231 asymmetric-unit records (index 0 is an unused placeholder), one
/// per space-group number in its standard setting.
#[rustfmt::skip]
pub static ASYMMETRIC_UNIT_DATA: [AsymmetricUnit; 231] = [
    // index 0: unused
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 24)),

    // Triclinic groups
    // [1] P 1 (P 1)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 24)),
    // [2] P -1 (-P 1)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 24)),

    // Monoclinic groups
    // [3] P 1 2 1 unique b axis (P 2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [4] P 1 21 1 unique b axis (P 2yb)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [5] C 1 2 1 unique b axis: cell choice 1 (C 2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [6] P 1 m 1 unique b axis (P -2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [7] P 1 c 1 unique b axis: cell choice 1 (P -2yc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [8] C 1 m 1 unique b axis: cell choice 1 (C -2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [9] C 1 c 1 unique b axis: cell choice 1 (C -2yc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [10] P 1 2/m 1 unique b axis (-P 2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [11] P 1 21/m 1 unique axis b (-P 2yb)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [12] C 1 2/m 1 unique b axis: cell choice 1 (-C 2y)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [13] P 1 2/c 1 unique b axis: cell choice 1 (-P 2yc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [14] P 1 21/c 1 unique b axis: cell choice 1 (-P 2ybc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [15] C 1 2/c 1 unique b axis: cell choice 1 (-C 2yc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),

    // Orthorhombic groups
    // [16] P 2 2 2 (P 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [17] P 2 2 21 Origin-1,abc (P 2c 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [18] P 21 21 2 Origin-1,abc (P 2 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [19] P 21 21 21 (P 2ac 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [20] C 2 2 21 Origin-1,abc (C 2c 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [21] C 2 2 2 Origin-1,abc (C 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [22] F 2 2 2 (F 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [23] I 2 2 2 (I 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [24] I 21 21 21 (I 2b 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [25] P m m 2 (P 2 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [26] P m c 21 (P 2c -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [27] P c c 2 (P 2 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [28] P m a 2 (P 2 -2a)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 24), AxisInterval::closed(0, 24)),
    // [29] P c a 21 (P 2c -2ac)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 24), AxisInterval::closed(0, 24)),
    // [30] P n c 2 (P 2 -2bc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [31] P m n 21 (P 2ac -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [32] P b a 2 (P 2 -2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [33] P n a 21 (P 2c -2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [34] P n n 2 (P 2 -2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [35] C m m 2 (C 2 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [36] C m c 21 (C 2c -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [37] C c c 2 (C 2 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [38] A m m 2 (A 2 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [39] A b m 2 (A 2 -2b)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [40] A m a 2 (A 2 -2a)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [41] A b a 2 (A 2 -2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [42] F m m 2 (F 2 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [43] F d d 2 (F 2 -2d)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [44] I m m 2 (I 2 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [45] I b a 2 (I 2 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [46] I m a 2 (I 2 -2a)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [47] P m m m (-P 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [48] P n n n Origin choice 1 (P 2 2 -1n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [49] P c c m (-P 2 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [50] P b a n Origin choice 1 (P 2 2 -1ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [51] P m m a (-P 2a 2a)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [52] P n n a (-P 2a 2bc)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), AxisInterval::closed(0, 12)),
    // [53] P m n a (-P 2ac 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [54] P c c a (-P 2a 2ac)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [55] P b a m (-P 2 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [56] P c c n (-P 2ab 2ac)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12)),
    // [57] P b c m (-P 2c 2b)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [58] P n n m (-P 2 2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [59] P m m n Origin choice 1 (P 2 2ab -1ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [60] P b c n (-P 2n 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [61] P b c a (-P 2ac 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [62] P n m a (-P 2ac 2n) zeolites: MFI
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [63] C m c m (-C 2c 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [64] C m c a (-C 2ac 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [65] C m m m (-C 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [66] C c c m (-C 2 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [67] C m m a (-C 2a 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 12)),
    // [68] C c c a Origin choice 1 (C 2 2 -1ac)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [69] F m m m (-F 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 12)),
    // [70] F d d d:1 Origin choice 1 (F 2 2 -1d)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 3), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [71] I m m m (-I 2 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [72] I b a m (-I 2 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [73] I b c a (-I 2b 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [74] I m m a (-I 2b 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),

    // Tetragonal groups
    // [75] P 4 (P 4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [76] P 41 (P 4w)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [77] P 42 (P 4c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [78] P 43 (P 4cw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [79] I 4 (I 4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [80] I 41 (I 4bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [81] P -4 (P -4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24)),
    // [82] I -4 (I -4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [83] P 4/m (-P 4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [84] P 42/m (-P 4c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [85] P 4/n Origin choice 1 (P 4ab -1ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [86] P 42/n Origin choice 1 (P 4n -1n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [87] I 4/m (-I 4)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [88] I 41/a Origin choice 1 (I 4bw -1bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), AxisInterval::closed(0, 24)),
    // [89] P 4 2 2 (P 4 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [90] P 4 21 2 (P 4ab 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [91] P 41 2 2 (P 4w 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [92] P 41 21 2 (P 4abw 2nw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [93] P 42 2 2 (P 4c 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [94] P 42 21 2 (P 4n 2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [95] P 43 2 2 (P 4cw 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [96] P 43 21 2 (P 4nw 2abw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [97] I 4 2 2 (I 4 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [98] I 41 2 2 (I 4bw 2bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [99] P 4 m m (P 4 -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), x_le_y),
    // [100] P 4 b m (P 4 -2ab)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), y_le_half_minus_x),
    // [101] P 42 c m (P 4c -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), x_le_y),
    // [102] P 42 n m (P 4n -2n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), x_le_y),
    // [103] P 4 c c (P 4 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [104] P 4 n c (P 4 -2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [105] P 42 m c (P 4c -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [106] P 42 b c (P 4c -2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [107] I 4 m m (I 4 -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), x_le_y),
    // [108] I 4 c m (I 4 -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_half_minus_x),
    // [109] I 41 m d (I 4bw -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [110] I 41 c d (I 4bw -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [111] P -4 2 m (P -4 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), x_le_y),
    // [112] P -4 2 c (P -4 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [113] P -4 21 m (P -4 2ab)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), y_le_half_minus_x),
    // [114] P -4 21 c (P -4 2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [115] P -4 m 2 (P -4 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [116] P -4 c 2 (P -4 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [117] P -4 b 2 (P -4 -2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12)),
    // [118] P -4 n 2 (P -4 -2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6)),
    // [119] I -4 m 2 (I -4 -2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [120] I -4 c 2 (I -4 -2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [121] I -4 2 m (I -4 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), x_le_y),
    // [122] I -4 2 d (I -4 2bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 3)),
    // [123] P 4/m m m (-P 4 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), x_le_y),
    // [124] P 4/m c c (-P 4 2c)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [125] P 4/n b m Origin choice 1 (P 4 2 -1ab)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_half_minus_x),
    // [126] P 4/n n c Origin choice 1 (P 4 2 -1n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [127] P 4/m b m (-P 4 2ab)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_half_minus_x),
    // [128] P 4/m n c (-P 4 2n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [129] P 4/n m m Origin choice 1 (P 4ab 2ab -1ab)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_half_minus_x),
    // [130] P 4/n c c Origin choice 1 (P 4ab 2n -1ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [131] P 42/m m c (-P 4c 2)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [132] P 42/m c m (-P 4c 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), x_le_y),
    // [133] P 42/n b c Origin choice 1 (P 4n 2c -1n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [134] P 42/n n m Origin choice 1 (P 4n 2 -1n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), AxisInterval::closed(0, 6), between_diagonals),
    // [135] P 42/m b c (-P 4c 2ab)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [136] P 42/m n m (-P 4n 2n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), x_le_y),
    // [137] P 42/n m c Origin choice 1 (P 4n 2n -1n)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6)),
    // [138] P 42/n c m Origin choice 1 (P 4n 2ab -1n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 6), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), x_le_y_le_half_minus_x),
    // [139] I 4/m m m (-I 4 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), x_le_y),
    // [140] I 4/m c m (-I 4 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), y_le_half_minus_x),
    // [141] I 41/a m d Origin choice 1 (I 4bw 2bw -1bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 3)),
    // [142] I 41/a c d Origin choice 1 (I 4bw 2aw -1bw)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 3)),

    // Trigonal groups
    // [143] P 3 (P 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 24), extra_143),
    // [144] P 31 (P 31)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 8)),
    // [145] P 32 (P 32)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 8)),
    // [146] R 3 hexagonal axes (R 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), extra_143),
    // [147] P -3 (P -3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [148] R-3 hexagonal axes (-R 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 4), extra_143),
    // [149] P 3 1 2 (P 3 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [150] P 3 2 1 (P 3 2")
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [151] P 31 1 2 (P 31 2 (0 0 4))
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [152] P 31 2 1 (P 31 2")
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [153] P 32 1 2 (P 32 2 (0 0 2))
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [154] P 32 2 1 (P 32 2")
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [155] R 3 2 Hexagonal axes (R 3 2")
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 4), extra_143),
    // [156] P 3 m 1 (P 3 -2")
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 24), extra_156),
    // [157] P 3 1 m (P 3 -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), extra_157),
    // [158] P 3 c 1 (P 3 -2"c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [159] P 3 1 c (P 3 -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [160] R 3 m Hexagonal axes (R 3 -2")
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), extra_156),
    // [161] R 3 c Hexagonal axes (R 3 -2"c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 4), extra_143),
    // [162] P -3 1 m (-P 3 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [163] P -3 1 c (-P 3 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_143),
    // [164] P -3 m 1 (-P 3 2")
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), AxisInterval::closed(0, 24), extra_164),
    // [165] P -3 c 1 (-P 3 2"c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_143),
    // [166] R -3 m Hexagonal axes (-R 3 2") zeolites: CHA
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 4), extra_156),
    // [167] R -3 c Hexagonal axes (-R 3 2"c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 2), extra_143),

    // Hexagonal groups
    // [168] P 6 (P 6)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 24), extra_157),
    // [169] P 61 (P 61)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [170] P 65 (P 65)
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4)),
    // [171] P 62 (P 62)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 8), y_le_x),
    // [172] P 64 (P 64)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 8), y_le_x),
    // [173] P 63 (P 6c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [174] P -6 (P -6)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_143),
    // [175] P6/m (-P 6)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [176] P 63/m (-P 6c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_143),
    // [177] P 6 2 2 (P 6 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [178] P 61 2 2 (P 61 2 (0 0 5))
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 2)),
    // [179] P 65 2 2 (P 65 2 (0 0 1))
    AsymmetricUnit::boxed(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 2)),
    // [180] P 62 2 2 (P 62 2 (0 0 4))
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4), y_le_x),
    // [181] P 64 2 2 (P 64 2 (0 0 2))
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 4), y_le_x),
    // [182] P 63 2 2 (P 6c 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_143),
    // [183] P 6 m m (P 6 -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), AxisInterval::closed(0, 24), extra_164),
    // [184] P 6 c c (P 6 -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [185] P 63 c m (P 6c -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [186] P 63 m c (P 6c -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), AxisInterval::closed(0, 24), extra_164),
    // [187] P -6 m 2 (P -6 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), extra_156),
    // [188] P -6 c 2 (P -6c 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_143),
    // [189] P -6 2 m (P -6 -2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_157),
    // [190] P -6 2 c (P -6c -2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_143),
    // [191] P 6/m m m (-P 6 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 8), AxisInterval::closed(0, 12), extra_164),
    // [192] P 6/m c c (-P 6 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_157),
    // [193] P 63/m c m (-P 6c 2)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_157),
    // [194] P 63/m m c (-P 6c 2c)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 16), AxisInterval::closed(0, 16), AxisInterval::closed(0, 6), extra_194),

    // Cubic groups
    // [195] P 2 3 (P 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), extra_195),
    // [196] F 2 3 (F 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(-6, 6), extra_196),
    // [197] I 2 3 (I 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_197),
    // [198] P 21 3 (P 2ac 2ab 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(-12, 12), extra_198),
    // [199] I 21 3 (I 2b 2c 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), z_le_min_x_y),
    // [200] P m -3 (-P 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), z_le_min_x_y),
    // [201] P n -3 Origin choice 1 (P 2 2 3 -1n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_197),
    // [202] F m -3 (-F 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_202),
    // [203] F d -3 Origin choice 1 (F 2 2 3 -1d)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(-6, 6), extra_203),
    // [204] I m -3 (-I 2 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), y_le_x_z_le_y),
    // [205] P a -3 (-P 2ac 2ab 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), z_le_min_x_y),
    // [206] I a -3 (-I 2b 2c 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_206),
    // [207] P 4 3 2 (P 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_197),
    // [208] P 42 3 2 (P 4n 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(-6, 6), extra_208),
    // [209] F 4 3 2 (F 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(-6, 6), extra_203),
    // [210] F 41 3 2 (F 4d 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 3), AxisInterval::closed(-3, 3), AxisInterval::closed(0, 24), extra_210),
    // [211] I 4 3 2 (I 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_211),
    // [212] P 43 3 2 (P 4acd 2ab 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 18), AxisInterval::closed(-12, 6), extra_212),
    // [213] P 41 3 2 (P 4bd 2ab 3)
    AsymmetricUnit::bounded(AxisInterval::closed(-6, 12), AxisInterval::closed(0, 18), AxisInterval::closed(0, 12), extra_213),
    // [214] I 41 3 2 (I 4bd 2c 3)
    AsymmetricUnit::bounded(AxisInterval::closed(-9, 3), AxisInterval::closed(-3, 3), AxisInterval::closed(-3, 9), extra_214),
    // [215] P -4 3 m (P -4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 24), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_197),
    // [216] F -4 3 m (F -4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(-6, 6), extra_216),
    // [217] I -4 3 m (I -4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_x_z_le_y),
    // [218] P -4 3 n (P -4n 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), z_le_min_x_y),
    // [219] F -4 3 c (F -4a 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(-6, 6), extra_203),
    // [220] I -4 3 d (I -4bd 2c 3)
    AsymmetricUnit::bounded(AxisInterval::closed(6, 12), AxisInterval::closed(6, 12), AxisInterval::closed(0, 12), z_le_min_x_y),
    // [221] P m -3 m (-P 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), y_le_x_z_le_y),
    // [222] P n -3 n Origin choice 1 (P 4 2 3 -1n)
    AsymmetricUnit::bounded(AxisInterval::closed(6, 18), AxisInterval::closed(6, 18), AxisInterval::closed(6, 18), y_le_x_z_le_y),
    // [223] P m -3 n (-P 4n 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), extra_206),
    // [224] P n -3 m Origin choice 1 (P 4n 2 3 -1n)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(-6, 6), extra_196),
    // [225] F m -3 m (-F 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), extra_225),
    // [226] F m -3 c (-F 4a 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), AxisInterval::closed(0, 6), extra_225),
    // [227] F d -3 m Origin choice 1 (F 4d 2 3 -1d)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 3), AxisInterval::closed(-3, 3), extra_203),
    // [228] F d -3 c Origin choice 1 (F 4d 2 3 -1ad)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 3), AxisInterval::closed(-3, 3), extra_203),
    // [229] I m -3 m (-I 4 2 3)
    AsymmetricUnit::bounded(AxisInterval::closed(0, 12), AxisInterval::closed(0, 12), AxisInterval::closed(0, 6), extra_202),
    // [230] I a -3 d (-I 4bd 2c 3)
    AsymmetricUnit::bounded(AxisInterval::closed(-3, 3), AxisInterval::closed(-3, 3), AxisInterval::closed(0, 6), extra_230),
];
