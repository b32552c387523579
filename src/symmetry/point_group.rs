//! The 32 crystallographic point groups: classification of rotation sets,
//! canonical basis construction, and centering determination.

use std::fmt;

use anyhow::{self, bail, ensure, format_err};
use counter::Counter;
use lazy_static::lazy_static;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::symmetry::axis_catalog;
use crate::symmetry::rotation_matrix::{RotationMatrix, RotationType};
use crate::symmetry::transformation::TransformationMatrix;

#[cfg(test)]
#[path = "point_group_tests.rs"]
mod point_group_tests;

// ================
// Enum definitions
// ================

/// The point-group symmetry of the lattice alone: one of the seven crystal
/// systems' maximal symmetries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holohedry {
    None,
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    Trigonal,
    Hexagonal,
    Cubic,
}

impl fmt::Display for Holohedry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Holohedry::None => write!(f, "none"),
            Holohedry::Triclinic => write!(f, "triclinic"),
            Holohedry::Monoclinic => write!(f, "monoclinic"),
            Holohedry::Orthorhombic => write!(f, "orthorhombic"),
            Holohedry::Tetragonal => write!(f, "tetragonal"),
            Holohedry::Trigonal => write!(f, "trigonal"),
            Holohedry::Hexagonal => write!(f, "hexagonal"),
            Holohedry::Cubic => write!(f, "cubic"),
        }
    }
}

/// The Laue class: the point group of the diffraction pattern, always
/// centrosymmetric; one of eleven classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Laue {
    None,
    Laue1,
    Laue2M,
    LaueMmm,
    Laue4M,
    Laue4Mmm,
    Laue3,
    Laue3M,
    Laue6M,
    Laue6Mmm,
    LaueM3,
    LaueM3M,
}

impl Laue {
    /// The proper rotation type whose axes span the canonical basis of this
    /// Laue class (Table 5 of Grosse-Kunstleve, Acta Cryst. A55, 383–395,
    /// 1999). `None` for the triclinic classes, which take the identity
    /// basis.
    fn rotation_type_for_basis(self) -> Option<i32> {
        match self {
            Laue::None | Laue::Laue1 => None,
            Laue::Laue2M | Laue::LaueMmm | Laue::LaueM3 => Some(2),
            Laue::Laue4M | Laue::Laue4Mmm | Laue::LaueM3M => Some(4),
            Laue::Laue3 | Laue::Laue3M | Laue::Laue6M | Laue::Laue6Mmm => Some(3),
        }
    }
}

impl fmt::Display for Laue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Laue::None => write!(f, "none"),
            Laue::Laue1 => write!(f, "-1"),
            Laue::Laue2M => write!(f, "2/m"),
            Laue::LaueMmm => write!(f, "mmm"),
            Laue::Laue4M => write!(f, "4/m"),
            Laue::Laue4Mmm => write!(f, "4/mmm"),
            Laue::Laue3 => write!(f, "-3"),
            Laue::Laue3M => write!(f, "-3m"),
            Laue::Laue6M => write!(f, "6/m"),
            Laue::Laue6Mmm => write!(f, "6/mmm"),
            Laue::LaueM3 => write!(f, "m-3"),
            Laue::LaueM3M => write!(f, "m-3m"),
        }
    }
}

/// The centering type of a conventional cell: how many and which lattice
/// points the cell carries (International Tables, 1.2.1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Centering {
    /// One lattice point per cell.
    Primitive,

    /// Body centred (multiplicity two).
    Body,

    /// A-face centred (multiplicity two).
    AFace,

    /// B-face centred (multiplicity two).
    BFace,

    /// C-face centred (multiplicity two).
    CFace,

    /// All-face centred (multiplicity four).
    Face,

    /// Rhombohedrally centred in the hexagonal-axes description
    /// (multiplicity three).
    Rhombohedral,
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Centering::Primitive => write!(f, "P"),
            Centering::Body => write!(f, "I"),
            Centering::AFace => write!(f, "A"),
            Centering::BFace => write!(f, "B"),
            Centering::CFace => write!(f, "C"),
            Centering::Face => write!(f, "F"),
            Centering::Rhombohedral => write!(f, "R"),
        }
    }
}

// ==================
// Struct definitions
// ==================

/// A mapping from the ten rotation types to non-negative occurrence counts,
/// in the fixed order $`\bar{6}, \bar{4}, \bar{3}, \bar{2}, \bar{1},
/// 1, 2, 3, 4, 6`$.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccurrenceTable([usize; 10]);

impl OccurrenceTable {
    /// An all-zero table.
    pub const fn empty() -> Self {
        Self([0; 10])
    }

    /// Builds a table from counts given in the fixed type order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        i6: usize,
        i4: usize,
        i3: usize,
        i2: usize,
        i1: usize,
        p1: usize,
        p2: usize,
        p3: usize,
        p4: usize,
        p6: usize,
    ) -> Self {
        Self([i6, i4, i3, i2, i1, p1, p2, p3, p4, p6])
    }

    fn index(rotation_type: RotationType) -> usize {
        match rotation_type {
            RotationType::ImproperSixFold => 0,
            RotationType::ImproperFourFold => 1,
            RotationType::ImproperThreeFold => 2,
            RotationType::ImproperTwoFold => 3,
            RotationType::Inversion => 4,
            RotationType::Identity => 5,
            RotationType::TwoFold => 6,
            RotationType::ThreeFold => 7,
            RotationType::FourFold => 8,
            RotationType::SixFold => 9,
        }
    }

    /// The occurrence count of a rotation type.
    pub fn count(&self, rotation_type: RotationType) -> usize {
        self.0[Self::index(rotation_type)]
    }

    /// Builds the occurrence table of a set of rotations.
    ///
    /// # Errors
    ///
    /// Errors if any member fails rotation-type classification.
    pub fn from_rotations<'a, I>(rotations: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = &'a RotationMatrix>,
    {
        let counts: Counter<RotationType> = rotations
            .into_iter()
            .map(|rotation| rotation.rotation_type())
            .collect::<Result<Counter<_>, _>>()?;
        let mut table = Self::empty();
        for (rotation_type, count) in counts.iter() {
            table.0[Self::index(*rotation_type)] = *count;
        }
        Ok(table)
    }
}

/// One of the 32 crystallographic point groups, together with the reference
/// occurrence table that identifies it. Record 0 is the "no match" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PointGroup {
    /// The point-group number, 1–32 (0 for "no match").
    pub number: usize,

    /// The Hermann–Mauguin symbol.
    pub symbol: &'static str,

    /// The Schoenflies symbol.
    pub schoenflies: &'static str,

    /// The holohedry of the crystal system this point group belongs to.
    pub holohedry: Holohedry,

    /// The Laue class.
    pub laue: Laue,

    /// Whether the group contains the inversion.
    pub centrosymmetric: bool,

    /// Whether the group is enantiomorphic (chiral).
    pub enantiomorphic: bool,

    /// The reference occurrence table.
    pub table: OccurrenceTable,
}

/// The 33 reference records (index 0 reserved), process-wide constants.
#[rustfmt::skip]
pub static POINT_GROUP_DATA: [PointGroup; 33] = [
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 0, 0, 0, 0, 0), number: 0,  symbol: "",      schoenflies: "",    holohedry: Holohedry::None,         laue: Laue::None,     centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 0, 0, 0, 0), number: 1,  symbol: "1",     schoenflies: "C1",  holohedry: Holohedry::Triclinic,    laue: Laue::Laue1,    centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 1, 1, 0, 0, 0, 0), number: 2,  symbol: "-1",    schoenflies: "Ci",  holohedry: Holohedry::Triclinic,    laue: Laue::Laue1,    centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 1, 0, 0, 0), number: 3,  symbol: "2",     schoenflies: "C2",  holohedry: Holohedry::Monoclinic,   laue: Laue::Laue2M,   centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 1, 0, 1, 0, 0, 0, 0), number: 4,  symbol: "m",     schoenflies: "Cs",  holohedry: Holohedry::Monoclinic,   laue: Laue::Laue2M,   centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 1, 1, 1, 1, 0, 0, 0), number: 5,  symbol: "2/m",   schoenflies: "C2h", holohedry: Holohedry::Monoclinic,   laue: Laue::Laue2M,   centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 3, 0, 0, 0), number: 6,  symbol: "222",   schoenflies: "D2",  holohedry: Holohedry::Orthorhombic, laue: Laue::LaueMmm,  centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 2, 0, 1, 1, 0, 0, 0), number: 7,  symbol: "mm2",   schoenflies: "C2v", holohedry: Holohedry::Orthorhombic, laue: Laue::LaueMmm,  centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 3, 1, 1, 3, 0, 0, 0), number: 8,  symbol: "mmm",   schoenflies: "D2h", holohedry: Holohedry::Orthorhombic, laue: Laue::LaueMmm,  centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 1, 0, 2, 0), number: 9,  symbol: "4",     schoenflies: "C4",  holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4M,   centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 2, 0, 0, 0, 1, 1, 0, 0, 0), number: 10, symbol: "-4",    schoenflies: "S4",  holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4M,   centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 2, 0, 1, 1, 1, 1, 0, 2, 0), number: 11, symbol: "4/m",   schoenflies: "C4h", holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4M,   centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 5, 0, 2, 0), number: 12, symbol: "422",   schoenflies: "D4",  holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4Mmm, centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 4, 0, 1, 1, 0, 2, 0), number: 13, symbol: "4mm",   schoenflies: "C4v", holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4Mmm, centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 2, 0, 2, 0, 1, 3, 0, 0, 0), number: 14, symbol: "-42m",  schoenflies: "D2d", holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4Mmm, centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 2, 0, 5, 1, 1, 5, 0, 2, 0), number: 15, symbol: "4/mmm", schoenflies: "D4h", holohedry: Holohedry::Tetragonal,   laue: Laue::Laue4Mmm, centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 0, 2, 0, 0), number: 16, symbol: "3",     schoenflies: "C3",  holohedry: Holohedry::Trigonal,     laue: Laue::Laue3,    centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 2, 0, 1, 1, 0, 2, 0, 0), number: 17, symbol: "-3",    schoenflies: "C3i", holohedry: Holohedry::Trigonal,     laue: Laue::Laue3,    centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 3, 2, 0, 0), number: 18, symbol: "32",    schoenflies: "D3",  holohedry: Holohedry::Trigonal,     laue: Laue::Laue3M,   centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 3, 0, 1, 0, 2, 0, 0), number: 19, symbol: "3m",    schoenflies: "C3v", holohedry: Holohedry::Trigonal,     laue: Laue::Laue3M,   centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 2, 3, 1, 1, 3, 2, 0, 0), number: 20, symbol: "-3m",   schoenflies: "D3d", holohedry: Holohedry::Trigonal,     laue: Laue::Laue3M,   centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 1, 2, 0, 2), number: 21, symbol: "6",     schoenflies: "C6",  holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6M,   centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(2, 0, 0, 1, 0, 1, 0, 2, 0, 0), number: 22, symbol: "-6",    schoenflies: "C3h", holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6M,   centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(2, 0, 2, 1, 1, 1, 1, 2, 0, 2), number: 23, symbol: "6/m",   schoenflies: "C6h", holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6M,   centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 7, 2, 0, 2), number: 24, symbol: "622",   schoenflies: "D6",  holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6Mmm, centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 6, 0, 1, 1, 2, 0, 2), number: 25, symbol: "6mm",   schoenflies: "C6v", holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6Mmm, centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(2, 0, 0, 4, 0, 1, 3, 2, 0, 0), number: 26, symbol: "-6m",   schoenflies: "D3h", holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6Mmm, centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(2, 0, 2, 7, 1, 1, 7, 2, 0, 2), number: 27, symbol: "6/mmm", schoenflies: "D6h", holohedry: Holohedry::Hexagonal,    laue: Laue::Laue6Mmm, centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 3, 8, 0, 0), number: 28, symbol: "23",    schoenflies: "T",   holohedry: Holohedry::Cubic,        laue: Laue::LaueM3,   centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 0, 8, 3, 1, 1, 3, 8, 0, 0), number: 29, symbol: "m-3",   schoenflies: "Th",  holohedry: Holohedry::Cubic,        laue: Laue::LaueM3,   centrosymmetric: true,  enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 0, 0, 0, 0, 1, 9, 8, 6, 0), number: 30, symbol: "432",   schoenflies: "O",   holohedry: Holohedry::Cubic,        laue: Laue::LaueM3M,  centrosymmetric: false, enantiomorphic: true },
    PointGroup { table: OccurrenceTable::new(0, 6, 0, 6, 0, 1, 3, 8, 0, 0), number: 31, symbol: "-43m",  schoenflies: "Td",  holohedry: Holohedry::Cubic,        laue: Laue::LaueM3M,  centrosymmetric: false, enantiomorphic: false },
    PointGroup { table: OccurrenceTable::new(0, 6, 8, 9, 1, 1, 9, 8, 6, 0), number: 32, symbol: "m-3m",  schoenflies: "Oh",  holohedry: Holohedry::Cubic,        laue: Laue::LaueM3M,  centrosymmetric: true,  enantiomorphic: false },
];

lazy_static! {
    /// The generating rotations of each holohedry (required and optional),
    /// consumed by the space-group operation solver.
    static ref GENERATORS: [(Holohedry, Vec<RotationMatrix>, Vec<RotationMatrix>); 7] = [
        (Holohedry::Triclinic, vec![RotationMatrix::identity()], vec![]),
        (
            Holohedry::Monoclinic,
            vec![rot_2_001(), rot_2_100(), rot_2_010()],
            vec![],
        ),
        (Holohedry::Orthorhombic, vec![rot_2_001()], vec![rot_2_100()]),
        (Holohedry::Tetragonal, vec![rot_4_001()], vec![rot_2_100()]),
        (
            Holohedry::Trigonal,
            vec![rot_3_001(), rot_3_111()],
            vec![rot_2_prime_001(), rot_2_double_prime_001()],
        ),
        (Holohedry::Hexagonal, vec![rot_6_001()], vec![rot_2_double_prime_001()]),
        (Holohedry::Cubic, vec![rot_4_001(), rot_2_001()], vec![rot_3_111()]),
    ];
}

// Rotations about the principal and secondary axes, S.R. Hall, "Space-group
// notation with an explicit origin", Acta Cryst. A37, 517-525, 1981.

pub fn rot_2_100() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(1, 0, 0),
        Vector3::new(0, -1, 0),
        Vector3::new(0, 0, -1),
    )
}

pub fn rot_3_100() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(1, 0, 0),
        Vector3::new(0, 0, 1),
        Vector3::new(0, -1, -1),
    )
}

pub fn rot_4_100() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(1, 0, 0),
        Vector3::new(0, 0, 1),
        Vector3::new(0, -1, 0),
    )
}

pub fn rot_6_100() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(1, 0, 0),
        Vector3::new(0, 1, 1),
        Vector3::new(0, -1, 0),
    )
}

pub fn rot_2_010() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(-1, 0, 0),
        Vector3::new(0, 1, 0),
        Vector3::new(0, 0, -1),
    )
}

pub fn rot_3_010() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(-1, 0, -1),
        Vector3::new(0, 1, 0),
        Vector3::new(1, 0, 0),
    )
}

pub fn rot_4_010() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(0, 0, -1),
        Vector3::new(0, 1, 0),
        Vector3::new(1, 0, 0),
    )
}

pub fn rot_6_010() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(0, 0, -1),
        Vector3::new(0, 1, 0),
        Vector3::new(1, 0, 1),
    )
}

pub fn rot_2_001() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(-1, 0, 0),
        Vector3::new(0, -1, 0),
        Vector3::new(0, 0, 1),
    )
}

pub fn rot_3_001() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(0, 1, 0),
        Vector3::new(-1, -1, 0),
        Vector3::new(0, 0, 1),
    )
}

pub fn rot_4_001() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(0, 1, 0),
        Vector3::new(-1, 0, 0),
        Vector3::new(0, 0, 1),
    )
}

pub fn rot_6_001() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(1, 1, 0),
        Vector3::new(-1, 0, 0),
        Vector3::new(0, 0, 1),
    )
}

pub fn rot_3_111() -> RotationMatrix {
    RotationMatrix::from_columns(
        Vector3::new(0, 1, 0),
        Vector3::new(0, 0, 1),
        Vector3::new(1, 0, 0),
    )
}

pub fn rot_2_prime_001() -> RotationMatrix {
    // a-b
    RotationMatrix::from_columns(
        Vector3::new(0, -1, 0),
        Vector3::new(-1, 0, 0),
        Vector3::new(0, 0, -1),
    )
}

pub fn rot_2_double_prime_001() -> RotationMatrix {
    // a+b
    RotationMatrix::from_columns(
        Vector3::new(0, 1, 0),
        Vector3::new(1, 0, 0),
        Vector3::new(0, 0, -1),
    )
}

/// The generating rotations (required, optional) of a holohedry, consumed by
/// the space-group operation solver.
pub fn generators(holohedry: Holohedry) -> Option<(&'static [RotationMatrix], &'static [RotationMatrix])> {
    GENERATORS
        .iter()
        .find(|(h, _, _)| *h == holohedry)
        .map(|(_, required, optional)| (required.as_slice(), optional.as_slice()))
}

// ==============
// Classification
// ==============

impl PointGroup {
    /// The reference record for a point-group number, 1–32.
    pub fn from_number(number: usize) -> Option<&'static PointGroup> {
        (1..=32).contains(&number).then(|| &POINT_GROUP_DATA[number])
    }

    /// Classifies a set of rotations by matching its occurrence table for
    /// exact equality against the 32 reference tables.
    ///
    /// # Errors
    ///
    /// Errors if no reference table matches: this indicates a failure of the
    /// upstream symmetry search (an incomplete or spurious rotation set),
    /// not a valid "unknown" point group.
    pub fn from_rotations<'a, I>(rotations: I) -> Result<&'static PointGroup, anyhow::Error>
    where
        I: IntoIterator<Item = &'a RotationMatrix>,
    {
        let table = OccurrenceTable::from_rotations(rotations)?;
        POINT_GROUP_DATA[1..]
            .iter()
            .find(|point_group| point_group.table == table)
            .ok_or_else(|| {
                format_err!(
                    "No point group matches the rotation-type occurrence table {:?}.",
                    table
                )
            })
    }

    /// Constructs a canonical basis for this point group from the axis
    /// directions of its Laue-class-specific symmetry.
    ///
    /// The basic idea is to use the axes of the Laue-group-specific proper
    /// rotations as the new basis (Grosse-Kunstleve, Acta Cryst. A55,
    /// 383–395, 1999): the first qualifying axis of the required order as
    /// the principal axis, the shortest catalog vector orthogonal to it as
    /// the secondary axis, and the image of the secondary axis under the
    /// principal rotation as the tertiary axis, rejecting bases of
    /// determinant magnitude four to avoid spurious all-face-centred
    /// choices. The returned basis is right-handed.
    ///
    /// # Errors
    ///
    /// Errors if the rotation set does not carry the axes this Laue class
    /// requires, which indicates an inconsistent upstream classification.
    pub fn construct_axes(
        &self,
        rotations: &[RotationMatrix],
    ) -> Result<TransformationMatrix, anyhow::Error> {
        match self.laue {
            Laue::None | Laue::Laue1 => Ok(TransformationMatrix::identity()),
            Laue::Laue2M => {
                // The unique two-fold axis becomes b; the two shortest
                // orthogonal catalog vectors become a and c.
                let two_fold = self
                    .proper_rotations_of_type(rotations, 2)
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        format_err!("No proper two-fold rotation found for Laue class 2/m.")
                    })?;
                let principal = two_fold.rotation_axis()?;
                let mut orthogonal = two_fold.orthogonal_to_axis(2);
                ensure!(
                    orthogonal.len() >= 2,
                    "Fewer than two catalog vectors orthogonal to the two-fold axis."
                );
                let secondary = shortest_axis(&orthogonal);
                orthogonal.retain(|axis| *axis != secondary);
                let tertiary = shortest_axis(&orthogonal);
                let axes = TransformationMatrix::from_columns(secondary, principal, tertiary);
                if axes.determinant() < 0 {
                    Ok(axes.with_swapped_columns(0, 2))
                } else {
                    Ok(axes)
                }
            }
            Laue::LaueMmm | Laue::LaueM3 | Laue::LaueM3M => {
                // The axis directions are immediately available: take the
                // three highest-ranked distinct axes of the wanted order.
                let wanted = self
                    .laue
                    .rotation_type_for_basis()
                    .expect("A rotation type is defined for this Laue class.");
                let mut axes: Vec<Vector3<i32>> = Vec::new();
                for rotation in self.proper_rotations_of_type(rotations, wanted) {
                    let axis = rotation.rotation_axis()?;
                    if !axes.contains(&axis) {
                        axes.push(axis);
                    }
                }
                ensure!(
                    axes.len() >= 3,
                    "Laue class {} requires three distinct order-{wanted} axes, found {}.",
                    self.laue,
                    axes.len()
                );
                axes.sort_by_key(|axis| axis_catalog::axis_rank(axis));
                let basis = TransformationMatrix::from_columns(axes[0], axes[1], axes[2]);
                if basis.determinant() < 0 {
                    Ok(basis.with_swapped_columns(1, 2))
                } else {
                    Ok(basis)
                }
            }
            Laue::Laue4M
            | Laue::Laue4Mmm
            | Laue::Laue3
            | Laue::Laue3M
            | Laue::Laue6M
            | Laue::Laue6Mmm => {
                let wanted = self
                    .laue
                    .rotation_type_for_basis()
                    .expect("A rotation type is defined for this Laue class.");
                let principal_rotation = self
                    .proper_rotations_of_type(rotations, wanted)
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        format_err!(
                            "No proper order-{wanted} rotation found for Laue class {}.",
                            self.laue
                        )
                    })?;
                let principal = principal_rotation.rotation_axis()?;
                let orthogonal =
                    principal_rotation.orthogonal_to_axis(usize::try_from(wanted).expect("wanted > 0"));
                for secondary in orthogonal {
                    let tertiary = principal_rotation * secondary;
                    if axis_catalog::axis_rank(&tertiary).is_some()
                        || axis_catalog::axis_rank(&-tertiary).is_some()
                    {
                        let axes =
                            TransformationMatrix::from_columns(secondary, tertiary, principal);
                        // determinant magnitude 4 would be a spurious
                        // all-face-centred basis
                        if axes.determinant().abs() < 4 {
                            if axes.determinant() < 0 {
                                return Ok(axes.with_swapped_columns(0, 1));
                            }
                            return Ok(axes);
                        }
                    }
                }
                bail!(
                    "No valid secondary axis found for Laue class {}.",
                    self.laue
                )
            }
        }
    }

    fn proper_rotations_of_type(
        &self,
        rotations: &[RotationMatrix],
        wanted: i32,
    ) -> Vec<RotationMatrix> {
        rotations
            .iter()
            .map(RotationMatrix::proper)
            .filter(|rotation| {
                rotation
                    .rotation_type()
                    .map(|rotation_type| rotation_type.value() == wanted)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Deduces the centering type of a constructed basis from its
    /// determinant magnitude and columns.
    ///
    /// The determinant magnitude is the number of lattice points per
    /// conventional cell: 1 primitive; 2 one of the face centerings or body
    /// centred; 3 rhombohedral; 4 all-face centred.
    ///
    /// # Errors
    ///
    /// Errors for any other determinant, or when no centering pattern
    /// matches a determinant-two basis.
    pub fn compute_centering(
        &self,
        basis: &TransformationMatrix,
    ) -> Result<Centering, anyhow::Error> {
        let m = &basis.rotation.0;
        match basis.determinant().abs() {
            1 => Ok(Centering::Primitive),
            2 => {
                for i in 0..3 {
                    if m[(0, i)].abs() == 1 && m[(1, i)] == 0 && m[(2, i)] == 0 {
                        return Ok(Centering::AFace);
                    }
                }
                for i in 0..3 {
                    if m[(0, i)] == 0 && m[(1, i)].abs() == 1 && m[(2, i)] == 0 {
                        return Ok(Centering::BFace);
                    }
                }
                for i in 0..3 {
                    if m[(0, i)] == 0 && m[(1, i)] == 0 && m[(2, i)].abs() == 1 {
                        return Ok(Centering::CFace);
                    }
                }
                if m[(0, 0)].abs() + m[(1, 0)].abs() + m[(2, 0)].abs() == 2 {
                    return Ok(Centering::Body);
                }
                bail!("No centering pattern matches the determinant-two basis {basis}.")
            }
            3 => Ok(Centering::Rhombohedral),
            4 => Ok(Centering::Face),
            det => bail!("Basis {basis} has unsupported determinant magnitude {det}."),
        }
    }

    /// The correction matrix normalizing a centering choice that is not yet
    /// in the canonical convention, together with the corrected centering.
    ///
    /// A standard conventional cell is always C-centred: A-, B- and
    /// (monoclinic) body-centred choices are transformed to C. A reverse
    /// rhombohedral setting, detected via the greatest common divisor of a
    /// fixed integer matrix product, is transformed to obverse. The
    /// correction matrices are literal constants.
    pub fn basis_correction(
        &self,
        basis: &TransformationMatrix,
        centering: Centering,
    ) -> Result<(TransformationMatrix, Centering), anyhow::Error> {
        let laue = self.laue;
        match basis.determinant().abs() {
            1 | 4 => Ok((TransformationMatrix::identity(), centering)),
            2 => match centering {
                Centering::AFace if laue == Laue::Laue2M => {
                    // Monoclinic A to C, preserving the b axis: a and c are
                    // swapped and b is negated to keep the handedness (and
                    // beta obtuse).
                    Ok((
                        TransformationMatrix::from_columns(
                            Vector3::new(0, 0, 1),
                            Vector3::new(0, -1, 0),
                            Vector3::new(1, 0, 0),
                        ),
                        Centering::CFace,
                    ))
                }
                Centering::AFace => Ok((
                    // a to c
                    TransformationMatrix::from_columns(
                        Vector3::new(0, 1, 0),
                        Vector3::new(0, 0, 1),
                        Vector3::new(1, 0, 0),
                    ),
                    Centering::CFace,
                )),
                Centering::BFace => Ok((
                    // b to c
                    TransformationMatrix::from_columns(
                        Vector3::new(0, 0, 1),
                        Vector3::new(1, 0, 0),
                        Vector3::new(0, 1, 0),
                    ),
                    Centering::CFace,
                )),
                Centering::Body if laue == Laue::Laue2M => Ok((
                    // monoclinic i to c
                    TransformationMatrix::from_columns(
                        Vector3::new(1, 0, 1),
                        Vector3::new(0, 1, 0),
                        Vector3::new(-1, 0, 0),
                    ),
                    Centering::CFace,
                )),
                _ => Ok((TransformationMatrix::identity(), centering)),
            },
            3 => {
                let probe = RotationMatrix::from_columns(
                    Vector3::new(0, -1, 1),
                    Vector3::new(1, 0, -1),
                    Vector3::new(1, 1, 1),
                ) * basis.rotation.adjugate();
                if matrix_gcd(&probe) == 3 {
                    // reverse setting detected: change to obverse
                    Ok((
                        TransformationMatrix::from_columns(
                            Vector3::new(1, 1, 0),
                            Vector3::new(-1, 0, 0),
                            Vector3::new(0, 0, 1),
                        ),
                        centering,
                    ))
                } else {
                    Ok((TransformationMatrix::identity(), centering))
                }
            }
            det => bail!("Basis {basis} has unsupported determinant magnitude {det}."),
        }
    }
}

fn shortest_axis(axes: &[Vector3<i32>]) -> Vector3<i32> {
    axes.iter()
        .copied()
        .min_by_key(|axis| axis.dot(axis))
        .expect("The axis list is non-empty.")
}

fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn matrix_gcd(m: &RotationMatrix) -> i32 {
    m.0.iter().fold(0, |acc, v| gcd(acc, *v))
}
