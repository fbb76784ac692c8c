//! Die catalog.
//!
//! The five Platonic solids as a closed, process-wide constant table. Each
//! [`DieKind`] discriminant is the die's face count, so the identity and the
//! face count can never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DiceError;

/// Identity of a supported die.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum DieKind {
    /// 4 faces.
    Tetrahedron = 4,
    /// 6 faces.
    #[default]
    Cube = 6,
    /// 8 faces.
    Octahedron = 8,
    /// 12 faces.
    Dodecahedron = 12,
    /// 20 faces.
    Icosahedron = 20,
}

impl DieKind {
    /// All dice, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Tetrahedron,
        Self::Cube,
        Self::Octahedron,
        Self::Dodecahedron,
        Self::Icosahedron,
    ];

    /// Number of faces on this die.
    #[must_use]
    pub const fn faces(self) -> u32 {
        self as u32
    }

    /// Lowercase name used on the command line and in config files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        }
    }

    /// Catalog entry for this die.
    #[must_use]
    pub fn definition(self) -> &'static DieDefinition {
        match self {
            Self::Tetrahedron => &CATALOG[0],
            Self::Cube => &CATALOG[1],
            Self::Octahedron => &CATALOG[2],
            Self::Dodecahedron => &CATALOG[3],
            Self::Icosahedron => &CATALOG[4],
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DieKind {
    type Err = DiceError;

    /// Accepts the catalog key (`cube`) or dice notation (`d6`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();

        if let Some(faces) = needle.strip_prefix('d') {
            if let Some(def) = faces.parse().ok().and_then(find_by_faces) {
                return Ok(def.kind);
            }
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == needle)
            .ok_or_else(|| DiceError::UnknownDie(s.to_string()))
    }
}

/// Icon outline the front end draws for a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconShape {
    /// Tetrahedron icon.
    Triangle,
    /// Cube icon.
    Square,
    /// Octahedron icon.
    Diamond,
    /// Dodecahedron icon.
    Pentagon,
    /// Icosahedron icon.
    Hexagon,
}

/// Immutable description of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DieDefinition {
    /// Stable identity.
    pub kind: DieKind,
    /// Face count, always equal to `kind.faces()`.
    pub faces: u32,
    /// Display name.
    pub name: &'static str,
    /// Short description of the solid.
    pub description: &'static str,
    /// Icon shape.
    pub icon: IconShape,
}

impl DieDefinition {
    /// Probability of any single face on a fair roll.
    #[must_use]
    pub fn theoretical_probability(&self) -> f64 {
        1.0 / f64::from(self.faces)
    }
}

static CATALOG: [DieDefinition; 5] = [
    DieDefinition {
        kind: DieKind::Tetrahedron,
        faces: DieKind::Tetrahedron.faces(),
        name: "Tetrahedron",
        description: "4 faces (triangular pyramid)",
        icon: IconShape::Triangle,
    },
    DieDefinition {
        kind: DieKind::Cube,
        faces: DieKind::Cube.faces(),
        name: "Cube",
        description: "6 faces (classic cube)",
        icon: IconShape::Square,
    },
    DieDefinition {
        kind: DieKind::Octahedron,
        faces: DieKind::Octahedron.faces(),
        name: "Octahedron",
        description: "8 faces (bipyramid)",
        icon: IconShape::Diamond,
    },
    DieDefinition {
        kind: DieKind::Dodecahedron,
        faces: DieKind::Dodecahedron.faces(),
        name: "Dodecahedron",
        description: "12 faces (pentagons)",
        icon: IconShape::Pentagon,
    },
    DieDefinition {
        kind: DieKind::Icosahedron,
        faces: DieKind::Icosahedron.faces(),
        name: "Icosahedron",
        description: "20 faces (triangles)",
        icon: IconShape::Hexagon,
    },
];

/// All supported dice in fixed order: tetrahedron, cube, octahedron,
/// dodecahedron, icosahedron.
#[must_use]
pub fn list_dice() -> &'static [DieDefinition] {
    &CATALOG
}

/// Look up a die by its face count.
#[must_use]
pub fn find_by_faces(faces: u32) -> Option<&'static DieDefinition> {
    CATALOG.iter().find(|def| def.faces == faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_order_is_stable() {
        let kinds: Vec<DieKind> = list_dice().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, DieKind::ALL.to_vec());
    }

    #[test]
    fn test_face_counts() {
        let faces: Vec<u32> = list_dice().iter().map(|d| d.faces).collect();
        assert_eq!(faces, vec![4, 6, 8, 12, 20]);
    }

    #[test]
    fn test_identity_matches_face_count() {
        for def in list_dice() {
            assert_eq!(def.faces, def.kind.faces());
            assert_eq!(def.kind.definition(), def);
        }
    }

    #[test]
    fn test_icons_match_solids() {
        assert_eq!(DieKind::Tetrahedron.definition().icon, IconShape::Triangle);
        assert_eq!(DieKind::Cube.definition().icon, IconShape::Square);
        assert_eq!(DieKind::Octahedron.definition().icon, IconShape::Diamond);
        assert_eq!(DieKind::Dodecahedron.definition().icon, IconShape::Pentagon);
        assert_eq!(DieKind::Icosahedron.definition().icon, IconShape::Hexagon);
    }

    #[test]
    fn test_catalog_is_shared_static() {
        assert!(std::ptr::eq(list_dice(), list_dice()));
        assert!(std::ptr::eq(DieKind::Cube.definition(), &list_dice()[1]));
    }

    #[test]
    fn test_default_is_cube() {
        assert_eq!(DieKind::default(), DieKind::Cube);
    }

    #[test]
    fn test_parse_by_key() {
        assert_eq!("cube".parse::<DieKind>().unwrap(), DieKind::Cube);
        assert_eq!("Icosahedron".parse::<DieKind>().unwrap(), DieKind::Icosahedron);
        assert_eq!(" octahedron ".parse::<DieKind>().unwrap(), DieKind::Octahedron);
    }

    #[test]
    fn test_parse_dice_notation() {
        assert_eq!("d4".parse::<DieKind>().unwrap(), DieKind::Tetrahedron);
        assert_eq!("D12".parse::<DieKind>().unwrap(), DieKind::Dodecahedron);
        assert_eq!("d20".parse::<DieKind>().unwrap(), DieKind::Icosahedron);
    }

    #[test]
    fn test_parse_unknown() {
        for bad in ["d7", "d100", "sphere", "", "d"] {
            let err = bad.parse::<DieKind>().unwrap_err();
            assert!(matches!(err, DiceError::UnknownDie(_)), "{bad}");
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for kind in DieKind::ALL {
            assert_eq!(kind.to_string().parse::<DieKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_find_by_faces() {
        assert_eq!(find_by_faces(8).map(|d| d.kind), Some(DieKind::Octahedron));
        assert!(find_by_faces(10).is_none());
        assert!(find_by_faces(0).is_none());
    }

    #[test]
    fn test_theoretical_probability() {
        let p = DieKind::Cube.definition().theoretical_probability();
        assert!((p - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_kind_kebab_case() {
        let json = serde_json::to_string(&DieKind::Dodecahedron).unwrap();
        assert_eq!(json, "\"dodecahedron\"");
        let back: DieKind = serde_json::from_str("\"tetrahedron\"").unwrap();
        assert_eq!(back, DieKind::Tetrahedron);
    }
}
