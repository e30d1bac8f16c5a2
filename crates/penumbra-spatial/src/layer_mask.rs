//! Bit masks over layer indices.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of layer indices in `0..32`, one bit per layer.
///
/// Indices of 32 and above are never members; adding one is a no-op.
///
/// ```
/// use penumbra_spatial::LayerMask;
///
/// let m = LayerMask::of(&[0, 3, 5]);
/// assert!(m.contains(3));
/// assert_eq!(m.layers().collect::<Vec<_>>(), vec![5, 3, 0]);
/// assert_eq!(LayerMask::all_below(2), LayerMask::of(&[0, 1, 2]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Number of addressable layers.
    pub const MAX_LAYERS: u32 = u32::BITS;

    /// Every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// No layer.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing exactly `layers`.
    pub fn of(layers: &[u32]) -> Self {
        layers.iter().fold(Self::NONE, |m, &l| m.with(l))
    }

    /// This mask plus `layer`.
    pub const fn with(self, layer: u32) -> Self {
        if layer < Self::MAX_LAYERS {
            LayerMask(self.0 | (1 << layer))
        } else {
            self
        }
    }

    /// This mask minus `layer`.
    pub const fn without(self, layer: u32) -> Self {
        if layer < Self::MAX_LAYERS {
            LayerMask(self.0 & !(1 << layer))
        } else {
            self
        }
    }

    /// Whether `layer` is in the mask.
    pub const fn contains(self, layer: u32) -> bool {
        layer < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    /// Layers `layer` and above.
    pub const fn all_above(layer: u32) -> Self {
        if layer >= Self::MAX_LAYERS {
            Self::NONE
        } else {
            LayerMask(u32::MAX << layer)
        }
    }

    /// Layers `layer` and below.
    pub const fn all_below(layer: u32) -> Self {
        if layer >= Self::MAX_LAYERS - 1 {
            Self::ALL
        } else {
            LayerMask((1 << (layer + 1)) - 1)
        }
    }

    /// Layers `start .. start + count`, clipped to the addressable range.
    pub const fn range(start: u32, count: u32) -> Self {
        if count == 0 {
            return Self::NONE;
        }
        let end = start.saturating_add(count - 1);
        LayerMask(Self::all_above(start).0 & Self::all_below(end).0)
    }

    /// Whether no layer is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of layers set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Member layers, highest first.
    pub fn layers(self) -> impl Iterator<Item = u32> {
        (0..Self::MAX_LAYERS).rev().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u32> for LayerMask {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |m, l| m.with(l))
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        LayerMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        LayerMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for LayerMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for LayerMask {
    type Output = Self;

    fn not(self) -> Self {
        LayerMask(!self.0)
    }
}
