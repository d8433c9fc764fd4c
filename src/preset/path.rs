//! Defines the [SignaturePathPoint] and [SignaturePaths] types, the owned stroke data
//! held by every saved signature preset.

use crate::error::PresetError;
use itertools::Itertools;
use std::ops::Range;

/// A single point in a signature stroke, in the coordinate space of the signature canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignaturePathPoint {
    pub x: f32,
    pub y: f32,
}

impl SignaturePathPoint {
    /// Creates a new [SignaturePathPoint] with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates of this [SignaturePathPoint] are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for SignaturePathPoint {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// The zero-based index of a single stroke inside its containing [SignaturePaths].
pub type SignatureStrokeIndex = usize;

/// The strokes making up a single signature. Each stroke is one continuous pen
/// movement; a new stroke begins every time the pen is lifted.
///
/// A [SignaturePaths] value always owns its points. It is built from tool-owned
/// buffers by [SignaturePaths::copy_from()], which copies every point into new
/// storage, so later changes to the source buffers are never observed here.
#[derive(Debug, Clone, PartialEq)]
pub struct SignaturePaths {
    strokes: Vec<Vec<SignaturePathPoint>>,
}

impl SignaturePaths {
    /// Copies the given strokes point by point into a new, independently owned
    /// [SignaturePaths].
    ///
    /// Strokes are copied one-to-one, so an empty stroke stays empty and keeps its
    /// position. Returns [PresetError::EmptySignaturePath] if the strokes contain no
    /// points at all, and [PresetError::InvalidSignaturePoint] if any point has a
    /// non-finite coordinate.
    pub fn copy_from<S, P>(strokes: &[S]) -> Result<Self, PresetError>
    where
        S: AsRef<[P]>,
        P: Copy + Into<SignaturePathPoint>,
    {
        let mut copied = Vec::with_capacity(strokes.len());

        for (stroke_index, stroke) in strokes.iter().enumerate() {
            let source = stroke.as_ref();

            let mut points = Vec::with_capacity(source.len());

            for (point_index, point) in source.iter().enumerate() {
                let point: SignaturePathPoint = (*point).into();

                if !point.is_finite() {
                    return Err(PresetError::InvalidSignaturePoint {
                        stroke: stroke_index,
                        point: point_index,
                    });
                }

                points.push(SignaturePathPoint::new(point.x, point.y));
            }

            copied.push(points);
        }

        if copied.iter().all(Vec::is_empty) {
            Err(PresetError::EmptySignaturePath)
        } else {
            Ok(Self { strokes: copied })
        }
    }

    /// Returns the number of strokes in this [SignaturePaths].
    #[inline]
    pub fn len(&self) -> SignatureStrokeIndex {
        self.strokes.len()
    }

    /// Returns `true` if this [SignaturePaths] contains no strokes. A value built by
    /// [SignaturePaths::copy_from()] always holds at least one point, so is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Returns a Range from `0..(number of strokes)` for this [SignaturePaths].
    #[inline]
    pub fn as_range(&self) -> Range<SignatureStrokeIndex> {
        0..self.len()
    }

    /// Returns the points of the stroke at the given index, if any.
    #[inline]
    pub fn stroke(&self, index: SignatureStrokeIndex) -> Option<&[SignaturePathPoint]> {
        self.strokes.get(index).map(Vec::as_slice)
    }

    /// Returns an iterator over the strokes in this [SignaturePaths], in drawing order.
    #[inline]
    pub fn strokes(&self) -> impl Iterator<Item = &[SignaturePathPoint]> + '_ {
        self.strokes.iter().map(Vec::as_slice)
    }

    /// Returns the total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }

    /// Returns the strokes as nested vectors of `(x, y)` tuples, in drawing order.
    pub fn to_tuples(&self) -> Vec<Vec<(f32, f32)>> {
        self.strokes
            .iter()
            .map(|stroke| stroke.iter().map(|p| (p.x, p.y)).collect_vec())
            .collect_vec()
    }
}
