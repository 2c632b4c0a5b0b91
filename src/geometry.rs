// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Floorgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Floorgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Planar distance helpers in floor-plan coordinates.

/// Segments shorter than this (squared) are treated as a single point.
const DEGENERATE_SEGMENT_LEN_SQ: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        distance(self, other)
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Distance from `p` to the closed segment `a`..`b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either end measure to
/// that endpoint.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let ab2 = abx * abx + aby * aby;

    if ab2 < DEGENERATE_SEGMENT_LEN_SQ {
        return distance(p, a);
    }

    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / ab2).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * abx, a.y + t * aby);
    distance(p, closest)
}
