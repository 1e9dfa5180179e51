//! Route coloring result.

use rc_core::Color;
use rc_graph::ConstraintGraph;

use crate::error::{ColorError, ColorResult};

/// One color per route, indexed by route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Number of colored routes.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of a route (panics if out of bounds).
    pub fn color(&self, route: usize) -> Color {
        self.colors[route]
    }

    /// Color of a route (returns None if out of bounds).
    pub fn get(&self, route: usize) -> Option<Color> {
        self.colors.get(route).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Raw color values, indexed by route.
    pub fn as_indices(&self) -> Vec<u32> {
        self.colors.iter().map(|c| c.index()).collect()
    }

    /// Number of colors in use: the largest color plus one.
    pub fn num_colors(&self) -> usize {
        self.colors
            .iter()
            .max()
            .map_or(0, |c| c.index() as usize + 1)
    }

    /// Routes grouped by color: entry `c` lists the routes with color `c`,
    /// in ascending route order.
    pub fn classes(&self) -> Vec<Vec<usize>> {
        let mut classes = vec![Vec::new(); self.num_colors()];
        for (route, color) in self.colors.iter().enumerate() {
            classes[color.index() as usize].push(route);
        }
        classes
    }

    /// Edges of `graph` whose two routes share a color.
    ///
    /// Routes missing from the coloring are ignored.
    pub fn conflicts(&self, graph: &ConstraintGraph) -> Vec<(usize, usize)> {
        graph
            .edges()
            .filter(|&(a, b)| match (self.get(a), self.get(b)) {
                (Some(ca), Some(cb)) => ca == cb,
                _ => false,
            })
            .collect()
    }

    /// Check that this is a proper coloring of `graph`.
    pub fn verify(&self, graph: &ConstraintGraph) -> ColorResult<()> {
        if self.len() != graph.len() {
            return Err(ColorError::LengthMismatch {
                colors: self.len(),
                num_routes: graph.len(),
            });
        }

        if let Some(&(a, b)) = self.conflicts(graph).first() {
            return Err(ColorError::Conflict {
                a,
                b,
                color: self.colors[a],
            });
        }

        Ok(())
    }
}

impl FromIterator<Color> for Coloring {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl From<Coloring> for Vec<Color> {
    fn from(coloring: Coloring) -> Self {
        coloring.colors
    }
}
