//! Polyline paths for the line styles.
//!
//! A path is a list of `MoveTo` / `LineTo` commands in device pixels. Several
//! subpaths may live in one path (the dual-unit line draws its secondary tick
//! as a separate subpath) so that one stroke paints them with a shared join.

use glam::DVec2;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
}

impl PathCommand {
    pub fn point(self) -> DVec2 {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }

    fn translate(self, offset: DVec2) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
        }
    }
}

/// An open polyline path, possibly made of several subpaths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// A copy moved by `offset` (used for drop shadows).
    pub fn translate(&self, offset: DVec2) -> Path {
        Path {
            commands: self.commands.iter().map(|c| c.translate(offset)).collect(),
        }
    }

    /// Number of subpaths.
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }
}

/// Builds a [`Path`] command by command.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use scalebar::render::PathBuilder;
///
/// // tick, line, tick
/// let path = PathBuilder::new(dvec2(0.0, 0.0))
///     .line_to(dvec2(0.0, 10.0))
///     .line_to(dvec2(100.0, 10.0))
///     .line_to(dvec2(100.0, 0.0))
///     .build();
/// assert_eq!(path.commands().len(), 4);
/// ```
#[derive(Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Start a path at `start`.
    pub fn new(start: DVec2) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Begin a new subpath. A move directly after another move replaces it.
    pub fn move_to(mut self, point: DVec2) -> Self {
        if let Some(PathCommand::MoveTo(last)) = self.commands.last_mut() {
            *last = point;
        } else {
            self.commands.push(PathCommand::MoveTo(point));
        }
        self
    }

    pub fn line_to(mut self, point: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    /// Finish the path, dropping a trailing move that draws nothing.
    pub fn build(mut self) -> Path {
        if matches!(self.commands.last(), Some(PathCommand::MoveTo(_))) {
            self.commands.pop();
        }
        Path {
            commands: self.commands,
        }
    }
}
