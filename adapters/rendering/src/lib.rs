#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Gridlock adapters.
//!
//! The world exposes ordered entity snapshots and summary counters; this
//! crate turns them into a [`Scene`] a concrete presenter can draw. The
//! world itself issues no drawing calls and no error ever crosses back over
//! the presentation boundary.

use anyhow::Result as AnyResult;
use gridlock_core::EntityKind;
use gridlock_world::query::{EntitySnapshot, EntityView, ScoreView};

/// Glyph painted for grid cells no entity occupies.
const EMPTY_GLYPH: char = ' ';

/// One composed frame: a glyph grid plus the heads-up counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    columns: u32,
    rows: u32,
    glyphs: Vec<char>,
    score: ScoreView,
}

impl Scene {
    /// Composes a scene from the world's ordered entity view and counters.
    ///
    /// Cells are painted back to front: tiles under pads under blocks under
    /// units, with registry order breaking ties, so the glyph that survives
    /// is the one a player cares about.
    #[must_use]
    pub fn compose(view: &EntityView, score: ScoreView, columns: u32, rows: u32) -> Self {
        let capacity = columns as usize * rows as usize;
        let mut glyphs = vec![EMPTY_GLYPH; capacity];
        let mut ranks = vec![0u8; capacity];

        for snapshot in view.iter() {
            let (x, y) = (snapshot.position.x(), snapshot.position.y());
            if x < 0 || y < 0 || x >= columns as i32 || y >= rows as i32 {
                continue;
            }
            let cell = y as usize * columns as usize + x as usize;
            let rank = paint_rank(snapshot.kind);
            if rank >= ranks[cell] {
                ranks[cell] = rank;
                glyphs[cell] = glyph_for(snapshot);
            }
        }

        Self {
            columns,
            rows,
            glyphs,
            score,
        }
    }

    /// Number of glyph columns in the scene.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of glyph rows in the scene.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Glyph painted at the provided cell.
    #[must_use]
    pub fn glyph_at(&self, x: u32, y: u32) -> char {
        self.glyphs
            .get(y as usize * self.columns as usize + x as usize)
            .copied()
            .unwrap_or(EMPTY_GLYPH)
    }

    /// Summary counters captured when the scene was composed.
    #[must_use]
    pub const fn score(&self) -> ScoreView {
        self.score
    }

    /// Renders the scene as terminal lines: the grid, then the counters.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows as usize + 3);
        for y in 0..self.rows {
            let mut line = String::with_capacity(self.columns as usize);
            for x in 0..self.columns {
                line.push(self.glyph_at(x, y));
            }
            lines.push(line);
        }
        lines.push(format!("Moves: {}", self.score.moves));
        lines.push(format!(
            "Targets: {}/{}",
            self.score.targets_covered, self.score.targets_needed
        ));
        if self.score.won {
            lines.push("Level complete!".to_owned());
        }
        lines
    }
}

/// Seam a concrete presenter implements to show composed scenes.
pub trait Present {
    /// Presents one composed scene to the player.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Paint priority per kind; higher ranks cover lower ones within a cell.
fn paint_rank(kind: EntityKind) -> u8 {
    match kind {
        EntityKind::Floor => 1,
        EntityKind::Target => 2,
        EntityKind::Switch => 3,
        EntityKind::Door => 4,
        EntityKind::Wall | EntityKind::CrackedWall => 5,
        EntityKind::Stone | EntityKind::Tnt | EntityKind::Ice => 6,
        EntityKind::Rogue | EntityKind::Skeleton | EntityKind::Mage => 7,
        EntityKind::Player => 8,
        EntityKind::Explosion => 9,
    }
}

fn glyph_for(snapshot: &EntitySnapshot) -> char {
    match snapshot.kind {
        EntityKind::Floor => '.',
        EntityKind::Wall => '#',
        EntityKind::CrackedWall => '%',
        EntityKind::Target => 'x',
        EntityKind::Switch => '_',
        EntityKind::Door => match snapshot.door_open {
            Some(true) => '\'',
            _ => '+',
        },
        EntityKind::Stone => 'o',
        EntityKind::Tnt => 't',
        EntityKind::Ice => '*',
        EntityKind::Player => '@',
        EntityKind::Rogue => 'r',
        EntityKind::Skeleton => 'k',
        EntityKind::Mage => 'm',
        EntityKind::Explosion => '!',
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{EntityKind, GridPos, LevelEntity, LevelLayout};
    use gridlock_world::{query, World};

    use crate::Scene;

    fn world_from(records: &[(EntityKind, i32, i32)], columns: u32, rows: u32) -> World {
        World::from_layout(&LevelLayout {
            columns,
            rows,
            entities: records
                .iter()
                .map(|(kind, x, y)| LevelEntity {
                    kind: *kind,
                    position: GridPos::new(*x, *y),
                })
                .collect(),
        })
    }

    fn scene_for(world: &World) -> Scene {
        let (columns, rows) = query::grid_size(world);
        Scene::compose(&query::entity_view(world), query::score(world), columns, rows)
    }

    #[test]
    fn units_paint_over_the_tiles_they_stand_on() {
        let world = world_from(
            &[
                (EntityKind::Floor, 0, 0),
                (EntityKind::Floor, 1, 0),
                (EntityKind::Target, 1, 0),
                (EntityKind::Player, 0, 0),
            ],
            2,
            1,
        );

        let scene = scene_for(&world);

        assert_eq!(scene.glyph_at(0, 0), '@');
        assert_eq!(scene.glyph_at(1, 0), 'x');
    }

    #[test]
    fn closed_and_open_doors_use_distinct_glyphs() {
        let closed = world_from(&[(EntityKind::Door, 0, 0)], 1, 1);
        assert_eq!(scene_for(&closed).glyph_at(0, 0), '+');

        // A covered switch opens its linked door during construction.
        let open = world_from(
            &[
                (EntityKind::Floor, 0, 0),
                (EntityKind::Switch, 0, 0),
                (EntityKind::Stone, 0, 0),
                (EntityKind::Door, 1, 0),
            ],
            2,
            1,
        );
        assert_eq!(scene_for(&open).glyph_at(1, 0), '\'');
    }

    #[test]
    fn unpopulated_cells_stay_blank() {
        let world = world_from(&[(EntityKind::Floor, 0, 0)], 2, 1);
        let scene = scene_for(&world);
        assert_eq!(scene.glyph_at(0, 0), '.');
        assert_eq!(scene.glyph_at(1, 0), ' ');
    }

    #[test]
    fn hud_lines_carry_the_counters() {
        let world = world_from(
            &[
                (EntityKind::Floor, 0, 0),
                (EntityKind::Target, 0, 0),
                (EntityKind::Stone, 0, 0),
            ],
            1,
            1,
        );

        let lines = scene_for(&world).lines();

        assert!(lines.contains(&"Moves: 0".to_owned()));
        assert!(lines.contains(&"Targets: 1/1".to_owned()));
        assert!(lines.contains(&"Level complete!".to_owned()));
    }
}
