//! Line-oriented level file parsing.
//!
//! The grammar is the loader's concern, but record order is a world
//! contract: registry iteration order and the door/switch pairing both
//! follow file order, so records are emitted exactly as read.

use std::{fs, path::Path};

use gridlock_core::{EntityKind, GridPos, LevelEntity, LevelLayout};
use thiserror::Error;

/// Errors that abort a level load before any world is constructed.
#[derive(Debug, Error)]
pub(crate) enum LevelFileError {
    /// The file held no dimension line at all.
    #[error("level file is empty")]
    Empty,
    /// The first line was not two whole numbers.
    #[error("line 1: malformed grid dimensions `{text}`")]
    InvalidDimensions {
        /// The offending line content.
        text: String,
    },
    /// An entity line did not match `kind x y`.
    #[error("line {line}: expected `kind x y`, got `{text}`")]
    MalformedRecord {
        /// One-based line number of the record.
        line: usize,
        /// The offending line content.
        text: String,
    },
    /// An entity line named a kind this engine does not know.
    #[error("line {line}: unknown entity kind `{tag}`")]
    UnknownEntityKind {
        /// One-based line number of the record.
        line: usize,
        /// The unrecognized kind tag.
        tag: String,
    },
    /// The file could not be read at all.
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads and parses the level file at `path`.
pub(crate) fn load(path: &Path) -> Result<LevelLayout, LevelFileError> {
    parse(&fs::read_to_string(path)?)
}

/// Parses level text: a dimension line, then one `kind x y` record per line.
///
/// Blank lines are tolerated so trailing newlines do not matter; anything
/// else that fails to parse rejects the whole level. A partially built
/// layout never escapes this function.
pub(crate) fn parse(text: &str) -> Result<LevelLayout, LevelFileError> {
    let mut lines = text.lines().enumerate();

    let (_, dimension_line) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(LevelFileError::Empty)?;
    let (columns, rows) = parse_dimensions(dimension_line)?;

    let mut entities = Vec::new();
    for (index, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        entities.push(parse_record(index + 1, trimmed)?);
    }

    Ok(LevelLayout {
        columns,
        rows,
        entities,
    })
}

fn parse_dimensions(line: &str) -> Result<(u32, u32), LevelFileError> {
    let invalid = || LevelFileError::InvalidDimensions {
        text: line.to_owned(),
    };

    let mut tokens = line.split_whitespace();
    let columns = tokens
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let rows = tokens
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    if tokens.next().is_some() {
        return Err(invalid());
    }
    Ok((columns, rows))
}

fn parse_record(line: usize, text: &str) -> Result<LevelEntity, LevelFileError> {
    let malformed = || LevelFileError::MalformedRecord {
        line,
        text: text.to_owned(),
    };

    let mut tokens = text.split_whitespace();
    let tag = tokens.next().ok_or_else(malformed)?;
    let x = tokens
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .ok_or_else(malformed)?;
    let y = tokens
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let kind = kind_for_tag(tag).ok_or_else(|| LevelFileError::UnknownEntityKind {
        line,
        tag: tag.to_owned(),
    })?;

    Ok(LevelEntity {
        kind,
        position: GridPos::new(x, y),
    })
}

fn kind_for_tag(tag: &str) -> Option<EntityKind> {
    match tag {
        "floor" => Some(EntityKind::Floor),
        "wall" => Some(EntityKind::Wall),
        "cracked" => Some(EntityKind::CrackedWall),
        "target" => Some(EntityKind::Target),
        "stone" => Some(EntityKind::Stone),
        "tnt" => Some(EntityKind::Tnt),
        "ice" => Some(EntityKind::Ice),
        "switch" => Some(EntityKind::Switch),
        "door" => Some(EntityKind::Door),
        "player" => Some(EntityKind::Player),
        "rogue" => Some(EntityKind::Rogue),
        "skeleton" => Some(EntityKind::Skeleton),
        "mage" => Some(EntityKind::Mage),
        "explosion" => Some(EntityKind::Explosion),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{EntityKind, GridPos};

    use super::{parse, LevelFileError};

    #[test]
    fn parses_records_in_file_order() {
        let layout = parse("2 2\nfloor 0 0\nplayer 0 0\nfloor 1 0\ntarget 1 0\n")
            .expect("level should parse");

        assert_eq!(layout.columns, 2);
        assert_eq!(layout.rows, 2);
        let kinds: Vec<EntityKind> = layout.entities.iter().map(|record| record.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Floor,
                EntityKind::Player,
                EntityKind::Floor,
                EntityKind::Target,
            ],
        );
        assert_eq!(layout.entities[3].position, GridPos::new(1, 0));
    }

    #[test]
    fn unknown_kind_rejects_the_level() {
        let result = parse("2 2\nfloor 0 0\ncrate 1 0\n");
        assert!(matches!(
            result,
            Err(LevelFileError::UnknownEntityKind { line: 3, ref tag }) if tag == "crate"
        ));
    }

    #[test]
    fn malformed_dimensions_reject_the_level() {
        assert!(matches!(
            parse("two by two\nfloor 0 0\n"),
            Err(LevelFileError::InvalidDimensions { .. }),
        ));
        assert!(matches!(parse(""), Err(LevelFileError::Empty)));
    }

    #[test]
    fn malformed_records_name_their_line() {
        let result = parse("2 2\nfloor 0 0\nwall 1\n");
        assert!(matches!(
            result,
            Err(LevelFileError::MalformedRecord { line: 3, .. }),
        ));
    }

    #[test]
    fn blank_lines_are_tolerated() {
        let layout = parse("\n2 1\n\nfloor 0 0\n\n").expect("level should parse");
        assert_eq!(layout.entities.len(), 1);
    }
}
