use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::error::LoadError;
use super::model::{GameObject, Room};
use super::state::WorldState;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldFile {
    #[serde(default)]
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    object: Vec<ObjectConfig>, // [[object]] blocks
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct WorldHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    start_room: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    description: String,

    #[serde(default)]
    exits: HashMap<String, String>, // direction = "room_id"
    #[serde(default)]
    item: Vec<ObjectConfig>, // [[room.item]]
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectConfig {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: Option<String>,
}

impl ObjectConfig {
    fn into_object(self) -> Result<GameObject, LoadError> {
        if self.name.trim().is_empty() {
            return Err(LoadError::Invalid("object name may not be empty".into()));
        }
        Ok(GameObject {
            name: self.name,
            description: normalize_multiline_desc(&self.description),
            location: self.location,
        })
    }
}

/// Where (and as whom) play begins, as declared in the `[world]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPoint {
    pub player: String,
    pub room: String,
}

/// A world loaded from a definition file, not yet started.
#[derive(Debug, Clone)]
pub struct WorldSetup {
    pub name: String,
    pub world: WorldState,
    pub start: Option<StartPoint>,
}

impl WorldSetup {
    /// Start the game at the declared start point. Returns false if none was declared.
    pub fn start(&mut self) -> bool {
        match &self.start {
            Some(sp) => {
                self.world.start_game(sp.player.clone(), sp.room.clone());
                true
            }
            None => false,
        }
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world definition from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<WorldSetup, LoadError> {
    let contents = fs::read_to_string(path)?;
    let setup = load_world_from_str(&contents)?;
    info!(
        path = %path.display(),
        rooms = setup.world.room_count(),
        objects = setup.world.object_count(),
        "loaded world"
    );
    Ok(setup)
}

/// Load a world definition from TOML text.
///
/// Duplicate room ids or object names are rejected. Exit targets and
/// the start room are not checked; see [`super::validate_world`].
pub fn load_world_from_str(src: &str) -> Result<WorldSetup, LoadError> {
    let world_file: WorldFile = toml::from_str(src)?;

    let start = match (world_file.world.player, world_file.world.start_room) {
        (Some(player), Some(room)) => {
            if room.trim().is_empty() {
                return Err(LoadError::Invalid("world.start_room may not be empty".into()));
            }
            Some(StartPoint { player, room })
        }
        (None, None) => None,
        (Some(_), None) => {
            return Err(LoadError::Invalid(
                "world.player is set but world.start_room is missing".into(),
            ));
        }
        (None, Some(_)) => {
            return Err(LoadError::Invalid(
                "world.start_room is set but world.player is missing".into(),
            ));
        }
    };

    let mut world = WorldState::new();

    for room_cfg in world_file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(LoadError::Invalid(format!(
                "room '{}' has an empty id",
                room_cfg.name
            )));
        }

        let items = room_cfg
            .item
            .into_iter()
            .map(ObjectConfig::into_object)
            .collect::<Result<Vec<_>, _>>()?;

        world.try_add_room(Room {
            id: room_cfg.id,
            name: room_cfg.name,
            description: normalize_multiline_desc(&room_cfg.description),
            exits: room_cfg.exits,
            items,
        })?;
    }

    for obj_cfg in world_file.object {
        world.try_add_object(obj_cfg.into_object()?)?;
    }

    debug!(name = %world_file.world.name, has_start = start.is_some(), "parsed world definition");

    Ok(WorldSetup {
        name: world_file.world.name,
        world,
        start,
    })
}

/// Collapse TOML multi-line strings: indentation is dropped, wrapped lines
/// join with a space, one blank line keeps a newline and two or more make a
/// paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut blank_run = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            blank_run += 1;
            continue;
        }

        if !result.is_empty() {
            result.push_str(match blank_run {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            });
        }
        result.push_str(line);
        blank_run = 0;
    }

    result
}
