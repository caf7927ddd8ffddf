use std::collections::BTreeSet;

use super::model::GameObject;
use super::state::WorldState;

/// A broken reference found by [`validate_world`]. None of these stop play.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum ValidationError {
    #[error("room '{room}' exit '{direction}' targets missing room '{target}'")]
    DanglingExit {
        room: String,
        direction: String,
        target: String,
    },
    #[error("player is in missing room '{0}'")]
    MissingStartRoom(String),
    #[error("object '{object}' location '{location}' is neither a room nor an object")]
    UnknownObjectLocation { object: String, location: String },
}

/// Check references between rooms, objects and the player.
///
/// Results are sorted so repeated runs over the same world agree.
pub fn validate_world(world: &WorldState) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Validate exits
    for room in world.rooms() {
        for (direction, target) in &room.exits {
            if world.room(target).is_none() {
                errors.push(ValidationError::DanglingExit {
                    room: room.id.clone(),
                    direction: direction.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    if let Some(room_id) = world.player().and_then(|p| p.current_room.as_deref()) {
        if world.room(room_id).is_none() {
            errors.push(ValidationError::MissingStartRoom(room_id.to_string()));
        }
    }

    // Catalog objects and room items share the same location rule
    let placed = world
        .objects()
        .chain(world.rooms().flat_map(|r| r.items.iter()));
    for obj in placed {
        if let Some(err) = check_location(world, obj) {
            errors.push(err);
        }
    }

    errors.sort();
    errors.dedup();
    errors
}

/// Room ids that are referenced (by an exit or the player) but never registered.
pub fn dangling_room_ids(world: &WorldState) -> BTreeSet<String> {
    validate_world(world)
        .into_iter()
        .filter_map(|err| match err {
            ValidationError::DanglingExit { target, .. } => Some(target),
            ValidationError::MissingStartRoom(id) => Some(id),
            ValidationError::UnknownObjectLocation { .. } => None,
        })
        .collect()
}

fn check_location(world: &WorldState, obj: &GameObject) -> Option<ValidationError> {
    let location = obj.location.as_deref()?;
    if world.room(location).is_some() || world.object(location).is_some() {
        return None;
    }
    Some(ValidationError::UnknownObjectLocation {
        object: obj.name.clone(),
        location: location.to_string(),
    })
}
