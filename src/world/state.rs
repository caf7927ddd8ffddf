use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use super::error::WorldError;
use super::model::{GameObject, Player, Room};

/// Aggregate owner of all rooms, loose objects and the (single) player.
///
/// Room exits and the player's position are never checked against the
/// registered rooms; a dangling id simply resolves to no room. Use
/// [`super::validate_world`] for an explicit integrity pass.
#[derive(Debug, Default, Clone)]
pub struct WorldState {
    rooms: HashMap<String, Room>,
    objects: HashMap<String, GameObject>,
    player: Option<Player>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room. A room with the same id is replaced.
    pub fn add_room(&mut self, room: Room) {
        debug!(room = %room.id, exits = room.exits.len(), "add room");
        if let Some(old) = self.rooms.insert(room.id.clone(), room) {
            debug!(room = %old.id, "replaced existing room");
        }
    }

    /// Register an object in the catalog. An object with the same name is replaced.
    ///
    /// The catalog is separate from room item lists; registering here does
    /// not place the object anywhere.
    pub fn add_object(&mut self, obj: GameObject) {
        debug!(object = %obj.name, "add object");
        if let Some(old) = self.objects.insert(obj.name.clone(), obj) {
            debug!(object = %old.name, "replaced existing object");
        }
    }

    /// Like [`Self::add_room`], but refuses to overwrite.
    pub fn try_add_room(&mut self, room: Room) -> Result<(), WorldError> {
        match self.rooms.entry(room.id.clone()) {
            Entry::Occupied(e) => Err(WorldError::DuplicateRoom(e.key().clone())),
            Entry::Vacant(e) => {
                debug!(room = %room.id, exits = room.exits.len(), "add room");
                e.insert(room);
                Ok(())
            }
        }
    }

    /// Like [`Self::add_object`], but refuses to overwrite.
    pub fn try_add_object(&mut self, obj: GameObject) -> Result<(), WorldError> {
        match self.objects.entry(obj.name.clone()) {
            Entry::Occupied(e) => Err(WorldError::DuplicateObject(e.key().clone())),
            Entry::Vacant(e) => {
                debug!(object = %obj.name, "add object");
                e.insert(obj);
                Ok(())
            }
        }
    }

    /// Create a fresh player positioned at `starting_room_id`.
    ///
    /// Any previous player (and their inventory) is discarded. The room id
    /// is taken as given.
    pub fn start_game(
        &mut self,
        player_name: impl Into<String>,
        starting_room_id: impl Into<String>,
    ) {
        let mut player = Player::new(player_name);
        player.current_room = Some(starting_room_id.into());
        debug!(
            player = %player.name,
            room = player.current_room.as_deref().unwrap_or_default(),
            restarted = self.player.is_some(),
            "start game"
        );
        self.player = Some(player);
    }

    /// Room the player is in, if there is a player and their room is registered.
    pub fn current_room(&self) -> Option<&Room> {
        let room_id = self.player.as_ref()?.current_room.as_deref()?;
        self.rooms.get(room_id)
    }

    /// Move the player through the exit labelled `direction`.
    ///
    /// Returns false (and changes nothing) when there is no resolvable
    /// current room or no such exit. The destination is not checked: moving
    /// into an unregistered room succeeds and leaves `current_room()` empty.
    pub fn move_player(&mut self, direction: &str) -> bool {
        let Some(target) = self
            .current_room()
            .and_then(|room| room.exit(direction))
            .map(str::to_owned)
        else {
            trace!(direction, "move not possible");
            return false;
        };

        let Some(player) = self.player.as_mut() else {
            return false;
        };
        debug!(direction, from = ?player.current_room, to = %target, "move player");
        player.current_room = Some(target);
        true
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn object(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
