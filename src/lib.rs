//! A small text-adventure world model: rooms joined by one-way exits, loose
//! game objects, and a single player moving between rooms.
//!
//! [`WorldState`] owns everything. References between rooms are never
//! enforced; [`validate_world`] reports broken ones on request.

pub mod engine;
pub mod world;

pub use world::{
    GameObject, LoadError, Player, Room, StartPoint, ValidationError, WorldError, WorldSetup,
    WorldState, dangling_room_ids, load_world_from_file, load_world_from_str, validate_world,
};

/// The three-room world used by the demo binary and the smoke tests.
pub fn demo_world() -> WorldState {
    let mut world = WorldState::new();
    world.add_room(
        Room::new("room1", "Entrance Hall", "A grand entrance hall with marble floors.")
            .with_exit("north", "room2"),
    );
    world.add_room(
        Room::new("room2", "Library", "Dusty shelves full of ancient books.")
            .with_exit("south", "room1")
            .with_exit("east", "room3"),
    );
    world.add_room(
        Room::new("room3", "Kitchen", "A cold kitchen. Something smells off.")
            .with_exit("west", "room2"),
    );
    world.add_object(GameObject::new("key", "A small brass key."));
    world
}
