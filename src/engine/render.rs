use crate::engine::output::Output;
use crate::world;

/// Describe `room`: title, description, visible items, then the exit list.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.description.trim());

    if !room.items.is_empty() {
        let names = room
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        out.say(format!("You see: {names}."));
    }

    if room.exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        let mut dirs: Vec<&str> = room.exits.keys().map(String::as_str).collect();
        dirs.sort_unstable();
        out.set_exits(format!("Exits: {}", dirs.join(", ")));
    }
}

/// Report the outcome of a move attempt against the world after the attempt.
pub fn render_move(out: &mut Output, world: &world::WorldState, direction: &str, moved: bool) {
    if !moved {
        out.event(format!("You can't go {direction} from here."));
        return;
    }

    match world.current_room() {
        Some(room) => render_room(out, room),
        None => {
            let where_ = world
                .player()
                .and_then(|p| p.current_room.as_deref())
                .unwrap_or("nowhere");
            out.event(format!("You go {direction} into '{where_}', which isn't there."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OutputBlock;
    use crate::world::{GameObject, Room, WorldState};

    #[test]
    fn room_with_items_and_sorted_exits() {
        let room = Room::new("hall", "Hall", "  A hall.  ")
            .with_exit("west", "b")
            .with_exit("east", "c")
            .with_item(GameObject::new("lamp", ""))
            .with_item(GameObject::new("rope", ""));

        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("Hall".into()),
                OutputBlock::Text("A hall.".into()),
                OutputBlock::Text("You see: lamp, rope.".into()),
                OutputBlock::Exits("Exits: east, west".into()),
            ]
        );
    }

    #[test]
    fn room_without_exits() {
        let mut out = Output::new();
        render_room(&mut out, &Room::new("cell", "Cell", ""));
        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("Cell".into()),
                OutputBlock::Exits("Exits: (none)".into()),
            ]
        );
    }

    #[test]
    fn move_outcomes() {
        let mut world = WorldState::new();
        world.add_room(
            Room::new("a", "Alpha", "")
                .with_exit("north", "b")
                .with_exit("down", "pit"),
        );
        world.add_room(Room::new("b", "Beta", "").with_exit("south", "a"));
        world.start_game("Hero", "a");

        let mut out = Output::new();
        let moved = world.move_player("up");
        render_move(&mut out, &world, "up", moved);
        assert_eq!(
            out.blocks,
            vec![OutputBlock::Event("You can't go up from here.".into())]
        );

        let mut out = Output::new();
        let moved = world.move_player("north");
        render_move(&mut out, &world, "north", moved);
        assert_eq!(out.blocks[0], OutputBlock::Title("Beta".into()));

        world.move_player("south");
        let mut out = Output::new();
        let moved = world.move_player("down");
        render_move(&mut out, &world, "down", moved);
        assert_eq!(
            out.blocks,
            vec![OutputBlock::Event(
                "You go down into 'pit', which isn't there.".into()
            )]
        );
    }
}
