use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// An inert, named item. Optionally associated with a room or container id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub name: String,
    pub description: String,
    pub location: Option<String>,
}

impl GameObject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        GameObject {
            name: name.into(),
            description: description.into(),
            location: None,
        }
    }

    /// Place the object in a room or container (by id).
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A location node in the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: HashMap<String, String>, // direction -> destination room id
    pub items: Vec<GameObject>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Room {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// Add a one-way exit. The target is not checked against known rooms.
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    pub fn with_item(mut self, item: GameObject) -> Self {
        self.items.push(item);
        self
    }

    /// Destination for `direction`. Exact, case-sensitive match.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub inventory: Vec<GameObject>,
    pub current_room: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            inventory: Vec::new(),
            current_room: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_defaults() {
        let room = Room::new("hall", "Hall", "A hall.");
        assert!(room.exits.is_empty());
        assert!(room.items.is_empty());

        let obj = GameObject::new("key", "A brass key.");
        assert_eq!(obj.location, None);

        let player = Player::new("Hero");
        assert!(player.inventory.is_empty());
        assert_eq!(player.current_room, None);
    }

    #[test]
    fn exit_lookup_is_case_sensitive() {
        let room = Room::new("hall", "Hall", "").with_exit("north", "attic");
        assert_eq!(room.exit("north"), Some("attic"));
        assert_eq!(room.exit("North"), None);
        assert_eq!(room.exit("n"), None);
    }
}
