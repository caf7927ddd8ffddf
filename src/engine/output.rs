use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(String),
}

/// Text produced for one step of play, in display order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.push_nonblank(s.into(), OutputBlock::Title);
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.push_nonblank(s.into(), OutputBlock::Text);
    }

    pub fn event(&mut self, s: impl Into<String>) {
        self.push_nonblank(s.into(), OutputBlock::Event);
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // only one Exits block, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn push_nonblank(&mut self, s: String, block: fn(String) -> OutputBlock) {
        if !s.trim().is_empty() {
            self.blocks.push(block(s));
        }
    }
}

/// Terminal layout: a blank line before titles, exits, and the first event.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed_anything = false;
        let mut started_events = false;

        for block in &self.blocks {
            match block {
                OutputBlock::Title(t) => writeln!(f, "\n{t}")?,
                OutputBlock::Text(line) => writeln!(f, "{line}")?,
                OutputBlock::Event(ev) => {
                    if !started_events && printed_anything {
                        writeln!(f)?;
                    }
                    started_events = true;
                    writeln!(f, "{ev}")?;
                }
                OutputBlock::Exits(exits) => writeln!(f, "\n{exits}")?,
            }
            printed_anything = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_dropped() {
        let mut out = Output::new();
        out.title("  ");
        out.say("");
        out.event("\n");
        assert!(out.is_empty());
    }

    #[test]
    fn exits_block_stays_last_and_unique() {
        let mut out = Output::new();
        out.set_exits("Exits: north");
        out.say("text");
        out.set_exits("Exits: south");

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("text".into()),
                OutputBlock::Exits("Exits: south".into()),
            ]
        );
    }

    #[test]
    fn display_separates_sections() {
        let mut out = Output::new();
        out.title("Hall");
        out.say("A hall.");
        out.event("You hear a noise.");
        out.set_exits("Exits: north");

        assert_eq!(
            out.to_string(),
            "\nHall\nA hall.\n\nYou hear a noise.\n\nExits: north\n"
        );
    }
}
