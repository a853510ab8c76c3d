/// Where a new list item goes, given the lists currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// A level-1 item: starts or continues the top-level list.
    Root,
    /// Nested under the item at this position in the block sequence.
    Under(usize),
    /// No open context at the level above; the line is dropped.
    Orphan,
}

/// The nearest open list item at levels 1 and 2, as positions in the block
/// sequence being built.
///
/// A level-N item only attaches to an open level-(N-1) item. Any block that
/// is not a list item closes every context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpenLists {
    level1: Option<usize>,
    level2: Option<usize>,
}

impl OpenLists {
    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn attach(&self, level: u8) -> Attach {
        let parent = match level {
            1 => return Attach::Root,
            2 => self.level1,
            _ => self.level2,
        };
        parent.map_or(Attach::Orphan, Attach::Under)
    }

    /// Records that the item at `pos` was emitted at `level`.
    ///
    /// A level-1 item replaces the level-1 context and clears level 2;
    /// a level-2 item becomes the level-2 context; level 3 changes nothing.
    pub fn opened(&mut self, level: u8, pos: usize) {
        match level {
            1 => {
                self.level1 = Some(pos);
                self.level2 = None;
            }
            2 => self.level2 = Some(pos),
            _ => {}
        }
    }
}
