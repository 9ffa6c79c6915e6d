use indexmap::IndexMap;

/// Operations reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    SquareRoot,
    Factorial,
    NaturalLog,
    Power,
    Exit,
}

/// One numbered menu entry.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub op: OpKind,
}

/// The numbered menu, kept in display order.
pub struct Menu {
    entries: IndexMap<i64, MenuEntry>,
}

impl Menu {
    /// Builds the standard five-entry menu.
    pub fn standard() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            1,
            MenuEntry {
                label: "Square Root (√x)",
                op: OpKind::SquareRoot,
            },
        );
        entries.insert(
            2,
            MenuEntry {
                label: "Factorial (x!)",
                op: OpKind::Factorial,
            },
        );
        entries.insert(
            3,
            MenuEntry {
                label: "Natural Logarithm (ln x)",
                op: OpKind::NaturalLog,
            },
        );
        entries.insert(
            4,
            MenuEntry {
                label: "Power (x^b)",
                op: OpKind::Power,
            },
        );
        entries.insert(
            5,
            MenuEntry {
                label: "Exit",
                op: OpKind::Exit,
            },
        );
        Self { entries }
    }

    pub fn lookup(&self, choice: i64) -> Option<MenuEntry> {
        self.entries.get(&choice).copied()
    }

    /// Menu lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|(number, entry)| format!("{number}. {}", entry.label))
    }
}
