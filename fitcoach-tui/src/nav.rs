//! Panel focus cycling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Chat,
    Agents,
    Guardrails,
    Context,
    Events,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Chat => "Chat",
            Panel::Agents => "Available Agents",
            Panel::Guardrails => "Guardrails",
            Panel::Context => "User Session Context",
            Panel::Events => "Runner Output",
        }
    }

    pub fn all() -> &'static [Panel] {
        &[
            Panel::Chat,
            Panel::Agents,
            Panel::Guardrails,
            Panel::Context,
            Panel::Events,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Panel {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Panel {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
