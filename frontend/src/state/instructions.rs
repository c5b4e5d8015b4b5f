pub const PYTHON_MARKER: &str = "-py";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionGroup {
    Git,
    Python,
}

impl InstructionGroup {
    pub const ALL: [InstructionGroup; 2] = [InstructionGroup::Git, InstructionGroup::Python];

    pub fn container_id(&self) -> &'static str {
        match self {
            InstructionGroup::Git => "git-instructions",
            InstructionGroup::Python => "python-instructions",
        }
    }

    fn panel_prefix(&self) -> &'static str {
        match self {
            InstructionGroup::Git => "git",
            InstructionGroup::Python => "python",
        }
    }

    fn index(&self) -> usize {
        match self {
            InstructionGroup::Git => 0,
            InstructionGroup::Python => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTarget {
    pub group: InstructionGroup,
    pub panel_id: String,
}

impl InstructionTarget {
    pub fn from_token(token: &str) -> Self {
        let group = if token.contains(PYTHON_MARKER) {
            InstructionGroup::Python
        } else {
            InstructionGroup::Git
        };
        Self {
            group,
            panel_id: format!("{}-{token}", group.panel_prefix()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Closed { group: InstructionGroup },
    Opened {
        group: InstructionGroup,
        panel_id: String,
        generation: u64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupState {
    pub open: bool,
    pub active_panel: Option<String>,
    pub active_button: Option<String>,
    pending: Option<(u64, String)>,
    generation: u64,
}

impl GroupState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionsModel {
    groups: [GroupState; 2],
}

impl InstructionsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(
        &mut self,
        group: InstructionGroup,
        open: bool,
        active_panel: Option<String>,
        active_button: Option<String>,
    ) {
        let state = self.group_mut(group);
        state.open = open;
        state.active_panel = active_panel;
        state.active_button = active_button;
    }

    pub fn group(&self, group: InstructionGroup) -> &GroupState {
        &self.groups[group.index()]
    }

    fn group_mut(&mut self, group: InstructionGroup) -> &mut GroupState {
        &mut self.groups[group.index()]
    }

    pub fn click(&mut self, token: &str) -> ClickOutcome {
        let target = InstructionTarget::from_token(token);
        let state = self.group_mut(target.group);

        if state.open && state.active_panel.as_deref() == Some(target.panel_id.as_str()) {
            state.open = false;
            state.active_panel = None;
            state.active_button = None;
            state.pending = None;
            return ClickOutcome::Closed {
                group: target.group,
            };
        }

        state.generation += 1;
        state.open = true;
        state.active_panel = None;
        state.active_button = Some(token.to_string());
        state.pending = Some((state.generation, target.panel_id.clone()));
        ClickOutcome::Opened {
            group: target.group,
            panel_id: target.panel_id,
            generation: state.generation,
        }
    }

    pub fn complete_activation(
        &mut self,
        group: InstructionGroup,
        generation: u64,
    ) -> Option<String> {
        let state = self.group_mut(group);
        let due = state.open
            && matches!(&state.pending, Some((pending, _)) if *pending == generation);
        if !due {
            return None;
        }
        let (_, panel_id) = state.pending.take()?;
        state.active_panel = Some(panel_id.clone());
        Some(panel_id)
    }

    pub fn abandon(&mut self, group: InstructionGroup, generation: u64) {
        let state = self.group_mut(group);
        if matches!(state.pending, Some((pending, _)) if pending == generation) {
            state.pending = None;
        }
    }
}
