//! First-agent step: name, template, instructions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::model::{AgentData, StepData, StepId};
use crate::requirements;
use crate::tui::form::{FormField, FormState};

use super::render_checklist;

const NAME: usize = 0;
const TEMPLATE: usize = 1;
const INSTRUCTIONS: usize = 2;

pub struct AgentScreen {
    form: FormState,
}

impl AgentScreen {
    pub fn new(initial: Option<&StepData>) -> Self {
        let mut form = FormState::new(vec![
            FormField::new("Agent name", "what to call it"),
            FormField::new("Template", "e.g. triage, reviewer, planner"),
            FormField::new("Instructions", "extra guidance (optional)"),
        ]);
        if let Some(StepData::Agent(a)) = initial {
            form.set_value(NAME, &a.agent_name);
            form.set_value(TEMPLATE, &a.template);
            form.set_value(INSTRUCTIONS, &a.instructions);
        }
        Self { form }
    }

    pub fn on_char(&mut self, c: char) -> bool {
        self.form.on_char(c)
    }

    pub fn on_backspace(&mut self) -> bool {
        self.form.on_backspace()
    }

    pub fn focus_next(&mut self) {
        self.form.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.form.focus_prev();
    }

    pub fn data(&self) -> StepData {
        StepData::Agent(AgentData {
            agent_name: self.form.value(NAME).trim().to_string(),
            template: self.form.value(TEMPLATE).trim().to_string(),
            instructions: self.form.value(INSTRUCTIONS).trim().to_string(),
        })
    }

    pub fn is_ready(&self) -> bool {
        requirements::evaluate(StepId::FirstAgent, Some(&self.data())).is_ready()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).split(area);
        self.form.render(frame, chunks[0]);

        let report = requirements::evaluate(StepId::FirstAgent, Some(&self.data()));
        render_checklist(frame, chunks[1], &report);
    }
}
