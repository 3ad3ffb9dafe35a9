//! Team-creation step: name, description, invites.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::model::{StepData, StepId, TeamData};
use crate::requirements;
use crate::tui::form::{FormField, FormState, join_list, split_list};

use super::render_checklist;

const NAME: usize = 0;
const DESCRIPTION: usize = 1;
const INVITES: usize = 2;

pub struct TeamScreen {
    form: FormState,
}

impl TeamScreen {
    pub fn new(initial: Option<&StepData>) -> Self {
        let mut form = FormState::new(vec![
            FormField::new("Team name", "what this team is called"),
            FormField::new("Description", "what the team works on (optional)"),
            FormField::new("Invites", "emails, comma-separated (optional)"),
        ]);
        if let Some(StepData::Team(t)) = initial {
            form.set_value(NAME, &t.team_name);
            form.set_value(DESCRIPTION, &t.description);
            form.set_value(INVITES, join_list(&t.invites));
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
        StepData::Team(TeamData {
            team_name: self.form.value(NAME).trim().to_string(),
            description: self.form.value(DESCRIPTION).trim().to_string(),
            invites: split_list(self.form.value(INVITES)),
        })
    }

    pub fn is_ready(&self) -> bool {
        requirements::evaluate(StepId::TeamCreation, Some(&self.data())).is_ready()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).split(area);
        self.form.render(frame, chunks[0]);

        let report = requirements::evaluate(StepId::TeamCreation, Some(&self.data()));
        render_checklist(frame, chunks[1], &report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_name_is_required() {
        let mut screen = TeamScreen::new(None);
        assert!(!screen.is_ready());
        for c in "Crew".chars() {
            screen.on_char(c);
        }
        assert!(screen.is_ready());
    }

    #[test]
    fn prefill_round_trips() {
        let data = StepData::Team(TeamData {
            team_name: "Crew".into(),
            description: "Infra".into(),
            invites: vec!["ada@example.com".into()],
        });
        let screen = TeamScreen::new(Some(&data));
        assert_eq!(screen.data(), data);
    }
}
