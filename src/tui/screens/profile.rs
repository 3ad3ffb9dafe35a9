//! Profile-setup step: name, bio, languages, interests, avatar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::model::{ProfileData, StepData, StepId};
use crate::requirements;
use crate::tui::form::{FormField, FormState, join_list, split_list};

use super::render_checklist;

const NAME: usize = 0;
const BIO: usize = 1;
const LANGUAGES: usize = 2;
const INTERESTS: usize = 3;
const AVATAR: usize = 4;

pub struct ProfileScreen {
    form: FormState,
}

impl ProfileScreen {
    /// Builds the form, prefilled from committed data or a draft.
    pub fn new(initial: Option<&StepData>) -> Self {
        let mut form = FormState::new(vec![
            FormField::new("Display name", "the name teammates see"),
            FormField::new("Bio", "a sentence about what you do"),
            FormField::new("Languages", "comma-separated, e.g. rust, go"),
            FormField::new("Interests", "comma-separated (optional)"),
            FormField::new("Avatar", "an emoji (optional)"),
        ]);
        if let Some(StepData::Profile(p)) = initial {
            form.set_value(NAME, &p.display_name);
            form.set_value(BIO, &p.bio);
            form.set_value(LANGUAGES, join_list(&p.languages));
            form.set_value(INTERESTS, join_list(&p.interests));
            form.set_value(AVATAR, p.avatar.clone().unwrap_or_default());
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

    /// The form's current value as step data.
    pub fn data(&self) -> StepData {
        let avatar = self.form.value(AVATAR).trim();
        StepData::Profile(ProfileData {
            display_name: self.form.value(NAME).trim().to_string(),
            bio: self.form.value(BIO).trim().to_string(),
            languages: split_list(self.form.value(LANGUAGES)),
            interests: split_list(self.form.value(INTERESTS)),
            avatar: (!avatar.is_empty()).then(|| avatar.to_string()),
        })
    }

    /// Whether every required item is satisfied.
    pub fn is_ready(&self) -> bool {
        requirements::evaluate(StepId::ProfileSetup, Some(&self.data())).is_ready()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks =
            Layout::vertical([Constraint::Length(11), Constraint::Min(0)]).split(area);
        self.form.render(frame, chunks[0]);

        let report = requirements::evaluate(StepId::ProfileSetup, Some(&self.data()));
        render_checklist(frame, chunks[1], &report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut ProfileScreen, s: &str) {
        for c in s.chars() {
            screen.on_char(c);
        }
    }

    #[test]
    fn empty_form_is_not_ready() {
        let screen = ProfileScreen::new(None);
        assert!(!screen.is_ready());
    }

    #[test]
    fn required_fields_make_it_ready() {
        let mut screen = ProfileScreen::new(None);
        type_str(&mut screen, "Ada");
        screen.focus_next();
        type_str(&mut screen, "I build compilers.");
        screen.focus_next();
        type_str(&mut screen, "rust, ml");
        assert!(screen.is_ready());

        match screen.data() {
            StepData::Profile(p) => {
                assert_eq!(p.display_name, "Ada");
                assert_eq!(p.languages, vec!["rust", "ml"]);
                assert!(p.interests.is_empty());
                assert!(p.avatar.is_none());
            }
            other => panic!("unexpected data: {other:?}"),
        }
    }

    #[test]
    fn prefill_round_trips() {
        let data = StepData::Profile(ProfileData {
            display_name: "Ada".into(),
            bio: "bio".into(),
            languages: vec!["rust".into(), "go".into()],
            interests: vec!["types".into()],
            avatar: Some("🦀".into()),
        });
        let screen = ProfileScreen::new(Some(&data));
        assert_eq!(screen.data(), data);
    }
}
