//! Application state for the interactive demo.
//!
//! Owns the step progress widget, the active theme and a transient status
//! line. Key presses are translated to [`Action`]s and applied here; the
//! runtime only decides when to redraw.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stepper_types::StepProgressSettings;
use tracing::debug;

use crate::ui::theme::{self, LoadedTheme, catalog};
use crate::ui::widgets::step_progress::{StepProgress, StepProgressStyle};

/// Upper bound on steps the demo lets the user add.
pub const MAX_DEMO_STEPS: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    AddStep,
    RemoveStep,
    CycleTheme,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
        }
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Advance),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Retreat),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::AddStep),
            KeyCode::Char('-') => Some(Action::RemoveStep),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

pub struct App {
    pub widget: StepProgress,
    pub theme: LoadedTheme,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
    settings: StepProgressSettings,
}

impl App {
    pub fn new(settings: StepProgressSettings) -> Result<Self> {
        let theme = theme::load(settings.theme.as_deref());
        debug!(theme = theme.definition.id, "loaded demo theme");
        let widget = StepProgress::from_settings(&settings, theme.theme.as_ref()).context("invalid step progress style")?;
        Ok(Self {
            widget,
            theme,
            status: None,
            should_quit: false,
            settings,
        })
    }

    /// Applies the action bound to `key`. Returns whether a redraw is needed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        self.status = None;
        let step_count = self.widget.step_count();
        let progress_count = self.widget.progress_count();
        match action {
            Action::Advance => {
                if progress_count < step_count {
                    self.widget.set_progress_count(progress_count + 1);
                } else {
                    self.set_status(StatusKind::Info, "All steps complete");
                }
            }
            Action::Retreat => self.widget.set_progress_count(progress_count.saturating_sub(1)),
            Action::AddStep => {
                if step_count < MAX_DEMO_STEPS {
                    self.widget.set_step_count(step_count + 1);
                } else {
                    self.set_status(StatusKind::Warning, format!("At most {MAX_DEMO_STEPS} steps"));
                }
            }
            Action::RemoveStep => {
                let step_count = step_count.saturating_sub(1);
                self.widget.set_step_count(step_count);
                self.widget.set_progress_count(progress_count.min(step_count));
            }
            Action::CycleTheme => self.cycle_theme(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn cycle_theme(&mut self) {
        if !theme::supports_truecolor() {
            self.set_status(StatusKind::Warning, "Theme switching requires a truecolor terminal");
            return;
        }
        let next = catalog::next_after(self.theme.definition.id, false);
        let loaded = LoadedTheme::from_definition(next);
        match StepProgressStyle::resolve(&self.settings, loaded.theme.as_ref()) {
            Ok(style) => self.widget.set_style(style),
            Err(error) => {
                self.set_status(StatusKind::Error, error.to_string());
                return;
            }
        }
        self.theme = loaded;
        debug!(theme = next.id, "switched demo theme");
        self.set_status(StatusKind::Info, format!("Theme: {}", next.label));
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(StatusLine {
            kind,
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use crossterm::event::KeyEventKind;

    fn app(step_count: u16, progress_count: u16) -> App {
        let settings = StepProgressSettings {
            step_count,
            progress_count,
            ..StepProgressSettings::default()
        };
        App::new(settings).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(Action::from_key(key(KeyCode::Right)), Some(Action::Advance));
        assert_eq!(Action::from_key(key(KeyCode::Char('-'))), Some(Action::RemoveStep));
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(Action::from_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut app = app(3, 2);
        assert!(app.handle_key(key(KeyCode::Right)));
        assert_eq!(app.widget.progress_count(), 3);
        app.apply(Action::Advance);
        assert_eq!(app.widget.progress_count(), 3);
        assert_eq!(app.status.as_ref().map(|status| status.kind), Some(StatusKind::Info));
    }

    #[test]
    fn removing_steps_clamps_progress() {
        let mut app = app(3, 3);
        app.apply(Action::RemoveStep);
        assert_eq!(app.widget.step_count(), 2);
        assert_eq!(app.widget.progress_count(), 2);
    }

    #[test]
    fn retreat_never_underflows() {
        let mut app = app(4, 0);
        app.apply(Action::Retreat);
        assert_eq!(app.widget.progress_count(), 0);
    }

    #[test]
    fn cycling_theme_restyles_widget() {
        temp_env::with_vars([(theme::COLOR_MODE_ENV, Some("truecolor")), (theme::THEME_ENV, None)], || {
            let mut app = App::new(StepProgressSettings::default()).unwrap();
            assert_eq!(app.theme.definition.id, "dracula");

            app.apply(Action::CycleTheme);
            assert_eq!(app.theme.definition.id, "nord");
            assert_eq!(app.widget.style().progress_color, app.theme.theme.step_progress_color());
        });
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app(2, 0);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
