/// UI-only state of the terminal host. Game state lives in the session.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    help_visible: bool,
    debug_log_visible: bool,
    message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    pub fn toggle_help_visible(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn debug_log_visible(&self) -> bool {
        self.debug_log_visible
    }

    pub fn set_debug_log_visible(&mut self, visible: bool) {
        self.debug_log_visible = visible;
    }

    pub fn toggle_debug_log_visible(&mut self) {
        self.debug_log_visible = !self.debug_log_visible;
    }

    /// Status line text, replacing the previous one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_and_message() {
        let mut s = AppState::new();
        assert!(!s.help_visible());
        s.toggle_help_visible();
        assert!(s.help_visible());
        s.toggle_debug_log_visible();
        assert!(s.debug_log_visible());
        s.set_message("Level 2");
        assert_eq!(s.message(), Some("Level 2"));
        s.clear_message();
        assert_eq!(s.message(), None);
    }
}
