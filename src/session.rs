//! Game session state: pause, game over, time scale and cursor
//!
//! Overlays such as the quest log borrow the session through
//! [`SessionControl`] to freeze time and show the cursor while they are open.
//! Their requests compose with the pause menu: closing an overlay while the
//! game is paused leaves time frozen.

/// Time and cursor control exposed to UI overlays
pub trait SessionControl {
    /// Stop game time while an overlay is open
    fn suspend_time(&mut self);

    /// Release an earlier `suspend_time`
    fn resume_time(&mut self);

    fn set_cursor_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::GameOver => "game_over",
        }
    }
}

#[derive(Debug)]
pub struct GameSession {
    state: SessionState,
    // Overlay requests
    overlay_suspended: bool,
    overlay_cursor: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Running,
            overlay_suspended: false,
            overlay_cursor: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Open the pause menu. Only valid while running.
    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        log::info!("Game paused");
        true
    }

    /// Close the pause menu
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        log::info!("Game resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            SessionState::GameOver => false,
        }
    }

    /// End the session. Freezes time until `restart`.
    pub fn game_over(&mut self) -> bool {
        if self.state == SessionState::GameOver {
            return false;
        }
        self.state = SessionState::GameOver;
        log::info!("Game over");
        true
    }

    /// Start a fresh session, dropping pause and overlay requests
    pub fn restart(&mut self) {
        self.state = SessionState::Running;
        self.overlay_suspended = false;
        self.overlay_cursor = false;
        log::info!("Session restarted");
    }

    /// Multiplier applied to the frame delta: 1.0 while playing, 0.0 when frozen
    pub fn time_scale(&self) -> f32 {
        if self.state == SessionState::Running && !self.overlay_suspended {
            1.0
        } else {
            0.0
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.overlay_cursor || self.state != SessionState::Running
    }

    pub fn pause_panel_visible(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn game_over_panel_visible(&self) -> bool {
        self.state == SessionState::GameOver
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionControl for GameSession {
    fn suspend_time(&mut self) {
        self.overlay_suspended = true;
    }

    fn resume_time(&mut self) {
        self.overlay_suspended = false;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.overlay_cursor = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_and_resume() {
        let mut session = GameSession::new();
        assert_eq!(session.time_scale(), 1.0);
        assert!(!session.cursor_visible());

        assert!(session.pause());
        assert!(!session.pause());
        assert_eq!(session.time_scale(), 0.0);
        assert!(session.cursor_visible());
        assert!(session.pause_panel_visible());

        assert!(session.resume());
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.time_scale(), 1.0);
        assert!(!session.pause_panel_visible());
    }

    #[test]
    fn test_game_over_blocks_pause_toggle() {
        let mut session = GameSession::new();
        session.pause();

        assert!(session.game_over());
        assert!(!session.pause_panel_visible());
        assert!(session.game_over_panel_visible());
        assert!(!session.toggle_pause());
        assert!(!session.resume());
        assert_eq!(session.time_scale(), 0.0);

        session.restart();
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.time_scale(), 1.0);
    }

    #[test]
    fn test_overlay_requests_compose_with_pause() {
        let mut session = GameSession::new();

        session.suspend_time();
        session.set_cursor_visible(true);
        assert_eq!(session.time_scale(), 0.0);
        assert!(session.cursor_visible());

        session.pause();
        session.resume_time();
        session.set_cursor_visible(false);
        // Still paused from the menu
        assert_eq!(session.time_scale(), 0.0);
        assert!(session.cursor_visible());

        session.resume();
        assert_eq!(session.time_scale(), 1.0);
        assert!(!session.cursor_visible());
    }

    #[test]
    fn test_restart_clears_overlay_requests() {
        let mut session = GameSession::new();
        session.suspend_time();
        session.set_cursor_visible(true);

        session.restart();

        assert_eq!(session.time_scale(), 1.0);
        assert!(!session.cursor_visible());
    }
}
