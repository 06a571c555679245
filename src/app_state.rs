/// Mutable harness state shared by the event handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessState {
    /// Windows created so far, including re-creations.
    pub window_count: u32,
    /// Whether the cursor is currently grabbed.
    pub grabbed: bool,
    /// Whether the joystick info panel is shown.
    pub show_joysticks: bool,
}

impl HarnessState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new window; a fresh window never starts grabbed.
    pub fn window_created(&mut self) {
        self.window_count += 1;
        self.grabbed = false;
    }

    /// Flips the grab flag and returns the new value.
    pub fn toggle_grab(&mut self) -> bool {
        self.grabbed = !self.grabbed;
        self.grabbed
    }

    pub fn toggle_joysticks(&mut self) -> bool {
        self.show_joysticks = !self.show_joysticks;
        self.show_joysticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_creation_counts_and_releases_grab() {
        let mut state = HarnessState::new();
        state.window_created();
        assert!(state.toggle_grab());
        state.window_created();
        assert_eq!(state.window_count, 2);
        assert!(!state.grabbed);
    }

    #[test]
    fn toggles_flip() {
        let mut state = HarnessState::new();
        assert!(state.toggle_grab());
        assert!(!state.toggle_grab());
        assert!(state.toggle_joysticks());
        assert!(!state.toggle_joysticks());
    }
}
