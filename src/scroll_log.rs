// src/scroll_log.rs

//! Fixed-capacity, newest-first message log drawn as stacked text lines.

use crate::constants::LINE_SPACING;
use crate::logging::LineSink;
use crate::ui::surface::Surface;
use egui::emath::TSTransform;
use egui::{pos2, Color32, Pos2};
use std::fmt::Write;

/// One on-screen line: its current text and fixed vertical offset.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub text: String,
    pub offset: f32,
}

pub struct ScrollLog<S: LineSink> {
    /// Ring buffer of messages; `head` is the newest.
    entries: Vec<String>,
    head: usize,
    lines: Vec<LogLine>,
    font_size: f32,
    color: Color32,
    transform: TSTransform,
    sink: S,
}

impl<S: LineSink> ScrollLog<S> {
    /// Creates a log holding `capacity` lines (at least one), all empty.
    pub fn new(capacity: usize, font_size: f32, sink: S) -> Self {
        let capacity = capacity.max(1);
        let lines = (0..capacity)
            .map(|i| LogLine {
                text: String::new(),
                offset: i as f32 * font_size * LINE_SPACING,
            })
            .collect();

        let mut log = Self {
            entries: vec![String::new(); capacity],
            head: 0,
            lines,
            font_size,
            color: Color32::WHITE,
            transform: TSTransform::IDENTITY,
            sink,
        };
        log.update_lines();
        log
    }

    pub fn set_position(&mut self, origin: Pos2) {
        self.transform.translation = origin.to_vec2();
    }

    pub fn position(&self) -> Pos2 {
        self.transform.translation.to_pos2()
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Pushes `message` to the front, evicting the oldest entry.
    pub fn log(&mut self, message: &str) {
        let capacity = self.entries.len();
        self.head = (self.head + capacity - 1) % capacity;

        let slot = &mut self.entries[self.head];
        slot.clear();
        slot.push_str(message);

        self.sink.write_line(message);
        self.update_lines();
    }

    /// Messages from newest to oldest, including empty padding.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        let capacity = self.entries.len();
        (0..capacity).map(move |i| self.entries[(self.head + i) % capacity].as_str())
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Draws every line, composing the log's own transform with `at`.
    pub fn render(&self, surface: &mut dyn Surface, at: TSTransform) {
        let transform = at * self.transform;
        for line in &self.lines {
            let pos = transform.mul_pos(pos2(0.0, line.offset));
            surface.text(
                pos,
                &line.text,
                self.font_size * transform.scaling,
                self.color,
            );
        }
    }

    fn update_lines(&mut self) {
        debug_assert_eq!(self.entries.len(), self.lines.len());
        let capacity = self.entries.len();
        for (i, line) in self.lines.iter_mut().enumerate() {
            let message = &self.entries[(self.head + i) % capacity];
            line.text.clear();
            // writing into a String cannot fail
            let _ = write!(line.text, "{}: {}", i, message);
        }
    }
}

impl<S: LineSink> std::fmt::Debug for ScrollLog<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLog")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("origin", &self.position())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::recording::RecordingSurface;
    use egui::Vec2;

    fn log_with(capacity: usize) -> ScrollLog<Vec<String>> {
        ScrollLog::new(capacity, 20.0, Vec::new())
    }

    fn retained(log: &ScrollLog<Vec<String>>) -> Vec<&str> {
        log.messages().collect()
    }

    #[test]
    fn starts_padded_with_empty_slots() {
        let log = log_with(3);
        assert_eq!(log.capacity(), 3);
        assert_eq!(retained(&log), vec!["", "", ""]);
        let texts: Vec<&str> = log.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["0: ", "1: ", "2: "]);
    }

    #[test]
    fn newest_first_with_eviction() {
        let mut log = log_with(3);
        log.log("a");
        log.log("b");
        log.log("c");
        assert_eq!(retained(&log), vec!["c", "b", "a"]);

        log.log("d");
        assert_eq!(retained(&log), vec!["d", "c", "b"]);
        assert_eq!(log.capacity(), 3);
    }

    #[test]
    fn slot_zero_is_newest_and_last_slot_is_oldest() {
        let mut log = log_with(4);
        for i in 0..11 {
            log.log(&format!("message {}", i));
            assert_eq!(log.lines()[0].text, format!("0: message {}", i));
            assert_eq!(log.lines().len(), 4);
        }
        assert_eq!(log.lines()[3].text, "3: message 7");
    }

    #[test]
    fn every_message_reaches_the_sink() {
        let mut log = log_with(2);
        log.log("Closed");
        log.log("Resized: (800; 600)");
        log.log("GainedFocus");
        assert_eq!(
            log.sink(),
            &vec![
                "Closed".to_string(),
                "Resized: (800; 600)".to_string(),
                "GainedFocus".to_string()
            ]
        );
    }

    #[test]
    fn zero_capacity_holds_one_line() {
        let mut log = log_with(0);
        log.log("x");
        log.log("y");
        assert_eq!(retained(&log), vec!["y"]);
    }

    #[test]
    fn lines_are_spaced_by_font_size() {
        let log = log_with(3);
        let offsets: Vec<f32> = log.lines().iter().map(|l| l.offset).collect();
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[1] - 22.0).abs() < 1e-4);
        assert!((offsets[2] - 44.0).abs() < 1e-4);
    }

    #[test]
    fn render_composes_transforms() {
        let mut log = log_with(2);
        log.set_position(pos2(50.0, 50.0));
        log.log("hello");

        let mut surface = RecordingSurface::new(800.0, 600.0);
        log.render(&mut surface, TSTransform::from_translation(Vec2::new(10.0, 5.0)));

        let texts = surface.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], (pos2(60.0, 55.0), "0: hello"));
        assert_eq!(texts[1].1, "1: ");
        assert!((texts[1].0.y - 77.0).abs() < 1e-4);
    }
}
