//! Render targets for the typewriter.

use std::sync::Arc;

use parking_lot::Mutex;
use spark_signals::Signal;

/// Anything that can display a line of text.
///
/// Each call replaces the previously displayed text.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Reactive sink: effects reading the signal re-run on every step.
impl TextSink for Signal<String> {
    fn set_text(&mut self, text: &str) {
        self.set(text.to_string());
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// Shared sink, readable from another thread while a runner writes to it.
impl<S: TextSink> TextSink for Arc<Mutex<S>> {
    fn set_text(&mut self, text: &str) {
        self.lock().set_text(text);
    }
}
