//! Background timer chain for a [`TextCycler`].
//!
//! One thread per cycler. Each step schedules exactly one successor, so
//! timers never overlap. Sink writes happen while the running flag is locked;
//! once [`CyclerHandle::stop`] has flipped the flag and joined the thread,
//! no further write can occur.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::{Condvar, Mutex};

use super::{TextCycler, TextSink};

struct Shared {
    running: Mutex<bool>,
    wake: Condvar,
}

/// Handle to a running typewriter. Stopping or dropping it ends the chain.
pub struct CyclerHandle {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

/// Start `cycler` on its own thread, rendering into `sink`.
///
/// The first character is written immediately.
pub fn spawn<S>(cycler: TextCycler, sink: S) -> CyclerHandle
where
    S: TextSink + Send + 'static,
{
    let shared = Arc::new(Shared {
        running: Mutex::new(true),
        wake: Condvar::new(),
    });

    let worker = shared.clone();
    let thread = thread::spawn(move || run(cycler, sink, &worker));

    tracing::debug!("typewriter runner started");

    CyclerHandle {
        shared,
        thread: Some(thread),
    }
}

fn run<S: TextSink>(mut cycler: TextCycler, mut sink: S, shared: &Shared) {
    let mut running = shared.running.lock();

    while *running {
        let step = cycler.step();
        sink.set_text(&step.text);

        let deadline = Instant::now() + cycler.timing().delay(step.pace);
        while *running {
            if shared.wake.wait_until(&mut running, deadline).timed_out() {
                break;
            }
        }
    }
}

impl CyclerHandle {
    /// Check if the timer chain is still live. A runner whose sink panicked
    /// is not.
    pub fn is_running(&self) -> bool {
        let alive = self.thread.as_ref().is_some_and(|t| !t.is_finished());
        alive && *self.shared.running.lock()
    }

    /// Stop the chain and wait for the thread to exit.
    ///
    /// Must not be called from inside the sink.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };

        {
            let mut running = self.shared.running.lock();
            *running = false;
            self.shared.wake.notify_all();
        }

        if thread.join().is_err() {
            tracing::warn!("typewriter runner panicked");
        } else {
            tracing::debug!("typewriter runner stopped");
        }
    }
}

impl Drop for CyclerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::CyclerTiming;
    use std::time::Duration;

    /// Counts writes so tests can see whether the chain is still firing.
    #[derive(Default)]
    struct CountingSink {
        writes: usize,
        last: String,
    }

    impl TextSink for CountingSink {
        fn set_text(&mut self, text: &str) {
            self.writes += 1;
            self.last = text.to_string();
        }
    }

    fn fast_cycler(words: &[&str]) -> TextCycler {
        let ms = Duration::from_millis;
        TextCycler::new(
            words.iter().map(|w| w.to_string()).collect(),
            CyclerTiming::new(ms(3), ms(2), ms(5)).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_write_is_immediate() {
        let sink = Arc::new(Mutex::new(CountingSink::default()));
        let ms = Duration::from_millis;
        let slow = TextCycler::new(
            vec!["Go".into()],
            CyclerTiming::new(ms(10_000), ms(20_000), ms(30_000)).unwrap(),
        )
        .unwrap();

        let handle = spawn(slow, sink.clone());
        thread::sleep(ms(20));
        handle.stop();

        let sink = sink.lock();
        assert_eq!(sink.writes, 1);
        assert_eq!(sink.last, "G");
    }

    #[test]
    fn test_stop_ends_writes() {
        let sink = Arc::new(Mutex::new(CountingSink::default()));
        let handle = spawn(fast_cycler(&["Student", "Developer"]), sink.clone());
        assert!(handle.is_running());

        thread::sleep(Duration::from_millis(30));
        handle.stop();

        let after_stop = sink.lock().writes;
        assert!(after_stop > 0);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(sink.lock().writes, after_stop);
    }

    #[test]
    fn test_drop_ends_writes() {
        let sink = Arc::new(Mutex::new(CountingSink::default()));
        {
            let _handle = spawn(fast_cycler(&["Go"]), sink.clone());
            thread::sleep(Duration::from_millis(20));
        }

        let after_drop = sink.lock().writes;
        thread::sleep(Duration::from_millis(30));
        assert_eq!(sink.lock().writes, after_drop);
    }

    #[test]
    fn test_stop_interrupts_long_hold() {
        let ms = Duration::from_millis;
        let cycler = TextCycler::new(
            vec!["x".into()],
            CyclerTiming::new(ms(1), ms(2), ms(60_000)).unwrap(),
        )
        .unwrap();
        let handle = spawn(cycler, String::new());

        let started = Instant::now();
        thread::sleep(ms(10));
        handle.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    struct PanickingSink;

    impl TextSink for PanickingSink {
        fn set_text(&mut self, _text: &str) {
            panic!("sink failed");
        }
    }

    #[test]
    fn test_not_running_after_sink_panic() {
        let handle = spawn(fast_cycler(&["ab"]), PanickingSink);

        let deadline = Instant::now() + Duration::from_secs(2);
        while handle.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!handle.is_running());
        handle.stop();
    }
}
