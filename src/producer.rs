//! Background producer feeding a [`SampleWindow`] at a fixed cadence.
//!
//! The producer runs on its own thread and sleeps between ticks by waiting on a
//! stop channel with a timeout, so a stop request wakes it immediately. `stop`
//! sends the request and joins the thread: once it returns, no further appends
//! happen.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{PlotError, Result};
use crate::window::SampleWindow;

/// A source of successive sample values.
pub trait SampleSource: Send {
    fn next_sample(&mut self) -> f32;
}

impl<F> SampleSource for F
where
    F: FnMut() -> f32 + Send,
{
    fn next_sample(&mut self) -> f32 {
        self()
    }
}

/// `sin(phase)`, advancing the phase by `step` before each sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineSource {
    phase: f32,
    step: f32,
}

impl SineSource {
    pub fn new(step: f32) -> Self {
        Self { phase: 0.0, step }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl SampleSource for SineSource {
    fn next_sample(&mut self) -> f32 {
        self.phase += self.step;
        self.phase.sin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerState {
    Idle,
    Running,
    Stopped,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<Box<dyn SampleSource>>,
}

pub struct SampleProducer {
    window: Arc<SampleWindow>,
    interval: Duration,
    // Parked here while not running; moved into the thread on start and
    // handed back when the thread exits.
    source: Option<Box<dyn SampleSource>>,
    worker: Option<Worker>,
    state: ProducerState,
}

impl SampleProducer {
    pub fn new<S>(window: Arc<SampleWindow>, source: S, interval: Duration) -> Self
    where
        S: SampleSource + 'static,
    {
        Self {
            window,
            interval,
            source: Some(Box::new(source)),
            worker: None,
            state: ProducerState::Idle,
        }
    }

    /// Current state. A worker that died on its own (a panicking source or
    /// listener) reports `Stopped` even before it has been joined.
    pub fn state(&self) -> ProducerState {
        match &self.worker {
            Some(worker) if worker.handle.is_finished() => ProducerState::Stopped,
            _ => self.state,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn window(&self) -> &Arc<SampleWindow> {
        &self.window
    }

    /// Start ticking. No-op while already running; after a stop, resumes with
    /// the same source. Fails with [`PlotError::SourceLost`] once a panicking
    /// worker has taken the source down with it.
    pub fn start(&mut self) -> Result<()> {
        self.reap_finished();
        if self.state == ProducerState::Running {
            return Ok(());
        }
        let Some(source) = self.source.take() else {
            return Err(PlotError::SourceLost);
        };

        let (stop_tx, stop_rx) = mpsc::channel();
        let window = Arc::clone(&self.window);
        let interval = self.interval;
        let handle = std::thread::Builder::new()
            .name("SampleProducer".to_string())
            .spawn(move || run_loop(source, &window, interval, &stop_rx))
            .map_err(PlotError::Spawn)?;

        log::debug!("sample producer started ({:?} per tick)", interval);
        self.worker = Some(Worker { stop_tx, handle });
        self.state = ProducerState::Running;
        Ok(())
    }

    /// Request cancellation and wait for the thread to finish its current tick.
    /// No-op unless running.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        // A send error means the thread already exited; join still applies.
        let _ = worker.stop_tx.send(());
        self.join(worker);
        log::debug!("sample producer stopped");
    }

    // Join a worker whose thread already ended without being asked to.
    fn reap_finished(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.handle.is_finished()) {
            if let Some(worker) = self.worker.take() {
                self.join(worker);
            }
        }
    }

    fn join(&mut self, worker: Worker) {
        match worker.handle.join() {
            Ok(source) => self.source = Some(source),
            Err(_) => log::error!("sample producer thread panicked; its source is lost"),
        }
        self.state = ProducerState::Stopped;
    }
}

impl Drop for SampleProducer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    mut source: Box<dyn SampleSource>,
    window: &SampleWindow,
    interval: Duration,
    stop_rx: &Receiver<()>,
) -> Box<dyn SampleSource> {
    loop {
        match stop_rx.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) => {
                log::debug!("sample producer thread exiting: stop requested");
                break;
            }
            Err(TryRecvError::Disconnected) => {
                log::debug!("sample producer thread exiting: controller gone");
                break;
            }
        }
        window.append(source.next_sample());
        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) => {
                log::debug!("sample producer thread exiting: stop requested while waiting");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("sample producer thread exiting: controller gone");
                break;
            }
        }
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_source_advances_phase_before_sampling() {
        let mut src = SineSource::new(0.16);
        let first = src.next_sample();
        assert!((first - 0.16f32.sin()).abs() < 1e-6);
        let second = src.next_sample();
        assert!((second - 0.32f32.sin()).abs() < 1e-6);
        assert!((src.phase() - 0.32).abs() < 1e-6);
    }

    #[test]
    fn closures_are_sources() {
        let mut n = 0.0f32;
        let mut src = move || {
            n += 1.0;
            n
        };
        assert_eq!(SampleSource::next_sample(&mut src), 1.0);
        assert_eq!(SampleSource::next_sample(&mut src), 2.0);
    }
}
