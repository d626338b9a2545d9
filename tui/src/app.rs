//! App loop: owns the detection session, routes app events, and schedules
//! the simulated checks.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use futures::StreamExt;
use newscheck_core::DetectSession;
use newscheck_core::KeywordClassifier;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;
use tui_input::Input;
use tui_input::InputRequest;
use tui_input::backend::crossterm::EventHandler;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::key_hint;
use crate::ui;

/// How often the busy indicator advances while a check is in flight.
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

pub(crate) struct App {
    session: DetectSession,
    classifier: Arc<KeywordClassifier>,
    input: Input,
    app_event_tx: AppEventSender,
    app_event_rx: UnboundedReceiver<AppEvent>,
    spinner_tick: usize,
    should_exit: bool,
}

impl App {
    pub(crate) fn new(classifier: KeywordClassifier, initial_text: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = DetectSession::new();
        let input = match initial_text {
            Some(text) => {
                let text = sanitize_input(&text);
                session.set_input(text.clone());
                Input::new(text)
            }
            None => Input::default(),
        };
        Self {
            session,
            classifier: Arc::new(classifier),
            input,
            app_event_tx: AppEventSender::new(tx),
            app_event_rx: rx,
            spinner_tick: 0,
            should_exit: false,
        }
    }

    pub(crate) fn session(&self) -> &DetectSession {
        &self.session
    }

    pub(crate) fn input(&self) -> &Input {
        &self.input
    }

    pub(crate) fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub(crate) async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        spawn_input_forwarder(self.app_event_tx.clone());
        while !self.should_exit {
            terminal.draw(|frame| ui::draw(frame, &self))?;
            tokio::select! {
                maybe_event = self.app_event_rx.recv() => {
                    let Some(event) = maybe_event else { break };
                    self.handle_app_event(event);
                }
                _ = tokio::time::sleep(SPINNER_INTERVAL), if self.session.is_busy() => {
                    self.spinner_tick = self.spinner_tick.wrapping_add(1);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => self.handle_key_event(key_event),
            AppEvent::Paste(text) => self.handle_paste(text),
            AppEvent::RequestRedraw => {}
            AppEvent::DetectionComplete { request, verdict } => {
                if self.session.resolve(request, verdict) {
                    tracing::info!(request, ?verdict, "detection complete");
                }
            }
            AppEvent::ExitRequest => self.should_exit = true,
        }
    }

    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        if key_hint::ctrl(KeyCode::Char('c')).is_press(key_event)
            || key_hint::ctrl(KeyCode::Char('q')).is_press(key_event)
        {
            self.app_event_tx.send(AppEvent::ExitRequest);
            return;
        }
        if key_hint::ctrl(KeyCode::Char('l')).is_press(key_event) {
            self.clear();
            return;
        }
        if key_hint::plain(KeyCode::Enter).is_press(key_event) {
            self.try_detect();
            return;
        }
        // Everything else edits the draft. Editing stays enabled while a
        // check is in flight; only the trigger is disabled then.
        if self.input.handle_event(&Event::Key(key_event)).is_some() {
            self.session.set_input(self.input.value());
        }
    }

    pub(crate) fn handle_paste(&mut self, text: String) {
        for ch in sanitize_input(&text).chars() {
            let _ = self.input.handle(InputRequest::InsertChar(ch));
        }
        self.session.set_input(self.input.value());
    }

    /// Trigger a detection if the session allows one, and schedule the
    /// simulated check. The task resolves by request id, so a `clear` in
    /// the meantime makes its result a no-op.
    fn try_detect(&mut self) {
        let Some(detection) = self.session.start() else {
            return;
        };
        tracing::info!(
            request = detection.request,
            latency_ms = detection.latency.as_millis() as u64,
            "starting simulated check"
        );
        let tx = self.app_event_tx.clone();
        let classifier = Arc::clone(&self.classifier);
        tokio::spawn(async move {
            tokio::time::sleep(detection.latency).await;
            let verdict = classifier.classify(&detection.text);
            tx.send(AppEvent::DetectionComplete {
                request: detection.request,
                verdict,
            });
        });
    }

    fn clear(&mut self) {
        self.session.clear();
        self.input.reset();
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut DetectSession {
        &mut self.session
    }
}

/// The input is single-line; carriage returns and newlines become spaces.
fn sanitize_input(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn spawn_input_forwarder(tx: AppEventSender) {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            match event {
                Ok(Event::Key(key_event)) => tx.send(AppEvent::Key(key_event)),
                Ok(Event::Paste(text)) => tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(..)) => tx.send(AppEvent::RequestRedraw),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("terminal event stream failed: {e}");
                    tx.send(AppEvent::ExitRequest);
                    break;
                }
            }
        }
    });
}
