use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::assets::{AssetCache, AssetLoader};
use crate::events::{CreativeEvent, EventBus};
use crate::handshake::{HandshakeGate, HostNotification};
use crate::input::{JoystickSignal, JoystickSink, JoystickStyle, JoystickWidget};
use crate::render::{RenderBackend, RenderCompositor};
use crate::time::{FrameScheduler, ThrottleClock, TimerTicks, DEFAULT_THROTTLE};
use crate::viewport::{HitLayer, ViewportManager, WindowMetrics};

/// Orchestrator timing and input configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Platform tick cadence (the animation-frame analog).
    pub frame_interval: Duration,
    /// Minimum interval between accepted frames.
    pub throttle: Duration,
    pub joystick_style: JoystickStyle,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            throttle: DEFAULT_THROTTLE,
            joystick_style: JoystickStyle::default(),
        }
    }
}

enum Control {
    Stop,
}

/// Clonable handle for stopping a running orchestrator.
#[derive(Clone)]
pub struct OrchestratorHandle {
    tx: mpsc::UnboundedSender<Control>,
}

impl OrchestratorHandle {
    pub fn stop(&self) {
        let _ = self.tx.send(Control::Stop);
    }
}

/// Clonable handle for reporting platform resize events.
#[derive(Clone)]
pub struct ResizeNotifier {
    tx: mpsc::UnboundedSender<()>,
}

impl ResizeNotifier {
    pub fn notify(&self) {
        let _ = self.tx.send(());
    }
}

enum Step {
    Tick(Instant),
    Host(HostNotification),
    Joystick(JoystickSignal),
    Resize,
    Stop,
}

/// Top-level lifecycle controller.
///
/// An explicit value, not a singleton: embedders construct one per running
/// creative, register backends and widgets, call [`Orchestrator::init`], and
/// then drive it with [`Orchestrator::run`]. Asset batches load through
/// [`Orchestrator::loader_mut`] independently of the render loop — a frame
/// may render before, during, or after any given load; callers wanting
/// assets-before-frames await their batches before `init`.
pub struct Orchestrator<M: WindowMetrics> {
    loader: AssetLoader,
    viewport: ViewportManager<M>,
    compositor: RenderCompositor,
    scheduler: FrameScheduler<TimerTicks>,
    gate: HandshakeGate,
    events: EventBus,

    widgets: Vec<Box<dyn JoystickWidget>>,
    joystick_style: JoystickStyle,
    joystick_tx: mpsc::UnboundedSender<JoystickSignal>,
    joystick_rx: mpsc::UnboundedReceiver<JoystickSignal>,

    resize_tx: mpsc::UnboundedSender<()>,
    resize_rx: mpsc::UnboundedReceiver<()>,

    control_tx: mpsc::UnboundedSender<Control>,
    control_rx: mpsc::UnboundedReceiver<Control>,
}

impl<M: WindowMetrics> Orchestrator<M> {
    pub fn new(metrics: M, gate: HandshakeGate) -> Self {
        Self::with_config(metrics, gate, OrchestratorConfig::default())
    }

    pub fn with_config(metrics: M, gate: HandshakeGate, config: OrchestratorConfig) -> Self {
        let (joystick_tx, joystick_rx) = mpsc::unbounded_channel();
        let (resize_tx, resize_rx) = mpsc::unbounded_channel();
        let (control_tx, control_rx) = mpsc::unbounded_channel();

        Self {
            loader: AssetLoader::new(),
            viewport: ViewportManager::new(metrics),
            compositor: RenderCompositor::new(),
            scheduler: FrameScheduler::with_clock(
                TimerTicks::new(config.frame_interval),
                ThrottleClock::with_threshold(config.throttle),
            ),
            gate,
            events: EventBus::new(),
            widgets: Vec::new(),
            joystick_style: config.joystick_style,
            joystick_tx,
            joystick_rx,
            resize_tx,
            resize_rx,
            control_tx,
            control_rx,
        }
    }

    // ── wiring (before init) ──────────────────────────────────────────────

    pub fn register_backend(&mut self, backend: Box<dyn RenderBackend>) {
        self.compositor.register(backend);
    }

    pub fn set_hit_layer(&mut self, layer: Box<dyn HitLayer>) {
        self.viewport.set_hit_layer(layer);
    }

    pub fn attach_joystick(&mut self, widget: Box<dyn JoystickWidget>) {
        self.widgets.push(widget);
    }

    pub fn loader_mut(&mut self) -> &mut AssetLoader {
        &mut self.loader
    }

    pub fn assets(&self) -> &AssetCache {
        self.loader.cache()
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Sink for an externally-driven joystick widget.
    pub fn joystick_sink(&self) -> JoystickSink {
        JoystickSink::new(self.joystick_tx.clone())
    }

    pub fn resize_notifier(&self) -> ResizeNotifier {
        ResizeNotifier {
            tx: self.resize_tx.clone(),
        }
    }

    pub fn handle(&self) -> OrchestratorHandle {
        OrchestratorHandle {
            tx: self.control_tx.clone(),
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Startup sequence: surfaces → input widgets → handshake → initial
    /// sizing → scheduler. Nothing here is fatal; failing pieces are skipped
    /// and logged.
    pub async fn init(&mut self) {
        self.compositor.init_backends();
        self.init_widgets();

        self.gate.wait().await;

        self.on_resize();
        self.scheduler.start();

        log::info!(
            "creative started: {} backend(s), {} widget(s)",
            self.compositor.ready_count(),
            self.widgets.len(),
        );
    }

    /// Cooperative run loop; returns after [`OrchestratorHandle::stop`].
    pub async fn run(&mut self) {
        loop {
            let step = tokio::select! {
                biased;
                now = self.scheduler.source_mut().next_tick() => Step::Tick(now),
                notification = self.gate.next_notification() => Step::Host(notification),
                signal = self.joystick_rx.recv() => match signal {
                    Some(signal) => Step::Joystick(signal),
                    None => continue,
                },
                request = self.resize_rx.recv() => match request {
                    Some(()) => Step::Resize,
                    None => continue,
                },
                control = self.control_rx.recv() => match control {
                    Some(Control::Stop) | None => Step::Stop,
                },
            };

            match step {
                Step::Tick(now) => {
                    if self.scheduler.on_tick(now) {
                        self.compositor.render_frame(&mut self.events);
                    }
                }
                Step::Host(HostNotification::OrientationChange) => self.on_orientation_change(),
                Step::Host(notification) => {
                    log::debug!("host notification: {notification:?}");
                }
                Step::Joystick(signal) => self.events.emit(CreativeEvent::from(signal)),
                Step::Resize => self.on_resize(),
                Step::Stop => {
                    self.scheduler.stop();
                    log::info!("creative stopped");
                    return;
                }
            }
        }
    }

    /// Recomputes and applies the viewport; the shared path for startup and
    /// every platform resize event.
    pub fn on_resize(&mut self) {
        self.viewport
            .resize_pass(&mut self.compositor, &mut self.events);
    }

    /// Orientation change is an alias for the resize path.
    pub fn on_orientation_change(&mut self) {
        self.on_resize();
    }

    fn init_widgets(&mut self) {
        let sink = JoystickSink::new(self.joystick_tx.clone());
        for widget in &mut self.widgets {
            if let Err(err) = widget.init(&self.joystick_style, sink.clone()) {
                log::warn!("joystick widget failed to init, skipping: {err:#}");
            }
        }
    }
}
