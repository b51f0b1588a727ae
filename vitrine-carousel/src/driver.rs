//! Tokio driver for a single carousel.
//!
//! The driver task owns the [`Carousel`] and is the only place time exists:
//! it keeps the auto-play deadline and the resize debounce deadline, and
//! selects over them and the message channel. Everything runs on one task,
//! so the controller never sees concurrent access.

use std::future;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace};

use crate::controller::{Carousel, CarouselSnapshot};
use crate::messages::CarouselMessage;
use crate::types::CarouselId;
use crate::view::CarouselView;

/// Create a handle/driver pair for `carousel`. Run the driver with
/// [`CarouselDriver::run`] or [`CarouselDriver::spawn`].
pub fn channel<V: CarouselView>(
    carousel: Carousel<V>,
) -> (CarouselHandle, CarouselDriver<V>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = CarouselHandle {
        id: carousel.id(),
        tx,
    };
    let driver = CarouselDriver {
        auto_interval: carousel.options().auto_play_interval(),
        resize_debounce: carousel.options().resize_debounce(),
        carousel,
        rx,
        armed_epoch: None,
        auto_deadline: None,
        resize_deadline: None,
    };
    (handle, driver)
}

/// Cloneable input side of a running carousel.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    id: CarouselId,
    tx: mpsc::UnboundedSender<CarouselMessage>,
}

impl CarouselHandle {
    pub fn id(&self) -> CarouselId {
        self.id
    }

    /// Queue a message. Returns `false` once the driver has stopped.
    pub fn send(&self, message: CarouselMessage) -> bool {
        self.tx.send(message).is_ok()
    }

    /// Round trip to the driver for the current state.
    pub async fn snapshot(&self) -> Option<CarouselSnapshot> {
        let (reply, rx) = oneshot::channel();
        if !self.send(CarouselMessage::Inspect(reply)) {
            return None;
        }
        rx.await.ok()
    }

    pub fn shutdown(&self) -> bool {
        self.send(CarouselMessage::Shutdown)
    }
}

#[derive(Debug)]
pub struct CarouselDriver<V> {
    carousel: Carousel<V>,
    rx: mpsc::UnboundedReceiver<CarouselMessage>,
    auto_interval: Duration,
    resize_debounce: Duration,
    /// Auto-play epoch the current deadline was armed for.
    armed_epoch: Option<u64>,
    auto_deadline: Option<Instant>,
    resize_deadline: Option<Instant>,
}

impl<V: CarouselView> CarouselDriver<V> {
    /// Process messages and timers until `Shutdown` arrives or every handle
    /// is dropped. Returns the torn-down controller.
    pub async fn run(mut self) -> Carousel<V> {
        debug!(carousel = %self.carousel.id(), "Carousel driver started");

        loop {
            self.rearm_auto();

            tokio::select! {
                message = self.rx.recv() => match message {
                    None | Some(CarouselMessage::Shutdown) => break,
                    Some(CarouselMessage::Resized) => {
                        // Every resize event restarts the quiet period
                        self.resize_deadline =
                            Some(Instant::now() + self.resize_debounce);
                    }
                    Some(message) => self.carousel.update(message),
                },
                _ = sleep_until_opt(self.auto_deadline) => {
                    self.auto_deadline =
                        Some(Instant::now() + self.auto_interval);
                    self.carousel.auto_tick();
                }
                _ = sleep_until_opt(self.resize_deadline) => {
                    self.resize_deadline = None;
                    trace!(carousel = %self.carousel.id(), "Resize settled");
                    self.carousel.resize();
                }
            }
        }

        self.carousel.teardown();
        debug!(carousel = %self.carousel.id(), "Carousel driver stopped");
        self.carousel
    }

    /// Run the driver on the tokio runtime.
    pub fn spawn(self) -> JoinHandle<Carousel<V>>
    where
        V: Send + 'static,
    {
        tokio::spawn(self.run())
    }

    /// A new auto-play epoch means the schedule was (re)started: the next
    /// tick is a full interval from now. Idle clears the deadline.
    fn rearm_auto(&mut self) {
        let epoch = self.carousel.auto_play().epoch();
        if epoch == self.armed_epoch {
            return;
        }
        self.armed_epoch = epoch;
        self.auto_deadline = epoch.map(|_| Instant::now() + self.auto_interval);
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending::<()>().await,
    }
}
