use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    Input(Event),
    /// The tick interval elapsed. Carries the real time since the last tick.
    Tick(Duration),
}

/// Fixed-rate game loop over an input driver.
///
/// Input is dispatched as soon as it arrives; between inputs the loop sleeps in
/// `poll` until the next tick is due. A burst of input is drained in one go so
/// drags do not lag behind the pointer.
pub struct EventLoop<D> {
    driver: D,
    tick: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, tick: Duration) -> Self {
        Self {
            driver,
            tick: tick.max(Duration::from_millis(1)),
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Runs until the handler returns [`ControlFlow::Quit`].
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, LoopEvent) -> io::Result<ControlFlow>,
    {
        let mut last_tick = Instant::now();
        loop {
            let since = last_tick.elapsed();
            if since >= self.tick {
                last_tick = Instant::now();
                if handler(&mut self.driver, LoopEvent::Tick(since))? == ControlFlow::Quit {
                    return Ok(());
                }
            }

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if self.driver.poll(timeout)? {
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, LoopEvent::Input(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}
