//! Fixed-timestep loop driver
//!
//! One thread owns the game. Each cycle drains input, runs exactly one
//! tick, hands a snapshot to the presenter and then blocks until the next
//! tick is due. Blocking in the clock is the only suspension point.

use std::thread;
use std::time::{Duration, Instant};

use crate::{Control, Game, InputQueue, Snapshot};

/// Blocking "wait until next tick" primitive
pub trait TickClock {
    /// Called once before the first tick runs
    fn start(&mut self) {}

    fn wait_next_tick(&mut self);
}

/// Host side of the input feed
pub trait InputSource {
    /// Move every event received since the last call into `queue`
    fn drain(&mut self, queue: &mut InputQueue);
}

/// Host side of the render output
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Wall-clock pacing with `thread::sleep`.
///
/// A host that falls behind skips the missed ticks rather than running
/// several back to back.
pub struct SleepClock {
    period: Duration,
    deadline: Option<Instant>,
}

impl SleepClock {
    pub fn new(tick_rate: u32) -> Self {
        let period = Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)));
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickClock for SleepClock {
    fn start(&mut self) {
        self.deadline = Some(Instant::now() + self.period);
    }

    fn wait_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = *self.deadline.get_or_insert(now + self.period);
        if now < deadline {
            thread::sleep(deadline - now);
            self.deadline = Some(deadline + self.period);
        } else {
            let behind = now - deadline;
            if behind > self.period {
                tracing::debug!("Loop fell behind by {:?}, skipping missed ticks", behind);
            }
            self.deadline = Some(now + self.period);
        }
    }
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub last: Snapshot,
}

/// Drive `game` until a quit or cancel event arrives
pub fn run(
    game: &mut Game,
    clock: &mut dyn TickClock,
    input: &mut dyn InputSource,
    presenter: &mut dyn Presenter,
) -> RunSummary {
    tracing::info!("Game loop started at {} ticks/s", game.config.tick_rate);

    clock.start();
    loop {
        input.drain(&mut game.input);
        if game.tick() == Control::Quit {
            break;
        }
        presenter.present(&game.snapshot());
        clock.wait_next_tick();
    }

    let summary = RunSummary {
        ticks: game.tick_count(),
        last: game.snapshot(),
    };
    tracing::info!(
        "Game loop ended after {} ticks, score {}-{}",
        summary.ticks,
        summary.last.left_score,
        summary.last.right_score
    );
    summary
}
