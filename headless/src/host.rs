use game_core::{InputEvent, InputQueue, InputSource, Key, MatchState, Presenter, Snapshot};

const SERVE_EVERY: u64 = 45;
const HOLD_TICKS: u64 = 8;

// (ticks until the next press, key name), repeated
const LEFT_PATTERN: [(u64, &str); 2] = [(17, "w"), (23, "s")];
const RIGHT_PATTERN: [(u64, &str); 2] = [(29, "ArrowUp"), (13, "ArrowDown")];

/// Synthetic keyboard: serves regularly, wiggles both paddles and quits
/// once the tick budget is spent.
pub struct ScriptedInput {
    tick: u64,
    max_ticks: u64,
    held: Vec<(Key, u64)>, // key and the tick it is released on
}

impl ScriptedInput {
    pub fn new(max_ticks: u64) -> Self {
        Self {
            tick: 0,
            max_ticks,
            held: Vec::new(),
        }
    }

    fn press(&mut self, queue: &mut InputQueue, name: &str) {
        let Some(key) = Key::from_key_name(name) else {
            return;
        };
        if self.held.iter().any(|(held, _)| *held == key) {
            return;
        }
        queue.key_down(key);
        self.held.push((key, self.tick + HOLD_TICKS));
    }

    fn press_pattern(&mut self, queue: &mut InputQueue, pattern: [(u64, &str); 2]) {
        let cycle: u64 = pattern.iter().map(|(every, _)| every).sum();
        let mut at = self.tick % cycle;
        for (every, name) in pattern {
            if at == 0 {
                self.press(queue, name);
                return;
            }
            if at < every {
                return;
            }
            at -= every;
        }
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, queue: &mut InputQueue) {
        if self.tick >= self.max_ticks {
            queue.push(InputEvent::Quit);
            return;
        }

        let tick = self.tick;
        self.held.retain(|(key, release)| {
            if *release <= tick {
                queue.key_up(*key);
                false
            } else {
                true
            }
        });

        if tick % SERVE_EVERY == 0 {
            self.press(queue, "Space");
        }
        self.press_pattern(queue, LEFT_PATTERN);
        self.press_pattern(queue, RIGHT_PATTERN);

        self.tick += 1;
    }
}

/// Logs match state and score changes instead of drawing frames
#[derive(Default)]
pub struct LogPresenter {
    last: Option<(MatchState, u8, u8)>,
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        let current = (
            snapshot.match_state,
            snapshot.left_score,
            snapshot.right_score,
        );
        if self.last == Some(current) {
            return;
        }
        self.last = Some(current);

        match snapshot.winner {
            Some(side) => tracing::info!(
                "tick {}: GAME OVER, {:?} wins {}-{}",
                snapshot.tick,
                side,
                snapshot.left_score,
                snapshot.right_score
            ),
            None => tracing::info!(
                "tick {}: {:?} {}-{} ball at ({:.1}, {:.1})",
                snapshot.tick,
                snapshot.match_state,
                snapshot.left_score,
                snapshot.right_score,
                snapshot.ball.center().x,
                snapshot.ball.center().y
            ),
        }
    }
}
