use std::time::Instant;

use kiss3d::event::{Action, EventManager, Key, WindowEvent};

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_SAVE: Key = Key::S;
const KEY_RELOAD: Key = Key::L;
const KEY_QUIT: Key = Key::Q;
const KEY_QUIT_ALT: Key = Key::Escape;

/// Something the user asked for. The viewer applies these once it's done
/// reading the frame's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    SpeedUp,
    SlowDown,
    Save,
    Reload,
    Quit,
}

pub fn command_for(event: &WindowEvent) -> Option<Command> {
    let key = match event {
        WindowEvent::Key(key, Action::Press, _) => *key,
        WindowEvent::Close => return Some(Command::Quit),
        _ => return None,
    };
    match key {
        KEY_TOGGLE_PAUSE => Some(Command::TogglePause),
        KEY_SPEED_UP => Some(Command::SpeedUp),
        KEY_SLOW_DOWN => Some(Command::SlowDown),
        KEY_SAVE => Some(Command::Save),
        KEY_RELOAD => Some(Command::Reload),
        KEY_QUIT | KEY_QUIT_ALT => Some(Command::Quit),
        _ => None,
    }
}

pub struct Controller {
    fps_counter: FpsCounter,
}

struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: u128,
    previous_fps: f64,
}

impl FpsCounter {
    fn new(window_size_millis: u128) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            window_size_millis,
            previous_fps: 0.0,
        }
    }

    fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed().as_millis();
        if elapsed > self.window_size_millis {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed as f64;
            self.instant = Instant::now();
            self.counter = 0;
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn process_events(&mut self, mut events: EventManager) -> Vec<Command> {
        events
            .iter()
            .filter_map(|event| command_for(&event.value))
            .collect()
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.previous_fps
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}
