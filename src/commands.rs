//! Single-consumer command queue between input sources and the game.
//!
//! Any number of [`CommandSender`] clones may push commands from any thread;
//! the [`CommandQueue`] is owned by the game and drained once per tick.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::InputError;
use crate::input::Direction;

/// Deferred request applied at the start of the next tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Steer(Direction),
    Reset,
}

/// Producer half of the command queue.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Queues a steering command. Returns false when the game is gone.
    pub fn steer(&self, direction: Direction) -> bool {
        self.send(Command::Steer(direction))
    }

    /// Validates a raw `(dx, dy)` vector and queues it.
    ///
    /// Vectors that are not one of the five legal directions never reach the
    /// queue. `Ok(false)` means the game is gone.
    pub fn set_direction(&self, dx: i32, dy: i32) -> Result<bool, InputError> {
        let direction = Direction::try_from((dx, dy))?;
        Ok(self.steer(direction))
    }

    /// Queues a restart. Returns false when the game is gone.
    pub fn reset(&self) -> bool {
        self.send(Command::Reset)
    }

    /// Queues an arbitrary command. Returns false when the game is gone.
    pub fn send(&self, command: Command) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Consumer half of the command queue.
#[derive(Debug)]
pub struct CommandQueue {
    rx: Receiver<Command>,
}

impl CommandQueue {
    /// Removes and returns everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Command> {
        self.rx.try_iter().collect()
    }
}

/// Creates a connected sender/queue pair.
#[must_use]
pub fn command_channel() -> (CommandSender, CommandQueue) {
    let (tx, rx) = mpsc::channel();
    (CommandSender { tx }, CommandQueue { rx })
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{Command, command_channel};
    use crate::error::InputError;
    use crate::input::Direction;

    #[test]
    fn drain_returns_commands_in_order() {
        let (sender, queue) = command_channel();

        assert!(sender.steer(Direction::Up));
        assert!(sender.reset());
        assert!(sender.steer(Direction::Left));

        assert_eq!(
            queue.drain(),
            vec![
                Command::Steer(Direction::Up),
                Command::Reset,
                Command::Steer(Direction::Left),
            ]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn invalid_vectors_never_reach_the_queue() {
        let (sender, queue) = command_channel();

        assert_eq!(
            sender.set_direction(1, -1),
            Err(InputError::InvalidDirection { dx: 1, dy: -1 })
        );
        assert_eq!(sender.set_direction(0, 1), Ok(true));

        assert_eq!(queue.drain(), vec![Command::Steer(Direction::Down)]);
    }

    #[test]
    fn senders_work_across_threads() {
        let (sender, queue) = command_channel();
        let remote = sender.clone();

        thread::spawn(move || {
            remote.steer(Direction::Right);
        })
        .join()
        .expect("sender thread should not panic");

        assert_eq!(queue.drain(), vec![Command::Steer(Direction::Right)]);
    }

    #[test]
    fn send_fails_once_queue_is_dropped() {
        let (sender, queue) = command_channel();
        drop(queue);

        assert!(!sender.reset());
    }
}
