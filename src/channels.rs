//! Inter-task communication channels
//!
//! This module defines the two bounded queues connecting the pipeline
//! stages. `CriticalSectionRawMutex` is required here: producer and
//! consumer sit on executors at different interrupt priority levels.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::config::{LED_COMMAND_QUEUE_DEPTH, RAW_LEVEL_QUEUE_DEPTH};
use crate::types::{ButtonLevel, LedCommand};

/// Queue carrying raw button levels from the sampler to the interpreter.
pub type RawLevelChannel = Channel<CriticalSectionRawMutex, ButtonLevel, RAW_LEVEL_QUEUE_DEPTH>;

/// Queue carrying LED commands from the interpreter to the driver.
pub type LedCommandChannel = Channel<CriticalSectionRawMutex, LedCommand, LED_COMMAND_QUEUE_DEPTH>;

/// Both pipeline queues, constructed once at startup and handed to the
/// tasks by reference. Each queue has exactly one producer task and one
/// consumer task; nothing else may touch them.
pub struct Pipeline {
    pub raw_levels: RawLevelChannel,
    pub led_commands: LedCommandChannel,
}

impl Pipeline {
    pub const fn new() -> Self {
        Self {
            raw_levels: Channel::new(),
            led_commands: Channel::new(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
