//! Button state interpretation stage
//!
//! Sits between the sampler and the LED driver: waits for raw button
//! levels and turns each one into an LED command.

use crate::channels::{LedCommandChannel, RawLevelChannel};
use crate::types::LedCommand;

/// Interpreter loop.
///
/// Suspends until a raw level arrives, maps it (pressed = on, released =
/// off), and forwards the command with a non-blocking send. One command
/// per sample; a full command queue drops the command, same policy as
/// the sampler.
pub async fn run_interpreter(raw_levels: &RawLevelChannel, led_commands: &LedCommandChannel) {
    loop {
        let level = raw_levels.receive().await;
        let _ = led_commands.try_send(LedCommand::for_level(level));
    }
}
