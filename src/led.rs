//! LED driver stage
//!
//! The consumer end of the pipeline. Writing the LED output is the only
//! externally observable effect of the whole system.

use crate::channels::LedCommandChannel;
use crate::traits::Led;
use crate::types::LedCommand;

/// Driver loop: suspend until a command arrives, then apply it.
pub async fn run_driver<L: Led>(mut led: L, led_commands: &LedCommandChannel) {
    loop {
        match led_commands.receive().await {
            LedCommand::On => led.on(),
            LedCommand::Off => led.off(),
        }
    }
}
