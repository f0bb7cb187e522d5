//! Hardware configuration for Pushlight
//! RP2040-based button-to-LED pipeline device

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

/// Button A input. Internal pull-up enabled, so the pin reads high while
/// the button is released and low while it is held down.
pub const BUTTON_PIN: u8 = 5; // GPIO 5

/// Red LED output, active high.
pub const LED_PIN: u8 = 13; // GPIO 13

// ===================================================================
// Task Timing
// ===================================================================

/// Button sampling period. The sampler wakes on an absolute schedule at
/// this rate regardless of how long the read + send work takes.
pub const BUTTON_SAMPLE_PERIOD_MS: u64 = 100;

// ===================================================================
// Queue Configuration
// ===================================================================

/// Capacity of the raw-level queue between sampler and interpreter.
pub const RAW_LEVEL_QUEUE_DEPTH: usize = 10;

/// Capacity of the command queue between interpreter and LED driver.
pub const LED_COMMAND_QUEUE_DEPTH: usize = 10;
