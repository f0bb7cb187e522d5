//! Hardware adapters and task scheduling
//!
//! This module wraps the RP2040 GPIO pins behind the pipeline's port
//! traits and places the three pipeline stages on their executors. The
//! two consumer stages run on interrupt executors so that a pending LED
//! update is always serviced before new samples:
//!
//! - LED driver:        `SWI_IRQ_1` at priority P2 (highest)
//! - state interpreter: `SWI_IRQ_0` at priority P3
//! - button sampler:    thread-mode executor (lowest)

use defmt::*;
use embassy_executor::{InterruptExecutor, SpawnError};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};

use crate::buttons::run_sampler;
use crate::channels::{LedCommandChannel, Pipeline, RawLevelChannel};
use crate::interpreter::run_interpreter;
use crate::led::run_driver;
use crate::traits::{Button, Led};
use crate::types::ButtonLevel;

// ===================================================================
// GPIO Port Adapters
// ===================================================================

/// Button input read through a GPIO pin with the internal pull-up
/// enabled: the pin reads low while the button is held down.
pub struct GpioButton {
    pin: Input<'static>,
}

impl GpioButton {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl Button for GpioButton {
    fn level(&self) -> ButtonLevel {
        ButtonLevel::from_pin_level(self.pin.is_high())
    }
}

/// Active-high LED output.
pub struct GpioLed {
    pin: Output<'static>,
}

impl GpioLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl Led for GpioLed {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }
}

// ===================================================================
// Pipeline Task Implementations
// ===================================================================

#[embassy_executor::task]
pub async fn sampler_task(button: GpioButton, raw_levels: &'static RawLevelChannel) {
    info!("Button sampler task started");
    run_sampler(button, raw_levels).await;
}

#[embassy_executor::task]
pub async fn interpreter_task(
    raw_levels: &'static RawLevelChannel,
    led_commands: &'static LedCommandChannel,
) {
    info!("State interpreter task started");
    run_interpreter(raw_levels, led_commands).await;
}

#[embassy_executor::task]
pub async fn driver_task(led: GpioLed, led_commands: &'static LedCommandChannel) {
    info!("LED driver task started");
    run_driver(led, led_commands).await;
}

// ===================================================================
// Priority Executor Setup
// ===================================================================

static EXECUTOR_DRIVER: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_INTERPRETER: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_DRIVER.on_interrupt() }
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    unsafe { EXECUTOR_INTERPRETER.on_interrupt() }
}

/// Start the two consumer stages on their interrupt executors.
///
/// Must run before the thread-mode executor takes over; a spawn failure
/// here is fatal to the whole device and is reported to the caller.
pub fn start_consumer_stages(pipeline: &'static Pipeline, led: GpioLed) -> Result<(), SpawnError> {
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_DRIVER.start(interrupt::SWI_IRQ_1);
    spawner.spawn(driver_task(led, &pipeline.led_commands))?;

    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let spawner = EXECUTOR_INTERPRETER.start(interrupt::SWI_IRQ_0);
    spawner.spawn(interpreter_task(&pipeline.raw_levels, &pipeline.led_commands))?;

    Ok(())
}
