//! Pushlight - Button-to-LED Pipeline Firmware
//!
//! Board bring-up for the Raspberry Pi Pico: configures the button and
//! LED pins, constructs the pipeline queues, and starts the executors.
//!
//! Hardware: Raspberry Pi Pico (RP2040)
//! Button: GPIO 5, internal pull-up (reads low while pressed)
//! LED: GPIO 13, active high, off at boot

#![no_std]
#![no_main]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Executor;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use panic_halt as _;
use static_cell::StaticCell;

use pushlight::channels::Pipeline;
use pushlight::hardware::{self, GpioButton, GpioLed};
use pushlight::supervisor::AppSupervisor;

static PIPELINE: StaticCell<Pipeline> = StaticCell::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let supervisor = AppSupervisor::new();
    supervisor.print_startup_banner();

    let button = GpioButton::new(Input::new(p.PIN_5, Pull::Up));
    let led = GpioLed::new(Output::new(p.PIN_13, Level::Low)); // off at boot

    // Queues are created once here, before any task runs, and handed to
    // the tasks by reference.
    let pipeline: &'static Pipeline = PIPELINE.init(Pipeline::new());

    // Consumer stages go on the interrupt executors first; if this fails
    // the device is unusable, so halt before anything is scheduled.
    if let Err(e) = hardware::start_consumer_stages(pipeline, led) {
        error!("Failed to start pipeline consumer stages: {:?}", e);
        core::panic!("startup failed");
    }

    supervisor.print_init_success();

    // Thread-mode executor runs the sampler and the supervisor at the
    // lowest priority.
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(hardware::sampler_task(button, &pipeline.raw_levels)));
        unwrap!(spawner.spawn(supervisor_task(supervisor)));
    })
}

#[embassy_executor::task]
async fn supervisor_task(mut supervisor: AppSupervisor) {
    supervisor.run().await;
}
