//! Application supervisor and monitoring
//!
//! Startup reporting and a periodic uptime heartbeat over the logging
//! channel. Runs at the lowest priority alongside the sampler.

use defmt::*;
use embassy_time::{Duration, Timer};

use crate::config::{BUTTON_PIN, BUTTON_SAMPLE_PERIOD_MS, LED_PIN, RAW_LEVEL_QUEUE_DEPTH};

/// Application supervisor responsible for startup reporting and uptime
/// monitoring.
pub struct AppSupervisor {
    uptime_seconds: u32,
    last_heartbeat: u32,
}

impl AppSupervisor {
    pub fn new() -> Self {
        Self {
            uptime_seconds: 0,
            last_heartbeat: 0,
        }
    }

    /// Print the application startup banner.
    pub fn print_startup_banner(&self) {
        info!("========================================");
        info!("Pushlight v0.1.0");
        info!("Button-to-LED Pipeline Demonstration");
        info!("========================================");
        info!("Hardware: RP2040 (Raspberry Pi Pico)");
        info!("Button: GPIO {} (pull-up, active low)", BUTTON_PIN);
        info!("LED: GPIO {} (active high)", LED_PIN);
        info!("Sampling period: {} ms", BUTTON_SAMPLE_PERIOD_MS);
        info!("Queue depth: {} per stage", RAW_LEVEL_QUEUE_DEPTH);
        info!("========================================");
    }

    /// Print successful initialization message.
    pub fn print_init_success(&self) {
        info!("Pushlight initialized successfully");
        info!("Press button A to light the LED");
    }

    /// Run the supervisor loop.
    pub async fn run(&mut self) {
        info!("Application supervisor started");

        loop {
            Timer::after(Duration::from_secs(10)).await;
            self.uptime_seconds += 10;

            // Print status every 60 seconds
            if self.uptime_seconds - self.last_heartbeat >= 60 {
                self.print_status();
                self.last_heartbeat = self.uptime_seconds;
            }
        }
    }

    fn print_status(&self) {
        let minutes = self.uptime_seconds / 60;
        let hours = minutes / 60;
        let remaining_minutes = minutes % 60;

        if hours > 0 {
            info!("Status: Uptime {}h{}m", hours, remaining_minutes);
        } else {
            info!("Status: Uptime {}m", minutes);
        }
    }

    /// Get current uptime in seconds.
    pub fn uptime(&self) -> u32 {
        self.uptime_seconds
    }
}

impl Default for AppSupervisor {
    fn default() -> Self {
        Self::new()
    }
}
