//! Common types shared across the Pushlight pipeline
//!
//! The wire values moving through the two queues are small closed enums
//! rather than bare integers, so every match over them is checked for
//! exhaustiveness at compile time.

/// Raw button level produced by the sampler.
///
/// The button is wired with a pull-up: the pin reads high while released
/// and is pulled low while pressed. The GPIO adapter performs that
/// inversion, so consumers only ever see the logical level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum ButtonLevel {
    Pressed,
    Released,
}

impl ButtonLevel {
    /// Interpret a raw pin reading under pull-up wiring (low = pressed).
    pub fn from_pin_level(is_high: bool) -> Self {
        if is_high {
            ButtonLevel::Released
        } else {
            ButtonLevel::Pressed
        }
    }
}

/// Command consumed by the LED driver.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum LedCommand {
    Off,
    On,
}

impl LedCommand {
    /// Map a sampled button level to the command it produces.
    ///
    /// Every sample yields exactly one command; repeated identical levels
    /// are not filtered.
    pub fn for_level(level: ButtonLevel) -> Self {
        match level {
            ButtonLevel::Pressed => LedCommand::On,
            ButtonLevel::Released => LedCommand::Off,
        }
    }
}
