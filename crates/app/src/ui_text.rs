//! Text for the counter, the day banner and the end-of-run summary.

use daycrawl_core::{AudioCue, ResourceReason};

use crate::app_loop::AppMode;

pub fn food_text(value: i32) -> String {
    format!("Food: {value}")
}

/// Counter line after a change; pickups and hits show the amount in front.
pub fn counter_text(value: i32, delta: i32, reason: ResourceReason) -> String {
    match reason {
        ResourceReason::Step => food_text(value),
        ResourceReason::Food | ResourceReason::Soda => format!("+{delta} Food: {value}"),
        ResourceReason::Hit => format!("-{} Food: {value}", delta.unsigned_abs()),
    }
}

pub fn day_banner(day: u32) -> String {
    format!("Day {day}")
}

pub fn starved_text(days: u32) -> String {
    format!("After {days} days, you starved.")
}

/// Full-screen overlay for the current mode, if any.
pub fn overlay_text(mode: &AppMode) -> Option<String> {
    match mode {
        AppMode::DayBanner { day } => Some(day_banner(*day)),
        AppMode::Playing => None,
        AppMode::Starved { days } => Some(starved_text(*days)),
    }
}

pub fn cue_name(cue: AudioCue) -> &'static str {
    match cue {
        AudioCue::Move => "footstep",
        AudioCue::Chop => "chop",
        AudioCue::CollectFood => "fruit",
        AudioCue::CollectSoda => "soda",
        AudioCue::Hit => "scavenger_hit",
        AudioCue::GameOver => "die",
    }
}
