//! Wall clock and dashboard overlay.
//!
//! The clock text is refreshed by a repeating timer that only ticks while the
//! clock is started, so a stopped clock costs nothing per frame.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::types::{SimulationTime, j2000_seconds_to_date_string, unix_now, unix_to_clock_string};
use crate::ui::icons;

/// Clock configuration.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ClockSettings {
    /// Time between clock text refreshes.
    pub period: Duration,
    /// Whether the dashboard is drawn at all.
    pub visible: bool,
    /// Whether the clock starts running.
    pub start_running: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
            visible: true,
            start_running: true,
        }
    }
}

/// Wall-clock display state.
#[derive(Resource, Debug)]
pub struct WallClock {
    timer: Timer,
    running: bool,
    text: String,
    refreshes: u64,
}

impl FromWorld for WallClock {
    fn from_world(world: &mut World) -> Self {
        let settings = world.get_resource::<ClockSettings>().copied().unwrap_or_default();
        let mut clock = Self::new(settings.period);
        if settings.start_running {
            clock.start();
        }
        clock
    }
}

impl WallClock {
    /// A stopped clock refreshing every `period` once started.
    pub fn new(period: Duration) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
            running: false,
            text: String::new(),
            refreshes: 0,
        }
    }

    /// Start refreshing; the text is updated immediately.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.timer.reset();
        self.refresh(unix_now());
    }

    /// Stop refreshing. The last text stays visible.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of text refreshes so far.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// Advance the timer by `delta`; refresh the text from `now_unix` when it fires.
    ///
    /// Returns whether the text was refreshed.
    pub fn tick(&mut self, delta: Duration, now_unix: i64) -> bool {
        if !self.running {
            return false;
        }
        if self.timer.tick(delta).just_finished() {
            self.refresh(now_unix);
            return true;
        }
        false
    }

    fn refresh(&mut self, now_unix: i64) {
        self.text = format!("{} UTC", unix_to_clock_string(now_unix));
        self.refreshes += 1;
    }
}

/// Drive the wall clock from frame time.
pub fn tick_wall_clock(time: Res<Time>, mut clock: ResMut<WallClock>) {
    if !clock.is_running() {
        return;
    }
    clock.tick(time.delta(), unix_now());
}

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 200);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const DIM: Color32 = Color32::from_rgb(120, 120, 130);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
}

/// Dashboard in the top-left corner: clock, epoch and time controls.
pub fn dashboard_system(
    mut contexts: EguiContexts,
    settings: Res<ClockSettings>,
    mut clock: ResMut<WallClock>,
    mut sim_time: ResMut<SimulationTime>,
) {
    if !settings.visible {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("dashboard"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    render_clock(ui, &mut clock);
                    ui.add_space(4.0);
                    render_epoch(ui, &mut sim_time);
                });
        });
}

fn render_clock(ui: &mut egui::Ui, clock: &mut WallClock) {
    ui.horizontal(|ui| {
        let (icon, color, tooltip) = if clock.is_running() {
            (icons::CLOCK, colors::TEXT, "Stop clock (C)")
        } else {
            (icons::CLOCK_STOPPED, colors::DIM, "Start clock (C)")
        };

        let button = egui::Button::new(egui::RichText::new(icon).size(18.0).color(color)).frame(false);
        if ui.add(button).on_hover_text(tooltip).clicked() {
            if clock.is_running() {
                clock.stop();
            } else {
                clock.start();
            }
        }

        ui.label(
            egui::RichText::new(clock.text())
                .monospace()
                .size(22.0)
                .color(color),
        );
    });
}

fn render_epoch(ui: &mut egui::Ui, sim_time: &mut SimulationTime) {
    ui.horizontal(|ui| {
        let (icon, color, tooltip) = if sim_time.paused {
            (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
        } else {
            (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
        };
        if ui
            .add(egui::Button::new(egui::RichText::new(icon).size(16.0).color(color)).frame(false))
            .on_hover_text(tooltip)
            .clicked()
        {
            sim_time.paused = !sim_time.paused;
        }

        if ui
            .add(
                egui::Button::new(egui::RichText::new(icons::RESET).size(16.0).color(colors::TEXT))
                    .frame(false),
            )
            .on_hover_text("Back to launch epoch (Home)")
            .clicked()
        {
            sim_time.reset();
        }

        ui.label(
            egui::RichText::new(j2000_seconds_to_date_string(sim_time.current))
                .monospace()
                .color(colors::TEXT),
        );
    });
}
