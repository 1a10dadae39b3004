//! Interactive cloth viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Cloth`] and an
//! [`OrbitCamera`] and implements [`eframe::App`] to step, render and tune
//! the simulation through an egui UI.

use crate::camera::OrbitCamera;
use cloth_core::Cloth;
use eframe::App;
use glam::{Mat4, Vec3};

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true`, step the cloth by the time elapsed since the
///    previous frame ([`Viewer::advance`]).
/// 3. Render the axes, the cloth edges and the pinned nodes.
///
/// ### Fields
/// - `cloth` - The simulation being viewed.
/// - `camera` - Orbit camera used for projection.
///
/// - `running` - Whether the cloth is stepped every frame.
/// - `previous_time` - egui time of the last automatic step, `None` right
///   after start or resume so the first frame steps by zero.
/// - `last_step_dt` - Delta used by the last step (for display only).
///
/// - `point_size`, `line_width`, `background` - Drawing settings.
pub struct Viewer {
    cloth: Cloth,
    camera: OrbitCamera,

    running: bool,
    previous_time: Option<f64>,
    last_step_dt: f64,

    point_size: f32,
    line_width: f32,
    background: egui::Color32,
}

impl Viewer {
    /// Fixed tick used by the "Step" button.
    const MANUAL_DT: f32 = 1.0 / 60.0;

    /// Creates a running viewer framing the whole cloth.
    pub fn new(cloth: Cloth) -> Self {
        let (w, h) = (cloth.width() as f32, cloth.height() as f32);
        let target = Vec3::new((w - 1.0) * 0.5, -(h - 1.0) * 0.25, (h - 1.0) * 0.25);
        let camera = OrbitCamera::looking_at(target, w.max(h) * 1.8 + 2.0);

        Self {
            cloth,
            camera,
            running: true,
            previous_time: None,
            last_step_dt: 0.0,
            point_size: 4.0,
            line_width: 1.0,
            background: egui::Color32::from_gray(30),
        }
    }

    /// Puts the cloth back in its flat layout. Tunables and camera are kept.
    fn reset(&mut self) {
        self.cloth.reset();
        self.previous_time = None;
        self.last_step_dt = 0.0;
    }

    /// Steps the cloth once and pauses if it diverged.
    fn step_once(&mut self, dt: f32) {
        self.cloth.step(dt);
        self.last_step_dt = f64::from(dt);

        if let Err(e) = self.cloth.check_finite() {
            log::warn!("{e}; pausing");
            self.running = false;
        }
    }

    /// Steps by the time elapsed since the previous call.
    ///
    /// ### Parameters
    /// - `now` - Monotonic time in seconds (egui input time).
    fn advance(&mut self, now: f64) {
        let dt = self.previous_time.map_or(0.0, |prev| now - prev);
        self.previous_time = Some(now);
        self.step_once(dt as f32);
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
        self.previous_time = None;
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.toggle_running();
                }

                if ui.button("Step").clicked() {
                    self.step_once(Self::MANUAL_DT);
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let frame_dt = ctx.input(|i| i.stable_dt).max(f32::EPSILON);
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "{:.3} ms/frame ({:.1} FPS)",
                    frame_dt * 1000.0,
                    1.0 / frame_dt
                ));
                ui.separator();
                ui.label(format!("dt last = {:.4} s", self.last_step_dt));
                ui.label(format!(
                    "nodes = {} ({}x{})",
                    self.cloth.node_count(),
                    self.cloth.width(),
                    self.cloth.height()
                ));
            });
        });
    }

    /// Builds the right-hand panel with simulation and drawing settings.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Cloth");

                ui.separator();
                let mut gravity = self.cloth.gravity();
                if ui
                    .add(egui::Slider::new(&mut gravity, 0.0..=9.0).text("Gravity"))
                    .changed()
                    && let Err(e) = self.cloth.set_gravity(gravity)
                {
                    log::warn!("{e}");
                }

                let mut stiffness = self.cloth.stiffness();
                if ui
                    .add(egui::Slider::new(&mut stiffness, 0.0..=20.0).text("Stiffness"))
                    .changed()
                    && let Err(e) = self.cloth.set_stiffness(stiffness)
                {
                    log::warn!("{e}");
                }

                ui.separator();
                ui.label("Drawing");
                ui.add(egui::Slider::new(&mut self.point_size, 0.1..=10.0).text("Point size"));
                ui.add(egui::Slider::new(&mut self.line_width, 0.1..=10.0).text("Line width"));
                ui.horizontal(|ui| {
                    ui.label("Background:");
                    ui.color_edit_button_srgba(&mut self.background);
                });

                ui.separator();
                let mut fov_degrees = self.camera.fov.to_degrees();
                if ui
                    .add(egui::Slider::new(&mut fov_degrees, 15.0..=180.0).text("Field of view"))
                    .changed()
                {
                    self.camera.fov = fov_degrees.to_radians();
                }
            });
    }

    /// Draws a world-space segment if both ends are in front of the camera.
    fn draw_segment(
        &self,
        painter: &egui::Painter,
        vp: &Mat4,
        rect: egui::Rect,
        a: Vec3,
        b: Vec3,
        stroke: egui::Stroke,
    ) {
        if let (Some(a), Some(b)) = (
            self.camera.project(vp, a, rect),
            self.camera.project(vp, b, rect),
        ) {
            painter.line_segment([a, b], stroke);
        }
    }

    /// Builds the central panel where the cloth is drawn and the camera driven.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            if response.dragged() {
                self.camera.orbit(response.drag_delta());
            }

            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 && response.hovered() {
                self.camera.zoom(scroll);
            }

            if self.running {
                let now = ctx.input(|i| i.time);
                self.advance(now);
                ctx.request_repaint();
            }

            painter.rect_filled(rect, 0.0, self.background);

            let aspect = rect.width() / rect.height().max(1.0);
            let vp = self.camera.view_proj(aspect);

            // Axes.
            for (axis, color) in [
                (Vec3::X, egui::Color32::RED),
                (Vec3::Y, egui::Color32::GREEN),
                (Vec3::Z, egui::Color32::BLUE),
            ] {
                self.draw_segment(
                    &painter,
                    &vp,
                    rect,
                    Vec3::ZERO,
                    axis,
                    egui::Stroke::new(2.0, color),
                );
            }

            // Cloth edges.
            let stroke = egui::Stroke::new(self.line_width, egui::Color32::WHITE);
            for (a, b) in self.cloth.edges() {
                self.draw_segment(
                    &painter,
                    &vp,
                    rect,
                    self.cloth.position(a),
                    self.cloth.position(b),
                    stroke,
                );
            }

            // Pinned nodes.
            for anchor in &self.cloth.anchors().points {
                if let Some(p) = self
                    .camera
                    .project(&vp, self.cloth.position(anchor.node), rect)
                {
                    painter.circle_filled(p, self.point_size, egui::Color32::LIGHT_RED);
                }
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
