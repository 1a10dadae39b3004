//! Orbit camera projecting world points onto the egui canvas.

use glam::{Mat4, Vec3};

pub struct OrbitCamera {
    pub target: Vec3,
    /// Rotation around the world Y axis, in radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, in radians.
    pub pitch: f32,
    pub distance: f32,
    /// Vertical field of view, in radians.
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    const PITCH_LIMIT: f32 = 1.5;

    pub fn looking_at(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            yaw: 0.6,
            pitch: 0.4,
            distance,
            fov: 60f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov, aspect, self.znear, self.zfar);
        proj * view
    }

    /// Projects a world-space point into `rect`.
    ///
    /// ### Returns
    /// `None` for points behind the camera.
    pub fn project(&self, view_proj: &Mat4, p: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
        let clip = *view_proj * p.extend(1.0);
        if clip.w <= self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let center = rect.center();
        Some(egui::pos2(
            center.x + ndc.x * rect.width() * 0.5,
            center.y - ndc.y * rect.height() * 0.5,
        ))
    }

    /// Rotates the camera by a screen-space drag delta (pixels).
    pub fn orbit(&mut self, drag: egui::Vec2) {
        self.yaw -= drag.x * 0.01;
        self.pitch = (self.pitch + drag.y * 0.01).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Moves the camera towards (positive scroll) or away from the target.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * 0.001).clamp(0.5, 2.0);
        self.distance = (self.distance * factor).clamp(1.0, 500.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn target_projects_to_rect_center() {
        let cam = OrbitCamera::looking_at(Vec3::new(4.5, -2.0, 3.0), 20.0);
        let vp = cam.view_proj(800.0 / 600.0);

        let p = cam.project(&vp, cam.target, rect()).unwrap();

        assert!((p.x - 400.0).abs() < 1e-2 && (p.y - 300.0).abs() < 1e-2, "{p:?}");
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let cam = OrbitCamera::looking_at(Vec3::ZERO, 10.0);
        let vp = cam.view_proj(1.0);
        let behind = cam.eye() + (cam.eye() - cam.target);

        assert!(cam.project(&vp, behind, rect()).is_none());
    }

    #[test]
    fn higher_points_appear_higher_on_screen() {
        let cam = OrbitCamera::looking_at(Vec3::ZERO, 10.0);
        let vp = cam.view_proj(800.0 / 600.0);

        let low = cam.project(&vp, Vec3::ZERO, rect()).unwrap();
        let high = cam.project(&vp, Vec3::Y, rect()).unwrap();

        assert!(high.y < low.y);
    }

    #[test]
    fn orbit_clamps_pitch_and_zoom_clamps_distance() {
        let mut cam = OrbitCamera::looking_at(Vec3::ZERO, 10.0);
        cam.orbit(egui::vec2(0.0, 10_000.0));
        assert_eq!(cam.pitch, OrbitCamera::PITCH_LIMIT);

        for _ in 0..100 {
            cam.zoom(1000.0);
        }
        assert_eq!(cam.distance, 1.0);
    }
}
