use crate::globe::Globe;
use crate::graphics::{Canvas, Cell};
use crate::input::CellSize;
use crate::math::{globe_rotation, multiply_matrix_vector, Camera};
use crate::state::YawPitch;
use crate::vertex::Vertex;
use std::time::Instant;

/// Fraction of the shorter surface side the globe may span
const GLOBE_FILL: f64 = 0.95;

/// Wireframe globe drawn into a character canvas
pub struct GlobeWidget {
    globe: Globe,
    camera: Camera,
    canvas: Canvas,
    cell_size: CellSize,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    /// Show FPS and angles in the status line
    pub debug: bool,
}

impl GlobeWidget {
    pub fn new(globe: Globe, cols: usize, rows: usize, cell_size: CellSize) -> Self {
        GlobeWidget {
            globe,
            camera: Camera::default(),
            canvas: Canvas::new(cols, rows),
            cell_size,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            debug: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.canvas.resize(cols, rows);
    }

    /// Rotates one polyline and maps it to cell coordinates
    fn compute_projected_vertices(&self, rotation: &[[f64; 3]; 3], line: &[[f64; 3]]) -> Vec<Vertex> {
        let px_width = self.canvas.width() as f64 * self.cell_size.width;
        let px_height = self.canvas.height() as f64 * self.cell_size.height;
        let scale = px_width.min(px_height) / 2.0 * GLOBE_FILL;
        let center = [px_width / 2.0, px_height / 2.0];

        line.iter()
            .map(|point| {
                let position = multiply_matrix_vector(rotation, point);
                let [nx, ny] = self.camera.project(&position);
                let screen_x = (center[0] + nx * scale) / self.cell_size.width;
                let screen_y = (center[1] - ny * scale) / self.cell_size.height;
                Vertex {
                    position,
                    screen_position: [screen_x, screen_y],
                }
            })
            .collect()
    }

    /// Draws the globe at `angles`
    pub fn paint(&mut self, angles: YawPitch) {
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let rotation = globe_rotation(angles.yaw, angles.pitch);
        let projected: Vec<Vec<Vertex>> = self
            .globe
            .polylines
            .iter()
            .map(|line| self.compute_projected_vertices(&rotation, line))
            .collect();

        self.canvas.clear();
        for line in &projected {
            for pair in line.windows(2) {
                let facing = pair[0].faces_camera() && pair[1].faces_camera();
                let cell = if facing { Cell::Front } else { Cell::Back };
                self.canvas.draw_line(
                    pair[0].screen_position[0],
                    pair[0].screen_position[1],
                    pair[1].screen_position[0],
                    pair[1].screen_position[1],
                    cell,
                );
            }
        }
    }

    /// Help and state text shown under the globe
    pub fn status_line(&self, angles: YawPitch, reduced_motion: bool) -> String {
        let motion = if reduced_motion { "on" } else { "off" };
        let mut line = format!("drag to spin | m reduced motion ({motion}) | d debug | q quit");
        if self.debug {
            line.push_str(&format!(
                " | {} {} | fps {:.1} | yaw {:.3} pitch {:.3}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                self.fps,
                angles.yaw,
                angles.pitch
            ));
        }
        line
    }
}
