/// Globe vertex after rotation, with its terminal cell position
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: [f64; 3],
    pub screen_position: [f64; 2],
}

impl Vertex {
    /// Points with positive Z after rotation face the camera
    pub fn faces_camera(&self) -> bool {
        self.position[2] >= 0.0
    }
}
