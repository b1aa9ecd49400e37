use bytemuck::{Pod, Zeroable};

/// Position-only vertex: three contiguous floats, tightly packed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PanelVertex {
    pub pos: [f32; 3],
}

impl PanelVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PanelVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Six clip-space positions: a wide panel with a vertical seam at x = 0.2.
pub const PANEL_VERTICES: [PanelVertex; 6] = [
    PanelVertex { pos: [0.2, 0.5, 0.0] },   // seam top
    PanelVertex { pos: [0.2, -0.5, 0.0] },  // seam bottom
    PanelVertex { pos: [-0.5, -0.5, 0.0] }, // bottom left
    PanelVertex { pos: [-0.5, 0.5, 0.0] },  // top left
    PanelVertex { pos: [0.5, 0.5, 0.0] },   // top right
    PanelVertex { pos: [0.5, -0.5, 0.0] },  // bottom right
];

/// Triangle connectivity: two triangles left of the seam, two right of it.
pub const PANEL_INDICES: [u32; 12] = [
    0, 1, 3, // seam-top, seam-bottom, top-left
    1, 2, 3, // seam-bottom, bottom-left, top-left
    0, 1, 4, // seam-top, seam-bottom, top-right
    1, 4, 5, // seam-bottom, top-right, bottom-right
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_covers_twelve_indices() {
        assert_eq!(PANEL_INDICES.len(), 12);
    }

    #[test]
    fn indices_form_whole_triangles() {
        assert_eq!(PANEL_INDICES.len() % 3, 0);
        assert_eq!(PANEL_INDICES.len() / 3, 4);
    }

    #[test]
    fn every_index_references_a_declared_vertex() {
        for &i in &PANEL_INDICES {
            assert!((i as usize) < PANEL_VERTICES.len(), "index {i} out of range");
        }
    }

    #[test]
    fn vertices_are_tightly_packed() {
        assert_eq!(std::mem::size_of::<PanelVertex>(), 12);

        let layout = PanelVertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn positions_lie_in_the_clip_volume() {
        for v in &PANEL_VERTICES {
            assert!(v.pos[0].abs() <= 1.0);
            assert!(v.pos[1].abs() <= 1.0);
            assert_eq!(v.pos[2], 0.0);
        }
    }
}
