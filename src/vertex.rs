//! Vertex layouts used by the lessons and their fixed geometry.

use glam::Vec3;
use glow::HasContext;

use crate::abs::Vertex;

/// A bare position, bound to attribute location 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

impl Vertex for Position {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<Position>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

/// Position at location 0 and an RGB color at location 1, interleaved.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColoredVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColoredVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

/// Left, right, top.
pub const TRIANGLE: [Position; 3] = [
    Position(Vec3::new(-0.5, -0.5, 0.0)),
    Position(Vec3::new(0.5, -0.5, 0.0)),
    Position(Vec3::new(0.0, 0.5, 0.0)),
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Top right, bottom right, bottom left, top left.
pub const RECTANGLE: [Position; 4] = [
    Position(Vec3::new(0.5, 0.5, 0.0)),
    Position(Vec3::new(0.5, -0.5, 0.0)),
    Position(Vec3::new(-0.5, -0.5, 0.0)),
    Position(Vec3::new(-0.5, 0.5, 0.0)),
];

pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Red bottom right, green bottom left, blue top.
pub const COLORED_TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    ColoredVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    ColoredVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
];
