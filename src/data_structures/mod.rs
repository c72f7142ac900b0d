//! Asset data structures: colours, textures, geometry and materials.
//!
//! Every type exists in a CPU form, produced by the loader and safe to inspect
//! in tests, and where it matters a GPU form built from it:
//!
//! - `color` holds RGB colours built from hex literals or CSS-style HSL
//! - `texture` holds sampling settings, decoded images and GPU textures
//! - `geometry` holds vertices, indexed triangle lists and GPU meshes
//! - `material` holds Phong materials, their uniforms and bind groups

pub mod color;
pub mod geometry;
pub mod material;
pub mod texture;
