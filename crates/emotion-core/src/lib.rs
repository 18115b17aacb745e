pub mod compositor;
pub mod constants;
pub mod debounce;
pub mod outline;
pub mod pacing;
pub mod palette;
pub mod rng;
pub mod shading;
pub mod shape;
pub mod splash;

pub use compositor::*;
pub use constants::*;
pub use debounce::*;
pub use outline::*;
pub use pacing::*;
pub use palette::*;
pub use rng::*;
pub use shading::*;
pub use shape::*;
pub use splash::*;

// Shader bundled as a string constant
pub static FLUID_WGSL: &str = include_str!("../shaders/fluid.wgsl");
