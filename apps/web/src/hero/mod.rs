// Hero section: the typewriter role rotation and its event stream.

pub mod handlers;
pub mod rotation;
