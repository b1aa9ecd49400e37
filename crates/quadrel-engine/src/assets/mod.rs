//! On-disk resource access.
//!
//! Shader stage sources are plain text files read from a single resolved
//! root directory. There is no search path and no cache; a lookup either
//! yields the full file contents or a typed error naming the path.

mod shader;

pub use shader::{ShaderRoot, SourceNotFound};
