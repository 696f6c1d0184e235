pub mod manifest;
pub mod tool_probe;
pub mod readme_renderer;
pub mod directory_scaffolder;
pub mod stack_extras;
pub mod git_initializer;
