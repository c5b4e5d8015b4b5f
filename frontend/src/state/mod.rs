pub mod instructions;
pub mod nav;
pub mod reveal;
pub mod theme;
