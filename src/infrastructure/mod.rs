//! 基础设施层

pub mod image;
pub mod logger;
