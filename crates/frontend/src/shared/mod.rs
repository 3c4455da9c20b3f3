pub mod class_utils;
pub mod components;
pub mod icons;
pub mod labels;
pub mod modal;
