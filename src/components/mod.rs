//! Reusable UI components shared by several pages.

pub mod nav_bar;
