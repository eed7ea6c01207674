//! Integration tests for termcolorx.

mod helpers;

mod colored_test;
mod message_test;
mod theme_test;
