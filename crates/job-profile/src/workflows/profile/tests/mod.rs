mod common;
mod preference;
mod title;
