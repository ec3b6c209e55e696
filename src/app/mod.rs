// Presentation for the command-line front end. Not used by the search core.

pub mod render;
