pub mod tag_commands;
